use crate::list::LinkedList;
use crate::node::Node;

/// 链表的借用迭代器
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(head: Option<&'a Node<T>>, len: usize) -> Self {
        Iter {
            next: head,
            remaining: len,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            self.remaining -= 1;
            &node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// 链表的可变迭代器
pub struct IterMut<'a, T> {
    next: Option<&'a mut Node<T>>,
    remaining: usize,
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(head: Option<&'a mut Node<T>>, len: usize) -> Self {
        IterMut {
            next: head,
            remaining: len,
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.take().map(|node| {
            self.next = node.next.as_deref_mut();
            self.remaining -= 1;
            &mut node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

/// 消费型迭代器
pub struct IntoIter<T>(LinkedList<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop_head()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len(), Some(self.0.len()))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut LinkedList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// 按迭代顺序构造链表
impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        list.append_all(iter);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.append_all(iter);
    }
}

impl<T> From<Vec<T>> for LinkedList<T> {
    fn from(vec: Vec<T>) -> Self {
        vec.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_borrowing_and_consuming_iterators() {
        let mut list = LinkedList::new();
        list.append_all(vec![1, 2]);
        list.insert_head(0);

        let seen: Vec<_> = list.iter().copied().collect();
        assert_eq!(seen, vec![0, 1, 2]);

        for value in &mut list {
            *value += 100;
        }
        assert_eq!(list.to_string(), "[100, 101, 102]");

        list.reverse();
        let drained: Vec<_> = list.into_iter().collect();
        assert_eq!(drained, vec![102, 101, 100]);
    }

    #[test]
    fn test_borrowing_iterators_report_exact_len() {
        let mut list = LinkedList::from(vec!['a', 'b', 'c']);

        let mut iter = list.iter();
        assert_eq!(iter.len(), 3);
        iter.next();
        assert_eq!(iter.size_hint(), (2, Some(2)));
        while iter.next().is_some() {}
        assert_eq!(iter.len(), 0);

        let mut iter_mut = list.iter_mut();
        iter_mut.next();
        assert_eq!(iter_mut.len(), 2);
    }

    #[test]
    fn test_exhausted_into_iter_keeps_returning_none() {
        let mut iter = LinkedList::from(vec![1]).into_iter();
        assert_eq!(iter.next(), Some(1));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
        assert_eq!(iter.len(), 0);
    }

    #[test]
    fn test_iter_mut_keeps_cursors() {
        let mut list = LinkedList::from(vec![1, 2, 3]);
        let cursor = list.cursor_at(2).unwrap();

        list.iter_mut().for_each(|value| *value += 1);
        assert_eq!(list.get_at_cursor(&cursor), Ok(&4));
    }

    #[test]
    fn test_from_vec_and_into_vec() {
        let list = LinkedList::from(vec![1, 2, 3]);
        assert_eq!(list.len(), 3);
        assert_eq!(list.into_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn test_into_iter_len() {
        let list: LinkedList<_> = (0..4).collect();
        let mut iter = list.into_iter();
        assert_eq!(iter.len(), 4);
        iter.next();
        assert_eq!(iter.len(), 3);
    }

    #[test]
    fn test_extend() {
        let mut list: LinkedList<_> = vec![1, 2].into();
        list.extend(vec![3, 4]);
        list.extend(Vec::new());
        assert_eq!(list.to_vec(), vec![1, 2, 3, 4]);
    }
}
