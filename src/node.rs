/// 指向下一个节点的独占所有权链接，`None` 表示链表尾部
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// 单向链表的节点
#[derive(Debug)]
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) next: Link<T>,
}

impl<T> Node<T> {
    pub(crate) fn new(value: T, next: Link<T>) -> Box<Self> {
        Box::new(Node { value, next })
    }

    /// 拆开节点，交出值和后继链接
    pub(crate) fn into_parts(self: Box<Self>) -> (T, Link<T>) {
        let Node { value, next } = *self;
        (value, next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_parts() {
        let tail = Node::new(2, None);
        let head = Node::new(1, Some(tail));

        let (value, next) = head.into_parts();
        assert_eq!(value, 1);

        let (value, next) = next.unwrap().into_parts();
        assert_eq!(value, 2);
        assert!(next.is_none());
    }
}
