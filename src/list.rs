use std::fmt::{self, Debug, Display};
use std::iter;
use std::mem;

use log::{debug, trace};

use crate::cursor::{Cursor, next_list_id};
use crate::error::{ListError, Result};
use crate::iter::{Iter, IterMut};
use crate::node::{Link, Node};

/// 单向链表
///
/// 链表独占头节点，每个节点独占它的后继。`len` 始终等于从头节点
/// 沿 `next` 能走到的节点数。
pub struct LinkedList<T> {
    head: Link<T>,
    len: usize,
    /// 进程内唯一编号，用来识别外来的游标
    id: u64,
    /// 结构版本，每次结构变化加一
    generation: u64,
}

impl<T> LinkedList<T> {
    /// 创建一个空链表
    pub fn new() -> Self {
        LinkedList {
            head: None,
            len: 0,
            id: next_list_id(),
            generation: 0,
        }
    }

    /// 链表长度，O(1)
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// 在链表头部插入元素
    pub fn insert_head(&mut self, value: T) {
        self.head = Some(Node::new(value, self.head.take()));
        self.len += 1;
        self.touch();
    }

    /// 查看第一个元素，不移除
    pub fn head(&self) -> Result<&T> {
        self.head
            .as_deref()
            .map(|node| &node.value)
            .ok_or_else(Self::empty_error)
    }

    /// 第一个元素的可变引用
    pub fn head_mut(&mut self) -> Result<&mut T> {
        match self.head.as_deref_mut() {
            Some(node) => Ok(&mut node.value),
            None => Err(Self::empty_error()),
        }
    }

    /// 获取下标 `index` 处的元素
    pub fn get(&self, index: usize) -> Result<&T> {
        if index >= self.len {
            return Err(Self::out_of_range(index, self.len));
        }
        self.node_at(index)
            .map(|node| &node.value)
            .ok_or_else(|| Self::out_of_range(index, self.len))
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let len = self.len;
        if index >= len {
            return Err(Self::out_of_range(index, len));
        }
        match self.node_at_mut(index) {
            Some(node) => Ok(&mut node.value),
            None => Err(Self::out_of_range(index, len)),
        }
    }

    /// 替换下标 `index` 处的元素，返回旧值
    pub fn set(&mut self, index: usize, value: T) -> Result<T> {
        let slot = self.get_mut(index)?;
        Ok(mem::replace(slot, value))
    }

    /// 插入元素，使它成为下标 `index` 处的元素
    ///
    /// `index` 可以等于 `len()`，此时追加到尾部。
    pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
        let len = self.len;
        if index > len {
            return Err(Self::out_of_range(index, len));
        }
        let link = self
            .link_at(index)
            .ok_or_else(|| Self::out_of_range(index, len))?;
        let next = link.take();
        *link = Some(Node::new(value, next));

        self.len += 1;
        self.touch();
        Ok(())
    }

    /// 移除并返回第一个元素
    pub fn delete_head(&mut self) -> Result<T> {
        self.pop_head().ok_or_else(Self::empty_error)
    }

    /// 取出头节点的值，空链表返回 `None`
    pub(crate) fn pop_head(&mut self) -> Option<T> {
        let (value, next) = self.head.take()?.into_parts();
        self.head = next;

        self.len -= 1;
        self.touch();
        Some(value)
    }

    /// 移除并返回下标 `index` 处的元素
    pub fn remove(&mut self, index: usize) -> Result<T> {
        let len = self.len;
        if index >= len {
            return Err(Self::out_of_range(index, len));
        }
        let link = self
            .link_at(index)
            .ok_or_else(|| Self::out_of_range(index, len))?;
        let node = link.take().ok_or_else(|| Self::out_of_range(index, len))?;
        let (value, next) = node.into_parts();
        *link = next;

        self.len -= 1;
        self.touch();
        Ok(value)
    }

    /// 清空链表，释放所有节点
    pub fn clear(&mut self) {
        Self::release(self.head.take());
        self.len = 0;
        self.touch();
    }

    /// 原地反转链表，O(n) 时间、O(1) 额外空间
    pub fn reverse(&mut self) {
        let mut prev: Link<T> = None;
        let mut current = self.head.take();

        while let Some(mut node) = current {
            current = node.next.take();
            node.next = prev;
            prev = Some(node);
        }

        self.head = prev;
        self.touch();
        trace!("reversed list of {} elements", self.len);
    }

    /// 按顺序把 `items` 的所有元素追加到尾部
    ///
    /// `items` 为空时什么都不做并返回 `false`，否则返回 `true`。
    pub fn append_all<I>(&mut self, items: I) -> bool
    where
        I: IntoIterator<Item = T>,
    {
        let mut items = items.into_iter();
        let Some(first) = items.next() else {
            return false;
        };
        self.touch();

        // 只借用 head 字段，循环中可以同步更新 len
        let mut tail = &mut self.head;
        while let Some(ref mut node) = *tail {
            tail = &mut node.next;
        }

        let mut added = 0;
        for value in iter::once(first).chain(items) {
            let node = tail.insert(Node::new(value, None));
            tail = &mut node.next;
            self.len += 1;
            added += 1;
        }

        trace!("appended {} elements, list now holds {}", added, self.len);
        true
    }

    /// 获取借用迭代器，从头到尾
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.head.as_deref(), self.len)
    }

    /// 获取可变迭代器，不改变链表结构
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self.head.as_deref_mut(), self.len)
    }

    /// 消耗链表，按顺序得到所有元素
    pub fn into_vec(self) -> Vec<T> {
        self.into_iter().collect()
    }

    /// 指向下标 `index` 处节点的游标
    pub fn cursor_at(&self, index: usize) -> Result<Cursor> {
        if index >= self.len {
            return Err(Self::out_of_range(index, self.len));
        }
        Ok(Cursor::new(self.id, self.generation, index))
    }

    /// 指向头节点的游标
    pub fn cursor_head(&self) -> Result<Cursor> {
        if self.is_empty() {
            return Err(Self::empty_error());
        }
        self.cursor_at(0)
    }

    /// 读取游标所指节点的值
    pub fn get_at_cursor(&self, cursor: &Cursor) -> Result<&T> {
        self.check_cursor(cursor)?;
        self.get(cursor.index)
    }

    /// 在游标所指节点之后插入新节点，返回指向新节点的游标
    ///
    /// 传入的游标会被刷新，继续有效；其他游标全部失效。
    pub fn insert_after(&mut self, cursor: &mut Cursor, value: T) -> Result<Cursor> {
        self.check_cursor(cursor)?;
        let index = cursor.index + 1;
        self.insert(index, value)?;

        cursor.generation = self.generation;
        Ok(Cursor::new(self.id, self.generation, index))
    }

    /// 删除游标所指节点的后继，返回被删除的值
    ///
    /// 游标指向尾节点时返回 [`ListError::IndexOutOfRange`]。
    /// 传入的游标会被刷新，继续有效；其他游标全部失效。
    pub fn delete_after(&mut self, cursor: &mut Cursor) -> Result<T> {
        self.check_cursor(cursor)?;
        let index = cursor.index + 1;
        if index >= self.len {
            return Err(Self::out_of_range(index, self.len));
        }
        let value = self.remove(index)?;

        cursor.generation = self.generation;
        Ok(value)
    }

    fn check_cursor(&self, cursor: &Cursor) -> Result<()> {
        if cursor.list_id != self.id
            || cursor.generation != self.generation
            || cursor.index >= self.len
        {
            debug!(
                "rejected cursor (list {}, generation {}), list is {} at generation {}",
                cursor.list_id, cursor.generation, self.id, self.generation
            );
            return Err(ListError::StaleCursor);
        }
        Ok(())
    }

    /// 返回下标 `index` 处的链接槽位，`index` 可以等于 `len`
    fn link_at(&mut self, index: usize) -> Option<&mut Link<T>> {
        let mut link = &mut self.head;
        for _ in 0..index {
            link = &mut link.as_mut()?.next;
        }
        Some(link)
    }

    fn node_at(&self, index: usize) -> Option<&Node<T>> {
        let mut node = self.head.as_deref()?;
        for _ in 0..index {
            node = node.next.as_deref()?;
        }
        Some(node)
    }

    fn node_at_mut(&mut self, index: usize) -> Option<&mut Node<T>> {
        let mut node = self.head.as_deref_mut()?;
        for _ in 0..index {
            node = node.next.as_deref_mut()?;
        }
        Some(node)
    }

    fn touch(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }

    // 逐个释放，避免长链表递归 drop 爆栈
    fn release(mut current: Link<T>) {
        while let Some(mut node) = current {
            current = node.next.take();
        }
    }

    fn empty_error() -> ListError {
        debug!("operation requires a non-empty list");
        ListError::EmptyCollection
    }

    fn out_of_range(index: usize, len: usize) -> ListError {
        debug!("index {} out of range for list of length {}", index, len);
        ListError::IndexOutOfRange { index, len }
    }
}

impl<T: PartialEq> LinkedList<T> {
    /// 第一个等于 `value` 的元素的下标
    pub fn position(&self, value: &T) -> Option<usize> {
        self.iter().position(|item| item == value)
    }

    pub fn contains(&self, value: &T) -> bool {
        self.iter().any(|item| item == value)
    }

    /// 指向第一个等于 `value` 的节点的游标
    pub fn find(&self, value: &T) -> Option<Cursor> {
        let index = self.position(value)?;
        Some(Cursor::new(self.id, self.generation, index))
    }

    /// 删除第一个等于 `value` 的元素
    ///
    /// 找到并删除时返回 `true`，没有匹配时返回 `false`，链表不变。
    /// 对 `LinkedList<Option<U>>` 来说 `None` 与 `None` 相等。
    pub fn remove_value(&mut self, value: &T) -> bool {
        match self.position(value) {
            Some(index) => self.remove(index).is_ok(),
            None => false,
        }
    }
}

impl<T: Clone> LinkedList<T> {
    /// 当前内容的快照，从头到尾
    pub fn to_vec(&self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.len);
        out.extend(self.iter().cloned());
        out
    }

    /// 深拷贝：每个节点都重新分配，与原链表不共享任何节点
    pub fn copy(&self) -> Self {
        let mut copy = LinkedList::new();
        copy.append_all(self.iter().cloned());
        trace!("copied list of {} elements", copy.len);
        copy
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.copy()
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        Self::release(self.head.take());
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: Debug> Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// 格式化为 `[v1, v2, ..., vn]`，空链表为 `[]`
impl<T: Display> Display for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;

        let mut iter = self.iter();
        if let Some(first) = iter.next() {
            write!(f, "{}", first)?;
            for item in iter {
                write!(f, ", {}", item)?;
            }
        }

        write!(f, "]")
    }
}
