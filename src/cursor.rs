use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_LIST_ID: AtomicU64 = AtomicU64::new(1);

/// 为新链表分配进程内唯一的编号
pub(crate) fn next_list_id() -> u64 {
    NEXT_LIST_ID.fetch_add(1, Ordering::Relaxed)
}

/// 指向链表中某个节点的游标
///
/// 游标不持有指针，只记录所属链表的编号、链表当时的结构版本和节点位置。
/// 链表结构一旦变化（插入、删除、反转、追加、清空），此前发出的游标就会失效，
/// 再交给 [`LinkedList::insert_after`] 或 [`LinkedList::delete_after`] 时
/// 返回 [`ListError::StaleCursor`]，而不是访问一个已经不存在的节点。
///
/// [`LinkedList::insert_after`]: crate::LinkedList::insert_after
/// [`LinkedList::delete_after`]: crate::LinkedList::delete_after
/// [`ListError::StaleCursor`]: crate::ListError::StaleCursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub(crate) list_id: u64,
    pub(crate) generation: u64,
    pub(crate) index: usize,
}

impl Cursor {
    pub(crate) fn new(list_id: u64, generation: u64, index: usize) -> Self {
        Cursor {
            list_id,
            generation,
            index,
        }
    }

    /// 游标所指节点的下标
    pub fn index(&self) -> usize {
        self.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_ids_are_unique() {
        let a = next_list_id();
        let b = next_list_id();
        assert_ne!(a, b);
    }
}
