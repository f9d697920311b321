use thiserror::Error;

/// 链表操作失败的原因
///
/// 任何返回错误的操作都不会修改链表。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ListError {
    /// 需要至少一个元素的操作作用在空链表上
    #[error("list is empty")]
    EmptyCollection,

    /// 下标超出操作允许的范围
    #[error("index {index} out of range for list of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// 游标属于别的链表，或者在它之后链表结构发生过变化
    #[error("cursor is stale or belongs to another list")]
    StaleCursor,
}

pub type Result<T, E = ListError> = std::result::Result<T, E>;
