//! 泛型单向链表
//!
//! [`LinkedList`] 支持按下标、按值和按游标的插入与删除，原地反转，
//! 批量追加以及深拷贝。按节点定位的操作通过 [`Cursor`] 完成，
//! 过期或外来的游标会被拒绝并返回 [`ListError::StaleCursor`]。
//!
//! ```
//! use simple_linked_list::LinkedList;
//!
//! let mut list = LinkedList::new();
//! list.insert_head(3);
//! list.insert_head(2);
//! list.insert_head(1);
//! assert_eq!(list.to_string(), "[1, 2, 3]");
//!
//! assert_eq!(list.remove(1), Ok(2));
//! assert_eq!(list.to_string(), "[1, 3]");
//! ```
//!
//! 链表本身不是线程安全的共享结构，跨线程使用时需要外部加锁。

mod cursor;
mod error;
mod iter;
mod list;
mod node;

pub use cursor::Cursor;
pub use error::{ListError, Result};
pub use iter::{IntoIter, Iter, IterMut};
pub use list::LinkedList;
