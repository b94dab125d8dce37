use thiserror::Error;

/// Errors returned by checked [`SinglyLinkedList`] lookups.
///
/// Mutations never fail: popping or erasing from an empty list is a no-op and
/// out-of-range `insert`/`erase` indices are clamped to the ends of the list.
///
/// [`SinglyLinkedList`]: crate::generic::singly_linked_list::SinglyLinkedList
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum LinkedListError {
    #[error("Index {index} is out of range for a list of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

pub type Result<T> = core::result::Result<T, LinkedListError>;
