//! # Saturn Linked List
//!
//! A singly linked list with cached head/tail, index-based mutation and
//! predicate removal, stored in a recycling node arena.
//!
//! ## Features
//!
//! - **[`SinglyLinkedList<T>`]** – forward-linked sequence with O(1) `push_back`,
//!   `push_front`, `pop_front`, `len` and `is_empty`
//! - **[`NodeRef`]** / **[`advance`]** – non-owning node handles for manual traversal
//! - **[`PushPopCollection<T>`]** – trait abstraction over double-ended push/pop,
//!   implemented for the list and for `VecDeque`
//! - **[`linked_list!`]** – builds a list from literal values
//!
//! ## Cargo features
//!
//! - `serde` *(default)* – `Serialize`/`Deserialize` as a plain sequence
//!
//! ## Quick Examples
//!
//! ```rust
//! use saturn_linked_list::linked_list;
//!
//! let mut list = linked_list![1, 2, 3, 4];
//! list.pop_back();
//! list.insert(1, 5);
//! assert_eq!(list.to_vec(), vec![1, 5, 2, 3]);
//!
//! list.remove_if(|v| v % 2 == 1);
//! assert_eq!(list.to_vec(), vec![2]);
//! ```
//!
//! ### Walking nodes by hand
//!
//! ```rust
//! use saturn_linked_list::{generic::cursor::advance, linked_list};
//!
//! let list = linked_list![10, 20, 30];
//! let third = list.begin().and_then(|head| advance(head, 2));
//! assert_eq!(third.map(|node| *node.value()), Some(30));
//! ```
//!
//! ## Logging
//!
//! Structural decisions (index clamping, slot reuse, removal counts) are emitted
//! as `tracing` events at `trace` level and rejected lookups at `debug` level.
//! The crate never installs a subscriber.
//!
//! [`SinglyLinkedList<T>`]: generic::singly_linked_list::SinglyLinkedList
//! [`NodeRef`]: generic::cursor::NodeRef
//! [`advance`]: generic::cursor::advance
//! [`PushPopCollection<T>`]: generic::push_pop::PushPopCollection
//! [`linked_list!`]: macro@linked_list

#![forbid(unsafe_code)]

pub mod error;
pub mod generic;
pub mod macros;

#[cfg(test)]
mod tests;

pub use error::LinkedListError;
pub use generic::singly_linked_list::SinglyLinkedList;
