//! Common trait for sequences that grow and shrink at both ends.
//!
//! This module provides [`PushPopCollection`], a trait that abstracts over
//! double-ended push/pop so that generic code can drive a [`SinglyLinkedList`]
//! and standard library types like [`VecDeque`] through the same calls.
//!
//! [`SinglyLinkedList`]: crate::generic::singly_linked_list::SinglyLinkedList
//! [`VecDeque`]: std::collections::VecDeque

use std::collections::VecDeque;

use crate::generic::singly_linked_list::SinglyLinkedList;

/// A trait for sequences supporting push/pop at the front and the back.
///
/// Popping from an empty collection returns `None` and leaves it unchanged.
///
/// # Examples
///
/// ```rust
/// use std::collections::VecDeque;
/// use saturn_linked_list::generic::{push_pop::PushPopCollection, singly_linked_list::SinglyLinkedList};
///
/// fn work_with_collection<C: PushPopCollection<i32>>(collection: &mut C) {
///     collection.push_back(42);
///     collection.push_front(7);
///     assert_eq!(collection.len(), 2);
///     assert_eq!(collection.pop_back(), Some(42));
///     assert_eq!(collection.pop_front(), Some(7));
///     assert!(collection.is_empty());
/// }
///
/// let mut list = SinglyLinkedList::new();
/// work_with_collection(&mut list);
///
/// let mut deque = VecDeque::new();
/// work_with_collection(&mut deque);
/// ```
pub trait PushPopCollection<T> {
    /// Adds an element after the last one.
    fn push_back(&mut self, item: T);

    /// Adds an element before the first one.
    fn push_front(&mut self, item: T);

    /// Removes and returns the last element, or `None` if the collection is empty.
    fn pop_back(&mut self) -> Option<T>;

    /// Removes and returns the first element, or `None` if the collection is empty.
    fn pop_front(&mut self) -> Option<T>;

    /// Returns the number of elements in the collection.
    fn len(&self) -> usize;

    /// Returns `true` if the collection holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> PushPopCollection<T> for SinglyLinkedList<T> {
    fn push_back(&mut self, item: T) {
        self.push_back(item);
    }

    fn push_front(&mut self, item: T) {
        self.push_front(item);
    }

    fn pop_back(&mut self) -> Option<T> {
        self.pop_back()
    }

    fn pop_front(&mut self) -> Option<T> {
        self.pop_front()
    }

    fn len(&self) -> usize {
        self.len()
    }
}

/// Implementation for standard library [`VecDeque`].
impl<T> PushPopCollection<T> for VecDeque<T> {
    fn push_back(&mut self, item: T) {
        self.push_back(item);
    }

    fn push_front(&mut self, item: T) {
        self.push_front(item);
    }

    fn pop_back(&mut self) -> Option<T> {
        self.pop_back()
    }

    fn pop_front(&mut self) -> Option<T> {
        self.pop_front()
    }

    fn len(&self) -> usize {
        self.len()
    }
}
