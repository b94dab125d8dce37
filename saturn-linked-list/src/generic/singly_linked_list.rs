//! Singly linked list with cached head/tail and index-based mutation.
//!
//! This module provides [`SinglyLinkedList`], an ordered sequence whose nodes are
//! chained by forward links only. Nodes are stored in a [`NodeArena`] and
//! addressed by index, so relinking never moves values and released slots are
//! recycled.

use crate::error::{LinkedListError, Result};
use crate::generic::arena::{NodeArena, NodeId};
use crate::generic::cursor::NodeRef;
use crate::generic::iter::{Iter, IterMut};

/// A mutable ordered sequence built from forward-linked nodes.
///
/// The list caches its head, its tail and its length, so `push_back`,
/// `push_front`, `pop_front`, `len` and `is_empty` are O(1). Anything that needs
/// the predecessor of a node (`pop_back`, `insert`, `erase`) walks from the head.
///
/// # Type Parameters
///
/// * `T` - The element type.
///
/// # Examples
///
/// ```rust
/// use saturn_linked_list::generic::singly_linked_list::SinglyLinkedList;
///
/// let mut list = SinglyLinkedList::new();
/// list.push_back(1);
/// list.push_back(2);
/// list.push_front(0);
/// assert_eq!(list.to_vec(), vec![0, 1, 2]);
///
/// assert_eq!(list.pop_back(), Some(2));
/// assert_eq!(list.len(), 2);
/// ```
///
/// # Index clamping
///
/// `insert` and `erase` never fail. An index past the end of the list appends
/// (for `insert`) or removes the last element (for `erase`). Use [`at`] or
/// [`node_at`] when an out-of-range index must be reported.
///
/// [`at`]: SinglyLinkedList::at
/// [`node_at`]: SinglyLinkedList::node_at
pub struct SinglyLinkedList<T> {
    nodes: NodeArena<T>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
    len: usize,
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SinglyLinkedList<T> {
    /// Creates a new, empty list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use saturn_linked_list::generic::singly_linked_list::SinglyLinkedList;
    ///
    /// let list: SinglyLinkedList<i32> = SinglyLinkedList::new();
    /// assert!(list.is_empty());
    /// assert_eq!(list.len(), 0);
    /// ```
    pub fn new() -> Self {
        Self {
            nodes: NodeArena::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Creates an empty list with room for `capacity` nodes.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use saturn_linked_list::generic::singly_linked_list::SinglyLinkedList;
    ///
    /// let list: SinglyLinkedList<u64> = SinglyLinkedList::with_capacity(16);
    /// assert!(list.capacity() >= 16);
    /// assert!(list.is_empty());
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: NodeArena::with_capacity(capacity),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Creates a list holding a single value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use saturn_linked_list::generic::singly_linked_list::SinglyLinkedList;
    ///
    /// let list = SinglyLinkedList::from_value(42);
    /// assert_eq!(list.len(), 1);
    /// assert_eq!(list.front(), list.back());
    /// ```
    pub fn from_value(value: T) -> Self {
        let mut list = Self::with_capacity(1);
        list.push_back(value);
        list
    }

    /// Returns the number of elements in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list contains no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of nodes the list can hold before its storage grows.
    pub fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Reserves room for at least `additional` more elements.
    pub fn reserve(&mut self, additional: usize) {
        self.nodes.reserve(additional);
    }

    /// Appends an element after the current tail.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use saturn_linked_list::generic::singly_linked_list::SinglyLinkedList;
    ///
    /// let mut list = SinglyLinkedList::new();
    /// list.push_back(1);
    /// list.push_back(2);
    /// assert_eq!(list.to_vec(), vec![1, 2]);
    /// ```
    pub fn push_back(&mut self, value: T) {
        let id = self.nodes.alloc(value);

        match self.tail {
            Some(tail) => self.nodes.set_next(tail, Some(id)),
            None => self.head = Some(id),
        }

        self.tail = Some(id);
        self.len += 1;
    }

    /// Prepends an element before the current head.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use saturn_linked_list::generic::singly_linked_list::SinglyLinkedList;
    ///
    /// let mut list = SinglyLinkedList::from([1, 2]);
    /// list.push_front(0);
    /// assert_eq!(list.to_vec(), vec![0, 1, 2]);
    /// ```
    pub fn push_front(&mut self, value: T) {
        let id = self.nodes.alloc(value);
        self.nodes.set_next(id, self.head);

        self.head = Some(id);
        if self.tail.is_none() {
            self.tail = Some(id);
        }
        self.len += 1;
    }

    /// Removes and returns the last element, or `None` if the list is empty.
    ///
    /// This walks from the head to find the new tail and is O(n).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use saturn_linked_list::generic::singly_linked_list::SinglyLinkedList;
    ///
    /// let mut list = SinglyLinkedList::from([1, 2]);
    /// assert_eq!(list.pop_back(), Some(2));
    /// assert_eq!(list.pop_back(), Some(1));
    /// assert_eq!(list.pop_back(), None);
    /// assert!(list.is_empty());
    /// ```
    pub fn pop_back(&mut self) -> Option<T> {
        let tail = self.tail?;
        if self.head == Some(tail) {
            return self.pop_front();
        }

        let new_tail = self.id_at(self.len - 2)?;
        self.nodes.set_next(new_tail, None);
        self.tail = Some(new_tail);
        self.len -= 1;

        self.nodes.release(tail).map(|node| node.value)
    }

    /// Removes and returns the first element, or `None` if the list is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use saturn_linked_list::generic::singly_linked_list::SinglyLinkedList;
    ///
    /// let mut list = SinglyLinkedList::from([1, 2]);
    /// assert_eq!(list.pop_front(), Some(1));
    /// assert_eq!(list.pop_front(), Some(2));
    /// assert!(list.is_empty());
    /// assert!(list.back().is_none());
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        let head = self.head?;
        let node = self.nodes.release(head)?;

        self.head = node.next;
        if self.head.is_none() {
            self.tail = None;
        }
        self.len -= 1;

        Some(node.value)
    }

    /// Inserts `value` so that it becomes the element at `index`.
    ///
    /// Index `0` prepends. Any index at or past the end appends.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use saturn_linked_list::generic::singly_linked_list::SinglyLinkedList;
    ///
    /// let mut list = SinglyLinkedList::from([0, 1, 3, 4]);
    /// list.insert(2, 10);
    /// assert_eq!(list.to_vec(), vec![0, 1, 10, 3, 4]);
    ///
    /// list.insert(99, 5); // clamps to the end
    /// assert_eq!(list.back(), Some(&5));
    /// ```
    pub fn insert(&mut self, index: usize, value: T) {
        if index == 0 {
            return self.push_front(value);
        }
        if index >= self.len {
            if index > self.len {
                tracing::trace!(index, len = self.len, "insert index clamped to back");
            }
            return self.push_back(value);
        }

        let Some(prev) = self.id_at(index - 1) else {
            return self.push_back(value);
        };
        let id = self.nodes.alloc(value);
        self.nodes.set_next(id, self.nodes.next_of(prev));
        self.nodes.set_next(prev, Some(id));
        self.len += 1;
    }

    /// Removes and returns the element at `index`.
    ///
    /// Any index at or past the last position removes the last element. Returns
    /// `None` only when the list is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use saturn_linked_list::generic::singly_linked_list::SinglyLinkedList;
    ///
    /// let mut list = SinglyLinkedList::from([10, 20, 30]);
    /// assert_eq!(list.erase(1), Some(20));
    /// assert_eq!(list.to_vec(), vec![10, 30]);
    ///
    /// assert_eq!(list.erase(7), Some(30)); // clamps to the back
    /// ```
    pub fn erase(&mut self, index: usize) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        let last = self.len - 1;
        if index >= last {
            if index > last {
                tracing::trace!(index, len = self.len, "erase index clamped to back");
            }
            return self.pop_back();
        }
        if index == 0 {
            return self.pop_front();
        }

        let prev = self.id_at(index - 1)?;
        self.unlink_after(prev)
    }

    /// Removes every element equal to `value` and returns how many were removed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use saturn_linked_list::generic::singly_linked_list::SinglyLinkedList;
    ///
    /// let mut list = SinglyLinkedList::from([10, 20, 30, 20]);
    /// assert_eq!(list.remove(&20), 2);
    /// assert_eq!(list.to_vec(), vec![10, 30]);
    /// ```
    pub fn remove(&mut self, value: &T) -> usize
    where
        T: PartialEq,
    {
        self.remove_if(|item| item == value)
    }

    /// Removes every element for which `predicate` returns `true`.
    ///
    /// Scans once from head to tail, keeping the relative order of the
    /// remaining elements. Returns the number of removed elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use saturn_linked_list::generic::singly_linked_list::SinglyLinkedList;
    ///
    /// let mut list = SinglyLinkedList::from([2, 4, 1, 6, 3, 8]);
    /// assert_eq!(list.remove_if(|v| v % 2 == 0), 4);
    /// assert_eq!(list.to_vec(), vec![1, 3]);
    /// ```
    pub fn remove_if<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        if self.is_empty() {
            return 0;
        }

        let mut removed = 0;

        while self.front().is_some_and(&mut predicate) {
            self.pop_front();
            removed += 1;
        }

        if let Some(mut prev) = self.head {
            while let Some(current) = self.nodes.next_of(prev) {
                let matched = self
                    .nodes
                    .get(current)
                    .is_some_and(|node| predicate(&node.value));

                if matched {
                    self.unlink_after(prev);
                    removed += 1;
                } else {
                    prev = current;
                }
            }
        }

        tracing::trace!(removed, len = self.len, "remove_if finished");
        removed
    }

    /// Keeps only the elements for which `predicate` returns `true`.
    pub fn retain<F>(&mut self, mut predicate: F)
    where
        F: FnMut(&T) -> bool,
    {
        self.remove_if(|value| !predicate(value));
    }

    /// Reverses the list in place.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use saturn_linked_list::generic::singly_linked_list::SinglyLinkedList;
    ///
    /// let mut list = SinglyLinkedList::from([10, 12, 0, 4]);
    /// list.reverse();
    /// assert_eq!(list.to_vec(), vec![4, 0, 12, 10]);
    /// assert_eq!(list.back(), Some(&10));
    /// ```
    pub fn reverse(&mut self) {
        if self.len <= 1 {
            return;
        }

        let mut prev = None;
        let mut current = self.head;
        while let Some(id) = current {
            let next = self.nodes.next_of(id);
            self.nodes.set_next(id, prev);
            prev = Some(id);
            current = next;
        }

        self.tail = self.head;
        self.head = prev;
    }

    /// Returns a handle to the node at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`LinkedListError::IndexOutOfRange`] if `index >= len()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use saturn_linked_list::generic::singly_linked_list::SinglyLinkedList;
    ///
    /// let list = SinglyLinkedList::from([1, 2, 3]);
    /// let node = list.node_at(1).unwrap();
    /// assert_eq!(*node.value(), 2);
    /// assert!(list.node_at(3).is_err());
    /// ```
    pub fn node_at(&self, index: usize) -> Result<NodeRef<'_, T>> {
        let out_of_range = LinkedListError::IndexOutOfRange {
            index,
            len: self.len,
        };
        if index >= self.len {
            tracing::debug!(index, len = self.len, "node lookup out of range");
            return Err(out_of_range);
        }

        self.id_at(index)
            .and_then(|id| NodeRef::new(&self.nodes, id))
            .ok_or(out_of_range)
    }

    /// Returns a reference to the value at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`LinkedListError::IndexOutOfRange`] if `index >= len()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use saturn_linked_list::{error::LinkedListError, generic::singly_linked_list::SinglyLinkedList};
    ///
    /// let list = SinglyLinkedList::from([5, 6]);
    /// assert_eq!(list.at(1), Ok(&6));
    /// assert_eq!(list.at(2), Err(LinkedListError::IndexOutOfRange { index: 2, len: 2 }));
    /// ```
    pub fn at(&self, index: usize) -> Result<&T> {
        self.node_at(index).map(|node| node.value())
    }

    /// Returns a reference to the value at `index`, or `None` if out of range.
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        self.nodes.get(self.id_at(index)?).map(|node| &node.value)
    }

    /// Returns a mutable reference to the value at `index`, or `None` if out of range.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.len {
            return None;
        }
        let id = self.id_at(index)?;
        self.nodes.get_mut(id).map(|node| &mut node.value)
    }

    /// Handle to the head node; `None` on an empty list.
    pub fn begin(&self) -> Option<NodeRef<'_, T>> {
        NodeRef::new(&self.nodes, self.head?)
    }

    /// Handle to the tail node; `None` on an empty list.
    pub fn end(&self) -> Option<NodeRef<'_, T>> {
        NodeRef::new(&self.nodes, self.tail?)
    }

    pub fn front(&self) -> Option<&T> {
        self.nodes.get(self.head?).map(|node| &node.value)
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        let head = self.head?;
        self.nodes.get_mut(head).map(|node| &mut node.value)
    }

    pub fn back(&self) -> Option<&T> {
        self.nodes.get(self.tail?).map(|node| &node.value)
    }

    pub fn back_mut(&mut self) -> Option<&mut T> {
        let tail = self.tail?;
        self.nodes.get_mut(tail).map(|node| &mut node.value)
    }

    /// Returns `true` if the list contains an element equal to `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|item| item == value)
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Returns an iterator over the elements, head to tail.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use saturn_linked_list::generic::singly_linked_list::SinglyLinkedList;
    ///
    /// let list = SinglyLinkedList::from([1, 2]);
    /// let collected: Vec<_> = list.iter().copied().collect();
    /// assert_eq!(collected, vec![1, 2]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.nodes, self.head, self.len)
    }

    /// Returns a mutable iterator over the elements, head to tail.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use saturn_linked_list::generic::singly_linked_list::SinglyLinkedList;
    ///
    /// let mut list = SinglyLinkedList::from([1, 2]);
    /// for item in list.iter_mut() {
    ///     *item *= 10;
    /// }
    /// assert_eq!(list.to_vec(), vec![10, 20]);
    /// ```
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self)
    }

    /// Copies the elements into a `Vec`, head to tail.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Checks the structural invariants of the list.
    ///
    /// Holds when the length, head and tail agree on emptiness, following
    /// `len` links from the head ends exactly at the tail, and the arena holds
    /// no nodes outside the chain.
    pub fn check_invariants(&self) -> bool {
        let empty = self.len == 0;
        if empty != self.head.is_none() || empty != self.tail.is_none() {
            return false;
        }
        if self.nodes.live() != self.len {
            return false;
        }

        let mut current = self.head;
        let mut last = None;
        for _ in 0..self.len {
            let Some(id) = current else {
                return false;
            };
            last = Some(id);
            current = self.nodes.next_of(id);
        }

        current.is_none() && last == self.tail
    }

    /// Arena ids in chain order.
    pub(crate) fn node_ids(&self) -> Vec<NodeId> {
        let mut ids = Vec::with_capacity(self.len);
        let mut current = self.head;
        while let Some(id) = current {
            ids.push(id);
            current = self.nodes.next_of(id);
        }
        ids
    }

    pub(crate) fn nodes_mut(&mut self) -> &mut NodeArena<T> {
        &mut self.nodes
    }

    fn id_at(&self, index: usize) -> Option<NodeId> {
        let mut current = self.head?;
        for _ in 0..index {
            current = self.nodes.next_of(current)?;
        }
        Some(current)
    }

    /// Unlinks and releases the successor of `prev`.
    fn unlink_after(&mut self, prev: NodeId) -> Option<T> {
        let target = self.nodes.next_of(prev)?;
        let node = self.nodes.release(target)?;

        self.nodes.set_next(prev, node.next);
        if self.tail == Some(target) {
            self.tail = Some(prev);
        }
        self.len -= 1;

        Some(node.value)
    }
}

impl<T: Clone> Clone for SinglyLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: core::fmt::Display> core::fmt::Display for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("[")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str("]")
    }
}

impl<T: PartialEq> PartialEq for SinglyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for SinglyLinkedList<T> {}

impl<T: core::hash::Hash> core::hash::Hash for SinglyLinkedList<T> {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        state.write_usize(self.len);
        for value in self.iter() {
            value.hash(state);
        }
    }
}

impl<T> Extend<T> for SinglyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for SinglyLinkedList<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut list = Self::with_capacity(iter.size_hint().0);
        for value in iter {
            list.push_back(value);
        }
        list
    }
}

impl<T, const N: usize> From<[T; N]> for SinglyLinkedList<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T> From<Vec<T>> for SinglyLinkedList<T> {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}
