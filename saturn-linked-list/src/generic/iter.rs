//! Forward iterators over a [`SinglyLinkedList`].
//!
//! [`SinglyLinkedList`]: crate::generic::singly_linked_list::SinglyLinkedList

use crate::generic::arena::{NodeArena, NodeId};
use crate::generic::singly_linked_list::SinglyLinkedList;

/// Borrowing iterator, created by [`SinglyLinkedList::iter`].
pub struct Iter<'a, T> {
    arena: &'a NodeArena<T>,
    next: Option<NodeId>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(arena: &'a NodeArena<T>, head: Option<NodeId>, len: usize) -> Self {
        Self {
            arena,
            next: head,
            remaining: len,
        }
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            arena: self.arena,
            next: self.next,
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.arena.get(self.next?)?;
        self.next = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> core::iter::FusedIterator for Iter<'_, T> {}

/// Mutable iterator, created by [`SinglyLinkedList::iter_mut`].
///
/// Yields each value exactly once. The links are read before a value is handed
/// out, so the borrow of one node never overlaps the walk to the next.
pub struct IterMut<'a, T> {
    values: Vec<&'a mut T>,
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(list: &'a mut SinglyLinkedList<T>) -> Self {
        let order = list.node_ids();
        let mut by_slot: Vec<Option<&'a mut T>> = list.nodes_mut().slot_values_mut();

        // Values come out in chain order, reversed so `pop` walks head to tail.
        let mut values = Vec::with_capacity(order.len());
        for id in order.into_iter().rev() {
            if let Some(value) = by_slot.get_mut(id.index()).and_then(Option::take) {
                values.push(value);
            }
        }
        Self { values }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.values.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.values.len(), Some(self.values.len()))
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> core::iter::FusedIterator for IterMut<'_, T> {}

/// Owning iterator, created by [`SinglyLinkedList::into_iter`].
pub struct IntoIter<T> {
    list: SinglyLinkedList<T>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(list: SinglyLinkedList<T>) -> Self {
        Self { list }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> core::iter::FusedIterator for IntoIter<T> {}

impl<'a, T> IntoIterator for &'a SinglyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut SinglyLinkedList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> IntoIterator for SinglyLinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}
