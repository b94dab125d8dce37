//! Non-owning node handles for walking a [`SinglyLinkedList`] by hand.
//!
//! A [`NodeRef`] borrows the list immutably, so the chain cannot change while a
//! handle is alive. Walking off the end yields `None`, never a dangling node.
//!
//! [`SinglyLinkedList`]: crate::generic::singly_linked_list::SinglyLinkedList

use crate::generic::arena::{NodeArena, NodeId};

/// A borrowed view of one node in a list.
///
/// # Examples
///
/// ```rust
/// use saturn_linked_list::linked_list;
///
/// let list = linked_list![1, 2, 3];
/// let head = list.begin().unwrap();
/// assert_eq!(*head.value(), 1);
/// assert_eq!(head.next().map(|n| *n.value()), Some(2));
/// ```
pub struct NodeRef<'a, T> {
    arena: &'a NodeArena<T>,
    id: NodeId,
    value: &'a T,
}

impl<'a, T> NodeRef<'a, T> {
    pub(crate) fn new(arena: &'a NodeArena<T>, id: NodeId) -> Option<Self> {
        let node = arena.get(id)?;
        Some(Self {
            arena,
            id,
            value: &node.value,
        })
    }

    /// The value stored in this node.
    pub fn value(&self) -> &'a T {
        self.value
    }

    /// Arena slot of this node.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The successor node, or `None` past the tail.
    pub fn next(&self) -> Option<NodeRef<'a, T>> {
        let next = self.arena.next_of(self.id)?;
        NodeRef::new(self.arena, next)
    }

    /// `true` if this node has no successor.
    pub fn is_last(&self) -> bool {
        self.arena.next_of(self.id).is_none()
    }
}

impl<T> Clone for NodeRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeRef<'_, T> {}

impl<T: core::fmt::Debug> core::fmt::Debug for NodeRef<'_, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("value", self.value)
            .finish()
    }
}

/// Walks `steps` links forward from `node`.
///
/// Returns `None` if the chain ends before `steps` links have been followed.
/// `advance(node, 0)` returns `node` itself.
///
/// # Examples
///
/// ```rust
/// use saturn_linked_list::{generic::cursor::advance, linked_list};
///
/// let list = linked_list![10, 20, 30];
/// let head = list.begin().unwrap();
/// assert_eq!(advance(head, 2).map(|n| *n.value()), Some(30));
/// assert!(advance(head, 3).is_none());
/// ```
pub fn advance<T>(node: NodeRef<'_, T>, steps: usize) -> Option<NodeRef<'_, T>> {
    let mut current = node;
    for _ in 0..steps {
        current = current.next()?;
    }
    Some(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generic::singly_linked_list::SinglyLinkedList;

    #[test]
    fn test_walk_to_sentinel() {
        let list = SinglyLinkedList::from([1, 2, 3]);
        let mut seen = Vec::new();
        let mut cursor = list.begin();
        while let Some(node) = cursor {
            seen.push(*node.value());
            cursor = node.next();
        }
        assert_eq!(seen, vec![1, 2, 3]);
    }

    #[test]
    fn test_begin_is_restartable() {
        let list = SinglyLinkedList::from([4, 5]);
        let first = list.begin().unwrap();
        let _ = advance(first, 1);
        assert_eq!(*first.value(), 4);
        assert_eq!(*list.begin().unwrap().value(), 4);
    }

    #[test]
    fn test_advance_zero_is_identity() {
        let list = SinglyLinkedList::from([7]);
        let head = list.begin().unwrap();
        assert_eq!(advance(head, 0).map(|n| n.id()), Some(head.id()));
        assert!(head.is_last());
    }

    #[test]
    fn test_advance_past_end() {
        let list = SinglyLinkedList::from([1, 2]);
        let head = list.begin().unwrap();
        assert!(advance(head, 2).is_none());
        assert!(advance(head, usize::MAX).is_none());
    }

    #[test]
    fn test_empty_list_has_no_begin() {
        let list = SinglyLinkedList::<i32>::new();
        assert!(list.begin().is_none());
        assert!(list.end().is_none());
    }
}
