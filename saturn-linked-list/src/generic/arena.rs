//! Slot arena backing the nodes of a [`SinglyLinkedList`].
//!
//! Nodes live in a single `Vec` and are addressed by [`NodeId`]. Released slots
//! are threaded onto a free-list and handed out again before the vector grows,
//! so a list that churns through `push`/`pop` cycles stops allocating once it
//! reaches its high-water mark.
//!
//! [`SinglyLinkedList`]: crate::generic::singly_linked_list::SinglyLinkedList

/// Stable index of a node slot inside a [`NodeArena`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Returns the raw slot index.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A value together with the link to its successor.
#[derive(Clone, Debug)]
pub struct Node<T> {
    pub value: T,
    pub next: Option<NodeId>,
}

#[derive(Clone, Debug)]
enum Slot<T> {
    Occupied(Node<T>),
    Vacant { next_free: Option<NodeId> },
}

/// Owner of every node of one list.
///
/// The arena has no notion of order; linking nodes together is the job of the
/// list that owns it.
#[derive(Clone, Debug)]
pub struct NodeArena<T> {
    slots: Vec<Slot<T>>,
    free: Option<NodeId>,
    live: usize,
}

impl<T> Default for NodeArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> NodeArena<T> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: None,
            live: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: None,
            live: 0,
        }
    }

    /// Number of occupied slots.
    pub fn live(&self) -> usize {
        self.live
    }

    /// Number of nodes the arena can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Makes room for at least `additional` more nodes.
    pub fn reserve(&mut self, additional: usize) {
        let vacant = self.slots.len() - self.live;
        if additional > vacant {
            self.slots.reserve(additional - vacant);
        }
    }

    /// Stores a new unlinked node and returns its id.
    pub fn alloc(&mut self, value: T) -> NodeId {
        let node = Node { value, next: None };
        self.live += 1;

        match self.free {
            Some(id) => {
                let slot = &mut self.slots[id.0];
                if let Slot::Vacant { next_free } = *slot {
                    self.free = next_free;
                }
                *slot = Slot::Occupied(node);
                tracing::trace!(slot = id.0, "reusing released node slot");
                id
            }
            None => {
                let id = NodeId(self.slots.len());
                self.slots.push(Slot::Occupied(node));
                id
            }
        }
    }

    /// Frees the slot behind `id` and returns the node it held.
    ///
    /// Returns `None` if the slot was already vacant.
    pub fn release(&mut self, id: NodeId) -> Option<Node<T>> {
        let slot = self.slots.get_mut(id.0)?;
        debug_assert!(
            matches!(slot, Slot::Occupied(_)),
            "double release of node slot {}",
            id.0
        );

        let vacant = Slot::Vacant {
            next_free: self.free,
        };
        match core::mem::replace(slot, vacant) {
            Slot::Occupied(node) => {
                self.free = Some(id);
                self.live -= 1;
                Some(node)
            }
            previous @ Slot::Vacant { .. } => {
                // Put the original free-list link back.
                *slot = previous;
                None
            }
        }
    }

    pub fn get(&self, id: NodeId) -> Option<&Node<T>> {
        match self.slots.get(id.0)? {
            Slot::Occupied(node) => Some(node),
            Slot::Vacant { .. } => None,
        }
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node<T>> {
        match self.slots.get_mut(id.0)? {
            Slot::Occupied(node) => Some(node),
            Slot::Vacant { .. } => None,
        }
    }

    /// Successor link of `id`, or `None` for the last node or a vacant slot.
    pub fn next_of(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|node| node.next)
    }

    /// Rewrites the successor link of `id`. Ignored for vacant slots.
    pub fn set_next(&mut self, id: NodeId, next: Option<NodeId>) {
        if let Some(node) = self.get_mut(id) {
            node.next = next;
        }
    }

    /// Mutable references to every stored value, indexed by slot.
    ///
    /// Vacant slots map to `None`.
    pub(crate) fn slot_values_mut(&mut self) -> Vec<Option<&mut T>> {
        self.slots
            .iter_mut()
            .map(|slot| match slot {
                Slot::Occupied(node) => Some(&mut node.value),
                Slot::Vacant { .. } => None,
            })
            .collect()
    }

    /// Drops every node and forgets the free-list, keeping the allocation.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free = None;
        self.live = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alloc_and_get() {
        let mut arena = NodeArena::new();
        let a = arena.alloc(10);
        let b = arena.alloc(20);
        assert_ne!(a, b);
        assert_eq!(arena.live(), 2);
        assert_eq!(arena.get(a).map(|n| n.value), Some(10));
        assert_eq!(arena.get(b).map(|n| n.value), Some(20));
        assert_eq!(arena.next_of(a), None);
    }

    #[test]
    fn test_release_returns_node_and_vacates_slot() {
        let mut arena = NodeArena::new();
        let a = arena.alloc(1);
        let node = arena.release(a).unwrap();
        assert_eq!(node.value, 1);
        assert_eq!(arena.live(), 0);
        assert!(arena.get(a).is_none());
    }

    #[test]
    fn test_released_slots_are_reused_lifo() {
        let mut arena = NodeArena::new();
        let a = arena.alloc(1);
        let b = arena.alloc(2);
        let _c = arena.alloc(3);

        arena.release(a);
        arena.release(b);

        // Most recently released first.
        assert_eq!(arena.alloc(4), b);
        assert_eq!(arena.alloc(5), a);
        assert_eq!(arena.alloc(6).index(), 3);
        assert_eq!(arena.live(), 4);
    }

    #[test]
    fn test_set_next_links_nodes() {
        let mut arena = NodeArena::new();
        let a = arena.alloc('a');
        let b = arena.alloc('b');
        arena.set_next(a, Some(b));
        assert_eq!(arena.next_of(a), Some(b));
        assert_eq!(arena.next_of(b), None);
    }

    #[test]
    fn test_reserve_counts_vacant_slots() {
        let mut arena = NodeArena::with_capacity(4);
        assert!(arena.capacity() >= 4);

        let ids: Vec<_> = (0..4).map(|v| arena.alloc(v)).collect();
        for id in ids {
            arena.release(id);
        }
        arena.reserve(8);
        assert!(arena.capacity() >= 8);
    }

    #[test]
    fn test_clear() {
        let mut arena = NodeArena::new();
        let a = arena.alloc(1);
        arena.alloc(2);
        arena.release(a);
        arena.clear();
        assert_eq!(arena.live(), 0);
        assert_eq!(arena.alloc(3).index(), 0);
    }
}
