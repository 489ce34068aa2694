//! Arena storage for tree nodes.
//!
//! Every node lives in a slot of a single `Vec`, addressed by [`NodeId`].
//! Parent and child links are plain indices, so the back-references needed by
//! the fixup walks never form an ownership cycle.

use log::trace;

use crate::common::NodeId;
use crate::tree::node::Node;

/// Growable indexed store of nodes.
///
/// # Layout
/// ```text
/// ┌──────────────────────────────────────────────────┐
/// │ slots: Vec<Option<Node<R>>>                      │
/// │  [Some(n0)] [None] [Some(n2)] [Some(n3)] [None]  │
/// └──────────────────────────────────────────────────┘
///        free_list: [4, 1]   (LIFO, reused first)
/// ```
///
/// Released slots go on the free list and are handed out again before the
/// `Vec` grows, so a tree under steady insert/remove churn does not grow.
#[derive(Debug)]
pub(crate) struct NodeArena<R> {
    /// Node storage; `None` marks a released slot.
    slots: Vec<Option<Node<R>>>,

    /// Stack of released slot ids (LIFO for cache locality).
    free_list: Vec<NodeId>,
}

impl<R> NodeArena<R> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free_list: Vec::new(),
        }
    }

    /// Store `node`, reusing a released slot when one is available.
    pub(crate) fn alloc(&mut self, node: Node<R>) -> NodeId {
        match self.free_list.pop() {
            Some(id) => {
                debug_assert!(self.slots[id.0].is_none(), "{id} on free list is occupied");
                self.slots[id.0] = Some(node);
                id
            }
            None => {
                let id = NodeId::new(self.slots.len());
                self.slots.push(Some(node));
                id
            }
        }
    }

    /// Take the node out of its slot and put the slot on the free list.
    ///
    /// # Panics
    /// Panics if the slot is already vacant.
    pub(crate) fn free(&mut self, id: NodeId) -> Node<R> {
        let node = self
            .slots
            .get_mut(id.0)
            .and_then(Option::take)
            .unwrap_or_else(|| panic!("double free of {id}"));
        self.free_list.push(id);
        trace!("released {id}");
        node
    }

    /// Borrow a live node.
    ///
    /// # Panics
    /// Panics on a dangling id; the tree never hands those out, so hitting
    /// this means a link was left pointing at a released slot.
    #[inline]
    pub(crate) fn get(&self, id: NodeId) -> &Node<R> {
        match self.slots.get(id.0) {
            Some(Some(node)) => node,
            _ => panic!("dangling link to {id}"),
        }
    }

    /// Mutably borrow a live node.
    ///
    /// # Panics
    /// Panics on a dangling id.
    #[inline]
    pub(crate) fn get_mut(&mut self, id: NodeId) -> &mut Node<R> {
        match self.slots.get_mut(id.0) {
            Some(Some(node)) => node,
            _ => panic!("dangling link to {id}"),
        }
    }

    /// Number of live nodes.
    #[cfg(test)]
    pub(crate) fn live(&self) -> usize {
        self.slots.len() - self.free_list.len()
    }

    /// Total slots, live or released.
    #[cfg(test)]
    pub(crate) fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Drop every node and forget all slots.
    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free_list.clear();
    }
}
