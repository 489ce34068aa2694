//! Red-black tree engine.
//!
//! The [`RbTree`] provides:
//! - Upsert by projected key
//! - Point lookup, minimum, maximum
//! - Keyed deletion
//! - Rebalancing that keeps the height within `2 * log2(n + 1)`

use std::cmp::Ordering;
use std::fmt;
use std::mem;

use log::trace;

use crate::common::config::DEFAULT_CAPACITY;
use crate::common::{Error, NodeId, Result};
use crate::tree::arena::NodeArena;
use crate::tree::node::{Node, Side};
use crate::tree::{Color, Keyed};

/// An ordered container of records, balanced with red-black coloring.
///
/// # Architecture
/// ```text
/// ┌────────────────────────────────────────────────────────┐
/// │                      RbTree<R>                         │
/// │  ┌──────────────┐   ┌───────────────────────────────┐  │
/// │  │ root: NodeId │──▶│   arena: NodeArena<R>         │  │
/// │  └──────────────┘   │  [n0] [n1] [  ] [n3] ...      │  │
/// │  ┌──────────────┐   │  parent/left/right = NodeId   │  │
/// │  │  len: usize  │   └───────────────────────────────┘  │
/// │  └──────────────┘                                      │
/// └────────────────────────────────────────────────────────┘
/// ```
///
/// # Invariants
/// After every public operation:
/// 1. Every node is red or black.
/// 2. The root is black.
/// 3. Nil children count as black.
/// 4. A red node never has a red child.
/// 5. All paths from a node down to a nil cross the same number of black nodes.
///
/// # Empty-tree policy
/// `find`, `minimum`, `maximum` and `remove` return [`Error::EmptyTree`] on an
/// empty tree. Traversals of an empty tree simply yield nothing.
///
/// # Thread Safety
/// There is no internal locking. Share a tree across threads by wrapping it in
/// a mutex held for the duration of each call.
///
/// # Example
/// ```
/// use ordtree::RbTree;
///
/// let mut tree = RbTree::new();
/// for key in [50u32, 30, 70, 20, 40] {
///     tree.insert(key);
/// }
///
/// assert_eq!(tree.len(), 5);
/// assert_eq!(tree.find(&40).unwrap(), Some(&40));
/// assert_eq!(*tree.minimum().unwrap(), 20);
/// assert_eq!(tree.remove(&30).unwrap(), 30);
/// assert!(tree.iter().copied().eq([20, 40, 50, 70]));
/// ```
pub struct RbTree<R: Keyed> {
    /// Owns every node; links between nodes are indices into it.
    pub(crate) arena: NodeArena<R>,

    /// Top of the tree, `None` when empty.
    pub(crate) root: Option<NodeId>,

    /// Number of records stored.
    len: usize,
}

impl<R: Keyed> RbTree<R> {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create an empty tree whose arena can hold `capacity` nodes before
    /// reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: NodeArena::with_capacity(capacity),
            root: None,
            len: 0,
        }
    }

    /// Number of records stored.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no records.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Drop every record.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
        self.len = 0;
    }

    /// The record stored at the root, if any.
    ///
    /// Which record ends up at the root depends on the insertion history;
    /// this is mostly useful for inspecting shape in tests.
    pub fn root(&self) -> Option<&R> {
        self.root.map(|id| &self.arena.get(id).value)
    }

    /// Number of nodes on the longest root-to-leaf path (0 when empty).
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(NodeId, usize)> = self.root.map(|id| (id, 1)).into_iter().collect();

        while let Some((id, depth)) = stack.pop() {
            height = height.max(depth);
            let node = self.arena.get(id);
            stack.extend(node.left.map(|child| (child, depth + 1)));
            stack.extend(node.right.map(|child| (child, depth + 1)));
        }
        height
    }

    // ========================================================================
    // Public API: Queries
    // ========================================================================

    /// Look up the record stored under `key`.
    ///
    /// # Errors
    /// - `Error::EmptyTree` if the tree has no records
    ///
    /// An absent key on a non-empty tree is `Ok(None)`, not an error.
    pub fn find(&self, key: &R::Key) -> Result<Option<&R>> {
        if self.is_empty() {
            return Err(Error::EmptyTree);
        }
        Ok(self.find_node(key).map(|id| &self.arena.get(id).value))
    }

    /// Whether a record is stored under `key`. Never fails.
    pub fn contains_key(&self, key: &R::Key) -> bool {
        self.find_node(key).is_some()
    }

    /// The record with the smallest key.
    ///
    /// # Errors
    /// - `Error::EmptyTree` if the tree has no records
    pub fn minimum(&self) -> Result<&R> {
        let root = self.root.ok_or(Error::EmptyTree)?;
        Ok(&self.arena.get(self.subtree_extreme(root, Side::Left)).value)
    }

    /// The record with the largest key.
    ///
    /// # Errors
    /// - `Error::EmptyTree` if the tree has no records
    pub fn maximum(&self) -> Result<&R> {
        let root = self.root.ok_or(Error::EmptyTree)?;
        Ok(&self.arena.get(self.subtree_extreme(root, Side::Right)).value)
    }

    // ========================================================================
    // Public API: Mutation
    // ========================================================================

    /// Insert `value`, replacing any record with the same key.
    ///
    /// Returns the replaced record. Replacing leaves shape and colors
    /// untouched; only a genuinely new key triggers rebalancing.
    pub fn insert(&mut self, value: R) -> Option<R> {
        let key = value.key();
        let mut parent = None;
        let mut side = Side::Left;
        let mut cursor = self.root;

        while let Some(id) = cursor {
            let node = self.arena.get(id);
            side = match key.cmp(&node.value.key()) {
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
                Ordering::Equal => {
                    return Some(mem::replace(&mut self.arena.get_mut(id).value, value));
                }
            };
            parent = Some(id);
            cursor = node.child(side);
        }

        let id = self.arena.alloc(Node::new(value, parent));
        match parent {
            Some(parent) => self.arena.get_mut(parent).set_child(side, Some(id)),
            None => self.root = Some(id),
        }
        self.len += 1;

        self.insert_fixup(id);
        None
    }

    /// Remove and return the record stored under `key`.
    ///
    /// # Errors
    /// - `Error::EmptyTree` if the tree has no records
    /// - `Error::KeyNotFound` if no record has that key
    pub fn remove(&mut self, key: &R::Key) -> Result<R> {
        if self.is_empty() {
            return Err(Error::EmptyTree);
        }
        let target = self.find_node(key).ok_or(Error::KeyNotFound)?;

        // A node with two children trades places with its in-order
        // predecessor, which has at most one child and is unlinked instead.
        let target_node = self.arena.get(target);
        let doomed = match target_node.left {
            Some(left) if target_node.has_two_children() => self.subtree_extreme(left, Side::Right),
            _ => target,
        };

        let doomed_node = self.arena.get(doomed);
        let child = doomed_node.left.or(doomed_node.right);

        if doomed_node.color.is_black() {
            match child {
                // A red child absorbs the lost black when it is recolored.
                Some(child) if self.color(child).is_red() => self.set_color(child, Color::Black),
                _ => self.remove_fixup(doomed),
            }
        }

        self.replace_node(doomed, child);
        if self.arena.get(doomed).parent.is_none() {
            if let Some(child) = child {
                self.set_color(child, Color::Black);
            }
        }

        let removed = self.arena.free(doomed).value;
        self.len -= 1;

        if doomed == target {
            Ok(removed)
        } else {
            Ok(mem::replace(&mut self.arena.get_mut(target).value, removed))
        }
    }

    // ========================================================================
    // Rebalancing
    // ========================================================================

    /// Restore the invariants after `node` was attached as a red leaf.
    fn insert_fixup(&mut self, mut node: NodeId) {
        loop {
            let Some(parent) = self.parent(node) else {
                self.set_color(node, Color::Black);
                return;
            };
            if self.color(parent).is_black() {
                return;
            }

            // A red parent is never the root, so the grandparent exists.
            let grandparent = self.parent(parent).unwrap_or_else(|| {
                panic!("red {parent} has no parent; root must be black")
            });
            let parent_side = self.side_of(grandparent, parent);
            let uncle = self.arena.get(grandparent).child(parent_side.opposite());

            if self.color_of(uncle).is_red() {
                self.set_color(parent, Color::Black);
                if let Some(uncle) = uncle {
                    self.set_color(uncle, Color::Black);
                }
                self.set_color(grandparent, Color::Red);
                node = grandparent;
                continue;
            }

            // Inner grandchild: rotate it into the outer position first.
            let mut parent = parent;
            if self.side_of(parent, node) != parent_side {
                self.rotate(parent, parent_side);
                parent = node;
            }

            self.set_color(parent, Color::Black);
            self.set_color(grandparent, Color::Red);
            self.rotate(grandparent, parent_side.opposite());
            return;
        }
    }

    /// Resolve the missing black left behind when black `node` is unlinked.
    ///
    /// Runs while `node` is still attached, treating its position as the one
    /// that is one black short.
    fn remove_fixup(&mut self, mut node: NodeId) {
        while let Some(parent) = self.parent(node) {
            let side = self.side_of(parent, node);
            let mut sibling = self.sibling(parent, side);

            if self.color(sibling).is_red() {
                self.set_color(parent, Color::Red);
                self.set_color(sibling, Color::Black);
                self.rotate(parent, side);
                sibling = self.sibling(parent, side);
            }

            let near = self.arena.get(sibling).child(side);
            let far = self.arena.get(sibling).child(side.opposite());

            if self.color_of(near).is_black() && self.color_of(far).is_black() {
                self.set_color(sibling, Color::Red);
                if self.color(parent).is_black() {
                    node = parent;
                    continue;
                }
                self.set_color(parent, Color::Black);
                return;
            }

            if self.color_of(far).is_black() {
                if let Some(near) = near {
                    self.set_color(near, Color::Black);
                }
                self.set_color(sibling, Color::Red);
                self.rotate(sibling, side.opposite());
                sibling = self.sibling(parent, side);
            }

            let far = self
                .arena
                .get(sibling)
                .child(side.opposite())
                .unwrap_or_else(|| panic!("{sibling} lost its red far child during fixup"));
            let parent_color = self.color(parent);
            self.set_color(sibling, parent_color);
            self.set_color(parent, Color::Black);
            self.set_color(far, Color::Black);
            self.rotate(parent, side);
            return;
        }
    }

    /// Rotate the subtree rooted at `pivot` toward `dir`.
    ///
    /// `rotate(x, Side::Left)` is a left rotation: x's right child takes x's
    /// place and x becomes its left child. The in-order sequence is unchanged.
    ///
    /// # Panics
    /// Panics if `pivot` has no child on the side opposite `dir`.
    fn rotate(&mut self, pivot: NodeId, dir: Side) {
        let riser = self
            .arena
            .get(pivot)
            .child(dir.opposite())
            .unwrap_or_else(|| panic!("cannot rotate {pivot} {dir:?}: no child to lift"));
        trace!("rotate {dir:?} at {pivot}, lifting {riser}");

        self.replace_node(pivot, Some(riser));

        let inner = self.arena.get(riser).child(dir);
        self.arena.get_mut(pivot).set_child(dir.opposite(), inner);
        if let Some(inner) = inner {
            self.arena.get_mut(inner).parent = Some(pivot);
        }

        self.arena.get_mut(riser).set_child(dir, Some(pivot));
        self.arena.get_mut(pivot).parent = Some(riser);
    }

    #[cfg(test)]
    fn rotate_left(&mut self, pivot: NodeId) {
        self.rotate(pivot, Side::Left);
    }

    #[cfg(test)]
    fn rotate_right(&mut self, pivot: NodeId) {
        self.rotate(pivot, Side::Right);
    }

    /// Put `new` where `old` hangs in its parent (or at the root).
    ///
    /// `old` keeps its own parent link; the caller decides what happens to it.
    fn replace_node(&mut self, old: NodeId, new: Option<NodeId>) {
        let parent = self.arena.get(old).parent;
        match parent {
            Some(parent) => {
                let side = self.side_of(parent, old);
                self.arena.get_mut(parent).set_child(side, new);
            }
            None => self.root = new,
        }
        if let Some(new) = new {
            self.arena.get_mut(new).parent = parent;
        }
    }

    // ========================================================================
    // Navigation helpers
    // ========================================================================

    pub(crate) fn find_node(&self, key: &R::Key) -> Option<NodeId> {
        let mut cursor = self.root;
        while let Some(id) = cursor {
            let node = self.arena.get(id);
            cursor = match key.cmp(&node.value.key()) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return Some(id),
            };
        }
        None
    }

    /// Follow `side` links from `id` until there are none left.
    fn subtree_extreme(&self, mut id: NodeId, side: Side) -> NodeId {
        while let Some(next) = self.arena.get(id).child(side) {
            id = next;
        }
        id
    }

    #[inline]
    fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.arena.get(id).parent
    }

    /// Which side of `parent` the node `child` hangs on.
    #[inline]
    fn side_of(&self, parent: NodeId, child: NodeId) -> Side {
        if self.arena.get(parent).left == Some(child) {
            Side::Left
        } else {
            Side::Right
        }
    }

    /// The sibling of the node on `side` of `parent`.
    ///
    /// # Panics
    /// A black non-root node always has a sibling (black-heights must match),
    /// so a missing one means the tree is already corrupt.
    fn sibling(&self, parent: NodeId, side: Side) -> NodeId {
        self.arena
            .get(parent)
            .child(side.opposite())
            .unwrap_or_else(|| panic!("{side:?} child of {parent} has no sibling"))
    }

    #[inline]
    pub(crate) fn color(&self, id: NodeId) -> Color {
        self.arena.get(id).color
    }

    /// Color of a possibly-nil link; nil is black.
    #[inline]
    pub(crate) fn color_of(&self, id: Option<NodeId>) -> Color {
        id.map_or(Color::Black, |id| self.color(id))
    }

    #[inline]
    fn set_color(&mut self, id: NodeId, color: Color) {
        self.arena.get_mut(id).color = color;
    }
}

impl<R: Keyed> Default for RbTree<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Keyed + fmt::Debug> fmt::Debug for RbTree<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<R: Keyed> Extend<R> for RbTree<R> {
    fn extend<I: IntoIterator<Item = R>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<R: Keyed> FromIterator<R> for RbTree<R> {
    fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
        let mut tree = RbTree::new();
        tree.extend(iter);
        tree
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Car {
        brand: &'static str,
        price: u32,
    }

    impl Keyed for Car {
        type Key = u32;

        fn key(&self) -> u32 {
            self.price
        }
    }

    fn car(brand: &'static str, price: u32) -> Car {
        Car { brand, price }
    }

    fn keys(tree: &RbTree<u32>) -> Vec<u32> {
        tree.iter().copied().collect()
    }

    // --- Construction ---

    #[test]
    fn test_new_tree_is_empty() {
        let tree: RbTree<u32> = RbTree::new();
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.height(), 0);
        assert!(tree.root().is_none());
    }

    // --- Insert ---

    #[test]
    fn test_insert_first_is_black_root() {
        let mut tree = RbTree::new();
        tree.insert(10u32);

        let root = tree.root.unwrap();
        assert_eq!(tree.color(root), Color::Black);
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn test_insert_duplicate_overwrites() {
        let mut tree = RbTree::new();
        assert!(tree.insert(car("Ford", 100)).is_none());
        tree.insert(car("Audi", 200));

        let replaced = tree.insert(car("Toyota", 100));
        assert_eq!(replaced, Some(car("Ford", 100)));
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.find(&100).unwrap().unwrap().brand, "Toyota");
    }

    #[test]
    fn test_insert_red_uncle_recolors() {
        // 20 is black root with red children 10 and 30; inserting 5 makes the
        // uncle (30) red, so both children turn black and the root stays black.
        let mut tree = RbTree::new();
        tree.extend([20u32, 10, 30, 5]);

        let root = tree.root.unwrap();
        let left = tree.arena.get(root).left.unwrap();
        let right = tree.arena.get(root).right.unwrap();
        assert_eq!(tree.color(root), Color::Black);
        assert_eq!(tree.color(left), Color::Black);
        assert_eq!(tree.color(right), Color::Black);
        assert!(tree.audit().is_ok());
    }

    #[test]
    fn test_insert_inner_grandchild_double_rotation() {
        // 30 -> 10 -> 20 is a left-right zigzag; 20 must end up at the root.
        let mut tree = RbTree::new();
        tree.extend([30u32, 10, 20]);

        assert_eq!(tree.root(), Some(&20));
        assert_eq!(keys(&tree), vec![10, 20, 30]);
        assert!(tree.audit().is_ok());
    }

    #[test]
    fn test_insert_outer_grandchild_single_rotation() {
        let mut tree = RbTree::new();
        tree.extend([10u32, 20, 30]);

        assert_eq!(tree.root(), Some(&20));
        assert_eq!(tree.height(), 2);
        assert!(tree.audit().is_ok());
    }

    #[test]
    fn test_insert_ascending_stays_shallow() {
        let mut tree = RbTree::new();
        tree.extend([10u32, 20, 30, 40, 50, 60, 70]);

        assert!(tree.height() <= 6, "height {} too large", tree.height());
        assert_eq!(keys(&tree), vec![10, 20, 30, 40, 50, 60, 70]);
    }

    // --- Find / min / max ---

    #[test]
    fn test_find_on_empty_fails() {
        let tree: RbTree<u32> = RbTree::new();
        assert!(matches!(tree.find(&1), Err(Error::EmptyTree)));
        assert!(!tree.contains_key(&1));
    }

    #[test]
    fn test_find_missing_is_none() {
        let tree: RbTree<u32> = [1, 2, 3].into_iter().collect();
        assert_eq!(tree.find(&4).unwrap(), None);
        assert_eq!(tree.find(&2).unwrap(), Some(&2));
    }

    #[test]
    fn test_min_max() {
        let tree: RbTree<u32> = [50, 30, 70, 20, 40, 60, 80].into_iter().collect();
        assert_eq!(*tree.minimum().unwrap(), 20);
        assert_eq!(*tree.maximum().unwrap(), 80);
    }

    #[test]
    fn test_min_max_on_empty_fail() {
        let tree: RbTree<u32> = RbTree::new();
        assert!(matches!(tree.minimum(), Err(Error::EmptyTree)));
        assert!(matches!(tree.maximum(), Err(Error::EmptyTree)));
    }

    // --- Remove ---

    #[test]
    fn test_remove_on_empty_fails() {
        let mut tree: RbTree<u32> = RbTree::new();
        assert!(matches!(tree.remove(&1), Err(Error::EmptyTree)));
    }

    #[test]
    fn test_remove_missing_fails() {
        let mut tree: RbTree<u32> = [1, 2, 3].into_iter().collect();
        assert!(matches!(tree.remove(&9), Err(Error::KeyNotFound)));
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn test_remove_only_node() {
        let mut tree = RbTree::new();
        tree.insert(5u32);
        assert_eq!(tree.remove(&5).unwrap(), 5);
        assert!(tree.is_empty());
        assert!(tree.root.is_none());
    }

    #[test]
    fn test_remove_root_with_one_red_child() {
        let mut tree = RbTree::new();
        tree.extend([10u32, 20]);
        tree.remove(&10).unwrap();

        let root = tree.root.unwrap();
        assert_eq!(tree.arena.get(root).value, 20);
        assert_eq!(tree.color(root), Color::Black);
        assert!(tree.arena.get(root).parent.is_none());
    }

    #[test]
    fn test_remove_two_children_uses_predecessor() {
        let mut tree = RbTree::new();
        tree.extend([car("A", 50), car("B", 30), car("C", 70), car("D", 40)]);

        let removed = tree.remove(&50).unwrap();
        assert_eq!(removed, car("A", 50));

        // 40 was the predecessor of 50 and moved into its node
        assert_eq!(tree.find(&40).unwrap().unwrap().brand, "D");
        assert!(tree.find(&50).unwrap().is_none());
        assert!(tree.audit().is_ok());
    }

    #[test]
    fn test_remove_black_leaf_red_sibling() {
        // Sibling of the removed leaf is red: exercises the rotate-at-parent
        // case before the recolor cases.
        let mut tree = RbTree::new();
        tree.extend([10u32, 5, 20, 15, 30, 25, 35, 40]);
        tree.audit().unwrap();

        tree.remove(&5).unwrap();
        tree.audit().unwrap();
        assert_eq!(keys(&tree), vec![10, 15, 20, 25, 30, 35, 40]);
    }

    #[test]
    fn test_remove_every_key_in_turn() {
        for victim in 1..=31u32 {
            let mut tree: RbTree<u32> = (1..=31).collect();
            tree.remove(&victim).unwrap();
            tree.audit().unwrap();
            assert_eq!(tree.len(), 30);
            assert!(!tree.contains_key(&victim));
        }
    }

    #[test]
    fn test_drain_ascending_and_descending() {
        let mut tree: RbTree<u32> = (0..64).collect();
        for k in 0..32 {
            tree.remove(&k).unwrap();
            tree.audit().unwrap();
        }
        for k in (32..64).rev() {
            tree.remove(&k).unwrap();
            tree.audit().unwrap();
        }
        assert!(tree.is_empty());
        assert!(tree.root.is_none());
    }

    #[test]
    fn test_removed_slots_are_reused() {
        let mut tree: RbTree<u32> = (0..16).collect();
        let slots = tree.arena.slot_count();

        for k in 0..8 {
            tree.remove(&k).unwrap();
        }
        for k in 100..108 {
            tree.insert(k);
        }
        assert_eq!(tree.arena.slot_count(), slots);
        assert_eq!(tree.arena.live(), tree.len());
    }

    // --- Rotations ---

    #[test]
    fn test_rotate_left_relinks() {
        let mut tree: RbTree<u32> = [20, 10, 30, 25, 40].into_iter().collect();
        let root = tree.root.unwrap();
        let right = tree.arena.get(root).right.unwrap();
        let right_left = tree.arena.get(right).left.unwrap();

        tree.rotate_left(root);

        assert_eq!(tree.root, Some(right));
        assert_eq!(tree.arena.get(right).parent, None);
        assert_eq!(tree.arena.get(right).left, Some(root));
        assert_eq!(tree.arena.get(root).parent, Some(right));
        assert_eq!(tree.arena.get(root).right, Some(right_left));
        assert_eq!(tree.arena.get(right_left).parent, Some(root));
        assert_eq!(keys(&tree), vec![10, 20, 25, 30, 40]);
    }

    #[test]
    fn test_rotate_right_then_left_restores_shape() {
        let mut tree: RbTree<u32> = [20, 10, 30, 5, 15].into_iter().collect();
        let root = tree.root.unwrap();
        let left = tree.arena.get(root).left.unwrap();

        tree.rotate_right(root);
        assert_eq!(tree.root, Some(left));
        assert_eq!(keys(&tree), vec![5, 10, 15, 20, 30]);

        tree.rotate_left(left);
        assert_eq!(tree.root, Some(root));
        assert_eq!(tree.arena.get(root).left, Some(left));
        assert!(tree.audit().is_ok());
    }

    // --- Misc ---

    #[test]
    fn test_clear() {
        let mut tree: RbTree<u32> = (0..10).collect();
        tree.clear();
        assert!(tree.is_empty());
        assert!(matches!(tree.minimum(), Err(Error::EmptyTree)));

        tree.insert(3);
        assert_eq!(keys(&tree), vec![3]);
    }

    #[test]
    fn test_debug_lists_in_order() {
        let tree: RbTree<u32> = [3, 1, 2].into_iter().collect();
        assert_eq!(format!("{:?}", tree), "{1, 2, 3}");
    }

    #[test]
    fn test_pair_records_act_as_map() {
        let mut tree = RbTree::new();
        tree.insert(("b", 2));
        tree.insert(("a", 1));
        tree.insert(("b", 20));

        assert_eq!(tree.len(), 2);
        assert_eq!(tree.find(&"b").unwrap(), Some(&("b", 20)));
    }
}
