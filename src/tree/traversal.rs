//! Depth-first traversals.
//!
//! All three orders share one explicit-stack iterator, so walking a tree never
//! recurses and every call to [`RbTree::traverse`] starts from scratch.

use std::iter::FusedIterator;
use std::ops::ControlFlow;

use crate::common::NodeId;
use crate::tree::{Keyed, RbTree};

/// Order in which a traversal emits records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TraversalOrder {
    /// Left subtree, node, right subtree: ascending key order.
    #[default]
    InOrder,
    /// Node, left subtree, right subtree.
    PreOrder,
    /// Left subtree, right subtree, node.
    PostOrder,
}

/// A pending unit of work on the traversal stack.
#[derive(Debug, Clone, Copy)]
enum Step {
    /// Schedule this node and its subtrees according to the order.
    Expand(NodeId),
    /// Emit this node's record.
    Emit(NodeId),
}

/// Lazy iterator over a tree's records in a chosen [`TraversalOrder`].
///
/// Created by [`RbTree::traverse`] and [`RbTree::iter`]. Holds at most
/// O(height) pending steps.
pub struct Traversal<'a, R: Keyed> {
    tree: &'a RbTree<R>,
    order: TraversalOrder,
    stack: Vec<Step>,
    remaining: usize,
}

impl<'a, R: Keyed> Traversal<'a, R> {
    fn new(tree: &'a RbTree<R>, order: TraversalOrder) -> Self {
        Self {
            tree,
            order,
            stack: tree.root.map(Step::Expand).into_iter().collect(),
            remaining: tree.len(),
        }
    }

    /// The order this traversal follows.
    pub fn order(&self) -> TraversalOrder {
        self.order
    }
}

impl<'a, R: Keyed> Iterator for Traversal<'a, R> {
    type Item = &'a R;

    fn next(&mut self) -> Option<&'a R> {
        let tree = self.tree;
        while let Some(step) = self.stack.pop() {
            let id = match step {
                Step::Emit(id) => {
                    self.remaining -= 1;
                    return Some(&tree.arena.get(id).value);
                }
                Step::Expand(id) => id,
            };

            // Pushed in reverse: the last push is handled first.
            let node = tree.arena.get(id);
            let left = node.left.map(Step::Expand);
            let right = node.right.map(Step::Expand);
            match self.order {
                TraversalOrder::InOrder => {
                    self.stack.extend(right);
                    self.stack.push(Step::Emit(id));
                    self.stack.extend(left);
                }
                TraversalOrder::PreOrder => {
                    self.stack.extend(right);
                    self.stack.extend(left);
                    self.stack.push(Step::Emit(id));
                }
                TraversalOrder::PostOrder => {
                    self.stack.push(Step::Emit(id));
                    self.stack.extend(right);
                    self.stack.extend(left);
                }
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<R: Keyed> ExactSizeIterator for Traversal<'_, R> {}

impl<R: Keyed> FusedIterator for Traversal<'_, R> {}

impl<R: Keyed> Clone for Traversal<'_, R> {
    fn clone(&self) -> Self {
        Self {
            tree: self.tree,
            order: self.order,
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

impl<R: Keyed> RbTree<R> {
    /// Walk every record in `order`.
    ///
    /// The iterator is lazy; an empty tree yields nothing.
    ///
    /// # Example
    /// ```
    /// use ordtree::{RbTree, TraversalOrder};
    ///
    /// let tree: RbTree<u32> = [2, 1, 3].into_iter().collect();
    ///
    /// let pre: Vec<_> = tree.traverse(TraversalOrder::PreOrder).copied().collect();
    /// let post: Vec<_> = tree.traverse(TraversalOrder::PostOrder).copied().collect();
    /// assert_eq!(pre, vec![2, 1, 3]);
    /// assert_eq!(post, vec![1, 3, 2]);
    /// ```
    pub fn traverse(&self, order: TraversalOrder) -> Traversal<'_, R> {
        Traversal::new(self, order)
    }

    /// Records in ascending key order.
    pub fn iter(&self) -> Traversal<'_, R> {
        self.traverse(TraversalOrder::InOrder)
    }

    /// Call `visitor` once per record, in `order`.
    pub fn visit<F>(&self, order: TraversalOrder, mut visitor: F)
    where
        F: FnMut(&R),
    {
        for value in self.traverse(order) {
            visitor(value);
        }
    }

    /// Call `visitor` per record until it returns `ControlFlow::Break`.
    ///
    /// Returns the first break value, or `ControlFlow::Continue(())` if the
    /// walk finished.
    ///
    /// # Example
    /// ```
    /// use std::ops::ControlFlow;
    /// use ordtree::{RbTree, TraversalOrder};
    ///
    /// let tree: RbTree<u32> = (1..=100).collect();
    /// let first_even_over_40 = tree.try_visit(TraversalOrder::InOrder, |&k| {
    ///     if k > 40 && k % 2 == 0 {
    ///         ControlFlow::Break(k)
    ///     } else {
    ///         ControlFlow::Continue(())
    ///     }
    /// });
    /// assert_eq!(first_even_over_40, ControlFlow::Break(42));
    /// ```
    pub fn try_visit<B, F>(&self, order: TraversalOrder, mut visitor: F) -> ControlFlow<B>
    where
        F: FnMut(&R) -> ControlFlow<B>,
    {
        for value in self.traverse(order) {
            visitor(value)?;
        }
        ControlFlow::Continue(())
    }
}

impl<'a, R: Keyed> IntoIterator for &'a RbTree<R> {
    type Item = &'a R;
    type IntoIter = Traversal<'a, R>;

    fn into_iter(self) -> Traversal<'a, R> {
        self.iter()
    }
}
