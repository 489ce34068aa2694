//! Tree node and child-side plumbing.

use crate::common::NodeId;
use crate::tree::Color;

/// Which child slot of a parent a node occupies.
///
/// Every fixup case has a mirror image; writing the cases once in terms of
/// `Side` and its `opposite()` keeps both halves identical by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

impl Side {
    #[inline]
    pub(crate) fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// A single node stored in the arena.
///
/// All links are [`NodeId`]s. `left` and `right` are the owning edges of the
/// tree shape; `parent` is only used to walk upward during fixups.
#[derive(Debug)]
pub(crate) struct Node<R> {
    pub(crate) value: R,
    pub(crate) color: Color,
    pub(crate) parent: Option<NodeId>,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
}

impl<R> Node<R> {
    /// A fresh red leaf hanging off `parent`.
    pub(crate) fn new(value: R, parent: Option<NodeId>) -> Self {
        Self {
            value,
            color: Color::Red,
            parent,
            left: None,
            right: None,
        }
    }

    #[inline]
    pub(crate) fn child(&self, side: Side) -> Option<NodeId> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    #[inline]
    pub(crate) fn set_child(&mut self, side: Side, child: Option<NodeId>) {
        match side {
            Side::Left => self.left = child,
            Side::Right => self.right = child,
        }
    }

    #[inline]
    pub(crate) fn has_two_children(&self) -> bool {
        self.left.is_some() && self.right.is_some()
    }
}
