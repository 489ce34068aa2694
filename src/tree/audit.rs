//! Structural invariant checks.
//!
//! [`RbTree::audit`] walks the whole tree and reports the first property that
//! does not hold. It is O(n) and meant for tests and debugging, not for the
//! hot path.

use std::cmp::Ordering;

use thiserror::Error;

use crate::common::NodeId;
use crate::tree::{Color, Keyed, RbTree};

/// A broken structural property found by [`RbTree::audit`].
///
/// Any of these means the tree is corrupt; none can be produced through the
/// public API of a correct implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    /// The root is red.
    #[error("root {0} is red")]
    RedRoot(NodeId),

    /// A red node has a red child.
    #[error("red {parent} has red child {child}")]
    RedRed {
        /// The red parent.
        parent: NodeId,
        /// Its red child.
        child: NodeId,
    },

    /// Two subtrees of one node have different black-heights.
    #[error("{node} has black-height {left} on the left and {right} on the right")]
    BlackHeight {
        /// Node whose subtrees disagree.
        node: NodeId,
        /// Black-height of the left subtree.
        left: usize,
        /// Black-height of the right subtree.
        right: usize,
    },

    /// A child's parent link does not point back at its parent.
    #[error("{child} should have parent {expected:?} but has {actual:?}")]
    BrokenParentLink {
        /// The child whose back-link is wrong.
        child: NodeId,
        /// The node that actually holds it.
        expected: Option<NodeId>,
        /// The stored back-link.
        actual: Option<NodeId>,
    },

    /// In-order keys are not strictly increasing at this node.
    #[error("{0} is out of key order")]
    OutOfOrder(NodeId),

    /// The stored length disagrees with the number of reachable nodes.
    #[error("tree claims {claimed} records but {reachable} are reachable")]
    LengthMismatch {
        /// Value reported by `len()`.
        claimed: usize,
        /// Nodes reachable from the root.
        reachable: usize,
    },
}

/// Summary returned by a successful [`RbTree::audit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AuditReport {
    /// Number of reachable records.
    pub len: usize,
    /// Nodes on the longest root-to-leaf path.
    pub height: usize,
    /// Black nodes on any path from the root (exclusive) to a nil leaf.
    pub black_height: usize,
}

impl<R: Keyed> RbTree<R> {
    /// Verify every red-black invariant plus link and ordering consistency.
    ///
    /// # Errors
    /// Returns the first [`Violation`] encountered.
    ///
    /// # Example
    /// ```
    /// use ordtree::RbTree;
    ///
    /// let tree: RbTree<u32> = (0..100).collect();
    /// let report = tree.audit().unwrap();
    /// assert_eq!(report.len, 100);
    /// assert!(report.height <= 2 * 7); // 2 * log2(101), rounded up
    /// ```
    pub fn audit(&self) -> Result<AuditReport, Violation> {
        let Some(root) = self.root else {
            return match self.len() {
                0 => Ok(AuditReport::default()),
                claimed => Err(Violation::LengthMismatch {
                    claimed,
                    reachable: 0,
                }),
            };
        };

        if self.color(root).is_red() {
            return Err(Violation::RedRoot(root));
        }
        self.check_link(root, None)?;

        let mut report = AuditReport::default();
        let mut previous: Option<R::Key> = None;
        let black_height = self.audit_subtree(root, 1, &mut report, &mut previous)?;
        // The subtree walk counts the root itself; black-height excludes it.
        report.black_height = black_height - 1;

        if report.len != self.len() {
            return Err(Violation::LengthMismatch {
                claimed: self.len(),
                reachable: report.len,
            });
        }
        Ok(report)
    }

    /// Returns the number of black nodes from `id` (inclusive) down to any nil.
    fn audit_subtree(
        &self,
        id: NodeId,
        depth: usize,
        report: &mut AuditReport,
        previous: &mut Option<R::Key>,
    ) -> Result<usize, Violation> {
        let node = self.arena.get(id);
        report.height = report.height.max(depth);

        for child in [node.left, node.right].into_iter().flatten() {
            self.check_link(child, Some(id))?;
            if node.color.is_red() && self.color(child).is_red() {
                return Err(Violation::RedRed { parent: id, child });
            }
        }

        let left = match node.left {
            Some(left) => self.audit_subtree(left, depth + 1, report, previous)?,
            None => 0,
        };

        let key = node.value.key();
        if let Some(prev) = previous.as_ref() {
            if prev.cmp(&key) != Ordering::Less {
                return Err(Violation::OutOfOrder(id));
            }
        }
        *previous = Some(key);
        report.len += 1;

        let right = match node.right {
            Some(right) => self.audit_subtree(right, depth + 1, report, previous)?,
            None => 0,
        };

        if left != right {
            return Err(Violation::BlackHeight {
                node: id,
                left,
                right,
            });
        }
        Ok(left + usize::from(node.color == Color::Black))
    }

    fn check_link(&self, child: NodeId, expected: Option<NodeId>) -> Result<(), Violation> {
        let actual = self.arena.get(child).parent;
        if actual == expected {
            Ok(())
        } else {
            Err(Violation::BrokenParentLink {
                child,
                expected,
                actual,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_audit_empty() {
        let tree: RbTree<u32> = RbTree::new();
        assert_eq!(tree.audit(), Ok(AuditReport::default()));
    }

    #[test]
    fn test_audit_single() {
        let tree: RbTree<u32> = [1].into_iter().collect();
        let report = tree.audit().unwrap();
        assert_eq!(report.len, 1);
        assert_eq!(report.height, 1);
        assert_eq!(report.black_height, 0);
    }

    #[test]
    fn test_audit_seven() {
        let tree: RbTree<u32> = [50, 30, 70, 20, 40, 60, 80].into_iter().collect();
        let report = tree.audit().unwrap();
        assert_eq!(report.len, 7);
        assert_eq!(report.height, 3);
        // Root black, 30/70 black, leaves red
        assert_eq!(report.black_height, 1);
    }

    #[test]
    fn test_detects_red_root() {
        let mut tree: RbTree<u32> = [1, 2].into_iter().collect();
        let root = tree.root.unwrap();
        tree.arena.get_mut(root).color = Color::Red;
        assert_eq!(tree.audit(), Err(Violation::RedRoot(root)));
    }

    #[test]
    fn test_detects_red_red() {
        let mut tree: RbTree<u32> = [2, 1, 3, 4].into_iter().collect();
        // 3 is black with red child 4; painting 3 red creates a red-red edge
        let three = tree.find_node(&3).unwrap();
        let four = tree.find_node(&4).unwrap();
        tree.arena.get_mut(three).color = Color::Red;
        assert_eq!(
            tree.audit(),
            Err(Violation::RedRed {
                parent: three,
                child: four
            })
        );
    }

    #[test]
    fn test_detects_black_height_mismatch() {
        let mut tree: RbTree<u32> = [2, 1, 3].into_iter().collect();
        let one = tree.find_node(&1).unwrap();
        tree.arena.get_mut(one).color = Color::Black;
        assert!(matches!(tree.audit(), Err(Violation::BlackHeight { .. })));
    }

    #[test]
    fn test_detects_broken_parent_link() {
        let mut tree: RbTree<u32> = [2, 1, 3].into_iter().collect();
        let one = tree.find_node(&1).unwrap();
        let three = tree.find_node(&3).unwrap();
        tree.arena.get_mut(one).parent = Some(three);
        assert!(matches!(
            tree.audit(),
            Err(Violation::BrokenParentLink { child, .. }) if child == one
        ));
    }

    #[test]
    fn test_detects_out_of_order() {
        let mut tree: RbTree<u32> = [2, 1, 3].into_iter().collect();
        let one = tree.find_node(&1).unwrap();
        tree.arena.get_mut(one).value = 5;
        assert!(matches!(tree.audit(), Err(Violation::OutOfOrder(_))));
    }

    #[test]
    fn test_violation_display() {
        let v = Violation::RedRoot(NodeId::new(3));
        assert_eq!(format!("{}", v), "root Node(3) is red");
    }
}
