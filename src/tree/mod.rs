//! The red-black tree core.
//!
//! # Components
//! - [`Keyed`] - The ordering contract for stored records
//! - [`RbTree`] - The tree engine (insert, remove, find, min/max)
//! - [`Traversal`] / [`TraversalOrder`] - Lazy depth-first walks
//! - [`AuditReport`] / [`Violation`] - Invariant checking
//!
//! Nodes live in an arena and link to each other by [`NodeId`](crate::NodeId),
//! so parent back-references never own anything.

mod arena;
mod audit;
mod color;
mod keyed;
mod node;
mod rb_tree;
mod traversal;

pub use audit::{AuditReport, Violation};
pub use color::Color;
pub use keyed::Keyed;
pub use rb_tree::RbTree;
pub use traversal::{Traversal, TraversalOrder};
