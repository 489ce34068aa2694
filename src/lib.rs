//! ordtree - an arena-backed red-black tree keyed by a projected record key.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                            ordtree                              │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │              Tree Core (tree/)                           │   │
//! │  │   Keyed → RbTree (insert/remove/find/min/max)            │   │
//! │  │   Traversal (in/pre/post-order) + Audit                  │   │
//! │  │   NodeArena: nodes linked by NodeId, no owning cycles    │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓ in-order records                 │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │           Storage Layer (storage/)                       │   │
//! │  │     Persist + SnapshotHeader (CRC32) + SnapshotFile      │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (NodeId, Error, config)
//! - [`tree`] - The red-black tree, traversals, and invariant auditor
//! - [`storage`] - Snapshot encoding and files
//!
//! # Quick Start
//! ```
//! use ordtree::{Keyed, RbTree, TraversalOrder};
//!
//! #[derive(Debug)]
//! struct Car {
//!     brand: &'static str,
//!     price: u32,
//! }
//!
//! impl Keyed for Car {
//!     type Key = u32;
//!     fn key(&self) -> u32 {
//!         self.price
//!     }
//! }
//!
//! let mut tree = RbTree::new();
//! tree.insert(Car { brand: "Toyota", price: 300 });
//! tree.insert(Car { brand: "Ford", price: 100 });
//! tree.insert(Car { brand: "Porsche", price: 1000 });
//!
//! assert_eq!(tree.maximum().unwrap().brand, "Porsche");
//! tree.remove(&100).unwrap();
//!
//! let brands: Vec<_> = tree.traverse(TraversalOrder::InOrder).map(|c| c.brand).collect();
//! assert_eq!(brands, ["Toyota", "Porsche"]);
//! ```

pub mod common;
pub mod storage;
pub mod tree;

// Re-export commonly used items at crate root for convenience
pub use common::{Error, NodeId, Result};
pub use tree::{AuditReport, Color, Keyed, RbTree, Traversal, TraversalOrder, Violation};
