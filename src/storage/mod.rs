//! Storage layer - snapshot persistence for trees.
//!
//! This module handles persistent storage:
//! - [`Persist`] - Record byte encoding
//! - [`SnapshotHeader`] - Metadata at the start of every snapshot
//! - [`SnapshotFile`] - Save/load a tree to/from a file
//!
//! The tree itself knows nothing about bytes; this layer only reads it through
//! in-order traversal and rebuilds it through `insert`.

mod persist;
mod snapshot;
mod snapshot_header;

pub use persist::Persist;
pub use snapshot::{decode_snapshot, encode_snapshot, SnapshotFile};
pub use snapshot_header::SnapshotHeader;
