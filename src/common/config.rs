//! Configuration constants for ordtree.

/// Magic bytes at the start of every snapshot file.
///
/// Chosen so a hex dump reads `ORDT`, which makes a misplaced or foreign
/// file easy to spot before any decoding is attempted.
pub const SNAPSHOT_MAGIC: [u8; 4] = *b"ORDT";

/// Current snapshot format version.
///
/// Bump this whenever the header or record framing changes. Readers refuse
/// any other version instead of guessing.
pub const SNAPSHOT_VERSION: u16 = 1;

/// Largest encoded record accepted when reading a snapshot (16MB).
///
/// Record lengths come from disk, so a corrupted length prefix must not be
/// able to trigger an arbitrarily large allocation.
pub const MAX_RECORD_SIZE: usize = 16 * 1024 * 1024;

/// Initial arena capacity used by `RbTree::new`.
///
/// Zero keeps construction allocation-free; the arena grows on first insert.
pub const DEFAULT_CAPACITY: usize = 0;
