//! Error types for ordtree.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
/// This is a common Rust pattern (see `std::io::Result`).
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in ordtree.
///
/// Tree operations only ever produce [`Error::EmptyTree`] and
/// [`Error::KeyNotFound`]; the remaining variants come from the snapshot
/// layer. Broken red-black invariants are not errors: they are bugs and panic.
#[derive(Debug, Error)]
pub enum Error {
    /// The operation needs at least one node but the tree has none.
    #[error("tree is empty")]
    EmptyTree,

    /// `remove` was asked for a key that is not stored.
    #[error("key not found")]
    KeyNotFound,

    /// I/O error from snapshot file operations.
    ///
    /// This wraps `std::io::Error` from file read/write operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Snapshot bytes are malformed (bad magic, truncated, bad framing).
    #[error("corrupt snapshot: {0}")]
    CorruptSnapshot(String),

    /// A record encodes to more bytes than a snapshot frame allows.
    #[error("record of {size} bytes exceeds the {max} byte limit")]
    RecordTooLarge {
        /// Encoded size of the offending record.
        size: usize,
        /// Configured limit (`MAX_RECORD_SIZE`).
        max: usize,
    },

    /// Snapshot was written by a format version this build cannot read.
    #[error("unsupported snapshot version {0}")]
    UnsupportedVersion(u16),

    /// Stored body checksum does not match the bytes on disk.
    #[error("snapshot checksum mismatch: expected {expected:#010x}, actual {actual:#010x}")]
    ChecksumMismatch {
        /// Checksum recorded in the header.
        expected: u32,
        /// Checksum computed over the body that was read.
        actual: u32,
    },
}
