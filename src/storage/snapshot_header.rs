//! Snapshot header definition.
//!
//! Every snapshot starts with a [`SnapshotHeader`] containing:
//! - Magic bytes and format version
//! - Number of records in the body
//! - CRC32 checksum of the body

use crate::common::config::{SNAPSHOT_MAGIC, SNAPSHOT_VERSION};
use crate::common::{Error, Result};

/// Metadata stored at the beginning of every snapshot.
///
/// # Layout (20 bytes)
/// ```text
/// Offset  Size  Field
/// ------  ----  -----
/// 0       4     magic ("ORDT")
/// 4       2     version (little-endian)
/// 6       2     flags (reserved, zero)
/// 8       8     record_count (little-endian)
/// 16      4     checksum (CRC32 of the body, little-endian)
/// ```
///
/// # Checksum
/// The checksum covers only the body that follows the header, so the header
/// can be written in one pass once the body is known.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SnapshotHeader {
    /// Format version the snapshot was written with.
    pub version: u16,
    /// Reserved for future use; always zero today.
    pub flags: u16,
    /// Number of records framed in the body.
    pub record_count: u64,
    /// CRC32 checksum of the body.
    pub checksum: u32,
}

impl SnapshotHeader {
    /// Size of the header in bytes.
    pub const SIZE: usize = 20;

    /// Offset of each field within the header.
    pub const OFFSET_MAGIC: usize = 0;
    pub const OFFSET_VERSION: usize = 4;
    pub const OFFSET_FLAGS: usize = 6;
    pub const OFFSET_RECORD_COUNT: usize = 8;
    pub const OFFSET_CHECKSUM: usize = 16;

    /// Create a header for the current format version.
    pub fn new(record_count: u64, checksum: u32) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            flags: 0,
            record_count,
            checksum,
        }
    }

    /// Read a header from the beginning of a byte slice.
    ///
    /// # Errors
    /// - `Error::CorruptSnapshot` if the slice is too short or the magic is wrong
    /// - `Error::UnsupportedVersion` if the version is not [`SNAPSHOT_VERSION`]
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        if data.len() < Self::SIZE {
            return Err(Error::CorruptSnapshot(format!(
                "header needs {} bytes, got {}",
                Self::SIZE,
                data.len()
            )));
        }

        if data[Self::OFFSET_MAGIC..Self::OFFSET_MAGIC + 4] != SNAPSHOT_MAGIC {
            return Err(Error::CorruptSnapshot("bad magic".into()));
        }

        let version = u16::from_le_bytes([
            data[Self::OFFSET_VERSION],
            data[Self::OFFSET_VERSION + 1],
        ]);
        if version != SNAPSHOT_VERSION {
            return Err(Error::UnsupportedVersion(version));
        }

        let flags = u16::from_le_bytes([data[Self::OFFSET_FLAGS], data[Self::OFFSET_FLAGS + 1]]);

        let mut count_bytes = [0u8; 8];
        count_bytes.copy_from_slice(&data[Self::OFFSET_RECORD_COUNT..Self::OFFSET_RECORD_COUNT + 8]);
        let record_count = u64::from_le_bytes(count_bytes);

        let checksum = u32::from_le_bytes([
            data[Self::OFFSET_CHECKSUM],
            data[Self::OFFSET_CHECKSUM + 1],
            data[Self::OFFSET_CHECKSUM + 2],
            data[Self::OFFSET_CHECKSUM + 3],
        ]);

        Ok(Self {
            version,
            flags,
            record_count,
            checksum,
        })
    }

    /// Write this header to the beginning of a byte slice.
    ///
    /// # Panics
    /// Panics if `data.len() < SnapshotHeader::SIZE`.
    pub fn write_to(&self, data: &mut [u8]) {
        assert!(data.len() >= Self::SIZE, "buffer too small for SnapshotHeader");

        data[Self::OFFSET_MAGIC..Self::OFFSET_MAGIC + 4].copy_from_slice(&SNAPSHOT_MAGIC);
        data[Self::OFFSET_VERSION..Self::OFFSET_VERSION + 2]
            .copy_from_slice(&self.version.to_le_bytes());
        data[Self::OFFSET_FLAGS..Self::OFFSET_FLAGS + 2].copy_from_slice(&self.flags.to_le_bytes());
        data[Self::OFFSET_RECORD_COUNT..Self::OFFSET_RECORD_COUNT + 8]
            .copy_from_slice(&self.record_count.to_le_bytes());
        data[Self::OFFSET_CHECKSUM..Self::OFFSET_CHECKSUM + 4]
            .copy_from_slice(&self.checksum.to_le_bytes());
    }

    /// Compute the CRC32 checksum of a snapshot body.
    pub fn compute_checksum(body: &[u8]) -> u32 {
        let mut hasher = crc32fast::Hasher::new();
        hasher.update(body);
        hasher.finalize()
    }

    /// Check the stored checksum against `body`.
    ///
    /// # Errors
    /// Returns `Error::ChecksumMismatch` if they differ.
    pub fn verify_checksum(&self, body: &[u8]) -> Result<()> {
        let actual = Self::compute_checksum(body);
        if actual == self.checksum {
            Ok(())
        } else {
            Err(Error::ChecksumMismatch {
                expected: self.checksum,
                actual,
            })
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
