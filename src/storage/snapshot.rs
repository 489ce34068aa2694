//! Snapshots - saving a tree to a file and loading it back.
//!
//! A snapshot is the tree's in-order record sequence behind a
//! [`SnapshotHeader`]. Loading replays the records through
//! [`RbTree::insert`], so the restored tree is balanced on its own and may have
//! a different shape than the one that was saved.

use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;

use log::{debug, warn};

use crate::common::config::MAX_RECORD_SIZE;
use crate::common::{Error, Result};
use crate::storage::{Persist, SnapshotHeader};
use crate::tree::{Keyed, RbTree};

/// Size of the length prefix in front of every record.
const FRAME_PREFIX: usize = 4;

/// Encode `tree` as snapshot bytes.
///
/// # File Layout
/// ```text
/// ┌──────────────┬──────────┬─────────┬──────────┬─────────┬─────┐
/// │ Header (20B) │ len0 u32 │ record0 │ len1 u32 │ record1 │ ... │
/// └──────────────┴──────────┴─────────┴──────────┴─────────┴─────┘
/// ```
/// Records appear in ascending key order.
///
/// # Errors
/// Returns `Error::RecordTooLarge` if a record encodes to more than
/// `MAX_RECORD_SIZE` bytes.
pub fn encode_snapshot<R: Keyed + Persist>(tree: &RbTree<R>) -> Result<Vec<u8>> {
    let mut out = vec![0u8; SnapshotHeader::SIZE];

    for record in tree.iter() {
        let len_at = out.len();
        out.extend_from_slice(&[0u8; FRAME_PREFIX]);
        record.write_to(&mut out);

        let size = out.len() - len_at - FRAME_PREFIX;
        if size > MAX_RECORD_SIZE {
            return Err(Error::RecordTooLarge {
                size,
                max: MAX_RECORD_SIZE,
            });
        }
        out[len_at..len_at + FRAME_PREFIX].copy_from_slice(&(size as u32).to_le_bytes());
    }

    let body = &out[SnapshotHeader::SIZE..];
    let header = SnapshotHeader::new(tree.len() as u64, SnapshotHeader::compute_checksum(body));
    header.write_to(&mut out[..SnapshotHeader::SIZE]);

    Ok(out)
}

/// Rebuild a tree from snapshot bytes.
///
/// # Errors
/// - `Error::CorruptSnapshot` for a bad header, bad framing, or a record count
///   that does not match the header
/// - `Error::UnsupportedVersion` for a snapshot from another format version
/// - `Error::ChecksumMismatch` if the body was altered
pub fn decode_snapshot<R: Keyed + Persist>(bytes: &[u8]) -> Result<RbTree<R>> {
    let header = SnapshotHeader::from_bytes(bytes)?;
    let body = &bytes[SnapshotHeader::SIZE..];
    header.verify_checksum(body)?;

    // Every record costs at least its prefix, which bounds a bogus count.
    let capacity = usize::try_from(header.record_count)
        .unwrap_or(usize::MAX)
        .min(body.len() / FRAME_PREFIX);
    let mut tree = RbTree::with_capacity(capacity);

    let mut rest = body;
    let mut decoded: u64 = 0;
    while !rest.is_empty() {
        let (prefix, tail) = rest.split_first_chunk::<FRAME_PREFIX>().ok_or_else(|| {
            Error::CorruptSnapshot(format!("truncated length prefix after record {}", decoded))
        })?;
        let size = u32::from_le_bytes(*prefix) as usize;
        if size > MAX_RECORD_SIZE {
            return Err(Error::CorruptSnapshot(format!(
                "record {} claims {} bytes, limit is {}",
                decoded, size, MAX_RECORD_SIZE
            )));
        }
        if size > tail.len() {
            return Err(Error::CorruptSnapshot(format!(
                "record {} claims {} bytes, only {} left",
                decoded,
                size,
                tail.len()
            )));
        }

        let (record, next) = tail.split_at(size);
        tree.insert(R::read_from(record)?);
        decoded += 1;
        rest = next;
    }

    if decoded != header.record_count {
        return Err(Error::CorruptSnapshot(format!(
            "header promises {} records, body holds {}",
            header.record_count, decoded
        )));
    }
    Ok(tree)
}

/// A snapshot stored in a single file.
///
/// # Durability
/// `save` truncates the file, writes the whole snapshot, and calls `fsync()`
/// before returning. A crash mid-save can leave a torn file; the checksum
/// makes `load` reject it instead of returning partial data.
///
/// # Example
/// ```no_run
/// use ordtree::storage::SnapshotFile;
/// use ordtree::RbTree;
///
/// let tree: RbTree<u64> = (0..10).collect();
///
/// let mut file = SnapshotFile::open_or_create("tree.snap").unwrap();
/// file.save(&tree).unwrap();
///
/// let restored: RbTree<u64> = file.load().unwrap();
/// assert!(restored.iter().eq(tree.iter()));
/// ```
pub struct SnapshotFile {
    file: File,
}

impl SnapshotFile {
    /// Create a new snapshot file.
    ///
    /// # Errors
    /// Returns an error if the file already exists or cannot be created.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create_new(true)
            .open(path)?;
        Ok(Self { file })
    }

    /// Open an existing snapshot file.
    ///
    /// # Errors
    /// Returns an error if the file doesn't exist or cannot be opened.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = OpenOptions::new().read(true).write(true).open(path)?;
        Ok(Self { file })
    }

    /// Open an existing snapshot file, or create if it doesn't exist.
    pub fn open_or_create<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::open(path)
        } else {
            Self::create(path)
        }
    }

    /// Replace the file contents with a snapshot of `tree`.
    pub fn save<R: Keyed + Persist>(&mut self, tree: &RbTree<R>) -> Result<()> {
        let bytes = encode_snapshot(tree)?;

        self.file.set_len(0)?;
        self.file.seek(SeekFrom::Start(0))?;
        self.file.write_all(&bytes)?;
        self.file.sync_all()?; // fsync for durability

        debug!("saved snapshot: {} records, {} bytes", tree.len(), bytes.len());
        Ok(())
    }

    /// Read the whole file and rebuild the tree it holds.
    pub fn load<R: Keyed + Persist>(&mut self) -> Result<RbTree<R>> {
        self.file.seek(SeekFrom::Start(0))?;
        let mut bytes = Vec::new();
        self.file.read_to_end(&mut bytes)?;

        match decode_snapshot(&bytes) {
            Ok(tree) => {
                debug!("loaded snapshot: {} records, {} bytes", tree.len(), bytes.len());
                Ok(tree)
            }
            Err(e) => {
                warn!("rejected snapshot of {} bytes: {}", bytes.len(), e);
                Err(e)
            }
        }
    }

    /// Current size of the file in bytes.
    pub fn file_size(&self) -> Result<u64> {
        Ok(self.file.metadata()?.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_encode_empty_tree() {
        let tree: RbTree<u32> = RbTree::new();
        let bytes = encode_snapshot(&tree).unwrap();

        assert_eq!(bytes.len(), SnapshotHeader::SIZE);
        let header = SnapshotHeader::from_bytes(&bytes).unwrap();
        assert_eq!(header.record_count, 0);

        let restored: RbTree<u32> = decode_snapshot(&bytes).unwrap();
        assert!(restored.is_empty());
    }

    #[test]
    fn test_encode_frames_records_in_order() {
        let tree: RbTree<u16> = [3, 1, 2].into_iter().collect();
        let bytes = encode_snapshot(&tree).unwrap();
        let body = &bytes[SnapshotHeader::SIZE..];

        assert_eq!(
            body,
            &[2, 0, 0, 0, 1, 0, 2, 0, 0, 0, 2, 0, 2, 0, 0, 0, 3, 0][..]
        );
    }

    #[test]
    fn test_decode_restores_keys() {
        let tree: RbTree<i64> = (-20..20).collect();
        let bytes = encode_snapshot(&tree).unwrap();

        let restored: RbTree<i64> = decode_snapshot(&bytes).unwrap();
        assert!(restored.iter().eq(tree.iter()));
        assert!(restored.audit().is_ok());
    }

    #[test]
    fn test_decode_detects_flipped_bit() {
        let tree: RbTree<u32> = (0..10).collect();
        let mut bytes = encode_snapshot(&tree).unwrap();
        let last = bytes.len() - 1;
        bytes[last] ^= 0x01;

        let result = decode_snapshot::<u32>(&bytes);
        assert!(matches!(result, Err(Error::ChecksumMismatch { .. })));
    }

    #[test]
    fn test_decode_detects_truncation() {
        let tree: RbTree<u32> = (0..10).collect();
        let bytes = encode_snapshot(&tree).unwrap();

        // Re-seal a truncated body so only the framing check can catch it
        let mut body = bytes[SnapshotHeader::SIZE..bytes.len() - 2].to_vec();
        let header = SnapshotHeader::new(10, SnapshotHeader::compute_checksum(&body));
        let mut truncated = vec![0u8; SnapshotHeader::SIZE];
        header.write_to(&mut truncated);
        truncated.append(&mut body);

        let result = decode_snapshot::<u32>(&truncated);
        assert!(matches!(result, Err(Error::CorruptSnapshot(_))));
    }

    #[test]
    fn test_decode_detects_count_mismatch() {
        let tree: RbTree<u32> = (0..4).collect();
        let mut bytes = encode_snapshot(&tree).unwrap();

        let mut header = SnapshotHeader::from_bytes(&bytes).unwrap();
        header.record_count = 5;
        header.write_to(&mut bytes);

        let result = decode_snapshot::<u32>(&bytes);
        assert!(matches!(result, Err(Error::CorruptSnapshot(_))));
    }

    #[test]
    fn test_decode_rejects_oversized_frame() {
        let mut body = Vec::new();
        body.extend_from_slice(&((MAX_RECORD_SIZE + 1) as u32).to_le_bytes());
        let header = SnapshotHeader::new(1, SnapshotHeader::compute_checksum(&body));
        let mut bytes = vec![0u8; SnapshotHeader::SIZE];
        header.write_to(&mut bytes);
        bytes.extend_from_slice(&body);

        let result = decode_snapshot::<u32>(&bytes);
        assert!(matches!(result, Err(Error::CorruptSnapshot(_))));
    }

    #[test]
    fn test_file_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tree.snap");

        let tree: RbTree<u64> = [50, 30, 70, 20, 40, 60, 80].into_iter().collect();
        {
            let mut file = SnapshotFile::create(&path).unwrap();
            file.save(&tree).unwrap();
            assert!(file.file_size().unwrap() > SnapshotHeader::SIZE as u64);
        }

        let mut file = SnapshotFile::open(&path).unwrap();
        let restored: RbTree<u64> = file.load().unwrap();
        assert!(restored.iter().eq(tree.iter()));
    }

    #[test]
    fn test_file_save_truncates_previous() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tree.snap");
        let mut file = SnapshotFile::create(&path).unwrap();

        let big: RbTree<u64> = (0..100).collect();
        file.save(&big).unwrap();
        let small: RbTree<u64> = (0..3).collect();
        file.save(&small).unwrap();

        let restored: RbTree<u64> = file.load().unwrap();
        assert_eq!(restored.len(), 3);
    }

    #[test]
    fn test_create_existing_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tree.snap");

        SnapshotFile::create(&path).unwrap();
        assert!(SnapshotFile::create(&path).is_err());
    }

    #[test]
    fn test_open_nonexistent_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.snap");

        assert!(matches!(SnapshotFile::open(&path), Err(Error::Io(_))));
    }

    #[test]
    fn test_load_empty_file_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.snap");

        let mut file = SnapshotFile::create(&path).unwrap();
        let result = file.load::<u32>();
        assert!(matches!(result, Err(Error::CorruptSnapshot(_))));
    }
}
