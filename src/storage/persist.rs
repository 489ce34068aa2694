//! Byte encoding for records stored in snapshots.

use crate::common::{Error, Result};

/// A record that can be written into and read back from a snapshot.
///
/// `write_to` appends the encoding to `buf`; `read_from` receives exactly the
/// bytes one `write_to` call produced (the snapshot frames every record with
/// its length), so implementations never need their own terminator.
///
/// # Example
/// ```
/// use ordtree::storage::Persist;
///
/// let mut buf = Vec::new();
/// 42u64.write_to(&mut buf);
/// assert_eq!(buf.len(), 8);
/// assert_eq!(u64::read_from(&buf).unwrap(), 42);
/// ```
pub trait Persist: Sized {
    /// Append this record's encoding to `buf`.
    fn write_to(&self, buf: &mut Vec<u8>);

    /// Decode a record from exactly the bytes `write_to` produced.
    ///
    /// # Errors
    /// Returns `Error::CorruptSnapshot` if the bytes are not a valid encoding.
    fn read_from(bytes: &[u8]) -> Result<Self>;
}

macro_rules! impl_persist_for_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Persist for $ty {
                #[inline]
                fn write_to(&self, buf: &mut Vec<u8>) {
                    buf.extend_from_slice(&self.to_le_bytes());
                }

                fn read_from(bytes: &[u8]) -> Result<Self> {
                    let array = bytes.try_into().map_err(|_| {
                        Error::CorruptSnapshot(format!(
                            "expected {} bytes for {}, got {}",
                            std::mem::size_of::<$ty>(),
                            stringify!($ty),
                            bytes.len()
                        ))
                    })?;
                    Ok(<$ty>::from_le_bytes(array))
                }
            }
        )*
    };
}

impl_persist_for_int!(u8, u16, u32, u64, u128, i8, i16, i32, i64, i128);

impl Persist for String {
    fn write_to(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(self.as_bytes());
    }

    fn read_from(bytes: &[u8]) -> Result<Self> {
        String::from_utf8(bytes.to_vec())
            .map_err(|e| Error::CorruptSnapshot(format!("invalid UTF-8 in record: {}", e)))
    }
}

/// Pairs are written as `[len(A): u32 LE][A][B]`.
impl<A: Persist, B: Persist> Persist for (A, B) {
    fn write_to(&self, buf: &mut Vec<u8>) {
        let len_at = buf.len();
        buf.extend_from_slice(&[0u8; 4]);
        self.0.write_to(buf);
        let first_len = (buf.len() - len_at - 4) as u32;
        buf[len_at..len_at + 4].copy_from_slice(&first_len.to_le_bytes());
        self.1.write_to(buf);
    }

    fn read_from(bytes: &[u8]) -> Result<Self> {
        let (len_bytes, rest) = bytes
            .split_first_chunk::<4>()
            .ok_or_else(|| Error::CorruptSnapshot("pair record shorter than 4 bytes".into()))?;
        let first_len = u32::from_le_bytes(*len_bytes) as usize;
        if first_len > rest.len() {
            return Err(Error::CorruptSnapshot(format!(
                "pair first half claims {} bytes, only {} left",
                first_len,
                rest.len()
            )));
        }
        let (first, second) = rest.split_at(first_len);
        Ok((A::read_from(first)?, B::read_from(second)?))
    }
}
