//! raw font bytes

use crate::raw::Scalar;
use crate::read::ReadError;

/// A reference to raw binary font data.
///
/// This is a wrapper around a byte slice that provides bounds-checked reads
/// of the big-endian scalars that make up sfnt structures. Offsets and
/// lengths come from untrusted input, so every accessor validates its range
/// with overflow-safe arithmetic before touching the bytes; none of them
/// can panic.
#[derive(Debug, Default, Clone, Copy)]
pub struct FontData<'a> {
    bytes: &'a [u8],
}

impl<'a> FontData<'a> {
    /// Create a new `FontData` with these bytes.
    pub const fn new(bytes: &'a [u8]) -> Self {
        FontData { bytes }
    }

    /// The length of the data, in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// `true` if the data has a length of zero bytes.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Return the data from `pos` to the end of the buffer, or `None` if
    /// `pos` is out of bounds.
    pub fn split_off(&self, pos: usize) -> Option<FontData<'a>> {
        self.bytes.get(pos..).map(|bytes| FontData { bytes })
    }

    /// Read a big-endian scalar out of the buffer at `offset`.
    pub fn read_at<T: Scalar>(&self, offset: usize) -> Result<T, ReadError> {
        let end = offset
            .checked_add(T::RAW_BYTE_LEN)
            .ok_or(ReadError::OutOfBounds)?;
        self.bytes
            .get(offset..end)
            .and_then(T::read)
            .ok_or(ReadError::OutOfBounds)
    }

    /// Return `len` raw bytes starting at `offset`.
    pub fn read_bytes(&self, offset: usize, len: usize) -> Result<&'a [u8], ReadError> {
        let end = offset.checked_add(len).ok_or(ReadError::OutOfBounds)?;
        self.bytes.get(offset..end).ok_or(ReadError::OutOfBounds)
    }

    /// The underlying bytes.
    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }
}

impl AsRef<[u8]> for FontData<'_> {
    fn as_ref(&self) -> &[u8] {
        self.bytes
    }
}
