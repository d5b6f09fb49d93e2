//! four-byte table identifiers

use std::fmt::{Debug, Display, Formatter};

use crate::raw::Scalar;

/// An OpenType tag.
///
/// A tag is a 4-byte array where each byte is nominally in the printable
/// ASCII range. We do not enforce that constraint, since invalid tags occur
/// in real fonts and need to be representable; tags are only ever compared,
/// never interpreted. Bytewise comparison of the array is identical to
/// comparing the tags as big-endian 32-bit integers, which is how the sfnt
/// table directory is ordered.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Tag([u8; 4]);

impl Tag {
    /// Construct a `Tag` from raw bytes.
    pub const fn new(src: &[u8; 4]) -> Tag {
        Tag(*src)
    }

    /// Create a tag from raw big-endian bytes, without validation.
    pub const fn from_be_bytes(bytes: [u8; 4]) -> Self {
        Self(bytes)
    }

    /// Return the memory representation of this tag.
    pub const fn to_be_bytes(self) -> [u8; 4] {
        self.0
    }
}

impl Scalar for Tag {
    type Raw = [u8; 4];

    fn from_raw(raw: Self::Raw) -> Self {
        Self(raw)
    }

    fn to_raw(self) -> Self::Raw {
        self.0
    }
}

impl Display for Tag {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        for byte in self.0 {
            if byte.is_ascii_graphic() || byte == b' ' {
                write!(f, "{}", byte as char)?;
            } else {
                write!(f, "{{0x{byte:02X}}}")?;
            }
        }
        Ok(())
    }
}

impl Debug for Tag {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Tag(\"{self}\")")
    }
}
