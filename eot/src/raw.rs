//! big-endian scalar conversions

/// A type that can be decoded from raw big-endian bytes.
///
/// Every multibyte field in an sfnt is stored big-endian, regardless of the
/// host. All reads of those fields go through this trait so that each
/// byte-order conversion is explicit at the call site; fields in the EOT
/// prefix are little-endian and are written directly with `to_le_bytes`
/// instead.
pub trait Scalar: Sized {
    /// The raw (big-endian) byte representation of this type.
    type Raw: Copy + AsRef<[u8]> + for<'a> TryFrom<&'a [u8]>;

    /// The length of the raw representation, in bytes.
    const RAW_BYTE_LEN: usize = std::mem::size_of::<Self::Raw>();

    /// Create an instance of this type from raw big-endian bytes.
    fn from_raw(raw: Self::Raw) -> Self;

    /// Encode this type as raw big-endian bytes.
    fn to_raw(self) -> Self::Raw;

    /// Read an instance of this type from a slice of big-endian bytes.
    ///
    /// Returns `None` if the slice is not exactly [`RAW_BYTE_LEN`] long.
    ///
    /// [`RAW_BYTE_LEN`]: Scalar::RAW_BYTE_LEN
    fn read(bytes: &[u8]) -> Option<Self> {
        <Self::Raw>::try_from(bytes).ok().map(Self::from_raw)
    }
}

macro_rules! int_scalar {
    ($ty:ty, $raw:ty) => {
        impl crate::raw::Scalar for $ty {
            type Raw = $raw;

            fn to_raw(self) -> $raw {
                self.to_be_bytes()
            }

            fn from_raw(raw: $raw) -> $ty {
                Self::from_be_bytes(raw)
            }
        }
    };
}

int_scalar!(u8, [u8; 1]);
int_scalar!(u16, [u8; 2]);
int_scalar!(u32, [u8; 4]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn be_roundtrip() {
        assert_eq!(u16::read(&[0xde, 0xad]), Some(0xdead));
        assert_eq!(u32::read(&[0x00, 0x02, 0x00, 0x01]), Some(0x0002_0001));
        assert_eq!(0xdeadu16.to_raw(), [0xde, 0xad]);
        assert_eq!(0x504cu32.to_raw(), [0x00, 0x00, 0x50, 0x4c]);
    }

    #[test]
    fn read_rejects_wrong_len() {
        assert_eq!(u16::read(&[0xff]), None);
        assert_eq!(u16::read(&[1, 2, 3]), None);
        assert_eq!(u32::read(&[]), None);
    }
}
