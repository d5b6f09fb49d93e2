//! The [head (Font Header)](https://docs.microsoft.com/en-us/typography/opentype/spec/head) table

use crate::font_data::FontData;
use crate::read::{FontRead, ReadError};
use crate::tag::Tag;

/// The single `head` field carried into an EOT header.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Head {
    pub checksum_adjustment: u32,
}

const CHECKSUM_ADJUSTMENT_OFFSET: usize = 8;

impl Head {
    pub const TAG: Tag = Tag::new(b"head");

    /// The full fixed layout, through `glyphDataFormat`.
    pub const MIN_BYTE_LEN: usize = 54;
}

impl<'a> FontRead<'a> for Head {
    /// Read from data starting at the table offset and running to the end
    /// of the font buffer; shorter than [`Head::MIN_BYTE_LEN`] is malformed.
    fn read(data: FontData<'a>) -> Result<Self, ReadError> {
        if data.len() < Self::MIN_BYTE_LEN {
            return Err(ReadError::OutOfBounds);
        }
        Ok(Head {
            checksum_adjustment: data.read_at(CHECKSUM_ADJUSTMENT_OFFSET)?,
        })
    }
}
