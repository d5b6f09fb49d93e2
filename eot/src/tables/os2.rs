//! The [OS/2 (OS/2 and Windows metrics)](https://docs.microsoft.com/en-us/typography/opentype/spec/os2) table

use crate::font_data::FontData;
use crate::read::{FontRead, ReadError};
use crate::tag::Tag;

/// The fields of the `OS/2` table that are carried into an EOT header.
///
/// The table's `fsType` (embedding restrictions) is deliberately not read:
/// some TrueType fonts set it to an over-restrictive value, and the header
/// assembler always writes 0 in its place.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Os2 {
    pub weight_class: u16,
    pub fs_selection: u16,
    pub panose: [u8; 10],
    pub unicode_range: [u32; 4],
    pub code_page_range: [u32; 2],
}

const WEIGHT_CLASS_OFFSET: usize = 4;
const PANOSE_OFFSET: usize = 32;
const UNICODE_RANGE_OFFSET: usize = 42;
const FS_SELECTION_OFFSET: usize = 62;
const CODE_PAGE_RANGE_OFFSET: usize = 78;

impl Os2 {
    pub const TAG: Tag = Tag::new(b"OS/2");

    /// The layout through `usMaxContext`, the last field the conversion
    /// requires to be present.
    pub const MIN_BYTE_LEN: usize = 96;
}

impl<'a> FontRead<'a> for Os2 {
    /// Read from data starting at the table offset and running to the end
    /// of the font buffer; shorter than [`Os2::MIN_BYTE_LEN`] is malformed.
    fn read(data: FontData<'a>) -> Result<Self, ReadError> {
        if data.len() < Self::MIN_BYTE_LEN {
            return Err(ReadError::OutOfBounds);
        }
        let panose = data
            .read_bytes(PANOSE_OFFSET, 10)?
            .try_into()
            .map_err(|_| ReadError::OutOfBounds)?;
        let mut unicode_range = [0u32; 4];
        for (i, word) in unicode_range.iter_mut().enumerate() {
            *word = data.read_at(UNICODE_RANGE_OFFSET + i * 4)?;
        }
        let mut code_page_range = [0u32; 2];
        for (i, word) in code_page_range.iter_mut().enumerate() {
            *word = data.read_at(CODE_PAGE_RANGE_OFFSET + i * 4)?;
        }
        Ok(Os2 {
            weight_class: data.read_at(WEIGHT_CLASS_OFFSET)?,
            fs_selection: data.read_at(FS_SELECTION_OFFSET)?,
            panose,
            unicode_range,
            code_page_range,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::sample_os2;

    #[test]
    fn reads_all_fields() {
        let buf = sample_os2();
        assert_eq!(buf.len(), Os2::MIN_BYTE_LEN);
        let os2 = Os2::read(buf.font_data()).unwrap();
        assert_eq!(os2.weight_class, 700);
        assert_eq!(os2.fs_selection, 0x0021);
        assert_eq!(os2.panose, [2, 11, 6, 4, 2, 2, 2, 2, 2, 4]);
        assert_eq!(os2.unicode_range, [0xA1, 0xB2, 0xC3, 0xD4]);
        assert_eq!(os2.code_page_range, [0xE5, 0xF6]);
    }

    #[test]
    fn rejects_truncated_table() {
        let buf = sample_os2();
        let truncated = &buf[..Os2::MIN_BYTE_LEN - 1];
        assert!(Os2::read(FontData::new(truncated)).is_err());
    }
}
