//! The [name (Naming)](https://docs.microsoft.com/en-us/typography/opentype/spec/name) table

use crate::font_data::FontData;
use crate::read::{FontReadWithArgs, ReadArgs, ReadError};
use crate::tag::Tag;

/// A name string borrowed from the font data.
///
/// The bytes are UTF-16BE code units, exactly as stored in the font; they
/// are carried into the EOT header without transcoding. The offset is
/// relative to the start of the whole font buffer, which is what the
/// overlay patch needs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NameString<'a> {
    /// Byte offset of the string within the font buffer.
    pub offset: usize,
    /// The raw UTF-16BE bytes of the string.
    pub bytes: &'a [u8],
}

/// The four `name` table strings an EOT header carries.
///
/// Only records for platform 3 (Windows), encoding 1 (Unicode BMP),
/// language 0x0409 (US English) are considered. When several matching
/// records share a name ID, the last one in record order wins.
#[derive(Clone, Copy, Debug, Default)]
pub struct EotNames<'a> {
    pub family: Option<NameString<'a>>,
    pub subfamily: Option<NameString<'a>>,
    pub full_name: Option<NameString<'a>>,
    pub version: Option<NameString<'a>>,
}

/// format, count, stringOffset.
const HEADER_LEN: usize = 6;
const COUNT_OFFSET: usize = 2;
const STRING_OFFSET_OFFSET: usize = 4;
const RECORD_LEN: usize = 12;

const WINDOWS_PLATFORM: u16 = 3;
const UNICODE_BMP_ENCODING: u16 = 1;
const ENGLISH_US_LANGUAGE: u16 = 0x0409;

const FAMILY_NAME_ID: u16 = 1;
const SUBFAMILY_NAME_ID: u16 = 2;
const FULL_NAME_ID: u16 = 4;
const VERSION_NAME_ID: u16 = 5;

impl EotNames<'_> {
    pub const TAG: Tag = Tag::new(b"name");
}

impl ReadArgs for EotNames<'_> {
    /// The offset of the `name` table within the font buffer.
    type Args = usize;
}

impl<'a> FontReadWithArgs<'a> for EotNames<'a> {
    /// Read from the whole font buffer, with the table's offset as the
    /// argument.
    ///
    /// Record and string extents are validated against the buffer, not the
    /// table's declared length; a record that is out of bounds fails the
    /// read even if earlier records already matched.
    fn read_with_args(data: FontData<'a>, table_offset: &usize) -> Result<Self, ReadError> {
        let table_offset = *table_offset;
        let field_pos = |field_offset: usize| {
            table_offset
                .checked_add(field_offset)
                .ok_or(ReadError::OutOfBounds)
        };
        // reading stringOffset bounds-checks the whole fixed header
        let count: u16 = data.read_at(field_pos(COUNT_OFFSET)?)?;
        let string_offset: u16 = data.read_at(field_pos(STRING_OFFSET_OFFSET)?)?;

        let mut names = EotNames::default();
        for i in 0..count as usize {
            let record_start = table_offset
                .checked_add(HEADER_LEN + i * RECORD_LEN)
                .ok_or(ReadError::OutOfBounds)?;
            // the whole record must be in bounds before any of it is read
            data.read_bytes(record_start, RECORD_LEN)?;

            let platform_id: u16 = data.read_at(record_start)?;
            let encoding_id: u16 = data.read_at(record_start + 2)?;
            let language_id: u16 = data.read_at(record_start + 4)?;
            if platform_id != WINDOWS_PLATFORM
                || encoding_id != UNICODE_BMP_ENCODING
                || language_id != ENGLISH_US_LANGUAGE
            {
                continue;
            }

            let name_id: u16 = data.read_at(record_start + 6)?;
            let length: u16 = data.read_at(record_start + 8)?;
            let offset: u16 = data.read_at(record_start + 10)?;

            let start = table_offset
                .checked_add(string_offset as usize)
                .and_then(|pos| pos.checked_add(offset as usize))
                .ok_or(ReadError::OutOfBounds)?;
            let bytes = data.read_bytes(start, length as usize)?;
            let name = NameString {
                offset: start,
                bytes,
            };
            // a later record for the same role replaces an earlier one
            match name_id {
                FAMILY_NAME_ID => names.family = Some(name),
                SUBFAMILY_NAME_ID => names.subfamily = Some(name),
                FULL_NAME_ID => names.full_name = Some(name),
                VERSION_NAME_ID => names.version = Some(name),
                _ => (),
            }
        }
        Ok(names)
    }
}
