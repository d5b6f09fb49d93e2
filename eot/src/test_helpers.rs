//! small utilities used in tests

use crate::font_data::FontData;
use crate::raw::Scalar;
use crate::tag::Tag;

/// A convenience type for generating a buffer of big-endian bytes.
#[derive(Debug, Clone, Default)]
pub struct BeBuffer {
    data: Vec<u8>,
}

impl BeBuffer {
    pub fn new() -> Self {
        Default::default()
    }

    /// The current length of the buffer in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Write any scalar to this buffer.
    pub fn push(mut self, item: impl Scalar) -> Self {
        self.data.extend(item.to_raw().as_ref());
        self
    }

    /// Write multiple scalars into the buffer.
    pub fn extend<T: Scalar>(mut self, iter: impl IntoIterator<Item = T>) -> Self {
        for item in iter {
            self.data.extend(item.to_raw().as_ref());
        }
        self
    }

    pub fn font_data(&self) -> FontData {
        FontData::new(&self.data)
    }
}

impl std::ops::Deref for BeBuffer {
    type Target = [u8];
    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

/// The UTF-16BE encoding of `s`, as stored in a `name` table.
pub fn utf16_bytes(s: &str) -> Vec<u8> {
    s.encode_utf16().flat_map(u16::to_be_bytes).collect()
}

/// An `OS/2` table (version 4 layout, exactly [`MIN_BYTE_LEN`] bytes).
///
/// `fsType` is set to a restrictive value so tests can verify that the
/// header assembler ignores it.
///
/// [`MIN_BYTE_LEN`]: crate::tables::os2::Os2::MIN_BYTE_LEN
pub fn sample_os2() -> BeBuffer {
    BeBuffer::new()
        .extend([4u16, 1234]) // version, xAvgCharWidth
        .push(700u16) // usWeightClass
        .extend([5u16, 0x0004]) // usWidthClass, fsType (preview & print)
        .extend([0u16; 11]) // subscript/superscript/strikeout metrics, sFamilyClass
        .extend([2u8, 11, 6, 4, 2, 2, 2, 2, 2, 4]) // panose
        .extend([0xA1u32, 0xB2, 0xC3, 0xD4]) // ulUnicodeRange1..4
        .extend(*b"TEST") // achVendID
        .push(0x0021u16) // fsSelection: italic | bold
        .extend([0x20u16, 0x7E]) // usFirstCharIndex, usLastCharIndex
        .extend([700u16, 0, 0, 800, 200]) // typo metrics, win ascent/descent
        .extend([0xE5u32, 0xF6]) // ulCodePageRange1..2
        .extend([500u16, 700, 0, 0x20, 2]) // sxHeight..usMaxContext
}

/// A `head` table with the given `checkSumAdjustment`.
pub fn sample_head(checksum_adjustment: u32) -> BeBuffer {
    BeBuffer::new()
        .extend([0x0001_0000u32, 0x0001_0000]) // version, fontRevision
        .push(checksum_adjustment)
        .push(0x5F0F_3CF5u32) // magicNumber
        .extend([0u16, 1000]) // flags, unitsPerEm
        .extend([0u32; 4]) // created, modified
        .extend([0u16; 4]) // xMin..yMax
        .extend([0u16, 8]) // macStyle, lowestRecPPEM
        .extend([2u16, 0, 0]) // fontDirectionHint, indexToLocFormat, glyphDataFormat
}

enum RecordData {
    Str(String),
    Raw { length: u16, offset: u16 },
}

struct NameRecord {
    platform_id: u16,
    encoding_id: u16,
    language_id: u16,
    name_id: u16,
    data: RecordData,
}

/// Builds a `name` table from a sequence of records.
#[derive(Default)]
pub struct NameTableBuilder {
    records: Vec<NameRecord>,
}

impl NameTableBuilder {
    pub fn new() -> Self {
        Default::default()
    }

    /// Add a record whose string is stored in the table's string storage.
    pub fn record(
        mut self,
        platform_id: u16,
        encoding_id: u16,
        language_id: u16,
        name_id: u16,
        string: &str,
    ) -> Self {
        self.records.push(NameRecord {
            platform_id,
            encoding_id,
            language_id,
            name_id,
            data: RecordData::Str(string.to_owned()),
        });
        self
    }

    /// Add a record with an arbitrary (possibly bogus) length and offset.
    pub fn record_raw(
        mut self,
        platform_id: u16,
        encoding_id: u16,
        language_id: u16,
        name_id: u16,
        length: u16,
        offset: u16,
    ) -> Self {
        self.records.push(NameRecord {
            platform_id,
            encoding_id,
            language_id,
            name_id,
            data: RecordData::Raw { length, offset },
        });
        self
    }

    pub fn build(&self) -> BeBuffer {
        let mut storage: Vec<u8> = Vec::new();
        let mut entries = Vec::new();
        for record in &self.records {
            let (length, offset) = match &record.data {
                RecordData::Str(s) => {
                    let bytes = utf16_bytes(s);
                    let offset = storage.len() as u16;
                    storage.extend_from_slice(&bytes);
                    (bytes.len() as u16, offset)
                }
                RecordData::Raw { length, offset } => (*length, *offset),
            };
            entries.push([
                record.platform_id,
                record.encoding_id,
                record.language_id,
                record.name_id,
                length,
                offset,
            ]);
        }
        let string_offset = (6 + 12 * self.records.len()) as u16;
        let mut buf =
            BeBuffer::new().extend([0u16, self.records.len() as u16, string_offset]);
        for entry in entries {
            buf = buf.extend(entry);
        }
        buf.extend(storage)
    }
}

/// A complete single-font sfnt buffer from (tag, table bytes) pairs, laid
/// out in the given order directly after the directory.
pub fn build_font(tables: &[(Tag, &[u8])]) -> Vec<u8> {
    let mut buf = BeBuffer::new()
        .push(0x0001_0000u32)
        .extend([tables.len() as u16, 0u16, 0, 0]);
    let mut offset = 12 + 16 * tables.len();
    for (tag, data) in tables {
        buf = buf
            .push(*tag)
            .extend([0u32, offset as u32, data.len() as u32]);
        offset += data.len();
    }
    let mut font = buf.to_vec();
    for (_, data) in tables {
        font.extend_from_slice(data);
    }
    font
}

/// A well-formed font with `OS/2`, `head`, and `name` tables and one
/// matching record per name role.
pub fn sample_font(family: &str, subfamily: &str, full_name: &str, version: &str) -> Vec<u8> {
    let os2 = sample_os2();
    let head = sample_head(0xB1B0_AFBA);
    let name = NameTableBuilder::new()
        .record(3, 1, 0x0409, 1, family)
        .record(3, 1, 0x0409, 2, subfamily)
        .record(3, 1, 0x0409, 4, full_name)
        .record(3, 1, 0x0409, 5, version)
        .build();
    build_font(&[
        (Tag::new(b"OS/2"), &os2),
        (Tag::new(b"head"), &head),
        (Tag::new(b"name"), &name),
    ])
}
