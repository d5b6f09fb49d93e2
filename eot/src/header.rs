//! Building the EOT header.
//!
//! The [EOT container] is a little-endian prefix followed by four
//! variable-length name strings and the raw font data. Everything here
//! writes into a single growable byte buffer; the only failure paths are
//! the bounds checks performed while reading the font, so once the scan
//! succeeds assembly cannot fail.
//!
//! [EOT container]: https://www.w3.org/submissions/EOT/

use std::io;

use crate::font_data::FontData;
use crate::read::{FontRead, FontReadWithArgs, ReadError};
use crate::tables::directory::TableDirectory;
use crate::tables::head::Head;
use crate::tables::name::{EotNames, NameString};
use crate::tables::os2::Os2;

/// EOT format version 2.1, the last revision of the format.
const EOT_VERSION: u32 = 0x0002_0001;
const MAGIC_NUMBER: u16 = 0x504C;
/// Windows `DEFAULT_CHARSET`.
const DEFAULT_CHARSET: u8 = 0x01;
/// The fixed portion of the header, before the name entries.
const PREFIX_LEN: usize = 82;

/// A byte-range copy to apply to the embedded copy of the font.
///
/// When a font's full name does not already start with its family name,
/// the embedded copy gets the start of the full name written over the
/// family name, so that the two agree. All offsets are into the original
/// font buffer, not the header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OverlayPatch {
    /// Byte offset of the bytes to copy (the full name string).
    pub source: usize,
    /// Byte offset to copy them to (the family name string).
    pub dest: usize,
    /// Number of bytes to copy (the family name's byte length).
    pub len: usize,
}

impl OverlayPatch {
    /// Apply the patch, overwriting the family name bytes.
    ///
    /// `font_data` must be (a mutable copy of) the same bytes the header
    /// was built from; the patch ranges were validated against that buffer.
    pub fn apply(&self, font_data: &mut [u8]) {
        font_data.copy_within(self.source..self.source + self.len, self.dest);
    }
}

/// A serialized EOT header for one font.
///
/// The header does not retain the font bytes; callers emit the final file
/// as header bytes followed by the font data, applying [`overlay`] to the
/// embedded copy first (or use [`write_eot`], which does both).
///
/// [`overlay`]: EotHeader::overlay
/// [`write_eot`]: EotHeader::write_eot
#[derive(Clone, Debug)]
pub struct EotHeader {
    bytes: Vec<u8>,
    overlay: Option<OverlayPatch>,
}

/// Accumulates the tables of interest as the directory scan encounters them.
#[derive(Default)]
struct FoundTables<'a> {
    os2: Option<Os2>,
    head: Option<Head>,
    names: Option<EotNames<'a>>,
}

impl FoundTables<'_> {
    fn is_complete(&self) -> bool {
        self.os2.is_some() && self.head.is_some() && self.names.is_some()
    }
}

impl EotHeader {
    /// Build the EOT header for the given sfnt font data.
    ///
    /// Fails on any structural inconsistency in the table directory or in
    /// the `OS/2`, `head`, or `name` tables. A font that simply lacks one
    /// of those tables still converts, with zeroed metadata for the
    /// missing pieces.
    pub fn build(font_data: &[u8]) -> Result<EotHeader, ReadError> {
        let data = FontData::new(font_data);
        let directory = TableDirectory::read(data)?;

        let mut found = FoundTables::default();
        for record in directory.table_records() {
            // every entry is validated in directory order, recognized or not
            let range = record.data_range(data)?;
            match record.tag {
                Os2::TAG => {
                    let table = data.split_off(range.start).ok_or(ReadError::OutOfBounds)?;
                    found.os2 = Some(Os2::read(table)?);
                }
                Head::TAG => {
                    let table = data.split_off(range.start).ok_or(ReadError::OutOfBounds)?;
                    found.head = Some(Head::read(table)?);
                }
                EotNames::TAG => {
                    found.names = Some(EotNames::read_with_args(data, &range.start)?);
                }
                _ => (),
            }
            if found.is_complete() {
                break;
            }
        }
        if found.os2.is_none() {
            log::warn!("font has no 'OS/2' table; panose, weight and ranges will be zero");
        }
        if found.head.is_none() {
            log::warn!("font has no 'head' table; checksum adjustment will be zero");
        }
        if found.names.is_none() {
            log::warn!("font has no 'name' table; all name entries will be empty");
        }

        let os2 = found.os2.unwrap_or_default();
        let head = found.head.unwrap_or_default();
        let names = found.names.unwrap_or_default();

        let mut bytes = Vec::with_capacity(PREFIX_LEN + 64);
        write_prefix(&mut bytes, font_data.len(), &os2, &head);
        append_name_entry(&mut bytes, names.family);
        append_name_entry(&mut bytes, names.subfamily);
        append_name_entry(&mut bytes, names.version);
        let overlay = overlay_patch(names.family, names.full_name);
        append_name_entry(&mut bytes, names.full_name);
        push_u16(&mut bytes, 0); // final padding word

        let eot_size = bytes.len() + font_data.len();
        bytes[0..4].copy_from_slice(&(eot_size as u32).to_le_bytes());

        Ok(EotHeader { bytes, overlay })
    }

    /// The serialized header.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The length of the header, in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The overlay patch to apply to the embedded copy of the font, if the
    /// font's full name does not already start with its family name.
    pub fn overlay(&self) -> Option<OverlayPatch> {
        self.overlay
    }

    /// Write the complete EOT file: this header, then the font data with
    /// the overlay patch (if any) applied to the embedded copy.
    ///
    /// `font_data` must be the same bytes the header was built from.
    pub fn write_eot<W: io::Write>(&self, font_data: &[u8], target: &mut W) -> io::Result<()> {
        target.write_all(&self.bytes)?;
        match self.overlay {
            Some(patch) => {
                let mut embedded = font_data.to_vec();
                patch.apply(&mut embedded);
                target.write_all(&embedded)
            }
            None => target.write_all(font_data),
        }
    }
}

// The prefix is little-endian, per the EOT submission; these do not go
// through the big-endian `Scalar` conversions used on the sfnt side.
fn push_u16(bytes: &mut Vec<u8>, value: u16) {
    bytes.extend_from_slice(&value.to_le_bytes());
}

fn push_u32(bytes: &mut Vec<u8>, value: u32) {
    bytes.extend_from_slice(&value.to_le_bytes());
}

fn write_prefix(bytes: &mut Vec<u8>, font_len: usize, os2: &Os2, head: &Head) {
    push_u32(bytes, 0); // eotSize, patched once the name entries are in place
    push_u32(bytes, font_len as u32);
    push_u32(bytes, EOT_VERSION);
    push_u32(bytes, 0); // flags
    bytes.extend_from_slice(&os2.panose);
    bytes.push(DEFAULT_CHARSET);
    bytes.push((os2.fs_selection & 0x0001) as u8); // italic
    push_u32(bytes, os2.weight_class as u32);
    // always 0, never the table's fsType: some TrueType fonts set
    // over-restrictive embedding bits that platforms do not enforce
    push_u16(bytes, 0);
    push_u16(bytes, MAGIC_NUMBER);
    for word in os2.unicode_range {
        push_u32(bytes, word);
    }
    for word in os2.code_page_range {
        push_u32(bytes, word);
    }
    push_u32(bytes, head.checksum_adjustment);
    bytes.extend_from_slice(&[0u8; 16]); // reserved[4]
    push_u16(bytes, 0); // padding1
    debug_assert_eq!(bytes.len(), PREFIX_LEN);
}

/// Append one name entry: a length prefix, the UTF-16BE bytes carried
/// through unchanged, and a zero terminator. A missing name is an empty
/// entry (zero length, zero terminator).
fn append_name_entry(bytes: &mut Vec<u8>, name: Option<NameString>) {
    let string = name.map(|name| name.bytes).unwrap_or_default();
    push_u16(bytes, string.len() as u16);
    bytes.extend_from_slice(string);
    push_u16(bytes, 0);
}

/// If possible, ensure that the family name is a prefix of the full name
/// in the embedded copy.
fn overlay_patch(
    family: Option<NameString>,
    full_name: Option<NameString>,
) -> Option<OverlayPatch> {
    let (family, full_name) = (family?, full_name?);
    if full_name.bytes.len() < family.bytes.len() || full_name.bytes.starts_with(family.bytes) {
        return None;
    }
    Some(OverlayPatch {
        source: full_name.offset,
        dest: family.offset,
        len: family.bytes.len(),
    })
}
