//! The [sfnt table directory](https://learn.microsoft.com/en-us/typography/opentype/spec/otff#table-directory)

use std::ops::Range;

use crate::font_data::FontData;
use crate::read::{FontRead, ReadError};
use crate::tag::Tag;

/// The sfnt table directory.
///
/// Reading one validates that the buffer holds the fixed header and every
/// directory record; the records themselves locate the font's tables and
/// are validated individually against the buffer via
/// [`TableRecord::data_range`].
#[derive(Clone, Copy)]
pub struct TableDirectory<'a> {
    data: FontData<'a>,
    sfnt_version: u32,
    num_tables: u16,
}

/// sfnt version, numTables, and the three binary-search fields.
const DIRECTORY_HEADER_LEN: usize = 12;

const NUM_TABLES_OFFSET: usize = 4;

impl<'a> FontRead<'a> for TableDirectory<'a> {
    fn read(data: FontData<'a>) -> Result<Self, ReadError> {
        let sfnt_version = data.read_at(0)?;
        // the count is bounds-checked by the read itself; the records it
        // promises must then also fit in the buffer
        let num_tables: u16 = data.read_at(NUM_TABLES_OFFSET)?;
        let directory_len = DIRECTORY_HEADER_LEN + num_tables as usize * TableRecord::RAW_BYTE_LEN;
        if data.len() < directory_len {
            return Err(ReadError::OutOfBounds);
        }
        Ok(TableDirectory {
            data,
            sfnt_version,
            num_tables,
        })
    }
}

impl<'a> TableDirectory<'a> {
    /// The sfnt version field (0x00010000 for TrueType outlines, 'OTTO' for CFF).
    pub fn sfnt_version(&self) -> u32 {
        self.sfnt_version
    }

    /// The number of tables in the directory.
    pub fn num_tables(&self) -> u16 {
        self.num_tables
    }

    /// The directory's records, in directory order (not sorted by tag).
    pub fn table_records(&self) -> TableRecords<'a> {
        TableRecords {
            data: self.data,
            next: 0,
            num_tables: self.num_tables,
        }
    }
}

/// A record in the table directory, locating one table in the font.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TableRecord {
    pub tag: Tag,
    pub checksum: u32,
    pub offset: u32,
    pub length: u32,
}

impl TableRecord {
    /// The encoded length of a directory record.
    pub const RAW_BYTE_LEN: usize = 16;

    /// The table's byte range, validated against the extent of `data`.
    ///
    /// The offset and length are untrusted; the sum is computed with
    /// overflow-safe arithmetic and checked against the buffer before any
    /// part of the table is dereferenced.
    pub fn data_range(&self, data: FontData) -> Result<Range<usize>, ReadError> {
        let start = self.offset as usize;
        let end = start
            .checked_add(self.length as usize)
            .ok_or(ReadError::OutOfBounds)?;
        if data.len() < end {
            return Err(ReadError::OutOfBounds);
        }
        Ok(start..end)
    }

    fn read_at(data: FontData, offset: usize) -> Result<TableRecord, ReadError> {
        Ok(TableRecord {
            tag: data.read_at(offset)?,
            checksum: data.read_at(offset + 4)?,
            offset: data.read_at(offset + 8)?,
            length: data.read_at(offset + 12)?,
        })
    }
}

/// An iterator over the records of a [`TableDirectory`].
#[derive(Clone)]
pub struct TableRecords<'a> {
    data: FontData<'a>,
    next: u16,
    num_tables: u16,
}

impl Iterator for TableRecords<'_> {
    type Item = TableRecord;

    fn next(&mut self) -> Option<TableRecord> {
        if self.next == self.num_tables {
            return None;
        }
        let offset = DIRECTORY_HEADER_LEN + self.next as usize * TableRecord::RAW_BYTE_LEN;
        self.next += 1;
        // in bounds since TableDirectory::read checked the whole directory
        TableRecord::read_at(self.data, offset).ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.num_tables - self.next) as usize;
        (remaining, Some(remaining))
    }
}
