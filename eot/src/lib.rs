//! Building Embedded OpenType (EOT) headers
//!
//! This crate converts in-memory OpenType/TrueType font data into the
//! header the legacy [EOT container] format prepends to a font for web
//! embedding. It walks the sfnt table directory, pulls typographic
//! metadata out of the `OS/2`, `head`, and `name` tables, and serializes
//! the EOT prefix and its four length-prefixed UTF-16 name strings.
//!
//! Input is untrusted: every offset and length read from the font is
//! validated against the buffer with overflow-safe arithmetic before it is
//! dereferenced, and any inconsistency refuses the whole conversion. A
//! font that merely lacks one of the three tables still converts, with
//! zeroed metadata for the missing pieces.
//!
//! The conversion borrows the font bytes and holds no other state, so it
//! can run concurrently from independent callers without any locking.
//!
//! # Example
//!
//! ```no_run
//! # let path_to_my_font_file = std::path::Path::new("");
//! use eot::EotHeader;
//! let font_bytes = std::fs::read(path_to_my_font_file).unwrap();
//! let header = EotHeader::build(&font_bytes).expect("failed to read font data");
//! let mut output = Vec::new();
//! header.write_eot(&font_bytes, &mut output).unwrap();
//! ```
//!
//! [EOT container]: https://www.w3.org/submissions/EOT/

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

mod font_data;
mod header;
mod raw;
mod read;
mod tag;

pub mod tables;

#[cfg(test)]
mod test_helpers;

pub use font_data::FontData;
pub use header::{EotHeader, OverlayPatch};
pub use raw::Scalar;
pub use read::{FontRead, FontReadWithArgs, ReadArgs, ReadError};
pub use tag::Tag;
