//! Traits for interpreting font data

use crate::font_data::FontData;

/// A type that can be read from raw table data.
///
/// This is implemented for tables that are self-describing; readers that
/// need external state implement [`FontReadWithArgs`] instead. `read` is
/// responsible for validating that the input data is long enough for every
/// field the type exposes.
pub trait FontRead<'a>: Sized {
    /// Read an instance of `Self` from the provided data, performing validation.
    fn read(data: FontData<'a>) -> Result<Self, ReadError>;
}

/// A trait for types that need additional arguments to be read.
pub trait ReadArgs {
    type Args: Copy;
}

/// A trait for types that require external state in order to be constructed.
pub trait FontReadWithArgs<'a>: Sized + ReadArgs {
    /// Read an instance of `Self`, using the provided args.
    fn read_with_args(data: FontData<'a>, args: &Self::Args) -> Result<Self, ReadError>;
}

/// An error that occurs when reading font data.
///
/// Malformed input is a single failure mode: any offset, length, or
/// structural inconsistency refuses the whole conversion, with no partial
/// output. Missing optional tables are not an error and never produce one
/// of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadError {
    /// An offset or length was inconsistent with the extent of the data.
    OutOfBounds,
}

impl std::fmt::Display for ReadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReadError::OutOfBounds => write!(f, "An offset was out of bounds"),
        }
    }
}

impl std::error::Error for ReadError {}
