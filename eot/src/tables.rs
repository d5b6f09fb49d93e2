//! The sfnt table directory and the tables the EOT header draws from.

pub mod directory;
pub mod head;
pub mod name;
pub mod os2;
