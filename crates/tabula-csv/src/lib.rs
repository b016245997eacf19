//! # tabula-csv
//!
//! CSV reader and writer for tabula.
//!
//! The grid is a plain string table, so reading performs no type coercion:
//! every field lands in the grid as text, exactly as the host table editor
//! loads a file.

mod error;
mod options;
mod reader;
mod writer;

pub use error::{CsvError, CsvResult};
pub use options::{CsvReadOptions, CsvWriteOptions, LineTerminator};
pub use reader::CsvReader;
pub use writer::CsvWriter;
