//! Prelude module - common imports for tabula users
//!
//! ```rust
//! use tabula::prelude::*;
//! ```

pub use crate::{
    evaluate,
    evaluate_display,
    // Addressing
    CellAddress,
    CellRange,
    // I/O types
    CsvReadOptions,
    CsvReader,
    CsvWriteOptions,
    CsvWriter,
    // Error types
    Error,
    FormulaError,
    // Formula engine
    FormulaStore,
    Grid,
    GridAccessor,
    RecalcStats,
    Result,
    // Main types
    Spreadsheet,
    Value,
    ERROR_DISPLAY,
};
