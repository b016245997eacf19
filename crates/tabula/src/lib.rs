//! # tabula
//!
//! A Rust library for grid editing with CSV import/export and formula
//! evaluation.
//!
//! Tabula provides the data model behind a spreadsheet-like table editor:
//! a growable sparse grid of cell text, A1-style addressing, a small formula
//! language (SUM, AVERAGE, arithmetic with cell references), plain CSV
//! persistence, and the tab/newline clipboard text codec. Rendering,
//! windowing, and input handling stay with the host application.
//!
//! ## Example
//!
//! ```rust
//! use tabula::prelude::*;
//!
//! let mut sheet = Spreadsheet::new();
//!
//! // Set cell values
//! sheet.set_cell_text(0, 0, "10");
//! sheet.set_cell_text(1, 0, "20");
//!
//! // Commit a formula; the cell displays its evaluation
//! sheet.set_cell_text(2, 0, "=SUM(A1:A2)");
//! assert_eq!(sheet.cell_display(2, 0), "30");
//!
//! // Save displayed values to CSV
//! // sheet.save_csv("out.csv").unwrap();
//! ```

pub mod prelude;
pub mod spreadsheet;

// Re-export document types
pub use spreadsheet::{RecalcStats, Spreadsheet};

// Re-export core types
pub use tabula_core::{
    clip, CellAddress, CellRange, Error, FormulaStore, Grid, GridAccessor, Result, MAX_COLS,
    MAX_ROWS,
};

// Re-export formula engine
pub use tabula_formula::{
    evaluate, evaluate_display, FormulaError, FormulaResult, Value, ERROR_DISPLAY,
};

// Re-export CSV I/O
pub use tabula_csv::{CsvError, CsvReadOptions, CsvReader, CsvResult, CsvWriteOptions, CsvWriter};
