//! # tabula-core
//!
//! Core data structures for the tabula table-editor library.
//!
//! This crate provides the fundamental types used throughout tabula:
//! - [`CellAddress`] and [`CellRange`] - A1-style cell addressing and ranges
//! - [`Grid`] - a growable sparse table of cell text
//! - [`GridAccessor`] - the read capability consumed by the formula engine
//! - [`FormulaStore`] - per-cell formula text keyed by address
//! - [`clip`] - tab/newline clipboard text codec
//!
//! ## Example
//!
//! ```rust
//! use tabula_core::{CellAddress, Grid, GridAccessor};
//!
//! let mut grid = Grid::new();
//! grid.set_cell_text(0, 0, "hello");
//! grid.set_cell_text(0, 1, "42");
//!
//! let addr = CellAddress::parse("B1").unwrap();
//! assert_eq!(grid.cell_text(addr.row, addr.col), "42");
//! ```

pub mod address;
pub mod clip;
pub mod error;
pub mod formulas;
pub mod grid;

// Re-exports for convenience
pub use address::{CellAddress, CellRange, CellRangeIterator};
pub use error::{Error, Result};
pub use formulas::FormulaStore;
pub use grid::{Grid, GridAccessor};

/// Maximum number of rows in a grid
pub const MAX_ROWS: u32 = 1_048_576;

/// Maximum number of columns in a grid
pub const MAX_COLS: u16 = 16_384;
