//! # tabula-formula
//!
//! Formula evaluation engine for tabula.
//!
//! This crate provides:
//! - Range extraction and SUM/AVERAGE aggregation over a grid
//! - A recursive-descent arithmetic evaluator with cell-reference
//!   substitution
//! - Typed evaluation errors, plus a display-level entry point that
//!   collapses every failure to the fixed `ERROR` marker
//!
//! The engine reads cell text through [`tabula_core::GridAccessor`] and is
//! otherwise pure: evaluating the same formula twice against an unchanged
//! grid yields the same result.
//!
//! ## Example
//!
//! ```rust
//! use tabula_core::Grid;
//! use tabula_formula::{evaluate, Value};
//!
//! let mut grid = Grid::new();
//! grid.set_cell_text(0, 0, "1");
//! grid.set_cell_text(0, 1, "2");
//!
//! // Leading '=' is stripped by the caller
//! let value = evaluate("SUM(A1:B1)", &grid).unwrap();
//! assert_eq!(value, Value::Int(3));
//! ```

pub mod arith;
pub mod error;
pub mod eval;
pub mod ranges;

pub use error::{FormulaError, FormulaResult};
pub use eval::{evaluate, evaluate_display, Value, ERROR_DISPLAY};
pub use ranges::extract_ranges;
