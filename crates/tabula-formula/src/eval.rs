//! Formula evaluation entry points
//!
//! Dispatch order matches the host application's formula language: text
//! containing `SUM` is a range sum, text containing `AVERAGE` is a range
//! average, anything else is an arithmetic expression. Detection is a
//! substring match, not a token match; a formula merely containing `SUM`
//! inside a longer word would misdispatch. That hazard is inherited from
//! the language definition and left as-is.

use std::fmt;

use tabula_core::{CellAddress, CellRange, GridAccessor};

use crate::arith;
use crate::error::{FormulaError, FormulaResult};
use crate::ranges::extract_ranges;

/// Fixed display text the host shows for any failed evaluation
pub const ERROR_DISPLAY: &str = "ERROR";

/// The result of a successful evaluation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// Range-sum result (cells are summed as integers)
    Int(i64),
    /// Average or arithmetic result
    Float(f64),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(n) => {
                // No trailing ".0" on whole results
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{}", n)
                }
            }
        }
    }
}

/// Which built-in function a formula dispatches to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Function {
    Sum,
    Average,
}

/// Substring-based function detection, SUM before AVERAGE
fn detect_function(text: &str) -> Option<Function> {
    if text.contains("SUM") {
        Some(Function::Sum)
    } else if text.contains("AVERAGE") {
        Some(Function::Average)
    } else {
        None
    }
}

/// Evaluate a formula against a grid.
///
/// `text` is the formula with the leading `=` already stripped. The grid is
/// only read; evaluation is a pure function of the grid snapshot and the
/// formula text.
pub fn evaluate<G: GridAccessor>(text: &str, grid: &G) -> FormulaResult<Value> {
    match detect_function(text) {
        Some(Function::Sum) => {
            let ranges = extract_ranges(text)?;
            Ok(Value::Int(sum_ranges(grid, &ranges)?))
        }
        Some(Function::Average) => {
            let ranges = extract_ranges(text)?;
            Ok(Value::Float(average_ranges(grid, &ranges)?))
        }
        None => Ok(Value::Float(arith::eval_expr(text, grid)?)),
    }
}

/// Evaluate a formula to its display form.
///
/// Returns the display text and an error flag. Every failure collapses to
/// the fixed [`ERROR_DISPLAY`] marker; the host keeps the formula text
/// unchanged so the user can correct and resubmit it.
pub fn evaluate_display<G: GridAccessor>(text: &str, grid: &G) -> (String, bool) {
    match evaluate(text, grid) {
        Ok(value) => (value.to_string(), false),
        Err(_) => (ERROR_DISPLAY.to_string(), true),
    }
}

/// Sum every cell across the given ranges.
///
/// Iterates each range row-major over the inclusive rectangle. Empty cells
/// contribute 0; non-numeric non-empty text is an `InvalidOperand`.
fn sum_ranges<G: GridAccessor>(grid: &G, ranges: &[CellRange]) -> FormulaResult<i64> {
    let mut sum = 0i64;

    for range in ranges {
        for addr in range.cells() {
            sum += read_int(grid, addr.row, addr.col)?;
        }
    }

    Ok(sum)
}

/// Average every cell across the given ranges.
///
/// Every visited cell counts in the denominator, empty ones included. Zero
/// visited cells (no ranges matched, or all reversed) average to 0 rather
/// than raising a division error.
fn average_ranges<G: GridAccessor>(grid: &G, ranges: &[CellRange]) -> FormulaResult<f64> {
    let mut sum = 0i64;
    let mut count = 0u64;

    for range in ranges {
        for addr in range.cells() {
            sum += read_int(grid, addr.row, addr.col)?;
            count += 1;
        }
    }

    if count == 0 {
        Ok(0.0)
    } else {
        Ok(sum as f64 / count as f64)
    }
}

fn read_int<G: GridAccessor>(grid: &G, row: u32, col: u16) -> FormulaResult<i64> {
    let text = grid.cell_text(row, col);

    if text.is_empty() {
        return Ok(0);
    }

    text.trim().parse().map_err(|_| {
        FormulaError::InvalidOperand(format!(
            "cell {} holds non-numeric '{}'",
            CellAddress::new(row, col),
            text
        ))
    })
}
