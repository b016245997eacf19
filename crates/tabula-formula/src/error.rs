//! Formula error types

use thiserror::Error;

/// Result type for formula operations
pub type FormulaResult<T> = std::result::Result<T, FormulaError>;

/// Errors that can occur during formula evaluation
///
/// All variants are recoverable at the evaluation boundary: a failing
/// formula never affects other cells. [`crate::evaluate_display`] collapses
/// them to a single error outcome for the host; the distinct kinds remain
/// observable on [`crate::evaluate`].
#[derive(Debug, Error)]
pub enum FormulaError {
    /// Malformed cell address or range
    #[error("Invalid reference: {0}")]
    InvalidReference(String),

    /// Non-numeric cell content consumed arithmetically
    #[error("Invalid operand: {0}")]
    InvalidOperand(String),

    /// Malformed expression or arithmetic fault (e.g. division by zero)
    #[error("Evaluation error: {0}")]
    Evaluation(String),
}

impl From<tabula_core::Error> for FormulaError {
    fn from(err: tabula_core::Error) -> Self {
        FormulaError::InvalidReference(err.to_string())
    }
}
