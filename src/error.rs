//! Error types for request validation and the output layers

use thiserror::Error;

use crate::mode::CalculationMode;

/// Result type used throughout the crate
pub type Result<T> = std::result::Result<T, CalcError>;

/// Errors raised before a calculation runs, or while reading/writing results.
///
/// The formulas themselves never fail; every variant here is either a
/// rejected input or an I/O problem in a surrounding layer.
#[derive(Error, Debug)]
pub enum CalcError {
    /// Non-positive principal, negative rate, non-positive term, etc.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A parameter the mode requires was not supplied
    #[error("Missing parameter '{parameter}' for {mode}")]
    MissingParameter {
        mode: CalculationMode,
        parameter: &'static str,
    },

    /// Mode name that does not match any calculation mode
    #[error("Unknown calculation mode: {0}")]
    UnknownMode(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CalcError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        CalcError::InvalidInput(msg.into())
    }
}
