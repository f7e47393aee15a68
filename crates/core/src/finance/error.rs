//! Finance error types.

use leasebook_shared::AppError;
use thiserror::Error;

/// Errors raised by the aggregation engine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FinanceError {
    /// Month outside 1-12.
    #[error("Invalid month: {0} (expected 1-12)")]
    InvalidMonth(u32),

    /// A sum, difference, or ratio left the range of `Decimal`.
    #[error("Arithmetic overflow computing {0}")]
    Overflow(&'static str),
}

impl From<FinanceError> for AppError {
    fn from(err: FinanceError) -> Self {
        match err {
            FinanceError::InvalidMonth(_) => Self::Validation(err.to_string()),
            FinanceError::Overflow(_) => Self::MalformedData(err.to_string()),
        }
    }
}
