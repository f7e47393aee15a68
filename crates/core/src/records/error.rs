//! Record error types.

use leasebook_shared::AppError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The four record collections fed into the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Collection {
    /// Rent payments.
    Payments,
    /// Owner-paid utility bills.
    UtilityBills,
    /// Direct expenses.
    Expenses,
    /// Precomputed monthly report rows.
    MonthlyReports,
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Payments => "payments",
            Self::UtilityBills => "utility_bills",
            Self::Expenses => "expenses",
            Self::MonthlyReports => "monthly_reports",
        })
    }
}

/// Errors raised while decoding or loading records.
#[derive(Debug, Error)]
pub enum RecordError {
    /// A record could not be decoded (unparseable date, non-numeric amount, missing field).
    #[error("Malformed {collection} record: {reason}")]
    MalformedRecord {
        /// Collection the record came from.
        collection: Collection,
        /// Decoder message.
        reason: String,
    },

    /// A monthly report row names a month outside 1-12.
    #[error("Monthly report has invalid month {month} (year {year})")]
    InvalidReportMonth {
        /// Offending month value.
        month: u32,
        /// Year of the row.
        year: i32,
    },

    /// A collection could not be fetched.
    #[error("Failed to load {collection}: {reason}")]
    SourceUnavailable {
        /// Collection that failed.
        collection: Collection,
        /// Transport or I/O message.
        reason: String,
    },
}

impl From<RecordError> for AppError {
    fn from(err: RecordError) -> Self {
        match err {
            RecordError::MalformedRecord { .. } => Self::MalformedData(err.to_string()),
            RecordError::InvalidReportMonth { .. } => Self::Validation(err.to_string()),
            RecordError::SourceUnavailable { .. } => Self::DataSource(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_display() {
        assert_eq!(Collection::Payments.to_string(), "payments");
        assert_eq!(Collection::UtilityBills.to_string(), "utility_bills");
        assert_eq!(Collection::Expenses.to_string(), "expenses");
        assert_eq!(Collection::MonthlyReports.to_string(), "monthly_reports");
    }

    #[test]
    fn test_maps_to_app_error() {
        let err: AppError = RecordError::SourceUnavailable {
            collection: Collection::Expenses,
            reason: "connection reset".into(),
        }
        .into();
        assert_eq!(err.error_code(), "DATA_SOURCE_ERROR");
        assert!(err.is_transient());

        let err: AppError = RecordError::MalformedRecord {
            collection: Collection::Payments,
            reason: "invalid date".into(),
        }
        .into();
        assert_eq!(err.error_code(), "MALFORMED_DATA");

        let err: AppError = RecordError::InvalidReportMonth {
            month: 13,
            year: 2024,
        }
        .into();
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
    }
}
