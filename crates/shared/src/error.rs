//! Application-wide error types.

use thiserror::Error;

/// Application error types.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded or is invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input failed validation.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A record from an upstream collaborator could not be decoded.
    #[error("Malformed data: {0}")]
    MalformedData(String),

    /// A record source could not be read.
    #[error("Data source error: {0}")]
    DataSource(String),
}

impl AppError {
    /// Returns the stable error code used in logs and JSON output.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Config(_) => "CONFIG_ERROR",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::MalformedData(_) => "MALFORMED_DATA",
            Self::DataSource(_) => "DATA_SOURCE_ERROR",
        }
    }

    /// Returns true if retrying the same cycle may succeed.
    ///
    /// Only source failures qualify; bad data stays bad until upstream fixes it.
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        matches!(self, Self::DataSource(_))
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}
