//! Record source backed by JSON exports on disk.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use leasebook_core::records::{
    Collection, Expense, MonthlyReport, Payment, RecordError, RecordSource, UtilityBill,
    parse_expenses, parse_monthly_reports, parse_payments, parse_utility_bills,
};
use leasebook_shared::config::DataConfig;
use tracing::debug;

/// Reads each collection from its own JSON file.
pub struct JsonFileSource {
    config: DataConfig,
}

impl JsonFileSource {
    /// Creates a source over the configured export directory.
    pub const fn new(config: DataConfig) -> Self {
        Self { config }
    }

    async fn read(collection: Collection, path: PathBuf) -> Result<String, RecordError> {
        debug!(%collection, path = %path.display(), "reading export");
        tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| unavailable(collection, &path, &e))
    }
}

fn unavailable(collection: Collection, path: &Path, err: &std::io::Error) -> RecordError {
    RecordError::SourceUnavailable {
        collection,
        reason: format!("{}: {err}", path.display()),
    }
}

#[async_trait]
impl RecordSource for JsonFileSource {
    async fn fetch_payments(&self) -> Result<Vec<Payment>, RecordError> {
        let json = Self::read(Collection::Payments, self.config.payments_path()).await?;
        parse_payments(&json)
    }

    async fn fetch_utility_bills(&self) -> Result<Vec<UtilityBill>, RecordError> {
        let json = Self::read(Collection::UtilityBills, self.config.utilities_path()).await?;
        parse_utility_bills(&json)
    }

    async fn fetch_expenses(&self) -> Result<Vec<Expense>, RecordError> {
        let json = Self::read(Collection::Expenses, self.config.expenses_path()).await?;
        parse_expenses(&json)
    }

    async fn fetch_monthly_reports(&self) -> Result<Vec<MonthlyReport>, RecordError> {
        let json = Self::read(Collection::MonthlyReports, self.config.reports_path()).await?;
        parse_monthly_reports(&json)
    }
}
