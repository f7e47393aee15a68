//! Record source seam and all-or-nothing loading.

use async_trait::async_trait;
use tracing::{debug, warn};

use super::error::RecordError;
use super::types::{Expense, MonthlyReport, Payment, RecordSet, UtilityBill};

/// Supplies the four record collections.
///
/// Implementations own transport, caching, and retries. Each method returns the
/// full current snapshot of its collection.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Fetches all rent payments.
    async fn fetch_payments(&self) -> Result<Vec<Payment>, RecordError>;

    /// Fetches all utility bills.
    async fn fetch_utility_bills(&self) -> Result<Vec<UtilityBill>, RecordError>;

    /// Fetches all direct expenses.
    async fn fetch_expenses(&self) -> Result<Vec<Expense>, RecordError>;

    /// Fetches all monthly report rows.
    async fn fetch_monthly_reports(&self) -> Result<Vec<MonthlyReport>, RecordError>;
}

/// Fetches all four collections concurrently and bundles them.
///
/// The first failing fetch aborts the whole load and the remaining fetches are
/// dropped. A `RecordSet` is returned only when every collection arrived and
/// passed validation.
///
/// # Errors
///
/// Returns the first `RecordError` raised by the source, or
/// `RecordError::InvalidReportMonth` if validation fails.
pub async fn load_records<S>(source: &S) -> Result<RecordSet, RecordError>
where
    S: RecordSource + ?Sized,
{
    let fetched = futures::try_join!(
        source.fetch_payments(),
        source.fetch_utility_bills(),
        source.fetch_expenses(),
        source.fetch_monthly_reports(),
    );

    let (payments, utility_bills, expenses, reports) = match fetched {
        Ok(collections) => collections,
        Err(err) => {
            warn!(error = %err, "record load aborted");
            return Err(err);
        }
    };

    let records = RecordSet::new(payments, utility_bills, expenses, reports);
    records.validate()?;

    debug!(
        payments = records.payments.len(),
        utility_bills = records.utility_bills.len(),
        expenses = records.expenses.len(),
        reports = records.reports.len(),
        "records loaded"
    );

    Ok(records)
}
