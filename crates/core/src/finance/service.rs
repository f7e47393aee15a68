//! Dashboard entry points.

use chrono::NaiveDate;
use tracing::{debug, warn};

use super::aggregate::PeriodAggregator;
use super::error::FinanceError;
use super::period::Period;
use super::series::AnnualSeries;
use super::types::{Dashboard, PeriodComparison};
use crate::records::RecordSet;

/// Service assembling the financial dashboard from loaded records.
pub struct DashboardService;

impl DashboardService {
    /// Compares the period containing `reference_date` with the one before it.
    ///
    /// # Errors
    ///
    /// Returns [`FinanceError::Overflow`] if a figure leaves `Decimal` range.
    pub fn compare_with_previous(
        records: &RecordSet,
        reference_date: NaiveDate,
    ) -> Result<PeriodComparison, FinanceError> {
        let current = Period::containing(reference_date);
        let previous = current.previous();

        PeriodComparison::between(
            PeriodAggregator::aggregate(records, current)?,
            PeriodAggregator::aggregate(records, previous)?,
        )
    }

    /// Builds the full dashboard for `reference_date`.
    ///
    /// The comparison covers the reference month and the month before; the
    /// series, summary, and chart cover the reference year.
    ///
    /// # Errors
    ///
    /// Returns [`FinanceError::Overflow`] if a figure leaves `Decimal` range.
    /// No partial dashboard is produced.
    pub fn build(records: &RecordSet, reference_date: NaiveDate) -> Result<Dashboard, FinanceError> {
        let current = Period::containing(reference_date);
        debug!(
            period = %current,
            records = records.len(),
            "building financial dashboard"
        );

        let dashboard = Self::assemble(records, reference_date, current).inspect_err(|err| {
            warn!(period = %current, error = %err, "dashboard aborted");
        })?;

        debug!(
            revenue = %dashboard.comparison.current.revenue,
            expenses = %dashboard.comparison.current.expenses,
            net_income = %dashboard.comparison.current.net_income,
            "dashboard built"
        );

        Ok(dashboard)
    }

    fn assemble(
        records: &RecordSet,
        reference_date: NaiveDate,
        current: Period,
    ) -> Result<Dashboard, FinanceError> {
        let comparison = Self::compare_with_previous(records, reference_date)?;
        let annual_series = AnnualSeries::build(records, current.year())?;
        let annual_summary = annual_series.summary()?;
        let chart = annual_series.chart();

        Ok(Dashboard {
            reference_date,
            comparison,
            annual_series,
            annual_summary,
            chart,
        })
    }
}
