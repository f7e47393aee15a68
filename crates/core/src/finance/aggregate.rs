//! Single-period aggregation.

use rust_decimal::Decimal;

use super::error::FinanceError;
use super::filter::filter_by_period;
use super::period::Period;
use super::types::{PeriodBreakdown, PeriodStats};
use crate::records::RecordSet;

/// Sums `values`, failing instead of panicking when the total leaves `Decimal` range.
pub(crate) fn checked_sum<I>(values: I, what: &'static str) -> Result<Decimal, FinanceError>
where
    I: IntoIterator<Item = Decimal>,
{
    values
        .into_iter()
        .try_fold(Decimal::ZERO, Decimal::checked_add)
        .ok_or(FinanceError::Overflow(what))
}

/// Aggregates record collections into period statistics.
pub struct PeriodAggregator;

impl PeriodAggregator {
    /// Computes the intermediate sums for `period`.
    ///
    /// All matching report rows are summed, across every unit.
    ///
    /// # Errors
    ///
    /// Returns [`FinanceError::Overflow`] if a sum leaves `Decimal` range.
    pub fn breakdown(records: &RecordSet, period: Period) -> Result<PeriodBreakdown, FinanceError> {
        let gross_revenue = checked_sum(
            filter_by_period(&records.payments, period)
                .iter()
                .map(|p| p.amount),
            "gross revenue",
        )?;

        let utility_cost = checked_sum(
            filter_by_period(&records.utility_bills, period)
                .iter()
                .map(|u| u.total_amount),
            "utility cost",
        )?;

        let direct_expenses = checked_sum(
            filter_by_period(&records.expenses, period)
                .iter()
                .map(|e| e.amount),
            "direct expenses",
        )?;

        let report_rollup = filter_by_period(&records.reports, period)
            .iter()
            .try_fold(Decimal::ZERO, |acc, r| {
                r.cost_rollup().and_then(|cost| acc.checked_add(cost))
            })
            .ok_or(FinanceError::Overflow("report rollup"))?;

        Ok(PeriodBreakdown {
            gross_revenue,
            utility_cost,
            direct_expenses,
            report_rollup,
        })
    }

    /// Computes revenue, expenses, and net income for `period`.
    ///
    /// - revenue = paid payments - paid utilities
    /// - expenses = report rollup + paid utilities + direct expenses
    /// - net income = revenue - (report rollup + direct expenses)
    ///
    /// Empty inputs yield zero for every field.
    ///
    /// # Errors
    ///
    /// Returns [`FinanceError::Overflow`] if any figure leaves `Decimal` range.
    pub fn aggregate(records: &RecordSet, period: Period) -> Result<PeriodStats, FinanceError> {
        Self::breakdown(records, period)?.into_stats(period)
    }
}
