//! Derived financial data types.
//!
//! All of these are rebuilt from scratch on every call and never mutated.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::FinanceError;
use super::period::Period;
use super::series::AnnualSeries;

/// Intermediate sums for one period.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodBreakdown {
    /// Sum of paid payment amounts.
    pub gross_revenue: Decimal,
    /// Sum of owner-paid utility bills.
    pub utility_cost: Decimal,
    /// Sum of direct expenses.
    pub direct_expenses: Decimal,
    /// Sum of `utility_bills + expenses` over matching report rows.
    pub report_rollup: Decimal,
}

impl PeriodBreakdown {
    /// Gross revenue less owner-paid utility cost.
    ///
    /// # Errors
    ///
    /// Returns [`FinanceError::Overflow`] if the difference leaves `Decimal` range.
    pub fn revenue(&self) -> Result<Decimal, FinanceError> {
        self.gross_revenue
            .checked_sub(self.utility_cost)
            .ok_or(FinanceError::Overflow("revenue"))
    }

    /// Report rollup plus utility cost plus direct expenses.
    ///
    /// Utility cost is counted here even though [`Self::revenue`] already
    /// deducted it.
    ///
    /// # Errors
    ///
    /// Returns [`FinanceError::Overflow`] if the sum leaves `Decimal` range.
    pub fn total_expenses(&self) -> Result<Decimal, FinanceError> {
        self.report_rollup
            .checked_add(self.utility_cost)
            .and_then(|sum| sum.checked_add(self.direct_expenses))
            .ok_or(FinanceError::Overflow("expenses"))
    }

    /// Revenue less the non-utility costs.
    ///
    /// # Errors
    ///
    /// Returns [`FinanceError::Overflow`] if any step leaves `Decimal` range.
    pub fn net_income(&self) -> Result<Decimal, FinanceError> {
        let revenue = self.revenue()?;
        self.report_rollup
            .checked_add(self.direct_expenses)
            .and_then(|costs| revenue.checked_sub(costs))
            .ok_or(FinanceError::Overflow("net income"))
    }

    /// Collapses the breakdown into period statistics.
    ///
    /// # Errors
    ///
    /// Returns [`FinanceError::Overflow`] if any figure leaves `Decimal` range.
    pub fn into_stats(self, period: Period) -> Result<PeriodStats, FinanceError> {
        Ok(PeriodStats {
            month: period.month(),
            year: period.year(),
            revenue: self.revenue()?,
            expenses: self.total_expenses()?,
            net_income: self.net_income()?,
        })
    }
}

/// Financial snapshot for one period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodStats {
    /// Calendar month (1-12).
    pub month: u32,
    /// Calendar year.
    pub year: i32,
    /// Revenue after owner-paid utilities.
    pub revenue: Decimal,
    /// Total expenses.
    pub expenses: Decimal,
    /// Net income.
    pub net_income: Decimal,
}

impl PeriodStats {
    /// All-zero statistics for a period with no records.
    #[must_use]
    pub const fn zero(period: Period) -> Self {
        Self {
            month: period.month(),
            year: period.year(),
            revenue: Decimal::ZERO,
            expenses: Decimal::ZERO,
            net_income: Decimal::ZERO,
        }
    }
}

/// How a month-over-month change should be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    /// The change is good news (revenue up, expenses down).
    Favorable,
    /// The change is bad news (revenue down, expenses up).
    Unfavorable,
    /// No change.
    Unchanged,
}

/// This period versus the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodComparison {
    /// Current period statistics.
    pub current: PeriodStats,
    /// Previous period statistics.
    pub previous: PeriodStats,
    /// Percent change in revenue.
    pub revenue_percent_change: Decimal,
    /// Percent change in expenses.
    pub expenses_percent_change: Decimal,
    /// Percent change in net income.
    pub net_income_percent_change: Decimal,
}

/// Year totals over an annual series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnualSummary {
    /// Calendar year.
    pub year: i32,
    /// Sum of monthly revenue.
    pub total_revenue: Decimal,
    /// Sum of monthly expenses.
    pub total_expenses: Decimal,
    /// Sum of monthly net income.
    pub total_net_income: Decimal,
}

/// Annual series split into parallel vectors for charting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyChart {
    /// Labels ("Jan" to "Dec").
    pub labels: Vec<String>,
    /// Revenue per month.
    pub revenue: Vec<Decimal>,
    /// Expenses per month.
    pub expenses: Vec<Decimal>,
    /// Net income per month.
    pub net_income: Vec<Decimal>,
}

/// Everything the financial dashboard displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dashboard {
    /// Date the current period was resolved from.
    pub reference_date: NaiveDate,
    /// This month versus last month.
    pub comparison: PeriodComparison,
    /// January to December of the reference year.
    pub annual_series: AnnualSeries,
    /// Totals over the annual series.
    pub annual_summary: AnnualSummary,
    /// Chart-ready form of the annual series.
    pub chart: MonthlyChart,
}
