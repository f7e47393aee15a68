//! Twelve-month annual series.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::aggregate::{PeriodAggregator, checked_sum};
use super::error::FinanceError;
use super::period::Period;
use super::types::{AnnualSummary, MonthlyChart, PeriodStats};
use crate::records::RecordSet;

/// Monthly statistics for January through December of one year.
///
/// Always holds exactly 12 entries, in calendar order. Months without records
/// are all-zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnualSeries {
    /// Calendar year.
    pub year: i32,
    /// Index 0 is January, index 11 is December.
    pub months: Vec<PeriodStats>,
}

impl AnnualSeries {
    /// Aggregates every month of `year`.
    ///
    /// # Errors
    ///
    /// Returns [`FinanceError::Overflow`] if any month overflows.
    pub fn build(records: &RecordSet, year: i32) -> Result<Self, FinanceError> {
        let months = Period::months_of(year)
            .map(|period| PeriodAggregator::aggregate(records, period))
            .collect::<Result<_, _>>()?;

        Ok(Self { year, months })
    }

    /// Sums the series.
    ///
    /// # Errors
    ///
    /// Returns [`FinanceError::Overflow`] if a yearly total leaves `Decimal` range.
    pub fn summary(&self) -> Result<AnnualSummary, FinanceError> {
        Ok(AnnualSummary {
            year: self.year,
            total_revenue: checked_sum(self.months.iter().map(|m| m.revenue), "annual revenue")?,
            total_expenses: checked_sum(
                self.months.iter().map(|m| m.expenses),
                "annual expenses",
            )?,
            total_net_income: checked_sum(
                self.months.iter().map(|m| m.net_income),
                "annual net income",
            )?,
        })
    }

    /// Splits the series into chart vectors labelled "Jan" to "Dec".
    #[must_use]
    pub fn chart(&self) -> MonthlyChart {
        let labels = Period::months_of(self.year)
            .map(|p| p.label().to_string())
            .collect();

        MonthlyChart {
            labels,
            revenue: self.months.iter().map(|m| m.revenue).collect(),
            expenses: self.months.iter().map(|m| m.expenses).collect(),
            net_income: self.months.iter().map(|m| m.net_income).collect(),
        }
    }

    /// The month with the highest net income. Ties go to the earlier month.
    #[must_use]
    pub fn best_month(&self) -> Option<&PeriodStats> {
        self.months.iter().fold(None, |best, m| match best {
            Some(b) if b.net_income >= m.net_income => Some(b),
            _ => Some(m),
        })
    }

    /// Average monthly net income over the year.
    ///
    /// # Errors
    ///
    /// Returns [`FinanceError::Overflow`] if the yearly total overflows.
    pub fn average_net_income(&self) -> Result<Decimal, FinanceError> {
        if self.months.is_empty() {
            return Ok(Decimal::ZERO);
        }
        let total = checked_sum(self.months.iter().map(|m| m.net_income), "annual net income")?;
        total
            .checked_div(Decimal::from(self.months.len()))
            .ok_or(FinanceError::Overflow("average net income"))
    }
}
