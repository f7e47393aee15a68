//! Period-over-period comparison.

use rust_decimal::Decimal;

use super::error::FinanceError;
use super::types::{PeriodComparison, PeriodStats, Trend};

/// Percent change from `previous` to `current`.
///
/// Returns zero when `previous` is zero, whatever `current` is.
///
/// # Errors
///
/// Returns [`FinanceError::Overflow`] when the ratio is too large for `Decimal`,
/// e.g. a tiny non-zero `previous` against a large `current`.
pub fn percent_change(current: Decimal, previous: Decimal) -> Result<Decimal, FinanceError> {
    if previous.is_zero() {
        return Ok(Decimal::ZERO);
    }
    current
        .checked_sub(previous)
        .and_then(|delta| delta.checked_div(previous))
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .ok_or(FinanceError::Overflow("percent change"))
}

impl PeriodComparison {
    /// Compares two snapshots field by field.
    ///
    /// # Errors
    ///
    /// Returns [`FinanceError::Overflow`] if any percent change overflows.
    pub fn between(current: PeriodStats, previous: PeriodStats) -> Result<Self, FinanceError> {
        Ok(Self {
            current,
            previous,
            revenue_percent_change: percent_change(current.revenue, previous.revenue)?,
            expenses_percent_change: percent_change(current.expenses, previous.expenses)?,
            net_income_percent_change: percent_change(current.net_income, previous.net_income)?,
        })
    }

    /// Revenue trend; an increase is favorable.
    #[must_use]
    pub fn revenue_trend(&self) -> Trend {
        Trend::for_income(self.revenue_percent_change)
    }

    /// Expense trend; an increase is unfavorable.
    #[must_use]
    pub fn expenses_trend(&self) -> Trend {
        Trend::for_expense(self.expenses_percent_change)
    }

    /// Net income trend; an increase is favorable.
    #[must_use]
    pub fn net_income_trend(&self) -> Trend {
        Trend::for_income(self.net_income_percent_change)
    }
}

impl Trend {
    /// Reads a change in an income figure (revenue, net income).
    #[must_use]
    pub fn for_income(change: Decimal) -> Self {
        match change.cmp(&Decimal::ZERO) {
            std::cmp::Ordering::Greater => Self::Favorable,
            std::cmp::Ordering::Less => Self::Unfavorable,
            std::cmp::Ordering::Equal => Self::Unchanged,
        }
    }

    /// Reads a change in a cost figure.
    #[must_use]
    pub fn for_expense(change: Decimal) -> Self {
        match change.cmp(&Decimal::ZERO) {
            std::cmp::Ordering::Greater => Self::Unfavorable,
            std::cmp::Ordering::Less => Self::Favorable,
            std::cmp::Ordering::Equal => Self::Unchanged,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn stats(revenue: Decimal, expenses: Decimal, net_income: Decimal) -> PeriodStats {
        PeriodStats {
            month: 3,
            year: 2024,
            revenue,
            expenses,
            net_income,
        }
    }

    #[test]
    fn test_percent_change_basic() {
        assert_eq!(percent_change(dec!(1200), dec!(1000)).unwrap(), dec!(20));
        assert_eq!(percent_change(dec!(750), dec!(1000)).unwrap(), dec!(-25));
        assert_eq!(percent_change(dec!(1000), dec!(1000)).unwrap(), dec!(0));
    }

    #[test]
    fn test_percent_change_zero_previous() {
        assert_eq!(percent_change(dec!(5000), dec!(0)).unwrap(), dec!(0));
        assert_eq!(percent_change(dec!(-5000), dec!(0)).unwrap(), dec!(0));
        assert_eq!(percent_change(dec!(0), dec!(0)).unwrap(), dec!(0));
    }

    #[test]
    fn test_percent_change_negative_previous() {
        // Relative to a loss: -100 -> 50 is (150 / -100) * 100.
        assert_eq!(percent_change(dec!(50), dec!(-100)).unwrap(), dec!(-150));
    }

    #[test]
    fn test_between_compares_each_field() {
        let current = stats(dec!(5000), dec!(1100), dec!(3900));
        let previous = stats(dec!(4000), dec!(1000), dec!(3000));

        let comparison = PeriodComparison::between(current, previous).unwrap();

        assert_eq!(comparison.revenue_percent_change, dec!(25));
        assert_eq!(comparison.expenses_percent_change, dec!(10));
        assert_eq!(comparison.net_income_percent_change, dec!(30));
        assert_eq!(comparison.revenue_trend(), Trend::Favorable);
        assert_eq!(comparison.expenses_trend(), Trend::Unfavorable);
        assert_eq!(comparison.net_income_trend(), Trend::Favorable);
    }

    #[test]
    fn test_previous_without_revenue() {
        let comparison = PeriodComparison::between(
            stats(dec!(5000), dec!(0), dec!(5000)),
            stats(dec!(0), dec!(0), dec!(0)),
        )
        .unwrap();

        assert_eq!(comparison.revenue_percent_change, dec!(0));
        assert_eq!(comparison.revenue_trend(), Trend::Unchanged);
    }

    #[test]
    fn test_trend_reading() {
        assert_eq!(Trend::for_income(dec!(-3.2)), Trend::Unfavorable);
        assert_eq!(Trend::for_expense(dec!(-3.2)), Trend::Favorable);
        assert_eq!(Trend::for_expense(dec!(0)), Trend::Unchanged);
    }

    #[test]
    fn test_huge_ratio_is_an_error() {
        assert_eq!(
            percent_change(dec!(1000000000000000000000000000), dec!(1)),
            Err(FinanceError::Overflow("percent change"))
        );
        assert_eq!(
            percent_change(dec!(100000000000000000000000), dec!(0.0001)),
            Err(FinanceError::Overflow("percent change"))
        );
        assert_eq!(
            percent_change(Decimal::MAX, Decimal::MIN),
            Err(FinanceError::Overflow("percent change"))
        );
    }

    #[test]
    fn test_between_reports_overflow() {
        let result = PeriodComparison::between(
            stats(dec!(1000000000000000000000000000), dec!(0), dec!(0)),
            stats(dec!(1), dec!(0), dec!(0)),
        );

        assert_eq!(result, Err(FinanceError::Overflow("percent change")));
    }
}
