//! Property-based tests for the finance module.

use chrono::NaiveDate;
use leasebook_shared::types::{ExpenseId, MonthlyReportId, PaymentId, UnitId, UtilityBillId};
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::aggregate::PeriodAggregator;
use super::comparison::percent_change;
use super::error::FinanceError;
use super::period::Period;
use super::series::AnnualSeries;
use crate::records::{Expense, MonthlyReport, Payment, RecordSet, UtilityBill};

/// Strategy for an amount from 0.00 to 100,000.00.
fn amount() -> impl Strategy<Value = Decimal> {
    (0i64..10_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for a signed amount.
fn signed_amount() -> impl Strategy<Value = Decimal> {
    (-10_000_000i64..10_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for a date in 2023-2025.
fn date() -> impl Strategy<Value = NaiveDate> {
    (2023i32..=2025, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

/// Strategy covering the whole `Decimal` range, extremes included.
fn any_decimal() -> impl Strategy<Value = Decimal> {
    (any::<u32>(), any::<u32>(), any::<u32>(), any::<bool>(), 0u32..=28)
        .prop_map(|(lo, mid, hi, negative, scale)| Decimal::from_parts(lo, mid, hi, negative, scale))
}

fn period() -> impl Strategy<Value = Period> {
    (1u32..=12, 2023i32..=2025).prop_map(|(m, y)| Period::new(m, y).unwrap())
}

fn payment() -> impl Strategy<Value = Payment> {
    (amount(), any::<bool>(), proptest::option::of(date())).prop_map(
        |(amount, is_paid, paid_at)| Payment {
            id: PaymentId::new(),
            unit_id: UnitId::new(),
            amount,
            is_paid,
            paid_at,
            due_date: None,
            month_of_start: None,
            month_of_end: None,
        },
    )
}

fn utility_bill() -> impl Strategy<Value = UtilityBill> {
    (amount(), any::<bool>(), proptest::option::of(date())).prop_map(
        |(total_amount, is_paid, paid_at)| UtilityBill {
            id: UtilityBillId::new(),
            unit_id: UnitId::new(),
            total_amount,
            is_paid,
            paid_at,
            kind: "water".to_string(),
        },
    )
}

fn expense() -> impl Strategy<Value = Expense> {
    (amount(), date()).prop_map(|(amount, date)| Expense {
        id: ExpenseId::new(),
        unit_id: UnitId::new(),
        amount,
        date,
        reason: String::new(),
    })
}

fn report() -> impl Strategy<Value = MonthlyReport> {
    (period(), amount(), amount(), amount()).prop_map(
        |(period, monthly_dues, utility_bills, expenses)| MonthlyReport {
            id: MonthlyReportId::new(),
            unit_id: UnitId::new(),
            month: period.month(),
            year: period.year(),
            monthly_dues,
            utility_bills,
            expenses,
        },
    )
}

fn record_set() -> impl Strategy<Value = RecordSet> {
    (
        prop::collection::vec(payment(), 0..20),
        prop::collection::vec(utility_bill(), 0..10),
        prop::collection::vec(expense(), 0..10),
        prop::collection::vec(report(), 0..10),
    )
        .prop_map(|(payments, utility_bills, expenses, reports)| {
            RecordSet::new(payments, utility_bills, expenses, reports)
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// A zero baseline never produces a percent change, whatever the current value.
    #[test]
    fn prop_percent_change_zero_previous(current in signed_amount()) {
        prop_assert_eq!(percent_change(current, Decimal::ZERO), Ok(Decimal::ZERO));
    }

    /// Percent change is zero when nothing changed.
    #[test]
    fn prop_percent_change_identity(value in signed_amount()) {
        prop_assert_eq!(percent_change(value, value), Ok(Decimal::ZERO));
    }

    /// Percent change either yields a value or reports overflow; it never panics.
    #[test]
    fn prop_percent_change_total(current in any_decimal(), previous in any_decimal()) {
        match percent_change(current, previous) {
            Ok(_) | Err(FinanceError::Overflow(_)) => {}
            Err(other) => prop_assert!(false, "unexpected error: {other}"),
        }
    }

    /// Same records and period always give the same statistics.
    #[test]
    fn prop_aggregate_idempotent(records in record_set(), period in period()) {
        prop_assert_eq!(
            PeriodAggregator::aggregate(&records, period),
            PeriodAggregator::aggregate(&records, period)
        );
    }

    /// Total expenses = report rollup + utility cost + direct expenses, and
    /// net income = revenue - (report rollup + direct expenses).
    #[test]
    fn prop_expense_and_net_income_identities(records in record_set(), period in period()) {
        let breakdown = PeriodAggregator::breakdown(&records, period).unwrap();
        let stats = PeriodAggregator::aggregate(&records, period).unwrap();

        prop_assert_eq!(
            stats.expenses,
            breakdown.report_rollup + breakdown.utility_cost + breakdown.direct_expenses
        );
        prop_assert_eq!(stats.revenue, breakdown.gross_revenue - breakdown.utility_cost);
        prop_assert_eq!(
            stats.net_income,
            stats.revenue - (breakdown.report_rollup + breakdown.direct_expenses)
        );
    }

    /// Unpaid payments never contribute to any period's revenue.
    #[test]
    fn prop_unpaid_payments_ignored(records in record_set(), period in period()) {
        let mut paid_only = records.clone();
        paid_only.payments.retain(|p| p.is_paid);

        prop_assert_eq!(
            PeriodAggregator::aggregate(&records, period),
            PeriodAggregator::aggregate(&paid_only, period)
        );
    }

    /// Each paid payment lands in exactly one month of its year.
    #[test]
    fn prop_series_revenue_conserves_payments(
        payments in prop::collection::vec(payment(), 0..30),
        year in 2023i32..=2025,
    ) {
        let expected: Decimal = payments
            .iter()
            .filter(|p| p.is_paid)
            .filter_map(|p| p.paid_at.map(|d| (p.amount, d)))
            .filter(|(_, d)| chrono::Datelike::year(d) == year)
            .map(|(amount, _)| amount)
            .sum();

        let records = RecordSet::new(payments, vec![], vec![], vec![]);
        let series = AnnualSeries::build(&records, year).unwrap();

        prop_assert_eq!(series.summary().unwrap().total_revenue, expected);
    }

    /// The annual series is always January to December of the requested year.
    #[test]
    fn prop_series_shape(records in record_set(), year in 2000i32..2100) {
        let series = AnnualSeries::build(&records, year).unwrap();

        prop_assert_eq!(series.months.len(), 12);
        for (i, month) in series.months.iter().enumerate() {
            prop_assert_eq!(month.month as usize, i + 1);
            prop_assert_eq!(month.year, year);
        }
    }

    /// The previous period is always a valid month and exactly one step back.
    #[test]
    fn prop_previous_period(period in period()) {
        let prev = period.previous();

        prop_assert!((1..=12).contains(&prev.month()));
        prop_assert!(prev < period);
        if period.month() == 1 {
            prop_assert_eq!((prev.month(), prev.year()), (12, period.year() - 1));
        } else {
            prop_assert_eq!((prev.month(), prev.year()), (period.month() - 1, period.year()));
        }
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_empty_series_is_all_zero() {
        let series = AnnualSeries::build(&RecordSet::default(), 2024).unwrap();

        assert!(series.months.iter().all(|m| m.revenue.is_zero()
            && m.expenses.is_zero()
            && m.net_income.is_zero()));
        assert_eq!(series.summary().unwrap().total_net_income, dec!(0));
    }
}
