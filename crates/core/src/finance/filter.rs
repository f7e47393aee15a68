//! Period membership for records.

use chrono::Datelike;

use super::period::Period;
use crate::records::{Expense, MonthlyReport, Payment, UtilityBill};

/// A record that lands in at most one (month, year) bucket.
pub trait Bucketed {
    /// The `(month, year)` bucket this record counts toward, if any.
    ///
    /// `None` means the record is not counted in any period.
    fn bucket(&self) -> Option<(u32, i32)>;

    /// Returns true if the record counts toward `period`.
    fn falls_in(&self, period: Period) -> bool {
        self.bucket() == Some((period.month(), period.year()))
    }
}

/// Counted by `paid_at`, only once paid.
impl Bucketed for Payment {
    fn bucket(&self) -> Option<(u32, i32)> {
        if !self.is_paid {
            return None;
        }
        self.paid_at.map(|d| (d.month(), d.year()))
    }
}

/// Counted by `paid_at`, only once the owner has paid.
impl Bucketed for UtilityBill {
    fn bucket(&self) -> Option<(u32, i32)> {
        if !self.is_paid {
            return None;
        }
        self.paid_at.map(|d| (d.month(), d.year()))
    }
}

/// Always counted, by `date`.
impl Bucketed for Expense {
    fn bucket(&self) -> Option<(u32, i32)> {
        Some((self.date.month(), self.date.year()))
    }
}

/// Counted by its explicit month and year.
impl Bucketed for MonthlyReport {
    fn bucket(&self) -> Option<(u32, i32)> {
        Some((self.month, self.year))
    }
}

/// Selects the records that count toward `period`, preserving input order.
pub fn filter_by_period<T: Bucketed>(records: &[T], period: Period) -> Vec<&T> {
    records.iter().filter(|r| r.falls_in(period)).collect()
}
