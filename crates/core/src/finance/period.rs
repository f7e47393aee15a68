//! Calendar-month periods.

use chrono::{Datelike, NaiveDate};

use super::error::FinanceError;

const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// A (month, year) aggregation bucket.
///
/// Ordered chronologically. The month is always in 1-12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Period {
    year: i32,
    month: u32,
}

impl Period {
    /// Creates a period, rejecting months outside 1-12.
    pub fn new(month: u32, year: i32) -> Result<Self, FinanceError> {
        if (1..=12).contains(&month) {
            Ok(Self { year, month })
        } else {
            Err(FinanceError::InvalidMonth(month))
        }
    }

    /// Resolves the period a date falls in.
    #[must_use]
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Calendar month (1-12).
    #[must_use]
    pub const fn month(self) -> u32 {
        self.month
    }

    /// Calendar year.
    #[must_use]
    pub const fn year(self) -> i32 {
        self.year
    }

    /// The period immediately before this one. January rolls back to December
    /// of the previous year.
    #[must_use]
    pub const fn previous(self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// January through December of `year`, in order.
    pub fn months_of(year: i32) -> impl Iterator<Item = Self> {
        (1..=12).map(move |month| Self { year, month })
    }

    /// Three-letter month label, e.g. "Mar".
    #[must_use]
    pub const fn label(self) -> &'static str {
        MONTH_LABELS[(self.month - 1) as usize]
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.label(), self.year)
    }
}
