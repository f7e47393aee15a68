//! Record types as delivered by the record-management backend.
//!
//! Field names follow the backend's camelCase JSON. Every record is an immutable
//! input; the engine never mutates or re-keys them.

use chrono::NaiveDate;
use leasebook_shared::types::{ExpenseId, MonthlyReportId, PaymentId, UnitId, UtilityBillId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::RecordError;
use super::parse::{deserialize_date, deserialize_optional_date};

/// A rent payment for a unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    /// Unique identifier.
    pub id: PaymentId,
    /// Unit the payment is for.
    pub unit_id: UnitId,
    /// Amount collected from the tenant.
    pub amount: Decimal,
    /// Whether the tenant has paid.
    #[serde(default)]
    pub is_paid: bool,
    /// When the payment was received. Only set once paid.
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub paid_at: Option<NaiveDate>,
    /// When the payment falls due.
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub due_date: Option<NaiveDate>,
    /// First month covered by the payment.
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub month_of_start: Option<NaiveDate>,
    /// Last month covered by the payment.
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub month_of_end: Option<NaiveDate>,
}

/// A utility bill paid by the property owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UtilityBill {
    /// Unique identifier.
    pub id: UtilityBillId,
    /// Unit the bill belongs to.
    pub unit_id: UnitId,
    /// Total billed amount.
    pub total_amount: Decimal,
    /// Whether the owner has settled the bill.
    #[serde(default)]
    pub is_paid: bool,
    /// When the bill was settled.
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub paid_at: Option<NaiveDate>,
    /// Utility kind, e.g. "water" or "electricity".
    #[serde(rename = "type", default)]
    pub kind: String,
}

/// A direct expense recorded against a unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    /// Unique identifier.
    pub id: ExpenseId,
    /// Unit the expense was spent on.
    pub unit_id: UnitId,
    /// Amount spent.
    pub amount: Decimal,
    /// Date the expense was incurred.
    #[serde(deserialize_with = "deserialize_date")]
    pub date: NaiveDate,
    /// Free-text reason.
    #[serde(default)]
    pub reason: String,
}

/// A precomputed per-unit rollup for one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyReport {
    /// Unique identifier.
    pub id: MonthlyReportId,
    /// Unit the row summarizes.
    pub unit_id: UnitId,
    /// Calendar month (1-12).
    pub month: u32,
    /// Calendar year.
    pub year: i32,
    /// Dues billed to the tenant for the month.
    #[serde(default)]
    pub monthly_dues: Decimal,
    /// Utility total for the month.
    #[serde(default)]
    pub utility_bills: Decimal,
    /// Expense total for the month.
    #[serde(default)]
    pub expenses: Decimal,
}

impl MonthlyReport {
    /// Cost side of the row: utility bills plus expenses.
    ///
    /// `None` if the sum leaves `Decimal` range.
    #[must_use]
    pub fn cost_rollup(&self) -> Option<Decimal> {
        self.utility_bills.checked_add(self.expenses)
    }
}

/// The four collections the engine aggregates over.
///
/// Built only from a complete fetch; a partially loaded set is never constructed
/// by [`super::load_records`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordSet {
    /// Rent payments.
    pub payments: Vec<Payment>,
    /// Owner-paid utility bills.
    pub utility_bills: Vec<UtilityBill>,
    /// Direct expenses.
    pub expenses: Vec<Expense>,
    /// Monthly report rows.
    pub reports: Vec<MonthlyReport>,
}

impl RecordSet {
    /// Bundles the four collections.
    #[must_use]
    pub const fn new(
        payments: Vec<Payment>,
        utility_bills: Vec<UtilityBill>,
        expenses: Vec<Expense>,
        reports: Vec<MonthlyReport>,
    ) -> Self {
        Self {
            payments,
            utility_bills,
            expenses,
            reports,
        }
    }

    /// Total number of records across all collections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.payments.len() + self.utility_bills.len() + self.expenses.len() + self.reports.len()
    }

    /// Returns true if every collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Checks invariants the decoder cannot express.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::InvalidReportMonth` for a report row whose month is
    /// outside 1-12. Such a row would otherwise silently fall out of every period.
    pub fn validate(&self) -> Result<(), RecordError> {
        if let Some(report) = self.reports.iter().find(|r| !(1..=12).contains(&r.month)) {
            return Err(RecordError::InvalidReportMonth {
                month: report.month,
                year: report.year,
            });
        }
        Ok(())
    }
}
