//! Raw financial records supplied by the record-management collaborator.
//!
//! This module provides:
//! - The four record types and the [`RecordSet`] bundle
//! - JSON decoding that fails loudly on malformed dates or amounts
//! - A [`RecordSource`] seam with all-or-nothing concurrent loading

pub mod error;
pub mod parse;
pub mod source;
pub mod types;

pub use error::{Collection, RecordError};
pub use parse::{parse_expenses, parse_monthly_reports, parse_payments, parse_utility_bills};
pub use source::{RecordSource, load_records};
pub use types::{Expense, MonthlyReport, Payment, RecordSet, UtilityBill};
