//! Monthly financial aggregation.
//!
//! Turns the four record collections into period statistics:
//! - Period resolution with year rollover
//! - Per-period record filtering and aggregation
//! - Month-over-month comparison with zero-guarded percent change
//! - Twelve-month annual series, summary, and chart data
//! - Currency and percent formatting for display
//!
//! Every function here is pure: no clock, no I/O, no shared state.

pub mod aggregate;
pub mod comparison;
pub mod error;
pub mod filter;
pub mod format;
pub mod period;
pub mod series;
pub mod service;
pub mod types;

#[cfg(test)]
mod tests;

pub use aggregate::PeriodAggregator;
pub use comparison::percent_change;
pub use error::FinanceError;
pub use filter::{Bucketed, filter_by_period};
pub use format::{format_currency, format_money, format_signed_percent};
pub use period::Period;
pub use series::AnnualSeries;
pub use service::DashboardService;
pub use types::{
    AnnualSummary, Dashboard, MonthlyChart, PeriodBreakdown, PeriodComparison, PeriodStats, Trend,
};
