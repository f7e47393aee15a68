//! Plain-text rendering of the dashboard.

use std::fmt;

use leasebook_core::finance::{Dashboard, Period, Trend, format_money, format_signed_percent};
use leasebook_shared::types::Currency;
use rust_decimal::Decimal;

const fn trend_word(trend: Trend) -> &'static str {
    match trend {
        Trend::Favorable => "favorable",
        Trend::Unfavorable => "unfavorable",
        Trend::Unchanged => "unchanged",
    }
}

/// Text view of a dashboard: the month-over-month block followed by the annual table.
pub struct DashboardView<'a> {
    dashboard: &'a Dashboard,
    currency: Currency,
}

impl<'a> DashboardView<'a> {
    /// Wraps `dashboard` for display with amounts in `currency`.
    pub const fn new(dashboard: &'a Dashboard, currency: Currency) -> Self {
        Self {
            dashboard,
            currency,
        }
    }

    fn money(&self, amount: Decimal) -> String {
        format_money(amount, self.currency)
    }

    fn metric_line(
        &self,
        f: &mut fmt::Formatter<'_>,
        name: &str,
        value: Decimal,
        change: Decimal,
        trend: Trend,
    ) -> fmt::Result {
        writeln!(
            f,
            "  {name:<12}{:>18}  {:>9} ({})",
            self.money(value),
            format_signed_percent(change),
            trend_word(trend)
        )
    }

    fn table_row(
        &self,
        f: &mut fmt::Formatter<'_>,
        label: &str,
        revenue: Decimal,
        expenses: Decimal,
        net_income: Decimal,
    ) -> fmt::Result {
        writeln!(
            f,
            "  {label:<6}{:>18}{:>18}{:>18}",
            self.money(revenue),
            self.money(expenses),
            self.money(net_income),
        )
    }
}

impl fmt::Display for DashboardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let comparison = &self.dashboard.comparison;
        let current = Period::containing(self.dashboard.reference_date);

        writeln!(f, "Financial dashboard: {current} vs {}", current.previous())?;
        self.metric_line(
            f,
            "Revenue",
            comparison.current.revenue,
            comparison.revenue_percent_change,
            comparison.revenue_trend(),
        )?;
        self.metric_line(
            f,
            "Expenses",
            comparison.current.expenses,
            comparison.expenses_percent_change,
            comparison.expenses_trend(),
        )?;
        self.metric_line(
            f,
            "Net income",
            comparison.current.net_income,
            comparison.net_income_percent_change,
            comparison.net_income_trend(),
        )?;

        writeln!(f)?;
        writeln!(f, "{} by month", self.dashboard.annual_series.year)?;
        writeln!(
            f,
            "  {:<6}{:>18}{:>18}{:>18}",
            "Month", "Revenue", "Expenses", "Net income"
        )?;
        let chart = &self.dashboard.chart;
        for (i, label) in chart.labels.iter().enumerate() {
            self.table_row(
                f,
                label,
                chart.revenue[i],
                chart.expenses[i],
                chart.net_income[i],
            )?;
        }

        let summary = &self.dashboard.annual_summary;
        self.table_row(
            f,
            "Total",
            summary.total_revenue,
            summary.total_expenses,
            summary.total_net_income,
        )
    }
}
