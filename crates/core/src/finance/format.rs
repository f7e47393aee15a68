//! Display formatting for amounts and percentages.
//!
//! Uses the en locale throughout ("1,234.56") regardless of currency, so output
//! is stable across machines. Midpoints round away from zero.

use leasebook_shared::types::Currency;
use num_format::{Locale, ToFormattedString};
use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds to `dp` places and renders the magnitude with thousands separators.
///
/// Returns the sign separately so callers can place it around a symbol.
fn grouped_magnitude(value: Decimal, dp: u32) -> (bool, String) {
    let mut rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    // Stops short of `dp` when the mantissa would exceed 96 bits.
    rounded.rescale(dp);

    let scale = rounded.scale();
    let mantissa = rounded.mantissa();
    let unit = 10u128.pow(scale);
    let magnitude = mantissa.unsigned_abs();
    let integer = (magnitude / unit).to_formatted_string(&Locale::en);

    let text = if dp == 0 {
        integer
    } else {
        let digits = if scale == 0 {
            String::new()
        } else {
            format!("{:0width$}", magnitude % unit, width = scale as usize)
        };
        format!("{integer}.{digits:0<width$}", width = dp as usize)
    };

    (mantissa < 0, text)
}

/// Formats an amount with two decimals and thousands grouping, e.g. "1,234.56".
#[must_use]
pub fn format_currency(amount: Decimal) -> String {
    match grouped_magnitude(amount, 2) {
        (true, text) => format!("-{text}"),
        (false, text) => text,
    }
}

/// Formats an amount with the currency symbol in front, e.g. "$1,234.56" or "-₱80.00".
#[must_use]
pub fn format_money(amount: Decimal, currency: Currency) -> String {
    let symbol = currency.symbol();
    match grouped_magnitude(amount, 2) {
        (true, text) => format!("-{symbol}{text}"),
        (false, text) => format!("{symbol}{text}"),
    }
}

/// Formats a percent change with one decimal and an explicit sign, e.g. "+12.3%".
///
/// Zero (including values that round to zero) renders as "0.0%".
#[must_use]
pub fn format_signed_percent(value: Decimal) -> String {
    let (negative, text) = grouped_magnitude(value, 1);
    if negative {
        format!("-{text}%")
    } else if text == "0.0" {
        format!("{text}%")
    } else {
        format!("+{text}%")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case(dec!(1234.56), "1,234.56")]
    #[case(dec!(0), "0.00")]
    #[case(dec!(5), "5.00")]
    #[case(dec!(999.999), "1,000.00")]
    #[case(dec!(0.005), "0.01")]
    #[case(dec!(1234567.891), "1,234,567.89")]
    #[case(dec!(-1234.5), "-1,234.50")]
    #[case(dec!(-0.004), "0.00")]
    #[case(Decimal::MAX, "79,228,162,514,264,337,593,543,950,335.00")]
    #[case(Decimal::MIN, "-79,228,162,514,264,337,593,543,950,335.00")]
    #[case(dec!(7922816251426433759354395033.5), "7,922,816,251,426,433,759,354,395,033.50")]
    fn test_format_currency(#[case] amount: Decimal, #[case] expected: &str) {
        assert_eq!(format_currency(amount), expected);
    }

    #[rstest]
    #[case(dec!(12.34), "+12.3%")]
    #[case(dec!(-4), "-4.0%")]
    #[case(dec!(0), "0.0%")]
    #[case(dec!(0.04), "0.0%")]
    #[case(dec!(-0.04), "0.0%")]
    #[case(dec!(0.05), "+0.1%")]
    #[case(dec!(1500), "+1,500.0%")]
    #[case(Decimal::MAX, "+79,228,162,514,264,337,593,543,950,335.0%")]
    #[case(dec!(33.333333333333333333333333), "+33.3%")]
    fn test_format_signed_percent(#[case] value: Decimal, #[case] expected: &str) {
        assert_eq!(format_signed_percent(value), expected);
    }

    #[rstest]
    #[case(dec!(1234.56), Currency::Usd, "$1,234.56")]
    #[case(dec!(-80), Currency::Php, "-₱80.00")]
    #[case(dec!(1000000), Currency::Idr, "Rp1,000,000.00")]
    fn test_format_money(#[case] amount: Decimal, #[case] currency: Currency, #[case] expected: &str) {
        assert_eq!(format_money(amount, currency), expected);
    }
}
