//! Currency codes used when rendering amounts.
//!
//! Amounts themselves are plain `rust_decimal::Decimal` values; the engine never
//! converts between currencies. The code only decides which symbol is printed.

use serde::{Deserialize, Serialize};

/// ISO 4217 currency codes supported by the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// US Dollar
    #[default]
    Usd,
    /// Euro
    Eur,
    /// Philippine Peso
    Php,
    /// Indonesian Rupiah
    Idr,
    /// Singapore Dollar
    Sgd,
}

impl Currency {
    /// Returns the ISO 4217 code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Usd => "USD",
            Self::Eur => "EUR",
            Self::Php => "PHP",
            Self::Idr => "IDR",
            Self::Sgd => "SGD",
        }
    }

    /// Returns the symbol printed in front of an amount.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Usd => "$",
            Self::Eur => "€",
            Self::Php => "₱",
            Self::Idr => "Rp",
            Self::Sgd => "S$",
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "USD" => Ok(Self::Usd),
            "EUR" => Ok(Self::Eur),
            "PHP" => Ok(Self::Php),
            "IDR" => Ok(Self::Idr),
            "SGD" => Ok(Self::Sgd),
            _ => Err(format!("Unknown currency: {s}")),
        }
    }
}
