//! Application configuration management.

use std::path::PathBuf;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::types::Currency;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Where the four record collections are read from.
    #[serde(default)]
    pub data: DataConfig,
    /// How the dashboard is rendered.
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Record source configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    /// Directory holding the JSON exports.
    #[serde(default = "default_data_dir")]
    pub dir: PathBuf,
    /// File name of the rent payment export.
    #[serde(default = "default_payments_file")]
    pub payments_file: String,
    /// File name of the utility bill export.
    #[serde(default = "default_utilities_file")]
    pub utilities_file: String,
    /// File name of the direct expense export.
    #[serde(default = "default_expenses_file")]
    pub expenses_file: String,
    /// File name of the monthly report export.
    #[serde(default = "default_reports_file")]
    pub reports_file: String,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_payments_file() -> String {
    "payments.json".to_string()
}

fn default_utilities_file() -> String {
    "utilities.json".to_string()
}

fn default_expenses_file() -> String {
    "expenses.json".to_string()
}

fn default_reports_file() -> String {
    "monthly_reports.json".to_string()
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dir: default_data_dir(),
            payments_file: default_payments_file(),
            utilities_file: default_utilities_file(),
            expenses_file: default_expenses_file(),
            reports_file: default_reports_file(),
        }
    }
}

impl DataConfig {
    /// Full path of the payment export.
    #[must_use]
    pub fn payments_path(&self) -> PathBuf {
        self.dir.join(&self.payments_file)
    }

    /// Full path of the utility bill export.
    #[must_use]
    pub fn utilities_path(&self) -> PathBuf {
        self.dir.join(&self.utilities_file)
    }

    /// Full path of the expense export.
    #[must_use]
    pub fn expenses_path(&self) -> PathBuf {
        self.dir.join(&self.expenses_file)
    }

    /// Full path of the monthly report export.
    #[must_use]
    pub fn reports_path(&self) -> PathBuf {
        self.dir.join(&self.reports_file)
    }
}

/// Dashboard display configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DisplayConfig {
    /// Currency whose symbol is printed with amounts.
    #[serde(default)]
    pub currency: Currency,
    /// Fixed reference date. When unset the local date is used.
    #[serde(default)]
    pub reference_date: Option<NaiveDate>,
    /// Emit the dashboard as JSON instead of a text table.
    #[serde(default)]
    pub json: bool,
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("LEASEBOOK").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
