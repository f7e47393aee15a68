//! Leasebook dashboard runner.
//!
//! Loads the four record exports, runs the monthly aggregation engine, and
//! prints the financial dashboard.

mod render;
mod source;

use chrono::Local;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use leasebook_core::finance::DashboardService;
use leasebook_core::records::load_records;
use leasebook_shared::{AppConfig, AppError};

use crate::render::DashboardView;
use crate::source::JsonFileSource;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so stdout stays clean for the report
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "leasebook=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = AppConfig::load().map_err(AppError::from)?;

    let reference_date = config
        .display
        .reference_date
        .unwrap_or_else(|| Local::now().date_naive());

    let source = JsonFileSource::new(config.data.clone());
    let records = match load_records(&source).await {
        Ok(records) => records,
        Err(err) => {
            let err = AppError::from(err);
            error!(
                code = err.error_code(),
                transient = err.is_transient(),
                "failed to load financial records: {err}"
            );
            return Err(err.into());
        }
    };
    info!(
        records = records.len(),
        dir = %config.data.dir.display(),
        "records loaded"
    );

    let dashboard = match DashboardService::build(&records, reference_date) {
        Ok(dashboard) => dashboard,
        Err(err) => {
            let err = AppError::from(err);
            error!(
                code = err.error_code(),
                %reference_date,
                "failed to build dashboard: {err}"
            );
            return Err(err.into());
        }
    };
    info!(%reference_date, "dashboard ready");

    if config.display.json {
        println!("{}", serde_json::to_string_pretty(&dashboard)?);
    } else {
        print!(
            "{}",
            DashboardView::new(&dashboard, config.display.currency)
        );
    }

    Ok(())
}
