//! SpaceX Launch Records Dashboard
//!
//! Loads the launch CSV and serves the dashboard.
//!
//! # Configuration
//!
//! Read from `$XDG_CONFIG_HOME/spacex-dash/config.toml` or `./spacex-dash.toml`
//! when present. Environment variables override the file:
//! - `SPACEX_DASH_CSV`: Launch records CSV (default: spacex_launch_dash.csv)
//! - `SPACEX_DASH_HOST`: Host to bind to (default: 127.0.0.1)
//! - `SPACEX_DASH_PORT`: Port to listen on (default: 8050)
//! - `SPACEX_DASH_LOG_LEVEL`: Log level (default: info)
//! - `SPACEX_DASH_LOG_FORMAT`: pretty or json (default: pretty)
//! - `RUST_LOG`: Full tracing filter, wins over the log level

use anyhow::Context;
use spacex_dash::api::{serve, AppState};
use spacex_dash::config::{Config, LogFormat, LoggingConfig};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load_default();
    init_tracing(&config.logging);

    tracing::info!("SpaceX Launch Dashboard v{}", env!("CARGO_PKG_VERSION"));

    // The table is loaded once; a bad file means we never serve
    let table = match spacex_dash::data::load(&config.data.csv_path) {
        Ok(table) => Arc::new(table),
        Err(e) => {
            tracing::error!(
                path = %config.data.csv_path.display(),
                error = %e,
                "Failed to load launch records"
            );
            return Err(e).with_context(|| {
                format!("loading launch records from {}", config.data.csv_path.display())
            });
        }
    };

    let state = AppState::new(table, config.slider, config.server.clone());

    serve(state, &config.server)
        .await
        .context("running dashboard server")?;

    tracing::info!("SpaceX Launch Dashboard stopped");
    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("spacex_dash={},tower_http=info", logging.level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);

    match logging.format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}
