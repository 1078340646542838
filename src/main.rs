//! Alloy Impact server binary.

use alloy_impact::adapters::{app_router, CsvIndicatorSource, ImpactAppState};
use alloy_impact::application::build_aggregator;
use alloy_impact::config::{AppConfig, ConfigError, ServerConfig};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config()?;
    init_tracing(&config.server);

    if let Err(err) = config.validate() {
        tracing::error!(error = %err, "Invalid configuration");
        return Err(err.into());
    }

    let source = CsvIndicatorSource::new(&config.data.indicators_path);
    let aggregator = build_aggregator(&source).await?;

    let app = app_router(ImpactAppState::new(aggregator), &config.server);

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(
        %addr,
        environment = ?config.server.environment,
        "Alloy impact server listening"
    );

    axum::serve(listener, app).await?;
    Ok(())
}

/// Loads configuration under a temporary subscriber so a load failure is
/// still logged; the configured subscriber needs the loaded log level.
fn load_config() -> Result<AppConfig, ConfigError> {
    let bootstrap = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("info"))
        .finish();
    let _guard = tracing::subscriber::set_default(bootstrap);

    AppConfig::load().map_err(|err| {
        tracing::error!(error = %err, "Failed to load configuration");
        err
    })
}

fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&server.log_level));

    if server.is_production() {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn unparseable_configuration_is_reported_as_load_error() {
        env::set_var("ALLOY_IMPACT__SERVER__PORT", "eighty");
        let result = load_config();
        env::remove_var("ALLOY_IMPACT__SERVER__PORT");

        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }
}
