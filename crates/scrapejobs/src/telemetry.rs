//! Tracing subscriber setup.
//!
//! Library code logs through both `log` and `tracing`; a
//! `tracing_log::LogTracer` bridge routes `log` records into the same
//! subscriber so everything shares one filter and format.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::config::{LogFormat, LoggingConfig};
use crate::error::ConfigError;

/// Builds the filter: `RUST_LOG` when set, else the configured level.
pub fn build_env_filter(config: &LoggingConfig) -> Result<EnvFilter, ConfigError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(&config.level).map_err(|e| ConfigError::InvalidFilter {
        filter: config.level.clone(),
        reason: e.to_string(),
    })
}

/// Installs the global subscriber. Returns `Ok(false)` if one was already
/// installed (e.g. by the embedding application or an earlier call).
pub fn init_tracing(config: &LoggingConfig) -> Result<bool, ConfigError> {
    let filter = build_env_filter(config)?;

    // ok(): the bridge may already be installed.
    tracing_log::LogTracer::init().ok();

    let fmt_layer = match config.format {
        LogFormat::Compact => tracing_subscriber::fmt::layer()
            .compact()
            .with_target(true)
            .boxed(),
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .with_current_span(true)
            .boxed(),
    };

    let subscriber = tracing_subscriber::registry().with(filter).with(fmt_layer);
    let installed = tracing::subscriber::set_global_default(subscriber).is_ok();

    if installed {
        tracing::debug!(format = ?config.format, level = %config.level, "tracing initialised");
    }
    Ok(installed)
}
