//! Tracing subscriber setup

use anyhow::Result;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::{LogFormat, ReconcileConfig};

/// Install the global subscriber
///
/// `RUST_LOG` wins over the configured level. Logs go to stderr so stdout
/// carries only documents and reports.
///
/// # Errors
/// Fails on an invalid filter directive or when a subscriber is already set.
pub fn init_tracing(config: &ReconcileConfig) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))?;
    let registry = tracing_subscriber::registry().with(env_filter);

    match config.log_format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()?,
        LogFormat::Pretty => registry
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .try_init()?,
    }
    Ok(())
}
