//! Tracing subscriber setup.
//!
//! `RUST_LOG` wins over the configured filter. With the `profile-console`
//! feature the tokio console layer replaces the fmt subscriber.

use crate::settings::LogSettings;

pub type TelemetryError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[cfg(not(feature = "profile-console"))]
pub fn init_tracing(log: &LogSettings) -> Result<(), TelemetryError> {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&log.filter))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
}

#[cfg(feature = "profile-console")]
pub fn init_tracing(_log: &LogSettings) -> Result<(), TelemetryError> {
    console_subscriber::init();
    Ok(())
}
