//! Tracing setup
//!
//! The terminal is the drawing surface, so logs are best sent to a file.
//! Without one they go to stderr at the configured level.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::config::{ConfigError, LogConfig};

/// Environment variable overriding the configured filter
pub const LOG_ENV: &str = "TERMDRAW_LOG";

/// Report an error to the user exactly once
///
/// stderr always gets the message; the log only records it when it goes to a
/// file, otherwise the stderr layer would print it a second time.
pub fn report(config: &LogConfig, message: &str) {
    if !config.writes_to_stderr() {
        tracing::error!("{}", message);
    }
    eprintln!("termdraw: {}", message);
}

/// Install the global subscriber
pub fn init(config: &LogConfig) -> Result<(), ConfigError> {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).or_else(|_| EnvFilter::try_new(&config.filter)).map_err(
            |e| ConfigError::Invalid(format!("log filter '{}': {}", config.filter, e)),
        )?;

    let (file_layer, stderr_layer) = match &config.file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            let layer = fmt::layer().with_ansi(false).with_writer(Mutex::new(file));
            (Some(layer), None)
        },
        None => (None, Some(fmt::layer().with_writer(std::io::stderr))),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stderr_layer)
        .try_init()
        .map_err(|e| ConfigError::Logging(e.to_string()))
}
