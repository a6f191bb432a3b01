//! Logging setup for tidewm, built on the `tracing` ecosystem.
//!
//! Supports console output and optional non-blocking file logging with a
//! configurable format ("text" or "json").

use crate::config::LoggingConfig;
use crate::error::CoreError;

use std::path::Path;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    fmt,
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer, Registry,
};

/// Initializes a minimal logging setup, directing messages to `stderr`.
///
/// Intended for tests, early startup before configuration is loaded, or as
/// a fallback if full logging initialization fails. Filters based on the
/// `RUST_LOG` environment variable, defaulting to "info". Errors (e.g. a
/// global subscriber already being set) are ignored.
pub fn init_minimal_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(Level::INFO.to_string()));

    let _ = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn create_file_layer(
    log_path: &Path,
    format: &str,
) -> Result<(Box<dyn Layer<Registry> + Send + Sync + 'static>, WorkerGuard), CoreError> {
    let dir = log_path.parent().unwrap_or_else(|| Path::new("."));
    let file_name = log_path
        .file_name()
        .unwrap_or_else(|| std::ffi::OsStr::new("tidewm.log"));

    let file_appender = tracing_appender::rolling::daily(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let layer: Box<dyn Layer<Registry> + Send + Sync + 'static> =
        match format.to_lowercase().as_str() {
            "json" => fmt::layer().json().with_writer(writer).boxed(),
            _ => fmt::layer().with_writer(writer).with_ansi(false).boxed(),
        };
    Ok((layer, guard))
}

/// Initializes the global logging subscriber from a [`LoggingConfig`].
///
/// Returns the file writer's [`WorkerGuard`] when file logging is enabled;
/// the caller must keep it alive for buffered log lines to be flushed.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>, CoreError> {
    let level: Level = config
        .level
        .parse()
        .map_err(|_| CoreError::LoggingInitialization(format!("invalid level {:?}", config.level)))?;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    let console_layer = fmt::layer().with_writer(std::io::stderr);

    let mut guard = None;
    let file_layer = match &config.file_path {
        Some(path) => {
            let (layer, g) = create_file_layer(path, &config.format)?;
            guard = Some(g);
            Some(layer)
        }
        None => None,
    };

    Registry::default()
        .with(file_layer)
        .with(console_layer.with_filter(filter))
        .try_init()
        .map_err(|e| CoreError::LoggingInitialization(e.to_string()))?;

    Ok(guard)
}
