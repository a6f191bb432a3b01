//! Error handling for the tidewm core layer.
//!
//! Error types for the foundational layer, defined with `thiserror`.
//! The main error type for this crate is [`CoreError`], which wraps the
//! more specific [`ConfigError`].

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Core error type for the tidewm foundation layer.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Errors related to configuration loading, parsing, or validation.
    #[error("Configuration Error: {0}")]
    Config(#[from] ConfigError),

    /// Errors that occur during the initialization of the logging system.
    #[error("Logging Initialization Failed: {0}")]
    LoggingInitialization(String),

    /// General I/O errors not covered by more specific variants.
    #[error("I/O Error: {0}")]
    Io(#[from] io::Error),
}

/// Errors produced while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("Could not read configuration file {path:?}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The configuration file is not valid TOML or does not match the schema.
    #[error("Could not parse configuration: {0}")]
    ParseError(#[from] toml::de::Error),

    /// The configuration parsed but contains invalid values.
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}
