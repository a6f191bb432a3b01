//! Configuration management for tidewm.
//!
//! - [`types`] holds the configuration schema ([`CoreConfig`],
//!   [`LoggingConfig`], [`InteractiveConfig`]), deserialized from TOML with
//!   per-field defaults.
//! - [`defaults`] provides the default values used when a configuration
//!   file is missing or incomplete.
//! - [`loader`] implements loading and validation ([`ConfigLoader`]).

pub mod defaults;
pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{CoreConfig, InteractiveConfig, LoggingConfig};
