//! Core infrastructure layer for tidewm.
//!
//! Provides configuration management, logging setup and the shared error
//! types used by the higher layers. This crate contains no interactive
//! logic; see `tidewm-system` for the move/resize core.

pub mod config;
pub mod error;
pub mod logging;

pub use config::{ConfigLoader, CoreConfig, InteractiveConfig, LoggingConfig};
pub use error::{ConfigError, CoreError};
pub use logging::{init_logging, init_minimal_logging};
