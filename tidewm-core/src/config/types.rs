//! Configuration data structures for tidewm.
//!
//! Populated by deserializing a TOML configuration file. Fields not present
//! in the source fall back to the functions in [`super::defaults`], and
//! unknown fields are rejected.

use super::defaults;
use serde::Deserialize;
use std::path::PathBuf;

/// Configuration settings for the logging subsystem.
///
/// Used by `tidewm_core::logging` to initialize the global subscriber.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Minimum log level to record. Valid values (case-insensitive):
    /// "trace", "debug", "info", "warn", "error".
    #[serde(default = "defaults::default_log_level_spec")]
    pub level: String,
    /// Optional path to a log file. `None` disables file logging.
    #[serde(default = "defaults::default_log_file_path_spec")]
    pub file_path: Option<PathBuf>,
    /// Log format for the file layer, "text" or "json".
    #[serde(default = "defaults::default_log_format_spec")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: defaults::default_log_level_spec(),
            file_path: defaults::default_log_file_path_spec(),
            format: defaults::default_log_format_spec(),
        }
    }
}

/// Tuning parameters of the interactive move/resize layer.
///
/// All distances are in grid units, all durations in seconds.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InteractiveConfig {
    /// Scaling applied to raw gesture deltas.
    #[serde(default = "defaults::default_gesture_sensitivity")]
    pub gesture_sensitivity: f64,
    /// Half-width of the axis-grid window around the gesture origin.
    #[serde(default = "defaults::default_grid_span")]
    pub grid_span: f64,
    /// Elastic overshoot factor outside the grid bounds.
    #[serde(default = "defaults::default_grid_overshoot")]
    pub grid_overshoot: f64,
    /// Snap step for settled coordinates.
    #[serde(default = "defaults::default_grid_snap")]
    pub grid_snap: f64,
    /// Minimum window extent on either axis.
    #[serde(default = "defaults::default_min_view_size")]
    pub min_view_size: f64,
    /// Tick rate of the overlay animation loop.
    #[serde(default = "defaults::default_tick_rate_hz")]
    pub tick_rate_hz: u32,
    /// Duration of a viewport-follow animation.
    #[serde(default = "defaults::default_viewport_follow_secs")]
    pub viewport_follow_secs: f64,
    /// Suggested duration of the final settle on overlay exit.
    #[serde(default = "defaults::default_exit_transition_secs")]
    pub exit_transition_secs: f64,
    /// Cap on the settle transition suggested by an axis grid.
    #[serde(default = "defaults::default_max_transition_secs")]
    pub max_transition_secs: f64,
}

impl Default for InteractiveConfig {
    fn default() -> Self {
        InteractiveConfig {
            gesture_sensitivity: defaults::default_gesture_sensitivity(),
            grid_span: defaults::default_grid_span(),
            grid_overshoot: defaults::default_grid_overshoot(),
            grid_snap: defaults::default_grid_snap(),
            min_view_size: defaults::default_min_view_size(),
            tick_rate_hz: defaults::default_tick_rate_hz(),
            viewport_follow_secs: defaults::default_viewport_follow_secs(),
            exit_transition_secs: defaults::default_exit_transition_secs(),
            max_transition_secs: defaults::default_max_transition_secs(),
        }
    }
}

impl InteractiveConfig {
    /// Period of one animation tick.
    pub fn tick_period(&self) -> std::time::Duration {
        std::time::Duration::from_secs_f64(1.0 / f64::from(self.tick_rate_hz.max(1)))
    }
}

/// Root configuration structure for tidewm.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CoreConfig {
    /// Logging subsystem settings.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Interactive move/resize layer settings.
    #[serde(default)]
    pub interactive: InteractiveConfig,
}
