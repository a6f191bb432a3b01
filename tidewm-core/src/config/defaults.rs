//! Default values for tidewm configuration settings.

use std::path::PathBuf;

pub fn default_log_level_spec() -> String {
    "info".to_string()
}

pub fn default_log_file_path_spec() -> Option<PathBuf> {
    None
}

pub fn default_log_format_spec() -> String {
    "text".to_string()
}

/// Scaling applied to raw gesture deltas before they become grid units.
pub fn default_gesture_sensitivity() -> f64 {
    4.0
}

/// Half-width, in grid units, of the window each axis grid spans around
/// the gesture origin.
pub fn default_grid_span() -> f64 {
    3.0
}

/// Elastic overshoot factor applied outside the grid bounds.
pub fn default_grid_overshoot() -> f64 {
    0.2
}

/// Snap step; settled coordinates are multiples of this.
pub fn default_grid_snap() -> f64 {
    1.0
}

/// Minimum window extent, in grid units, on either axis.
pub fn default_min_view_size() -> f64 {
    1.0
}

/// Animation tick rate of the overlay loop.
pub fn default_tick_rate_hz() -> u32 {
    120
}

/// Duration of a viewport-follow animation.
pub fn default_viewport_follow_secs() -> f64 {
    0.3
}

/// Suggested duration of the final settle when the overlay exits.
pub fn default_exit_transition_secs() -> f64 {
    0.3
}

/// Upper bound on the settle transition suggested by an axis grid.
pub fn default_max_transition_secs() -> f64 {
    0.6
}
