//! Per-axis elastic snapping.

use tracing::trace;

const DEFAULT_MAX_TRANSITION_SECS: f64 = 0.6;

/// Elastic snapping function for one coordinate axis.
///
/// Maps unbounded live gesture coordinates into a window `[lower, upper]`
/// around the gesture origin. Inside the window, values are pulled toward
/// multiples of `snap`, with the pull growing with the distance from
/// `center` so fine motion near the origin passes through unchanged.
/// Outside the window the excess is compressed elastically: the marginal
/// response stays below one and the displayed excursion never exceeds
/// `overshoot` beyond the bound.
///
/// Bounds are immutable for the lifetime of one gesture; only the most
/// recent raw input is recorded, for [`AxisGrid::settle`].
#[derive(Debug, Clone)]
pub struct AxisGrid {
    name: &'static str,
    lower: f64,
    upper: f64,
    center: f64,
    overshoot: f64,
    snap: f64,
    max_transition: f64,
    last: Option<f64>,
}

impl AxisGrid {
    /// Creates a grid for one axis. `lower <= center <= upper` must hold.
    pub fn new(
        name: &'static str,
        lower: f64,
        upper: f64,
        center: f64,
        overshoot: f64,
        snap: f64,
    ) -> Self {
        debug_assert!(
            lower <= center && center <= upper,
            "grid bounds must contain the center"
        );
        debug_assert!(snap > 0.0, "snap step must be positive");
        AxisGrid {
            name,
            lower,
            upper,
            center,
            overshoot: overshoot.max(0.0),
            snap,
            max_transition: DEFAULT_MAX_TRANSITION_SECS,
            last: None,
        }
    }

    /// Overrides the cap on suggested settle transitions.
    pub fn with_max_transition(mut self, secs: f64) -> Self {
        self.max_transition = secs.max(0.0);
        self
    }

    /// Maps a live raw coordinate to its displayed value and records it
    /// as the most recent input for [`AxisGrid::settle`].
    pub fn at(&mut self, raw: f64) -> f64 {
        self.last = Some(raw);
        self.shape(raw)
    }

    /// Snapped target for the most recent raw value, with a suggested
    /// transition duration in seconds.
    ///
    /// The target is the nearest multiple of `snap`; with
    /// `restrict_to_bounds` it never leaves `[lower, upper]` even if
    /// overshoot pushed the live value past a bound. The duration grows
    /// with the remaining travel from the displayed value to the target,
    /// capped at the configured maximum. If [`AxisGrid::at`] was never
    /// called, the result is the original center with a zero duration.
    pub fn settle(&self, restrict_to_bounds: bool) -> (f64, f64) {
        let last = match self.last {
            Some(last) => last,
            None => return (self.center, 0.0),
        };

        let bounded = if restrict_to_bounds {
            last.clamp(self.lower, self.upper)
        } else {
            last
        };
        let mut target = (bounded / self.snap).round() * self.snap;
        if restrict_to_bounds {
            // Rounding may step over a bound by less than one snap step.
            if target > self.upper {
                target -= self.snap;
            }
            if target < self.lower {
                target += self.snap;
            }
            target = target.clamp(self.lower, self.upper);
        }

        let distance = (self.shape(last) - target).abs();
        let duration = self.max_transition * distance / (distance + 1.0);
        trace!(
            "Grid {}: settle {} -> {} over {}s",
            self.name,
            last,
            target,
            duration
        );
        (target, duration)
    }

    fn shape(&self, raw: f64) -> f64 {
        if raw < self.lower {
            self.lower - self.compress(self.lower - raw)
        } else if raw > self.upper {
            self.upper + self.compress(raw - self.upper)
        } else {
            self.magnetize(raw)
        }
    }

    /// Elastic response to an excursion past a bound: slope one at the
    /// bound, marginal slope below one beyond it, saturating at
    /// `overshoot`.
    fn compress(&self, excess: f64) -> f64 {
        if self.overshoot <= f64::EPSILON {
            return 0.0;
        }
        self.overshoot * excess / (excess + self.overshoot)
    }

    /// In-range quantization toward multiples of `snap`. The pull fades
    /// to nothing at the gesture origin, at cell midpoints and at the
    /// bounds, keeping the mapping continuous and monotonic even when
    /// the origin sits off the snap lattice.
    fn magnetize(&self, x: f64) -> f64 {
        let snap_point = (x / self.snap).round() * self.snap;
        let half = self.snap / 2.0;
        if half <= f64::EPSILON {
            return x;
        }
        let d = x - snap_point;
        let magnet = snap_point + d * d.abs() / half;
        x + self.snap_strength(x) * (magnet - x)
    }

    fn snap_strength(&self, x: f64) -> f64 {
        let reach = if x >= self.center {
            self.upper - self.center
        } else {
            self.center - self.lower
        };
        let from_center = if reach <= f64::EPSILON {
            1.0
        } else {
            ((x - self.center).abs() / reach).min(1.0)
        };
        // The bounds need not lie on the snap lattice, so the pull must
        // vanish there to join the elastic branches continuously.
        let to_bound = (self.upper - x).min(x - self.lower);
        from_center * (to_bound / self.snap).clamp(0.0, 1.0)
    }
}
