//! Animation targets for the overlay's settle transitions.

use std::time::{Duration, Instant};

/// State of an animation target after sampling.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum AnimationState {
    Running,
    Completed,
}

/// Linear interpolation of a two-component value between two instants.
///
/// Sampling at the start instant yields exactly the start value; sampling
/// at or past the end instant yields exactly the end value, with no
/// floating residue.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationTarget {
    start: (f64, f64),
    end: (f64, f64),
    start_time: Instant,
    end_time: Instant,
}

impl AnimationTarget {
    pub fn new(start: (f64, f64), end: (f64, f64), now: Instant, duration: Duration) -> Self {
        AnimationTarget {
            start,
            end,
            start_time: now,
            end_time: now + duration,
        }
    }

    pub fn end_value(&self) -> (f64, f64) {
        self.end
    }

    /// Samples the interpolated value at `now`.
    pub fn sample(&self, now: Instant) -> ((f64, f64), AnimationState) {
        if now >= self.end_time {
            return (self.end, AnimationState::Completed);
        }
        let total = self.end_time.duration_since(self.start_time).as_secs_f64();
        if total <= f64::EPSILON {
            return (self.end, AnimationState::Completed);
        }
        let perc = (now.saturating_duration_since(self.start_time).as_secs_f64() / total).min(1.0);
        let value = (
            self.start.0 + perc * (self.end.0 - self.start.0),
            self.start.1 + perc * (self.end.1 - self.start.1),
        );
        (value, AnimationState::Running)
    }
}

/// The overlay's three independent animation slots. Each animates on its
/// own timeline; they may overlap freely.
#[derive(Debug, Default)]
pub struct AnimationSlots {
    pub view_pos: Option<AnimationTarget>,
    pub view_size: Option<AnimationTarget>,
    pub viewport_pos: Option<AnimationTarget>,
}

impl AnimationSlots {
    pub fn in_progress(&self) -> bool {
        self.view_pos.is_some() || self.view_size.is_some() || self.viewport_pos.is_some()
    }

    pub fn view_anim_in_progress(&self) -> bool {
        self.view_pos.is_some() || self.view_size.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_at_start_equals_start() {
        let now = Instant::now();
        let target = AnimationTarget::new((1.0, 2.0), (5.0, 6.0), now, Duration::from_millis(100));
        let (value, state) = target.sample(now);
        assert_eq!(value, (1.0, 2.0));
        assert_eq!(state, AnimationState::Running);
    }

    #[test]
    fn interpolates_halfway() {
        let now = Instant::now();
        let target = AnimationTarget::new((0.0, 0.0), (4.0, 8.0), now, Duration::from_millis(100));
        let (value, state) = target.sample(now + Duration::from_millis(50));
        assert!((value.0 - 2.0).abs() < 1e-9);
        assert!((value.1 - 4.0).abs() < 1e-9);
        assert_eq!(state, AnimationState::Running);
    }

    #[test]
    fn snaps_exactly_to_end() {
        let now = Instant::now();
        let target = AnimationTarget::new((0.0, 0.0), (0.1, 0.3), now, Duration::from_millis(100));

        let (value, state) = target.sample(now + Duration::from_millis(100));
        assert_eq!(value, (0.1, 0.3));
        assert_eq!(state, AnimationState::Completed);

        // Still exact well past the end.
        let (value, state) = target.sample(now + Duration::from_secs(5));
        assert_eq!(value, (0.1, 0.3));
        assert_eq!(state, AnimationState::Completed);
    }

    #[test]
    fn zero_duration_completes_immediately() {
        let now = Instant::now();
        let target = AnimationTarget::new((1.0, 1.0), (2.0, 2.0), now, Duration::ZERO);
        let (value, state) = target.sample(now);
        assert_eq!(value, (2.0, 2.0));
        assert_eq!(state, AnimationState::Completed);
    }

    #[test]
    fn slots_report_progress_independently() {
        let now = Instant::now();
        let mut slots = AnimationSlots::default();
        assert!(!slots.in_progress());

        slots.viewport_pos = Some(AnimationTarget::new(
            (0.0, 0.0),
            (1.0, 0.0),
            now,
            Duration::from_millis(300),
        ));
        assert!(slots.in_progress());
        assert!(!slots.view_anim_in_progress());

        slots.view_size = Some(AnimationTarget::new(
            (1.0, 1.0),
            (2.0, 2.0),
            now,
            Duration::from_millis(100),
        ));
        assert!(slots.view_anim_in_progress());
    }
}
