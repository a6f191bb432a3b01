//! Typed gestures delivered by the recognition layer.

/// Kind of a recognized gesture, as a closed tag set.
///
/// The overlay dispatches exclusively on this tag: a one-point move
/// gesture drives repositioning, a two-point pinch/swipe drives resizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureKind {
    /// Single touch point moving the window.
    MovePoint,
    /// Two-finger pinch or swipe resizing the window.
    PinchSwipe,
}

/// Accumulated 2D displacement of a gesture since it began, in touchpad
/// units. Each update carries the running total, not the step since the
/// previous update.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GestureDelta {
    pub delta_x: f64,
    pub delta_y: f64,
}
