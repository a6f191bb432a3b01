//! Input-side types consumed by the interactive layer.
//!
//! Gesture recognition itself lives outside this core; the recognition
//! layer classifies raw touch events and delivers the typed values
//! defined in [`gestures`], plus key press/release notifications.

pub mod gestures;

pub use gestures::{GestureDelta, GestureKind};

/// Key press state as delivered by the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyState {
    Pressed,
    Released,
}
