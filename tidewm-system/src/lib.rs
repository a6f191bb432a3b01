//! Interactive direct-manipulation layer of the tidewm window manager.
//!
//! Converts continuous touch/trackpad gesture streams into live
//! repositioning and resizing of a window within the discrete tiling
//! grid, then animates the window and the viewport to a settled, snapped
//! state once the gesture ends.
//!
//! - [`layout`] models the externally owned view/viewport state and the
//!   [`layout::LayoutStateAccess`] boundary to the surrounding subsystem.
//! - [`input`] carries the typed gesture and key values delivered by the
//!   recognition layer.
//! - [`window_mechanics`] holds the interactive core: the per-axis
//!   elastic [`window_mechanics::AxisGrid`], the move/resize controllers,
//!   and the [`window_mechanics::MoveResizeOverlay`] state machine with
//!   its 120 Hz animation loop.
//!
//! Gesture recognition, compositing, hit-testing and IPC live outside
//! this crate.

pub mod error;
pub mod input;
pub mod layout;
pub mod window_mechanics;

pub use error::LayoutError;
