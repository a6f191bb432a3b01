//! Interactive window mechanics: elastic grid snapping, gesture
//! controllers and the move/resize overlay state machine.

pub mod animation;
pub mod controllers;
pub mod grid;
pub mod overlay;

pub use animation::{AnimationState, AnimationTarget};
pub use controllers::{CloseResult, MoveController, Placement, ResizeController};
pub use grid::AxisGrid;
pub use overlay::{drive, MoveResizeOverlay, OverlayPhase, TickStatus};
