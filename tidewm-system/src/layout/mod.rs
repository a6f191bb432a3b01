//! Shared layout and view state model.
//!
//! The layout store is owned by the surrounding window-manager subsystem;
//! the interactive layer only holds transient read/write requests against
//! it, expressed through [`LayoutStateAccess`]. [`store::MemoryLayout`] is
//! the in-memory reference implementation.

pub mod store;

pub use store::MemoryLayout;

use crate::error::LayoutError;
use std::fmt;
use std::sync::{Mutex, MutexGuard};
use uuid::Uuid;

/// Identifier of a window (view) within the layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ViewId(Uuid);

impl ViewId {
    pub fn new() -> Self {
        ViewId(Uuid::new_v4())
    }
}

impl Default for ViewId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A window's position and size in grid units, possibly fractional while
/// a gesture or settle animation is in flight.
///
/// The origin hints record the placement at the start of an interactive
/// move/resize; they are consumed by rendering feedback outside this core
/// and cleared when the overlay exits.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewState {
    pub i: f64,
    pub j: f64,
    pub w: f64,
    pub h: f64,
    pub move_origin: Option<(f64, f64)>,
    pub scale_origin: Option<(f64, f64)>,
}

impl ViewState {
    pub fn new(i: f64, j: f64, w: f64, h: f64) -> Self {
        ViewState {
            i,
            j,
            w,
            h,
            move_origin: None,
            scale_origin: None,
        }
    }
}

/// Partial update of a [`ViewState`]; `None` leaves a field unchanged.
///
/// The origin hints are doubly optional so that clearing a hint
/// (`Some(None)`) is distinct from leaving it alone (`None`).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewStateUpdate {
    pub i: Option<f64>,
    pub j: Option<f64>,
    pub w: Option<f64>,
    pub h: Option<f64>,
    pub move_origin: Option<Option<(f64, f64)>>,
    pub scale_origin: Option<Option<(f64, f64)>>,
}

impl ViewStateUpdate {
    pub fn position(i: f64, j: f64) -> Self {
        ViewStateUpdate {
            i: Some(i),
            j: Some(j),
            ..Default::default()
        }
    }

    pub fn size(w: f64, h: f64) -> Self {
        ViewStateUpdate {
            w: Some(w),
            h: Some(h),
            ..Default::default()
        }
    }

    pub fn placement(i: f64, j: f64, w: f64, h: f64) -> Self {
        ViewStateUpdate {
            i: Some(i),
            j: Some(j),
            w: Some(w),
            h: Some(h),
            ..Default::default()
        }
    }

    pub fn with_move_origin(mut self, origin: Option<(f64, f64)>) -> Self {
        self.move_origin = Some(origin);
        self
    }

    pub fn with_scale_origin(mut self, origin: Option<(f64, f64)>) -> Self {
        self.scale_origin = Some(origin);
        self
    }

    /// Applies the update to a state, field by field.
    pub fn apply_to(&self, state: &mut ViewState) {
        if let Some(i) = self.i {
            state.i = i;
        }
        if let Some(j) = self.j {
            state.j = j;
        }
        if let Some(w) = self.w {
            state.w = w;
        }
        if let Some(h) = self.h {
            state.h = h;
        }
        if let Some(origin) = self.move_origin {
            state.move_origin = origin;
        }
        if let Some(origin) = self.scale_origin {
            state.scale_origin = origin;
        }
    }
}

/// The window manager's scroll position over the tiled space and the span
/// of grid units simultaneously visible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportState {
    pub i: f64,
    pub j: f64,
    pub size: f64,
}

/// Accessors the interactive layer consumes from the surrounding layout
/// subsystem.
///
/// A view's position/size fields are always updated as a group through a
/// single call; callers serialize access by wrapping the store in a mutex
/// (see [`lock_or_recover`]).
pub trait LayoutStateAccess: Send {
    /// Reads a view's current state. Fails with
    /// [`LayoutError::ViewNotFound`] if the view was destroyed mid-gesture;
    /// callers treat this as recoverable.
    fn view_state(&self, view: ViewId) -> Result<ViewState, LayoutError>;

    /// Applies a partial update to a view's state.
    fn update_view_state(&mut self, view: ViewId, update: ViewStateUpdate)
        -> Result<(), LayoutError>;

    /// Pure construction of an updated state without applying it.
    fn replacing_view_state(
        &self,
        view: ViewId,
        update: ViewStateUpdate,
    ) -> Result<ViewState, LayoutError> {
        let mut state = self.view_state(view)?;
        update.apply_to(&mut state);
        Ok(state)
    }

    /// Replaces a view's state wholesale.
    fn apply_view_state(&mut self, view: ViewId, state: ViewState) -> Result<(), LayoutError>;

    fn viewport(&self) -> ViewportState;

    fn set_viewport_pos(&mut self, i: f64, j: f64);

    /// Requests a redraw. Side effect only.
    fn damage(&mut self);

    /// Hands control back to the surrounding system once the overlay is done.
    fn exit_overlay(&mut self);

    fn update_cursor(&mut self, visible: bool);

    /// Currently held modifier bitmask.
    fn modifiers(&self) -> u32;

    /// Bitmask of the modifier that invoked the overlay.
    fn mod_mask(&self) -> u32;

    /// Keysym whose release auto-closes the overlay.
    fn mod_keysym(&self) -> u32;
}

/// Locks a shared store, recovering from poisoning.
///
/// A panicked writer must not stall the input or animation contexts; the
/// partially updated state is still a valid `ViewState` group.
pub(crate) fn lock_or_recover<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    match mutex.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}
