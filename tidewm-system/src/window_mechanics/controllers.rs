//! Gesture controllers translating 2D deltas into view placement updates.
//!
//! A controller lives for exactly one gesture: it is constructed when the
//! gesture begins, consumes its delta stream, and is closed when the
//! gesture ends, yielding the settled placement the overlay animates
//! toward.

use crate::input::GestureDelta;
use crate::layout::{lock_or_recover, LayoutStateAccess, ViewId, ViewStateUpdate};
use crate::window_mechanics::grid::AxisGrid;
use std::sync::{Arc, Mutex};
use tidewm_core::config::InteractiveConfig;
use tracing::{debug, warn};

/// A window placement in grid units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub i: f64,
    pub j: f64,
    pub w: f64,
    pub h: f64,
}

/// Result of closing a controller: the live placement at gesture end, the
/// snapped target placement, and the suggested transition duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CloseResult {
    pub from: Placement,
    pub to: Placement,
    pub duration_secs: f64,
}

/// Translates one-point move gestures into position updates.
pub struct MoveController<L: LayoutStateAccess> {
    layout: Arc<Mutex<L>>,
    view: ViewId,
    i: f64,
    j: f64,
    i_grid: AxisGrid,
    j_grid: AxisGrid,
    last_dx: f64,
    last_dy: f64,
    sensitivity: f64,
    closed: bool,
}

impl<L: LayoutStateAccess> MoveController<L> {
    /// Seeds the live position from the view's current state and records
    /// it as the move origin hint. A missing view is logged and tolerated;
    /// the controller then tracks from the origin of the grid space.
    pub fn new(layout: Arc<Mutex<L>>, view: ViewId, config: &InteractiveConfig) -> Self {
        let mut i = 0.0;
        let mut j = 0.0;
        {
            let mut guard = lock_or_recover(&layout);
            match guard.view_state(view) {
                Ok(state) => {
                    i = state.i;
                    j = state.j;
                    match guard.replacing_view_state(
                        view,
                        ViewStateUpdate::default().with_move_origin(Some((i, j))),
                    ) {
                        Ok(seeded) => {
                            if let Err(e) = guard.apply_view_state(view, seeded) {
                                warn!("Unexpected: Could not seed move origin on view {view}: {e}");
                            }
                        }
                        Err(e) => {
                            warn!("Unexpected: Could not seed move origin on view {view}: {e}")
                        }
                    }
                }
                Err(e) => warn!("Unexpected: Could not access view {view} state: {e}"),
            }
        }

        let span = config.grid_span;
        MoveController {
            layout,
            view,
            i,
            j,
            i_grid: AxisGrid::new("i", i - span, i + span, i, config.grid_overshoot, config.grid_snap)
                .with_max_transition(config.max_transition_secs),
            j_grid: AxisGrid::new("j", j - span, j + span, j, config.grid_overshoot, config.grid_snap)
                .with_max_transition(config.max_transition_secs),
            last_dx: 0.0,
            last_dy: 0.0,
            sensitivity: config.gesture_sensitivity,
            closed: false,
        }
    }

    /// Consumes one gesture update. The delta carries the accumulated
    /// displacement since the gesture began; only the step since the
    /// previous update moves the window. No-op once closed.
    pub fn on_gesture(&mut self, delta: GestureDelta) {
        if self.closed {
            return;
        }

        self.i += self.sensitivity * (delta.delta_x - self.last_dx);
        self.j += self.sensitivity * (delta.delta_y - self.last_dy);
        self.last_dx = delta.delta_x;
        self.last_dy = delta.delta_y;

        let (vi, vj) = (self.i_grid.at(self.i), self.j_grid.at(self.j));
        let mut layout = lock_or_recover(&self.layout);
        if let Err(e) = layout.update_view_state(self.view, ViewStateUpdate::position(vi, vj)) {
            warn!("Move: Could not update view {} state: {e}", self.view);
        }
        layout.damage();
    }

    /// Ends the gesture and computes the snapped target placement, with
    /// the transition time taken as the maximum over both axes. If the
    /// view state is unreadable the controller falls back to its own
    /// tracked values and a default 1x1 size.
    pub fn close(&mut self) -> CloseResult {
        self.closed = true;

        let layout = lock_or_recover(&self.layout);
        match layout.view_state(self.view) {
            Ok(state) => {
                let (fi, ti) = self.i_grid.settle(true);
                let (fj, tj) = self.j_grid.settle(true);
                debug!("Move - grid finals: {fi} {fj} ({ti} {tj})");

                CloseResult {
                    from: Placement {
                        i: state.i,
                        j: state.j,
                        w: state.w,
                        h: state.h,
                    },
                    to: Placement {
                        i: fi,
                        j: fj,
                        w: state.w,
                        h: state.h,
                    },
                    duration_secs: ti.max(tj),
                }
            }
            Err(e) => {
                warn!(
                    "Unexpected: Could not access view {} state, returning default placement: {e}",
                    self.view
                );
                CloseResult {
                    from: Placement {
                        i: self.i,
                        j: self.j,
                        w: 1.0,
                        h: 1.0,
                    },
                    to: Placement {
                        i: self.i.round(),
                        j: self.j.round(),
                        w: 1.0,
                        h: 1.0,
                    },
                    duration_secs: 1.0,
                }
            }
        }
    }
}

/// Anchored resize on one axis. Shrinking past the minimum reflects the
/// deficit into an anchor shift, so the extent never drops below `min`.
fn anchor_axis(pos: f64, extent: f64, delta: f64, min: f64) -> (f64, f64) {
    if extent + delta < min {
        let deficit = min - (extent + delta);
        (pos - deficit, min + deficit)
    } else {
        (pos, extent + delta)
    }
}

/// Translates two-point pinch/swipe gestures into anchored
/// position-plus-size updates.
pub struct ResizeController<L: LayoutStateAccess> {
    layout: Arc<Mutex<L>>,
    view: ViewId,
    i: f64,
    j: f64,
    w: f64,
    h: f64,
    i_grid: AxisGrid,
    j_grid: AxisGrid,
    w_grid: AxisGrid,
    h_grid: AxisGrid,
    sensitivity: f64,
    min_size: f64,
    closed: bool,
}

impl<L: LayoutStateAccess> ResizeController<L> {
    /// Seeds position and size from the view's current state and records
    /// both the move and scale origin hints.
    pub fn new(layout: Arc<Mutex<L>>, view: ViewId, config: &InteractiveConfig) -> Self {
        let min_size = config.min_view_size;
        let mut i = 0.0;
        let mut j = 0.0;
        let mut w = min_size;
        let mut h = min_size;
        {
            let mut guard = lock_or_recover(&layout);
            match guard.view_state(view) {
                Ok(state) => {
                    i = state.i;
                    j = state.j;
                    w = state.w.max(min_size);
                    h = state.h.max(min_size);
                    match guard.replacing_view_state(
                        view,
                        ViewStateUpdate::default()
                            .with_move_origin(Some((i, j)))
                            .with_scale_origin(Some((w, h))),
                    ) {
                        Ok(seeded) => {
                            if let Err(e) = guard.apply_view_state(view, seeded) {
                                warn!(
                                    "Unexpected: Could not seed resize origins on view {view}: {e}"
                                );
                            }
                        }
                        Err(e) => {
                            warn!("Unexpected: Could not seed resize origins on view {view}: {e}")
                        }
                    }
                }
                Err(e) => warn!("Unexpected: Could not access view {view} state: {e}"),
            }
        }

        let span = config.grid_span;
        let overshoot = config.grid_overshoot;
        let snap = config.grid_snap;
        let max_transition = config.max_transition_secs;
        ResizeController {
            layout,
            view,
            i,
            j,
            w,
            h,
            i_grid: AxisGrid::new("i", i - span, i + span, i, overshoot, snap)
                .with_max_transition(max_transition),
            j_grid: AxisGrid::new("j", j - span, j + span, j, overshoot, snap)
                .with_max_transition(max_transition),
            w_grid: AxisGrid::new("w", min_size, w + span, w, overshoot, snap)
                .with_max_transition(max_transition),
            h_grid: AxisGrid::new("h", min_size, h + span, h, overshoot, snap)
                .with_max_transition(max_transition),
            sensitivity: config.gesture_sensitivity,
            min_size,
            closed: false,
        }
    }

    /// Consumes one gesture update. Unlike a move, the accumulated delta
    /// is applied against the original placement, anchored so the window
    /// never shrinks below the minimum size. No-op once closed.
    pub fn on_gesture(&mut self, delta: GestureDelta) {
        if self.closed {
            return;
        }

        let dw = self.sensitivity * delta.delta_x;
        let dh = self.sensitivity * delta.delta_y;

        let (i, w) = anchor_axis(self.i, self.w, dw, self.min_size);
        let (j, h) = anchor_axis(self.j, self.h, dh, self.min_size);

        let update = ViewStateUpdate::placement(
            self.i_grid.at(i),
            self.j_grid.at(j),
            self.w_grid.at(w),
            self.h_grid.at(h),
        );
        let mut layout = lock_or_recover(&self.layout);
        if let Err(e) = layout.update_view_state(self.view, update) {
            warn!("Resize: Could not update view {} state: {e}", self.view);
        }
        layout.damage();
    }

    /// Ends the gesture; the transition time is the maximum over all four
    /// axes. On an unreadable view the controller's tracked placement is
    /// returned unchanged.
    pub fn close(&mut self) -> CloseResult {
        self.closed = true;

        let layout = lock_or_recover(&self.layout);
        match layout.view_state(self.view) {
            Ok(state) => {
                let (fi, ti) = self.i_grid.settle(true);
                let (fj, tj) = self.j_grid.settle(true);
                let (fw, tw) = self.w_grid.settle(true);
                let (fh, th) = self.h_grid.settle(true);
                debug!("Resize - grid finals: {fi} {fj} {fw} {fh} ({ti} {tj} {tw} {th})");

                CloseResult {
                    from: Placement {
                        i: state.i,
                        j: state.j,
                        w: state.w,
                        h: state.h,
                    },
                    to: Placement {
                        i: fi,
                        j: fj,
                        w: fw,
                        h: fh,
                    },
                    duration_secs: ti.max(tj).max(tw).max(th),
                }
            }
            Err(e) => {
                warn!(
                    "Unexpected: Could not access view {} state, returning default placement: {e}",
                    self.view
                );
                let tracked = Placement {
                    i: self.i,
                    j: self.j,
                    w: self.w,
                    h: self.h,
                };
                CloseResult {
                    from: tracked,
                    to: tracked,
                    duration_secs: 1.0,
                }
            }
        }
    }
}
