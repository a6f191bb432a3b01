//! The move/resize overlay state machine and its animation loop.
//!
//! One overlay instance spans one interactive session: it owns the
//! gesture-controller lifecycle, arbitrates between move and resize
//! modes, and drives the fixed-rate tick that interpolates the window
//! toward its settled placement and scrolls the viewport after it.

use crate::input::{GestureDelta, GestureKind, KeyState};
use crate::layout::{lock_or_recover, LayoutStateAccess, ViewId, ViewState, ViewStateUpdate};
use crate::window_mechanics::animation::{AnimationSlots, AnimationState, AnimationTarget};
use crate::window_mechanics::controllers::{CloseResult, MoveController, ResizeController};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use tidewm_core::config::InteractiveConfig;
use tracing::{debug, warn};

/// Lifecycle phase of the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayPhase {
    /// No controller and no animation; the loop idles and watches the
    /// viewport.
    Idle,
    /// A controller is consuming live gesture deltas.
    Gesturing,
    /// The controller is closed; animation targets are interpolating.
    Settling,
    /// Terminal: the loop has stopped and overlay exit was requested.
    Closed,
}

/// Outcome of one animation tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickStatus {
    Running,
    Finished,
}

enum ActiveController<L: LayoutStateAccess> {
    Move(MoveController<L>),
    Resize(ResizeController<L>),
}

impl<L: LayoutStateAccess> ActiveController<L> {
    fn on_gesture(&mut self, delta: GestureDelta) {
        match self {
            ActiveController::Move(controller) => controller.on_gesture(delta),
            ActiveController::Resize(controller) => controller.on_gesture(delta),
        }
    }

    fn close(&mut self) -> CloseResult {
        match self {
            ActiveController::Move(controller) => controller.close(),
            ActiveController::Resize(controller) => controller.close(),
        }
    }
}

/// Top-level controller for one interactive move/resize session.
///
/// Gesture callbacks and [`MoveResizeOverlay::tick`] may run on different
/// contexts; the host serializes them by wrapping the overlay in a mutex
/// (see [`drive`]).
pub struct MoveResizeOverlay<L: LayoutStateAccess> {
    layout: Arc<Mutex<L>>,
    view: ViewId,
    config: InteractiveConfig,
    controller: Option<ActiveController<L>>,
    slots: AnimationSlots,
    running: bool,
    wants_close: bool,
}

impl<L: LayoutStateAccess> MoveResizeOverlay<L> {
    pub fn new(layout: Arc<Mutex<L>>, view: ViewId, config: InteractiveConfig) -> Self {
        lock_or_recover(&layout).update_cursor(false);
        MoveResizeOverlay {
            layout,
            view,
            config,
            controller: None,
            slots: AnimationSlots::default(),
            running: true,
            wants_close: false,
        }
    }

    pub fn phase(&self) -> OverlayPhase {
        if !self.running {
            OverlayPhase::Closed
        } else if self.controller.is_some() {
            OverlayPhase::Gesturing
        } else if self.slots.in_progress() {
            OverlayPhase::Settling
        } else {
            OverlayPhase::Idle
        }
    }

    /// Starts a controller for a recognized gesture. Dispatch is
    /// exclusive: a gesture arriving while another is active replaces the
    /// running controller. Returns whether the gesture was consumed.
    pub fn on_gesture_begin(&mut self, kind: GestureKind) -> bool {
        if !self.running || self.wants_close {
            debug!("MoveResizeOverlay: Rejecting gesture");
            return false;
        }

        if self.controller.take().is_some() {
            // The preempted controller left its origin hints behind;
            // clear them before the new controller seeds its own.
            let mut layout = lock_or_recover(&self.layout);
            if let Err(e) = layout.update_view_state(
                self.view,
                ViewStateUpdate::default()
                    .with_move_origin(None)
                    .with_scale_origin(None),
            ) {
                warn!(
                    "MoveResizeOverlay: Could not clear origin hints on view {}: {e}",
                    self.view
                );
            }
        }

        match kind {
            GestureKind::PinchSwipe => {
                debug!("MoveResizeOverlay: New pinch/swipe gesture");
                self.slots.view_pos = None;
                self.slots.view_size = None;
                self.controller = Some(ActiveController::Resize(ResizeController::new(
                    Arc::clone(&self.layout),
                    self.view,
                    &self.config,
                )));
            }
            GestureKind::MovePoint => {
                debug!("MoveResizeOverlay: New single-point move gesture");
                self.slots.view_pos = None;
                self.controller = Some(ActiveController::Move(MoveController::new(
                    Arc::clone(&self.layout),
                    self.view,
                    &self.config,
                )));
            }
        }
        true
    }

    /// Forwards a live delta to the active controller. A delta outside
    /// the gesturing phase is a no-op, not an error.
    pub fn on_gesture_update(&mut self, delta: GestureDelta) {
        if let Some(controller) = &mut self.controller {
            controller.on_gesture(delta);
        }
    }

    /// Ends the active gesture: closes the controller, queues settle
    /// animations, and requests close if the invoking modifier was
    /// already released. Without an active controller this is a no-op.
    pub fn on_gesture_end(&mut self) {
        let Some(mut controller) = self.controller.take() else {
            return;
        };
        debug!("MoveResizeOverlay: Finishing gesture");
        let result = controller.close();
        self.queue_settle(result, Instant::now());

        let (modifiers, mod_mask) = {
            let layout = lock_or_recover(&self.layout);
            (layout.modifiers(), layout.mod_mask())
        };
        if modifiers & mod_mask == 0 {
            debug!("MoveResizeOverlay: Requesting close after gesture finish");
            self.close();
        }
    }

    /// A release of the overlay's invoking modifier, while no gesture is
    /// active, requests close.
    pub fn on_key(&mut self, state: KeyState, keysym: u32) {
        if state == KeyState::Released && self.controller.is_none() {
            let mod_keysym = lock_or_recover(&self.layout).mod_keysym();
            if keysym == mod_keysym {
                debug!("MoveResizeOverlay: Requesting close after mod release");
                self.close();
            }
        }
    }

    /// Pointer motion is not consumed by this overlay.
    pub fn on_motion(&mut self, _time_msec: u32, _delta_x: f64, _delta_y: f64) -> bool {
        false
    }

    /// Axis events are not consumed by this overlay.
    pub fn on_axis(&mut self, _time_msec: u32, _delta: f64) -> bool {
        false
    }

    /// Modifier changes are not consumed by this overlay.
    pub fn on_modifiers(&mut self, _modifiers: u32) -> bool {
        false
    }

    /// Requests close. An active controller is closed first, producing
    /// its settle animations; the loop finishes once nothing is animating.
    pub fn close(&mut self) {
        if let Some(mut controller) = self.controller.take() {
            let result = controller.close();
            self.queue_settle(result, Instant::now());
        }
        self.wants_close = true;
    }

    /// Stops the animation loop unconditionally; safe to call at any
    /// time. The next tick reports `Finished`.
    pub fn pre_destroy(&mut self) {
        self.running = false;
    }

    fn queue_settle(&mut self, result: CloseResult, now: Instant) {
        let duration = Duration::from_secs_f64(result.duration_secs.max(0.0));
        if result.from.i != result.to.i || result.from.j != result.to.j {
            self.slots.view_pos = Some(AnimationTarget::new(
                (result.from.i, result.from.j),
                (result.to.i, result.to.j),
                now,
                duration,
            ));
        }
        if result.from.w != result.to.w || result.from.h != result.to.h {
            self.slots.view_size = Some(AnimationTarget::new(
                (result.from.w, result.from.h),
                (result.to.w, result.to.h),
                now,
                duration,
            ));
        }
    }

    /// Advances all animation slots by one step and evaluates the
    /// close/exit protocol. Intended to run at the configured tick rate;
    /// see [`drive`].
    pub fn tick(&mut self, now: Instant) -> TickStatus {
        if !self.running {
            return TickStatus::Finished;
        }

        let mut in_progress = false;

        if let Some(target) = self.slots.view_pos {
            in_progress = true;
            let ((i, j), state) = target.sample(now);
            let mut layout = lock_or_recover(&self.layout);
            if let Err(e) = layout.update_view_state(self.view, ViewStateUpdate::position(i, j)) {
                warn!(
                    "MoveResizeOverlay: Could not update view {} position: {e}",
                    self.view
                );
            }
            layout.damage();
            if state == AnimationState::Completed {
                self.slots.view_pos = None;
            }
        }

        if let Some(target) = self.slots.view_size {
            in_progress = true;
            let ((w, h), state) = target.sample(now);
            let update = if state == AnimationState::Completed {
                ViewStateUpdate::size(w, h).with_scale_origin(None)
            } else {
                ViewStateUpdate::size(w, h)
            };
            let mut layout = lock_or_recover(&self.layout);
            if let Err(e) = layout.update_view_state(self.view, update) {
                warn!(
                    "MoveResizeOverlay: Could not update view {} size: {e}",
                    self.view
                );
            }
            layout.damage();
            if state == AnimationState::Completed {
                self.slots.view_size = None;
            }
        }

        if let Some(target) = self.slots.viewport_pos {
            in_progress = true;
            let ((i, j), state) = target.sample(now);
            let mut layout = lock_or_recover(&self.layout);
            layout.set_viewport_pos(i, j);
            layout.damage();
            if state == AnimationState::Completed {
                self.slots.viewport_pos = None;
            }
        } else if self.controller.is_none()
            && !self.slots.view_anim_in_progress()
            && !self.wants_close
        {
            self.follow_viewport(now);
        }

        if !in_progress && self.wants_close {
            self.running = false;
            self.finish_exit();
            return TickStatus::Finished;
        }
        TickStatus::Running
    }

    /// Scrolls the viewport just far enough to contain the window, never
    /// cutting off the opposite edge unnecessarily. Skipped while a view
    /// animation is in flight to avoid feedback loops.
    fn follow_viewport(&mut self, now: Instant) {
        let (viewport, i, j, w, h) = {
            let layout = lock_or_recover(&self.layout);
            let state = match layout.view_state(self.view) {
                Ok(state) => state,
                Err(e) => {
                    warn!(
                        "MoveResizeOverlay: Could not access view {} state: {e}",
                        self.view
                    );
                    return;
                }
            };
            (
                layout.viewport(),
                state.i.round(),
                state.j.round(),
                state.w.round(),
                state.h.round(),
            )
        };

        let mut fi = viewport.i;
        let mut fj = viewport.j;
        if i + w > fi + viewport.size {
            fi = i + w - viewport.size;
        }
        if j + h > fj + viewport.size {
            fj = j + h - viewport.size;
        }
        if i < fi {
            fi = i;
        }
        if j < fj {
            fj = j;
        }

        if fi != viewport.i || fj != viewport.j {
            debug!("MoveResizeOverlay: Adjusting viewport");
            self.slots.viewport_pos = Some(AnimationTarget::new(
                (viewport.i, viewport.j),
                (fi, fj),
                now,
                Duration::from_secs_f64(self.config.viewport_follow_secs),
            ));
        }
    }

    /// Final cleanup once the loop stops: applies the exit transition and
    /// hands control back to the surrounding system.
    fn finish_exit(&mut self) {
        let (settled, duration) = self.exit_transition();
        let mut layout = lock_or_recover(&self.layout);
        if let Some(state) = settled {
            if let Err(e) = layout.apply_view_state(self.view, state) {
                warn!(
                    "MoveResizeOverlay: Could not apply exit placement on view {}: {e}",
                    self.view
                );
            }
            layout.damage();
        }
        layout.update_cursor(true);
        layout.exit_overlay();
        debug!("MoveResizeOverlay: Exited (settle over {duration}s)");
    }

    /// Computes the exit placement: any in-flight fractional position and
    /// size snapped to whole grid units, origin hints cleared, plus a
    /// short suggested duration for the remaining visual settle. Returns
    /// no placement if the view state cannot be read; that failure is
    /// logged, never raised.
    pub fn exit_transition(&self) -> (Option<ViewState>, f64) {
        let layout = lock_or_recover(&self.layout);
        let state = match layout.view_state(self.view) {
            Ok(state) => state,
            Err(e) => {
                warn!(
                    "Unexpected: Error accessing view {} state: {e}",
                    self.view
                );
                return (None, 0.0);
            }
        };

        let update = ViewStateUpdate::placement(
            state.i.round(),
            state.j.round(),
            state.w.round(),
            state.h.round(),
        )
        .with_move_origin(None)
        .with_scale_origin(None);
        match layout.replacing_view_state(self.view, update) {
            Ok(settled) => {
                debug!(
                    "MoveResizeOverlay: Exiting with settle {:?} -> {:?}",
                    (state.i, state.j, state.w, state.h),
                    (settled.i, settled.j, settled.w, settled.h)
                );
                (Some(settled), self.config.exit_transition_secs)
            }
            Err(e) => {
                warn!(
                    "Unexpected: Error accessing view {} state: {e}",
                    self.view
                );
                (None, 0.0)
            }
        }
    }
}

/// Drives an overlay's animation loop at the configured tick rate until
/// the overlay reports it has finished. Missed ticks are skipped rather
/// than bursted.
pub async fn drive<L: LayoutStateAccess>(overlay: Arc<Mutex<MoveResizeOverlay<L>>>) {
    let period = lock_or_recover(&overlay).config.tick_period();
    let mut interval = tokio::time::interval(period);
    interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    loop {
        interval.tick().await;
        let status = lock_or_recover(&overlay).tick(Instant::now());
        if status == TickStatus::Finished {
            debug!("MoveResizeOverlay: Tick loop finished");
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{MemoryLayout, ViewState, ViewportState};

    const MOD_MASK: u32 = 0x40;
    const MOD_KEYSYM: u32 = 0xffe9;

    fn setup(view_state: ViewState) -> (Arc<Mutex<MemoryLayout>>, ViewId) {
        setup_with_viewport(
            view_state,
            ViewportState {
                i: 0.0,
                j: 0.0,
                size: 10.0,
            },
        )
    }

    fn setup_with_viewport(
        view_state: ViewState,
        viewport: ViewportState,
    ) -> (Arc<Mutex<MemoryLayout>>, ViewId) {
        let mut layout = MemoryLayout::new(viewport);
        // Modifier held, so finishing a gesture does not auto-close.
        layout.set_modifier_state(MOD_MASK, MOD_MASK, MOD_KEYSYM);
        let view = layout.insert_view(view_state);
        (Arc::new(Mutex::new(layout)), view)
    }

    fn overlay(
        layout: &Arc<Mutex<MemoryLayout>>,
        view: ViewId,
    ) -> MoveResizeOverlay<MemoryLayout> {
        MoveResizeOverlay::new(Arc::clone(layout), view, InteractiveConfig::default())
    }

    #[test]
    fn hides_cursor_on_entry() {
        let (layout, view) = setup(ViewState::new(5.0, 5.0, 2.0, 2.0));
        let _overlay = overlay(&layout, view);
        assert!(!layout.lock().unwrap().cursor_visible());
    }

    #[test]
    fn dispatches_controllers_by_gesture_kind() {
        let (layout, view) = setup(ViewState::new(5.0, 5.0, 2.0, 2.0));
        let mut ov = overlay(&layout, view);
        assert_eq!(ov.phase(), OverlayPhase::Idle);

        assert!(ov.on_gesture_begin(GestureKind::MovePoint));
        assert_eq!(ov.phase(), OverlayPhase::Gesturing);
        assert!(matches!(ov.controller, Some(ActiveController::Move(_))));

        ov.on_gesture_end();
        assert!(ov.controller.is_none());
    }

    #[test]
    fn resize_gesture_preempts_pending_move_settle() {
        let (layout, view) = setup(ViewState::new(5.0, 5.0, 2.0, 2.0));
        let mut ov = overlay(&layout, view);

        ov.on_gesture_begin(GestureKind::MovePoint);
        ov.on_gesture_update(GestureDelta {
            delta_x: 1.0,
            delta_y: 0.0,
        });
        ov.on_gesture_end();
        assert!(ov.slots.view_pos.is_some());
        assert_eq!(ov.phase(), OverlayPhase::Settling);

        // A pinch arriving mid-settle discards the pending position
        // target and takes over exclusively.
        assert!(ov.on_gesture_begin(GestureKind::PinchSwipe));
        assert!(ov.slots.view_pos.is_none());
        assert!(ov.slots.view_size.is_none());
        assert!(matches!(ov.controller, Some(ActiveController::Resize(_))));
    }

    #[test]
    fn move_gesture_keeps_pending_size_settle() {
        let (layout, view) = setup(ViewState::new(5.0, 5.0, 2.0, 2.0));
        let mut ov = overlay(&layout, view);

        ov.on_gesture_begin(GestureKind::PinchSwipe);
        ov.on_gesture_update(GestureDelta {
            delta_x: 0.3,
            delta_y: 0.0,
        });
        ov.on_gesture_end();
        assert!(ov.slots.view_size.is_some());

        ov.on_gesture_begin(GestureKind::MovePoint);
        assert!(ov.slots.view_pos.is_none());
        assert!(ov.slots.view_size.is_some());
    }

    #[test]
    fn preempted_controller_hints_are_cleared_before_reseeding() {
        let (layout, view) = setup(ViewState::new(5.0, 5.0, 2.0, 2.0));
        let mut ov = overlay(&layout, view);

        ov.on_gesture_begin(GestureKind::PinchSwipe);
        assert!(layout
            .lock()
            .unwrap()
            .view_state(view)
            .unwrap()
            .scale_origin
            .is_some());

        // Switching to a move clears the stale scale origin.
        ov.on_gesture_begin(GestureKind::MovePoint);
        let state = layout.lock().unwrap().view_state(view).unwrap();
        assert_eq!(state.scale_origin, None);
        assert_eq!(state.move_origin, Some((5.0, 5.0)));
    }

    #[test]
    fn updates_outside_gesturing_are_noops() {
        let (layout, view) = setup(ViewState::new(5.0, 5.0, 2.0, 2.0));
        let mut ov = overlay(&layout, view);

        ov.on_gesture_update(GestureDelta {
            delta_x: 3.0,
            delta_y: 3.0,
        });
        ov.on_gesture_end();
        assert_eq!(layout.lock().unwrap().view_state(view).unwrap().i, 5.0);
    }

    #[test]
    fn tick_interpolates_and_snaps_view_position() {
        let (layout, view) = setup(ViewState::new(0.0, 0.0, 2.0, 2.0));
        let mut ov = overlay(&layout, view);
        let now = Instant::now();
        ov.slots.view_pos = Some(AnimationTarget::new(
            (0.0, 0.0),
            (2.0, 2.0),
            now,
            Duration::from_millis(500),
        ));

        assert_eq!(ov.tick(now), TickStatus::Running);
        let state = layout.lock().unwrap().view_state(view).unwrap();
        assert_eq!((state.i, state.j), (0.0, 0.0));

        ov.tick(now + Duration::from_millis(250));
        let state = layout.lock().unwrap().view_state(view).unwrap();
        assert!((state.i - 1.0).abs() < 1e-9);

        ov.tick(now + Duration::from_millis(600));
        let state = layout.lock().unwrap().view_state(view).unwrap();
        assert_eq!((state.i, state.j), (2.0, 2.0));
        assert!(ov.slots.view_pos.is_none());
        assert!(layout.lock().unwrap().damage_count() > 0);
    }

    #[test]
    fn size_settle_clears_scale_origin_on_completion() {
        let (layout, view) = setup(ViewState::new(0.0, 0.0, 2.0, 2.0));
        layout
            .lock()
            .unwrap()
            .update_view_state(
                view,
                ViewStateUpdate::default().with_scale_origin(Some((2.0, 2.0))),
            )
            .unwrap();
        let mut ov = overlay(&layout, view);
        let now = Instant::now();
        ov.slots.view_size = Some(AnimationTarget::new(
            (2.0, 2.0),
            (3.0, 3.0),
            now,
            Duration::from_millis(100),
        ));

        ov.tick(now + Duration::from_millis(50));
        assert!(layout
            .lock()
            .unwrap()
            .view_state(view)
            .unwrap()
            .scale_origin
            .is_some());

        ov.tick(now + Duration::from_millis(150));
        let state = layout.lock().unwrap().view_state(view).unwrap();
        assert_eq!((state.w, state.h), (3.0, 3.0));
        assert_eq!(state.scale_origin, None);
    }

    #[test]
    fn viewport_follows_with_minimal_shift() {
        let (layout, view) = setup_with_viewport(
            ViewState::new(3.0, 0.0, 4.0, 1.0),
            ViewportState {
                i: 0.0,
                j: 0.0,
                size: 4.0,
            },
        );
        let mut ov = overlay(&layout, view);
        let now = Instant::now();

        assert_eq!(ov.tick(now), TickStatus::Running);
        let target = ov.slots.viewport_pos.expect("viewport follow expected");
        // Window spans 3..7, viewport shows 0..4: shift to exactly 3.
        assert_eq!(target.end_value(), (3.0, 0.0));

        ov.tick(now + Duration::from_millis(400));
        let viewport = layout.lock().unwrap().viewport();
        assert_eq!((viewport.i, viewport.j), (3.0, 0.0));
    }

    #[test]
    fn viewport_follow_skipped_while_view_animates() {
        let (layout, view) = setup_with_viewport(
            ViewState::new(3.0, 0.0, 4.0, 1.0),
            ViewportState {
                i: 0.0,
                j: 0.0,
                size: 4.0,
            },
        );
        let mut ov = overlay(&layout, view);
        let now = Instant::now();
        ov.slots.view_pos = Some(AnimationTarget::new(
            (3.0, 0.0),
            (4.0, 0.0),
            now,
            Duration::from_millis(500),
        ));

        ov.tick(now);
        assert!(ov.slots.viewport_pos.is_none());
    }

    #[test]
    fn viewport_already_containing_window_stays_put() {
        let (layout, view) = setup(ViewState::new(2.0, 2.0, 2.0, 2.0));
        let mut ov = overlay(&layout, view);

        ov.tick(Instant::now());
        assert!(ov.slots.viewport_pos.is_none());
    }

    #[test]
    fn close_protocol_settles_rounds_and_exits() {
        let (layout, view) = setup(ViewState::new(5.4, 4.6, 2.2, 1.8));
        let mut ov = overlay(&layout, view);
        layout
            .lock()
            .unwrap()
            .update_view_state(
                view,
                ViewStateUpdate::default().with_move_origin(Some((5.0, 5.0))),
            )
            .unwrap();

        ov.close();
        assert_eq!(ov.tick(Instant::now()), TickStatus::Finished);
        assert_eq!(ov.phase(), OverlayPhase::Closed);

        let guard = layout.lock().unwrap();
        let state = guard.view_state(view).unwrap();
        assert_eq!((state.i, state.j, state.w, state.h), (5.0, 5.0, 2.0, 2.0));
        assert_eq!(state.move_origin, None);
        assert_eq!(state.scale_origin, None);
        assert!(guard.overlay_exited());
        assert!(guard.cursor_visible());
    }

    #[test]
    fn close_waits_for_running_animations() {
        let (layout, view) = setup(ViewState::new(0.0, 0.0, 2.0, 2.0));
        let mut ov = overlay(&layout, view);
        let now = Instant::now();
        ov.slots.view_pos = Some(AnimationTarget::new(
            (0.0, 0.0),
            (1.0, 0.0),
            now,
            Duration::from_millis(200),
        ));

        ov.close();
        assert_eq!(ov.tick(now + Duration::from_millis(100)), TickStatus::Running);
        assert!(!layout.lock().unwrap().overlay_exited());

        // The position target completes on this tick; close lands on the
        // next one.
        assert_eq!(ov.tick(now + Duration::from_millis(250)), TickStatus::Running);
        assert_eq!(ov.tick(now + Duration::from_millis(260)), TickStatus::Finished);
        assert!(layout.lock().unwrap().overlay_exited());
    }

    #[test]
    fn mod_release_closes_only_without_controller() {
        let (layout, view) = setup(ViewState::new(5.0, 5.0, 2.0, 2.0));
        let mut ov = overlay(&layout, view);

        ov.on_gesture_begin(GestureKind::MovePoint);
        ov.on_key(KeyState::Released, MOD_KEYSYM);
        assert!(!ov.wants_close);

        ov.on_gesture_end();
        ov.on_key(KeyState::Released, MOD_KEYSYM);
        assert!(ov.wants_close);
    }

    #[test]
    fn unrelated_keys_and_motion_pass_through() {
        let (layout, view) = setup(ViewState::new(5.0, 5.0, 2.0, 2.0));
        let mut ov = overlay(&layout, view);

        ov.on_key(KeyState::Released, 0x20);
        assert!(!ov.wants_close);
        assert!(!ov.on_motion(0, 1.0, 1.0));
        assert!(!ov.on_axis(0, 1.0));
        assert!(!ov.on_modifiers(0));
    }

    #[test]
    fn stray_gesture_end_does_not_request_close() {
        let (layout, view) = setup(ViewState::new(5.0, 5.0, 2.0, 2.0));
        // Modifier already released; only a real gesture finish may
        // trigger the auto-close.
        layout
            .lock()
            .unwrap()
            .set_modifier_state(0, MOD_MASK, MOD_KEYSYM);
        let mut ov = overlay(&layout, view);

        ov.on_gesture_end();
        assert!(!ov.wants_close);
        assert_eq!(ov.phase(), OverlayPhase::Idle);
    }

    #[test]
    fn gesture_end_auto_closes_when_modifier_released() {
        let (layout, view) = setup(ViewState::new(5.0, 5.0, 2.0, 2.0));
        layout
            .lock()
            .unwrap()
            .set_modifier_state(0, MOD_MASK, MOD_KEYSYM);
        let mut ov = overlay(&layout, view);

        ov.on_gesture_begin(GestureKind::MovePoint);
        ov.on_gesture_end();
        assert!(ov.wants_close);
        // And no further gestures are accepted.
        assert!(!ov.on_gesture_begin(GestureKind::MovePoint));
    }

    #[test]
    fn pre_destroy_stops_loop_within_one_tick() {
        let (layout, view) = setup(ViewState::new(5.0, 5.0, 2.0, 2.0));
        let mut ov = overlay(&layout, view);
        ov.slots.view_pos = Some(AnimationTarget::new(
            (0.0, 0.0),
            (1.0, 0.0),
            Instant::now(),
            Duration::from_secs(5),
        ));

        ov.pre_destroy();
        assert_eq!(ov.tick(Instant::now()), TickStatus::Finished);
        assert_eq!(ov.phase(), OverlayPhase::Closed);
    }

    #[test]
    fn exit_transition_degrades_when_view_vanishes() {
        let (layout, view) = setup(ViewState::new(5.0, 5.0, 2.0, 2.0));
        let ov = overlay(&layout, view);
        layout.lock().unwrap().remove_view(view);

        assert_eq!(ov.exit_transition(), (None, 0.0));
    }
}
