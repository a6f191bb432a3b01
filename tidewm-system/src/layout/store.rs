//! In-memory reference implementation of the layout store.

use super::{LayoutStateAccess, ViewId, ViewState, ViewStateUpdate, ViewportState};
use crate::error::LayoutError;
use std::collections::HashMap;
use tracing::trace;

/// A concrete layout store holding view and viewport state in memory.
///
/// Hosts embedding the interactive layer can use this directly behind a
/// mutex, or treat it as the reference for implementing
/// [`LayoutStateAccess`] over their own state.
#[derive(Debug)]
pub struct MemoryLayout {
    views: HashMap<ViewId, ViewState>,
    viewport: ViewportState,
    modifiers: u32,
    mod_mask: u32,
    mod_keysym: u32,
    damage_count: u64,
    overlay_exited: bool,
    cursor_visible: bool,
}

impl MemoryLayout {
    pub fn new(viewport: ViewportState) -> Self {
        MemoryLayout {
            views: HashMap::new(),
            viewport,
            modifiers: 0,
            mod_mask: 0,
            mod_keysym: 0,
            damage_count: 0,
            overlay_exited: false,
            cursor_visible: true,
        }
    }

    /// Adds a view to the store and returns its id.
    pub fn insert_view(&mut self, state: ViewState) -> ViewId {
        let id = ViewId::new();
        self.views.insert(id, state);
        id
    }

    /// Removes a view, e.g. because the client destroyed it mid-gesture.
    pub fn remove_view(&mut self, view: ViewId) -> Option<ViewState> {
        self.views.remove(&view)
    }

    /// Sets the modifier state the overlay consults for auto-close.
    pub fn set_modifier_state(&mut self, modifiers: u32, mod_mask: u32, mod_keysym: u32) {
        self.modifiers = modifiers;
        self.mod_mask = mod_mask;
        self.mod_keysym = mod_keysym;
    }

    pub fn damage_count(&self) -> u64 {
        self.damage_count
    }

    pub fn overlay_exited(&self) -> bool {
        self.overlay_exited
    }

    pub fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }
}

impl LayoutStateAccess for MemoryLayout {
    fn view_state(&self, view: ViewId) -> Result<ViewState, LayoutError> {
        self.views
            .get(&view)
            .copied()
            .ok_or(LayoutError::ViewNotFound(view))
    }

    fn update_view_state(
        &mut self,
        view: ViewId,
        update: ViewStateUpdate,
    ) -> Result<(), LayoutError> {
        let state = self
            .views
            .get_mut(&view)
            .ok_or(LayoutError::ViewNotFound(view))?;
        update.apply_to(state);
        Ok(())
    }

    fn apply_view_state(&mut self, view: ViewId, state: ViewState) -> Result<(), LayoutError> {
        let slot = self
            .views
            .get_mut(&view)
            .ok_or(LayoutError::ViewNotFound(view))?;
        *slot = state;
        Ok(())
    }

    fn viewport(&self) -> ViewportState {
        self.viewport
    }

    fn set_viewport_pos(&mut self, i: f64, j: f64) {
        self.viewport.i = i;
        self.viewport.j = j;
    }

    fn damage(&mut self) {
        self.damage_count += 1;
        trace!("MemoryLayout: damage requested ({})", self.damage_count);
    }

    fn exit_overlay(&mut self) {
        self.overlay_exited = true;
    }

    fn update_cursor(&mut self, visible: bool) {
        self.cursor_visible = visible;
    }

    fn modifiers(&self) -> u32 {
        self.modifiers
    }

    fn mod_mask(&self) -> u32 {
        self.mod_mask
    }

    fn mod_keysym(&self) -> u32 {
        self.mod_keysym
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_update_leaves_other_fields() {
        let mut layout = MemoryLayout::new(ViewportState {
            i: 0.0,
            j: 0.0,
            size: 4.0,
        });
        let view = layout.insert_view(ViewState::new(2.0, 3.0, 1.0, 1.0));

        layout
            .update_view_state(view, ViewStateUpdate::position(5.0, 6.0))
            .unwrap();
        let state = layout.view_state(view).unwrap();
        assert_eq!((state.i, state.j), (5.0, 6.0));
        assert_eq!((state.w, state.h), (1.0, 1.0));
    }

    #[test]
    fn origin_hint_clear_is_distinct_from_unchanged() {
        let mut layout = MemoryLayout::new(ViewportState {
            i: 0.0,
            j: 0.0,
            size: 4.0,
        });
        let view = layout.insert_view(ViewState::new(0.0, 0.0, 1.0, 1.0));

        layout
            .update_view_state(
                view,
                ViewStateUpdate::default().with_move_origin(Some((0.0, 0.0))),
            )
            .unwrap();
        assert_eq!(
            layout.view_state(view).unwrap().move_origin,
            Some((0.0, 0.0))
        );

        // A plain position update leaves the hint alone.
        layout
            .update_view_state(view, ViewStateUpdate::position(1.0, 1.0))
            .unwrap();
        assert_eq!(
            layout.view_state(view).unwrap().move_origin,
            Some((0.0, 0.0))
        );

        layout
            .update_view_state(view, ViewStateUpdate::default().with_move_origin(None))
            .unwrap();
        assert_eq!(layout.view_state(view).unwrap().move_origin, None);
    }

    #[test]
    fn missing_view_is_not_found() {
        let layout = MemoryLayout::new(ViewportState {
            i: 0.0,
            j: 0.0,
            size: 4.0,
        });
        let err = layout.view_state(ViewId::new()).unwrap_err();
        assert!(matches!(err, LayoutError::ViewNotFound(_)));
    }
}
