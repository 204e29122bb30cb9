//! Pointer down and double-click handling - gesture initiation and deletion.

use crate::input::{InputController, PointerEvent, coords};
use crate::scene::Scene;
use crate::surface::Surface;
use tracing::debug;

impl InputController {
    /// Begin a gesture: grab the topmost shape under the pointer, or anchor
    /// a new rectangle on empty surface.
    ///
    /// A pointer down while a gesture is already in progress (possible when
    /// the matching pointer up was lost outside the surface) abandons the
    /// stale gesture and starts fresh, so the machine cannot wedge.
    pub fn on_pointer_down<S: Surface + ?Sized>(
        &mut self,
        scene: &mut Scene,
        surface: &S,
        event: PointerEvent,
    ) {
        if !self.state.is_idle() {
            debug!(state = ?self.state, "pointer down during active gesture; restarting");
            self.state.reset();
        }

        let p = coords::page_to_surface(event, surface);

        if let Some(index) = scene.hit_test(p) {
            // grab_offset keeps the pointer pinned to the same spot on the
            // shape for the whole drag
            let origin = scene
                .shape(index)
                .map(|shape| shape.origin())
                .unwrap_or_default();
            self.state.start_dragging(index, p - origin);
            scene.mark_dirty();
        } else {
            self.state.start_creating(p);
        }
    }

    /// Delete the topmost shape under the pointer, if any.
    ///
    /// Removal swaps the last shape into the freed slot, which invalidates
    /// any index-based selection, so the drag state resets to Idle.
    pub fn on_double_click<S: Surface + ?Sized>(
        &mut self,
        scene: &mut Scene,
        surface: &S,
        event: PointerEvent,
    ) {
        let p = coords::page_to_surface(event, surface);
        if let Some(index) = scene.hit_test(p) {
            scene.remove_shape_at(index);
            self.state.reset();
        }
    }
}
