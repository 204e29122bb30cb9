//! Pointer up handling - finalize or abandon the active gesture.

use crate::input::{DragState, InputController, PointerEvent};
use crate::scene::Scene;
use crate::types::Shape;

impl InputController {
    /// End the active gesture and return to Idle.
    ///
    /// A creation gesture that saw at least one move event adds its
    /// rectangle to the scene and rolls a fresh pending color; every other
    /// case (no movement, or an existing-shape drag) just resets state.
    pub fn on_pointer_up(&mut self, scene: &mut Scene, _event: PointerEvent) {
        if let DragState::CreatingNew {
            anchor,
            extent,
            moved: true,
        } = self.state
        {
            scene.add_shape(Shape::rect_from_drag(anchor, extent, &self.pending_fill));
            self.roll_pending_fill();
        }
        self.state.reset();
    }
}
