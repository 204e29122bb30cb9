//! Pointer move handling - shape dragging and creation preview.
//!
//! ## Performance Notes
//!
//! Pointer move is the hottest input path (60+ events per second during a
//! drag). Dragging an existing shape only mutates its origin and sets the
//! dirty flag, deferring paint to the next tick; the creation preview must
//! repaint immediately so the rubber-band rectangle tracks the pointer.
//!
//! Enable profiling with `cargo build --features profiling` to see timing.

use crate::input::{DragState, InputController, PointerEvent, coords};
use crate::profile_scope;
use crate::render;
use crate::scene::Scene;
use crate::surface::Surface;

impl InputController {
    pub fn on_pointer_move<S: Surface + ?Sized>(
        &mut self,
        scene: &mut Scene,
        surface: &mut S,
        event: PointerEvent,
    ) {
        profile_scope!("pointer_move");

        let p = coords::page_to_surface(event, surface);

        match &mut self.state {
            DragState::Idle => {}

            DragState::DraggingExisting { index, grab_offset } => {
                let target = p - *grab_offset;
                if let Some(shape) = scene.shape_mut(*index) {
                    shape.x = target.x;
                    shape.y = target.y;
                }
                scene.mark_dirty();
            }

            DragState::CreatingNew { anchor, extent, moved } => {
                *extent = p - *anchor;
                *moved = true;
                let (anchor, extent) = (*anchor, *extent);

                // Preview: full repaint plus a transient overlay in the
                // pending color. The scene's collection is not touched and
                // the scene ends this handler clean, so the next tick will
                // not erase the overlay.
                scene.force_repaint(surface);
                render::draw_creation_overlay(surface, anchor, extent, &self.pending_fill);
            }
        }
    }
}
