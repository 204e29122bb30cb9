//! Surface repainting.
//!
//! The renderer is stateless beyond surface access: it clears the surface
//! and paints shapes in collection order (insertion order is z-order, later
//! shapes on top). Repaint scheduling lives with the scene's dirty flag,
//! not here.
//!
//! ## Performance Notes
//!
//! Repaint runs on every dirty tick and on every pointer move while a new
//! shape is being previewed. Enable profiling with
//! `cargo build --features profiling` to see timing.

use crate::geometry::{Point, Rect};
use crate::profile_scope;
use crate::surface::Surface;
use crate::types::Shape;

/// Clear the entire surface back to blank.
pub fn clear<S: Surface + ?Sized>(surface: &mut S) {
    surface.clear_region(0.0, 0.0, surface.width(), surface.height());
}

/// Clear, then draw every shape in collection order.
pub fn repaint<S: Surface + ?Sized>(surface: &mut S, shapes: &[Shape]) {
    profile_scope!("repaint");

    clear(surface);
    for shape in shapes {
        shape.draw(surface);
    }
}

/// Draw the in-progress creation rectangle on top of whatever is already
/// painted. The overlay is transient: it is never added to the scene, and
/// the next full repaint erases it.
pub fn draw_creation_overlay<S: Surface + ?Sized>(
    surface: &mut S,
    anchor: Point,
    extent: Point,
    fill: &str,
) {
    let rect = Rect::from_drag(anchor, extent).normalized();
    surface.set_fill_color(fill);
    surface.fill_rect(rect.x, rect.y, rect.w, rect.h);
}
