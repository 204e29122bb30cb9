//! Scene - the ordered shape collection and its dirty flag.
//!
//! The scene is the sole owner of shape lifetime. Insertion order doubles
//! as paint order (later shapes draw on top) and as hit-test priority in
//! reverse (topmost first). A boolean dirty flag coalesces any number of
//! mutations between repaint ticks into a single repaint.

use crate::geometry::Point;
use crate::render;
use crate::surface::Surface;
use crate::types::Shape;
use tracing::debug;

/// Ordered shape collection plus repaint bookkeeping.
#[derive(Debug, Default)]
pub struct Scene {
    shapes: Vec<Shape>,
    dirty: bool,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn shape(&self, index: usize) -> Option<&Shape> {
        self.shapes.get(index)
    }

    pub fn shape_mut(&mut self, index: usize) -> Option<&mut Shape> {
        self.shapes.get_mut(index)
    }

    /// Append a shape at the top of the z-order and mark the scene dirty.
    pub fn add_shape(&mut self, shape: Shape) {
        debug!(x = shape.x, y = shape.y, w = shape.w, h = shape.h, fill = %shape.fill, "add shape");
        self.shapes.push(shape);
        self.mark_dirty();
    }

    /// Remove the shape at `index` via swap-with-last-then-pop.
    ///
    /// O(1), but the previously-last shape now occupies `index`, so stable
    /// ordering after the removed slot is not preserved. Out-of-range
    /// indices are a no-op.
    pub fn remove_shape_at(&mut self, index: usize) -> Option<Shape> {
        if index >= self.shapes.len() {
            return None;
        }
        let removed = self.shapes.swap_remove(index);
        debug!(index, remaining = self.shapes.len(), "remove shape");
        self.mark_dirty();
        Some(removed)
    }

    /// Remove every shape and mark the scene dirty.
    pub fn clear(&mut self) {
        if !self.shapes.is_empty() {
            debug!(count = self.shapes.len(), "clear all shapes");
        }
        self.shapes.clear();
        self.mark_dirty();
    }

    /// Index of the topmost shape containing the point, if any.
    ///
    /// Topmost means last-inserted: the scan runs from the end of the
    /// collection toward the front.
    pub fn hit_test(&self, p: Point) -> Option<usize> {
        self.shapes
            .iter()
            .enumerate()
            .rev()
            .find(|(_, shape)| shape.contains(p.x, p.y))
            .map(|(index, _)| index)
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Repaint the surface if anything changed since the last repaint.
    ///
    /// No-op when clean, so a fixed-cadence caller performs the clear and
    /// redraw work at most once per batch of mutations.
    pub fn repaint_if_dirty<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        if !self.dirty {
            return;
        }
        self.force_repaint(surface);
    }

    /// Repaint unconditionally and clear the dirty flag.
    pub fn force_repaint<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        render::repaint(surface, &self.shapes);
        self.dirty = false;
    }
}
