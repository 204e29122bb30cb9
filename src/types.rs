//! Core shape types for the rectpad scene.
//!
//! Only one shape kind exists today. The kind is still an explicit enum so
//! new variants extend the `{draw, contains}` capability set by adding a
//! match arm instead of a type hierarchy.

use crate::color;
use crate::constants::MIN_SHAPE_EXTENT;
use crate::geometry::{Point, Rect, point};
use crate::surface::Surface;
use serde::{Deserialize, Serialize};

/// The kind of a scene shape.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    #[default]
    Rect,
}

/// A shape placed on the drawing surface.
///
/// Origin is the min corner and extents are non-negative; constructors
/// normalize whatever the gesture produced. Position is mutated in place
/// while the shape is dragged; everything else is fixed at creation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub kind: ShapeKind,
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    /// Fill color as a hex token (e.g. `#e55039`)
    pub fill: String,
}

impl Shape {
    /// Create a rectangle shape, defensively normalizing its inputs:
    ///
    /// - non-finite coordinates default to 0
    /// - negative extents flip the origin to the min corner
    /// - zero or non-finite extents are clamped up to [`MIN_SHAPE_EXTENT`]
    /// - an invalid fill token falls back to the default fill
    pub fn rect(x: f32, y: f32, w: f32, h: f32, fill: &str) -> Self {
        let rect = Rect::new(finite_or(x, 0.0), finite_or(y, 0.0), finite_or(w, 0.0), finite_or(h, 0.0))
            .normalized();
        Self {
            kind: ShapeKind::Rect,
            x: rect.x,
            y: rect.y,
            w: rect.w.max(MIN_SHAPE_EXTENT),
            h: rect.h.max(MIN_SHAPE_EXTENT),
            fill: color::sanitize(fill),
        }
    }

    /// Rectangle shape from a drag gesture's anchor and signed extent.
    pub fn rect_from_drag(anchor: Point, extent: Point, fill: &str) -> Self {
        Self::rect(anchor.x, anchor.y, extent.x, extent.y, fill)
    }

    pub fn origin(&self) -> Point {
        point(self.x, self.y)
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.w, self.h)
    }

    /// Hit-test a surface-local point against this shape, boundary
    /// points included.
    pub fn contains(&self, px: f32, py: f32) -> bool {
        match self.kind {
            ShapeKind::Rect => self.bounds().contains(px, py),
        }
    }

    /// Paint this shape onto the surface.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        match self.kind {
            ShapeKind::Rect => {
                surface.set_fill_color(&self.fill);
                surface.fill_rect(self.x, self.y, self.w, self.h);
            }
        }
    }
}

fn finite_or(value: f32, fallback: f32) -> f32 {
    if value.is_finite() { value } else { fallback }
}
