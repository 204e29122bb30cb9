//! Geometry primitives for the drawing surface.
//!
//! Coordinates are `f32` pixels in surface-local space unless a function
//! says otherwise. Rectangles produced by drag gestures can arrive with
//! negative extents (a drag that moves left/up from its anchor);
//! [`Rect::normalized`] resolves those to a min-corner representation so
//! containment tests never degenerate.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// A point or vector in 2D pixel space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

/// Shorthand constructor for [`Point`].
#[inline]
pub fn point(x: f32, y: f32) -> Point {
    Point { x, y }
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        point(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        point(self.x - rhs.x, self.y - rhs.y)
    }
}

/// An axis-aligned rectangle: origin plus (possibly signed) extents.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Rectangle spanning an anchor point and a signed extent vector,
    /// as produced by a drag gesture.
    pub fn from_drag(anchor: Point, extent: Point) -> Self {
        Self::new(anchor.x, anchor.y, extent.x, extent.y)
    }

    /// Equivalent rectangle with its origin at the min corner and
    /// non-negative extents.
    pub fn normalized(self) -> Self {
        let (x, w) = if self.w < 0.0 {
            (self.x + self.w, -self.w)
        } else {
            (self.x, self.w)
        };
        let (y, h) = if self.h < 0.0 {
            (self.y + self.h, -self.h)
        } else {
            (self.y, self.h)
        };
        Self { x, y, w, h }
    }

    /// True iff the point lies inside the rectangle, boundary included
    /// on all four edges.
    ///
    /// Callers must pass a normalized rectangle; with negative extents the
    /// upper bound falls below the origin and nothing is contained.
    pub fn contains(&self, px: f32, py: f32) -> bool {
        self.x <= px && px <= self.x + self.w && self.y <= py && py <= self.y + self.h
    }

    pub fn origin(&self) -> Point {
        point(self.x, self.y)
    }
}
