//! The drawing surface contract.
//!
//! The host embeds the widget against whatever actually rasterizes pixels
//! (an HTML canvas context, a GPU scene, a framebuffer) by implementing
//! [`Surface`]. The widget only ever issues three paint calls: clear a
//! region, select a fill color, fill a rectangle.
//!
//! [`RecordingSurface`] is a headless implementation that captures the
//! issued [`DrawOp`]s; the test suite is built on it and hosts can use it
//! to diff or replay paint streams.

use crate::constants::{DEFAULT_SURFACE_HEIGHT, DEFAULT_SURFACE_WIDTH};
use crate::geometry::Point;
use serde::Serialize;

/// Paint target consumed by the renderer.
pub trait Surface {
    /// Surface width in pixels
    fn width(&self) -> f32;

    /// Surface height in pixels
    fn height(&self) -> f32;

    /// Cumulative offset of the surface within the host document, i.e. the
    /// sum of the surface element's ancestor offsets plus any document-level
    /// scroll/position offset.
    ///
    /// Layout may change between events, so implementations must recompute
    /// this on every call rather than cache it; the input layer queries it
    /// once per pointer event.
    fn offset_in_document(&self) -> Point;

    /// Clear a rectangular region back to blank.
    fn clear_region(&mut self, x: f32, y: f32, w: f32, h: f32);

    /// Select the fill color for subsequent `fill_rect` calls.
    fn set_fill_color(&mut self, color: &str);

    /// Fill a rectangle with the current fill color.
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32);
}

/// A single recorded paint call.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DrawOp {
    ClearRegion { x: f32, y: f32, w: f32, h: f32 },
    SetFillColor { color: String },
    FillRect { x: f32, y: f32, w: f32, h: f32 },
}

/// Headless [`Surface`] that records every paint call in order.
#[derive(Debug)]
pub struct RecordingSurface {
    width: f32,
    height: f32,
    offset: Point,
    ops: Vec<DrawOp>,
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new(DEFAULT_SURFACE_WIDTH, DEFAULT_SURFACE_HEIGHT)
    }
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            offset: Point::ZERO,
            ops: Vec::new(),
        }
    }

    /// Place the surface at an offset within the host document, as a real
    /// embedding would be.
    pub fn with_offset(mut self, offset: Point) -> Self {
        self.offset = offset;
        self
    }

    /// Simulate a layout change moving the surface within the document.
    pub fn set_offset(&mut self, offset: Point) {
        self.offset = offset;
    }

    /// Paint calls recorded so far, oldest first.
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Drain the recorded paint calls, leaving the log empty.
    pub fn take_ops(&mut self) -> Vec<DrawOp> {
        std::mem::take(&mut self.ops)
    }
}

impl Surface for RecordingSurface {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn offset_in_document(&self) -> Point {
        self.offset
    }

    fn clear_region(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.ops.push(DrawOp::ClearRegion { x, y, w, h });
    }

    fn set_fill_color(&mut self, color: &str) {
        self.ops.push(DrawOp::SetFillColor {
            color: color.to_string(),
        });
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.ops.push(DrawOp::FillRect { x, y, w, h });
    }
}
