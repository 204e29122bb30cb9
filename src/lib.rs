//! rectpad - an embeddable rectangle-drawing widget.
//!
//! Click-drag on empty surface to create a rectangle, drag an existing one
//! to move it, double-click to delete it. The host owns the event source
//! and the pixels; the widget owns the scene and the interaction logic.
//!
//! ## Architecture
//!
//! - [`widget::RectPad`] - The per-surface context the host drives: event
//!   dispatch, the repaint tick, and the clear-all trigger
//! - [`scene::Scene`] - Ordered shape collection with a dirty flag that
//!   coalesces mutations into one repaint per tick
//! - [`input`] - Pointer event translation and the drag state machine
//! - [`render`] - Stateless clear-and-redraw over the shape collection
//! - [`surface::Surface`] - The paint contract the host implements;
//!   [`surface::RecordingSurface`] is the headless test double
//!
//! Everything runs to completion on the host's event thread. There are no
//! threads, no locks, and no global state; each widget instance is
//! independently owned.

pub mod color;
pub mod constants;
pub mod geometry;
pub mod input;
pub mod perf;
pub mod render;
pub mod scene;
pub mod surface;
pub mod types;
pub mod widget;

pub use geometry::{Point, Rect, point};
pub use input::{DragState, InputController, PointerEvent};
pub use scene::Scene;
pub use surface::{DrawOp, RecordingSurface, Surface};
pub use types::{Shape, ShapeKind};
pub use widget::{RectPad, SurfaceEvent};
