//! Drag state machine - unified state for all pointer interactions.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> DraggingExisting   (pointer down on a shape)
//! Idle -> CreatingNew        (pointer down on empty surface)
//!
//! Any  -> Idle               (pointer up - finalizes or abandons)
//! ```
//!
//! A pointer down in a non-Idle state starts a fresh gesture; see
//! `pointer_down`.

use crate::geometry::Point;

/// The current pointer interaction mode.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragState {
    /// No active gesture
    #[default]
    Idle,

    /// Moving a shape that already exists in the scene
    DraggingExisting {
        /// Index of the grabbed shape in the scene's collection.
        ///
        /// Valid for the duration of one gesture: nothing may remove
        /// shapes between pointer down and pointer up.
        index: usize,
        /// Vector from the shape's origin to the pointer at grab time
        grab_offset: Point,
    },

    /// Rubber-banding a new rectangle from its anchor
    CreatingNew {
        /// Pointer position at gesture start
        anchor: Point,
        /// Signed extent from the anchor to the current pointer position
        extent: Point,
        /// Whether any move event arrived since pointer down; a gesture
        /// with no movement creates nothing
        moved: bool,
    },
}

impl DragState {
    /// Returns true if no gesture is in progress
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Returns true if an existing shape is being dragged
    pub fn is_dragging_existing(&self) -> bool {
        matches!(self, Self::DraggingExisting { .. })
    }

    /// Returns true if a new shape is being rubber-banded
    pub fn is_creating_new(&self) -> bool {
        matches!(self, Self::CreatingNew { .. })
    }

    /// Index of the shape being dragged, if any
    pub fn dragged_index(&self) -> Option<usize> {
        match self {
            Self::DraggingExisting { index, .. } => Some(*index),
            _ => None,
        }
    }

    /// Anchor of the creation gesture, if one is in progress
    pub fn creation_anchor(&self) -> Option<Point> {
        match self {
            Self::CreatingNew { anchor, .. } => Some(*anchor),
            _ => None,
        }
    }

    /// Reset to Idle, abandoning any gesture
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }

    /// Enter `DraggingExisting`
    pub fn start_dragging(&mut self, index: usize, grab_offset: Point) {
        *self = Self::DraggingExisting { index, grab_offset };
    }

    /// Enter `CreatingNew` anchored at the pointer position
    pub fn start_creating(&mut self, anchor: Point) {
        *self = Self::CreatingNew {
            anchor,
            extent: Point::ZERO,
            moved: false,
        };
    }
}
