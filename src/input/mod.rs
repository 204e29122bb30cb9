//! Pointer input handling for the drawing surface.
//!
//! This module translates raw pointer events into surface-local space,
//! drives the drag state machine, and mutates the [`Scene`](crate::Scene).
//!
//! ## Architecture
//!
//! The interaction mode is a single explicit state machine ([`DragState`])
//! rather than a set of loosely-coordinated boolean flags, making
//! impossible states unrepresentable.
//!
//! ## Modules
//!
//! - `state` - Drag state machine enum and helper methods
//! - `coords` - Page-space to surface-local coordinate translation
//! - `pointer_down` - Pointer down and double-click handling
//! - `pointer_move` - Pointer move handling (drag, creation preview)
//! - `pointer_up` - Pointer up handling (finalize or abandon the gesture)

pub mod coords;
mod pointer_down;
mod pointer_move;
mod pointer_up;
mod state;

pub use state::DragState;

use crate::color;
use crate::geometry::Point;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// A raw pointer event as delivered by the host, in page space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    /// Pointer position in page/viewport coordinates
    pub page: Point,
}

impl PointerEvent {
    pub fn at(page_x: f32, page_y: f32) -> Self {
        Self {
            page: Point { x: page_x, y: page_y },
        }
    }
}

/// Translates pointer events into scene mutations.
///
/// Owns the drag state machine and the pending fill color the next created
/// shape will take. One controller instance serves one surface; there are
/// no process-wide singletons.
#[derive(Debug)]
pub struct InputController {
    state: DragState,
    pending_fill: String,
    rng: StdRng,
}

impl Default for InputController {
    fn default() -> Self {
        Self::new()
    }
}

impl InputController {
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Controller with a seeded RNG, for deterministic pending colors.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(mut rng: StdRng) -> Self {
        let pending_fill = color::random_color(&mut rng);
        Self {
            state: DragState::Idle,
            pending_fill,
            rng,
        }
    }

    /// Current drag state.
    pub fn state(&self) -> &DragState {
        &self.state
    }

    /// Fill color the next created shape will take.
    pub fn pending_fill(&self) -> &str {
        &self.pending_fill
    }

    /// Host contract for text-selection-suppression events: returns true,
    /// meaning the host must prevent the default action so drag gestures
    /// never select page text.
    pub fn on_select_start(&self) -> bool {
        true
    }

    pub(crate) fn roll_pending_fill(&mut self) {
        self.pending_fill = color::random_color(&mut self.rng);
    }
}
