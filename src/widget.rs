//! The owned widget context - one instance per surface.
//!
//! [`RectPad`] bundles the scene and input controller into the explicit
//! context object the host's event glue talks to. The host registers thin
//! callbacks against its event source and forwards each one here, either
//! through the named handlers or through [`RectPad::handle_event`], and
//! invokes [`RectPad::tick`] from a fixed-cadence timer
//! (see [`REPAINT_INTERVAL_MS`](crate::constants::REPAINT_INTERVAL_MS)).
//!
//! All methods run to completion on the host's event thread; the widget
//! never spawns threads or blocks.

use crate::input::{InputController, PointerEvent};
use crate::scene::Scene;
use crate::surface::Surface;

/// A host event, named after the gesture it carries.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SurfaceEvent {
    PointerDown(PointerEvent),
    PointerMove(PointerEvent),
    PointerUp(PointerEvent),
    DoubleClick(PointerEvent),
    /// The host's text-selection-start event; must be suppressed so drag
    /// gestures never select page text
    SelectStart,
    /// External "clear all" trigger (e.g. a button)
    ClearAll,
}

/// The drawing widget: scene, input controller, and repaint orchestration.
#[derive(Debug, Default)]
pub struct RectPad {
    scene: Scene,
    input: InputController,
}

impl RectPad {
    pub fn new() -> Self {
        Self::default()
    }

    /// Widget with deterministic pending colors, for tests and replays.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            scene: Scene::new(),
            input: InputController::with_seed(seed),
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn input(&self) -> &InputController {
        &self.input
    }

    /// Dispatch a host event to the matching handler.
    ///
    /// Returns true when the host must suppress its default action for the
    /// event (only the case for [`SurfaceEvent::SelectStart`]).
    pub fn handle_event<S: Surface + ?Sized>(&mut self, surface: &mut S, event: SurfaceEvent) -> bool {
        match event {
            SurfaceEvent::PointerDown(ev) => self.on_pointer_down(surface, ev),
            SurfaceEvent::PointerMove(ev) => self.on_pointer_move(surface, ev),
            SurfaceEvent::PointerUp(ev) => self.on_pointer_up(ev),
            SurfaceEvent::DoubleClick(ev) => self.on_double_click(surface, ev),
            SurfaceEvent::SelectStart => return self.input.on_select_start(),
            SurfaceEvent::ClearAll => self.clear_all(surface),
        }
        false
    }

    pub fn on_pointer_down<S: Surface + ?Sized>(&mut self, surface: &S, event: PointerEvent) {
        self.input.on_pointer_down(&mut self.scene, surface, event);
    }

    pub fn on_pointer_move<S: Surface + ?Sized>(&mut self, surface: &mut S, event: PointerEvent) {
        self.input.on_pointer_move(&mut self.scene, surface, event);
    }

    pub fn on_pointer_up(&mut self, event: PointerEvent) {
        self.input.on_pointer_up(&mut self.scene, event);
    }

    pub fn on_double_click<S: Surface + ?Sized>(&mut self, surface: &S, event: PointerEvent) {
        self.input.on_double_click(&mut self.scene, surface, event);
    }

    /// Repaint timer callback: repaints once if anything changed since the
    /// last tick, otherwise does nothing.
    pub fn tick<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        self.scene.repaint_if_dirty(surface);
    }

    /// Remove all shapes and repaint immediately.
    pub fn clear_all<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        self.scene.clear();
        self.scene.force_repaint(surface);
    }
}
