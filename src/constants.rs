//! Widget-wide constants.
//!
//! Centralizes magic numbers and default values to make the codebase
//! more maintainable and self-documenting.

// ============================================================================
// Repaint Timing
// ============================================================================

/// Recommended repaint tick cadence in milliseconds.
///
/// The host should invoke [`crate::RectPad::tick`] at roughly this period;
/// the dirty flag coalesces any number of mutations between ticks into a
/// single repaint.
pub const REPAINT_INTERVAL_MS: u64 = 25;

// ============================================================================
// Shape Defaults
// ============================================================================

/// Fallback fill color used when a shape is created without a valid one
pub const DEFAULT_FILL_COLOR: &str = "#e55039";

/// Minimum extent a shape is given on either axis.
///
/// A zero-extent shape would be present in the scene but invisible and
/// unhittable, so extents are clamped up to this value on creation.
pub const MIN_SHAPE_EXTENT: f32 = 1.0;

// ============================================================================
// Surface Defaults
// ============================================================================

/// Default recording surface width in pixels
pub const DEFAULT_SURFACE_WIDTH: f32 = 800.0;

/// Default recording surface height in pixels
pub const DEFAULT_SURFACE_HEIGHT: f32 = 400.0;
