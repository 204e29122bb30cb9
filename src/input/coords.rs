//! Page-space to surface-local coordinate translation.
//!
//! Pointer events arrive in page/viewport coordinates; hit-testing and
//! painting happen in surface-local coordinates. The difference is the
//! surface's cumulative offset within the document, which the host computes
//! by walking the surface element's ancestor offset chain plus any
//! document-level offset ([`Surface::offset_in_document`]).

use crate::geometry::Point;
use crate::input::PointerEvent;
use crate::surface::Surface;

/// Translate a pointer event into surface-local space.
///
/// The document offset is queried per event, never cached, since layout may
/// change between events.
#[inline]
pub fn page_to_surface<S: Surface + ?Sized>(event: PointerEvent, surface: &S) -> Point {
    event.page - surface.offset_in_document()
}
