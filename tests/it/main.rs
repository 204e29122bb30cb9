//! Single test binary entry point.
//!
//! All tests compile into one binary to keep linking overhead at 1x.
//!
//! Structure:
//! - unit: Single-component tests (repaint streams, serialization)
//! - integration: Full gesture workflows through the widget context

mod integration;
