//! Multi-component workflow tests driven through the widget context.

mod gesture_tests;
