//! Paint model shared between the reveal widget and the renderer.
//!
//! Only solid fills exist: the reveal mask, the toggle button and its glyph
//! are all flat-colored discs.

pub mod color;

pub use color::Color;
