//! Daynight engine crate.
//!
//! Owns the platform + GPU runtime pieces the reveal toggle draws through:
//! a single winit window, per-frame input and timing, and an instanced
//! wgpu renderer for anti-aliased discs.

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod render;
pub mod paint;
pub mod scene;
