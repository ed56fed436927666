//! Time subsystem.
//!
//! One `FrameClock` per window; the runtime calls `tick()` once per presented
//! frame and hands the resulting `FrameTime` to the app, which uses `dt` to
//! advance its animations.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
