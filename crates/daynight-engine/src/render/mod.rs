//! GPU rendering subsystem.
//!
//! Convention:
//! - CPU geometry is in logical pixels (top-left origin, +Y down).
//! - The vertex shader converts to NDC using a viewport uniform.

mod ctx;
mod disc;

pub use ctx::{RenderCtx, RenderTarget};
pub use disc::DiscRenderer;
