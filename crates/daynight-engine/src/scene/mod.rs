//! Scene (draw stream) types.
//!
//! The widget records discs into a `DrawList` each frame; the renderer
//! consumes them back-to-front (z-layer, then insertion order).

mod disc;
mod list;

pub use disc::Disc;
pub use list::{DrawItem, DrawList, ZIndex};
