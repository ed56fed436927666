//! GPU device + surface management.
//!
//! Creates the wgpu Instance/Adapter/Device/Queue for the demo window,
//! keeps the swapchain configured across resizes, and hands out one
//! encoder + view per frame.

mod gpu;
mod surface;

pub use gpu::{Gpu, GpuFrame};

/// Initialization parameters for the GPU layer.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Prefer an sRGB surface format when available.
    pub prefer_srgb: bool,

    /// Present mode. FIFO paces the reveal animation to the display refresh.
    pub present_mode: wgpu::PresentMode,

    /// Optional alpha mode preference; falls back to the first supported one.
    pub alpha_mode: Option<wgpu::CompositeAlphaMode>,

    /// Desired maximum frame latency (a hint; support varies by backend).
    pub desired_maximum_frame_latency: u32,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            prefer_srgb: true,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: None,
            desired_maximum_frame_latency: 2,
        }
    }
}

/// High-level response after a surface error.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceErrorAction {
    /// Surface was reconfigured; rendering may resume next frame.
    Reconfigured,
    /// Transient error; skip the current frame.
    SkipFrame,
    /// Fatal error (commonly OOM); terminate gracefully.
    Fatal,
}
