use crate::coords::Viewport;
use crate::paint::Color;

/// GPU handles shared by every renderer drawing into one frame.
pub struct RenderCtx<'a> {
    pub device: &'a wgpu::Device,
    pub queue: &'a wgpu::Queue,
    pub surface_format: wgpu::TextureFormat,
    /// Logical size the draw list positions are expressed in.
    pub viewport: Viewport,
}

impl RenderCtx<'_> {
    /// Size used for the logical-to-NDC transform. At least 1x1 so the
    /// shader never divides by zero while a window is collapsing.
    pub fn ndc_extent(&self) -> [f32; 2] {
        let v = self.viewport.sanitized();
        [v.width.max(1.0), v.height.max(1.0)]
    }
}

/// The frame's encoder and swapchain view.
///
/// Renderers open their own passes through [`RenderTarget::pass`]; each pass
/// loads what the previous one stored.
pub struct RenderTarget<'a> {
    encoder: &'a mut wgpu::CommandEncoder,
    view: &'a wgpu::TextureView,
}

impl<'a> RenderTarget<'a> {
    pub(crate) fn new(encoder: &'a mut wgpu::CommandEncoder, view: &'a wgpu::TextureView) -> Self {
        Self { encoder, view }
    }

    /// Fills the whole target with `color`.
    pub fn clear(&mut self, color: Color) {
        let _pass = self.pass("daynight clear", wgpu::LoadOp::Clear(color.to_wgpu()));
    }

    /// Begins a single color-attachment pass over the target.
    pub fn pass(&mut self, label: &str, load: wgpu::LoadOp<wgpu::Color>) -> wgpu::RenderPass<'_> {
        self.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some(label),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: self.view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        })
    }
}
