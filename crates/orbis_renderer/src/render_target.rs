//! Frame attachments: an optional MSAA color texture that resolves into
//! the swapchain view, plus a matching depth texture.

/// Per-frame color/depth attachments for one window.
///
/// With `sample_count > 1` the pass renders into the internal MSAA texture
/// and resolves into the surface view the caller provides each frame; with
/// `sample_count == 1` it renders into the surface view directly.  The
/// depth texture always matches the color sample count — the validation
/// layer rejects the pass otherwise.
pub struct RenderTarget {
    msaa_view: Option<wgpu::TextureView>,
    depth_view: wgpu::TextureView,
    format: wgpu::TextureFormat,
    sample_count: u32,
    width: u32,
    height: u32,
}

impl RenderTarget {
    pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

    pub fn new(
        device: &wgpu::Device,
        width: u32,
        height: u32,
        format: wgpu::TextureFormat,
        sample_count: u32,
    ) -> Self {
        let msaa_view = (sample_count > 1)
            .then(|| make_view(device, "MSAA Color Texture", width, height, format, sample_count));
        let depth_view = make_view(
            device,
            "Depth Texture",
            width,
            height,
            Self::DEPTH_FORMAT,
            sample_count,
        );

        Self {
            msaa_view,
            depth_view,
            format,
            sample_count,
            width,
            height,
        }
    }

    /// Recreates the attachments when the window changes size.  No-op for
    /// identical dimensions.
    pub fn resize(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        if width == self.width && height == self.height {
            return;
        }
        *self = Self::new(device, width, height, self.format, self.sample_count);
    }

    #[inline]
    pub fn sample_count(&self) -> u32 {
        self.sample_count
    }

    /// `(render_view, resolve_target)` pair for the frame's color
    /// attachment, given the swapchain view for this frame.
    pub fn color_attachment<'a>(
        &'a self,
        surface_view: &'a wgpu::TextureView,
    ) -> (&'a wgpu::TextureView, Option<&'a wgpu::TextureView>) {
        match &self.msaa_view {
            Some(msaa) => (msaa, Some(surface_view)),
            None => (surface_view, None),
        }
    }

    #[inline]
    pub fn depth_view(&self) -> &wgpu::TextureView {
        &self.depth_view
    }
}

fn make_view(
    device: &wgpu::Device,
    label: &str,
    width: u32,
    height: u32,
    format: wgpu::TextureFormat,
    sample_count: u32,
) -> wgpu::TextureView {
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some(label),
        size: wgpu::Extent3d {
            width: width.max(1),
            height: height.max(1),
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count,
        dimension: wgpu::TextureDimension::D2,
        format,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    texture.create_view(&wgpu::TextureViewDescriptor::default())
}
