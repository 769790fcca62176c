//! The application trait the runner drives.

use orbis_renderer::Renderer;
use winit::keyboard::KeyCode;

use crate::context::AppContext;

/// Implemented by the application the shell runs.
///
/// All methods have empty defaults, so a minimal app only overrides what it
/// needs.  Camera mouse input (orbit drag, scroll zoom) is handled by the
/// runner before these callbacks see anything.
#[allow(unused_variables)]
pub trait OrbisApp {
    /// Called once, after the window and GPU are ready.  Generate meshes
    /// and create render objects here.
    fn setup(&mut self, ctx: &mut AppContext, renderer: &mut Renderer) {}

    /// Called every frame before rendering.  `dt` is seconds since the
    /// previous frame.
    fn update(&mut self, dt: f32, ctx: &mut AppContext, renderer: &mut Renderer) {}

    /// Called on every non-repeat key press.
    fn on_key(&mut self, key: KeyCode, ctx: &mut AppContext, renderer: &mut Renderer) {}

    /// Emit this frame's draw calls, typically one `renderer.render(...)`
    /// with the objects and draw mode the frame should use.
    fn render(
        &mut self,
        renderer: &mut Renderer,
        encoder: &mut wgpu::CommandEncoder,
        surface_view: &wgpu::TextureView,
    ) {
    }
}
