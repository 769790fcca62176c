//! `orbis_renderer` — wgpu rendering for the sphere demo.
//!
//! # Module layout
//!
//! | Module          | Responsibility                                      |
//! |-----------------|-----------------------------------------------------|
//! | `context`       | Instance/adapter/device/queue setup                 |
//! | `resources`     | Buffer allocation helpers                           |
//! | `geometry`      | `GpuMesh` upload + vertex layout                    |
//! | `shader`        | Runtime GLSL file → `wgpu::ShaderModule`            |
//! | `camera`        | CPU camera, GPU uniform, orbit controller           |
//! | `pipeline`      | Bind-group layouts + solid/wireframe pipelines      |
//! | `render_target` | MSAA color + depth attachments                      |
//! | `object`        | `RenderObject`: mesh instance + model/color uniform |

pub mod camera;
pub mod context;
pub mod geometry;
pub mod object;
pub mod pipeline;
pub mod render_target;
pub mod resources;
pub mod shader;

// ── Public re-exports ────────────────────────────────────────────────────────

pub use camera::{Camera, GpuCamera, OrbitController};
pub use context::{ContextError, GpuContext};
pub use geometry::GpuMesh;
pub use glam;
pub use object::RenderObject;
pub use render_target::RenderTarget;
pub use shader::ShaderError;

use std::path::Path;

use glam::Mat4;
use orbis_mesh::MeshData;

use pipeline::{PipelineLayouts, SpherePipelines};

// ── DrawMode ─────────────────────────────────────────────────────────────────

/// Which rasterization a frame uses.  Threaded through [`Renderer::render`]
/// as an explicit parameter; the renderer keeps no draw-mode state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawMode {
    Solid,
    Wireframe,
    /// Solid fill with the wireframe drawn on top.
    SolidWireframe,
}

impl DrawMode {
    /// The next mode in the Solid → Wireframe → SolidWireframe cycle.
    pub fn cycled(self) -> Self {
        match self {
            Self::Solid => Self::Wireframe,
            Self::Wireframe => Self::SolidWireframe,
            Self::SolidWireframe => Self::Solid,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::Wireframe => "wireframe",
            Self::SolidWireframe => "solid + wireframe",
        }
    }

    fn draws_solid(self) -> bool {
        matches!(self, Self::Solid | Self::SolidWireframe)
    }

    fn draws_wire(self) -> bool {
        matches!(self, Self::Wireframe | Self::SolidWireframe)
    }
}

// ── Renderer ─────────────────────────────────────────────────────────────────

/// Top-level renderer: owns the GPU context, frame attachments, camera, and
/// the solid/wireframe pipeline pair, and records one render pass per frame.
pub struct Renderer {
    pub context: GpuContext,
    target: RenderTarget,
    layouts: PipelineLayouts,
    pipelines: SpherePipelines,

    pub camera: Camera,
    pub orbit: OrbitController,
    gpu_camera: GpuCamera,

    pub clear_color: wgpu::Color,
}

impl Renderer {
    pub const SAMPLE_COUNT: u32 = 4;

    /// Builds the renderer for a surface of the given size and format.
    ///
    /// Shader files (`sphere.vert`, `sphere.frag`, `wire.frag`) are loaded
    /// from `shader_dir` at startup; a missing or empty shader is a hard
    /// error here rather than a blank window later.
    pub fn new(
        context: GpuContext,
        width: u32,
        height: u32,
        format: wgpu::TextureFormat,
        shader_dir: &Path,
    ) -> Result<Self, ShaderError> {
        let device = &context.device;

        let target = RenderTarget::new(device, width, height, format, Self::SAMPLE_COUNT);
        let layouts = PipelineLayouts::new(device);
        let pipelines =
            SpherePipelines::new(device, format, target.sample_count(), &layouts, shader_dir)?;

        let mut camera = Camera {
            aspect: width as f32 / height.max(1) as f32,
            ..Camera::default()
        };
        let orbit = OrbitController::default();
        orbit.apply(&mut camera);
        let gpu_camera = GpuCamera::new(device, &camera, &layouts.camera);

        Ok(Self {
            context,
            target,
            layouts,
            pipelines,
            camera,
            orbit,
            gpu_camera,
            clear_color: wgpu::Color {
                r: 0.075,
                g: 0.09,
                b: 0.12,
                a: 1.0,
            },
        })
    }

    // ── Objects ──────────────────────────────────────────────────────────────

    /// Uploads `mesh` and wraps it with a transform + color uniform, ready
    /// to be passed to [`Renderer::render`].
    pub fn create_object(
        &self,
        label: &str,
        mesh: &MeshData,
        transform: Mat4,
        color: [f32; 4],
    ) -> RenderObject {
        let gpu_mesh = GpuMesh::upload(&self.context.device, label, mesh);
        RenderObject::new(
            &self.context.device,
            label,
            gpu_mesh,
            transform,
            color,
            &self.layouts.model,
        )
    }

    // ── Frame API ────────────────────────────────────────────────────────────

    /// Allocates a fresh `CommandEncoder` for the current frame.
    pub fn begin_frame(&self) -> wgpu::CommandEncoder {
        self.context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Frame Encoder"),
            })
    }

    /// Records one render pass drawing `objects` into `surface_view` with
    /// the requested `mode`.
    pub fn render(
        &mut self,
        encoder: &mut wgpu::CommandEncoder,
        surface_view: &wgpu::TextureView,
        objects: &[&RenderObject],
        mode: DrawMode,
    ) {
        self.gpu_camera.sync(&self.context.queue, &self.camera);

        let (color_view, resolve_target) = self.target.color_attachment(surface_view);

        let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Sphere Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: color_view,
                resolve_target,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(self.clear_color),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: self.target.depth_view(),
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(1.0),
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            occlusion_query_set: None,
            timestamp_writes: None,
        });

        rpass.set_bind_group(0, &self.gpu_camera.bind_group, &[]);

        if mode.draws_solid() {
            rpass.set_pipeline(&self.pipelines.solid);
            draw_objects(&mut rpass, objects);
        }
        if mode.draws_wire() {
            rpass.set_pipeline(&self.pipelines.wire);
            draw_objects(&mut rpass, objects);
        }
    }

    // ── Resize / camera input ────────────────────────────────────────────────

    /// Recreates frame attachments and updates the camera aspect.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.target.resize(&self.context.device, width, height);
        self.camera
            .set_aspect(width as f32 / height.max(1) as f32);
    }

    /// Applies a mouse-drag delta (pixels) to the orbit camera.
    pub fn rotate_camera(&mut self, dx: f32, dy: f32) {
        self.orbit.rotate(dx, dy, &mut self.camera);
    }

    /// Applies scroll ticks (positive = zoom in) to the orbit camera.
    pub fn zoom_camera(&mut self, steps: f32) {
        self.orbit.zoom(steps, &mut self.camera);
    }
}

fn draw_objects(rpass: &mut wgpu::RenderPass<'_>, objects: &[&RenderObject]) {
    for obj in objects {
        rpass.set_bind_group(1, &obj.bind_group, &[]);
        rpass.set_vertex_buffer(0, obj.mesh.vertex_buffer.slice(..));
        rpass.set_index_buffer(obj.mesh.index_buffer.slice(..), GpuMesh::INDEX_FORMAT);
        rpass.draw_indexed(0..obj.mesh.index_count, 0, 0..1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draw_mode_cycle_covers_all_modes() {
        let start = DrawMode::Solid;
        let mut mode = start;
        let mut seen = Vec::new();
        for _ in 0..3 {
            seen.push(mode);
            mode = mode.cycled();
        }
        assert_eq!(mode, start);
        assert!(seen.contains(&DrawMode::Wireframe));
        assert!(seen.contains(&DrawMode::SolidWireframe));
    }
}
