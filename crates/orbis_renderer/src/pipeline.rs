//! Bind-group layouts and the solid/wireframe pipeline pair.

use std::path::Path;
use std::sync::Arc;

use crate::geometry::GpuMesh;
use crate::render_target::RenderTarget;
use crate::shader::{self, ShaderError};

/// Bind-group layouts shared by both pipelines.
///
/// Creating them once and cloning the `Arc`s means camera and model bind
/// groups built anywhere in the renderer are compatible with either
/// pipeline.
#[derive(Clone)]
pub struct PipelineLayouts {
    /// group(0) — camera view-projection matrix.
    pub camera: Arc<wgpu::BindGroupLayout>,
    /// group(1) — per-object model matrix + color.  Visible to the fragment
    /// stage too, which reads the color.
    pub model: Arc<wgpu::BindGroupLayout>,
}

impl PipelineLayouts {
    pub fn new(device: &wgpu::Device) -> Self {
        let uniform_entry = |binding: u32, visibility| wgpu::BindGroupLayoutEntry {
            binding,
            visibility,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        };

        let camera = Arc::new(
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Layout: Camera"),
                entries: &[uniform_entry(0, wgpu::ShaderStages::VERTEX)],
            }),
        );

        let model = Arc::new(
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Layout: Model"),
                entries: &[uniform_entry(
                    0,
                    wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                )],
            }),
        );

        Self { camera, model }
    }
}

/// The two rasterizations of the same geometry.
///
/// Both pipelines share the vertex shader and the camera/model layouts; the
/// wireframe variant swaps the fragment shader, rasterizes with
/// `PolygonMode::Line`, and compares depth with `LessEqual` so overlay
/// lines pass against the triangles they sit on.
pub struct SpherePipelines {
    pub solid: wgpu::RenderPipeline,
    pub wire: wgpu::RenderPipeline,
}

impl SpherePipelines {
    /// Compiles `sphere.vert` / `sphere.frag` / `wire.frag` from
    /// `shader_dir` and links both pipelines for the given surface format
    /// and sample count.
    pub fn new(
        device: &wgpu::Device,
        target_format: wgpu::TextureFormat,
        sample_count: u32,
        layouts: &PipelineLayouts,
        shader_dir: &Path,
    ) -> Result<Self, ShaderError> {
        let vs = shader::load_shader_module(device, &shader_dir.join("sphere.vert"))?;
        let solid_fs = shader::load_shader_module(device, &shader_dir.join("sphere.frag"))?;
        let wire_fs = shader::load_shader_module(device, &shader_dir.join("wire.frag"))?;

        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Sphere Pipeline Layout"),
            bind_group_layouts: &[&layouts.camera, &layouts.model],
            push_constant_ranges: &[],
        });

        let build = |label, fs, polygon_mode, depth_compare| {
            device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some(label),
                layout: Some(&layout),
                vertex: wgpu::VertexState {
                    module: &vs,
                    entry_point: Some("main"),
                    buffers: &[GpuMesh::vertex_layout()],
                    compilation_options: wgpu::PipelineCompilationOptions::default(),
                },
                fragment: Some(wgpu::FragmentState {
                    module: fs,
                    entry_point: Some("main"),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: target_format,
                        blend: Some(wgpu::BlendState::REPLACE),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                    compilation_options: wgpu::PipelineCompilationOptions::default(),
                }),
                primitive: wgpu::PrimitiveState {
                    topology: wgpu::PrimitiveTopology::TriangleList,
                    front_face: wgpu::FrontFace::Ccw,
                    // The two generators wind in opposite directions, so
                    // neither face can be culled wholesale.
                    cull_mode: None,
                    polygon_mode,
                    ..Default::default()
                },
                depth_stencil: Some(wgpu::DepthStencilState {
                    format: RenderTarget::DEPTH_FORMAT,
                    depth_write_enabled: true,
                    depth_compare,
                    stencil: wgpu::StencilState::default(),
                    bias: wgpu::DepthBiasState::default(),
                }),
                multisample: wgpu::MultisampleState {
                    count: sample_count,
                    mask: !0,
                    alpha_to_coverage_enabled: false,
                },
                multiview: None,
                cache: None,
            })
        };

        Ok(Self {
            solid: build(
                "Sphere Solid Pipeline",
                &solid_fs,
                wgpu::PolygonMode::Fill,
                wgpu::CompareFunction::Less,
            ),
            wire: build(
                "Sphere Wireframe Pipeline",
                &wire_fs,
                wgpu::PolygonMode::Line,
                wgpu::CompareFunction::LessEqual,
            ),
        })
    }
}
