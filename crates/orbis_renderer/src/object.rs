//! A mesh instance with its model/color uniform and bind group.

use glam::Mat4;

use crate::geometry::GpuMesh;
use crate::resources;

/// Per-object uniform at group(1): model matrix plus a flat base color.
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ModelUniform {
    pub model: [[f32; 4]; 4],
    pub color: [f32; 4],
}

/// A drawable object: GPU mesh + transform + color.
///
/// Objects are created through `Renderer::create_object` and passed back
/// into `Renderer::render` each frame; which objects a frame draws is the
/// caller's decision, not renderer state.
pub struct RenderObject {
    pub mesh: GpuMesh,
    pub transform: Mat4,
    pub color: [f32; 4],
    uniform_buffer: wgpu::Buffer,
    pub(crate) bind_group: wgpu::BindGroup,
}

impl RenderObject {
    pub(crate) fn new(
        device: &wgpu::Device,
        label: &str,
        mesh: GpuMesh,
        transform: Mat4,
        color: [f32; 4],
        layout: &wgpu::BindGroupLayout,
    ) -> Self {
        let uniform = ModelUniform {
            model: transform.to_cols_array_2d(),
            color,
        };
        let uniform_buffer =
            resources::create_uniform(device, &format!("{label} Model Uniform"), &uniform);

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(&format!("{label} Model Bind Group")),
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        Self {
            mesh,
            transform,
            color,
            uniform_buffer,
            bind_group,
        }
    }

    /// Replaces the transform and pushes the uniform to the GPU.
    pub fn set_transform(&mut self, queue: &wgpu::Queue, transform: Mat4) {
        self.transform = transform;
        self.sync(queue);
    }

    /// Replaces the base color and pushes the uniform to the GPU.
    pub fn set_color(&mut self, queue: &wgpu::Queue, color: [f32; 4]) {
        self.color = color;
        self.sync(queue);
    }

    fn sync(&self, queue: &wgpu::Queue) {
        let uniform = ModelUniform {
            model: self.transform.to_cols_array_2d(),
            color: self.color,
        };
        resources::update_uniform(queue, &self.uniform_buffer, &uniform);
    }
}
