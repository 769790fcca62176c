//! GPU-side camera resources: the uniform buffer and its bind group.

use super::Camera;
use crate::resources;

/// Uniform data uploaded to the GPU; the shaders only need the combined
/// view-projection matrix.
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
}

impl CameraUniform {
    pub fn from_camera(camera: &Camera) -> Self {
        Self {
            view_proj: camera.build_view_projection_matrix().to_cols_array_2d(),
        }
    }
}

/// Bridge between the CPU [`Camera`] and the pipelines' group(0) binding.
pub struct GpuCamera {
    uniform: CameraUniform,
    buffer: wgpu::Buffer,
    pub bind_group: wgpu::BindGroup,
}

impl GpuCamera {
    /// Allocates the uniform buffer and its bind group.  `layout` must have
    /// a single `UNIFORM` buffer entry at binding 0.
    pub fn new(device: &wgpu::Device, camera: &Camera, layout: &wgpu::BindGroupLayout) -> Self {
        let uniform = CameraUniform::from_camera(camera);
        let buffer = resources::create_uniform(device, "Camera Uniform Buffer", &uniform);

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Camera Bind Group"),
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: buffer.as_entire_binding(),
            }],
        });

        Self {
            uniform,
            buffer,
            bind_group,
        }
    }

    /// Pushes the current CPU camera state to the GPU.  Call once per frame
    /// before the render pass.
    pub fn sync(&mut self, queue: &wgpu::Queue, camera: &Camera) {
        self.uniform = CameraUniform::from_camera(camera);
        resources::update_uniform(queue, &self.buffer, &self.uniform);
    }
}
