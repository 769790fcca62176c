//! GPU-side mesh: vertex/index buffers uploaded from an
//! `orbis_mesh::MeshData`.

use orbis_mesh::{MeshData, Vertex};

use crate::resources;

/// A drawable mesh — vertex and index buffers plus the index count.
///
/// Indices are always `u32` (see [`GpuMesh::INDEX_FORMAT`]), matching the
/// generators' output; the buffers are uploaded tightly packed in exactly
/// the order the generator produced.
pub struct GpuMesh {
    pub vertex_buffer: wgpu::Buffer,
    pub index_buffer: wgpu::Buffer,
    pub index_count: u32,
}

impl GpuMesh {
    pub const INDEX_FORMAT: wgpu::IndexFormat = wgpu::IndexFormat::Uint32;

    /// Uploads `mesh` into fresh GPU buffers.
    ///
    /// A degenerate mesh (zero triangles) uploads fine and simply draws
    /// nothing.
    pub fn upload(device: &wgpu::Device, label: &str, mesh: &MeshData) -> Self {
        Self {
            vertex_buffer: resources::create_vertex(
                device,
                &format!("{label} Vertex Buffer"),
                &mesh.vertices,
            ),
            index_buffer: resources::create_index(
                device,
                &format!("{label} Index Buffer"),
                &mesh.indices,
            ),
            index_count: mesh.indices.len() as u32,
        }
    }

    /// The `VertexBufferLayout` matching `orbis_mesh::Vertex`.
    pub fn vertex_layout<'a>() -> wgpu::VertexBufferLayout<'a> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                // @location(0) position
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: 0,
                    shader_location: 0,
                },
            ],
        }
    }
}
