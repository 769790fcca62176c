//! CPU vertex type shared by every generator.
//!
//! Position-only for now; normals and UVs can be appended as fields later
//! without touching the index-based mesh contract.  `#[repr(C)]` + `Pod`
//! let consumers reinterpret vertex slices as raw bytes for GPU upload.

use glam::Vec3;

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    /// Object-space position.
    pub position: [f32; 3],
}

impl Vertex {
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { position: [x, y, z] }
    }

    /// Position as a `glam::Vec3`.
    #[inline]
    pub fn to_vec3(self) -> Vec3 {
        Vec3::from_array(self.position)
    }
}

impl From<Vec3> for Vertex {
    fn from(v: Vec3) -> Self {
        Self { position: v.to_array() }
    }
}
