//! Plain-data triangle mesh: a vertex list plus a `u32` triangle index list.

use thiserror::Error;

use crate::vertex::Vertex;

#[derive(Debug, Error)]
pub enum MeshError {
    #[error("sphere radius must be a positive finite value, got {0}")]
    InvalidRadius(f32),
    #[error("invalid mesh: {0}")]
    InvalidMesh(String),
}

/// An indexed triangle mesh.
///
/// Every three consecutive entries of `indices` form one triangle, all of
/// them referencing `vertices`.  Generators uphold both invariants checked
/// by [`MeshData::validate`]; the method exists so downstream code can
/// assert them after its own mesh surgery.
#[derive(Debug, Clone, Default)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    /// Empty mesh with room for `vertex_capacity` vertices and
    /// `triangle_capacity` triangles.
    pub fn with_capacity(vertex_capacity: usize, triangle_capacity: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_capacity),
            indices: Vec::with_capacity(triangle_capacity * 3),
        }
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// The three vertex indices of triangle `t`.
    #[inline]
    pub fn triangle(&self, t: usize) -> [u32; 3] {
        let base = t * 3;
        [self.indices[base], self.indices[base + 1], self.indices[base + 2]]
    }

    /// Checks that the index count is a multiple of 3 and that every index
    /// is in range.  A zero-triangle mesh is valid.
    pub fn validate(&self) -> Result<(), MeshError> {
        if self.indices.len() % 3 != 0 {
            return Err(MeshError::InvalidMesh(format!(
                "index count {} is not divisible by 3",
                self.indices.len()
            )));
        }
        let n = self.vertex_count();
        for (i, &idx) in self.indices.iter().enumerate() {
            if idx as usize >= n {
                return Err(MeshError::InvalidMesh(format!(
                    "index {idx} at position {i} is out of range (vertex count: {n})"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_mesh_is_valid() {
        assert!(MeshData::default().validate().is_ok());
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        let mesh = MeshData {
            vertices: vec![Vertex::new(0.0, 0.0, 0.0); 2],
            indices: vec![0, 1, 2],
        };
        assert!(mesh.validate().is_err());
    }

    #[test]
    fn ragged_index_list_is_rejected() {
        let mesh = MeshData {
            vertices: vec![Vertex::new(0.0, 0.0, 0.0); 3],
            indices: vec![0, 1],
        };
        assert!(mesh.validate().is_err());
    }
}
