//! Latitude/longitude sphere grid.

use std::f32::consts::PI;

use crate::mesh::{MeshData, MeshError};
use crate::vertex::Vertex;

/// Generates a UV sphere centered at the origin.
///
/// Vertices are emitted row-major over `(stacks + 1) × (sectors + 1)`
/// grid points, poles included.  The `j = 0` and `j = sectors` columns
/// coincide in space; the duplicated seam keeps the grid rectangular so a
/// texture coordinate channel can wrap cleanly if one is added later.
///
/// `stacks == 0` or `sectors == 0` produces a degenerate mesh with zero
/// triangles; callers must tolerate an empty index list.
pub fn uv_sphere(radius: f32, stacks: u32, sectors: u32) -> Result<MeshData, MeshError> {
    if !radius.is_finite() || radius <= 0.0 {
        return Err(MeshError::InvalidRadius(radius));
    }

    let mut mesh = MeshData::with_capacity(
        ((stacks + 1) * (sectors + 1)) as usize,
        (stacks * sectors * 2) as usize,
    );

    for i in 0..=stacks {
        // Polar angle, 0 at the top pole down to PI at the bottom.
        let phi = if stacks == 0 { 0.0 } else { PI * i as f32 / stacks as f32 };
        let y = phi.cos();
        let ring = phi.sin();

        for j in 0..=sectors {
            let theta = if sectors == 0 {
                0.0
            } else {
                2.0 * PI * j as f32 / sectors as f32
            };
            mesh.vertices.push(Vertex::new(
                radius * ring * theta.cos(),
                radius * y,
                radius * ring * theta.sin(),
            ));
        }
    }

    for i in 0..stacks {
        let row1 = i * (sectors + 1);
        let row2 = (i + 1) * (sectors + 1);

        for j in 0..sectors {
            mesh.indices
                .extend_from_slice(&[row1 + j, row2 + j, row1 + j + 1]);
            mesh.indices
                .extend_from_slice(&[row1 + j + 1, row2 + j, row2 + j + 1]);
        }
    }

    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_match_grid_dimensions() {
        let mesh = uv_sphere(1.0, 8, 16).unwrap();
        assert_eq!(mesh.vertex_count(), 9 * 17);
        assert_eq!(mesh.indices.len(), 8 * 16 * 6);
        mesh.validate().unwrap();
    }

    #[test]
    fn top_pole_row_sits_at_radius() {
        let radius = 2.5;
        let mesh = uv_sphere(radius, 6, 10).unwrap();
        for v in &mesh.vertices[..11] {
            assert_eq!(v.position, [0.0, radius, 0.0]);
        }
    }

    #[test]
    fn cell_winding_matches_reference() {
        // stacks = 2, sectors = 3: rows are 4 vertices wide.
        let mesh = uv_sphere(1.0, 2, 3).unwrap();
        assert_eq!(&mesh.indices[..6], &[0, 4, 1, 1, 4, 5]);
        // Second cell of the first row.
        assert_eq!(&mesh.indices[6..12], &[1, 5, 2, 2, 5, 6]);
    }

    #[test]
    fn all_vertices_lie_on_the_sphere() {
        let radius = 3.0;
        let mesh = uv_sphere(radius, 12, 24).unwrap();
        for v in &mesh.vertices {
            let len = v.to_vec3().length();
            assert!((len - radius).abs() < 1e-4, "|v| = {len}");
        }
    }

    #[test]
    fn zero_stacks_is_degenerate_not_an_error() {
        let mesh = uv_sphere(1.0, 0, 16).unwrap();
        assert_eq!(mesh.vertex_count(), 17);
        assert!(mesh.indices.is_empty());
        assert!(mesh.vertices.iter().all(|v| v.position.iter().all(|c| c.is_finite())));
    }

    #[test]
    fn zero_sectors_is_degenerate_not_an_error() {
        let mesh = uv_sphere(1.0, 16, 0).unwrap();
        assert_eq!(mesh.vertex_count(), 17);
        assert!(mesh.indices.is_empty());
    }

    #[test]
    fn non_positive_radius_is_rejected() {
        assert!(matches!(uv_sphere(0.0, 8, 8), Err(MeshError::InvalidRadius(_))));
        assert!(matches!(uv_sphere(-1.0, 8, 8), Err(MeshError::InvalidRadius(_))));
        assert!(matches!(uv_sphere(f32::NAN, 8, 8), Err(MeshError::InvalidRadius(_))));
    }
}
