//! Icosphere: recursively subdivided icosahedron.
//!
//! Each subdivision level splits every triangle into four, creating one new
//! vertex per *edge* rather than per triangle corner — the [`MidpointCache`]
//! is what collapses the two lookups from the two triangles sharing an edge
//! into a single appended vertex, keeping the mesh watertight.

use std::collections::HashMap;

use glam::Vec3;

use crate::mesh::{MeshData, MeshError};
use crate::vertex::Vertex;

/// The 20 faces of the seed icosahedron.  The visual result depends on this
/// exact connectivity; do not reorder.
const SEED_FACES: [[u32; 3]; 20] = [
    [0, 11, 5],
    [0, 5, 1],
    [0, 1, 7],
    [0, 7, 10],
    [0, 10, 11],
    [1, 5, 9],
    [5, 11, 4],
    [11, 10, 2],
    [10, 7, 6],
    [7, 1, 8],
    [3, 9, 4],
    [3, 4, 2],
    [3, 2, 6],
    [3, 6, 8],
    [3, 8, 9],
    [4, 9, 5],
    [2, 4, 11],
    [6, 2, 10],
    [8, 6, 7],
    [9, 8, 1],
];

/// The 12 icosahedron vertices — permutations of `(±1, ±t, 0)` and its
/// cyclic rotations, `t` the golden ratio — normalized onto the unit sphere.
fn seed_positions() -> Vec<Vec3> {
    let t = (1.0 + 5.0_f32.sqrt()) / 2.0;

    [
        Vec3::new(-1.0, t, 0.0),
        Vec3::new(1.0, t, 0.0),
        Vec3::new(-1.0, -t, 0.0),
        Vec3::new(1.0, -t, 0.0),
        Vec3::new(0.0, -1.0, t),
        Vec3::new(0.0, 1.0, t),
        Vec3::new(0.0, -1.0, -t),
        Vec3::new(0.0, 1.0, -t),
        Vec3::new(t, 0.0, -1.0),
        Vec3::new(t, 0.0, 1.0),
        Vec3::new(-t, 0.0, -1.0),
        Vec3::new(-t, 0.0, 1.0),
    ]
    .iter()
    .map(|v| v.normalize())
    .collect()
}

/// Deduplicates subdivision midpoints within one subdivision level.
///
/// Keyed on the canonicalized `(min, max)` endpoint pair, so the two
/// triangles sharing an edge resolve to the same appended vertex.  Entries
/// are only meaningful for the level that created them: indices from a
/// previous level could collide under the same pair key, so a fresh cache
/// is used per level.
#[derive(Debug, Default)]
pub struct MidpointCache {
    entries: HashMap<(u32, u32), u32>,
}

impl MidpointCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the unit-length midpoint of the edge `(p1, p2)`.
    ///
    /// The first call for an unordered pair computes
    /// `normalize((positions[p1] + positions[p2]) / 2)`, appends it to
    /// `positions`, and records the new index; every later call for the
    /// same pair (in either order) returns that index without growing
    /// `positions`.
    pub fn get_or_create(&mut self, p1: u32, p2: u32, positions: &mut Vec<Vec3>) -> u32 {
        let key = if p1 < p2 { (p1, p2) } else { (p2, p1) };
        if let Some(&index) = self.entries.get(&key) {
            return index;
        }

        // Endpoints are distinct unit vectors and never antipodal for the
        // icosahedron seed and its refinements, so the midpoint cannot be
        // the zero vector and normalize() is safe.
        let mid = ((positions[p1 as usize] + positions[p2 as usize]) * 0.5).normalize();
        let index = positions.len() as u32;
        positions.push(mid);
        self.entries.insert(key, index);
        index
    }
}

/// Generates an icosphere of the given `radius`.
///
/// `subdivisions == 0` returns the bare icosahedron (12 vertices, 20
/// faces).  Each level replaces every face `(a, b, c)` with the four faces
/// `(a, ab, ca), (b, bc, ab), (c, ca, bc), (ab, bc, ca)` built from the
/// renormalized edge midpoints, so face count grows as `20 · 4^s`.
pub fn icosphere(radius: f32, subdivisions: u32) -> Result<MeshData, MeshError> {
    if !radius.is_finite() || radius <= 0.0 {
        return Err(MeshError::InvalidRadius(radius));
    }

    let mut positions = seed_positions();
    let mut faces: Vec<[u32; 3]> = SEED_FACES.to_vec();

    for _ in 0..subdivisions {
        let mut cache = MidpointCache::new();
        let mut next = Vec::with_capacity(faces.len() * 4);

        for &[a, b, c] in &faces {
            let ab = cache.get_or_create(a, b, &mut positions);
            let bc = cache.get_or_create(b, c, &mut positions);
            let ca = cache.get_or_create(c, a, &mut positions);

            next.push([a, ab, ca]);
            next.push([b, bc, ab]);
            next.push([c, ca, bc]);
            next.push([ab, bc, ca]);
        }

        faces = next;
    }

    let mut mesh = MeshData::with_capacity(positions.len(), faces.len());
    mesh.vertices
        .extend(positions.iter().map(|p| Vertex::from(*p * radius)));
    for face in &faces {
        mesh.indices.extend_from_slice(face);
    }

    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn base_case_is_the_bare_icosahedron() {
        let mesh = icosphere(1.0, 0).unwrap();
        assert_eq!(mesh.vertex_count(), 12);
        assert_eq!(mesh.indices.len(), 60);
        mesh.validate().unwrap();
    }

    #[test]
    fn face_and_vertex_counts_follow_subdivision() {
        for s in 0..=4 {
            let mesh = icosphere(1.0, s).unwrap();
            let faces = 20 * 4_usize.pow(s);
            assert_eq!(mesh.triangle_count(), faces);
            // Euler's formula for a closed triangulated sphere.
            assert_eq!(mesh.vertex_count(), faces / 2 + 2);
            mesh.validate().unwrap();
        }
    }

    #[test]
    fn every_vertex_lies_on_the_sphere() {
        let radius = 2.5;
        for s in 0..=4 {
            let mesh = icosphere(radius, s).unwrap();
            for v in &mesh.vertices {
                let len = v.to_vec3().length();
                assert!(
                    (len / radius - 1.0).abs() < 1e-4,
                    "subdivision {s}: |v| = {len}"
                );
            }
        }
    }

    #[test]
    fn shared_edges_reference_shared_indices() {
        // In a watertight triangulated sphere every undirected edge is used
        // by exactly two faces.  Coincidentally-equal duplicate vertices at
        // an edge would show up here as edges used only once.
        let mesh = icosphere(1.0, 2).unwrap();
        let mut edge_uses: HashMap<(u32, u32), u32> = HashMap::new();
        for t in 0..mesh.triangle_count() {
            let [a, b, c] = mesh.triangle(t);
            for (p, q) in [(a, b), (b, c), (c, a)] {
                let key = if p < q { (p, q) } else { (q, p) };
                *edge_uses.entry(key).or_default() += 1;
            }
        }
        assert!(edge_uses.values().all(|&uses| uses == 2));
    }

    #[test]
    fn midpoint_cache_creates_each_edge_vertex_once() {
        let mut positions = vec![Vec3::X, Vec3::Y, Vec3::Z];
        let mut cache = MidpointCache::new();

        let first = cache.get_or_create(0, 1, &mut positions);
        assert_eq!(first, 3);
        assert_eq!(positions.len(), 4);

        // Repeat and reversed lookups return the same index without
        // appending.
        assert_eq!(cache.get_or_create(0, 1, &mut positions), first);
        assert_eq!(cache.get_or_create(1, 0, &mut positions), first);
        assert_eq!(positions.len(), 4);

        // A distinct pair appends a new vertex.
        let second = cache.get_or_create(1, 2, &mut positions);
        assert_eq!(second, 4);
        assert_eq!(positions.len(), 5);
    }

    #[test]
    fn midpoints_are_renormalized() {
        let mut positions = vec![Vec3::X, Vec3::Y];
        let mut cache = MidpointCache::new();
        let idx = cache.get_or_create(0, 1, &mut positions);
        assert!((positions[idx as usize].length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn non_positive_radius_is_rejected() {
        assert!(matches!(icosphere(0.0, 1), Err(MeshError::InvalidRadius(_))));
        assert!(matches!(icosphere(-2.0, 1), Err(MeshError::InvalidRadius(_))));
    }
}
