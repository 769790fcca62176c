//! Procedural sphere meshes for the orbis demo.
//!
//! Two generators produce the same plain-data [`MeshData`]:
//!
//! - [`uv_sphere`] — latitude/longitude grid parametrization.
//! - [`icosphere`] — recursive icosahedron subdivision with shared-edge
//!   midpoint deduplication, so the output stays watertight at every depth.
//!
//! The crate is CPU-only: it knows nothing about GPU buffers.  Consumers
//! upload `MeshData` as-is (the vertex type is `bytemuck::Pod`).

pub mod icosphere;
pub mod mesh;
pub mod uv_sphere;
pub mod vertex;

pub use icosphere::{icosphere, MidpointCache};
pub use mesh::{MeshData, MeshError};
pub use uv_sphere::uv_sphere;
pub use vertex::Vertex;
