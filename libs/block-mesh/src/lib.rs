//! # Block Mesh
//!
//! Cuboid mesh generation for block models.
//!
//! ## Architecture
//!
//! ```text
//! (origin, size) → build_cube → CubeGeometry → to_mesh → Mesh → f32/u32 buffers
//! ```
//!
//! Cubes never share vertices: every block is an independent solid even
//! when it touches its neighbours.
//!
//! ## Usage
//!
//! ```rust
//! use block_mesh::build_cube;
//! use glam::DVec3;
//!
//! let cube = build_cube(DVec3::ZERO, DVec3::splat(10.0)).unwrap();
//! assert_eq!(cube.vertices().len(), 8);
//! assert_eq!(cube.triangles().len(), 12);
//! assert_eq!(cube.edges().len(), 12);
//! ```

pub mod cube;
pub mod error;
pub mod mesh;

pub use cube::{build_cube, CubeGeometry, EdgeSegment, CUBE_EDGES, CUBE_TRIANGLES};
pub use error::MeshError;
pub use mesh::Mesh;
