//! # Cuboid Primitive
//!
//! Builds the geometry of one block: 8 corners, 12 triangles and 12
//! wireframe edges.
//!
//! ## Vertex Order
//!
//! ```text
//!        7 ─────── 6          z
//!       ╱│        ╱│          │  y
//!      4 ─────── 5 │          │ ╱
//!      │ 3 ──────│ 2          │╱
//!      │╱        │╱           └──── x
//!      0 ─────── 1
//! ```
//!
//! Bottom face `0..4` then top face `4..8`, both counter-clockwise when seen
//! from above. Every triangle winds counter-clockwise seen from outside, so
//! its right-hand normal points away from the centroid.

use config::constants::{CUBE_EDGE_COUNT, CUBE_TRIANGLE_COUNT, CUBE_VERTEX_COUNT};
use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::error::MeshError;
use crate::mesh::Mesh;

/// Triangle indices shared by every cube, two per face.
pub const CUBE_TRIANGLES: [[u32; 3]; CUBE_TRIANGLE_COUNT] = [
    // Bottom (z = min), normal -z
    [0, 2, 1],
    [0, 3, 2],
    // Top (z = max), normal +z
    [4, 5, 6],
    [4, 6, 7],
    // Front (y = min), normal -y
    [0, 1, 5],
    [0, 5, 4],
    // Back (y = max), normal +y
    [2, 3, 7],
    [2, 7, 6],
    // Left (x = min), normal -x
    [3, 0, 4],
    [3, 4, 7],
    // Right (x = max), normal +x
    [1, 2, 6],
    [1, 6, 5],
];

/// Edge indices shared by every cube.
pub const CUBE_EDGES: [[u32; 2]; CUBE_EDGE_COUNT] = [
    // Bottom ring
    [0, 1],
    [1, 2],
    [2, 3],
    [3, 0],
    // Top ring
    [4, 5],
    [5, 6],
    [6, 7],
    [7, 4],
    // Verticals
    [0, 4],
    [1, 5],
    [2, 6],
    [3, 7],
];

/// A wireframe line segment in scene coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeSegment {
    pub start: DVec3,
    pub end: DVec3,
}

impl EdgeSegment {
    #[inline]
    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }
}

/// Geometry of one cuboid block.
///
/// Owns its vertices; triangle and edge indices refer into them and follow
/// [`CUBE_TRIANGLES`] and [`CUBE_EDGES`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CubeGeometry {
    vertices: [DVec3; CUBE_VERTEX_COUNT],
}

impl CubeGeometry {
    /// Corner positions in canonical order.
    #[inline]
    pub fn vertices(&self) -> &[DVec3; CUBE_VERTEX_COUNT] {
        &self.vertices
    }

    /// Triangle indices with outward winding.
    #[inline]
    pub fn triangles(&self) -> &'static [[u32; 3]; CUBE_TRIANGLE_COUNT] {
        &CUBE_TRIANGLES
    }

    /// Edge index pairs.
    #[inline]
    pub fn edges(&self) -> &'static [[u32; 2]; CUBE_EDGE_COUNT] {
        &CUBE_EDGES
    }

    /// Minimum corner.
    #[inline]
    pub fn origin(&self) -> DVec3 {
        self.vertices[0]
    }

    /// Maximum corner.
    #[inline]
    pub fn max_corner(&self) -> DVec3 {
        self.vertices[6]
    }

    /// Center of the cuboid.
    pub fn centroid(&self) -> DVec3 {
        (self.vertices[0] + self.vertices[6]) * 0.5
    }

    /// Unnormalized right-hand normal of triangle `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= 12`.
    pub fn triangle_normal(&self, index: usize) -> DVec3 {
        let [a, b, c] = CUBE_TRIANGLES[index].map(|i| self.vertices[i as usize]);
        (b - a).cross(c - a)
    }

    /// Resolves edge `index` to its end points.
    ///
    /// # Panics
    ///
    /// Panics if `index >= 12`.
    pub fn edge_segment(&self, index: usize) -> EdgeSegment {
        let [start, end] = CUBE_EDGES[index];
        EdgeSegment {
            start: self.vertices[start as usize],
            end: self.vertices[end as usize],
        }
    }

    /// All twelve edges as point pairs, in [`CUBE_EDGES`] order.
    pub fn edge_segments(&self) -> [EdgeSegment; CUBE_EDGE_COUNT] {
        std::array::from_fn(|i| self.edge_segment(i))
    }

    /// Converts to an indexed mesh with 8 vertices and 12 triangles.
    pub fn to_mesh(&self) -> Mesh {
        let mut mesh = Mesh::with_capacity(CUBE_VERTEX_COUNT, CUBE_TRIANGLE_COUNT);
        for v in &self.vertices {
            mesh.add_vertex(*v);
        }
        for [a, b, c] in CUBE_TRIANGLES {
            mesh.add_triangle(a, b, c);
        }
        mesh
    }
}

/// Builds the cuboid spanning `origin` to `origin + size`.
///
/// Pure and deterministic: identical inputs give bit-identical geometry,
/// and calls share no state.
///
/// # Errors
///
/// Returns [`MeshError::InvalidGeometry`] if any size component is not a
/// positive finite number, and [`MeshError::InvalidOrigin`] if the origin is
/// not finite.
///
/// # Example
///
/// ```rust
/// use block_mesh::build_cube;
/// use glam::DVec3;
///
/// let cube = build_cube(DVec3::new(10.0, 0.0, 0.0), DVec3::new(10.0, 20.0, 30.0)).unwrap();
/// assert_eq!(cube.vertices()[0], DVec3::new(10.0, 0.0, 0.0));
/// assert_eq!(cube.vertices()[6], DVec3::new(20.0, 20.0, 30.0));
///
/// assert!(build_cube(DVec3::ZERO, DVec3::new(0.0, 1.0, 1.0)).is_err());
/// ```
pub fn build_cube(origin: DVec3, size: DVec3) -> Result<CubeGeometry, MeshError> {
    if !size.is_finite() || size.min_element() <= 0.0 {
        return Err(MeshError::invalid_geometry(size));
    }
    if !origin.is_finite() {
        return Err(MeshError::InvalidOrigin { origin });
    }

    let DVec3 { x, y, z } = origin;
    let DVec3 { x: x1, y: y1, z: z1 } = origin + size;

    Ok(CubeGeometry {
        vertices: [
            // Bottom face
            DVec3::new(x, y, z),
            DVec3::new(x1, y, z),
            DVec3::new(x1, y1, z),
            DVec3::new(x, y1, z),
            // Top face
            DVec3::new(x, y, z1),
            DVec3::new(x1, y, z1),
            DVec3::new(x1, y1, z1),
            DVec3::new(x, y1, z1),
        ],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::collections::{HashMap, HashSet};

    fn unit() -> CubeGeometry {
        build_cube(DVec3::ZERO, DVec3::splat(10.0)).unwrap()
    }

    #[test]
    fn test_canonical_vertex_order() {
        let cube = build_cube(DVec3::new(1.0, 2.0, 3.0), DVec3::new(10.0, 20.0, 30.0)).unwrap();
        let expected = [
            DVec3::new(1.0, 2.0, 3.0),
            DVec3::new(11.0, 2.0, 3.0),
            DVec3::new(11.0, 22.0, 3.0),
            DVec3::new(1.0, 22.0, 3.0),
            DVec3::new(1.0, 2.0, 33.0),
            DVec3::new(11.0, 2.0, 33.0),
            DVec3::new(11.0, 22.0, 33.0),
            DVec3::new(1.0, 22.0, 33.0),
        ];
        assert_eq!(cube.vertices(), &expected);
    }

    #[test]
    fn test_vertices_distinct() {
        let cube = unit();
        let distinct: HashSet<_> = cube.vertices().iter().map(|v| v.to_array().map(f64::to_bits)).collect();
        assert_eq!(distinct.len(), 8);
    }

    #[test]
    fn test_triangles_face_outward() {
        let cube = build_cube(DVec3::new(-3.0, 4.0, 100.0), DVec3::new(2.0, 5.0, 0.5)).unwrap();
        let centroid = cube.centroid();
        for (i, tri) in cube.triangles().iter().enumerate() {
            let face_center = tri
                .iter()
                .map(|&v| cube.vertices()[v as usize])
                .sum::<DVec3>()
                / 3.0;
            let normal = cube.triangle_normal(i);
            assert!(
                normal.dot(face_center - centroid) > 0.0,
                "triangle {i} {tri:?} faces inward"
            );
        }
    }

    #[test]
    fn test_two_triangles_per_face() {
        let cube = unit();
        let mut per_direction: HashMap<[i64; 3], usize> = HashMap::new();
        for i in 0..12 {
            let n = cube.triangle_normal(i).normalize();
            *per_direction.entry(n.round().as_i64vec3().to_array()).or_default() += 1;
        }
        assert_eq!(per_direction.len(), 6);
        assert!(per_direction.values().all(|&count| count == 2));
    }

    #[test]
    fn test_faces_cover_full_area() {
        let cube = build_cube(DVec3::ZERO, DVec3::new(1.0, 2.0, 3.0)).unwrap();
        let area: f64 = (0..12).map(|i| cube.triangle_normal(i).length() / 2.0).sum();
        assert_relative_eq!(area, 2.0 * (1.0 * 2.0 + 2.0 * 3.0 + 1.0 * 3.0));
    }

    #[test]
    fn test_every_vertex_touches_three_edges() {
        let mut degree = [0; 8];
        for [a, b] in CUBE_EDGES {
            degree[a as usize] += 1;
            degree[b as usize] += 1;
        }
        assert_eq!(degree, [3; 8]);
    }

    #[test]
    fn test_edges_are_axis_aligned_with_block_extent() {
        let size = DVec3::new(4.0, 5.0, 6.0);
        let cube = build_cube(DVec3::ONE, size).unwrap();
        let mut lengths: Vec<f64> = cube.edge_segments().iter().map(EdgeSegment::length).collect();
        lengths.sort_by(f64::total_cmp);
        assert_eq!(lengths, vec![4.0, 4.0, 4.0, 4.0, 5.0, 5.0, 5.0, 5.0, 6.0, 6.0, 6.0, 6.0]);
    }

    #[test]
    fn test_edges_unique() {
        let edges: HashSet<_> = CUBE_EDGES
            .iter()
            .map(|&[a, b]| (a.min(b), a.max(b)))
            .collect();
        assert_eq!(edges.len(), 12);
    }

    #[test]
    fn test_edge_segment_resolves_indices() {
        let cube = unit();
        let segment = cube.edge_segment(8);
        assert_eq!(segment.start, DVec3::ZERO);
        assert_eq!(segment.end, DVec3::new(0.0, 0.0, 10.0));
    }

    #[test]
    fn test_to_mesh_validates() {
        let mesh = unit().to_mesh();
        assert_eq!(mesh.vertex_count(), 8);
        assert_eq!(mesh.triangle_count(), 12);
        assert!(mesh.validate());
        assert_eq!(mesh.bounding_box(), Some((DVec3::ZERO, DVec3::splat(10.0))));
    }

    #[test]
    fn test_deterministic() {
        let origin = DVec3::new(0.1, 0.2, 0.3);
        let size = DVec3::new(0.7, 1.1, 13.0);
        assert_eq!(build_cube(origin, size), build_cube(origin, size));
    }

    #[test]
    fn test_rejects_zero_size() {
        let err = build_cube(DVec3::ZERO, DVec3::new(0.0, 10.0, 10.0)).unwrap_err();
        assert!(matches!(err, MeshError::InvalidGeometry { .. }));
    }

    #[test]
    fn test_rejects_negative_and_nan_size() {
        assert!(build_cube(DVec3::ZERO, DVec3::new(10.0, -1.0, 10.0)).is_err());
        assert!(build_cube(DVec3::ZERO, DVec3::new(10.0, 10.0, f64::NAN)).is_err());
    }

    #[test]
    fn test_rejects_infinite_origin() {
        let err = build_cube(DVec3::new(f64::INFINITY, 0.0, 0.0), DVec3::ONE).unwrap_err();
        assert!(matches!(err, MeshError::InvalidOrigin { .. }));
    }
}
