//! # Mesh Data Structure
//!
//! Indexed triangle mesh used to hand block geometry to GPU renderers.

use config::constants::DEGENERATE_AREA_EPSILON;
use glam::DVec3;

/// A triangle mesh with vertices and indices.
///
/// Geometry is kept in f64; conversion to f32 only happens when buffers are
/// exported for a renderer.
///
/// # Example
///
/// ```rust
/// use block_mesh::Mesh;
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
/// mesh.add_triangle(0, 1, 2);
/// assert!(mesh.validate());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    vertices: Vec<DVec3>,
    triangles: Vec<[u32; 3]>,
    normals: Option<Vec<DVec3>>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            triangles: Vec::with_capacity(triangle_count),
            normals: None,
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the mesh has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        self.normals = None;
        index
    }

    /// Adds a triangle by vertex indices.
    pub fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.triangles.push([v0, v1, v2]);
        self.normals = None;
    }

    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Vertex normals, if [`Mesh::compute_normals`] ran since the last edit.
    pub fn normals(&self) -> Option<&[DVec3]> {
        self.normals.as_deref()
    }

    /// Computes area-weighted vertex normals from the triangle winding.
    pub fn compute_normals(&mut self) {
        let mut normals = vec![DVec3::ZERO; self.vertices.len()];

        for tri in &self.triangles {
            let [a, b, c] = tri.map(|i| self.vertices[i as usize]);
            let normal = (b - a).cross(c - a);
            for &i in tri {
                normals[i as usize] += normal;
            }
        }

        for normal in &mut normals {
            *normal = normal.normalize_or_zero();
        }

        self.normals = Some(normals);
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns `None` for an empty mesh.
    pub fn bounding_box(&self) -> Option<(DVec3, DVec3)> {
        let (first, rest) = self.vertices.split_first()?;
        Some(
            rest.iter()
                .fold((*first, *first), |(min, max), v| (min.min(*v), max.max(*v))),
        )
    }

    /// Appends another mesh, offsetting its indices past this mesh's vertices.
    pub fn merge(&mut self, other: &Mesh) {
        let offset = self.vertices.len() as u32;

        self.vertices.extend_from_slice(&other.vertices);
        self.triangles
            .extend(other.triangles.iter().map(|tri| tri.map(|i| i + offset)));

        self.normals = match (self.normals.take(), &other.normals) {
            (Some(mut mine), Some(theirs)) => {
                mine.extend_from_slice(theirs);
                Some(mine)
            }
            _ => None,
        };
    }

    /// Validates the mesh.
    ///
    /// Checks that every index is in range and that no triangle repeats a
    /// vertex or has (near) zero area.
    pub fn validate(&self) -> bool {
        let vertex_count = self.vertices.len() as u32;

        self.triangles.iter().all(|&[a, b, c]| {
            if a >= vertex_count || b >= vertex_count || c >= vertex_count {
                return false;
            }
            if a == b || b == c || a == c {
                return false;
            }
            let [va, vb, vc] = [a, b, c].map(|i| self.vertices[i as usize]);
            (vb - va).cross(vc - va).length() >= DEGENERATE_AREA_EPSILON
        })
    }

    /// Exports vertices as a flat `[x, y, z, ...]` f32 buffer.
    pub fn vertices_f32(&self) -> Vec<f32> {
        self.vertices
            .iter()
            .flat_map(|v| v.as_vec3().to_array())
            .collect()
    }

    /// Exports triangle indices as a flat `[i0, i1, i2, ...]` buffer.
    pub fn indices_u32(&self) -> Vec<u32> {
        self.triangles.iter().flatten().copied().collect()
    }

    /// Exports normals as a flat f32 buffer, if computed.
    pub fn normals_f32(&self) -> Option<Vec<f32>> {
        self.normals
            .as_ref()
            .map(|normals| normals.iter().flat_map(|n| n.as_vec3().to_array()).collect())
    }
}
