//! # Scene Handle
//!
//! WASM-friendly snapshot of an assembled scene.

use block_render::{Figure, RenderError};
use block_scene::Scene;
use wasm_bindgen::prelude::*;

/// Scene buffers and figure document handed to JavaScript.
///
/// # Example (JavaScript)
///
/// ```javascript
/// const scene = render_csv(text);
///
/// // Three.js: one BufferGeometry for every block
/// const geometry = new THREE.BufferGeometry();
/// geometry.setAttribute('position', new THREE.BufferAttribute(scene.vertices(), 3));
/// geometry.setIndex(new THREE.BufferAttribute(scene.indices(), 1));
///
/// // Plotly: the ready-made figure
/// const figure = JSON.parse(scene.figure_json());
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct SceneHandle {
    block_count: usize,
    edge_count: usize,
    /// Block corners as [x, y, z, ...], 8 per block
    vertices: Vec<f32>,
    /// Triangle indices into `vertices`, 36 per block
    indices: Vec<u32>,
    /// Area-weighted vertex normals as [nx, ny, nz, ...]
    normals: Vec<f32>,
    /// Category ordinal per block
    categories: Vec<u32>,
    /// Edge end points as [x0, y0, z0, x1, y1, z1, ...]
    edges: Vec<f32>,
    bounds: Vec<f64>,
    figure_json: String,
}

#[wasm_bindgen]
impl SceneHandle {
    /// Number of blocks.
    pub fn block_count(&self) -> usize {
        self.block_count
    }

    /// Number of edge segments.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Vertex buffer as a Float32Array.
    pub fn vertices(&self) -> Vec<f32> {
        self.vertices.clone()
    }

    /// Index buffer as a Uint32Array.
    pub fn indices(&self) -> Vec<u32> {
        self.indices.clone()
    }

    /// Normal buffer as a Float32Array.
    pub fn normals(&self) -> Vec<f32> {
        self.normals.clone()
    }

    /// Category ordinal of each block, see `VisualCategory::ALL`.
    pub fn categories(&self) -> Vec<u32> {
        self.categories.clone()
    }

    /// Edge end points as a Float32Array, two points per edge.
    pub fn edges(&self) -> Vec<f32> {
        self.edges.clone()
    }

    /// Padded axis maxima `[x, y, z]`.
    pub fn bounds(&self) -> Vec<f64> {
        self.bounds.clone()
    }

    /// Plotly figure document as JSON.
    pub fn figure_json(&self) -> String {
        self.figure_json.clone()
    }
}

impl SceneHandle {
    /// Snapshots a scene and its figure.
    pub fn new(scene: &Scene, figure: &Figure) -> Result<Self, RenderError> {
        let mut mesh = scene.combined_mesh();
        mesh.compute_normals();

        let edges = scene
            .edges()
            .iter()
            .flat_map(|e| e.start.as_vec3().to_array().into_iter().chain(e.end.as_vec3().to_array()))
            .collect();

        Ok(Self {
            block_count: scene.len(),
            edge_count: scene.edges().len(),
            vertices: mesh.vertices_f32(),
            indices: mesh.indices_u32(),
            normals: mesh.normals_f32().unwrap_or_default(),
            categories: scene.blocks().iter().map(|b| b.category.ordinal()).collect(),
            edges,
            bounds: scene.bounds().to_dvec3().to_array().to_vec(),
            figure_json: figure.to_json()?,
        })
    }
}
