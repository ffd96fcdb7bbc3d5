//! # Scene
//!
//! The assembled, renderer-agnostic view of a block model.

use std::collections::BTreeMap;

use block_mesh::{CubeGeometry, EdgeSegment, Mesh};
use block_model::VisualCategory;
use config::constants::{CUBE_TRIANGLE_COUNT, CUBE_VERTEX_COUNT};
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// One block as it appears in the scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneBlock {
    /// Identifier carried over from the normalized block
    pub index: usize,
    /// Cuboid in normalized coordinates
    pub geometry: CubeGeometry,
    /// Visual category for fill color and legend grouping
    pub category: VisualCategory,
    /// Rock type label of the source block
    pub rock_type: String,
    /// Ore flag of the source block
    pub ore_flag: bool,
    /// Short name, e.g. `Block 3`
    pub label: String,
    /// Hover text, one fact per line
    pub hovertext: String,
}

impl SceneBlock {
    /// Formats the short block name.
    pub fn label_for(index: usize) -> String {
        format!("Block {index}")
    }

    /// Formats the hover text: block name, rock type and ore indicator.
    ///
    /// # Example
    ///
    /// ```rust
    /// use block_scene::SceneBlock;
    ///
    /// assert_eq!(SceneBlock::hovertext_for(2, "S", true), "Block 2\nRock: S\nOre: Yes");
    /// ```
    pub fn hovertext_for(index: usize, rock_type: &str, ore_flag: bool) -> String {
        let ore = if ore_flag { "Yes" } else { "No" };
        format!("Block {index}\nRock: {rock_type}\nOre: {ore}")
    }
}

/// Upper axis limits of the scene, including the margin.
///
/// Lower limits are always zero since blocks are normalized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisBounds {
    pub x_max: f64,
    pub y_max: f64,
    pub z_max: f64,
}

impl AxisBounds {
    /// Pads an extent by `margin` on every axis.
    pub fn padded(extent: DVec3, margin: f64) -> Self {
        let DVec3 { x, y, z } = extent + DVec3::splat(margin);
        Self {
            x_max: x,
            y_max: y,
            z_max: z,
        }
    }

    #[inline]
    pub fn to_dvec3(self) -> DVec3 {
        DVec3::new(self.x_max, self.y_max, self.z_max)
    }
}

/// An immutable scene built from a block model.
///
/// Blocks and edges keep input block order. Each block contributes exactly
/// twelve edges, in its cube's edge order; edges shared by touching blocks
/// are not merged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    blocks: Vec<SceneBlock>,
    edges: Vec<EdgeSegment>,
    extent: DVec3,
    margin: f64,
    bounds: AxisBounds,
}

impl Scene {
    pub(crate) fn new(blocks: Vec<SceneBlock>, edges: Vec<EdgeSegment>, extent: DVec3, margin: f64) -> Self {
        Self {
            blocks,
            edges,
            extent,
            margin,
            bounds: AxisBounds::padded(extent, margin),
        }
    }

    #[inline]
    pub fn blocks(&self) -> &[SceneBlock] {
        &self.blocks
    }

    #[inline]
    pub fn edges(&self) -> &[EdgeSegment] {
        &self.edges
    }

    /// Padded axis bounds.
    #[inline]
    pub fn bounds(&self) -> AxisBounds {
        self.bounds
    }

    /// Per-axis maximum of `normalized_position + size` before padding.
    #[inline]
    pub fn extent(&self) -> DVec3 {
        self.extent
    }

    /// Margin the bounds were padded with.
    #[inline]
    pub fn margin(&self) -> f64 {
        self.margin
    }

    /// Number of blocks.
    #[inline]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Returns true if the scene has no blocks.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Categories in block order.
    pub fn categories(&self) -> Vec<VisualCategory> {
        self.blocks.iter().map(|b| b.category).collect()
    }

    /// Number of blocks per category, for legends.
    pub fn category_counts(&self) -> BTreeMap<VisualCategory, usize> {
        let mut counts = BTreeMap::new();
        for block in &self.blocks {
            *counts.entry(block.category).or_insert(0) += 1;
        }
        counts
    }

    /// Merges every block's cuboid into one indexed mesh.
    ///
    /// Vertices stay unshared: block `i` owns vertices `8i..8i + 8`.
    pub fn combined_mesh(&self) -> Mesh {
        let mut mesh = Mesh::with_capacity(
            self.blocks.len() * CUBE_VERTEX_COUNT,
            self.blocks.len() * CUBE_TRIANGLE_COUNT,
        );
        for block in &self.blocks {
            mesh.merge(&block.geometry.to_mesh());
        }
        mesh
    }
}
