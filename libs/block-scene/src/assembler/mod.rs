//! # Scene Assembly
//!
//! Folds normalized blocks into a [`Scene`].
//!
//! Per-block work (cuboid construction and classification) is independent
//! across blocks. With the `parallel` feature, models at or above the
//! configured threshold build their blocks on the rayon pool; results are
//! merged back in input order, so sequential and parallel assembly produce
//! identical scenes.

use block_mesh::build_cube;
use block_model::{classify, normalize, BlockRecord, ModelError, NormalizedBlock};
use glam::DVec3;

use crate::error::SceneError;
use crate::options::SceneOptions;
use crate::scene::{Scene, SceneBlock};

/// Assembles a scene with default options.
///
/// # Errors
///
/// - [`SceneError::Model`] with [`ModelError::EmptyModel`] for zero blocks
/// - [`SceneError::Mesh`] naming the first block whose size is not positive
pub fn assemble(blocks: &[NormalizedBlock]) -> Result<Scene, SceneError> {
    assemble_with(blocks, &SceneOptions::default())
}

/// Assembles a scene.
///
/// For every block, in input order: build its cuboid from the normalized
/// position and size, classify it, label it, and append its twelve edges
/// as point pairs. Bounds are the per-axis maximum of
/// `normalized_position + size`, padded by `options.margin`.
///
/// # Errors
///
/// See [`assemble`]; additionally [`SceneError::InvalidOptions`] for a
/// negative or non-finite margin.
pub fn assemble_with(blocks: &[NormalizedBlock], options: &SceneOptions) -> Result<Scene, SceneError> {
    options.validate()?;
    if blocks.is_empty() {
        return Err(ModelError::EmptyModel.into());
    }

    let built = build_blocks(blocks, options)?;

    let mut edges = Vec::with_capacity(built.len() * block_mesh::CUBE_EDGES.len());
    let mut extent = DVec3::splat(f64::NEG_INFINITY);
    for (block, scene_block) in blocks.iter().zip(&built) {
        extent = extent.max(block.normalized_max_corner());
        edges.extend(scene_block.geometry.edge_segments());
    }

    log::debug!(
        "assembled scene: {} blocks, {} edges, extent ({}, {}, {})",
        built.len(),
        edges.len(),
        extent.x,
        extent.y,
        extent.z
    );

    Ok(Scene::new(built, edges, extent, options.margin))
}

/// Normalizes raw records and assembles them with default options.
///
/// # Errors
///
/// See [`assemble`].
pub fn build_scene(records: &[BlockRecord]) -> Result<Scene, SceneError> {
    let normalized = normalize(records)?;
    assemble(&normalized)
}

#[cfg(feature = "parallel")]
fn build_blocks(blocks: &[NormalizedBlock], options: &SceneOptions) -> Result<Vec<SceneBlock>, SceneError> {
    use rayon::prelude::*;

    if options.parallel && blocks.len() >= options.parallel_threshold {
        log::debug!("building {} blocks on the rayon pool", blocks.len());
        let results: Vec<_> = blocks.par_iter().map(build_block).collect();
        // First failure in input order
        return results.into_iter().collect();
    }
    blocks.iter().map(build_block).collect()
}

#[cfg(not(feature = "parallel"))]
fn build_blocks(blocks: &[NormalizedBlock], _options: &SceneOptions) -> Result<Vec<SceneBlock>, SceneError> {
    blocks.iter().map(build_block).collect()
}

fn build_block(block: &NormalizedBlock) -> Result<SceneBlock, SceneError> {
    let index = block.index();
    let record = block.record();

    let geometry = build_cube(block.normalized_position(), block.size())
        .map_err(|source| SceneError::Mesh { index, source })?;
    let category = classify(&record.rock_type, record.ore_flag);

    log::trace!("block {index}: {category:?} at {:?}", block.normalized_position());

    Ok(SceneBlock {
        index,
        geometry,
        category,
        rock_type: record.rock_type.clone(),
        ore_flag: record.ore_flag,
        label: SceneBlock::label_for(index),
        hovertext: SceneBlock::hovertext_for(index, &record.rock_type, record.ore_flag),
    })
}
