//! # Coordinate Normalization
//!
//! Shifts a block model so its minimum corner sits at the origin.
//!
//! World coordinates of mining models are large (UTM eastings, northings and
//! elevations) while the blocks themselves are small; rendering works on
//! coordinates relative to the model minimum instead.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::record::BlockRecord;

/// A block paired with its position relative to the model minimum.
///
/// Derived once per model load and never mutated. The original record,
/// including its world `position`, is kept unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedBlock {
    index: usize,
    record: BlockRecord,
    normalized_position: DVec3,
}

impl NormalizedBlock {
    /// Pairs a record with its offset from `model_minimum`.
    ///
    /// `index` identifies the block in labels; it travels with the block so
    /// that filtering or reordering a normalized sequence keeps labels stable.
    pub fn new(index: usize, record: BlockRecord, model_minimum: DVec3) -> Self {
        let normalized_position = record.position - model_minimum;
        Self {
            index,
            record,
            normalized_position,
        }
    }

    /// Identifier of the block within its model.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// The source record.
    #[inline]
    pub fn record(&self) -> &BlockRecord {
        &self.record
    }

    /// Minimum corner relative to the model minimum.
    #[inline]
    pub fn normalized_position(&self) -> DVec3 {
        self.normalized_position
    }

    /// Extent along each axis.
    #[inline]
    pub fn size(&self) -> DVec3 {
        self.record.size
    }

    /// Corner opposite the normalized position.
    #[inline]
    pub fn normalized_max_corner(&self) -> DVec3 {
        self.normalized_position + self.record.size
    }
}

/// Computes the component-wise minimum of all block positions.
///
/// # Errors
///
/// Returns [`ModelError::EmptyModel`] when `blocks` is empty.
///
/// # Example
///
/// ```rust
/// use block_model::{model_minimum, BlockRecord};
/// use glam::DVec3;
///
/// let blocks = vec![
///     BlockRecord::new(DVec3::new(5.0, 1.0, 9.0), DVec3::ONE, "S", true),
///     BlockRecord::new(DVec3::new(2.0, 7.0, 3.0), DVec3::ONE, "L", false),
/// ];
/// assert_eq!(model_minimum(&blocks).unwrap(), DVec3::new(2.0, 1.0, 3.0));
/// ```
pub fn model_minimum(blocks: &[BlockRecord]) -> Result<DVec3, ModelError> {
    let (first, rest) = blocks.split_first().ok_or(ModelError::EmptyModel)?;
    Ok(rest
        .iter()
        .fold(first.position, |min, block| min.min(block.position)))
}

/// Normalizes a block model against its own minimum corner.
///
/// Output order matches input order and each block's index is its input
/// position. A model whose minimum is already the origin comes back with
/// `normalized_position == position` for every block.
///
/// # Errors
///
/// Returns [`ModelError::EmptyModel`] when `blocks` is empty.
pub fn normalize(blocks: &[BlockRecord]) -> Result<Vec<NormalizedBlock>, ModelError> {
    let minimum = model_minimum(blocks)?;
    log::debug!(
        "normalizing {} blocks against minimum ({}, {}, {})",
        blocks.len(),
        minimum.x,
        minimum.y,
        minimum.z
    );

    Ok(blocks
        .iter()
        .enumerate()
        .map(|(index, record)| NormalizedBlock::new(index, record.clone(), minimum))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn block(x: f64, y: f64, z: f64) -> BlockRecord {
        BlockRecord::new(DVec3::new(x, y, z), DVec3::splat(10.0), "S", true)
    }

    #[test]
    fn test_empty_model() {
        assert_eq!(normalize(&[]).unwrap_err(), ModelError::EmptyModel);
        assert_eq!(model_minimum(&[]).unwrap_err(), ModelError::EmptyModel);
    }

    #[test]
    fn test_single_block_at_origin() {
        let normalized = normalize(&[block(400_000.0, 3_700_000.0, 1_200.0)]).unwrap();
        assert_eq!(normalized.len(), 1);
        assert_eq!(normalized[0].normalized_position(), DVec3::ZERO);
    }

    #[test]
    fn test_minimum_is_per_axis() {
        // No single block holds the minimum on every axis
        let blocks = [block(30.0, 0.0, 5.0), block(0.0, 20.0, 7.0), block(10.0, 10.0, -3.0)];
        let normalized = normalize(&blocks).unwrap();
        assert_eq!(normalized[0].normalized_position(), DVec3::new(30.0, 0.0, 8.0));
        assert_eq!(normalized[1].normalized_position(), DVec3::new(0.0, 20.0, 10.0));
        assert_eq!(normalized[2].normalized_position(), DVec3::new(10.0, 10.0, 0.0));
    }

    #[test]
    fn test_all_components_non_negative() {
        let blocks = [
            block(-5.0, 100.0, 3.5),
            block(12.25, -40.0, 0.0),
            block(7.0, 8.0, -9.75),
        ];
        for n in normalize(&blocks).unwrap() {
            assert!(n.normalized_position().min_element() >= 0.0);
        }
    }

    #[test]
    fn test_original_position_retained() {
        let blocks = [block(400_010.0, 3_700_000.0, 1_200.0), block(400_000.0, 3_700_010.0, 1_210.0)];
        let normalized = normalize(&blocks).unwrap();
        assert_eq!(normalized[0].record().position, blocks[0].position);
        assert_eq!(normalized[1].record(), &blocks[1]);
    }

    #[test]
    fn test_relative_geometry_preserved() {
        let blocks = [block(400_000.5, 3_700_000.25, 1_200.0), block(400_030.5, 3_700_010.25, 1_210.0)];
        let normalized = normalize(&blocks).unwrap();
        let world = blocks[1].position - blocks[0].position;
        let local = normalized[1].normalized_position() - normalized[0].normalized_position();
        assert_relative_eq!(world.x, local.x);
        assert_relative_eq!(world.y, local.y);
        assert_relative_eq!(world.z, local.z);
    }

    #[test]
    fn test_idempotent_at_origin() {
        let blocks = [block(0.0, 0.0, 0.0), block(10.0, 0.0, 20.0)];
        let once = normalize(&blocks).unwrap();
        let records: Vec<_> = once
            .iter()
            .map(|n| {
                let mut r = n.record().clone();
                r.position = n.normalized_position();
                r
            })
            .collect();
        let twice = normalize(&records).unwrap();
        for (a, b) in once.iter().zip(&twice) {
            assert_eq!(a.normalized_position(), b.normalized_position());
            assert_eq!(b.normalized_position(), b.record().position);
        }
    }

    #[test]
    fn test_indices_follow_input_order() {
        let blocks = [block(3.0, 0.0, 0.0), block(1.0, 0.0, 0.0), block(2.0, 0.0, 0.0)];
        let indices: Vec<_> = normalize(&blocks).unwrap().iter().map(|n| n.index()).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn test_normalized_max_corner() {
        let normalized = normalize(&[block(5.0, 5.0, 5.0), block(0.0, 0.0, 0.0)]).unwrap();
        assert_eq!(normalized[0].normalized_max_corner(), DVec3::splat(15.0));
    }
}
