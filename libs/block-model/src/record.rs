//! # Block Record
//!
//! One geological cell of a block model.

use std::collections::BTreeMap;

use config::constants::DEFAULT_DENSITY;
use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::classify::{classify, VisualCategory};
use crate::error::ModelError;

/// A single block: a rectangular solid with geological attributes.
///
/// `position` is the minimum corner in world coordinates and `size` the
/// extent along each axis. Grades and density are carried through for
/// display only.
///
/// # Example
///
/// ```rust
/// use block_model::BlockRecord;
/// use glam::DVec3;
///
/// let block = BlockRecord::new(DVec3::new(400_000.0, 3_700_000.0, 1_200.0), DVec3::splat(10.0), "S", true)
///     .with_grade("au", 1.25)
///     .with_grade("cu", 0.45)
///     .with_density(2.65);
///
/// assert_eq!(block.grade("au"), Some(1.25));
/// assert!(block.validate(0).is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockRecord {
    /// Minimum corner in world coordinates
    pub position: DVec3,
    /// Extent along each axis; every component must be positive
    pub size: DVec3,
    /// Open-ended rock type label
    pub rock_type: String,
    /// Whether the block is ore-bearing
    pub ore_flag: bool,
    /// Assay name to grade, ordered by name
    pub grades: BTreeMap<String, f64>,
    /// Bulk density
    pub density: f64,
}

impl BlockRecord {
    /// Creates a block with no grades and the default density.
    pub fn new(position: DVec3, size: DVec3, rock_type: impl Into<String>, ore_flag: bool) -> Self {
        Self {
            position,
            size,
            rock_type: rock_type.into(),
            ore_flag,
            grades: BTreeMap::new(),
            density: DEFAULT_DENSITY,
        }
    }

    /// Adds or replaces an assay grade.
    pub fn with_grade(mut self, assay: impl Into<String>, value: f64) -> Self {
        self.grades.insert(assay.into(), value);
        self
    }

    /// Sets the bulk density.
    pub fn with_density(mut self, density: f64) -> Self {
        self.density = density;
        self
    }

    /// Returns the grade for an assay, if present.
    pub fn grade(&self, assay: &str) -> Option<f64> {
        self.grades.get(assay).copied()
    }

    /// Returns the corner opposite `position`.
    #[inline]
    pub fn max_corner(&self) -> DVec3 {
        self.position + self.size
    }

    /// Returns the visual category of this block.
    #[inline]
    pub fn category(&self) -> VisualCategory {
        classify(&self.rock_type, self.ore_flag)
    }

    /// Checks the data-model invariants.
    ///
    /// `index` is only used to label the error.
    ///
    /// [`parse_csv`](crate::parse_csv) enforces these rules while reading.
    /// Normalization and scene assembly do not call this: they only reject
    /// geometry they cannot build. Callers constructing records in code run
    /// it themselves before assembly.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidRecord`] when the position is not finite,
    /// a size component is not a positive finite number, a grade is negative
    /// or not finite, or the density is not positive.
    pub fn validate(&self, index: usize) -> Result<(), ModelError> {
        if !self.position.is_finite() {
            return Err(ModelError::invalid_record(
                index,
                format!("position must be finite: {:?}", self.position),
            ));
        }
        if !self.size.is_finite() || self.size.min_element() <= 0.0 {
            return Err(ModelError::invalid_record(
                index,
                format!("size must be positive: {:?}", self.size),
            ));
        }
        if let Some((assay, value)) = self
            .grades
            .iter()
            .find(|(_, value)| !value.is_finite() || **value < 0.0)
        {
            return Err(ModelError::invalid_record(
                index,
                format!("grade '{assay}' must be non-negative: {value}"),
            ));
        }
        if !self.density.is_finite() || self.density <= 0.0 {
            return Err(ModelError::invalid_record(
                index,
                format!("density must be positive: {}", self.density),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BlockRecord {
        BlockRecord::new(DVec3::new(1.0, 2.0, 3.0), DVec3::new(10.0, 20.0, 30.0), "L", false)
    }

    #[test]
    fn test_new_defaults() {
        let block = sample();
        assert!(block.grades.is_empty());
        assert_eq!(block.density, DEFAULT_DENSITY);
    }

    #[test]
    fn test_max_corner() {
        assert_eq!(sample().max_corner(), DVec3::new(11.0, 22.0, 33.0));
    }

    #[test]
    fn test_grades_replace() {
        let block = sample().with_grade("au", 0.5).with_grade("au", 0.7);
        assert_eq!(block.grades.len(), 1);
        assert_eq!(block.grade("au"), Some(0.7));
        assert_eq!(block.grade("cu"), None);
    }

    #[test]
    fn test_category() {
        assert_eq!(sample().category(), VisualCategory::NonOreOther);
    }

    #[test]
    fn test_validate_zero_size() {
        let mut block = sample();
        block.size.y = 0.0;
        let err = block.validate(5).unwrap_err();
        assert!(matches!(err, ModelError::InvalidRecord { index: 5, .. }));
    }

    #[test]
    fn test_validate_negative_size() {
        let mut block = sample();
        block.size.z = -1.0;
        assert!(block.validate(0).is_err());
    }

    #[test]
    fn test_validate_nan_position() {
        let mut block = sample();
        block.position.x = f64::NAN;
        assert!(block.validate(0).is_err());
    }

    #[test]
    fn test_validate_negative_grade() {
        let block = sample().with_grade("cu", -0.1);
        assert!(block.validate(0).is_err());
    }

    #[test]
    fn test_validate_density() {
        assert!(sample().with_density(0.0).validate(0).is_err());
        assert!(sample().with_density(2.7).validate(0).is_ok());
    }
}
