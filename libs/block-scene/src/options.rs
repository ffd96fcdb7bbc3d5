//! Scene assembly options.

use config::constants::{PARALLEL_BLOCK_THRESHOLD, SCENE_MARGIN};

use crate::error::SceneError;

/// Tunables for [`assemble_with`](crate::assemble_with).
///
/// # Examples
/// ```
/// use block_scene::SceneOptions;
/// let options = SceneOptions::default();
/// assert_eq!(options.margin, 10.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneOptions {
    /// Padding added to every axis maximum
    pub margin: f64,
    /// Whether large models may be assembled on the rayon pool
    pub parallel: bool,
    /// Block count at which parallel assembly starts
    pub parallel_threshold: usize,
}

impl SceneOptions {
    /// Builds options with a custom margin.
    ///
    /// # Examples
    /// ```
    /// use block_scene::SceneOptions;
    /// let options = SceneOptions::new(0.0).expect("valid margin");
    /// assert_eq!(options.margin, 0.0);
    /// assert!(SceneOptions::new(-1.0).is_err());
    /// ```
    pub fn new(margin: f64) -> Result<Self, SceneError> {
        let options = Self {
            margin,
            ..Self::default()
        };
        options.validate()?;
        Ok(options)
    }

    /// Forces sequential assembly.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Checks that the margin is a non-negative finite number.
    pub fn validate(&self) -> Result<(), SceneError> {
        if !self.margin.is_finite() || self.margin < 0.0 {
            return Err(SceneError::InvalidOptions {
                message: format!("margin must be non-negative: {}", self.margin),
            });
        }
        Ok(())
    }
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            margin: SCENE_MARGIN,
            parallel: true,
            parallel_threshold: PARALLEL_BLOCK_THRESHOLD,
        }
    }
}
