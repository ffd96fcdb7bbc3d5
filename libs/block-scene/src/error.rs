//! # Scene Errors

use block_mesh::MeshError;
use block_model::ModelError;
use thiserror::Error;

/// Errors raised while assembling a scene.
///
/// Assembly never skips a block: the first failing block, in input order,
/// fails the whole call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SceneError {
    /// Model-level failure, including an empty model
    #[error(transparent)]
    Model(#[from] ModelError),

    /// A block's cuboid could not be built
    #[error("Block {index}: {source}")]
    Mesh {
        index: usize,
        #[source]
        source: MeshError,
    },

    /// Assembly options are out of range
    #[error("Invalid scene options: {message}")]
    InvalidOptions { message: String },
}

impl SceneError {
    /// Returns true for the empty-model failure.
    pub fn is_empty_model(&self) -> bool {
        matches!(self, Self::Model(ModelError::EmptyModel))
    }
}
