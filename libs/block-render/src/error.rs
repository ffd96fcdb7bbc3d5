//! # Render Errors

use thiserror::Error;

/// Errors raised while rendering a figure.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The figure document could not be encoded as JSON
    #[error("Figure serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}
