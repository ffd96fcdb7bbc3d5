//! # Mesh Errors
//!
//! Error types for mesh generation operations.

use glam::DVec3;
use thiserror::Error;

/// Errors that can occur during mesh generation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeshError {
    /// A cuboid extent is zero, negative or not finite
    #[error("Invalid geometry: size must be positive on every axis, got {size:?}")]
    InvalidGeometry { size: DVec3 },

    /// A cuboid corner is not finite
    #[error("Invalid geometry: origin must be finite, got {origin:?}")]
    InvalidOrigin { origin: DVec3 },
}

impl MeshError {
    /// Creates an invalid geometry error.
    pub fn invalid_geometry(size: DVec3) -> Self {
        Self::InvalidGeometry { size }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MeshError::invalid_geometry(DVec3::new(0.0, 1.0, 1.0));
        assert!(err.to_string().contains("Invalid geometry"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MeshError>();
    }
}
