//! # Block Scene
//!
//! Assembles a normalized block model into an immutable [`Scene`]: one
//! colored cuboid per block, every block's wireframe edges, and padded axis
//! bounds.
//!
//! ## Architecture
//!
//! ```text
//! NormalizedBlock[] → assemble → Scene { blocks, edges, bounds }
//!                       ├─ block_mesh::build_cube
//!                       └─ block_model::classify
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use block_model::{parse_csv, SAMPLE_MODEL_CSV};
//! use block_scene::build_scene;
//!
//! let records = parse_csv(SAMPLE_MODEL_CSV).unwrap();
//! let scene = build_scene(&records).unwrap();
//! assert_eq!(scene.blocks().len(), 8);
//! assert_eq!(scene.edges().len(), 96);
//! ```

pub mod assembler;
pub mod error;
pub mod options;
pub mod scene;

pub use assembler::{assemble, assemble_with, build_scene};
pub use error::SceneError;
pub use options::SceneOptions;
pub use scene::{AxisBounds, Scene, SceneBlock};
