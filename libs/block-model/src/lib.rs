//! # Block Model
//!
//! Data model and model-level transforms for mining block models.
//!
//! ## Architecture
//!
//! ```text
//! CSV text → ingest → BlockRecord[] → normalize → NormalizedBlock[]
//!                                   ↘ classify  → VisualCategory
//! ```
//!
//! Everything here is pure: inputs are borrowed, outputs are fresh values,
//! and no call keeps state between invocations.
//!
//! ## Usage
//!
//! ```rust
//! use block_model::{classify, normalize, BlockRecord, VisualCategory};
//! use glam::DVec3;
//!
//! let blocks = vec![
//!     BlockRecord::new(DVec3::new(400_000.0, 3_700_000.0, 1_200.0), DVec3::splat(10.0), "S", true),
//!     BlockRecord::new(DVec3::new(400_010.0, 3_700_000.0, 1_200.0), DVec3::splat(10.0), "L", false),
//! ];
//!
//! let normalized = normalize(&blocks).unwrap();
//! assert_eq!(normalized[0].normalized_position(), DVec3::ZERO);
//! assert_eq!(normalized[1].normalized_position(), DVec3::new(10.0, 0.0, 0.0));
//!
//! assert_eq!(classify("S", true), VisualCategory::OreRock);
//! ```

pub mod classify;
pub mod error;
pub mod ingest;
pub mod normalize;
pub mod record;

pub use classify::{classify, RockGroup, VisualCategory};
pub use error::{IngestError, ModelError};
pub use ingest::{parse_csv, SAMPLE_MODEL_CSV};
pub use normalize::{model_minimum, normalize, NormalizedBlock};
pub use record::BlockRecord;
