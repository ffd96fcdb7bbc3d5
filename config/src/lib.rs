//! # Config Crate
//!
//! Centralized configuration constants for the block model scene pipeline.
//! All magic numbers and tunable parameters are defined here so that the
//! model, mesh, scene and render crates agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{SCENE_MARGIN, S_TYPE_ROCK};
//!
//! // Axis bounds are padded by the scene margin
//! let x_extent = 40.0;
//! assert_eq!(x_extent + SCENE_MARGIN, 50.0);
//!
//! // Rock type grouping compares against a single label
//! assert_eq!(S_TYPE_ROCK, "S");
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Presentation Separate**: Palette and figure values live in their own
//!   section and are only read by the render boundary

pub mod constants;
