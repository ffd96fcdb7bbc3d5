//! # Block Render
//!
//! Presentation boundary for block model scenes. The scene carries category
//! tokens; this crate maps them to colors and lays the scene out as a
//! Plotly-compatible figure that can be embedded in a page.
//!
//! ## Usage
//!
//! ```rust
//! use block_model::{parse_csv, SAMPLE_MODEL_CSV};
//! use block_render::{html, Figure, FigureOptions};
//! use block_scene::build_scene;
//!
//! let scene = build_scene(&parse_csv(SAMPLE_MODEL_CSV).unwrap()).unwrap();
//! let figure = Figure::from_scene(&scene, &FigureOptions::default());
//! assert_eq!(figure.data.len(), 8 + 96);
//!
//! let page = html::page(&html::fragment(&figure).unwrap());
//! assert!(page.contains("<title>3D Block Model</title>"));
//! ```

pub mod error;
pub mod figure;
pub mod html;
pub mod palette;

pub use error::RenderError;
pub use figure::{Figure, FigureOptions, Trace};
pub use palette::category_color;

use block_scene::Scene;

/// Renders a scene straight to a standalone HTML page with default options.
///
/// # Errors
///
/// Returns [`RenderError::Serialize`] if the figure cannot be encoded.
pub fn render_page(scene: &Scene) -> Result<String, RenderError> {
    let figure = Figure::from_scene(scene, &FigureOptions::default());
    Ok(html::page(&html::fragment(&figure)?))
}
