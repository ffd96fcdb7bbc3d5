//! WASM-facing entry points for the block model pipeline.
//!
//! This crate is compiled to a `cdylib` and consumed from JavaScript via
//! `wasm-bindgen`. Native tests use `render_csv_internal`, which exposes Rust
//! error types directly instead of `JsValue`s.
//!
//! ```
//! let handle = block_model_wasm::render_csv_internal(block_model::SAMPLE_MODEL_CSV).unwrap();
//! assert_eq!(handle.block_count(), 8);
//! ```

use block_model::{normalize, parse_csv, IngestError};
use block_render::{Figure, FigureOptions, RenderError};
use block_scene::{assemble_with, SceneError, SceneOptions};
use config::constants::SCENE_MARGIN;
use thiserror::Error;
use wasm_bindgen::prelude::*;

mod scene_handle;

pub use scene_handle::SceneHandle;

/// Errors from any stage of the pipeline.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Ingest error: {0}")]
    Ingest(#[from] IngestError),

    #[error("Scene error: {0}")]
    Scene(#[from] SceneError),

    #[error("Render error: {0}")]
    Render(#[from] RenderError),
}

impl From<block_model::ModelError> for PipelineError {
    fn from(err: block_model::ModelError) -> Self {
        Self::Scene(err.into())
    }
}

/// Installs a panic hook that forwards Rust panics to the browser console.
///
/// # Examples
/// ```no_run
/// // In JavaScript: import and call once at startup.
/// // import { init_panic_hook } from "block-model-wasm";
/// // init_panic_hook();
/// ```
#[wasm_bindgen]
pub fn init_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Routes `log` records to the browser console. Safe to call more than once.
#[cfg(feature = "console_log")]
#[wasm_bindgen]
pub fn init_logging() {
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        log::debug!("console logger already installed: {err}");
    }
}

/// Returns the padding added to scene bounds.
///
/// # Examples
/// ```
/// assert_eq!(block_model_wasm::default_margin(), 10.0);
/// ```
#[wasm_bindgen]
pub fn default_margin() -> f64 {
    SCENE_MARGIN
}

/// Parses comma-separated block data and assembles it into a scene.
///
/// # Errors
/// Returns a JavaScript error value holding a human-readable message when
/// any stage fails.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const scene = render_csv(text);
/// // Plotly.newPlot("plot", JSON.parse(scene.figure_json()));
/// ```
#[wasm_bindgen]
pub fn render_csv(source: &str) -> Result<SceneHandle, JsValue> {
    render_csv_internal(source).map_err(|err| JsValue::from_str(&err.to_string()))
}

/// Host-side implementation of [`render_csv`].
pub fn render_csv_internal(source: &str) -> Result<SceneHandle, PipelineError> {
    let records = parse_csv(source)?;
    let normalized = normalize(&records)?;
    let scene = assemble_with(&normalized, &SceneOptions::default().sequential())?;
    let figure = Figure::from_scene(&scene, &FigureOptions::default());

    log::info!(
        "rendered {} blocks ({} edges) for the browser",
        scene.len(),
        scene.edges().len()
    );
    Ok(SceneHandle::new(&scene, &figure)?)
}

#[cfg(test)]
mod tests;
