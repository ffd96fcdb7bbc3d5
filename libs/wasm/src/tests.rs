//! Tests for the WASM-facing pipeline helpers.

use super::*;
use block_model::SAMPLE_MODEL_CSV;

/// Renders the reference model and checks the buffer sizes.
///
/// # Examples
/// ```
/// use block_model_wasm::render_csv_internal;
/// let handle = render_csv_internal(block_model::SAMPLE_MODEL_CSV).unwrap();
/// assert_eq!(handle.edge_count(), 96);
/// ```
#[test]
fn render_sample_produces_buffers() {
    let handle = render_csv_internal(SAMPLE_MODEL_CSV).expect("sample renders");

    assert_eq!(handle.block_count(), 8);
    assert_eq!(handle.edge_count(), 96);
    assert_eq!(handle.vertices().len(), 8 * 8 * 3);
    assert_eq!(handle.indices().len(), 8 * 12 * 3);
    assert_eq!(handle.normals().len(), handle.vertices().len());
    assert_eq!(handle.edges().len(), 96 * 6);
    assert_eq!(handle.bounds(), vec![50.0, 30.0, 30.0]);
}

/// Category ordinals follow the reference classification.
#[test]
fn render_sample_categories() {
    let handle = render_csv_internal(SAMPLE_MODEL_CSV).expect("sample renders");
    // OreRock = 0, NonOreOther = 3
    assert_eq!(handle.categories(), vec![0, 3, 0, 3, 0, 0, 3, 0]);
}

/// Buffers hold finite values and in-range indices.
#[test]
fn render_sample_buffers_valid() {
    let handle = render_csv_internal(SAMPLE_MODEL_CSV).expect("sample renders");

    for &v in &handle.vertices() {
        assert!(v.is_finite(), "Vertex value should be finite");
    }

    let vertex_count = (handle.vertices().len() / 3) as u32;
    for &idx in &handle.indices() {
        assert!(idx < vertex_count, "Index {} out of range", idx);
    }
}

/// The figure JSON parses back into the expected document.
#[test]
fn render_sample_figure_json() {
    let handle = render_csv_internal(SAMPLE_MODEL_CSV).expect("sample renders");
    let json = handle.figure_json();
    assert!(json.starts_with(r#"{"data":[{"type":"mesh3d""#));
    assert!(json.contains(r#""aspectmode":"data""#));
}

/// Ingestion failures surface as explicit errors.
#[test]
fn render_rejects_malformed_csv() {
    let err = render_csv_internal("X,Y,Z\n1,2,3\n").unwrap_err();
    assert!(matches!(err, PipelineError::Ingest(_)));
    assert!(!err.to_string().is_empty());
}

/// A header without rows is an empty model.
#[test]
fn render_rejects_empty_model() {
    let err = render_csv_internal("X,Y,Z,DX,DY,DZ,Rock_Type,Ore_Flag\n").unwrap_err();
    match err {
        PipelineError::Scene(scene) => assert!(scene.is_empty_model()),
        other => panic!("expected empty model, got {other:?}"),
    }
}

#[test]
fn default_margin_matches_config() {
    assert_eq!(default_margin(), SCENE_MARGIN);
}

/// No pipeline crate on the browser path turns on threaded scene assembly.
#[test]
fn browser_build_keeps_scene_assembly_sequential() {
    let dependency = |manifest: &'static str| {
        manifest
            .lines()
            .find(|line| line.starts_with("block-scene"))
            .expect("manifest depends on block-scene")
    };

    let workspace = dependency(include_str!("../../../Cargo.toml"));
    assert!(workspace.contains("default-features = false"), "{workspace}");

    for manifest in [
        include_str!("../Cargo.toml"),
        include_str!("../../block-render/Cargo.toml"),
    ] {
        let line = dependency(manifest);
        assert!(!line.contains("parallel"), "{line}");
    }
}
