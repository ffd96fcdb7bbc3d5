use block_model::{parse_csv, VisualCategory, SAMPLE_MODEL_CSV};
use block_render::{category_color, render_page, Figure, FigureOptions, Trace};
use block_scene::build_scene;

#[test]
fn sample_page_renders() {
    let scene = build_scene(&parse_csv(SAMPLE_MODEL_CSV).unwrap()).unwrap();
    let page = render_page(&scene).unwrap();
    assert!(page.starts_with("<html>"));
    assert!(page.contains("Plotly.newPlot"));
    assert_eq!(page.matches(r#""type":"mesh3d""#).count(), 8);
    assert_eq!(page.matches(r#""type":"scatter3d""#).count(), 96);
}

#[test]
fn block_colors_follow_categories() {
    let scene = build_scene(&parse_csv(SAMPLE_MODEL_CSV).unwrap()).unwrap();
    let figure = Figure::from_scene(&scene, &FigureOptions::default());
    let colors: Vec<_> = figure
        .data
        .iter()
        .filter_map(|t| match t {
            Trace::Mesh3d(mesh) => Some(mesh.color.as_str()),
            Trace::Scatter3d(_) => None,
        })
        .collect();
    let expected: Vec<_> = scene.categories().into_iter().map(category_color).collect();
    assert_eq!(colors, expected);
    assert_eq!(colors[1], category_color(VisualCategory::NonOreOther));
}

#[test]
fn custom_options_flow_into_layout() {
    let scene = build_scene(&parse_csv(SAMPLE_MODEL_CSV).unwrap()).unwrap();
    let options = FigureOptions {
        title: "Pit 3".to_string(),
        width: 640,
        height: 480,
        ..FigureOptions::default()
    };
    let figure = Figure::from_scene(&scene, &options);
    assert_eq!(figure.layout.title.text, "Pit 3");
    assert_eq!(figure.layout.width, 640);
    assert_eq!(figure.layout.height, 480);
}
