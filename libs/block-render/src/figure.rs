//! # Figure Document
//!
//! A Plotly-compatible figure built from a [`Scene`]: one `mesh3d` trace per
//! block, one `scatter3d` line trace per wireframe edge, and a fixed layout.
//! The document is a plain value; serializing it is the only side of the
//! plotting library this crate touches.

use block_mesh::EdgeSegment;
use block_scene::{Scene, SceneBlock};
use config::constants::{
    CAMERA_EYE, EDGE_COLOR, EDGE_WIDTH, FIGURE_HEIGHT, FIGURE_TITLE, FIGURE_WIDTH, MESH_OPACITY,
    TITLE_FONT_COLOR, TITLE_FONT_FAMILY, TITLE_FONT_SIZE,
};
use serde::Serialize;

use crate::error::RenderError;
use crate::palette::category_color;

/// Presentation settings for [`Figure::from_scene`].
#[derive(Debug, Clone, PartialEq)]
pub struct FigureOptions {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub opacity: f64,
    pub edge_color: String,
    pub edge_width: f64,
    pub camera_eye: [f64; 3],
}

impl Default for FigureOptions {
    fn default() -> Self {
        Self {
            title: FIGURE_TITLE.to_string(),
            width: FIGURE_WIDTH,
            height: FIGURE_HEIGHT,
            opacity: MESH_OPACITY,
            edge_color: EDGE_COLOR.to_string(),
            edge_width: EDGE_WIDTH,
            camera_eye: CAMERA_EYE,
        }
    }
}

/// A filled block.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeshTrace {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<f64>,
    pub i: Vec<u32>,
    pub j: Vec<u32>,
    pub k: Vec<u32>,
    pub color: String,
    pub opacity: f64,
    pub hovertext: String,
    pub name: String,
    pub legendgroup: String,
}

/// A wireframe edge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineTrace {
    pub x: [f64; 2],
    pub y: [f64; 2],
    pub z: [f64; 2],
    pub mode: &'static str,
    pub line: LineStyle,
    pub showlegend: bool,
    pub hoverinfo: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineStyle {
    pub color: String,
    pub width: f64,
}

/// One figure trace, tagged with its Plotly trace type.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Mesh3d(MeshTrace),
    Scatter3d(LineTrace),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Font {
    pub size: u32,
    pub family: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    pub text: String,
    pub font: Font,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub title: String,
    pub range: [f64; 2],
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Eye {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Camera {
    pub eye: Eye,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneLayout {
    pub aspectmode: &'static str,
    pub xaxis: Axis,
    pub yaxis: Axis,
    pub zaxis: Axis,
    pub camera: Camera,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub title: Title,
    pub width: u32,
    pub height: u32,
    pub scene: SceneLayout,
}

/// A complete figure: traces plus layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

impl Figure {
    /// Lays out a scene.
    ///
    /// Block traces come first, in block order, followed by every edge trace
    /// in scene order.
    pub fn from_scene(scene: &Scene, options: &FigureOptions) -> Self {
        let mut data = Vec::with_capacity(scene.blocks().len() + scene.edges().len());
        data.extend(scene.blocks().iter().map(|b| Trace::Mesh3d(mesh_trace(b, options))));
        data.extend(scene.edges().iter().map(|e| Trace::Scatter3d(line_trace(e, options))));

        let bounds = scene.bounds();
        let axis = |title: &str, max: f64| Axis {
            title: title.to_string(),
            range: [0.0, max],
        };
        let [x, y, z] = options.camera_eye;

        let layout = Layout {
            title: Title {
                text: options.title.clone(),
                font: Font {
                    size: TITLE_FONT_SIZE,
                    family: TITLE_FONT_FAMILY.to_string(),
                    color: TITLE_FONT_COLOR.to_string(),
                },
            },
            width: options.width,
            height: options.height,
            scene: SceneLayout {
                aspectmode: "data",
                xaxis: axis("X", bounds.x_max),
                yaxis: axis("Y", bounds.y_max),
                zaxis: axis("Z", bounds.z_max),
                camera: Camera { eye: Eye { x, y, z } },
            },
        };

        log::debug!("figure laid out with {} traces", data.len());
        Self { data, layout }
    }

    /// Encodes the figure as JSON.
    pub fn to_json(&self) -> Result<String, RenderError> {
        Ok(serde_json::to_string(self)?)
    }
}

fn mesh_trace(block: &SceneBlock, options: &FigureOptions) -> MeshTrace {
    let vertices = block.geometry.vertices();
    let triangles = block.geometry.triangles();

    MeshTrace {
        x: vertices.iter().map(|v| v.x).collect(),
        y: vertices.iter().map(|v| v.y).collect(),
        z: vertices.iter().map(|v| v.z).collect(),
        i: triangles.iter().map(|t| t[0]).collect(),
        j: triangles.iter().map(|t| t[1]).collect(),
        k: triangles.iter().map(|t| t[2]).collect(),
        color: category_color(block.category).to_string(),
        opacity: options.opacity,
        hovertext: escape_markup(&block.hovertext).replace('\n', "<br>"),
        name: block.label.clone(),
        legendgroup: block.category.name().to_string(),
    }
}

/// Escapes the characters Plotly reads as hover markup.
fn escape_markup(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn line_trace(edge: &EdgeSegment, options: &FigureOptions) -> LineTrace {
    LineTrace {
        x: [edge.start.x, edge.end.x],
        y: [edge.start.y, edge.end.y],
        z: [edge.start.z, edge.end.z],
        mode: "lines",
        line: LineStyle {
            color: options.edge_color.clone(),
            width: options.edge_width,
        },
        showlegend: false,
        hoverinfo: "none",
    }
}
