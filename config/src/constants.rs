//! # Configuration Constants
//!
//! Centralized constants for the block model pipeline. Geometry tolerances,
//! cube topology, classification labels and presentation defaults are
//! defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Topology**: Fixed counts for the cuboid mesh
//! - **Model**: Classification labels and ingestion defaults
//! - **Scene**: Axis padding and parallelism thresholds
//! - **Presentation**: Palette, figure layout and page shell

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Minimum triangle area (twice the area, as a cross product length) below
/// which a triangle is considered degenerate during mesh validation.
pub const DEGENERATE_AREA_EPSILON: f64 = 1e-8;

// =============================================================================
// TOPOLOGY CONSTANTS
// =============================================================================

/// Number of corner vertices of a cuboid.
pub const CUBE_VERTEX_COUNT: usize = 8;

/// Number of triangles of a cuboid (two per face).
pub const CUBE_TRIANGLE_COUNT: usize = 12;

/// Number of wireframe edges of a cuboid.
///
/// # Example
///
/// ```rust
/// use config::constants::{CUBE_EDGE_COUNT, CUBE_VERTEX_COUNT};
///
/// // Every corner touches three edges, every edge has two ends
/// assert_eq!(CUBE_EDGE_COUNT * 2, CUBE_VERTEX_COUNT * 3);
/// ```
pub const CUBE_EDGE_COUNT: usize = 12;

// =============================================================================
// MODEL CONSTANTS
// =============================================================================

/// Rock type label that forms the "S-type" grouping.
///
/// Every other label falls into the "other-type" grouping.
pub const S_TYPE_ROCK: &str = "S";

/// Density assigned to ingested rows that carry no density column.
pub const DEFAULT_DENSITY: f64 = 1.0;

/// Column suffix that marks an assay grade column during ingestion.
///
/// # Example
///
/// ```rust
/// use config::constants::GRADE_COLUMN_SUFFIX;
///
/// let column = "Au_Grade";
/// let assay = column.strip_suffix(GRADE_COLUMN_SUFFIX).map(str::to_lowercase);
/// assert_eq!(assay.as_deref(), Some("au"));
/// ```
pub const GRADE_COLUMN_SUFFIX: &str = "_Grade";

// =============================================================================
// SCENE CONSTANTS
// =============================================================================

/// Padding added to each axis maximum when finalizing scene bounds.
///
/// # Example
///
/// ```rust
/// use config::constants::SCENE_MARGIN;
///
/// let z_extent = 20.0;
/// assert_eq!(z_extent + SCENE_MARGIN, 30.0);
/// ```
pub const SCENE_MARGIN: f64 = 10.0;

/// Block count at or above which scene assembly fans out across threads.
///
/// Small models are assembled on the calling thread.
pub const PARALLEL_BLOCK_THRESHOLD: usize = 256;

// =============================================================================
// PRESENTATION CONSTANTS
// =============================================================================

/// Fill color for ore-bearing S-type blocks.
pub const ORE_ROCK_COLOR: &str = "red";

/// Fill color for barren S-type blocks.
pub const NON_ORE_ROCK_COLOR: &str = "pink";

/// Fill color for ore-bearing blocks of any other rock type.
pub const ORE_OTHER_COLOR: &str = "darkgreen";

/// Fill color for barren blocks of any other rock type.
pub const NON_ORE_OTHER_COLOR: &str = "lightgreen";

/// Wireframe line color.
pub const EDGE_COLOR: &str = "gray";

/// Wireframe line width in pixels.
pub const EDGE_WIDTH: f64 = 2.0;

/// Opacity of block fills, in `[0, 1]`.
pub const MESH_OPACITY: f64 = 0.7;

/// Figure title.
pub const FIGURE_TITLE: &str = "No Metadata Block Model - Rock Type Visualization";

/// Figure title font size in points.
pub const TITLE_FONT_SIZE: u32 = 20;

/// Figure title font family.
pub const TITLE_FONT_FAMILY: &str = "Arial";

/// Figure title font color.
pub const TITLE_FONT_COLOR: &str = "black";

/// Figure width in pixels.
pub const FIGURE_WIDTH: u32 = 1000;

/// Figure height in pixels.
pub const FIGURE_HEIGHT: u32 = 800;

/// Default camera eye position, in normalized scene units.
pub const CAMERA_EYE: [f64; 3] = [1.5, 1.5, 1.0];

/// Title of the standalone HTML page.
pub const PAGE_TITLE: &str = "3D Block Model";

/// Script URL the HTML fragment loads the plotting library from.
pub const PLOTLY_CDN_URL: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";
