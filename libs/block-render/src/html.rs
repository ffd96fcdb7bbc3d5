//! # HTML Output
//!
//! Wraps a [`Figure`] in an embeddable fragment, and a fragment in a page.

use config::constants::{PAGE_TITLE, PLOTLY_CDN_URL};

use crate::error::RenderError;
use crate::figure::Figure;

/// Element id the fragment draws into.
pub const FIGURE_ELEMENT_ID: &str = "block-model-figure";

/// Renders a self-contained `<div>` + `<script>` fragment.
///
/// The figure JSON is inlined into a script element; `</` sequences are
/// escaped so that labels cannot close the element early.
///
/// # Errors
///
/// Returns [`RenderError::Serialize`] if the figure cannot be encoded.
pub fn fragment(figure: &Figure) -> Result<String, RenderError> {
    let json = figure.to_json()?.replace("</", "<\\/");
    Ok(format!(
        r#"<div id="{id}" style="width:{width}px;height:{height}px;"></div>
<script src="{cdn}" charset="utf-8"></script>
<script>
    (function() {{
        var figure = {json};
        Plotly.newPlot("{id}", figure.data, figure.layout);
    }})();
</script>"#,
        id = FIGURE_ELEMENT_ID,
        width = figure.layout.width,
        height = figure.layout.height,
        cdn = PLOTLY_CDN_URL,
    ))
}

/// Wraps a fragment in a standalone page.
///
/// # Example
///
/// ```rust
/// let page = block_render::html::page("<p>figure</p>");
/// assert!(page.starts_with("<html>"));
/// assert!(page.contains("<p>figure</p>"));
/// ```
pub fn page(fragment: &str) -> String {
    format!(
        r#"<html>
<head>
    <title>{PAGE_TITLE}</title>
    <meta charset="utf-8">
</head>
<body>
    {fragment}
</body>
</html>
"#
    )
}
