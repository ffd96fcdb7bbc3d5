//! Category palette.

use block_model::VisualCategory;
use config::constants::{NON_ORE_OTHER_COLOR, NON_ORE_ROCK_COLOR, ORE_OTHER_COLOR, ORE_ROCK_COLOR};

/// Fill color for a category.
///
/// # Example
///
/// ```rust
/// use block_model::VisualCategory;
/// use block_render::category_color;
///
/// assert_eq!(category_color(VisualCategory::OreRock), "red");
/// assert_eq!(category_color(VisualCategory::NonOreOther), "lightgreen");
/// ```
pub fn category_color(category: VisualCategory) -> &'static str {
    match category {
        VisualCategory::OreRock => ORE_ROCK_COLOR,
        VisualCategory::NonOreRock => NON_ORE_ROCK_COLOR,
        VisualCategory::OreOther => ORE_OTHER_COLOR,
        VisualCategory::NonOreOther => NON_ORE_OTHER_COLOR,
    }
}
