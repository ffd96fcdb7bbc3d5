//! # Block Classification
//!
//! Maps a block's rock type and ore flag to one of four visual categories.
//!
//! | rock group | ore | category    |
//! |------------|-----|-------------|
//! | S-type     | yes | OreRock     |
//! | S-type     | no  | NonOreRock  |
//! | other      | yes | OreOther    |
//! | other      | no  | NonOreOther |

use config::constants::S_TYPE_ROCK;
use serde::{Deserialize, Serialize};

/// Grouping of the open rock type domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RockGroup {
    /// Rock type equal to [`S_TYPE_ROCK`]
    SType,
    /// Any other rock type, known or not
    Other,
}

impl RockGroup {
    /// Groups a rock type label. Comparison is exact.
    ///
    /// # Example
    ///
    /// ```rust
    /// use block_model::RockGroup;
    ///
    /// assert_eq!(RockGroup::of("S"), RockGroup::SType);
    /// assert_eq!(RockGroup::of("L"), RockGroup::Other);
    /// assert_eq!(RockGroup::of("s"), RockGroup::Other);
    /// ```
    #[inline]
    pub fn of(rock_type: &str) -> Self {
        if rock_type == S_TYPE_ROCK {
            Self::SType
        } else {
            Self::Other
        }
    }
}

/// Visual category of a block, used for fill color and legend grouping.
///
/// The core only hands out the token; colors are looked up by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum VisualCategory {
    /// S-type, ore-bearing
    OreRock,
    /// S-type, barren
    NonOreRock,
    /// Other rock type, ore-bearing
    OreOther,
    /// Other rock type, barren
    NonOreOther,
}

impl VisualCategory {
    /// All categories in legend order.
    pub const ALL: [VisualCategory; 4] = [
        VisualCategory::OreRock,
        VisualCategory::NonOreRock,
        VisualCategory::OreOther,
        VisualCategory::NonOreOther,
    ];

    /// Stable position of this category in [`VisualCategory::ALL`].
    #[inline]
    pub fn ordinal(self) -> u32 {
        match self {
            Self::OreRock => 0,
            Self::NonOreRock => 1,
            Self::OreOther => 2,
            Self::NonOreOther => 3,
        }
    }

    /// Display name for legends.
    pub fn name(self) -> &'static str {
        match self {
            Self::OreRock => "Ore (S)",
            Self::NonOreRock => "Non-ore (S)",
            Self::OreOther => "Ore (other)",
            Self::NonOreOther => "Non-ore (other)",
        }
    }

    /// Rock grouping this category belongs to.
    pub fn rock_group(self) -> RockGroup {
        match self {
            Self::OreRock | Self::NonOreRock => RockGroup::SType,
            Self::OreOther | Self::NonOreOther => RockGroup::Other,
        }
    }

    /// Whether this category marks ore-bearing blocks.
    pub fn is_ore(self) -> bool {
        matches!(self, Self::OreRock | Self::OreOther)
    }
}

/// Classifies a block by rock type and ore flag.
///
/// Total over every `(rock_type, ore_flag)` pair: labels other than the
/// S-type label fall into the "other" group rather than failing.
///
/// # Example
///
/// ```rust
/// use block_model::{classify, VisualCategory};
///
/// assert_eq!(classify("S", true), VisualCategory::OreRock);
/// assert_eq!(classify("S", false), VisualCategory::NonOreRock);
/// assert_eq!(classify("L", true), VisualCategory::OreOther);
/// assert_eq!(classify("granite", false), VisualCategory::NonOreOther);
/// ```
pub fn classify(rock_type: &str, ore_flag: bool) -> VisualCategory {
    match (RockGroup::of(rock_type), ore_flag) {
        (RockGroup::SType, true) => VisualCategory::OreRock,
        (RockGroup::SType, false) => VisualCategory::NonOreRock,
        (RockGroup::Other, true) => VisualCategory::OreOther,
        (RockGroup::Other, false) => VisualCategory::NonOreOther,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_table() {
        assert_eq!(classify("S", true), VisualCategory::OreRock);
        assert_eq!(classify("S", false), VisualCategory::NonOreRock);
        assert_eq!(classify("L", true), VisualCategory::OreOther);
        assert_eq!(classify("L", false), VisualCategory::NonOreOther);
    }

    #[test]
    fn test_unknown_rock_types_fall_through() {
        for rock in ["", "X", "SS", " S", "s", "Sandstone", "岩"] {
            assert_eq!(classify(rock, true), classify("L", true), "rock {rock:?}");
            assert_eq!(classify(rock, false), classify("L", false), "rock {rock:?}");
        }
    }

    #[test]
    fn test_category_reflects_inputs() {
        for rock in ["S", "L", "Q"] {
            for ore in [true, false] {
                let category = classify(rock, ore);
                assert_eq!(category.is_ore(), ore);
                assert_eq!(category.rock_group(), RockGroup::of(rock));
            }
        }
    }

    #[test]
    fn test_ordinals_match_all() {
        for (i, category) in VisualCategory::ALL.iter().enumerate() {
            assert_eq!(category.ordinal() as usize, i);
        }
    }

    #[test]
    fn test_names_distinct() {
        let names: std::collections::HashSet<_> =
            VisualCategory::ALL.iter().map(|c| c.name()).collect();
        assert_eq!(names.len(), VisualCategory::ALL.len());
    }
}
