//! Size tier classification for saved work areas
//!
//! Tiers are purely presentational: a closed, ordered set of five levels,
//! each with a display label and color. The whole thing is a static data
//! table so adding or recoloring a tier is a one-line change.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Presentational size classification of a work area.
///
/// Ordered smallest to largest. Assigned from the measured acreage at save
/// time and freely changeable afterward; never feeds back into geometry.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum SizeTier {
    Patch,
    Plot,
    Field,
    Tract,
    Expanse,
}

/// One row of the tier table.
pub struct TierInfo {
    pub tier: SizeTier,
    pub label: &'static str,
    /// Upper acreage bound used for the default classification at save time.
    pub max_acres: f64,
    pub color: Color,
}

/// The five tiers, ordered; `max_acres` bounds are inclusive.
pub const TIER_TABLE: [TierInfo; 5] = [
    TierInfo {
        tier: SizeTier::Patch,
        label: "Patch",
        max_acres: 1.0,
        color: Color::srgb(0.56, 0.79, 0.44),
    },
    TierInfo {
        tier: SizeTier::Plot,
        label: "Plot",
        max_acres: 5.0,
        color: Color::srgb(0.30, 0.65, 0.85),
    },
    TierInfo {
        tier: SizeTier::Field,
        label: "Field",
        max_acres: 25.0,
        color: Color::srgb(0.95, 0.77, 0.06),
    },
    TierInfo {
        tier: SizeTier::Tract,
        label: "Tract",
        max_acres: 100.0,
        color: Color::srgb(0.95, 0.45, 0.10),
    },
    TierInfo {
        tier: SizeTier::Expanse,
        label: "Expanse",
        max_acres: f64::INFINITY,
        color: Color::srgb(0.85, 0.25, 0.25),
    },
];

impl SizeTier {
    /// The table row for this tier.
    pub fn info(self) -> &'static TierInfo {
        &TIER_TABLE[self as usize]
    }

    /// Default classification for a freshly measured area.
    pub fn for_area(acres: f64) -> SizeTier {
        TIER_TABLE
            .iter()
            .find(|row| acres <= row.max_acres)
            .map(|row| row.tier)
            .unwrap_or(SizeTier::Expanse)
    }

    pub fn label(self) -> &'static str {
        self.info().label
    }

    pub fn color(self) -> Color {
        self.info().color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_rows_match_discriminant_order() {
        for (index, row) in TIER_TABLE.iter().enumerate() {
            assert_eq!(row.tier as usize, index, "row {} out of order", row.label);
        }
    }

    #[test]
    fn classification_walks_the_table() {
        assert_eq!(SizeTier::for_area(0.0), SizeTier::Patch);
        assert_eq!(SizeTier::for_area(1.0), SizeTier::Patch);
        assert_eq!(SizeTier::for_area(2.4), SizeTier::Plot);
        assert_eq!(SizeTier::for_area(24.9), SizeTier::Field);
        assert_eq!(SizeTier::for_area(99.0), SizeTier::Tract);
        assert_eq!(SizeTier::for_area(1e6), SizeTier::Expanse);
    }

    #[test]
    fn tier_colors_are_distinct() {
        for (i, a) in TIER_TABLE.iter().enumerate() {
            for b in TIER_TABLE.iter().skip(i + 1) {
                assert_ne!(a.color, b.color, "{} and {}", a.label, b.label);
            }
        }
    }
}
