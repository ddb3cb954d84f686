//! Palette expansion
//!
//! Every seed contributes five variants in a fixed order: lighter, itself,
//! darker, and a hue rotation either way. The flattened list is collapsed
//! to unique colors, first occurrence wins, and each survivor is named and
//! measured against white and black.

use std::collections::HashSet;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::color::{contrast, name_color, round2, Color, HueShift};
use crate::config::ExpansionConfig;
use crate::Result;

/// Palette entry with its name and reference contrasts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamedColor {
    /// Canonical color, serialized as `#rrggbb`
    pub hex: Color,
    /// Descriptive name, e.g. "Dark Blue"
    pub name: String,
    /// Contrast ratio against white, two decimals
    pub contrast_with_white: f64,
    /// Contrast ratio against black, two decimals
    pub contrast_with_black: f64,
}

impl NamedColor {
    pub fn new(color: Color) -> Self {
        Self {
            hex: color,
            name: name_color(color),
            contrast_with_white: round2(contrast(color, Color::WHITE)),
            contrast_with_black: round2(contrast(color, Color::BLACK)),
        }
    }
}

/// The five variants of one seed, in palette order
pub fn seed_variants(seed: Color, config: &ExpansionConfig) -> Result<[Color; 5]> {
    let forward = HueShift::new(config.hue_offset)?;
    let backward = HueShift::new(-config.hue_offset)?;

    Ok([
        seed.brighten(config.lightness_amount)?,
        seed,
        seed.darken(config.lightness_amount)?,
        seed.adjust_hue(forward)?,
        seed.adjust_hue(backward)?,
    ])
}

/// Expand seeds into a deduplicated, named palette
///
/// The result holds at most `5 * seeds.len()` entries, ordered by first
/// appearance in the variant sequence.
///
/// # Errors
///
/// Returns `PaletteError::InvalidColor` if an adjustment leaves the sRGB
/// domain, or `PaletteError::InvalidParameter` for a non-finite hue offset
pub fn expand_palette(seeds: &[Color], config: &ExpansionConfig) -> Result<Vec<NamedColor>> {
    let mut seen = HashSet::new();
    let mut palette = Vec::with_capacity(seeds.len() * 5);

    for &seed in seeds {
        for variant in seed_variants(seed, config)? {
            if seen.insert(variant) {
                palette.push(NamedColor::new(variant));
            } else {
                trace!("Variant {} of seed {} already in palette", variant, seed);
            }
        }
    }

    debug!(
        "Expanded {} seeds into {} palette colors",
        seeds.len(),
        palette.len()
    );
    Ok(palette)
}
