//! # Seed Palette
//!
//! A Rust crate for turning a handful of dominant image colors into a
//! usable, accessibility-aware palette.
//!
//! From N seed colors the engine derives:
//! - An extended, deduplicated, named palette with contrast against white and black
//! - A contrast matrix rating every text/background pairing against WCAG tiers
//! - Complementary and triadic suggestions, darkened where illegible
//! - A light and a dark neutral averaged from the seeds in CIE Lab
//!
//! Extracting the seeds from an image is left to the caller.
//!
//! ## Example
//!
//! ```rust
//! use seed_palette::{derive_palette, ColorValue};
//!
//! let seeds = vec![ColorValue::from("#3366cc"), ColorValue::from([230, 120, 40])];
//! let result = derive_palette(&seeds)?;
//! println!("{} colors, {} pairs", result.palette.len(), result.contrast_pairs.len());
//! # Ok::<(), seed_palette::PaletteError>(())
//! ```

use log::{debug, info};
use serde::{Deserialize, Serialize};

pub mod color;
pub mod config;
pub mod constants;
pub mod engine;
pub mod error;

pub use color::{contrast, AccessibilityTier, Color, ColorValue, HueShift};
pub use config::{EmptySeedPolicy, EngineConfig};
pub use engine::{
    build_contrast_matrix, expand_palette, suggest_harmonies, synthesize_neutrals, ContrastPair,
    NamedColor, Neutral, SeedContrast, Suggestion,
};
pub use error::{PaletteError, Result};

/// Everything derived from one seed set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedPalette {
    /// Normalized seed colors, in input order
    pub seeds: Vec<Color>,
    /// Extended named palette
    pub palette: Vec<NamedColor>,
    /// Ordered text/background pairs over the palette
    pub contrast_pairs: Vec<ContrastPair>,
    /// Harmony suggestions, three per seed by default
    pub suggestions: Vec<Suggestion>,
    /// Light neutral, then dark neutral
    pub neutrals: [Neutral; 2],
}

/// Derive a palette from seed colors with the default configuration
///
/// # Errors
///
/// Returns `PaletteError` if:
/// - Any seed is not a valid color
/// - The seed list is empty
pub fn derive_palette(seeds: &[ColorValue]) -> Result<DerivedPalette> {
    derive_palette_with_config(seeds, &EngineConfig::default())
}

/// Derive a palette from seed colors
///
/// All seeds are normalized before any stage runs, so a bad seed fails the
/// whole call. The expander/matrix branch, the harmony suggester and the
/// neutral synthesizer then run in parallel and are joined into one result.
///
/// # Errors
///
/// Returns `PaletteError` if:
/// - Any seed is not a valid color
/// - The seed list is empty and the policy is [`EmptySeedPolicy::Reject`]
/// - The configuration fails validation
pub fn derive_palette_with_config(
    seeds: &[ColorValue],
    config: &EngineConfig,
) -> Result<DerivedPalette> {
    config.validate()?;

    let seeds = seeds
        .iter()
        .map(ColorValue::resolve)
        .collect::<Result<Vec<Color>>>()?;

    if seeds.is_empty() && config.empty_seeds == EmptySeedPolicy::Reject {
        return Err(PaletteError::EmptySeedSet);
    }
    debug!("Deriving palette from {} seeds", seeds.len());

    let (palette_branch, (suggestions, neutrals)) = rayon::join(
        || -> Result<_> {
            let palette = expand_palette(&seeds, &config.expansion)?;
            let pairs = build_contrast_matrix(&palette, &config.accessibility);
            Ok((palette, pairs))
        },
        || {
            rayon::join(
                || suggest_harmonies(&seeds, &config.harmony),
                || synthesize_neutrals(&seeds, &config.neutrals, config.empty_seeds),
            )
        },
    );
    let (palette, contrast_pairs) = palette_branch?;

    let result = DerivedPalette {
        palette,
        contrast_pairs,
        suggestions: suggestions?,
        neutrals: neutrals?,
        seeds,
    };

    info!(
        "Derived {} palette colors, {} contrast pairs, {} suggestions",
        result.palette.len(),
        result.contrast_pairs.len(),
        result.suggestions.len()
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_palette_serialization() {
        let result = derive_palette(&["#3366cc".into()]).unwrap();

        let json = serde_json::to_string(&result).unwrap();
        let deserialized: DerivedPalette = serde_json::from_str(&json).unwrap();

        assert_eq!(result, deserialized);
    }

    #[test]
    fn test_camel_case_top_level_keys() {
        let result = derive_palette(&["#3366cc".into()]).unwrap();
        let json = serde_json::to_value(&result).unwrap();
        for key in ["seeds", "palette", "contrastPairs", "suggestions", "neutrals"] {
            assert!(json.get(key).is_some(), "missing {}", key);
        }
    }

    #[test]
    fn test_invalid_seed_fails_whole_call() {
        let err = derive_palette(&["#3366cc".into(), "#zzzzzz".into()]).unwrap_err();
        assert!(matches!(err, PaletteError::InvalidColor { .. }));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let mut config = EngineConfig::default();
        config.neutrals.desaturate_amount = f32::NAN;
        let err = derive_palette_with_config(&["#3366cc".into()], &config).unwrap_err();
        assert!(matches!(err, PaletteError::InvalidParameter { .. }));
    }
}
