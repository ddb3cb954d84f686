//! Text/background contrast matrix over a named palette

use log::debug;
use serde::{Deserialize, Serialize};

use crate::color::{contrast, round2, AccessibilityTier};
use crate::config::AccessibilityConfig;
use crate::engine::NamedColor;

/// One palette color used as text on another as background
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContrastPair {
    pub text: NamedColor,
    pub background: NamedColor,
    /// Contrast ratio, two decimals
    pub contrast: f64,
    /// Tier of the unrounded ratio
    pub accessible_tier: AccessibilityTier,
}

/// Every ordered pair of distinct palette positions
///
/// Outer loop is the text color, inner loop the background. A palette of
/// `k` colors yields `k * (k - 1)` pairs; the ratio is symmetric but both
/// directions are listed.
pub fn build_contrast_matrix(
    palette: &[NamedColor],
    config: &AccessibilityConfig,
) -> Vec<ContrastPair> {
    let k = palette.len();
    let mut pairs = Vec::with_capacity(k * k.saturating_sub(1));

    for (i, text) in palette.iter().enumerate() {
        for (j, background) in palette.iter().enumerate() {
            if i == j {
                continue;
            }
            let ratio = contrast(text.hex, background.hex);
            pairs.push(ContrastPair {
                text: text.clone(),
                background: background.clone(),
                contrast: round2(ratio),
                accessible_tier: AccessibilityTier::classify_with(
                    ratio,
                    config.aa_threshold,
                    config.aa_large_threshold,
                ),
            });
        }
    }

    let passing = pairs.iter().filter(|p| p.accessible_tier == AccessibilityTier::Aa).count();
    debug!("Built {} contrast pairs, {} pass AA", pairs.len(), passing);
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    fn named(r: u8, g: u8, b: u8) -> NamedColor {
        NamedColor::new(Color::from_rgb(r, g, b))
    }

    #[test]
    fn test_matrix_size_and_order() {
        let palette = vec![named(255, 255, 255), named(0, 0, 0), named(255, 0, 0)];
        let pairs = build_contrast_matrix(&palette, &AccessibilityConfig::default());
        assert_eq!(pairs.len(), 6);

        let order: Vec<(Color, Color)> = pairs.iter().map(|p| (p.text.hex, p.background.hex)).collect();
        assert_eq!(order[0], (palette[0].hex, palette[1].hex));
        assert_eq!(order[1], (palette[0].hex, palette[2].hex));
        assert_eq!(order[2], (palette[1].hex, palette[0].hex));
        assert_eq!(order[5], (palette[2].hex, palette[1].hex));
    }

    #[test]
    fn test_tiers() {
        let palette = vec![named(255, 255, 255), named(0, 0, 0), named(0x76, 0x76, 0x76), named(0xee, 0xee, 0xee)];
        let pairs = build_contrast_matrix(&palette, &AccessibilityConfig::default());

        let white_on_black = &pairs[0];
        assert_eq!(white_on_black.contrast, 21.0);
        assert_eq!(white_on_black.accessible_tier, AccessibilityTier::Aa);

        let gray_on_white = pairs
            .iter()
            .find(|p| p.text.hex == palette[2].hex && p.background.hex == palette[0].hex)
            .unwrap();
        assert_eq!(gray_on_white.accessible_tier, AccessibilityTier::Aa);

        let light_on_white = pairs
            .iter()
            .find(|p| p.text.hex == palette[3].hex && p.background.hex == palette[0].hex)
            .unwrap();
        assert_eq!(light_on_white.accessible_tier, AccessibilityTier::Fail);
    }

    #[test]
    fn test_large_tier() {
        // Pure red on white is ~4.0
        let palette = vec![named(255, 0, 0), named(255, 255, 255)];
        let pairs = build_contrast_matrix(&palette, &AccessibilityConfig::default());
        assert!(pairs.iter().all(|p| p.accessible_tier == AccessibilityTier::AaLarge));
        assert_eq!(pairs[0].contrast, pairs[1].contrast);
    }

    #[test]
    fn test_degenerate_palettes() {
        let config = AccessibilityConfig::default();
        assert!(build_contrast_matrix(&[], &config).is_empty());
        assert!(build_contrast_matrix(&[named(1, 2, 3)], &config).is_empty());
    }
}
