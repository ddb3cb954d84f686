//! Harmony suggestions: complementary and triadic companions per seed
//!
//! Each seed is rotated by every configured hue shift (by default +180,
//! +60, -60). A candidate that reads poorly on both white and black is
//! darkened before it is returned.
//!
//! The reported contrast figures describe the candidate *before* that
//! darkening unless `report_adjusted_contrast` is set; `adjusted` tells the
//! consumer which suggestions the two figures no longer describe.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::color::{contrast, name_color, round2, Color, HueShift};
use crate::config::HarmonyConfig;
use crate::Result;

/// A hue-rotated companion for one seed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    /// Seed the suggestion was derived from
    pub base: Color,
    /// Final suggested color
    pub suggested: Color,
    /// Name of the final suggested color
    pub name: String,
    pub contrast_with_white: f64,
    pub contrast_with_black: f64,
    /// Hue rotation that produced the candidate
    pub rotation: HueShift,
    /// Whether the candidate was darkened for legibility
    pub adjusted: bool,
}

/// Build one suggestion from a seed and a rotation
pub fn suggest(seed: Color, rotation: HueShift, config: &HarmonyConfig) -> Result<Suggestion> {
    let candidate = seed.adjust_hue(rotation)?;
    let with_white = contrast(candidate, Color::WHITE);
    let with_black = contrast(candidate, Color::BLACK);

    let illegible =
        with_white < config.legibility_threshold && with_black < config.legibility_threshold;
    let suggested = if illegible {
        let darker = candidate.darken(config.darken_amount)?;
        trace!(
            "Darkened {} to {} (white {:.2}, black {:.2})",
            candidate,
            darker,
            with_white,
            with_black
        );
        darker
    } else {
        candidate
    };

    let (with_white, with_black) = if config.report_adjusted_contrast {
        (contrast(suggested, Color::WHITE), contrast(suggested, Color::BLACK))
    } else {
        (with_white, with_black)
    };

    Ok(Suggestion {
        base: seed,
        suggested,
        name: name_color(suggested),
        contrast_with_white: round2(with_white),
        contrast_with_black: round2(with_black),
        rotation,
        adjusted: illegible,
    })
}

/// Suggestions for every seed, seed order then rotation order
///
/// Works on the raw seeds, not the expanded palette.
pub fn suggest_harmonies(seeds: &[Color], config: &HarmonyConfig) -> Result<Vec<Suggestion>> {
    let suggestions = seeds
        .iter()
        .flat_map(|&seed| config.rotations.iter().map(move |&rotation| (seed, rotation)))
        .map(|(seed, rotation)| suggest(seed, rotation, config))
        .collect::<Result<Vec<_>>>()?;

    let adjusted = suggestions.iter().filter(|s| s.adjusted).count();
    debug!(
        "Suggested {} harmony colors, {} darkened for legibility",
        suggestions.len(),
        adjusted
    );
    Ok(suggestions)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strict() -> HarmonyConfig {
        HarmonyConfig {
            legibility_threshold: 7.0,
            ..HarmonyConfig::default()
        }
    }

    #[test]
    fn test_three_suggestions_per_seed_in_order() {
        let seeds = [Color::from_rgb(255, 0, 0), Color::from_rgb(0, 0, 255)];
        let suggestions = suggest_harmonies(&seeds, &HarmonyConfig::default()).unwrap();
        assert_eq!(suggestions.len(), 6);
        assert!(suggestions[..3].iter().all(|s| s.base == seeds[0]));
        assert!(suggestions[3..].iter().all(|s| s.base == seeds[1]));

        let rotations: Vec<f32> = suggestions[..3].iter().map(|s| s.rotation.degrees()).collect();
        assert_eq!(rotations, vec![180.0, 60.0, -60.0]);
    }

    #[test]
    fn test_complement_of_red_is_cyan() {
        let suggestions =
            suggest_harmonies(&[Color::from_rgb(255, 0, 0)], &HarmonyConfig::default()).unwrap();
        assert_eq!(suggestions[0].suggested, Color::from_rgb(0, 255, 255));
        assert!(!suggestions[0].adjusted);
        assert_eq!(suggestions[0].name, "Very Light Cyan");
    }

    #[test]
    fn test_default_threshold_never_darkens() {
        // max(contrast with white, contrast with black) is at least sqrt(21)
        for rgb in [[128, 128, 128], [118, 118, 118], [0, 128, 255], [200, 60, 90]] {
            let seed = Color::from_rgb(rgb[0], rgb[1], rgb[2]);
            let suggestions = suggest_harmonies(&[seed], &HarmonyConfig::default()).unwrap();
            assert!(suggestions.iter().all(|s| !s.adjusted));
        }
    }

    #[test]
    fn test_mid_gray_darkens_under_strict_threshold() {
        let gray = Color::from_rgb(128, 128, 128);
        let complement = gray.adjust_hue("+180".parse().unwrap()).unwrap();

        let suggestion = suggest(gray, "+180".parse().unwrap(), &strict()).unwrap();
        assert!(suggestion.adjusted);
        assert_ne!(suggestion.suggested, complement);
        assert!(suggestion.suggested.lightness() < complement.lightness());
        assert_eq!(suggestion.name, "Dark Color");
    }

    #[test]
    fn test_reported_contrast_is_pre_adjustment_by_default() {
        let gray = Color::from_rgb(128, 128, 128);
        let suggestion = suggest(gray, "+180".parse().unwrap(), &strict()).unwrap();

        assert_eq!(suggestion.contrast_with_white, round2(contrast(gray, Color::WHITE)));
        assert_eq!(suggestion.contrast_with_black, round2(contrast(gray, Color::BLACK)));
        // The darkened color reads differently from what was reported
        assert_ne!(
            suggestion.contrast_with_white,
            round2(contrast(suggestion.suggested, Color::WHITE))
        );
    }

    #[test]
    fn test_report_adjusted_contrast() {
        let gray = Color::from_rgb(128, 128, 128);
        let config = HarmonyConfig {
            report_adjusted_contrast: true,
            ..strict()
        };
        let suggestion = suggest(gray, "+180".parse().unwrap(), &config).unwrap();
        assert_eq!(
            suggestion.contrast_with_white,
            round2(contrast(suggestion.suggested, Color::WHITE))
        );
        assert_eq!(
            suggestion.contrast_with_black,
            round2(contrast(suggestion.suggested, Color::BLACK))
        );
    }

    #[test]
    fn test_suggestion_json() {
        let suggestion =
            suggest(Color::from_rgb(255, 0, 0), "+180".parse().unwrap(), &HarmonyConfig::default())
                .unwrap();
        let json = serde_json::to_value(&suggestion).unwrap();
        assert_eq!(json["base"], "#ff0000");
        assert_eq!(json["suggested"], "#00ffff");
        assert_eq!(json["rotation"], "+180");
        assert_eq!(json["adjusted"], false);
        assert!(json.get("contrastWithWhite").is_some());
    }
}
