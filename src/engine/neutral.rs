//! Light and dark neutrals from the Lab average of the seeds

use log::{debug, warn};
use palette::Lab;
use serde::{Deserialize, Serialize};

use crate::color::{contrast, name_color, round2, Color};
use crate::config::{EmptySeedPolicy, NeutralConfig};
use crate::constants::{lab::MID_GRAY_LAB, labels};
use crate::{PaletteError, Result};

/// Contrast of a neutral against one seed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedContrast {
    pub color: Color,
    pub ratio: f64,
}

/// A low-saturation background or text tone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Neutral {
    pub hex: Color,
    pub label: String,
    pub name: String,
    /// One entry per seed, in seed order
    pub contrast: Vec<SeedContrast>,
}

impl Neutral {
    fn new(color: Color, label: &str, seeds: &[Color]) -> Self {
        let contrast = seeds
            .iter()
            .map(|&seed| SeedContrast {
                color: seed,
                ratio: round2(contrast(color, seed)),
            })
            .collect();

        Self {
            hex: color,
            label: label.to_string(),
            name: name_color(color),
            contrast,
        }
    }
}

/// Derive the light and dark neutrals, light first
///
/// The seeds are averaged in Lab; the light neutral is that average
/// brightened then desaturated, the dark one darkened then desaturated.
///
/// # Errors
///
/// Returns `PaletteError::EmptySeedSet` for no seeds under
/// [`EmptySeedPolicy::Reject`]. Under [`EmptySeedPolicy::MidGray`] the
/// average is replaced by Lab mid gray and both contrast lists are empty.
pub fn synthesize_neutrals(
    seeds: &[Color],
    config: &NeutralConfig,
    policy: EmptySeedPolicy,
) -> Result<[Neutral; 2]> {
    let average = match Color::average(seeds) {
        Some(average) => average?,
        None => match policy {
            EmptySeedPolicy::Reject => return Err(PaletteError::EmptySeedSet),
            EmptySeedPolicy::MidGray => {
                warn!("No seed colors; deriving neutrals from mid gray");
                let [l, a, b] = MID_GRAY_LAB;
                Color::from_lab(Lab::new(l, a, b))?
            }
        },
    };

    let light = average
        .brighten(config.lightness_amount)?
        .desaturate(config.desaturate_amount)?;
    let dark = average
        .darken(config.lightness_amount)?
        .desaturate(config.desaturate_amount)?;

    debug!("Seed average {} gives neutrals {} and {}", average, light, dark);

    Ok([
        Neutral::new(light, labels::LIGHT_NEUTRAL, seeds),
        Neutral::new(dark, labels::DARK_NEUTRAL, seeds),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeds() -> Vec<Color> {
        vec![
            Color::from_rgb(200, 40, 40),
            Color::from_rgb(40, 120, 200),
            Color::from_rgb(230, 200, 60),
        ]
    }

    #[test]
    fn test_light_then_dark() {
        let [light, dark] =
            synthesize_neutrals(&seeds(), &NeutralConfig::default(), EmptySeedPolicy::Reject).unwrap();
        assert_eq!(light.label, "Suggested Light Neutral");
        assert_eq!(dark.label, "Suggested Dark Neutral");
        assert!(light.hex.lightness() > dark.hex.lightness());
    }

    #[test]
    fn test_neutrals_are_low_chroma() {
        let seeds = seeds();
        let average = Color::average(&seeds).unwrap().unwrap();
        let [light, dark] =
            synthesize_neutrals(&seeds, &NeutralConfig::default(), EmptySeedPolicy::Reject).unwrap();
        assert!(light.hex.to_lch().chroma <= average.to_lch().chroma);
        assert!(dark.hex.to_lch().chroma <= average.to_lch().chroma);
    }

    #[test]
    fn test_contrast_per_seed_in_order() {
        let seeds = seeds();
        let [light, dark] =
            synthesize_neutrals(&seeds, &NeutralConfig::default(), EmptySeedPolicy::Reject).unwrap();
        for neutral in [&light, &dark] {
            let colors: Vec<Color> = neutral.contrast.iter().map(|c| c.color).collect();
            assert_eq!(colors, seeds);
            for entry in &neutral.contrast {
                assert_eq!(entry.ratio, round2(contrast(neutral.hex, entry.color)));
            }
        }
    }

    #[test]
    fn test_empty_seeds_rejected() {
        let result = synthesize_neutrals(&[], &NeutralConfig::default(), EmptySeedPolicy::Reject);
        assert!(matches!(result, Err(PaletteError::EmptySeedSet)));
    }

    #[test]
    fn test_empty_seeds_mid_gray() {
        let [light, dark] =
            synthesize_neutrals(&[], &NeutralConfig::default(), EmptySeedPolicy::MidGray).unwrap();
        assert!(light.contrast.is_empty());
        assert!(dark.contrast.is_empty());
        // 50 + 54 and 50 - 54 L* clip to the ends of the scale
        assert_eq!(light.hex, Color::WHITE);
        assert_eq!(dark.hex, Color::BLACK);
        assert_eq!(light.hex.to_hex().len(), 7);
    }

    #[test]
    fn test_neutral_json_keys() {
        let [light, _] =
            synthesize_neutrals(&seeds(), &NeutralConfig::default(), EmptySeedPolicy::Reject).unwrap();
        let json = serde_json::to_value(&light).unwrap();
        assert!(json["hex"].as_str().unwrap().starts_with('#'));
        assert_eq!(json["contrast"].as_array().unwrap().len(), 3);
        assert!(json["contrast"][0].get("ratio").is_some());
    }
}
