//! Configuration structures for the palette derivation engine.
//!
//! This module defines the tunable parameters of each derivation stage,
//! grouped the same way the engine is split up.
//!
//! # Configuration Loading
//!
//! Configuration can be loaded from JSON files or constructed programmatically:
//!
//! ```no_run
//! use seed_palette::EngineConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = EngineConfig::from_json_file(Path::new("palette.json"))?;
//!
//! // Or use defaults
//! let config = EngineConfig::default();
//! # Ok::<(), seed_palette::PaletteError>(())
//! ```
//!
//! # Configuration Sections
//!
//! - [`ExpansionConfig`]: palette variant amounts
//! - [`AccessibilityConfig`]: contrast tier thresholds
//! - [`HarmonyConfig`]: harmony rotations and the legibility fix
//! - [`NeutralConfig`]: neutral lightness and desaturation
//! - [`EmptySeedPolicy`]: what to do with an empty seed list

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::color::HueShift;
use crate::constants::{defaults, wcag};
use crate::{PaletteError, Result};

/// Complete engine configuration.
///
/// Every section falls back to its defaults when missing, so a file only
/// needs to mention what it changes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Palette expansion parameters
    pub expansion: ExpansionConfig,

    /// Accessibility tier thresholds
    pub accessibility: AccessibilityConfig,

    /// Harmony suggestion parameters
    pub harmony: HarmonyConfig,

    /// Neutral synthesis parameters
    pub neutrals: NeutralConfig,

    /// Behaviour for an empty seed list
    pub empty_seeds: EmptySeedPolicy,
}

/// Palette expansion parameters.
///
/// Each seed yields brighten, identity, darken, and a hue rotation either way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpansionConfig {
    /// Brighten/darken amount for the lighter and darker variants
    pub lightness_amount: f32,

    /// Hue rotation in degrees for the two analogous variants
    pub hue_offset: f32,
}

impl Default for ExpansionConfig {
    fn default() -> Self {
        Self {
            lightness_amount: defaults::VARIANT_LIGHTNESS_AMOUNT,
            hue_offset: defaults::VARIANT_HUE_OFFSET,
        }
    }
}

/// Contrast ratio thresholds for the accessibility tiers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessibilityConfig {
    /// Minimum ratio for the AA tier
    pub aa_threshold: f64,

    /// Minimum ratio for the AA-Large tier
    pub aa_large_threshold: f64,
}

impl Default for AccessibilityConfig {
    fn default() -> Self {
        Self {
            aa_threshold: wcag::AA_NORMAL,
            aa_large_threshold: wcag::AA_LARGE,
        }
    }
}

/// Harmony suggestion parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarmonyConfig {
    /// Hue rotations applied to each seed, in output order
    pub rotations: Vec<HueShift>,

    /// A candidate below this ratio against both white and black is darkened
    pub legibility_threshold: f64,

    /// Darken amount for illegible candidates
    pub darken_amount: f32,

    /// Report contrast of the final (possibly darkened) color instead of the candidate
    pub report_adjusted_contrast: bool,
}

impl Default for HarmonyConfig {
    fn default() -> Self {
        let rotations = defaults::HARMONY_ROTATIONS
            .iter()
            .filter_map(|s| s.parse().ok())
            .collect();
        Self {
            rotations,
            legibility_threshold: wcag::AA_NORMAL,
            darken_amount: defaults::HARMONY_DARKEN_AMOUNT,
            report_adjusted_contrast: false,
        }
    }
}

/// Neutral synthesis parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NeutralConfig {
    /// Brighten amount for the light neutral and darken amount for the dark one
    pub lightness_amount: f32,

    /// Desaturate amount applied to both neutrals
    pub desaturate_amount: f32,
}

impl Default for NeutralConfig {
    fn default() -> Self {
        Self {
            lightness_amount: defaults::NEUTRAL_LIGHTNESS_AMOUNT,
            desaturate_amount: defaults::NEUTRAL_DESATURATE_AMOUNT,
        }
    }
}

/// What an empty seed list produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EmptySeedPolicy {
    /// Fail with `PaletteError::EmptySeedSet`
    #[default]
    Reject,

    /// Return empty palette, matrix and suggestions, with neutrals built
    /// from Lab mid gray and no seed contrasts
    MidGray,
}

impl EngineConfig {
    /// Check that every amount and threshold is usable
    ///
    /// # Errors
    ///
    /// Returns `PaletteError::InvalidParameter` naming the first bad field
    pub fn validate(&self) -> Result<()> {
        non_negative("expansion.lightness_amount", self.expansion.lightness_amount)?;
        finite("expansion.hue_offset", self.expansion.hue_offset)?;

        let access = &self.accessibility;
        positive_ratio("accessibility.aa_threshold", access.aa_threshold)?;
        positive_ratio("accessibility.aa_large_threshold", access.aa_large_threshold)?;
        if access.aa_large_threshold > access.aa_threshold {
            return Err(PaletteError::invalid_parameter(
                "accessibility.aa_large_threshold",
                format!("{} (above aa_threshold {})", access.aa_large_threshold, access.aa_threshold),
            ));
        }

        positive_ratio("harmony.legibility_threshold", self.harmony.legibility_threshold)?;
        non_negative("harmony.darken_amount", self.harmony.darken_amount)?;

        non_negative("neutrals.lightness_amount", self.neutrals.lightness_amount)?;
        non_negative("neutrals.desaturate_amount", self.neutrals.desaturate_amount)?;

        Ok(())
    }

    /// Load configuration from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| PaletteError::config(format!("Failed to read {}", path.display()), e))?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| PaletteError::config(format!("Failed to parse {}", path.display()), e))?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| PaletteError::config("Failed to serialize configuration", e))?;
        std::fs::write(path, json)
            .map_err(|e| PaletteError::config(format!("Failed to write {}", path.display()), e))?;
        Ok(())
    }
}

fn finite(parameter: &str, value: f32) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(PaletteError::invalid_parameter(parameter, value))
    }
}

fn non_negative(parameter: &str, value: f32) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(PaletteError::invalid_parameter(parameter, value))
    }
}

fn positive_ratio(parameter: &str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 1.0 {
        Ok(())
    } else {
        Err(PaletteError::invalid_parameter(parameter, value))
    }
}
