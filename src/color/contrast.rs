//! WCAG 2.x contrast ratio and accessibility tiers

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::constants::wcag::{AA_LARGE, AA_NORMAL, LUMINANCE_OFFSET, LUMINANCE_WEIGHTS};

/// Linearize one 8-bit sRGB channel
fn srgb_to_linear(channel: u8) -> f64 {
    let v = f64::from(channel) / 255.0;
    if v <= 0.04045 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

impl Color {
    /// Relative luminance in [0, 1] per WCAG 2.1
    pub fn relative_luminance(self) -> f64 {
        self.rgb()
            .iter()
            .zip(LUMINANCE_WEIGHTS)
            .map(|(&channel, weight)| weight * srgb_to_linear(channel))
            .sum()
    }
}

/// WCAG contrast ratio between two colors
///
/// `(L1 + 0.05) / (L2 + 0.05)` with L1 the lighter luminance. Always in
/// [1, 21] and independent of argument order.
pub fn contrast(a: Color, b: Color) -> f64 {
    let la = a.relative_luminance();
    let lb = b.relative_luminance();
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + LUMINANCE_OFFSET) / (darker + LUMINANCE_OFFSET)
}

/// Round a ratio to two decimals for reporting
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Accessibility classification of a text/background contrast ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccessibilityTier {
    /// Passes for normal text
    #[serde(rename = "AA")]
    Aa,
    /// Passes for large text only
    #[serde(rename = "AA-Large")]
    AaLarge,
    #[serde(rename = "Fail")]
    Fail,
}

impl AccessibilityTier {
    /// Classify with the standard 4.5 / 3.0 thresholds
    pub fn classify(ratio: f64) -> Self {
        Self::classify_with(ratio, AA_NORMAL, AA_LARGE)
    }

    /// Classify with custom thresholds
    pub fn classify_with(ratio: f64, normal: f64, large: f64) -> Self {
        if ratio >= normal {
            AccessibilityTier::Aa
        } else if ratio >= large {
            AccessibilityTier::AaLarge
        } else {
            AccessibilityTier::Fail
        }
    }

    /// Whether text at this tier is usable at any size
    pub fn passes(self) -> bool {
        !matches!(self, AccessibilityTier::Fail)
    }
}

impl fmt::Display for AccessibilityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AccessibilityTier::Aa => "AA",
            AccessibilityTier::AaLarge => "AA-Large",
            AccessibilityTier::Fail => "Fail",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::wcag::MAX_RATIO;

    #[test]
    fn test_black_on_white_is_21() {
        let ratio = contrast(Color::WHITE, Color::BLACK);
        assert_eq!(round2(ratio), MAX_RATIO);
    }

    #[test]
    fn test_same_color_is_1() {
        let gray = Color::from_rgb(118, 118, 118);
        assert!((contrast(gray, gray) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_known_gray_on_white() {
        // #767676 is the lightest gray that passes AA on white
        let ratio = contrast(Color::from_rgb(0x76, 0x76, 0x76), Color::WHITE);
        assert_eq!(round2(ratio), 4.54);
    }

    #[test]
    fn test_order_independent() {
        let red = Color::from_rgb(255, 0, 0);
        assert_eq!(contrast(red, Color::WHITE), contrast(Color::WHITE, red));
    }

    #[test]
    fn test_relative_luminance_bounds() {
        assert_eq!(Color::BLACK.relative_luminance(), 0.0);
        assert!((Color::WHITE.relative_luminance() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(3.14159), 3.14);
        assert_eq!(round2(4.499), 4.5);
    }

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(AccessibilityTier::classify(4.5), AccessibilityTier::Aa);
        assert_eq!(AccessibilityTier::classify(4.49), AccessibilityTier::AaLarge);
        assert_eq!(AccessibilityTier::classify(3.0), AccessibilityTier::AaLarge);
        assert_eq!(AccessibilityTier::classify(2.99), AccessibilityTier::Fail);
        assert!(!AccessibilityTier::Fail.passes());
    }

    #[test]
    fn test_tier_serialization() {
        assert_eq!(serde_json::to_string(&AccessibilityTier::AaLarge).unwrap(), "\"AA-Large\"");
        assert_eq!(AccessibilityTier::Aa.to_string(), "AA");
    }
}
