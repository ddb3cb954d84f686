//! Canonical color value and color space conversions
//!
//! [`Color`] stores nothing but three sRGB channels, which is exactly the
//! information in its hex string. Hue, lightness and saturation are computed
//! from those channels each time they are asked for:
//! - sRGB (u8) to/from CIE Lab and LCh under D65
//! - sRGB to/from HSL for hue rotation
//! - Hex parsing and formatting

use std::fmt;
use std::str::FromStr;

use palette::{FromColor, Hsl, Lab, Lch, Srgb};
use serde::{Deserialize, Serialize};

use crate::{PaletteError, Result};

/// Immutable sRGB color identified by its canonical hex string
///
/// Equality, hashing and ordering follow the channels, so two colors with
/// the same hex are the same color regardless of how they were produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
}

impl Color {
    pub const WHITE: Color = Color::from_rgb(255, 255, 255);
    pub const BLACK: Color = Color::from_rgb(0, 0, 0);

    /// Create a color from 8-bit sRGB channels
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// The 8-bit sRGB channels
    pub fn rgb(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Parse a hex color string
    ///
    /// Accepts `#rrggbb`, `rrggbb`, `#rgb` and `rgb` in any letter case.
    ///
    /// # Errors
    ///
    /// Returns `PaletteError::InvalidColor` for any other input
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.trim();
        let digits = digits.strip_prefix('#').unwrap_or(digits);

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(PaletteError::invalid_color(hex, "expected only hexadecimal digits"));
        }

        let channel = |s: &str| {
            u8::from_str_radix(s, 16).map_err(|e| PaletteError::invalid_color(hex, e.to_string()))
        };

        match digits.len() {
            6 => Ok(Self::from_rgb(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            3 => {
                // #abc is shorthand for #aabbcc
                let short = |i: usize| channel(&digits[i..=i]).map(|v| v * 17);
                Ok(Self::from_rgb(short(0)?, short(1)?, short(2)?))
            }
            n => Err(PaletteError::invalid_color(
                hex,
                format!("expected 3 or 6 hex digits, got {}", n),
            )),
        }
    }

    /// Canonical lowercase `#rrggbb` representation
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Convert to floating point sRGB in [0, 1]
    pub fn to_srgb(self) -> Srgb {
        Srgb::new(self.r, self.g, self.b).into_format()
    }

    /// Convert from floating point sRGB, clipping each channel to [0, 1]
    ///
    /// # Errors
    ///
    /// Returns `PaletteError::InvalidColor` if any channel is not finite
    pub fn from_srgb(srgb: Srgb) -> Result<Self> {
        let channel = |v: f32| {
            if v.is_finite() {
                Ok((v.clamp(0.0, 1.0) * 255.0).round() as u8)
            } else {
                Err(PaletteError::invalid_color(
                    format!("srgb({}, {}, {})", srgb.red, srgb.green, srgb.blue),
                    "non-finite channel",
                ))
            }
        };
        Ok(Self::from_rgb(
            channel(srgb.red)?,
            channel(srgb.green)?,
            channel(srgb.blue)?,
        ))
    }

    /// Convert to CIE Lab (D65)
    pub fn to_lab(self) -> Lab {
        Lab::from_color(self.to_srgb())
    }

    /// Convert from CIE Lab (D65), clipping out-of-gamut results to sRGB
    pub fn from_lab(lab: Lab) -> Result<Self> {
        Self::from_srgb(Srgb::from_color(lab))
    }

    /// Convert to CIE LCh (cylindrical Lab)
    pub fn to_lch(self) -> Lch {
        Lch::from_color(self.to_lab())
    }

    /// Convert from CIE LCh, clipping out-of-gamut results to sRGB
    pub fn from_lch(lch: Lch) -> Result<Self> {
        Self::from_lab(Lab::from_color(lch))
    }

    /// Convert to HSL
    pub fn to_hsl(self) -> Hsl {
        Hsl::from_color(self.to_srgb())
    }

    /// Convert from HSL
    pub fn from_hsl(hsl: Hsl) -> Result<Self> {
        Self::from_srgb(Srgb::from_color(hsl))
    }

    /// Whether all three channels are equal, leaving hue undefined
    pub fn is_achromatic(self) -> bool {
        self.r == self.g && self.g == self.b
    }

    /// HSL hue in degrees, normalized to [0, 360)
    ///
    /// Grays, black and white have no hue and return `None`.
    pub fn hue(self) -> Option<f32> {
        if self.is_achromatic() {
            return None;
        }
        let degrees = self.to_hsl().hue.into_positive_degrees();
        // into_positive_degrees can land exactly on 360.0 after f32 rounding
        Some(degrees.rem_euclid(360.0) % 360.0)
    }

    /// Perceptual lightness (CIE L*) in [0, 100]
    pub fn lightness(self) -> f32 {
        self.to_lab().l.clamp(0.0, 100.0)
    }

    /// HSL saturation in [0, 1]
    pub fn saturation(self) -> f32 {
        if self.is_achromatic() {
            return 0.0;
        }
        self.to_hsl().saturation.clamp(0.0, 1.0)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl Serialize for Color {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        ColorValue::deserialize(deserializer)?
            .resolve()
            .map_err(serde::de::Error::custom)
    }
}

/// Any representation of a seed color the engine accepts
///
/// Image analysis hands over RGB triples; people and configuration files
/// tend to write hex strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorValue {
    Hex(String),
    Rgb([u8; 3]),
}

impl ColorValue {
    /// Normalize to a [`Color`]
    ///
    /// # Errors
    ///
    /// Returns `PaletteError::InvalidColor` if the hex string does not parse
    pub fn resolve(&self) -> Result<Color> {
        match self {
            ColorValue::Hex(hex) => Color::from_hex(hex),
            ColorValue::Rgb([r, g, b]) => Ok(Color::from_rgb(*r, *g, *b)),
        }
    }
}

impl FromStr for ColorValue {
    type Err = PaletteError;

    /// Parse either a hex string or a comma separated `r,g,b` triple
    fn from_str(s: &str) -> Result<Self> {
        if !s.contains(',') {
            Color::from_hex(s)?;
            return Ok(ColorValue::Hex(s.trim().to_string()));
        }

        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if parts.len() != 3 {
            return Err(PaletteError::invalid_color(
                s,
                format!("expected 3 comma separated channels, got {}", parts.len()),
            ));
        }

        let mut rgb = [0u8; 3];
        for (slot, part) in rgb.iter_mut().zip(&parts) {
            *slot = part
                .parse::<u8>()
                .map_err(|_| PaletteError::invalid_color(s, format!("channel {:?} is not in 0-255", part)))?;
        }
        Ok(ColorValue::Rgb(rgb))
    }
}

impl From<&str> for ColorValue {
    fn from(hex: &str) -> Self {
        ColorValue::Hex(hex.to_string())
    }
}

impl From<String> for ColorValue {
    fn from(hex: String) -> Self {
        ColorValue::Hex(hex)
    }
}

impl From<[u8; 3]> for ColorValue {
    fn from(rgb: [u8; 3]) -> Self {
        ColorValue::Rgb(rgb)
    }
}

impl From<Color> for ColorValue {
    fn from(color: Color) -> Self {
        ColorValue::Rgb(color.rgb())
    }
}
