//! Perceptual color adjustments
//!
//! Lightness and saturation changes happen in CIE Lab/LCh so that one unit
//! of adjustment looks roughly the same on every hue. Hue rotation happens
//! in HSL, which keeps saturation and HSL lightness fixed while the hue
//! wheel turns.

use std::fmt;
use std::str::FromStr;

use palette::{Hsl, Lab};
use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::constants::lab::ADJUST_STEP;
use crate::{PaletteError, Result};

/// Relative hue rotation in degrees, written like `"+30"` or `"-60"`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HueShift(f32);

impl HueShift {
    /// Create a shift of `degrees`
    ///
    /// # Errors
    ///
    /// Returns `PaletteError::InvalidParameter` if `degrees` is not finite
    pub fn new(degrees: f32) -> Result<Self> {
        if degrees.is_finite() {
            Ok(Self(degrees))
        } else {
            Err(PaletteError::invalid_parameter("hue_shift", degrees))
        }
    }

    pub fn degrees(self) -> f32 {
        self.0
    }
}

impl FromStr for HueShift {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
        let degrees = unsigned
            .parse::<f32>()
            .map_err(|_| PaletteError::invalid_parameter("hue_shift", s))?;
        Self::new(degrees)
    }
}

impl TryFrom<String> for HueShift {
    type Error = PaletteError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<HueShift> for String {
    fn from(shift: HueShift) -> Self {
        shift.to_string()
    }
}

impl fmt::Display for HueShift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:+}", self.0)
    }
}

impl Color {
    /// Raise Lab lightness by `amount` steps of 18 L*
    ///
    /// Results past the sRGB gamut are clipped channel by channel, so
    /// `brighten` of white is white.
    pub fn brighten(self, amount: f32) -> Result<Color> {
        let mut lab = self.to_lab();
        lab.l += ADJUST_STEP * amount;
        Color::from_lab(lab)
    }

    /// Lower Lab lightness by `amount` steps of 18 L*
    pub fn darken(self, amount: f32) -> Result<Color> {
        self.brighten(-amount)
    }

    /// Lower LCh chroma by `amount` steps of 18, stopping at gray
    pub fn desaturate(self, amount: f32) -> Result<Color> {
        let mut lch = self.to_lch();
        lch.chroma = (lch.chroma - ADJUST_STEP * amount).max(0.0);
        Color::from_lch(lch)
    }

    /// Rotate the HSL hue by `shift`, wrapping modulo 360
    ///
    /// Achromatic colors have no hue to rotate and come back unchanged.
    pub fn adjust_hue(self, shift: HueShift) -> Result<Color> {
        if self.is_achromatic() {
            return Ok(self);
        }
        let hsl = self.to_hsl();
        let hue = (hsl.hue.into_positive_degrees() + shift.degrees()).rem_euclid(360.0);
        Color::from_hsl(Hsl::new(hue, hsl.saturation, hsl.lightness))
    }

    /// Mean of `colors` taken in CIE Lab
    ///
    /// Averaging in Lab keeps the midpoint of saturated opposites from
    /// turning into the muddy gray an sRGB mean produces. Returns `None`
    /// for an empty slice.
    pub fn average(colors: &[Color]) -> Option<Result<Color>> {
        if colors.is_empty() {
            return None;
        }

        let n = colors.len() as f32;
        let (l, a, b) = colors.iter().map(|c| c.to_lab()).fold((0.0, 0.0, 0.0), |acc, lab| {
            (acc.0 + lab.l, acc.1 + lab.a, acc.2 + lab.b)
        });

        Some(Color::from_lab(Lab::new(l / n, a / n, b / n)))
    }
}
