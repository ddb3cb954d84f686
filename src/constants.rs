//! Reference values for palette derivation
//!
//! Compile-time constants for perceptual adjustments and accessibility
//! classification. Configurable counterparts live in [`crate::config`];
//! these are the defaults and the fixed parts of the formulas.

/// CIE Lab adjustment steps
pub mod lab {
    /// L* (or LCh chroma) change per unit of brighten/darken/desaturate
    pub const ADJUST_STEP: f32 = 18.0;

    /// Mid gray used when the empty seed policy asks for a degenerate neutral
    pub const MID_GRAY_LAB: [f32; 3] = [50.0, 0.0, 0.0];

    /// Lightness above which a color is named "Very Light"
    pub const VERY_LIGHT_THRESHOLD: f32 = 80.0;

    /// Lightness below which a color is named "Dark"
    pub const DARK_THRESHOLD: f32 = 30.0;
}

/// WCAG 2.x contrast
pub mod wcag {
    /// Flare term added to both luminances in the contrast ratio
    pub const LUMINANCE_OFFSET: f64 = 0.05;

    /// Rec. 709 luminance weights for linear R, G, B
    pub const LUMINANCE_WEIGHTS: [f64; 3] = [0.2126, 0.7152, 0.0722];

    /// Minimum ratio for normal text (AA)
    pub const AA_NORMAL: f64 = 4.5;

    /// Minimum ratio for large text (AA Large)
    pub const AA_LARGE: f64 = 3.0;

    /// Ratio between pure white and pure black
    pub const MAX_RATIO: f64 = 21.0;
}

/// Default derivation parameters
pub mod defaults {
    /// Brighten/darken amount for palette variants
    pub const VARIANT_LIGHTNESS_AMOUNT: f32 = 1.0;

    /// Hue offset for palette variants, in degrees
    pub const VARIANT_HUE_OFFSET: f32 = 30.0;

    /// Harmony rotations: complementary, then the two triadic neighbours
    pub const HARMONY_ROTATIONS: [&str; 3] = ["+180", "+60", "-60"];

    /// Darken amount applied to illegible harmony suggestions
    pub const HARMONY_DARKEN_AMOUNT: f32 = 2.0;

    /// Brighten/darken amount applied to the seed average for neutrals
    pub const NEUTRAL_LIGHTNESS_AMOUNT: f32 = 3.0;

    /// Desaturate amount applied to neutrals
    pub const NEUTRAL_DESATURATE_AMOUNT: f32 = 2.0;
}

/// Neutral labels
pub mod labels {
    pub const LIGHT_NEUTRAL: &str = "Suggested Light Neutral";
    pub const DARK_NEUTRAL: &str = "Suggested Dark Neutral";
}
