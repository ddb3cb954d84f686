//! Descriptive color names from hue bands and Lab lightness

use crate::color::Color;
use crate::constants::lab::{DARK_THRESHOLD, VERY_LIGHT_THRESHOLD};

/// Name of the hue band containing `hue` (degrees)
///
/// The hue is normalized into [0, 360) first. The trailing "Color" arm only
/// catches non-finite input, which a real color never produces.
pub fn hue_name(hue: f32) -> &'static str {
    let hue = hue.rem_euclid(360.0);
    match hue {
        h if (0.0..30.0).contains(&h) || (330.0..360.0).contains(&h) => "Red",
        h if (30.0..60.0).contains(&h) => "Orange",
        h if (60.0..90.0).contains(&h) => "Yellow",
        h if (90.0..150.0).contains(&h) => "Green",
        h if (150.0..210.0).contains(&h) => "Cyan",
        h if (210.0..270.0).contains(&h) => "Blue",
        h if (270.0..330.0).contains(&h) => "Purple",
        _ => "Color",
    }
}

/// Human readable name such as "Dark Blue" or "Very Light Orange"
///
/// The prefix comes from CIE L*, not HSL lightness: above 80 is
/// "Very Light", below 30 is "Dark". Grays have no hue band and are
/// called "Color".
pub fn name_color(color: Color) -> String {
    let base = color.hue().map_or("Color", hue_name);
    let lightness = color.lightness();

    if lightness > VERY_LIGHT_THRESHOLD {
        format!("Very Light {}", base)
    } else if lightness < DARK_THRESHOLD {
        format!("Dark {}", base)
    } else {
        base.to_string()
    }
}
