//! Color model: canonical values, conversions, adjustments, contrast and naming
//!
//! Everything else in the crate talks to colors through this module.

pub mod adjust;
pub mod contrast;
pub mod conversion;
pub mod naming;

pub use adjust::HueShift;
pub use contrast::{contrast, round2, AccessibilityTier};
pub use conversion::{Color, ColorValue};
pub use naming::{hue_name, name_color};
