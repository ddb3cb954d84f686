//! Palette derivation stages
//!
//! Four pure functions over the seed colors. The expander feeds the
//! contrast matrix; harmony suggestions and neutrals read the seeds
//! directly, so the three branches can run side by side.

pub mod expander;
pub mod harmony;
pub mod matrix;
pub mod neutral;

pub use expander::{expand_palette, NamedColor};
pub use harmony::{suggest_harmonies, Suggestion};
pub use matrix::{build_contrast_matrix, ContrastPair};
pub use neutral::{synthesize_neutrals, Neutral, SeedContrast};
