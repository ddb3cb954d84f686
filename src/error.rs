//! Error types for the seed_palette library

use thiserror::Error;

/// Result type alias for seed_palette operations
pub type Result<T> = std::result::Result<T, PaletteError>;

/// Error types for palette derivation
#[derive(Error, Debug)]
pub enum PaletteError {
    /// A seed or derived value could not be normalized to a color
    #[error("Invalid color {value:?}: {reason}")]
    InvalidColor { value: String, reason: String },

    /// No seed colors were supplied and the configured policy rejects that
    #[error("Seed set is empty")]
    EmptySeedSet,

    /// Invalid configuration parameter
    #[error("Invalid parameter: {parameter} = {value}")]
    InvalidParameter { parameter: String, value: String },

    /// Configuration file could not be read, written or parsed
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl PaletteError {
    /// Create an invalid color error
    pub fn invalid_color(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidColor {
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter(parameter: impl Into<String>, value: impl ToString) -> Self {
        Self::InvalidParameter {
            parameter: parameter.into(),
            value: value.to_string(),
        }
    }

    /// Create a configuration error with context
    pub fn config<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ConfigError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Check if the caller can recover by changing its input
    ///
    /// Bad seeds and an empty seed list are fixed by supplying other colors;
    /// configuration problems need the configuration itself corrected.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            PaletteError::InvalidColor { .. } | PaletteError::EmptySeedSet
        )
    }

    /// Get user-friendly error description for application display
    pub fn user_message(&self) -> String {
        match self {
            PaletteError::InvalidColor { value, .. } => {
                format!("\"{}\" is not a color. Use a hex code like #3366cc or an RGB triple.", value)
            }
            PaletteError::EmptySeedSet => {
                "No colors were found to build a palette from. Please try a different image.".to_string()
            }
            PaletteError::InvalidParameter { parameter, .. } => {
                format!("The setting \"{}\" has an invalid value.", parameter)
            }
            PaletteError::ConfigError { .. } => {
                "Could not load the palette settings. Please check the configuration file.".to_string()
            }
        }
    }
}
