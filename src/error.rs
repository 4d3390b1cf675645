//! Error types for the palette_scan library

use thiserror::Error;

/// Result type alias for palette_scan operations
pub type Result<T> = std::result::Result<T, ExtractionError>;

/// Error types for palette extraction and classification
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// Image file could not be loaded or decoded
    #[error("Failed to load image: {message}")]
    ImageLoadError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// User-supplied parameter failed to parse or is out of domain
    #[error("Invalid parameter: {parameter} = {value}")]
    InvalidParameter { parameter: String, value: String },

    /// Pixel buffer length is not a whole number of RGB triples
    #[error("Malformed pixel buffer: {len} bytes is not a multiple of 3")]
    MalformedPixelBuffer { len: usize },

    /// Parameter file could not be read or parsed
    #[error("Failed to load parameters: {message}")]
    ConfigLoadError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Reference catalog could not be loaded or parsed
    #[error("Failed to load reference catalog: {message}")]
    CatalogLoadError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Classification was requested against a catalog with no entries
    #[error("Reference catalog is empty")]
    CatalogEmpty,

    /// Export or accent selection requested before any extraction run
    #[error("No palette available: run an extraction first")]
    NoPalette,
}

impl ExtractionError {
    /// Create an image load error with context
    pub fn image_load<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ImageLoadError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an invalid-parameter error
    pub fn invalid_parameter(parameter: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidParameter {
            parameter: parameter.into(),
            value: value.into(),
        }
    }

    /// Create a parameter file load error with context
    pub fn config_load<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ConfigLoadError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a catalog load error with context
    pub fn catalog_load<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::CatalogLoadError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Check if this error indicates a condition the user can correct
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ExtractionError::InvalidParameter { .. } | ExtractionError::NoPalette
        )
    }

    /// Get user-friendly error description for application display
    pub fn user_message(&self) -> String {
        match self {
            ExtractionError::ImageLoadError { .. } => {
                "Could not load the image. Please check the file format and try again.".to_string()
            }
            ExtractionError::InvalidParameter { parameter, .. } => {
                format!(
                    "'{}' must be a non-negative number. Please correct it and retry.",
                    parameter
                )
            }
            ExtractionError::NoPalette => {
                "Process an image before selecting accents or exporting colors.".to_string()
            }
            ExtractionError::CatalogEmpty | ExtractionError::CatalogLoadError { .. } => {
                "The named-color catalog is missing or invalid. Reinstall or fix the catalog file."
                    .to_string()
            }
            _ => "Palette extraction failed. Please try with a different image.".to_string(),
        }
    }
}
