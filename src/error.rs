//! Error types for Room-Furnish
//!
//! Store operations never fail; these errors only surface at the loading
//! boundaries (catalog, presets, configuration, scripts) and in the CLI.

use thiserror::Error;

/// Result type alias for Room-Furnish operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for Room-Furnish
#[derive(Error, Debug)]
pub enum Error {
    /// Catalog failed validation (duplicates, unknown ids, bad prices)
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Furnished-room preset could not be loaded
    #[error("Preset error: {0}")]
    Preset(String),

    /// Price is negative or not a decimal
    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    /// Unknown room type, category or filter facet name
    #[error("Unknown {kind}: {value}")]
    Unknown { kind: &'static str, value: String },

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn unknown(kind: &'static str, value: impl Into<String>) -> Self {
        Error::Unknown {
            kind,
            value: value.into(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
