//! Global error types for the LoveCalendar application.
//!
//! All error categories across the application are unified into a single
//! `LcError` enum with conversions from underlying library errors.

use thiserror::Error;

/// Convenience type alias for Results using LcError.
pub type LcResult<T> = Result<T, LcError>;

/// Unified error type covering all error categories in LoveCalendar.
#[derive(Error, Debug)]
pub enum LcError {
    // -- Configuration errors --
    /// Failed to load or parse application configuration.
    #[error("configuration error: {0}")]
    Config(String),

    // -- Storage errors --
    /// The key-value persistence layer failed to read or write a record.
    ///
    /// Raised by journal writes (add/delete/annotate); callers must not
    /// assume the mutation was persisted when they see this.
    #[error("storage error: {0}")]
    Storage(String),

    /// A persisted record was present but could not be decoded.
    ///
    /// Read paths treat this as "no data" and degrade to empty results;
    /// it never propagates out of the service layer.
    #[error("decode error: {0}")]
    Decode(String),

    // -- Journal errors --
    /// A date key was not a valid `YYYY-MM-DD` calendar date.
    #[error("invalid date key: {0}")]
    InvalidDate(String),

    // -- Theme errors --
    /// The requested theme key does not exist in the preset registry.
    #[error("theme not found: {0}")]
    ThemeNotFound(String),

    // -- Capture errors --
    /// The capture provider (camera/gallery analog) failed.
    #[error("capture error: {0}")]
    Capture(String),

    // -- File/IO errors --
    /// File system operation failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),

    // -- Service errors --
    /// A service failed to initialize.
    #[error("service init error: {0}")]
    ServiceInit(String),

    // -- Generic --
    /// Wrapping anyhow errors for interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<serde_json::Error> for LcError {
    fn from(e: serde_json::Error) -> Self {
        LcError::Serialization(e.to_string())
    }
}

impl From<toml::de::Error> for LcError {
    fn from(e: toml::de::Error) -> Self {
        LcError::Config(e.to_string())
    }
}
