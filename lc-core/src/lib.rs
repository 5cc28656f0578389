//! LoveCalendar Core - Foundation types, error handling, configuration, and logging.
//!
//! This crate provides the shared foundation used by all other LoveCalendar crates:
//! - Application configuration (storage location, logging preferences)
//! - Global error types covering all error categories
//! - Structured logging with tracing
//! - Platform directory resolution
//! - Common constants (storage keys, theme defaults, emoji suggestions)

pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod platform;

// Re-export commonly used items at the crate root
pub use config::AppConfig;
pub use error::{LcError, LcResult};
pub use logging::init_logging;
pub use platform::Platform;
