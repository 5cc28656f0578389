//! LoveCalendar Services - Business logic and service layer.
//!
//! This crate provides the service trait, service registry for dependency
//! injection, and all concrete service implementations covering:
//! - Photo journal persistence (add, delete, annotate, derived views)
//!   with serialized read-modify-write cycles
//! - Theme selection persistence and the preset registry
//! - Settings persistence (typed accessors for all config sections)
//! - Capture provider seam (camera/gallery analog for the CLI)
//! - Event bus (typed intra-service communication)

pub mod capture;
pub mod event_bus;
pub mod journal;
pub mod registry;
pub mod service;
pub mod settings;
pub mod theme;

// Re-export key types
pub use capture::{CaptureProvider, FileImport};
pub use event_bus::{AppEvent, EventBus};
pub use journal::JournalService;
pub use registry::ServiceRegistry;
pub use service::{Service, ServiceState};
pub use settings::SettingsService;
pub use theme::ThemeService;
