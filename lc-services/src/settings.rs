//! Settings service for application configuration persistence.
//!
//! Wraps the ConfigHandle to provide typed accessors for the configuration
//! sections: storage, logging, and calendar display.

use tracing::{debug, info};

use lc_core::config::ConfigHandle;
use lc_core::error::LcResult;

use crate::service::{Service, ServiceState};

/// Service for managing application settings.
///
/// Wraps the ConfigHandle to provide a service-compatible interface
/// for reading and writing application settings with typed accessors.
/// Settings are persisted to a TOML configuration file.
pub struct SettingsService {
    state: ServiceState,
    config: ConfigHandle,
}

impl SettingsService {
    /// Create a new SettingsService.
    pub fn new(config: ConfigHandle) -> Self {
        Self {
            state: ServiceState::Created,
            config,
        }
    }

    /// Get the config handle for direct access.
    pub fn config(&self) -> &ConfigHandle {
        &self.config
    }

    // ─── Storage settings ───────────────────────────────────────────────

    /// Get the configured journal data directory (empty = platform default).
    pub async fn data_dir(&self) -> String {
        self.config.read().await.storage.data_dir.clone()
    }

    /// Set the journal data directory.
    pub async fn set_data_dir(&self, dir: String) {
        let mut config = self.config.write().await;
        config.storage.data_dir = dir;
        debug!("data directory updated");
    }

    // ─── Logging settings ───────────────────────────────────────────────

    /// Get the log level.
    pub async fn log_level(&self) -> String {
        self.config.read().await.logging.level.clone()
    }

    /// Set the log level.
    pub async fn set_log_level(&self, level: String) {
        let mut config = self.config.write().await;
        config.logging.level = level;
    }

    /// Whether JSON structured logging is enabled.
    pub async fn json_logging(&self) -> bool {
        self.config.read().await.logging.json_output
    }

    /// Set whether to use JSON structured logging.
    pub async fn set_json_logging(&self, json: bool) {
        let mut config = self.config.write().await;
        config.logging.json_output = json;
    }

    // ─── Calendar settings ──────────────────────────────────────────────

    /// Whether past days without a photo render dimmed.
    pub async fn dim_empty_past_days(&self) -> bool {
        self.config.read().await.calendar.dim_empty_past_days
    }

    /// Set whether past days without a photo render dimmed.
    pub async fn set_dim_empty_past_days(&self, dim: bool) {
        let mut config = self.config.write().await;
        config.calendar.dim_empty_past_days = dim;
    }

    /// How many photos a day cell previews.
    pub async fn preview_count(&self) -> u32 {
        self.config.read().await.calendar.preview_count
    }

    /// Set how many photos a day cell previews.
    pub async fn set_preview_count(&self, count: u32) {
        let mut config = self.config.write().await;
        config.calendar.preview_count = count;
    }

    // ─── Persistence ────────────────────────────────────────────────────

    /// Save the current configuration to disk.
    pub async fn save(&self) -> LcResult<()> {
        self.config.save().await
    }

    /// Export all settings as a JSON value.
    pub async fn export_as_json(&self) -> serde_json::Value {
        let config = self.config.read().await;
        serde_json::to_value(&*config).unwrap_or(serde_json::Value::Null)
    }
}

impl Service for SettingsService {
    fn name(&self) -> &str {
        "settings"
    }

    fn state(&self) -> ServiceState {
        self.state
    }

    fn init(&mut self) -> LcResult<()> {
        self.state = ServiceState::Running;
        info!("settings service initialized");
        Ok(())
    }

    fn shutdown(&mut self) -> LcResult<()> {
        self.state = ServiceState::Stopped;
        Ok(())
    }
}
