//! CLI command implementations.

pub mod calendar;
pub mod photos;
pub mod settings;
pub mod status;
pub mod themes;

use lc_core::config::ConfigHandle;
use lc_core::error::LcResult;
use lc_models::kv::KvStore;
use lc_services::event_bus::EventBus;
use lc_services::journal::JournalService;
use lc_services::theme::ThemeService;

/// Helper to open the record store from config.
pub async fn open_store(config: &ConfigHandle) -> LcResult<KvStore> {
    let data_dir = config.read().await.effective_data_dir()?;
    KvStore::open(&data_dir)
}

/// Helper to build a journal service over the configured store.
pub async fn journal_service(config: &ConfigHandle) -> LcResult<JournalService> {
    let store = open_store(config).await?;
    Ok(JournalService::new(store, EventBus::new(16)))
}

/// Helper to build a theme service over the configured store.
pub async fn theme_service(config: &ConfigHandle) -> LcResult<ThemeService> {
    let store = open_store(config).await?;
    Ok(ThemeService::new(store, EventBus::new(16)))
}

/// Format an epoch-ms timestamp for display.
pub fn format_timestamp(timestamp_ms: i64) -> String {
    chrono::DateTime::from_timestamp_millis(timestamp_ms)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| timestamp_ms.to_string())
}

/// Truncate a string to a maximum length, appending an ellipsis if truncated.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{cut}...")
    }
}
