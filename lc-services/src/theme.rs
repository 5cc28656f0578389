//! Theme service for managing the selected color theme.
//!
//! The selection is persisted as a bare theme key under its own record,
//! independent of the journal. Unknown or unreadable selections degrade to
//! the default preset so the app always has a usable palette.

use tracing::{info, warn};

use lc_core::constants::THEME_KEY;
use lc_core::error::{LcError, LcResult};
use lc_models::kv::KvStore;
use lc_models::models::theme::{self, AppTheme};

use crate::event_bus::{AppEvent, EventBus};
use crate::service::{Service, ServiceState};

/// Service for reading and switching the selected theme.
///
/// Emits ThemeChanged events through the event bus when the selection
/// changes so presentation code can re-render.
pub struct ThemeService {
    state: ServiceState,
    store: KvStore,
    event_bus: EventBus,
}

impl ThemeService {
    /// Create a new ThemeService.
    pub fn new(store: KvStore, event_bus: EventBus) -> Self {
        Self {
            state: ServiceState::Created,
            store,
            event_bus,
        }
    }

    /// List all built-in themes in presentation order.
    pub fn list_themes(&self) -> Vec<AppTheme> {
        theme::presets()
    }

    /// The currently selected theme.
    ///
    /// Falls back to the default preset when nothing has been persisted,
    /// the persisted key is unknown, or the record cannot be read.
    pub async fn selected_theme(&self) -> AppTheme {
        match self.store.get(THEME_KEY).await {
            Ok(Some(key)) => theme::find_theme(&key).unwrap_or_else(|| {
                warn!("persisted theme key {key:?} is unknown, using default");
                theme::default_theme()
            }),
            Ok(None) => theme::default_theme(),
            Err(e) => {
                warn!("failed to read theme selection, using default: {e}");
                theme::default_theme()
            }
        }
    }

    /// Select the theme with `key` and persist the choice.
    ///
    /// Returns the applied theme, or `ThemeNotFound` if the key does not
    /// name a preset. Storage failures propagate.
    pub async fn set_selected_theme(&self, key: &str) -> LcResult<AppTheme> {
        let theme =
            theme::find_theme(key).ok_or_else(|| LcError::ThemeNotFound(key.to_string()))?;

        self.store.set(THEME_KEY, key).await?;
        info!("applied theme: {key}");

        self.event_bus.emit(AppEvent::ThemeChanged {
            theme_key: key.to_string(),
        });
        Ok(theme)
    }
}

impl Service for ThemeService {
    fn name(&self) -> &str {
        "theme"
    }

    fn state(&self) -> ServiceState {
        self.state
    }

    fn init(&mut self) -> LcResult<()> {
        self.state = ServiceState::Running;
        info!("theme service initialized");
        Ok(())
    }

    fn shutdown(&mut self) -> LcResult<()> {
        self.state = ServiceState::Stopped;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lc_models::models::theme::{PRESET_PINK_LOVE, PRESET_ROSE_GOLD};

    fn make_service() -> ThemeService {
        ThemeService::new(KvStore::in_memory(), EventBus::new(16))
    }

    #[test]
    fn test_theme_service_name() {
        assert_eq!(make_service().name(), "theme");
    }

    #[test]
    fn test_list_themes() {
        assert_eq!(make_service().list_themes().len(), 5);
    }

    #[tokio::test]
    async fn test_default_when_nothing_persisted() {
        let svc = make_service();
        assert_eq!(svc.selected_theme().await.key, PRESET_PINK_LOVE);
    }

    #[tokio::test]
    async fn test_set_and_read_back() {
        let svc = make_service();
        let applied = svc.set_selected_theme(PRESET_ROSE_GOLD).await.unwrap();
        assert_eq!(applied.name, "Rose Gold");
        assert_eq!(svc.selected_theme().await.key, PRESET_ROSE_GOLD);
    }

    #[tokio::test]
    async fn test_unknown_key_is_rejected() {
        let svc = make_service();
        let result = svc.set_selected_theme("neonNights").await;
        assert!(matches!(result, Err(LcError::ThemeNotFound(_))));
        // Selection is unchanged
        assert_eq!(svc.selected_theme().await.key, PRESET_PINK_LOVE);
    }

    #[tokio::test]
    async fn test_unknown_persisted_key_degrades_to_default() {
        let store = KvStore::in_memory();
        store.set(THEME_KEY, "removedTheme").await.unwrap();

        let svc = ThemeService::new(store, EventBus::new(16));
        assert_eq!(svc.selected_theme().await.key, PRESET_PINK_LOVE);
    }

    #[tokio::test]
    async fn test_set_emits_event() {
        let bus = EventBus::new(16);
        let mut rx = bus.subscribe();
        let svc = ThemeService::new(KvStore::in_memory(), bus);

        svc.set_selected_theme(PRESET_ROSE_GOLD).await.unwrap();

        match rx.recv().await.unwrap() {
            AppEvent::ThemeChanged { theme_key } => assert_eq!(theme_key, PRESET_ROSE_GOLD),
            _ => panic!("expected ThemeChanged event"),
        }
    }
}
