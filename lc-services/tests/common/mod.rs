//! Shared test utilities for integration tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use lc_core::config::{AppConfig, ConfigHandle};
use lc_core::error::{LcError, LcResult};
use lc_models::kv::{KvBackend, KvStore};
use lc_models::models::journal::DateKey;
use lc_services::event_bus::EventBus;
use lc_services::journal::JournalService;

/// Create an in-memory record store. Contents survive for the life of the
/// store, so two services sharing a clone see the same records (the
/// "process restart" simulation).
pub fn create_test_store() -> KvStore {
    KvStore::in_memory()
}

/// Create a ConfigHandle wrapping a default config.
pub fn create_test_config_handle() -> ConfigHandle {
    ConfigHandle::new(AppConfig::default())
}

/// Create an EventBus with a small buffer suitable for tests.
pub fn create_test_event_bus() -> EventBus {
    EventBus::new(64)
}

/// Create a JournalService over the given store.
pub fn create_journal_service(store: KvStore) -> JournalService {
    JournalService::new(store, create_test_event_bus())
}

/// Parse a date key, panicking on bad test input.
pub fn date(s: &str) -> DateKey {
    DateKey::parse(s).expect("valid test date key")
}

/// Backend whose reads and writes can be switched to fail, for exercising
/// storage-failure propagation.
pub struct FlakyBackend {
    inner: RwLock<std::collections::HashMap<String, String>>,
    pub fail_reads: AtomicBool,
    pub fail_writes: AtomicBool,
}

impl FlakyBackend {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            inner: RwLock::new(std::collections::HashMap::new()),
            fail_reads: AtomicBool::new(false),
            fail_writes: AtomicBool::new(false),
        })
    }
}

#[async_trait]
impl KvBackend for FlakyBackend {
    async fn get(&self, key: &str) -> LcResult<Option<String>> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(LcError::Storage("injected read failure".into()));
        }
        Ok(self.inner.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> LcResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(LcError::Storage("injected write failure".into()));
        }
        self.inner
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> LcResult<()> {
        self.inner.write().await.remove(key);
        Ok(())
    }
}
