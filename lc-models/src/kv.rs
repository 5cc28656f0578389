//! Key-value record store: initialization, backends, and lifecycle.
//!
//! The journal and the theme selection are persisted as whole records under
//! fixed keys. `KvStore` wraps a pluggable asynchronous backend: a
//! file-per-key store under the application data directory in production,
//! or an in-memory map for tests.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::info;

use lc_core::error::{LcError, LcResult};

/// Asynchronous key-value persistence backend.
///
/// Both operations are fallible: any I/O problem surfaces as
/// `LcError::Storage` and is the caller's to handle.
#[async_trait]
pub trait KvBackend: Send + Sync {
    /// Read the record stored under `key`, if any.
    async fn get(&self, key: &str) -> LcResult<Option<String>>;

    /// Write `value` as the full record under `key`, replacing any
    /// previous value.
    async fn set(&self, key: &str, value: &str) -> LcResult<()>;

    /// Delete the record under `key`. Missing keys are not an error.
    async fn remove(&self, key: &str) -> LcResult<()>;
}

/// Key-value store wrapper providing initialization and shared access.
#[derive(Clone)]
pub struct KvStore {
    backend: Arc<dyn KvBackend>,
}

impl KvStore {
    /// Open a file-backed store rooted at `dir`, creating the directory
    /// if needed. Each key becomes one file under the root.
    pub fn open(dir: &Path) -> LcResult<Self> {
        std::fs::create_dir_all(dir)?;
        info!("opened key-value store at {}", dir.display());
        Ok(Self {
            backend: Arc::new(FileBackend {
                root: dir.to_path_buf(),
            }),
        })
    }

    /// Create an in-memory store. Contents do not survive the process;
    /// intended for tests.
    pub fn in_memory() -> Self {
        Self {
            backend: Arc::new(MemoryBackend {
                records: RwLock::new(HashMap::new()),
            }),
        }
    }

    /// Wrap a custom backend.
    pub fn with_backend(backend: Arc<dyn KvBackend>) -> Self {
        Self { backend }
    }

    /// Read the record stored under `key`, if any.
    pub async fn get(&self, key: &str) -> LcResult<Option<String>> {
        self.backend.get(key).await
    }

    /// Write `value` as the full record under `key`.
    pub async fn set(&self, key: &str, value: &str) -> LcResult<()> {
        self.backend.set(key, value).await
    }

    /// Delete the record under `key`.
    pub async fn remove(&self, key: &str) -> LcResult<()> {
        self.backend.remove(key).await
    }
}

/// File-per-key backend. Record contents are written verbatim; callers
/// own the encoding.
struct FileBackend {
    root: PathBuf,
}

impl FileBackend {
    fn record_path(&self, key: &str) -> PathBuf {
        // Keys are fixed app constants, but sanitize anyway so a stray
        // separator can never escape the root.
        let safe: String = key
            .chars()
            .map(|c| match c {
                'a'..='z' | 'A'..='Z' | '0'..='9' | '_' | '-' | '.' => c,
                _ => '_',
            })
            .collect();
        self.root.join(format!("{safe}.json"))
    }
}

#[async_trait]
impl KvBackend for FileBackend {
    async fn get(&self, key: &str) -> LcResult<Option<String>> {
        let path = self.record_path(key);
        match tokio::fs::read_to_string(&path).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(LcError::Storage(format!(
                "read {} failed: {e}",
                path.display()
            ))),
        }
    }

    async fn set(&self, key: &str, value: &str) -> LcResult<()> {
        let path = self.record_path(key);
        tokio::fs::write(&path, value)
            .await
            .map_err(|e| LcError::Storage(format!("write {} failed: {e}", path.display())))
    }

    async fn remove(&self, key: &str) -> LcResult<()> {
        let path = self.record_path(key);
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(LcError::Storage(format!(
                "remove {} failed: {e}",
                path.display()
            ))),
        }
    }
}

/// In-memory backend for tests.
struct MemoryBackend {
    records: RwLock<HashMap<String, String>>,
}

#[async_trait]
impl KvBackend for MemoryBackend {
    async fn get(&self, key: &str) -> LcResult<Option<String>> {
        Ok(self.records.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> LcResult<()> {
        self.records
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> LcResult<()> {
        self.records.write().await.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_memory_roundtrip() {
        let store = KvStore::in_memory();
        assert!(store.get("missing").await.unwrap().is_none());

        store.set("k", "v").await.unwrap();
        assert_eq!(store.get("k").await.unwrap().as_deref(), Some("v"));

        store.remove("k").await.unwrap();
        assert!(store.get("k").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_file_roundtrip() {
        let dir = TempDir::new().unwrap();
        let store = KvStore::open(dir.path()).unwrap();

        assert!(store.get("love_calendar_photos").await.unwrap().is_none());
        store.set("love_calendar_photos", "{}").await.unwrap();
        assert_eq!(
            store.get("love_calendar_photos").await.unwrap().as_deref(),
            Some("{}")
        );
    }

    #[tokio::test]
    async fn test_file_overwrite_replaces_record() {
        let dir = TempDir::new().unwrap();
        let store = KvStore::open(dir.path()).unwrap();

        store.set("k", "first").await.unwrap();
        store.set("k", "second").await.unwrap();
        assert_eq!(store.get("k").await.unwrap().as_deref(), Some("second"));
    }

    #[tokio::test]
    async fn test_file_remove_missing_is_ok() {
        let dir = TempDir::new().unwrap();
        let store = KvStore::open(dir.path()).unwrap();
        store.remove("never-written").await.unwrap();
    }

    #[test]
    fn test_key_sanitization() {
        let backend = FileBackend {
            root: PathBuf::from("/data"),
        };
        let path = backend.record_path("../escape/attempt");
        assert_eq!(path, PathBuf::from("/data/.._escape_attempt.json"));
    }
}
