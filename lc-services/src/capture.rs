//! Capture provider seam: the camera/gallery collaborator.
//!
//! The journal never touches image data; it stores whatever URI a capture
//! provider hands back. On the phone that provider was the camera or the
//! photo library; here the trait keeps the same contract (a cancelled pick
//! is `None`, a provider failure is an error) and the CLI supplies a
//! file-import implementation.

use std::path::PathBuf;

use async_trait::async_trait;

use lc_core::error::{LcError, LcResult};

/// Source of photo URIs for the journal.
#[async_trait]
pub trait CaptureProvider: Send + Sync {
    /// Capture a new photo. `None` means the user cancelled.
    async fn capture(&self) -> LcResult<Option<String>>;

    /// Pick an existing photo. `None` means the user cancelled.
    async fn pick_from_gallery(&self) -> LcResult<Option<String>>;
}

/// Capture provider that imports a local image file as a `file://` URI.
///
/// Stands in for both the camera and the gallery picker when driving the
/// journal from the command line.
pub struct FileImport {
    path: PathBuf,
}

impl FileImport {
    /// Import the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    async fn import(&self) -> LcResult<Option<String>> {
        let meta = tokio::fs::metadata(&self.path).await.map_err(|e| {
            LcError::Capture(format!("cannot import {}: {e}", self.path.display()))
        })?;
        if !meta.is_file() {
            return Err(LcError::Capture(format!(
                "not a file: {}",
                self.path.display()
            )));
        }
        let absolute = tokio::fs::canonicalize(&self.path).await.map_err(|e| {
            LcError::Capture(format!("cannot resolve {}: {e}", self.path.display()))
        })?;
        Ok(Some(format!("file://{}", absolute.display())))
    }
}

#[async_trait]
impl CaptureProvider for FileImport {
    async fn capture(&self) -> LcResult<Option<String>> {
        self.import().await
    }

    async fn pick_from_gallery(&self) -> LcResult<Option<String>> {
        self.import().await
    }
}
