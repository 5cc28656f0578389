//! Photo entry entity model.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One captured or picked photo for a given day.
///
/// The `uri` is an opaque reference to image data and is never interpreted
/// or validated here. `note` and `emoji` are optional annotations added
/// after capture; both are omitted from the serialized record when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoEntry {
    /// Unique identifier, generated at creation time.
    pub id: String,

    /// Opaque image reference (e.g. a `file://` or content URI).
    pub uri: String,

    /// Creation instant in milliseconds since the Unix epoch. Consumers
    /// sort on this when display order matters (newest first).
    pub timestamp: i64,

    /// Free-text annotation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    /// Short emoji tag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
}

impl PhotoEntry {
    /// Create a fresh entry for `uri` with a new UUID and the current time.
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            uri: uri.into(),
            timestamp: Utc::now().timestamp_millis(),
            note: None,
            emoji: None,
        }
    }

    /// Replace both annotation fields. Empty strings clear a field.
    ///
    /// This is full-field replacement, not a merge: callers always supply
    /// both the note and the emoji they want to keep.
    pub fn set_annotation(&mut self, note: &str, emoji: &str) {
        self.note = if note.is_empty() {
            None
        } else {
            Some(note.to_string())
        };
        self.emoji = if emoji.is_empty() {
            None
        } else {
            Some(emoji.to_string())
        };
    }

    /// Whether this entry carries a note or an emoji.
    pub fn has_annotation(&self) -> bool {
        self.note.is_some() || self.emoji.is_some()
    }
}
