//! The photo journal mapping and its date partition key.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::warn;

use lc_core::constants::DATE_KEY_FORMAT;
use lc_core::error::{LcError, LcResult};

use super::photo_entry::PhotoEntry;

/// Validated calendar-date partition key in `YYYY-MM-DD` form.
///
/// Only canonical zero-padded keys are accepted; `2024-2-3` is rejected
/// even though it names a real date, so every date has exactly one key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DateKey(NaiveDate);

impl DateKey {
    /// Parse and validate a `YYYY-MM-DD` string.
    pub fn parse(s: &str) -> LcResult<Self> {
        let date = NaiveDate::parse_from_str(s, DATE_KEY_FORMAT)
            .map_err(|_| LcError::InvalidDate(s.to_string()))?;
        // chrono accepts unpadded components; require the canonical form.
        if date.format(DATE_KEY_FORMAT).to_string() != s {
            return Err(LcError::InvalidDate(s.to_string()));
        }
        Ok(Self(date))
    }

    /// Build a key from an already-validated calendar date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    /// The calendar date this key names.
    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl std::fmt::Display for DateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format(DATE_KEY_FORMAT))
    }
}

impl std::str::FromStr for DateKey {
    type Err = LcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for DateKey {
    type Error = LcError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<DateKey> for String {
    fn from(key: DateKey) -> Self {
        key.to_string()
    }
}

/// The complete persisted date-to-entries mapping.
///
/// Invariant: a present date key always maps to a non-empty sequence.
/// Removing the last entry for a date removes the key itself, so the
/// mapping never carries dangling empty days.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Journal {
    days: BTreeMap<DateKey, Vec<PhotoEntry>>,
}

impl Journal {
    /// An empty journal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a persisted journal record.
    ///
    /// A record that is not valid JSON, or whose shape fails validation
    /// (bad date key, malformed entry), degrades to an empty journal: a
    /// corrupted local record must never take the whole app down with it.
    pub fn decode_or_empty(raw: &str) -> Self {
        match serde_json::from_str(raw) {
            Ok(journal) => journal,
            Err(e) => {
                warn!("journal record failed to decode, treating as empty: {e}");
                Self::new()
            }
        }
    }

    /// Encode the full journal for persistence.
    pub fn encode(&self) -> LcResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Append an entry to `date`'s sequence, creating the day if absent.
    pub fn insert(&mut self, date: DateKey, entry: PhotoEntry) {
        self.days.entry(date).or_default().push(entry);
    }

    /// Remove the entry with `id` from `date`'s sequence.
    ///
    /// Drops the date key entirely when that was the last entry.
    /// Returns whether anything was removed.
    pub fn remove(&mut self, date: DateKey, id: &str) -> bool {
        let Some(entries) = self.days.get_mut(&date) else {
            return false;
        };
        let before = entries.len();
        entries.retain(|e| e.id != id);
        let removed = entries.len() < before;
        if entries.is_empty() {
            self.days.remove(&date);
        }
        removed
    }

    /// Replace the note and emoji of the entry with `id` under `date`.
    ///
    /// Full-field replacement; empty strings clear. Returns whether a
    /// matching entry was found.
    pub fn annotate(&mut self, date: DateKey, id: &str, note: &str, emoji: &str) -> bool {
        let Some(entry) = self
            .days
            .get_mut(&date)
            .and_then(|entries| entries.iter_mut().find(|e| e.id == id))
        else {
            return false;
        };
        entry.set_annotation(note, emoji);
        true
    }

    /// The entries recorded for `date`, in insertion order.
    pub fn entries_for(&self, date: DateKey) -> &[PhotoEntry] {
        self.days.get(&date).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether `date` has at least one entry.
    pub fn has_photos(&self, date: DateKey) -> bool {
        !self.entries_for(date).is_empty()
    }

    /// Total number of entries across all dates.
    pub fn total_count(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }

    /// The entry with the greatest timestamp for `date`.
    ///
    /// On equal timestamps the earliest-inserted entry wins (stable pick).
    pub fn latest_for(&self, date: DateKey) -> Option<&PhotoEntry> {
        self.entries_for(date)
            .iter()
            .fold(None, |best: Option<&PhotoEntry>, entry| match best {
                Some(b) if entry.timestamp > b.timestamp => Some(entry),
                Some(_) => best,
                None => Some(entry),
            })
    }

    /// All entries paired with their dates, newest first (the gallery view).
    pub fn gallery(&self) -> Vec<(DateKey, &PhotoEntry)> {
        let mut all: Vec<(DateKey, &PhotoEntry)> = self
            .days
            .iter()
            .flat_map(|(date, entries)| entries.iter().map(|e| (*date, e)))
            .collect();
        all.sort_by(|a, b| b.1.timestamp.cmp(&a.1.timestamp));
        all
    }

    /// Iterate over all days and their entries in date order.
    pub fn iter(&self) -> impl Iterator<Item = (DateKey, &[PhotoEntry])> {
        self.days.iter().map(|(date, entries)| (*date, entries.as_slice()))
    }

    /// Number of days carrying at least one entry.
    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    /// Whether the journal has no entries at all.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}
