//! Photo journal service: the sole owner of the persisted journal record.
//!
//! Every mutation is one read-modify-write cycle against the whole mapping:
//! load the record, apply the change, write the full record back. The
//! cycles are serialized through an internal async mutex so overlapping
//! calls from independent UI interactions apply in submission order and
//! can never overwrite one another's update.

use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use lc_core::constants::PHOTOS_KEY;
use lc_core::error::LcResult;
use lc_models::kv::KvStore;
use lc_models::models::calendar::{self, CalendarDay};
use lc_models::models::journal::{DateKey, Journal};
use lc_models::models::photo_entry::PhotoEntry;

use crate::event_bus::{AppEvent, EventBus};
use crate::service::{Service, ServiceState};

/// Service owning all reads and writes of the photo journal.
///
/// Reads degrade: a missing or undecodable record is an empty journal and
/// never fails the caller. Writes propagate: a storage failure during
/// add/delete/annotate reaches the caller, who must not assume the
/// mutation was persisted.
pub struct JournalService {
    state: ServiceState,
    store: KvStore,
    event_bus: EventBus,
    /// Serializes read-modify-write cycles across concurrent callers.
    write_lock: Mutex<()>,
}

impl JournalService {
    /// Create a new JournalService over the given record store.
    pub fn new(store: KvStore, event_bus: EventBus) -> Self {
        Self {
            state: ServiceState::Created,
            store,
            event_bus,
            write_lock: Mutex::new(()),
        }
    }

    /// Load the current journal. Storage errors propagate; a record that
    /// fails to decode degrades to an empty journal (and will be replaced
    /// wholesale by the next successful write).
    async fn load(&self) -> LcResult<Journal> {
        match self.store.get(PHOTOS_KEY).await? {
            Some(raw) => Ok(Journal::decode_or_empty(&raw)),
            None => Ok(Journal::new()),
        }
    }

    /// Write the full journal back to the record store.
    async fn persist(&self, journal: &Journal) -> LcResult<()> {
        let raw = journal.encode()?;
        self.store.set(PHOTOS_KEY, &raw).await
    }

    // ─── Mutations ──────────────────────────────────────────────────────

    /// Record a new photo for `date` and return the created entry.
    ///
    /// The entry gets a fresh id, the current time, and no annotations.
    /// Not idempotent: retrying a failed call that actually persisted will
    /// append a second entry, so callers should gate capture while a save
    /// is in flight.
    pub async fn add_photo(&self, date: DateKey, uri: &str) -> LcResult<PhotoEntry> {
        let _guard = self.write_lock.lock().await;

        let mut journal = self.load().await?;
        let entry = PhotoEntry::new(uri);
        journal.insert(date, entry.clone());
        self.persist(&journal).await?;

        debug!("added photo {} for {date}", entry.id);
        self.event_bus.emit(AppEvent::PhotoAdded {
            date: date.to_string(),
            entry_id: entry.id.clone(),
        });
        Ok(entry)
    }

    /// Remove the entry with `id` from `date`'s photos.
    ///
    /// Removing the last photo of a day removes the day itself. Unknown
    /// date or id is a silent no-op (and writes nothing).
    pub async fn delete_photo(&self, date: DateKey, id: &str) -> LcResult<()> {
        let _guard = self.write_lock.lock().await;

        let mut journal = self.load().await?;
        if !journal.remove(date, id) {
            debug!("delete ignored, no entry {id} for {date}");
            return Ok(());
        }
        self.persist(&journal).await?;

        debug!("deleted photo {id} for {date}");
        self.event_bus.emit(AppEvent::PhotoDeleted {
            date: date.to_string(),
            entry_id: id.to_string(),
        });
        Ok(())
    }

    /// Replace the note and emoji of the entry with `id` under `date`.
    ///
    /// Full-field replacement: both values are stored as given, and empty
    /// strings clear. Unknown date or id is a silent no-op.
    pub async fn update_note_and_emoji(
        &self,
        date: DateKey,
        id: &str,
        note: &str,
        emoji: &str,
    ) -> LcResult<()> {
        let _guard = self.write_lock.lock().await;

        let mut journal = self.load().await?;
        if !journal.annotate(date, id, note, emoji) {
            debug!("annotate ignored, no entry {id} for {date}");
            return Ok(());
        }
        self.persist(&journal).await?;

        debug!("annotated photo {id} for {date}");
        self.event_bus.emit(AppEvent::PhotoAnnotated {
            date: date.to_string(),
            entry_id: id.to_string(),
        });
        Ok(())
    }

    // ─── Views ──────────────────────────────────────────────────────────

    /// The full journal. Empty when nothing has been recorded, the record
    /// is missing, or it cannot be read or decoded.
    pub async fn all_photos(&self) -> Journal {
        match self.load().await {
            Ok(journal) => journal,
            Err(e) => {
                warn!("failed to load journal, returning empty: {e}");
                Journal::new()
            }
        }
    }

    /// The photos recorded for `date`, in insertion order.
    pub async fn photos_for_date(&self, date: DateKey) -> Vec<PhotoEntry> {
        self.all_photos().await.entries_for(date).to_vec()
    }

    /// Whether `date` has at least one photo.
    pub async fn has_photos(&self, date: DateKey) -> bool {
        self.all_photos().await.has_photos(date)
    }

    /// Total number of photos across all dates.
    pub async fn total_photo_count(&self) -> usize {
        self.all_photos().await.total_count()
    }

    /// Uri of the most recent photo for `date`, if any.
    pub async fn latest_photo_for_date(&self, date: DateKey) -> Option<String> {
        self.all_photos()
            .await
            .latest_for(date)
            .map(|e| e.uri.clone())
    }

    /// Sunday-first month grid for the calendar screen.
    pub async fn month_grid(
        &self,
        year: i32,
        month: u32,
        today: chrono::NaiveDate,
    ) -> LcResult<Vec<CalendarDay>> {
        let journal = self.all_photos().await;
        calendar::month_grid(year, month, today, &journal)
    }

    /// All photos with their dates, newest first (the gallery screen).
    pub async fn gallery(&self) -> Vec<(DateKey, PhotoEntry)> {
        self.all_photos()
            .await
            .gallery()
            .into_iter()
            .map(|(date, entry)| (date, entry.clone()))
            .collect()
    }
}

impl Service for JournalService {
    fn name(&self) -> &str {
        "journal"
    }

    fn state(&self) -> ServiceState {
        self.state
    }

    fn init(&mut self) -> LcResult<()> {
        self.state = ServiceState::Running;
        info!("journal service initialized");
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

    fn make_service() -> JournalService {
        JournalService::new(KvStore::in_memory(), EventBus::new(16))
    }

    fn key(s: &str) -> DateKey {
        DateKey::parse(s).unwrap()
    }

    #[test]
    fn test_journal_service_name() {
        let svc = make_service();
        assert_eq!(svc.name(), "journal");
    }

    #[tokio::test]
    async fn test_add_and_read_back() {
        let svc = make_service();
        let entry = svc.add_photo(key("2024-02-14"), "uri1").await.unwrap();

        let photos = svc.photos_for_date(key("2024-02-14")).await;
        assert_eq!(photos.len(), 1);
        assert_eq!(photos[0].id, entry.id);
        assert_eq!(photos[0].uri, "uri1");
        assert!(svc.has_photos(key("2024-02-14")).await);
        assert!(!svc.has_photos(key("2024-02-15")).await);
    }

    #[tokio::test]
    async fn test_two_adds_same_day() {
        let svc = make_service();
        svc.add_photo(key("2024-02-14"), "uri1").await.unwrap();
        svc.add_photo(key("2024-02-14"), "uri2").await.unwrap();

        assert_eq!(svc.photos_for_date(key("2024-02-14")).await.len(), 2);
        assert_eq!(svc.total_photo_count().await, 2);
    }

    #[tokio::test]
    async fn test_delete_last_entry_removes_day() {
        let svc = make_service();
        let entry = svc.add_photo(key("2024-02-14"), "uri1").await.unwrap();
        svc.delete_photo(key("2024-02-14"), &entry.id).await.unwrap();

        let journal = svc.all_photos().await;
        assert!(journal.is_empty());
    }

    #[tokio::test]
    async fn test_delete_unknown_is_silent() {
        let svc = make_service();
        svc.delete_photo(key("2024-02-14"), "no-such-id").await.unwrap();
        svc.add_photo(key("2024-02-14"), "uri1").await.unwrap();
        svc.delete_photo(key("2024-02-14"), "still-wrong").await.unwrap();
        assert_eq!(svc.total_photo_count().await, 1);
    }

    #[tokio::test]
    async fn test_annotate_roundtrip() {
        let svc = make_service();
        let entry = svc.add_photo(key("2024-03-01"), "a").await.unwrap();
        svc.update_note_and_emoji(key("2024-03-01"), &entry.id, "so cute", "😍")
            .await
            .unwrap();

        let photos = svc.photos_for_date(key("2024-03-01")).await;
        assert_eq!(photos[0].note.as_deref(), Some("so cute"));
        assert_eq!(photos[0].emoji.as_deref(), Some("😍"));
    }

    #[tokio::test]
    async fn test_corrupted_record_reads_empty() {
        let store = KvStore::in_memory();
        store.set(PHOTOS_KEY, "{definitely not json").await.unwrap();

        let svc = JournalService::new(store, EventBus::new(16));
        assert!(svc.all_photos().await.is_empty());
        assert_eq!(svc.total_photo_count().await, 0);
    }

    #[tokio::test]
    async fn test_add_emits_event() {
        let bus = EventBus::new(16);
        let mut rx = bus.subscribe();
        let svc = JournalService::new(KvStore::in_memory(), bus);

        let entry = svc.add_photo(key("2024-02-14"), "uri1").await.unwrap();

        match rx.recv().await.unwrap() {
            AppEvent::PhotoAdded { date, entry_id } => {
                assert_eq!(date, "2024-02-14");
                assert_eq!(entry_id, entry.id);
            }
            _ => panic!("expected PhotoAdded event"),
        }
    }
}
