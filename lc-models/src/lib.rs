//! LoveCalendar Models - Entity models and the key-value persistence substrate.
//!
//! This crate defines the data carried by the photo journal:
//! - `PhotoEntry` - one captured photo with id, uri, timestamp, note, emoji
//! - `DateKey` / `Journal` - the persisted date-to-entries mapping
//! - Calendar month-grid derivation for the calendar screen
//! - Theme definitions with the five built-in presets
//!
//! It also provides `KvStore`, the asynchronous key-value record store the
//! journal and theme selection persist through (file-backed in production,
//! in-memory for tests).

pub mod kv;
pub mod models;

// Re-export key types
pub use kv::{KvBackend, KvStore};
pub use models::calendar::CalendarDay;
pub use models::journal::{DateKey, Journal};
pub use models::photo_entry::PhotoEntry;
pub use models::theme::AppTheme;
