//! Application-wide constants.

/// Application name.
pub const APP_NAME: &str = "LoveCalendar";

/// Application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Storage key for the persisted photo journal mapping.
pub const PHOTOS_KEY: &str = "love_calendar_photos";

/// Storage key for the selected theme.
pub const THEME_KEY: &str = "selectedTheme";

/// Key of the theme applied when no selection has been persisted.
pub const DEFAULT_THEME_KEY: &str = "pinkLove";

/// Date key format for journal partitioning (`2024-02-14`).
pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// Emoji choices offered when annotating a photo.
pub const EMOJI_SUGGESTIONS: &[&str] = &[
    "😍", "🥰", "😂", "😎", "😭", "❤️", "🎉", "🌟", "👍", "💖",
];
