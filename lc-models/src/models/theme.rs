//! Theme definitions and the built-in preset registry.

use serde::{Deserialize, Serialize};

/// The eight color slots every theme provides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeColors {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub background: String,
    pub surface: String,
    pub text: String,
    pub text_secondary: String,
    pub border: String,
}

/// A named color theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppTheme {
    /// Stable lookup key (`pinkLove`), the value persisted on selection.
    pub key: String,
    /// Display name ("Pink Love").
    pub name: String,
    pub description: String,
    pub colors: ThemeColors,
}

/// Preset theme keys.
pub const PRESET_PINK_LOVE: &str = "pinkLove";
pub const PRESET_ROSE_GOLD: &str = "roseGold";
pub const PRESET_LAVENDER_DREAMS: &str = "lavenderDreams";
pub const PRESET_PEACH_BLUSH: &str = "peachBlush";
pub const PRESET_MINT_CHOCOLATE: &str = "mintChocolate";

fn theme(
    key: &str,
    name: &str,
    description: &str,
    primary: &str,
    secondary: &str,
    accent: &str,
    background: &str,
) -> AppTheme {
    AppTheme {
        key: key.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        colors: ThemeColors {
            primary: primary.to_string(),
            secondary: secondary.to_string(),
            accent: accent.to_string(),
            background: background.to_string(),
            // Shared across every preset
            surface: "#FFFFFF".to_string(),
            text: "#2D2D2D".to_string(),
            text_secondary: "#6B6B6B".to_string(),
            border: "#F0F0F0".to_string(),
        },
    }
}

/// All built-in themes, in presentation order.
pub fn presets() -> Vec<AppTheme> {
    vec![
        theme(
            PRESET_PINK_LOVE,
            "Pink Love",
            "Romantic pink theme with warm, loving vibes",
            "#FF6B9D",
            "#FFB3D1",
            "#FF8FB3",
            "#FFF5F8",
        ),
        theme(
            PRESET_ROSE_GOLD,
            "Rose Gold",
            "Elegant rose gold with sophisticated charm",
            "#E8B4B8",
            "#F4D7D7",
            "#D4A5A5",
            "#FAF6F6",
        ),
        theme(
            PRESET_LAVENDER_DREAMS,
            "Lavender Dreams",
            "Soft lavender for dreamy, peaceful moments",
            "#B19CD9",
            "#D8CCEB",
            "#C8B5E6",
            "#F8F6FB",
        ),
        theme(
            PRESET_PEACH_BLUSH,
            "Peach Blush",
            "Warm peach tones for a gentle, caring feel",
            "#FFB19D",
            "#FFD1C1",
            "#FFC4B0",
            "#FFF8F6",
        ),
        theme(
            PRESET_MINT_CHOCOLATE,
            "Mint Chocolate",
            "Fresh mint with chocolate accents for a unique twist",
            "#8BD3C7",
            "#B8E4DA",
            "#A3DDD1",
            "#F6FFFE",
        ),
    ]
}

/// Look up a preset by key.
pub fn find_theme(key: &str) -> Option<AppTheme> {
    presets().into_iter().find(|t| t.key == key)
}

/// The theme applied when no selection has been persisted.
pub fn default_theme() -> AppTheme {
    // The registry always contains the default
    find_theme(lc_core::constants::DEFAULT_THEME_KEY)
        .unwrap_or_else(|| presets().remove(0))
}
