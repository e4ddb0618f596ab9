//! Bundled TOML themes (compiled into binary, extracted on first run)
//!
//! These themes are written to ~/.config/feedbox/themes/ on first run.
//! Users can then modify them freely.

mod feed_dark;
mod feed_light;
mod nord;
mod terminal_ansi;

/// Bundled theme: file name and TOML content
pub struct BundledTheme {
    pub filename: &'static str,
    pub content: &'static str,
}

/// All bundled themes
pub const BUNDLED_THEMES: &[BundledTheme] = &[
    BundledTheme {
        filename: "Feed_Dark.toml",
        content: feed_dark::THEME,
    },
    BundledTheme {
        filename: "Feed_Light.toml",
        content: feed_light::THEME,
    },
    BundledTheme {
        filename: "Nord.toml",
        content: nord::THEME,
    },
    BundledTheme {
        filename: "Terminal_ANSI.toml",
        content: terminal_ansi::THEME,
    },
];

/// Display names of all bundled themes
pub fn list_bundled_themes() -> Vec<&'static str> {
    vec!["Feed Dark", "Feed Light", "Nord", "Terminal ANSI"]
}
