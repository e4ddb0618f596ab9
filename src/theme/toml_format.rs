// TOML theme format parser
//
// Native theme format for feedbox. Each theme explicitly defines every
// semantic color - no automatic mapping from palette slots.
//
// Format version: 1

use ratatui::style::Color;
use serde::Deserialize;

/// Root structure for TOML theme files
#[derive(Debug, Clone, Deserialize)]
pub struct TomlTheme {
    pub meta: ThemeMeta,
    pub ui: UiColors,
    pub feed: FeedColors,
}

/// Theme metadata
#[derive(Debug, Clone, Deserialize)]
pub struct ThemeMeta {
    pub name: String,
    #[allow(dead_code)] // For future schema evolution
    pub version: u32,
    #[serde(default)]
    #[allow(dead_code)] // Attribution only
    pub author: Option<String>,
}

/// Base UI chrome colors
#[derive(Debug, Clone, Deserialize)]
pub struct UiColors {
    pub background: String,
    pub foreground: String,
    pub border: String,
    pub border_focused: String,
    pub title: String,
    pub status_bar: String,
    pub selection_bg: String,
    pub selection_fg: String,
    /// Optional muted/secondary text color (falls back to border)
    pub muted: Option<String>,
    /// Optional border style: "plain", "rounded", "double", "thick" (default: plain)
    pub border_type: Option<String>,
}

/// Colors for feed content
#[derive(Debug, Clone, Deserialize)]
pub struct FeedColors {
    pub author: String,
    pub category: String,
    pub reaction: String,
    pub reaction_active: String,
    pub comment: String,
    pub filter_active: String,
    pub success: String,
    pub error: String,
}

/// Terminal palette slots addressed as `ansi:0` .. `ansi:15`
const ANSI_PALETTE: [Color; 16] = [
    Color::Black,
    Color::Red,
    Color::Green,
    Color::Yellow,
    Color::Blue,
    Color::Magenta,
    Color::Cyan,
    Color::White,
    Color::DarkGray,
    Color::LightRed,
    Color::LightGreen,
    Color::LightYellow,
    Color::LightBlue,
    Color::LightMagenta,
    Color::LightCyan,
    Color::Gray,
];

impl TomlTheme {
    /// Parse a TOML theme from string
    pub fn from_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Parse a color value, `None` if it is malformed
    ///
    /// Accepts `#RRGGBB` (the `#` is optional), `ansi:0`..`ansi:15` for the
    /// terminal palette, and `ansi:fg` / `ansi:bg` for the terminal defaults.
    pub fn parse_color(value: &str) -> Option<Color> {
        let value = value.trim();

        if let Some(slot) = value.strip_prefix("ansi:") {
            return match slot {
                "fg" | "bg" => Some(Color::Reset),
                n => n
                    .parse::<usize>()
                    .ok()
                    .and_then(|i| ANSI_PALETTE.get(i).copied()),
            };
        }

        let hex = value.strip_prefix('#').unwrap_or(value);
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |at: usize| u8::from_str_radix(&hex[at..at + 2], 16).ok();
        Some(Color::Rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color() {
        assert_eq!(TomlTheme::parse_color("#ff0000"), Some(Color::Rgb(255, 0, 0)));
        assert_eq!(TomlTheme::parse_color("00ff00"), Some(Color::Rgb(0, 255, 0)));
        assert_eq!(TomlTheme::parse_color("ansi:3"), Some(Color::Yellow));
        assert_eq!(TomlTheme::parse_color("ansi:15"), Some(Color::Gray));
        assert_eq!(TomlTheme::parse_color("ansi:bg"), Some(Color::Reset));
        assert_eq!(TomlTheme::parse_color("ansi:16"), None);
        assert_eq!(TomlTheme::parse_color("#12"), None);
        assert_eq!(TomlTheme::parse_color("#gg0000"), None);
    }

    #[test]
    fn test_parse_theme() {
        let toml = r##"
[meta]
name = "Test Theme"
version = 1

[ui]
background = "#1e1e2e"
foreground = "#cdd6f4"
border = "#45475a"
border_focused = "#f5c2e7"
title = "#cdd6f4"
status_bar = "#cdd6f4"
selection_bg = "#45475a"
selection_fg = "#cdd6f4"

[feed]
author = "#89b4fa"
category = "#f38ba8"
reaction = "#9399b2"
reaction_active = "#f9e2af"
comment = "#f5c2e7"
filter_active = "#94e2d5"
success = "#a6e3a1"
error = "#f38ba8"
"##;

        let theme = TomlTheme::from_str(toml).unwrap();
        assert_eq!(theme.meta.name, "Test Theme");
        assert_eq!(theme.ui.background, "#1e1e2e");
        assert!(theme.ui.muted.is_none());
        assert_eq!(theme.feed.reaction_active, "#f9e2af");
    }

    #[test]
    fn test_missing_feed_section_is_rejected() {
        let toml = r##"
[meta]
name = "Broken"
version = 1
"##;
        assert!(TomlTheme::from_str(toml).is_err());
    }
}
