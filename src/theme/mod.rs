// Theme system for the TUI
//
// - TomlTheme: on-disk format with explicit semantic color definitions
// - Theme: final resolved theme with all colors ready for use
//
// Theme loading priority:
// 1. External TOML themes from ~/.config/feedbox/themes/*.toml
// 2. Bundled themes (compiled in, extracted on first run)
// 3. Fallback to hardcoded default

mod bundled;
mod toml_format;

pub use toml_format::TomlTheme;

use ratatui::style::Color;
use ratatui::widgets::BorderType;
use std::path::PathBuf;

/// Theme configuration options
#[derive(Debug, Clone)]
pub struct ThemeConfig {
    /// Use theme's background color (true) or terminal's default (false)
    pub use_theme_background: bool,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            use_theme_background: true,
        }
    }
}

/// Complete resolved theme ready for use in the TUI.
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,

    // ─── UI Element Colors ───────────────────────────────────
    pub status_bar: Color,
    pub title: Color,
    pub border: Color,
    pub highlight: Color, // Maps to border_focused

    // ─── Feed Content Colors ─────────────────────────────────
    pub author: Color,
    pub category: Color,
    pub reaction: Color,
    pub reaction_active: Color,
    pub comment: Color,
    pub filter_active: Color,
    pub success: Color,
    pub error: Color,

    // ─── Terminal Colors ─────────────────────────────────────
    pub background: Color,
    pub foreground: Color,
    pub selection: Color,
    pub selection_fg: Color,
    pub muted: Color,

    pub border_type: BorderType,
}

impl Theme {
    /// Load theme by name with custom configuration
    pub fn by_name_with_config(name: &str, config: &ThemeConfig) -> Self {
        if let Some(theme) = Self::load_toml(name, config) {
            return theme;
        }

        tracing::warn!("Theme {:?} not found, using fallback", name);
        Self::hardcoded_default(config)
    }

    /// Load from TOML theme file or bundled theme
    fn load_toml(name: &str, config: &ThemeConfig) -> Option<Self> {
        let normalized = name.replace(' ', "_");

        if let Some(themes_dir) = Self::themes_dir() {
            for candidate in [name, normalized.as_str()] {
                let path = themes_dir.join(format!("{}.toml", candidate));
                let Ok(contents) = std::fs::read_to_string(&path) else {
                    continue;
                };
                match TomlTheme::from_str(&contents) {
                    Ok(toml_theme) => return Some(Self::from_toml(toml_theme, config)),
                    Err(e) => {
                        tracing::warn!("Ignoring invalid theme {}: {}", path.display(), e);
                    }
                }
            }
        }

        let filename = format!("{}.toml", normalized);
        bundled::BUNDLED_THEMES
            .iter()
            .find(|t| t.filename.eq_ignore_ascii_case(&filename))
            .and_then(|t| TomlTheme::from_str(t.content).ok())
            .map(|t| Self::from_toml(t, config))
    }

    /// Get themes directory path
    fn themes_dir() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".config").join("feedbox").join("themes"))
    }

    /// Parse border type string to BorderType enum
    fn parse_border_type(value: Option<&str>) -> BorderType {
        match value {
            Some("rounded") => BorderType::Rounded,
            Some("double") => BorderType::Double,
            Some("thick") => BorderType::Thick,
            _ => BorderType::Plain,
        }
    }

    /// Create theme from native TOML format
    ///
    /// A malformed color is logged and replaced by the foreground color.
    fn from_toml(toml: TomlTheme, config: &ThemeConfig) -> Self {
        let theme_name = toml.meta.name.as_str();
        let foreground = TomlTheme::parse_color(&toml.ui.foreground).unwrap_or(Color::Reset);
        let parse = |field: &str, value: &str| {
            TomlTheme::parse_color(value).unwrap_or_else(|| {
                tracing::warn!(theme = theme_name, field, value, "Invalid theme color");
                foreground
            })
        };

        let background = if config.use_theme_background {
            parse("ui.background", &toml.ui.background)
        } else {
            Color::Reset
        };

        let ui = &toml.ui;
        let feed = &toml.feed;

        Self {
            name: toml.meta.name.clone(),

            status_bar: parse("ui.status_bar", &ui.status_bar),
            title: parse("ui.title", &ui.title),
            border: parse("ui.border", &ui.border),
            highlight: parse("ui.border_focused", &ui.border_focused),

            author: parse("feed.author", &feed.author),
            category: parse("feed.category", &feed.category),
            reaction: parse("feed.reaction", &feed.reaction),
            reaction_active: parse("feed.reaction_active", &feed.reaction_active),
            comment: parse("feed.comment", &feed.comment),
            filter_active: parse("feed.filter_active", &feed.filter_active),
            success: parse("feed.success", &feed.success),
            error: parse("feed.error", &feed.error),

            background,
            foreground,
            selection: parse("ui.selection_bg", &ui.selection_bg),
            selection_fg: parse("ui.selection_fg", &ui.selection_fg),

            // Secondary text falls back to the border color
            muted: match &ui.muted {
                Some(muted) => parse("ui.muted", muted),
                None => parse("ui.border", &ui.border),
            },

            border_type: Self::parse_border_type(ui.border_type.as_deref()),
        }
    }

    /// Hardcoded fallback when no themes can be loaded
    fn hardcoded_default(config: &ThemeConfig) -> Self {
        // One Half Dark colors
        let background = if config.use_theme_background {
            Color::Rgb(40, 44, 52)
        } else {
            Color::Reset
        };

        Self {
            name: "One Half Dark (Fallback)".to_string(),

            status_bar: Color::Rgb(220, 223, 228),
            title: Color::Rgb(86, 182, 194),
            border: Color::Rgb(92, 99, 112),
            highlight: Color::Rgb(229, 192, 123),

            author: Color::Rgb(97, 175, 239),
            category: Color::Rgb(224, 108, 117),
            reaction: Color::Rgb(220, 223, 228),
            reaction_active: Color::Rgb(229, 192, 123),
            comment: Color::Rgb(198, 120, 221),
            filter_active: Color::Rgb(86, 182, 194),
            success: Color::Rgb(152, 195, 121),
            error: Color::Rgb(224, 108, 117),

            background,
            foreground: Color::Rgb(220, 223, 228),
            selection: Color::Rgb(71, 78, 93),
            selection_fg: Color::Rgb(220, 223, 228),
            muted: Color::Rgb(130, 137, 151),

            border_type: BorderType::Plain,
        }
    }

    /// List all available themes (bundled + external)
    pub fn list_available() -> Vec<String> {
        let mut themes: Vec<String> = bundled::list_bundled_themes()
            .into_iter()
            .map(str::to_string)
            .collect();

        if let Some(themes_dir) = Self::themes_dir() {
            if let Ok(entries) = std::fs::read_dir(themes_dir) {
                for entry in entries.flatten() {
                    let path = entry.path();
                    if path.extension().is_some_and(|ext| ext == "toml") {
                        if let Some(stem) = path.file_stem() {
                            // Filenames use underscores, display names use spaces
                            let display_name = stem.to_string_lossy().replace('_', " ");
                            if !themes.iter().any(|t| t.eq_ignore_ascii_case(&display_name)) {
                                themes.push(display_name);
                            }
                        }
                    }
                }
            }
        }

        themes
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::by_name_with_config("Feed Dark", &ThemeConfig::default())
    }
}

/// Ensure themes directory exists and extract bundled themes on first run
pub fn ensure_themes_extracted() {
    let Some(themes_dir) = Theme::themes_dir() else {
        return;
    };

    if std::fs::create_dir_all(&themes_dir).is_err() {
        return;
    }

    let marker = themes_dir.join(".extracted_v1");
    if marker.exists() {
        return;
    }

    for theme in bundled::BUNDLED_THEMES {
        let path = themes_dir.join(theme.filename);
        // Don't overwrite user modifications
        if !path.exists() {
            let _ = std::fs::write(&path, theme.content);
        }
    }

    let _ = std::fs::write(&marker, "1");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_theme_resolves() {
        let theme = Theme::by_name_with_config("Nord", &ThemeConfig::default());
        assert_eq!(theme.name, "Nord");
        assert_eq!(theme.background, Color::Rgb(0x2e, 0x34, 0x40));
    }

    #[test]
    fn test_unknown_theme_falls_back() {
        let theme = Theme::by_name_with_config("No Such Theme", &ThemeConfig::default());
        assert!(theme.name.contains("Fallback"));
    }

    #[test]
    fn test_terminal_background_option() {
        let config = ThemeConfig {
            use_theme_background: false,
        };
        let theme = Theme::by_name_with_config("Feed Dark", &config);
        assert_eq!(theme.background, Color::Reset);
    }

    #[test]
    fn test_invalid_color_falls_back_to_foreground() {
        let toml = r##"
[meta]
name = "Half Broken"
version = 1

[ui]
background = "#000000"
foreground = "#eeeeee"
border = "not-a-color"
border_focused = "#ffcc00"
title = "#ffffff"
status_bar = "#ffffff"
selection_bg = "#333333"
selection_fg = "#ffffff"
border_type = "rounded"

[feed]
author = "ansi:4"
category = "ansi:5"
reaction = "ansi:8"
reaction_active = "ansi:11"
comment = "ansi:6"
filter_active = "ansi:14"
success = "ansi:2"
error = "ansi:1"
"##;
        let parsed = TomlTheme::from_str(toml).unwrap();
        let theme = Theme::from_toml(parsed, &ThemeConfig::default());

        assert_eq!(theme.border, Color::Rgb(0xee, 0xee, 0xee));
        // Muted falls back to the (broken) border, so it lands on foreground too
        assert_eq!(theme.muted, theme.foreground);
        assert_eq!(theme.author, Color::Blue);
        assert_eq!(theme.border_type, BorderType::Rounded);
    }
}
