//! Config serialization to TOML
//!
//! Single source of truth for config file format: the first-run template,
//! `config --reset` and `config --show` all go through `to_toml()`.

use super::Config;
use crate::feed::Category;

/// Render a string as a TOML string value, escaping control characters
fn quoted(value: &str) -> String {
    toml::Value::String(value.to_owned()).to_string()
}

impl Config {
    /// Serialize the config as a commented TOML file
    pub fn to_toml(&self) -> String {
        let categories = Category::ALL
            .iter()
            .map(|c| c.label())
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            r#"# feedbox configuration

# Identity shown on your posts and comments (FEEDBOX_AUTHOR overrides)
author = {author}

# Category for new posts while the filter is "All"
# One of: {categories}
default_category = {category}

# Theme: Feed Dark, Feed Light, Nord, Terminal ANSI, or a file in ~/.config/feedbox/themes
theme = {theme}

# Use theme's background color (true) or terminal's default (false)
use_theme_background = {use_bg}

# Feature flags
[features]
logs_panel = {logs_panel}
relative_time = {relative_time}

# Logging configuration (RUST_LOG env var overrides)
[logging]
level = {log_level}
# JSON log files (in addition to the logs panel)
file_enabled = {log_file_enabled}
file_dir = {log_file_dir}
file_rotation = "{log_file_rotation}"  # hourly, daily, never
file_prefix = {log_file_prefix}
"#,
            author = quoted(&self.author),
            categories = categories,
            category = quoted(self.default_category.label()),
            theme = quoted(&self.theme),
            use_bg = self.use_theme_background,
            logs_panel = self.features.logs_panel,
            relative_time = self.features.relative_time,
            log_level = quoted(&self.logging.level),
            log_file_enabled = self.logging.file_enabled,
            log_file_dir = quoted(&self.logging.file_dir.to_string_lossy()),
            log_file_rotation = self.logging.file_rotation.as_str(),
            log_file_prefix = quoted(&self.logging.file_prefix),
        )
    }
}
