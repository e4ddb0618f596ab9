//! Feature flags configuration
//!
//! Feature flags for optional UI pieces (opt-out: default enabled).

use serde::Deserialize;

/// Feature flags for optional UI pieces (opt-out: default enabled)
#[derive(Debug, Clone)]
pub struct Features {
    /// Logs panel: show captured tracing events below the feed
    pub logs_panel: bool,

    /// Relative timestamps ("5 minutes ago") instead of absolute ones
    pub relative_time: bool,
}

impl Default for Features {
    fn default() -> Self {
        Self {
            logs_panel: true,
            relative_time: true,
        }
    }
}

/// Feature flags as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileFeatures {
    pub logs_panel: Option<bool>,
    pub relative_time: Option<bool>,
}

impl Features {
    /// Create from file config with defaults
    pub fn from_file(file: Option<FileFeatures>) -> Self {
        let file = file.unwrap_or_default();

        Self {
            logs_panel: file.logs_panel.unwrap_or(true),
            relative_time: file.relative_time.unwrap_or(true),
        }
    }
}
