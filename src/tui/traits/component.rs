//! Core component trait - the foundation of the UI system
//!
//! Every UI element that can be rendered implements `Component`.

use crate::theme::Theme;
use chrono::{DateTime, Utc};
use ratatui::{layout::Rect, Frame};

/// Unique identifier for a component
///
/// Used for focus tracking and for picking the focused border color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentId {
    /// Post composer (draft + authoring category)
    Composer,
    /// Post list
    Feed,
    /// Comment entry field of one post
    CommentEntry,
}

/// Immutable context passed to components during rendering
///
/// Components only see what they need - no access to mutable app state.
#[derive(Debug, Clone)]
pub struct RenderContext<'a> {
    /// Color theme for styling
    pub theme: &'a Theme,

    /// Which component currently has focus
    pub focus: ComponentId,

    /// Frame timestamp, so every relative time in a frame agrees
    pub now: DateTime<Utc>,

    /// Show "5 minutes ago" (true) or absolute "HH:MM" stamps (false)
    pub relative_time: bool,
}

impl<'a> RenderContext<'a> {
    pub fn new(theme: &'a Theme, focus: ComponentId, now: DateTime<Utc>) -> Self {
        Self {
            theme,
            focus,
            now,
            relative_time: true,
        }
    }

    pub fn with_relative_time(mut self, relative_time: bool) -> Self {
        self.relative_time = relative_time;
        self
    }

    /// Check if a component is currently focused
    pub fn is_focused(&self, id: ComponentId) -> bool {
        self.focus == id
    }

    /// Border color for a component given the current focus
    pub fn border_color(&self, id: ComponentId) -> ratatui::style::Color {
        if self.is_focused(id) {
            self.theme.highlight
        } else {
            self.theme.border
        }
    }

    /// Format a timestamp the way the feed displays it
    pub fn timestamp(&self, at: DateTime<Utc>) -> String {
        if self.relative_time {
            crate::tui::components::formatters::format_relative(at, self.now)
        } else {
            at.with_timezone(&chrono::Local)
                .format("%b %d %H:%M")
                .to_string()
        }
    }
}

/// Base trait for all UI components
///
/// A component is anything that can render itself to the terminal.
pub trait Component {
    /// Unique identifier for this component
    fn id(&self) -> ComponentId;

    /// Render the component to the given area
    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext);
}
