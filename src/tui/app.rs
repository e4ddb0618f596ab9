// TUI application state
//
// App owns the Feed and every piece of UI state around it: the composer
// draft, the feed selection, one comment panel per post that has been
// replied to, focus, overlays. Input routing lives in `tui::mod`; this
// module only offers the actions the key map triggers.

use super::clipboard;
use super::components::{CommentPanel, Composer, FeedPanel, Toast, ToastKind};
use super::input::InputHandler;
use super::modal::Modal;
use super::traits::{ComponentId, Interactive, RenderContext};
use crate::config::Config;
use crate::feed::{CategoryFilter, CommentId, CommentOwner, Feed, PostId, ReactionKind};
use crate::logging::LogBuffer;
use crate::theme::{Theme, ThemeConfig};
use chrono::{DateTime, Utc};
use crossterm::event::KeyCode;
use std::collections::HashMap;
use std::time::Instant;

/// Which part of the screen receives typed keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Post composer - keys edit the draft
    Composer,
    /// Post list - keys are navigation and actions
    Feed,
    /// Comment entry of one post - keys edit that post's comment draft
    Comment(PostId),
}

/// Main application state for the TUI
pub struct App {
    /// The widget's state container
    pub feed: Feed,

    /// Post draft and authoring category
    pub composer: Composer,

    /// Selection over the visible posts
    pub feed_panel: FeedPanel,

    /// Comment drafts, created the first time a post's reply box opens
    pub comment_panels: HashMap<PostId, CommentPanel>,

    pub focus: Focus,

    pub theme: Theme,

    pub config: Config,

    /// Captured tracing events for the logs panel
    pub log_buffer: LogBuffer,

    /// Logs panel visibility (only honoured when the feature is enabled)
    pub show_logs: bool,

    /// Active modal overlay (captures all input while open)
    pub modal: Option<Modal>,

    /// Transient notification
    pub toast: Option<Toast>,

    pub should_quit: bool,

    /// When the app started (for uptime display)
    start_time: Instant,

    /// Debounce and hold-to-repeat for navigation mode keys
    input_handler: InputHandler,
}

impl App {
    pub fn new(config: Config, log_buffer: LogBuffer) -> Self {
        let theme = Theme::by_name_with_config(
            &config.theme,
            &ThemeConfig {
                use_theme_background: config.use_theme_background,
            },
        );

        let mut app = Self {
            feed: Feed::new(config.author.clone()),
            composer: Composer::new(config.default_category),
            feed_panel: FeedPanel::new(),
            comment_panels: HashMap::new(),
            focus: Focus::Composer,
            theme,
            show_logs: config.features.logs_panel,
            config,
            log_buffer,
            modal: None,
            toast: None,
            should_quit: false,
            start_time: Instant::now(),
            input_handler: InputHandler::default(),
        };
        app.sync_panels();
        app
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Focus
    // ─────────────────────────────────────────────────────────────────────────

    pub fn focus_id(&self) -> ComponentId {
        match self.focus {
            Focus::Composer => ComponentId::Composer,
            Focus::Feed => ComponentId::Feed,
            Focus::Comment(_) => ComponentId::CommentEntry,
        }
    }

    /// Keybind hint for the focused component
    pub fn focus_hint(&self) -> Option<&'static str> {
        match self.focus {
            Focus::Composer => self.composer.focus_hint(),
            Focus::Feed => self.feed_panel.focus_hint(),
            Focus::Comment(_) => Some("Enter send │ Esc back to feed"),
        }
    }

    /// The comment entry currently receiving keys, if any
    pub fn comment_focus(&self) -> Option<PostId> {
        match self.focus {
            Focus::Comment(id) => Some(id),
            _ => None,
        }
    }

    /// Tab order: Composer → Feed → Composer. A comment entry tabs back to the feed.
    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            Focus::Composer => Focus::Feed,
            Focus::Feed => Focus::Composer,
            Focus::Comment(_) => Focus::Feed,
        };
    }

    pub fn focus_prev(&mut self) {
        // Two stops, so backwards is the same walk
        self.focus_next();
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Feed actions
    // ─────────────────────────────────────────────────────────────────────────

    /// Post the composer draft under the composer's category
    ///
    /// The draft is kept when the feed rejects it (whitespace only).
    pub fn submit_post(&mut self) -> Option<PostId> {
        let id = self
            .feed
            .submit_post(self.composer.draft(), self.composer.category())?;

        self.composer.clear_draft();
        self.sync_panels();
        self.feed_panel.select(id);
        tracing::info!(post = %id, "Posted");
        Some(id)
    }

    pub fn set_filter(&mut self, filter: CategoryFilter) {
        self.feed.set_category_filter(filter);
        self.composer.follow_filter(filter);
        self.sync_panels();
    }

    pub fn cycle_filter(&mut self, forward: bool) {
        let current = self.feed.filter();
        self.set_filter(if forward {
            current.next()
        } else {
            current.prev()
        });
    }

    /// Toggle a reaction on the selected post
    pub fn react(&mut self, kind: ReactionKind) {
        if let Some(id) = self.feed_panel.selected {
            self.feed.toggle_reaction(id, kind);
        }
    }

    /// Open or close the reply box of the selected post
    ///
    /// Opening moves focus into the comment entry. Closing while the entry
    /// has focus hands focus back to the feed.
    pub fn toggle_reply(&mut self) {
        let Some(id) = self.feed_panel.selected else {
            return;
        };

        let panel = self
            .comment_panels
            .entry(id)
            .or_insert_with(|| CommentPanel::new(id));
        panel.toggle_composer(&mut self.feed);

        if self.is_composing(id) {
            self.focus = Focus::Comment(id);
        } else if self.focus == Focus::Comment(id) {
            self.focus = Focus::Feed;
        }
    }

    /// Focus the selected post's reply box, opening it if needed
    pub fn open_reply(&mut self) {
        match self.feed_panel.selected {
            Some(id) if self.is_composing(id) => self.focus = Focus::Comment(id),
            Some(_) => self.toggle_reply(),
            None => {}
        }
    }

    /// Submit the comment draft of a post
    ///
    /// On success the feed closes the reply box and focus returns to the feed.
    pub fn submit_comment(&mut self, id: PostId) -> Option<CommentId> {
        let panel = self.comment_panels.get_mut(&id)?;
        let added = panel.submit_draft(&mut self.feed)?;
        if self.focus == Focus::Comment(id) {
            self.focus = Focus::Feed;
        }
        Some(added)
    }

    fn is_composing(&self, id: PostId) -> bool {
        CommentOwner::is_composing(&self.feed, id)
    }

    /// Bring the feed selection and focus in line with the visible posts
    pub fn sync_panels(&mut self) {
        self.feed_panel.sync(self.feed.visible_ids());

        if let Focus::Comment(id) = self.focus {
            if !self.feed.visible_ids().contains(&id) {
                self.focus = Focus::Feed;
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Clipboard
    // ─────────────────────────────────────────────────────────────────────────

    /// Selected post's text
    pub fn selected_text(&self) -> Option<String> {
        let id = self.feed_panel.selected?;
        self.feed.post(id).map(|p| p.content.clone())
    }

    /// Selected post as pretty JSON
    pub fn selected_json(&self) -> Option<String> {
        let id = self.feed_panel.selected?;
        let post = self.feed.post(id)?;
        match serde_json::to_string_pretty(post) {
            Ok(json) => Some(json),
            Err(e) => {
                tracing::warn!(post = %id, error = %e, "Failed to serialize post");
                None
            }
        }
    }

    pub fn copy_selected(&mut self, as_json: bool) {
        let content = if as_json {
            self.selected_json()
        } else {
            self.selected_text()
        };
        let Some(content) = content else {
            return;
        };

        match clipboard::copy_to_clipboard(&content) {
            Ok(()) if as_json => self.show_toast(Toast::success("Copied post JSON to clipboard")),
            Ok(()) => self.show_toast(Toast::success("Copied to clipboard")),
            Err(e) => {
                tracing::warn!(error = %e, "Clipboard copy failed");
                self.show_toast(Toast::error("Failed to copy"));
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Overlays
    // ─────────────────────────────────────────────────────────────────────────

    pub fn open_help(&mut self) {
        self.modal = Some(Modal::help());
    }

    pub fn toggle_logs(&mut self) {
        if !self.config.features.logs_panel {
            self.show_toast(Toast::new("Logs panel is disabled in config", ToastKind::Info));
            return;
        }
        self.show_logs = !self.show_logs;
    }

    pub fn show_toast(&mut self, toast: Toast) {
        self.toast = Some(toast);
    }

    /// Drop the toast once it has been on screen long enough
    pub fn clear_expired_toast(&mut self) {
        if self.toast.as_ref().is_some_and(Toast::is_expired) {
            self.toast = None;
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Rendering helpers
    // ─────────────────────────────────────────────────────────────────────────

    pub fn render_context(&self, now: DateTime<Utc>) -> RenderContext<'_> {
        RenderContext::new(&self.theme, self.focus_id(), now)
            .with_relative_time(self.config.features.relative_time)
    }

    /// Whether the logs panel takes screen space this frame
    pub fn logs_visible(&self) -> bool {
        self.show_logs && self.config.features.logs_panel
    }

    /// Get uptime as a formatted string
    pub fn uptime(&self) -> String {
        let elapsed = self.start_time.elapsed();
        let secs = elapsed.as_secs();
        let hours = secs / 3600;
        let minutes = (secs % 3600) / 60;
        let secs = secs % 60;
        format!("{:02}:{:02}:{:02}", hours, minutes, secs)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Key state
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns true if a navigation-mode key should act on this press
    pub fn handle_key_press(&mut self, key: KeyCode) -> bool {
        self.input_handler.handle_key_press(key)
    }

    pub fn handle_key_release(&mut self, key: KeyCode) {
        self.input_handler.handle_key_release(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Features;
    use crate::feed::Category;

    fn app() -> App {
        App::new(Config::default(), LogBuffer::new())
    }

    fn post(app: &mut App, text: &str) -> PostId {
        app.composer.input_mut().insert_str(text);
        app.submit_post().unwrap()
    }

    #[test]
    fn test_submit_clears_draft_and_selects_post() {
        let mut app = app();
        let first = post(&mut app, "first");
        let second = post(&mut app, "second");

        assert!(app.composer.draft().is_empty());
        assert_eq!(app.feed_panel.selected, Some(second));
        assert_eq!(app.feed.posts()[1].id, first);
    }

    #[test]
    fn test_blank_submit_keeps_draft() {
        let mut app = app();
        app.composer.input_mut().insert_str("   ");
        assert_eq!(app.submit_post(), None);
        assert_eq!(app.composer.draft(), "   ");
        assert!(app.feed.is_empty());
    }

    #[test]
    fn test_react_targets_selection() {
        let mut app = app();
        let id = post(&mut app, "hello");

        app.react(ReactionKind::Like);
        app.react(ReactionKind::Love);

        let p = app.feed.post(id).unwrap();
        assert_eq!(p.reactions.get(ReactionKind::Like), 0);
        assert_eq!(p.reactions.get(ReactionKind::Love), 1);
        assert_eq!(p.viewer_reaction, Some(ReactionKind::Love));
    }

    #[test]
    fn test_reply_flow_moves_focus() {
        let mut app = app();
        let id = post(&mut app, "ask me anything");
        app.focus = Focus::Feed;

        app.toggle_reply();
        assert_eq!(app.focus, Focus::Comment(id));

        let panel = app.comment_panels.get_mut(&id).unwrap();
        for c in "nice".chars() {
            panel.handle_key(crossterm::event::KeyEvent::from(KeyCode::Char(c)));
        }
        assert!(app.submit_comment(id).is_some());

        assert_eq!(app.focus, Focus::Feed);
        let p = app.feed.post(id).unwrap();
        assert_eq!(p.comments.len(), 1);
        assert!(!p.composing_comment);
        assert!(app.comment_panels[&id].draft().is_empty());
    }

    #[test]
    fn test_toggle_reply_closes_from_comment_focus() {
        let mut app = app();
        let id = post(&mut app, "hello");

        app.toggle_reply();
        app.toggle_reply();
        assert_eq!(app.focus, Focus::Feed);
        assert!(!app.feed.post(id).unwrap().composing_comment);
    }

    #[test]
    fn test_filter_moves_composer_category_and_selection() {
        let mut app = app();
        app.composer.set_category(Category::Mentorship);
        let mentor = post(&mut app, "mentor me");
        app.composer.set_category(Category::CareerAdvice);
        post(&mut app, "career");

        app.set_filter(CategoryFilter::Only(Category::Mentorship));
        assert_eq!(app.composer.category(), Category::Mentorship);
        assert_eq!(app.feed_panel.selected, Some(mentor));
        assert_eq!(app.feed_panel.visible_count(), 1);

        app.set_filter(CategoryFilter::All);
        assert_eq!(app.composer.category(), Category::Mentorship);
        assert_eq!(app.feed_panel.visible_count(), 2);
    }

    #[test]
    fn test_filter_hiding_comment_target_returns_focus() {
        let mut app = app();
        app.composer.set_category(Category::JobSearch);
        let id = post(&mut app, "interview tips?");
        app.toggle_reply();
        assert_eq!(app.focus, Focus::Comment(id));

        app.set_filter(CategoryFilter::Only(Category::Salaries));
        assert_eq!(app.focus, Focus::Feed);
        assert_eq!(app.feed_panel.selected, None);
    }

    #[test]
    fn test_selected_json_skips_ui_state() {
        let mut app = app();
        post(&mut app, "json me");
        let json = app.selected_json().unwrap();
        assert!(json.contains("\"content\": \"json me\""));
        assert!(!json.contains("composing_comment"));
    }

    #[test]
    fn test_toggle_logs_respects_feature_flag() {
        let config = Config {
            features: Features {
                logs_panel: false,
                ..Features::default()
            },
            ..Config::default()
        };
        let mut app = App::new(config, LogBuffer::new());

        app.toggle_logs();
        assert!(!app.logs_visible());
        assert!(app.toast.is_some());
    }

    #[test]
    fn test_uptime_format() {
        let app = app();
        assert_eq!(app.uptime().len(), 8);
        assert!(app.uptime().starts_with("00:00:"));
    }
}
