// Comment panel - one per post
//
// Renders a post's comments and, while the post's composer flag is set, an
// entry field. The panel keeps nothing but its own draft; adding a comment
// or flipping the composer goes through the `CommentOwner`.

use super::formatters::wrap_text;
use super::text_input::TextInput;
use crate::feed::{CommentId, CommentOwner, Post, PostId};
use crate::tui::traits::{Handled, RenderContext};
use crossterm::event::KeyEvent;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

const PLACEHOLDER: &str = "Write a comment…";
const INDENT: &str = "    ";

#[derive(Debug, Clone)]
pub struct CommentPanel {
    post_id: PostId,
    draft: TextInput,
}

impl CommentPanel {
    pub fn new(post_id: PostId) -> Self {
        Self {
            post_id,
            draft: TextInput::single_line(PLACEHOLDER),
        }
    }

    pub fn draft(&self) -> &str {
        self.draft.value()
    }

    /// Route an editing key to the draft
    pub fn handle_key(&mut self, key: KeyEvent) -> Handled {
        self.draft.handle_key(key)
    }

    /// Insert pasted text into the draft (newlines are dropped)
    pub fn paste(&mut self, text: &str) {
        self.draft.insert_str(text);
    }

    /// Hand the draft to the owner and clear it
    ///
    /// A blank draft never reaches the owner. The owner applies its own
    /// check as well; the draft is cleared whenever it was handed over.
    pub fn submit_draft(&mut self, owner: &mut impl CommentOwner) -> Option<CommentId> {
        if self.draft.value().trim().is_empty() {
            return None;
        }

        let added = owner.add_comment(self.post_id, self.draft.value());
        self.draft.clear();
        added
    }

    /// Open or close the entry field for this panel's post
    pub fn toggle_composer(&self, owner: &mut impl CommentOwner) -> bool {
        owner.toggle_comment_composer(self.post_id)
    }

    /// Lines for the comment thread and, when open, the entry field
    pub fn render_lines(
        &self,
        post: &Post,
        ctx: &RenderContext,
        entry_focused: bool,
        width: usize,
    ) -> Vec<Line<'static>> {
        let theme = ctx.theme;
        let text_width = width.saturating_sub(INDENT.len());
        let mut lines = Vec::new();

        for comment in &post.comments {
            lines.push(Line::from(vec![
                Span::styled("  ↳ ", Style::default().fg(theme.border)),
                Span::styled(
                    comment.author.clone(),
                    Style::default()
                        .fg(theme.comment)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!(" · {}", ctx.timestamp(comment.created_at)),
                    Style::default().fg(theme.muted),
                ),
            ]));
            for text in wrap_text(&comment.text, text_width) {
                lines.push(Line::from(Span::styled(
                    format!("{}{}", INDENT, text),
                    Style::default().fg(theme.foreground),
                )));
            }
        }

        if post.composing_comment {
            let border = if entry_focused {
                theme.highlight
            } else {
                theme.border
            };
            let mut entry = vec![Span::styled("  ✎ ", Style::default().fg(border))];
            let draft_line = self
                .draft
                .lines(
                    Style::default().fg(theme.foreground),
                    Style::default().fg(theme.muted),
                    entry_focused,
                )
                .into_iter()
                .next()
                .unwrap_or_default();
            entry.extend(draft_line.spans);
            lines.push(Line::from(entry));
        }

        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::{Category, Clock, Feed, ManualClock, DEFAULT_AUTHOR};
    use crate::theme::Theme;
    use crate::tui::traits::ComponentId;
    use chrono::{Duration, TimeZone, Utc};
    use crossterm::event::{KeyCode, KeyModifiers};

    fn type_str(panel: &mut CommentPanel, text: &str) {
        for c in text.chars() {
            panel.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
    }

    /// Owner that records calls instead of storing anything
    #[derive(Default)]
    struct Recorder {
        added: Vec<(PostId, String)>,
        toggled: Vec<PostId>,
    }

    impl CommentOwner for Recorder {
        fn add_comment(&mut self, post: PostId, text: &str) -> Option<CommentId> {
            self.added.push((post, text.to_string()));
            Some(CommentId(self.added.len() as u64))
        }

        fn toggle_comment_composer(&mut self, post: PostId) -> bool {
            self.toggled.push(post);
            true
        }

        fn is_composing(&self, _post: PostId) -> bool {
            false
        }
    }

    #[test]
    fn test_submit_delegates_and_clears() {
        let mut owner = Recorder::default();
        let mut panel = CommentPanel::new(PostId(7));
        type_str(&mut panel, "Nice post");

        assert_eq!(panel.submit_draft(&mut owner), Some(CommentId(1)));
        assert_eq!(owner.added, vec![(PostId(7), "Nice post".to_string())]);
        assert!(panel.draft().is_empty());
    }

    #[test]
    fn test_blank_draft_never_reaches_owner() {
        let mut owner = Recorder::default();
        let mut panel = CommentPanel::new(PostId(1));
        type_str(&mut panel, "   ");

        assert_eq!(panel.submit_draft(&mut owner), None);
        assert!(owner.added.is_empty());
        // Untouched, like any other rejected input
        assert_eq!(panel.draft(), "   ");
    }

    #[test]
    fn test_toggle_delegates_to_owner() {
        let mut owner = Recorder::default();
        let panel = CommentPanel::new(PostId(3));
        assert!(panel.toggle_composer(&mut owner));
        assert_eq!(owner.toggled, vec![PostId(3)]);
    }

    #[test]
    fn test_round_trip_through_feed() {
        let clock = ManualClock::new(Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap());
        let mut feed = Feed::with_clock(DEFAULT_AUTHOR, &clock);
        let id = feed.submit_post("Question", Category::Mentorship).unwrap();
        let mut panel = CommentPanel::new(id);

        assert!(panel.toggle_composer(&mut feed));
        assert!(feed.is_composing(id));

        type_str(&mut panel, "First");
        panel.submit_draft(&mut feed).unwrap();
        assert!(!feed.is_composing(id));

        clock.advance(Duration::minutes(1));
        panel.toggle_composer(&mut feed);
        type_str(&mut panel, "Second");
        panel.submit_draft(&mut feed).unwrap();

        let post = feed.post(id).unwrap();
        let texts: Vec<&str> = post.comments.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, vec!["First", "Second"]);
        assert!(post.comments[1].created_at > post.comments[0].created_at);
    }

    #[test]
    fn test_entry_line_only_while_composing() {
        let clock = ManualClock::new(Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap());
        let mut feed = Feed::with_clock(DEFAULT_AUTHOR, &clock);
        let id = feed.submit_post("Post", Category::Salaries).unwrap();
        feed.add_comment(id, "hi").unwrap();

        let theme = Theme::default();
        let ctx = RenderContext::new(&theme, ComponentId::Feed, clock.now());
        let panel = CommentPanel::new(id);

        let closed = panel.render_lines(feed.post(id).unwrap(), &ctx, false, 40);
        assert_eq!(closed.len(), 2);

        feed.toggle_comment_composer(id);
        let open = panel.render_lines(feed.post(id).unwrap(), &ctx, true, 40);
        assert_eq!(open.len(), 3);
    }
}
