//! Feed panel component
//!
//! Displays the visible posts as cards, newest first, with a selection the
//! reaction/reply keys act on.
//!
//! # Selection
//!
//! The selection is a `PostId`, not a row index, so it stays on the same post
//! when a new post is prepended or the filter changes underneath it. The App
//! calls [`FeedPanel::sync`] with the visible ids before every frame; a
//! selection that fell out of view moves to the nearest visible post.

use super::comment_panel::CommentPanel;
use super::formatters::{format_number, pluralize, wrap_text};
use crate::feed::{Clock, Feed, Post, PostId, ReactionKind};
use crate::tui::layout::Breakpoint;
use crate::tui::traits::{Component, ComponentId, Handled, Interactive, RenderContext};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::collections::HashMap;

/// Gutter drawn left of every card line
const GUTTER_WIDTH: usize = 2;

pub struct FeedPanel {
    /// Selected post (None only while nothing is visible)
    pub selected: Option<PostId>,

    /// Visible ids in display order, synced by the App each frame
    visible: Vec<PostId>,
}

impl FeedPanel {
    pub fn new() -> Self {
        Self {
            selected: None,
            visible: Vec::new(),
        }
    }

    /// Replace the visible id list and keep the selection valid
    pub fn sync(&mut self, visible: Vec<PostId>) {
        self.selected = match self.selected {
            Some(id) if visible.contains(&id) => Some(id),
            Some(id) => {
                // Nearest visible post by position in the old list
                let old_pos = self.visible.iter().position(|v| *v == id).unwrap_or(0);
                self.visible
                    .iter()
                    .skip(old_pos)
                    .chain(self.visible.iter().take(old_pos).rev())
                    .find(|v| visible.contains(v))
                    .copied()
                    .or_else(|| visible.first().copied())
            }
            None => visible.first().copied(),
        };
        self.visible = visible;
    }

    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    pub fn select(&mut self, id: PostId) {
        if self.visible.contains(&id) {
            self.selected = Some(id);
        }
    }

    fn selected_position(&self) -> Option<usize> {
        let id = self.selected?;
        self.visible.iter().position(|v| *v == id)
    }

    pub fn select_next(&mut self) {
        if let Some(pos) = self.selected_position() {
            if let Some(id) = self.visible.get(pos + 1) {
                self.selected = Some(*id);
            }
        }
    }

    pub fn select_previous(&mut self) {
        if let Some(pos) = self.selected_position() {
            if pos > 0 {
                self.selected = Some(self.visible[pos - 1]);
            }
        }
    }

    pub fn select_first(&mut self) {
        self.selected = self.visible.first().copied();
    }

    pub fn select_last(&mut self) {
        self.selected = self.visible.last().copied();
    }

    /// Render the posts of `feed` that pass its filter
    pub fn render_with_feed<C: Clock>(
        &self,
        f: &mut Frame,
        area: Rect,
        ctx: &RenderContext,
        feed: &Feed<C>,
        comment_panels: &HashMap<PostId, CommentPanel>,
        comment_focus: Option<PostId>,
    ) {
        let visible: Vec<&Post> = feed.visible_posts().collect();
        if visible.is_empty() {
            self.render(f, area, ctx);
            return;
        }

        let inner_width = area.width.saturating_sub(2) as usize;
        let content_width =
            Breakpoint::from_width(area.width).card_width(inner_width.saturating_sub(GUTTER_WIDTH));
        let height = area.height.saturating_sub(2) as usize;

        let mut lines: Vec<Line> = Vec::new();
        let mut selected_range = (0, 0);

        for (i, post) in visible.iter().enumerate() {
            if i > 0 {
                lines.push(Line::raw(""));
            }

            let is_selected = self.selected == Some(post.id);
            let start = lines.len();

            let panel = comment_panels.get(&post.id);
            let card = post_card(post, ctx, panel, comment_focus == Some(post.id), content_width);

            let gutter = if is_selected {
                Span::styled("▌ ", Style::default().fg(ctx.theme.highlight))
            } else {
                Span::raw("  ")
            };
            for line in card {
                let mut spans = vec![gutter.clone()];
                spans.extend(line.spans);
                lines.push(Line::from(spans));
            }

            if is_selected {
                selected_range = (start, lines.len());
            }
        }

        // Bring the end of the selected card into view, then its start
        let (sel_start, sel_end) = selected_range;
        let scroll = sel_end.saturating_sub(height).min(sel_start);

        let title = match feed.filter().category() {
            Some(category) => Line::from(vec![
                Span::raw(" Feed · "),
                Span::styled(
                    category.label(),
                    Style::default().fg(ctx.theme.filter_active),
                ),
                Span::raw(format!(" ({}) ", visible.len())),
            ]),
            None => Line::from(format!(" Feed ({}) ", visible.len())),
        };

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(ctx.theme.border_type)
                    .border_style(Style::default().fg(ctx.border_color(self.id())))
                    .title(title),
            )
            .scroll((scroll as u16, 0));

        f.render_widget(paragraph, area);
    }
}

impl Default for FeedPanel {
    fn default() -> Self {
        Self::new()
    }
}

/// Lines for one post: header, content, reactions row, comment thread
fn post_card(
    post: &Post,
    ctx: &RenderContext,
    panel: Option<&CommentPanel>,
    entry_focused: bool,
    width: usize,
) -> Vec<Line<'static>> {
    let theme = ctx.theme;
    let mut lines = Vec::new();

    lines.push(Line::from(vec![
        Span::styled(
            post.author.clone(),
            Style::default()
                .fg(theme.author)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" · {} · ", ctx.timestamp(post.created_at)),
            Style::default().fg(theme.muted),
        ),
        Span::styled(
            post.category.label(),
            Style::default().fg(theme.category),
        ),
    ]));

    for text in wrap_text(&post.content, width) {
        lines.push(Line::from(Span::styled(
            text,
            Style::default().fg(theme.foreground),
        )));
    }

    let mut reactions = Vec::new();
    for (i, kind) in ReactionKind::ALL.into_iter().enumerate() {
        let count = post.reactions.get(kind);
        let style = if post.viewer_reaction == Some(kind) {
            Style::default()
                .fg(theme.reaction_active)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.reaction)
        };
        let label = if count > 0 {
            format!("{}{} {} ", i + 1, kind.emoji(), format_number(u64::from(count)))
        } else {
            format!("{}{} ", i + 1, kind.emoji())
        };
        reactions.push(Span::styled(label, style));
        reactions.push(Span::raw(" "));
    }
    let reply = if post.composing_comment { "Cancel" } else { "Reply" };
    reactions.push(Span::styled(
        format!("💬 {} · r {}", pluralize(post.comments.len(), "comment"), reply),
        Style::default().fg(theme.comment),
    ));
    lines.push(Line::from(reactions));

    match panel {
        Some(panel) => lines.extend(panel.render_lines(post, ctx, entry_focused, width)),
        None => lines.extend(CommentPanel::new(post.id).render_lines(post, ctx, false, width)),
    }

    lines
}

impl Component for FeedPanel {
    fn id(&self) -> ComponentId {
        ComponentId::Feed
    }

    /// Empty state
    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(ctx.theme.border_type)
            .border_style(Style::default().fg(ctx.border_color(self.id())))
            .title(" Feed ");

        let text = Paragraph::new(vec![
            Line::raw(""),
            Line::from(Span::styled(
                "  No posts here yet. Write one above and press Enter.",
                Style::default().fg(ctx.theme.muted),
            )),
        ])
        .block(block);

        f.render_widget(text, area);
    }
}

impl Interactive for FeedPanel {
    fn handle_key(&mut self, key: KeyEvent) -> Handled {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return Handled::No;
        }

        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Up | KeyCode::Char('k') => self.select_previous(),
            KeyCode::Home | KeyCode::Char('g') => self.select_first(),
            KeyCode::End | KeyCode::Char('G') => self.select_last(),
            _ => return Handled::No,
        }
        Handled::Yes
    }

    fn focus_hint(&self) -> Option<&'static str> {
        Some("j/k select │ 1-4 react │ r reply │ f filter │ y copy │ Tab compose")
    }
}
