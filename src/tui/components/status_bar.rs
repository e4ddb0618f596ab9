// Status bar component
//
// Renders keybind hints for the focused component on the left and feed
// counts on the right.

use super::formatters::pluralize;
use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Post and reaction totals, with the filtered count when a filter hides posts
fn feed_counts(app: &App) -> String {
    if app.feed.is_empty() {
        return "no posts yet".to_string();
    }

    let total = app.feed.len();
    let visible = app.feed_panel.visible_count();
    let reactions: u32 = app.feed.posts().iter().map(|p| p.reactions.total()).sum();

    let posts = if visible == total {
        pluralize(total, "post")
    } else {
        format!("{} of {}", visible, pluralize(total, "post"))
    };
    format!("{} · {}", posts, pluralize(reactions as usize, "reaction"))
}

/// Render the status bar
///
/// Adapts to terminal width:
/// - Wide: hints plus post counts and uptime
/// - Narrow: counts only, hints would be cut anyway
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let bp = Breakpoint::from_width(area.width);
    let counts = format!(" {} │ {} ", feed_counts(app), app.uptime());

    let block = Block::default().borders(Borders::TOP);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let style = Style::default().fg(app.theme.status_bar);

    if !bp.at_least(Breakpoint::Normal) {
        f.render_widget(Paragraph::new(counts).style(style), inner);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(counts.width() as u16)])
        .split(inner);

    let hint = app.focus_hint().unwrap_or("? help │ q quit");
    f.render_widget(
        Paragraph::new(format!(" {}", hint)).style(Style::default().fg(app.theme.muted)),
        chunks[0],
    );
    f.render_widget(
        Paragraph::new(Line::from(counts).right_aligned()).style(style),
        chunks[1],
    );
}
