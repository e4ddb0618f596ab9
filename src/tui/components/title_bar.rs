// Title bar component
//
// Renders the app name and the identity posts are written as.

use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the title bar at the top of the screen
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let title = Line::from(vec![
        Span::styled(
            " 💬 feedbox",
            Style::default().fg(theme.title).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" ──── posting as ", Style::default().fg(theme.muted)),
        Span::styled(app.feed.author().to_string(), Style::default().fg(theme.author)),
    ]);

    let paragraph = Paragraph::new(title).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.title))
            .title_top(Line::from(" ? ").right_aligned()),
    );

    f.render_widget(paragraph, area);
}
