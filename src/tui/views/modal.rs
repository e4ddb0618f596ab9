// Modal overlay rendering
//
// Modals are rendered on top of the feed:
// - Help modal: keyboard shortcuts and the active theme

use crate::tui::app::App;
use crate::tui::modal::Modal;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render a modal dialog as a centered overlay
pub fn render(f: &mut Frame, modal: &Modal, app: &App) {
    match modal {
        Modal::Help => render_help(f, app),
    }
}

/// Calculate centered rect for modal dialog
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// Render the help modal overlay
fn render_help(f: &mut Frame, app: &App) {
    // Styles
    let key_style = Style::default().fg(app.theme.category);
    let desc_style = Style::default().fg(app.theme.foreground);
    let header_style = Style::default()
        .fg(app.theme.highlight)
        .add_modifier(Modifier::BOLD);
    let divider_style = Style::default().fg(app.theme.border);

    // Helper to create a keybind line: "    key         description"
    let kb = |key: &str, desc: &str| -> Line {
        Line::from(vec![
            Span::raw("    "),
            Span::styled(format!("{:<14}", key), key_style),
            Span::styled(desc.to_string(), desc_style),
        ])
    };

    let content = Text::from(vec![
        Line::raw(""),
        Line::from(Span::styled("  Composer", header_style)),
        kb("Enter", "Publish post"),
        kb("Shift+Enter", "New line"),
        kb("Ctrl+←/→", "Change category"),
        kb("Ctrl+U", "Clear draft"),
        kb("Esc", "Go to feed"),
        Line::raw(""),
        Line::from(Span::styled("  Feed", header_style)),
        kb("↑/↓, j/k", "Select post"),
        kb("Home/End, g/G", "First / last post"),
        kb("1 2 3 4", "React 👍 🧠 🤔 😡"),
        kb("r", "Open / close reply box"),
        kb("Enter", "Write a comment"),
        kb("f / F", "Next / previous category"),
        kb("0", "Show all categories"),
        kb("i / c", "Write a post"),
        Line::raw(""),
        Line::from(Span::styled("  Comment", header_style)),
        kb("Enter", "Send comment"),
        kb("Esc", "Back to feed"),
        Line::raw(""),
        Line::from(Span::styled("  General", header_style)),
        kb("Tab", "Switch composer / feed"),
        kb("y / Y", "Copy post text / JSON"),
        kb("L", "Toggle logs panel"),
        kb("?", "Toggle this help"),
        kb("q, Ctrl+C", "Quit"),
        Line::raw(""),
        Line::from(Span::styled(
            "  ──────────────────────────────────",
            divider_style,
        )),
        Line::from(vec![
            Span::styled("  Theme: ", desc_style),
            Span::styled(app.theme.name.as_str(), key_style),
        ]),
    ]);

    // Calculate modal size
    let width = 46;
    let height = content.lines.len() as u16 + 2;
    let area = centered_rect(width, height, f.area());

    // Clear the area behind the modal
    f.render_widget(Clear, area);

    let paragraph = Paragraph::new(content)
        .style(Style::default().bg(app.theme.background))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.highlight))
                .border_type(app.theme.border_type)
                .title(" Help ")
                .title_bottom(Line::from(" Press ? or Esc to close ").centered()),
        );

    f.render_widget(paragraph, area);
}
