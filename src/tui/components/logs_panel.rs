//! Logs panel component
//!
//! Shows the tail of the captured tracing events below the feed. Always
//! follows the newest entry; the panel isn't focusable.

use crate::logging::{LogEntry, LogLevel};
use crate::theme::Theme;
use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Render the newest entries that fit in `area`
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let height = area.height.saturating_sub(2) as usize;
    let entries = app.log_buffer.tail(height);
    let theme = &app.theme;

    let items: Vec<ListItem> = entries
        .iter()
        .map(|entry| ListItem::new(format_log_entry(entry, theme)))
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.border))
            .title(" Logs ")
            .title_bottom(Line::from(" L hide ").right_aligned()),
    );

    f.render_widget(list, area);
}

/// One line per entry: time, level, module, message, then the structured fields
fn format_log_entry(entry: &LogEntry, theme: &Theme) -> Line<'static> {
    let level_style = log_level_style(&entry.level, theme);

    let mut spans = vec![
        Span::styled(
            format!("[{}] ", entry.timestamp.format("%H:%M:%S")),
            Style::default().fg(theme.muted),
        ),
        Span::styled(format!("{:5} ", entry.level.as_str()), level_style),
        Span::styled(
            format!("{} ", short_target(&entry.target)),
            Style::default().fg(theme.muted),
        ),
        Span::styled(entry.message.clone(), Style::default().fg(theme.foreground)),
    ];
    if !entry.fields.is_empty() {
        spans.push(Span::styled(
            format!("  {}", entry.fields),
            Style::default().fg(theme.muted),
        ));
    }

    Line::from(spans)
}

/// Last path segment of a tracing target (`feedbox::feed` -> `feed`)
fn short_target(target: &str) -> &str {
    target.rsplit("::").next().unwrap_or(target)
}

fn log_level_style(level: &LogLevel, theme: &Theme) -> Style {
    match level {
        LogLevel::Error => Style::default()
            .fg(theme.error)
            .add_modifier(Modifier::BOLD),
        LogLevel::Warn => Style::default().fg(theme.reaction_active),
        LogLevel::Info => Style::default().fg(theme.success),
        LogLevel::Debug | LogLevel::Trace => Style::default().fg(theme.muted),
    }
}
