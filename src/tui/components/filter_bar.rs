// Filter bar component
//
// One tab per filter option; the active filter is highlighted. Key hints
// sit in the bottom border (0 for All, f/F to cycle).

use crate::feed::{Category, CategoryFilter};
use crate::tui::layout::Breakpoint;
use crate::tui::traits::RenderContext;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, ctx: &RenderContext, active: CategoryFilter) {
    let theme = ctx.theme;
    let short = Breakpoint::from_width(area.width).short_filter_labels();
    let mut spans = vec![Span::raw(" ")];

    for (i, option) in CategoryFilter::OPTIONS.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("│", Style::default().fg(theme.border)));
        }
        let style = if option == active {
            Style::default()
                .fg(theme.selection_fg)
                .bg(theme.selection)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.muted)
        };
        let label = if short {
            short_label(option)
        } else {
            option.label()
        };
        spans.push(Span::styled(format!(" {} ", label), style));
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(theme.border))
            .title_bottom(Line::from(" f/F filter · 0 all ").right_aligned()),
    );

    f.render_widget(paragraph, area);
}

/// Tab label that fits a half-width terminal
fn short_label(option: CategoryFilter) -> &'static str {
    match option {
        CategoryFilter::All => "All",
        CategoryFilter::Only(Category::CareerAdvice) => "Career",
        CategoryFilter::Only(Category::Mentorship) => "Mentorship",
        CategoryFilter::Only(Category::JobSearch) => "Job Search",
        CategoryFilter::Only(Category::Salaries) => "Salaries",
    }
}
