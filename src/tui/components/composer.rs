// Post composer
//
// Multi-line draft plus the category the next post is filed under.
// Enter is left to the App: submitting needs the Feed, which the composer
// doesn't own.

use super::text_input::TextInput;
use crate::feed::{Category, CategoryFilter};
use crate::tui::traits::{Component, ComponentId, Handled, Interactive, RenderContext};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const PLACEHOLDER: &str = "What's on your mind?";

pub struct Composer {
    input: TextInput,
    category: Category,
}

impl Composer {
    pub fn new(category: Category) -> Self {
        Self {
            input: TextInput::multi_line(PLACEHOLDER),
            category,
        }
    }

    pub fn draft(&self) -> &str {
        self.input.value()
    }

    pub fn clear_draft(&mut self) {
        self.input.clear();
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn set_category(&mut self, category: Category) {
        self.category = category;
    }

    /// Adopt the filter's category; `All` leaves the current choice alone
    pub fn follow_filter(&mut self, filter: CategoryFilter) {
        if let Some(category) = filter.category() {
            self.set_category(category);
        }
    }

    pub fn input_mut(&mut self) -> &mut TextInput {
        &mut self.input
    }

    /// Rows needed to show the draft, including borders and the category row
    pub fn height(&self) -> u16 {
        let lines = self.input.value().split('\n').count().clamp(1, 6) as u16;
        lines + 3
    }
}

impl Component for Composer {
    fn id(&self) -> ComponentId {
        ComponentId::Composer
    }

    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let theme = ctx.theme;
        let focused = ctx.is_focused(self.id());

        let mut lines = self.input.lines(
            Style::default().fg(theme.foreground),
            Style::default().fg(theme.muted),
            focused,
        );

        lines.push(Line::from(vec![
            Span::styled("Category: ", Style::default().fg(theme.muted)),
            Span::styled("◂ ", Style::default().fg(theme.border)),
            Span::styled(
                self.category.label(),
                Style::default()
                    .fg(theme.category)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" ▸", Style::default().fg(theme.border)),
        ]));

        // Keep the cursor row on screen when the draft outgrows the box
        let inner_height = area.height.saturating_sub(2) as usize;
        let scroll = lines.len().saturating_sub(inner_height) as u16;

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(ctx.border_color(self.id())))
            .title(" New post ")
            .title_bottom(Line::from(" Enter to post ").right_aligned());

        let paragraph = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0));

        f.render_widget(paragraph, area);
    }
}

impl Interactive for Composer {
    fn handle_key(&mut self, key: KeyEvent) -> Handled {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Left => {
                    self.category = self.category.prev();
                    return Handled::Yes;
                }
                KeyCode::Right => {
                    self.category = self.category.next();
                    return Handled::Yes;
                }
                _ => {}
            }
        }

        self.input.handle_key(key)
    }

    fn focus_hint(&self) -> Option<&'static str> {
        Some("Enter post │ Shift+Enter newline │ Ctrl+←/→ category │ Tab feed")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ctrl_arrows_cycle_category() {
        let mut composer = Composer::new(Category::CareerAdvice);
        let ctrl_right = KeyEvent::new(KeyCode::Right, KeyModifiers::CONTROL);
        let ctrl_left = KeyEvent::new(KeyCode::Left, KeyModifiers::CONTROL);

        assert_eq!(composer.handle_key(ctrl_right), Handled::Yes);
        assert_eq!(composer.category(), Category::CareerAdvice.next());
        composer.handle_key(ctrl_left);
        assert_eq!(composer.category(), Category::CareerAdvice);
        assert!(composer.draft().is_empty());
    }

    #[test]
    fn test_follow_filter_keeps_choice_under_all() {
        let mut composer = Composer::new(Category::Salaries);
        composer.follow_filter(CategoryFilter::All);
        assert_eq!(composer.category(), Category::Salaries);

        composer.follow_filter(CategoryFilter::Only(Category::Mentorship));
        assert_eq!(composer.category(), Category::Mentorship);
    }

    #[test]
    fn test_enter_is_not_consumed() {
        let mut composer = Composer::new(Category::CareerAdvice);
        composer.input_mut().insert_str("Hello");
        let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(composer.handle_key(enter), Handled::No);
        assert_eq!(composer.draft(), "Hello");
    }
}
