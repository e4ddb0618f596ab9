// Views module - screen-level rendering logic
//
// The widget is a single screen, top to bottom:
// title bar, category filter, composer, feed, optional logs, status bar.
// Modals and the toast are drawn over it.

mod modal;

use super::app::App;
use super::traits::Component;
use crate::tui::components;
use chrono::Utc;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

/// Height of the logs panel when shown
const LOGS_HEIGHT: u16 = 8;

/// Main UI render function - called on every frame
pub fn draw(f: &mut Frame, app: &mut App) {
    // Apply theme background to entire frame (respects use_theme_background toggle)
    let bg_block = Block::default().style(Style::default().bg(app.theme.background));
    f.render_widget(bg_block, f.area());

    let logs_height = if app.logs_visible() { LOGS_HEIGHT } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                     // Title
            Constraint::Length(2),                     // Filter tabs
            Constraint::Length(app.composer.height()), // Composer
            Constraint::Min(6),                        // Feed
            Constraint::Length(logs_height),           // Logs
            Constraint::Length(2),                     // Status
        ])
        .split(f.area());

    // One timestamp per frame so every "x minutes ago" agrees
    let ctx = app.render_context(Utc::now());

    components::title_bar::render(f, chunks[0], app);
    components::filter_bar::render(f, chunks[1], &ctx, app.feed.filter());
    app.composer.render(f, chunks[2], &ctx);
    app.feed_panel.render_with_feed(
        f,
        chunks[3],
        &ctx,
        &app.feed,
        &app.comment_panels,
        app.comment_focus(),
    );
    if logs_height > 0 {
        components::logs_panel::render(f, chunks[4], app);
    }
    components::status_bar::render(f, chunks[5], app);

    // Render modal overlay (on top of everything)
    if let Some(ref modal_state) = app.modal {
        modal::render(f, modal_state, app);
    }

    // Render toast notification (on top of modal too)
    if let Some(ref toast) = app.toast {
        toast.render(f, f.area(), &app.theme);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::logging::LogBuffer;
    use crate::tui::app::Focus;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn draw_app(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        screen_text(&terminal)
    }

    #[test]
    fn test_empty_feed_renders_placeholder() {
        let mut app = App::new(Config::default(), LogBuffer::new());
        let screen = draw_app(&mut app);

        assert!(screen.contains("feedbox"));
        assert!(screen.contains("New post"));
        assert!(screen.contains("No posts here yet"));
        assert!(screen.contains("no posts yet"));
    }

    #[test]
    fn test_posts_and_open_reply_render() {
        let mut app = App::new(Config::default(), LogBuffer::new());
        app.composer.input_mut().insert_str("Hello from the test");
        app.submit_post();
        app.focus = Focus::Feed;
        app.toggle_reply();

        let screen = draw_app(&mut app);
        assert!(screen.contains("Hello from the test"));
        assert!(screen.contains("Write a comment"));
        assert!(screen.contains("Feed (1)"));
    }

    #[test]
    fn test_help_modal_renders() {
        let mut app = App::new(Config::default(), LogBuffer::new());
        app.open_help();
        let screen = draw_app(&mut app);
        assert!(screen.contains("Help"));
        assert!(screen.contains("Send comment"));
        assert!(screen.contains("i / c"));
    }
}
