// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard and mouse input, timer ticks)
// - Routing input to the focused part of the widget

pub mod app;
pub mod clipboard;
pub mod components;
pub mod input;
pub mod layout;
pub mod modal;
pub mod traits;
pub mod views;

use crate::config::Config;
use crate::feed::{CategoryFilter, ReactionKind};
use crate::logging::LogBuffer;
use anyhow::{Context, Result};
use app::{App, Focus};
use crossterm::{
    event::{
        self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste,
        EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use modal::ModalAction;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use traits::Interactive;

/// Run the TUI
///
/// Sets up the terminal, runs the event loop, and restores the terminal
/// when done. `seed` runs against the fresh App before the first frame.
pub async fn run_tui(
    config: Config,
    log_buffer: LogBuffer,
    seed: impl FnOnce(&mut App),
) -> Result<()> {
    // Set up terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste
    )
    .context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(config, log_buffer);
    seed(&mut app);
    app.sync_panels();

    tracing::info!(author = app.feed.author(), theme = %app.theme.name, "Feed ready");

    let result = run_event_loop(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    )
    .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// Waits on terminal input and a redraw tick with `tokio::select!`. The tick
/// keeps relative timestamps, uptime and toast expiry current while idle.
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    let mut tick_interval = tokio::time::interval(Duration::from_millis(200));

    loop {
        app.sync_panels();
        terminal
            .draw(|f| views::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            // Keyboard or mouse input
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    match event::read() {
                        Ok(Event::Key(key_event)) => handle_key_event(app, key_event),
                        Ok(Event::Mouse(mouse_event)) => handle_mouse_event(app, mouse_event),
                        Ok(Event::Paste(text)) => handle_paste(app, &text),
                        _ => {}
                    }
                }
            } => {}

            _ = tick_interval.tick() => {
                app.clear_expired_toast();
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Handle keyboard input
/// Layered dispatch: Modal → Global → Focus-specific → Component
fn handle_key_event(app: &mut App, key_event: KeyEvent) {
    // Release events only feed the debounce state
    if key_event.kind == KeyEventKind::Release {
        app.handle_key_release(key_event.code);
        return;
    }
    if key_event.kind != KeyEventKind::Press {
        return;
    }

    // Layer 1: Modal captures all input when active
    if handle_modal_input(app, &key_event) {
        return;
    }

    // Layer 2: Global keys (work regardless of focus)
    if handle_global_keys(app, &key_event) {
        return;
    }

    // Layer 3: Focus-specific
    match app.focus {
        Focus::Composer => handle_composer_keys(app, key_event),
        Focus::Comment(id) => handle_comment_keys(app, id, key_event),
        Focus::Feed => handle_feed_keys(app, key_event),
    }
}

/// Handle modal input - returns true if modal absorbed the input
fn handle_modal_input(app: &mut App, key_event: &KeyEvent) -> bool {
    let Some(ref mut modal) = app.modal else {
        return false;
    };

    match modal.handle_input(key_event.code) {
        ModalAction::None => {}
        ModalAction::Close => app.modal = None,
        ModalAction::Quit => {
            app.modal = None;
            app.should_quit = true;
        }
    }

    true // Modal absorbed the input
}

/// Handle global keys - returns true if handled
///
/// Only keys that can't be typed into a text field live here.
fn handle_global_keys(app: &mut App, key_event: &KeyEvent) -> bool {
    let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);

    match key_event.code {
        KeyCode::Char('c') if ctrl => {
            app.should_quit = true;
            true
        }
        KeyCode::Tab => {
            app.focus_next();
            true
        }
        KeyCode::BackTab => {
            app.focus_prev();
            true
        }
        _ => false,
    }
}

/// Composer: Enter posts, Esc leaves for the feed, everything else edits
fn handle_composer_keys(app: &mut App, key_event: KeyEvent) {
    let newline_modifier = key_event
        .modifiers
        .intersects(KeyModifiers::SHIFT | KeyModifiers::ALT);

    match key_event.code {
        KeyCode::Enter if !newline_modifier => {
            app.submit_post();
        }
        KeyCode::Esc => app.focus = Focus::Feed,
        _ => {
            app.composer.handle_key(key_event);
        }
    }
}

/// Comment entry: Enter sends, Esc returns to the feed with the box left open
fn handle_comment_keys(app: &mut App, id: crate::feed::PostId, key_event: KeyEvent) {
    match key_event.code {
        KeyCode::Enter => {
            app.submit_comment(id);
        }
        KeyCode::Esc => app.focus = Focus::Feed,
        _ => {
            if let Some(panel) = app.comment_panels.get_mut(&id) {
                panel.handle_key(key_event);
            }
        }
    }
}

/// Navigation mode: single-key actions, then selection movement
fn handle_feed_keys(app: &mut App, key_event: KeyEvent) {
    let key = key_event.code;

    // Hold-to-repeat for j/k, once-per-press for everything else
    if !app.handle_key_press(key) {
        return;
    }

    match key {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('?') => app.open_help(),
        KeyCode::Char('L') => app.toggle_logs(),
        KeyCode::Char(c @ '1'..='4') => {
            let kind = ReactionKind::ALL[(c as usize) - ('1' as usize)];
            app.react(kind);
        }
        KeyCode::Char('r') => app.toggle_reply(),
        KeyCode::Enter => app.open_reply(),
        KeyCode::Char('0') => app.set_filter(CategoryFilter::All),
        KeyCode::Char('f') => app.cycle_filter(true),
        KeyCode::Char('F') => app.cycle_filter(false),
        KeyCode::Char('y') => app.copy_selected(false),
        KeyCode::Char('Y') => app.copy_selected(true),
        KeyCode::Char('i') | KeyCode::Char('c') => app.focus = Focus::Composer,
        _ => {
            app.feed_panel.handle_key(key_event);
        }
    }
}

/// Bracketed paste goes into whichever text field has focus
fn handle_paste(app: &mut App, text: &str) {
    if app.modal.is_some() {
        return;
    }

    match app.focus {
        Focus::Composer => app.composer.input_mut().insert_str(text),
        Focus::Comment(id) => {
            if let Some(panel) = app.comment_panels.get_mut(&id) {
                panel.paste(text);
            }
        }
        Focus::Feed => {}
    }
}

/// Handle mouse input - the wheel moves the feed selection
fn handle_mouse_event(app: &mut App, mouse_event: MouseEvent) {
    if app.modal.is_some() {
        return;
    }

    match mouse_event.kind {
        MouseEventKind::ScrollUp => app.feed_panel.select_previous(),
        MouseEventKind::ScrollDown => app.feed_panel.select_next(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::Category;
    use crate::logging::LogBuffer;

    fn app() -> App {
        App::new(Config::default(), LogBuffer::new())
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_key_event(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_typing_and_enter_posts() {
        let mut app = app();
        type_text(&mut app, "quit? never");
        press(&mut app, KeyCode::Enter);

        assert!(!app.should_quit);
        assert_eq!(app.feed.len(), 1);
        assert_eq!(app.feed.posts()[0].content, "quit? never");
        assert!(app.composer.draft().is_empty());
    }

    #[test]
    fn test_shift_enter_inserts_newline() {
        let mut app = app();
        type_text(&mut app, "a");
        handle_key_event(&mut app, KeyEvent::new(KeyCode::Enter, KeyModifiers::SHIFT));
        type_text(&mut app, "b");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.feed.posts()[0].content, "a\nb");
    }

    #[test]
    fn test_navigation_keys_act_on_selection() {
        let mut app = app();
        type_text(&mut app, "hello");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Focus::Feed);

        press(&mut app, KeyCode::Char('2'));
        let id = app.feed_panel.selected.unwrap();
        assert_eq!(
            app.feed.post(id).unwrap().viewer_reaction,
            Some(ReactionKind::Love)
        );
    }

    #[test]
    fn test_reply_via_keys() {
        let mut app = app();
        type_text(&mut app, "ask");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Char('r'));

        let id = app.feed_panel.selected.unwrap();
        assert_eq!(app.focus, Focus::Comment(id));

        // Keys that are actions in the feed are plain text here
        type_text(&mut app, "qr1");
        press(&mut app, KeyCode::Enter);

        let post = app.feed.post(id).unwrap();
        assert_eq!(post.comments.len(), 1);
        assert_eq!(post.comments[0].text, "qr1");
        assert_eq!(app.focus, Focus::Feed);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_filter_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Char('f'));
        assert_eq!(
            app.feed.filter(),
            CategoryFilter::Only(Category::CareerAdvice)
        );
        press(&mut app, KeyCode::Char('0'));
        assert_eq!(app.feed.filter(), CategoryFilter::All);
    }

    #[test]
    fn test_i_and_c_focus_composer() {
        let mut app = app();
        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Char('c'));
        assert_eq!(app.focus, Focus::Composer);

        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Char('i'));
        assert_eq!(app.focus, Focus::Composer);
        assert!(app.composer.draft().is_empty());
    }

    #[test]
    fn test_modal_absorbs_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Char('?'));
        assert!(app.modal.is_some());

        press(&mut app, KeyCode::Char('f'));
        assert_eq!(app.feed.filter(), CategoryFilter::All);

        press(&mut app, KeyCode::Esc);
        assert!(app.modal.is_none());
    }

    #[test]
    fn test_q_quits_only_outside_text_fields() {
        let mut app = app();
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);

        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_paste_goes_to_focused_field() {
        let mut app = app();
        handle_paste(&mut app, "line one\nline two");
        assert_eq!(app.composer.draft(), "line one\nline two");

        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Char('r'));
        let id = app.feed_panel.selected.unwrap();

        // Comment entry is single-line
        handle_paste(&mut app, "a\nb");
        assert_eq!(app.comment_panels[&id].draft(), "ab");

        press(&mut app, KeyCode::Esc);
        handle_paste(&mut app, "ignored");
        assert_eq!(app.comment_panels[&id].draft(), "ab");
    }

    #[test]
    fn test_ctrl_c_quits_from_composer() {
        let mut app = app();
        handle_key_event(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(app.should_quit);
    }
}
