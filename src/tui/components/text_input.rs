// Text input - editable buffer with a character cursor
//
// Used for the post draft (multi-line) and for comment drafts (single-line).
// The cursor is a char index, never a byte index, so multi-byte input and
// emoji move as one unit.

use crate::tui::traits::Handled;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

#[derive(Debug, Clone)]
pub struct TextInput {
    value: String,
    /// Cursor position in chars, 0..=char_count
    cursor: usize,
    multiline: bool,
    placeholder: &'static str,
}

impl TextInput {
    pub fn single_line(placeholder: &'static str) -> Self {
        Self {
            value: String::new(),
            cursor: 0,
            multiline: false,
            placeholder,
        }
    }

    pub fn multi_line(placeholder: &'static str) -> Self {
        Self {
            multiline: true,
            ..Self::single_line(placeholder)
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    pub fn insert_char(&mut self, c: char) {
        if c == '\n' && !self.multiline {
            return;
        }
        let at = self.byte_index(self.cursor);
        self.value.insert(at, c);
        self.cursor += 1;
    }

    /// Insert pasted text at the cursor. Newlines are dropped in single-line mode.
    pub fn insert_str(&mut self, text: &str) {
        for c in text.chars() {
            if c == '\r' {
                continue;
            }
            self.insert_char(c);
        }
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_index(self.cursor);
        self.value.remove(at);
    }

    pub fn delete(&mut self) {
        if self.cursor >= self.char_count() {
            return;
        }
        let at = self.byte_index(self.cursor);
        self.value.remove(at);
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.char_count());
    }

    /// Start of the current line
    pub fn home(&mut self) {
        let before: Vec<char> = self.value.chars().take(self.cursor).collect();
        self.cursor = before
            .iter()
            .rposition(|&c| c == '\n')
            .map(|i| i + 1)
            .unwrap_or(0);
    }

    /// End of the current line
    pub fn end(&mut self) {
        let rest = self.value.chars().skip(self.cursor).position(|c| c == '\n');
        self.cursor = match rest {
            Some(offset) => self.cursor + offset,
            None => self.char_count(),
        };
    }

    /// Editing keys. Plain Enter is never consumed, the owner decides what
    /// submitting means.
    pub fn handle_key(&mut self, key: KeyEvent) -> Handled {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key.modifiers.contains(KeyModifiers::ALT);
        let shift = key.modifiers.contains(KeyModifiers::SHIFT);

        match key.code {
            KeyCode::Enter if self.multiline && (shift || alt) => {
                self.insert_char('\n');
                Handled::Yes
            }
            KeyCode::Enter => Handled::No,
            KeyCode::Char('u') if ctrl => {
                self.clear();
                Handled::Yes
            }
            KeyCode::Char('a') if ctrl => {
                self.home();
                Handled::Yes
            }
            KeyCode::Char('e') if ctrl => {
                self.end();
                Handled::Yes
            }
            KeyCode::Char(c) if !ctrl && !alt => {
                self.insert_char(c);
                Handled::Yes
            }
            KeyCode::Backspace => {
                self.backspace();
                Handled::Yes
            }
            KeyCode::Delete => {
                self.delete();
                Handled::Yes
            }
            KeyCode::Left if !ctrl => {
                self.move_left();
                Handled::Yes
            }
            KeyCode::Right if !ctrl => {
                self.move_right();
                Handled::Yes
            }
            KeyCode::Home => {
                self.home();
                Handled::Yes
            }
            KeyCode::End => {
                self.end();
                Handled::Yes
            }
            _ => Handled::No,
        }
    }

    /// Lines for rendering, with a reversed cell marking the cursor when focused
    pub fn lines(&self, style: Style, placeholder_style: Style, focused: bool) -> Vec<Line<'static>> {
        let cursor_style = style.add_modifier(Modifier::REVERSED);

        if self.value.is_empty() {
            let mut spans = Vec::new();
            if focused {
                spans.push(Span::styled(" ", cursor_style));
            }
            spans.push(Span::styled(self.placeholder, placeholder_style));
            return vec![Line::from(spans)];
        }

        let mut lines = Vec::new();
        let mut offset = 0;
        for text in self.value.split('\n') {
            let len = text.chars().count();
            let on_line = focused && self.cursor >= offset && self.cursor <= offset + len;

            if on_line {
                let col = self.cursor - offset;
                let before: String = text.chars().take(col).collect();
                let at: Option<char> = text.chars().nth(col);
                let after: String = text.chars().skip(col + 1).collect();

                let mut spans = vec![Span::styled(before, style)];
                spans.push(Span::styled(
                    at.map(String::from).unwrap_or_else(|| " ".to_string()),
                    cursor_style,
                ));
                if !after.is_empty() {
                    spans.push(Span::styled(after, style));
                }
                lines.push(Line::from(spans));
            } else {
                lines.push(Line::from(Span::styled(text.to_string(), style)));
            }

            // +1 for the newline separator
            offset += len + 1;
        }
        lines
    }
}
