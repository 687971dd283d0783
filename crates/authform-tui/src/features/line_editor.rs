//! Single-line text editing for form fields.
//!
//! Supports the subset of editing operations a login field needs. Newlines
//! never enter the buffer: pasted text is flattened to one line.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use unicode_width::UnicodeWidthStr;

/// Text plus a cursor measured in chars.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineEditor {
    text: String,
    cursor: usize,
}

impl LineEditor {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Display width of the text before the cursor.
    pub fn cursor_width(&self) -> usize {
        let byte_idx = char_to_byte_index(&self.text, self.cursor);
        self.text[..byte_idx].width()
    }

    /// Inserts text at the cursor; line breaks become spaces.
    pub fn insert_str(&mut self, text: &str) {
        let flat: String = text
            .chars()
            .filter(|c| *c != '\r')
            .map(|c| if c == '\n' { ' ' } else { c })
            .collect();
        if flat.is_empty() {
            return;
        }
        let byte_idx = char_to_byte_index(&self.text, self.cursor);
        self.text.insert_str(byte_idx, &flat);
        self.cursor += flat.chars().count();
    }

    pub fn insert_char(&mut self, ch: char) {
        let mut buf = [0u8; 4];
        self.insert_str(ch.encode_utf8(&mut buf));
    }

    /// Backspace.
    pub fn delete_prev_char(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.delete_chars(self.cursor - 1, self.cursor);
        self.cursor -= 1;
    }

    /// Delete.
    pub fn delete_next_char(&mut self) {
        if self.cursor >= self.char_len() {
            return;
        }
        self.delete_chars(self.cursor, self.cursor + 1);
    }

    /// Deletes the word immediately to the left of the cursor.
    pub fn delete_word_left(&mut self) {
        let chars: Vec<char> = self.text.chars().collect();
        let mut start = self.cursor.min(chars.len());
        while start > 0 && chars[start - 1].is_whitespace() {
            start -= 1;
        }
        while start > 0 && !chars[start - 1].is_whitespace() {
            start -= 1;
        }
        self.delete_chars(start, self.cursor);
        self.cursor = start;
    }

    /// Deletes everything before the cursor.
    pub fn delete_to_head(&mut self) {
        self.delete_chars(0, self.cursor);
        self.cursor = 0;
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.char_len());
    }

    pub fn move_head(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_len();
    }

    /// Applies an editing key. Returns true if the text changed.
    pub fn input(&mut self, key: KeyEvent) -> bool {
        if matches!(key.kind, KeyEventKind::Release) {
            return false;
        }

        let before = self.text.len();
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('w') if ctrl => self.delete_word_left(),
            KeyCode::Char('u') if ctrl => self.delete_to_head(),
            KeyCode::Char(ch)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.insert_char(ch);
            }
            KeyCode::Backspace => self.delete_prev_char(),
            KeyCode::Delete => self.delete_next_char(),
            KeyCode::Left => self.move_left(),
            KeyCode::Right => self.move_right(),
            KeyCode::Home => self.move_head(),
            KeyCode::End => self.move_end(),
            _ => {}
        }

        // Every edit changes the byte length; cursor moves never do.
        self.text.len() != before
    }

    fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    fn delete_chars(&mut self, start: usize, end: usize) {
        if start >= end {
            return;
        }
        let start = char_to_byte_index(&self.text, start);
        let end = char_to_byte_index(&self.text, end);
        self.text.replace_range(start..end, "");
    }
}

fn char_to_byte_index(line: &str, col: usize) -> usize {
    line.char_indices()
        .nth(col)
        .map_or(line.len(), |(idx, _)| idx)
}
