use crossterm::event::{KeyCode, KeyEvent};

use super::{next_boundary, prev_boundary, typed_char};

/// Single-line text field
#[derive(Clone, Debug, Default)]
pub struct TextInput {
    value: String,
    cursor: usize,
    char_limit: Option<usize>,
    placeholder: String,
}

impl TextInput {
    pub fn new(placeholder: impl Into<String>) -> Self {
        TextInput {
            placeholder: placeholder.into(),
            ..Default::default()
        }
    }

    pub fn with_char_limit(mut self, limit: usize) -> Self {
        self.char_limit = Some(limit);
        self
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Cursor position in chars, for drawing
    pub fn cursor_column(&self) -> usize {
        self.value[..self.cursor].chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Replace the content and move the cursor to the end
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.value.len();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Apply an editing key; returns whether the key was used
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        if let Some(c) = typed_char(key) {
            self.enter_char(c);
            return true;
        }

        match key.code {
            KeyCode::Backspace => self.delete_char(),
            KeyCode::Delete => {
                if self.cursor < self.value.len() {
                    self.value.remove(self.cursor);
                }
            }
            KeyCode::Left => self.cursor = prev_boundary(&self.value, self.cursor),
            KeyCode::Right => {
                if self.cursor < self.value.len() {
                    self.cursor = next_boundary(&self.value, self.cursor);
                }
            }
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.value.len(),
            _ => return false,
        }
        true
    }

    fn enter_char(&mut self, c: char) {
        if let Some(limit) = self.char_limit {
            if self.value.chars().count() >= limit {
                return;
            }
        }
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    fn delete_char(&mut self) {
        if self.cursor > 0 {
            let prev = prev_boundary(&self.value, self.cursor);
            self.value.remove(prev);
            self.cursor = prev;
        }
    }
}
