use crossterm::event::{KeyCode, KeyEvent};

use super::{next_boundary, prev_boundary, typed_char};

/// Multi-line text field backing the request body
#[derive(Clone, Debug, Default)]
pub struct TextArea {
    value: String,
    cursor: usize,
    placeholder: String,
}

impl TextArea {
    pub fn new(placeholder: impl Into<String>) -> Self {
        TextArea {
            placeholder: placeholder.into(),
            ..Default::default()
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.value.len();
    }

    /// (row, column) of the cursor in chars
    pub fn cursor_position(&self) -> (usize, usize) {
        let before = &self.value[..self.cursor];
        let row = before.matches('\n').count();
        let col = before[self.line_start(self.cursor)..].chars().count();
        (row, col)
    }

    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        if let Some(c) = typed_char(key) {
            self.insert(c);
            return true;
        }

        match key.code {
            KeyCode::Enter => self.insert('\n'),
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    let prev = prev_boundary(&self.value, self.cursor);
                    self.value.remove(prev);
                    self.cursor = prev;
                }
            }
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
            KeyCode::Home => self.cursor = self.line_start(self.cursor),
            KeyCode::End => self.cursor = self.line_end(self.cursor),
            KeyCode::Up => {
                let start = self.line_start(self.cursor);
                if start > 0 {
                    let col = self.value[start..self.cursor].chars().count();
                    let prev_start = self.line_start(start - 1);
                    self.cursor = self.offset_in_line(prev_start, col);
                }
            }
            KeyCode::Down => {
                let end = self.line_end(self.cursor);
                if end < self.value.len() {
                    let col = self.value[self.line_start(self.cursor)..self.cursor].chars().count();
                    self.cursor = self.offset_in_line(end + 1, col);
                }
            }
            _ => return false,
        }
        true
    }

    fn insert(&mut self, c: char) {
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    fn line_start(&self, pos: usize) -> usize {
        self.value[..pos].rfind('\n').map(|i| i + 1).unwrap_or(0)
    }

    fn line_end(&self, pos: usize) -> usize {
        self.value[pos..]
            .find('\n')
            .map(|i| pos + i)
            .unwrap_or(self.value.len())
    }

    /// Byte offset of column `col` on the line starting at `start`, clamped
    fn offset_in_line(&self, start: usize, col: usize) -> usize {
        let end = self.line_end(start);
        self.value[start..end]
            .char_indices()
            .nth(col)
            .map(|(i, _)| start + i)
            .unwrap_or(end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(area: &mut TextArea, code: KeyCode) {
        area.handle_key(&KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_multiline_editing() {
        let mut area = TextArea::new("");
        for c in "{\"a\":1".chars() {
            press(&mut area, KeyCode::Char(c));
        }
        press(&mut area, KeyCode::Enter);
        press(&mut area, KeyCode::Char('}'));
        assert_eq!(area.value(), "{\"a\":1\n}");
        assert_eq!(area.cursor_position(), (1, 1));

        press(&mut area, KeyCode::Up);
        assert_eq!(area.cursor_position(), (0, 1));
        press(&mut area, KeyCode::End);
        assert_eq!(area.cursor_position(), (0, 6));
        press(&mut area, KeyCode::Down);
        assert_eq!(area.cursor_position(), (1, 1));
    }

    #[test]
    fn test_set_value_moves_cursor_to_end() {
        let mut area = TextArea::new("");
        area.set_value("one\ntwo");
        assert_eq!(area.cursor_position(), (1, 3));
    }
}
