use std::ops::Range;

use crossterm::event::{KeyCode, KeyEvent};

/// Vertical scroll window over a block of text
#[derive(Clone, Debug)]
pub struct Viewport {
    offset: usize,
    height: usize,
    line_count: usize,
}

impl Default for Viewport {
    fn default() -> Self {
        Viewport {
            offset: 0,
            height: 15,
            line_count: 0,
        }
    }
}

impl Viewport {
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// New content; the window goes back to the top
    pub fn set_content(&mut self, text: &str) {
        self.set_line_count(text.lines().count());
    }

    pub fn set_line_count(&mut self, line_count: usize) {
        self.line_count = line_count;
        self.offset = 0;
    }

    /// Indices of the lines currently in view
    pub fn window(&self) -> Range<usize> {
        let end = self.offset.saturating_add(self.height).min(self.line_count);
        self.offset.min(end)..end
    }

    pub fn set_height(&mut self, height: usize) {
        self.height = height.max(1);
        self.offset = self.offset.min(self.max_offset());
    }

    fn max_offset(&self) -> usize {
        self.line_count.saturating_sub(self.height)
    }

    fn scroll_by(&mut self, delta: isize) {
        let target = self.offset.saturating_add_signed(delta);
        self.offset = target.min(self.max_offset());
    }

    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        let page = self.height as isize;
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.scroll_by(-1),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_by(1),
            KeyCode::PageUp | KeyCode::Char('b') => self.scroll_by(-page),
            KeyCode::PageDown | KeyCode::Char(' ') | KeyCode::Char('f') => self.scroll_by(page),
            KeyCode::Char('u') => self.scroll_by(-page / 2),
            KeyCode::Char('d') => self.scroll_by(page / 2),
            KeyCode::Home | KeyCode::Char('g') => self.offset = 0,
            KeyCode::End | KeyCode::Char('G') => self.offset = self.max_offset(),
            _ => return false,
        }
        true
    }
}
