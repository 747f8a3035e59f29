use crossterm::event::{KeyCode, KeyEvent};

use super::typed_char;

/// An item that can be shown in a `SelectList`
pub trait ListEntry {
    fn title(&self) -> String;
    fn subtitle(&self) -> String;
    /// Text the filter is matched against
    fn filter_key(&self) -> &str;
}

/// Selectable list with an optional type-to-filter mode
///
/// Used both for the method picker and for the saved-request dialog.
#[derive(Clone, Debug)]
pub struct SelectList<T> {
    items: Vec<T>,
    /// Index into the visible (filtered) items
    selected: usize,
    filter: String,
    filtering_enabled: bool,
    typing_filter: bool,
}

impl<T> Default for SelectList<T> {
    fn default() -> Self {
        SelectList {
            items: Vec::new(),
            selected: 0,
            filter: String::new(),
            filtering_enabled: false,
            typing_filter: false,
        }
    }
}

impl<T: ListEntry> SelectList<T> {
    pub fn new(items: Vec<T>) -> Self {
        SelectList {
            items,
            ..Default::default()
        }
    }

    pub fn with_filtering(mut self) -> Self {
        self.filtering_enabled = true;
        self
    }

    /// Replace the items, clearing selection and filter
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.selected = 0;
        self.filter.clear();
        self.typing_filter = false;
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn is_typing_filter(&self) -> bool {
        self.typing_filter
    }

    /// Items passing the filter, in order
    pub fn visible(&self) -> Vec<&T> {
        if self.filter.is_empty() {
            return self.items.iter().collect();
        }
        let needle = self.filter.to_lowercase();
        self.items
            .iter()
            .filter(|item| item.filter_key().to_lowercase().contains(&needle))
            .collect()
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_item(&self) -> Option<&T> {
        self.visible().get(self.selected).copied()
    }

    pub fn select(&mut self, index: usize) {
        let len = self.visible().len();
        if index < len {
            self.selected = index;
        }
    }

    pub fn select_next(&mut self) {
        let len = self.visible().len();
        if self.selected + 1 < len {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Move one step forward, wrapping past the end
    pub fn cycle_next(&mut self) {
        let len = self.visible().len();
        if len > 0 {
            self.selected = (self.selected + 1) % len;
        }
    }

    /// Move one step back, wrapping past the start
    pub fn cycle_prev(&mut self) {
        let len = self.visible().len();
        if len > 0 {
            self.selected = (self.selected + len - 1) % len;
        }
    }

    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        if self.typing_filter {
            if let Some(c) = typed_char(key) {
                self.filter.push(c);
                self.selected = 0;
                return true;
            }
            match key.code {
                KeyCode::Backspace => {
                    self.filter.pop();
                    self.selected = 0;
                }
                KeyCode::Enter => self.typing_filter = false,
                _ => return false,
            }
            return true;
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Home | KeyCode::Char('g') => self.selected = 0,
            KeyCode::End | KeyCode::Char('G') => {
                self.selected = self.visible().len().saturating_sub(1)
            }
            KeyCode::Char('/') if self.filtering_enabled => {
                self.typing_filter = true;
            }
            _ => return false,
        }
        true
    }
}
