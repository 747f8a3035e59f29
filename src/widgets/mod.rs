//! Editing models behind the focusable fields
//!
//! These hold content, cursor and selection only; drawing them is the job
//! of `crate::ui`.

pub mod select_list;
pub mod text_area;
pub mod text_input;
pub mod viewport;

pub use select_list::{ListEntry, SelectList};
pub use text_area::TextArea;
pub use text_input::TextInput;
pub use viewport::Viewport;

use crossterm::event::{KeyEvent, KeyModifiers};

/// Printable character carried by a key press, if any
///
/// Control and Alt together are how AltGr arrives on Windows, so that
/// pair still types; either one alone makes a chord.
pub(crate) fn typed_char(key: &KeyEvent) -> Option<char> {
    let chord = KeyModifiers::CONTROL | KeyModifiers::ALT;
    let held = key.modifiers & chord;
    if !held.is_empty() && held != chord {
        return None;
    }
    match key.code {
        crossterm::event::KeyCode::Char(c) => Some(c),
        _ => None,
    }
}

/// Byte index of the char boundary before `pos`
pub(crate) fn prev_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .last()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Byte index of the char boundary after `pos`
pub(crate) fn next_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}
