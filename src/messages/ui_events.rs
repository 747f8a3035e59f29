//! UI events - tabs, actions and the default key bindings

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Top-level tabs
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Tab {
    #[default]
    Url,
    Headers,
    Body,
    Response,
    /// Saved-request dialog; not part of the regular tab cycle
    LoadRequest,
}

impl Tab {
    /// Tabs reachable with next/prev, in order
    pub const CYCLE: [Tab; 4] = [Tab::Url, Tab::Headers, Tab::Body, Tab::Response];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Url => "URL",
            Tab::Headers => "Headers",
            Tab::Body => "Body",
            Tab::Response => "Response",
            Tab::LoadRequest => "Load Request",
        }
    }

    pub fn next(&self) -> Tab {
        match self {
            Tab::Url => Tab::Headers,
            Tab::Headers => Tab::Body,
            Tab::Body => Tab::Response,
            Tab::Response => Tab::Url,
            Tab::LoadRequest => Tab::Url,
        }
    }

    pub fn prev(&self) -> Tab {
        match self {
            Tab::Url => Tab::Response,
            Tab::Headers => Tab::Url,
            Tab::Body => Tab::Headers,
            Tab::Response => Tab::Body,
            Tab::LoadRequest => Tab::Response,
        }
    }

    /// Whether the tab has two focusable fields
    pub fn has_focus_pair(&self) -> bool {
        matches!(self, Tab::Url | Tab::Headers)
    }
}

/// Sub-tabs of the response tab
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ResponseSubTab {
    #[default]
    Body,
    Headers,
}

impl ResponseSubTab {
    pub const ALL: [ResponseSubTab; 2] = [ResponseSubTab::Body, ResponseSubTab::Headers];

    pub fn title(&self) -> &'static str {
        match self {
            ResponseSubTab::Body => "Body",
            ResponseSubTab::Headers => "Headers",
        }
    }

    pub fn toggle(&self) -> ResponseSubTab {
        match self {
            ResponseSubTab::Body => ResponseSubTab::Headers,
            ResponseSubTab::Headers => ResponseSubTab::Body,
        }
    }
}

/// Bound keyboard actions
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Action {
    Quit,
    Send,
    NextTab,
    PrevTab,
    NextFocus,
    PrevFocus,
    AdvanceField,
    AddHeader,
    ClearHeaders,
    NextResponseTab,
    PrevResponseTab,
    SaveRequest,
    LoadRequest,
    ToggleHelp,
    Escape,
    Confirm,
    MethodLeft,
    MethodRight,
}

/// Map a key press to its bound action
///
/// Plain printable characters are never bound so they always reach the
/// focused text field.
pub fn key_to_action(key: &KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);
    let shift = key.modifiers.contains(KeyModifiers::SHIFT);

    // AltGr text input
    if ctrl && alt {
        return None;
    }

    if ctrl {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('s') => Some(Action::Send),
            KeyCode::Right | KeyCode::Char('l') => Some(Action::NextTab),
            KeyCode::Left | KeyCode::Char('h') => Some(Action::PrevTab),
            KeyCode::Char('a') => Some(Action::AddHeader),
            KeyCode::Char('x') => Some(Action::ClearHeaders),
            KeyCode::Char('w') => Some(Action::SaveRequest),
            KeyCode::Char('r') => Some(Action::LoadRequest),
            _ => None,
        };
    }

    if alt {
        return match key.code {
            KeyCode::Right | KeyCode::Char('l') => Some(Action::NextFocus),
            KeyCode::Left | KeyCode::Char('h') => Some(Action::PrevFocus),
            _ => None,
        };
    }

    if shift {
        return match key.code {
            KeyCode::Right => Some(Action::NextResponseTab),
            KeyCode::Left => Some(Action::PrevResponseTab),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Tab => Some(Action::AdvanceField),
        KeyCode::F(1) => Some(Action::ToggleHelp),
        KeyCode::Esc => Some(Action::Escape),
        KeyCode::Enter => Some(Action::Confirm),
        KeyCode::Left => Some(Action::MethodLeft),
        KeyCode::Right => Some(Action::MethodRight),
        _ => None,
    }
}

/// One row of the help view
#[derive(Clone, Copy, Debug)]
pub struct KeyHelp {
    pub keys: &'static str,
    pub description: &'static str,
}

const fn help(keys: &'static str, description: &'static str) -> KeyHelp {
    KeyHelp { keys, description }
}

/// Bindings shown in the one-line help
pub const SHORT_HELP: &[KeyHelp] = &[
    help("ctrl+→", "next tab"),
    help("ctrl+s", "send request"),
    help("ctrl+w", "save request"),
    help("ctrl+r", "load request"),
    help("F1", "toggle help"),
    help("ctrl+c", "quit"),
];

/// Bindings shown in the full help, column by column
pub const FULL_HELP: &[&[KeyHelp]] = &[
    &[
        help("↑/↓", "move / scroll"),
        help("←/→", "cursor / method"),
    ],
    &[
        help("tab", "next field"),
        help("ctrl+→", "next tab"),
        help("ctrl+←", "prev tab"),
    ],
    &[help("alt+→", "next focus"), help("alt+←", "prev focus")],
    &[
        help("shift+→", "next response tab"),
        help("shift+←", "prev response tab"),
    ],
    &[
        help("ctrl+s", "send request"),
        help("ctrl+a", "add header"),
        help("ctrl+x", "clear headers"),
        help("enter", "confirm"),
    ],
    &[help("ctrl+w", "save request"), help("ctrl+r", "load request")],
    &[help("F1", "toggle help"), help("ctrl+c", "quit")],
];

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_tab_cycle() {
        let mut tab = Tab::Url;
        for expected in [Tab::Headers, Tab::Body, Tab::Response, Tab::Url] {
            tab = tab.next();
            assert_eq!(tab, expected);
        }
        assert_eq!(Tab::Url.prev(), Tab::Response);
        assert_eq!(Tab::LoadRequest.next(), Tab::Url);
        assert_eq!(Tab::LoadRequest.prev(), Tab::Response);
    }

    #[test]
    fn test_bindings() {
        let cases = [
            (KeyCode::Char('s'), KeyModifiers::CONTROL, Action::Send),
            (KeyCode::Right, KeyModifiers::CONTROL, Action::NextTab),
            (KeyCode::Char('h'), KeyModifiers::ALT, Action::PrevFocus),
            (KeyCode::Left, KeyModifiers::SHIFT, Action::PrevResponseTab),
            (KeyCode::Right, KeyModifiers::NONE, Action::MethodRight),
            (KeyCode::Tab, KeyModifiers::NONE, Action::AdvanceField),
        ];
        for (code, modifiers, action) in cases {
            assert_eq!(key_to_action(&key(code, modifiers)), Some(action));
        }
    }

    #[test]
    fn test_altgr_chords_are_unbound() {
        let altgr = KeyModifiers::CONTROL | KeyModifiers::ALT;
        for c in ['q', 's', '@'] {
            assert_eq!(key_to_action(&key(KeyCode::Char(c), altgr)), None);
        }
    }

    #[test]
    fn test_printable_keys_are_unbound() {
        for c in ['q', '?', 's', 'l', 'L', '/'] {
            assert_eq!(key_to_action(&key(KeyCode::Char(c), KeyModifiers::NONE)), None);
            assert_eq!(key_to_action(&key(KeyCode::Char(c), KeyModifiers::SHIFT)), None);
        }
    }

    #[test]
    fn test_release_events_ignored() {
        let mut release = key(KeyCode::Char('c'), KeyModifiers::CONTROL);
        release.kind = KeyEventKind::Release;
        assert_eq!(key_to_action(&release), None);
    }
}
