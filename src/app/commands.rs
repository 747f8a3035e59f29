//! Command handlers - the session transition function
//!
//! `SessionState::handle` consumes one event and returns the effects the
//! runner must perform. Nothing in here touches the network or the disk.

use crossterm::event::KeyEvent;

use crate::app::{Effect, SessionState};
use crate::ansi;
use crate::highlight::detect_content_type;
use crate::messages::ui_events::{key_to_action, Action, ResponseSubTab, Tab};
use crate::messages::Event;
use crate::models::{HttpMethod, Request, ResponseOutcome, SavedRequest};

/// Rows taken by chrome around the response and body views
const VIEWPORT_CHROME_ROWS: u16 = 16;

impl SessionState {
    /// Apply one event
    pub fn handle(&mut self, event: Event) -> Vec<Effect> {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Resize { width, height } => {
                tracing::debug!(width, height, "Terminal resized");
                let rows = height.saturating_sub(VIEWPORT_CHROME_ROWS) as usize;
                self.response_viewport.set_height(rows);
                self.headers_viewport.set_height(rows);
                Vec::new()
            }
            Event::ResponseArrived { id, outcome } => {
                self.handle_response(id, outcome);
                Vec::new()
            }
            Event::LibraryLoaded(requests) => {
                self.show_library(requests);
                Vec::new()
            }
            Event::Tick => {
                if self.loading {
                    self.spinner_frame = self.spinner_frame.wrapping_add(1);
                }
                Vec::new()
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Vec<Effect> {
        if let Some(action) = key_to_action(&key) {
            if let Some(effects) = self.apply_action(action) {
                return effects;
            }
        }
        self.forward_to_focused(&key);
        Vec::new()
    }

    /// Run a bound action; `None` when it has no meaning in the current
    /// context and the key should reach the focused field instead
    fn apply_action(&mut self, action: Action) -> Option<Vec<Effect>> {
        tracing::debug!(?action, tab = ?self.active_tab, focus = self.focus, "Action");

        let effects = match action {
            Action::Quit => vec![Effect::Quit],
            Action::Send => self.send_request(),
            Action::SaveRequest => self.save_current_request(),
            Action::LoadRequest => self.open_load_dialog(),
            Action::ToggleHelp => {
                self.show_full_help = !self.show_full_help;
                Vec::new()
            }
            Action::NextTab => {
                self.next_tab();
                Vec::new()
            }
            Action::PrevTab => {
                self.prev_tab();
                Vec::new()
            }
            Action::NextFocus | Action::PrevFocus | Action::AdvanceField => {
                if !self.active_tab.has_focus_pair() {
                    return None;
                }
                self.focus = (self.focus + 1) % 2;
                Vec::new()
            }
            Action::MethodLeft | Action::MethodRight => {
                if self.active_tab != Tab::Url || self.focus != 1 {
                    return None;
                }
                if action == Action::MethodRight {
                    self.method_list.cycle_next();
                } else {
                    self.method_list.cycle_prev();
                }
                Vec::new()
            }
            Action::NextResponseTab | Action::PrevResponseTab => {
                if self.active_tab != Tab::Response {
                    return None;
                }
                self.response_sub_tab = self.response_sub_tab.toggle();
                Vec::new()
            }
            Action::AddHeader => {
                if self.active_tab != Tab::Headers {
                    return None;
                }
                self.add_header();
                Vec::new()
            }
            Action::ClearHeaders => {
                if self.active_tab != Tab::Headers {
                    return None;
                }
                self.request_headers.clear();
                Vec::new()
            }
            Action::Escape => {
                if self.active_tab != Tab::LoadRequest {
                    return None;
                }
                self.close_load_dialog(Tab::Url);
                Vec::new()
            }
            Action::Confirm => {
                if self.active_tab != Tab::LoadRequest || self.request_list.is_typing_filter() {
                    return None;
                }
                if let Some(selected) = self.request_list.selected_item().cloned() {
                    self.load_saved_request(&selected);
                }
                Vec::new()
            }
        };

        Some(effects)
    }

    /// Hand an unbound (or not applicable) key to whatever has focus
    fn forward_to_focused(&mut self, key: &KeyEvent) {
        match self.active_tab {
            Tab::Url if self.focus == 0 => self.url_input.handle_key(key),
            Tab::Url => self.method_list.handle_key(key),
            Tab::Headers if self.focus == 0 => self.header_name.handle_key(key),
            Tab::Headers => self.header_value.handle_key(key),
            Tab::Body => self.body_input.handle_key(key),
            Tab::Response => match self.response_sub_tab {
                ResponseSubTab::Body => self.response_viewport.handle_key(key),
                ResponseSubTab::Headers => self.headers_viewport.handle_key(key),
            },
            Tab::LoadRequest => self.request_list.handle_key(key),
        };
    }

    // ========================
    // Navigation
    // ========================

    pub fn next_tab(&mut self) {
        if self.loading {
            return;
        }
        if self.active_tab == Tab::LoadRequest {
            self.close_load_dialog(Tab::Url);
            return;
        }
        self.active_tab = self.active_tab.next();
        self.focus = 0;
    }

    pub fn prev_tab(&mut self) {
        if self.loading {
            return;
        }
        if self.active_tab == Tab::LoadRequest {
            self.close_load_dialog(Tab::Response);
            return;
        }
        self.active_tab = self.active_tab.prev();
        self.focus = 0;
    }

    fn close_load_dialog(&mut self, to: Tab) {
        self.switch_tab(to);
        self.focus = 0;
    }

    /// The load dialog only stays open on the LoadRequest tab
    fn switch_tab(&mut self, to: Tab) {
        self.active_tab = to;
        if to != Tab::LoadRequest {
            self.showing_load_dialog = false;
        }
    }

    // ========================
    // Request composition
    // ========================

    /// Build a request from the committed fields
    pub fn compose_request(&self) -> Request {
        Request {
            method: self.selected_method(),
            url: self.url_input.value().to_string(),
            headers: self.request_headers.clone(),
            body: self.body_input.value().to_string(),
        }
    }

    /// Commit the scratch header inputs; both must be filled in
    pub fn add_header(&mut self) {
        if self.header_name.is_empty() || self.header_value.is_empty() {
            return;
        }
        self.request_headers.insert(
            self.header_name.value().to_string(),
            self.header_value.value().to_string(),
        );
        self.header_name.clear();
        self.header_value.clear();
        self.focus = 0;
    }

    // ========================
    // Request sending
    // ========================

    pub fn send_request(&mut self) -> Vec<Effect> {
        if self.loading || self.url_is_empty() {
            return Vec::new();
        }

        self.loading = true;
        self.spinner_frame = 0;
        self.switch_tab(Tab::Response);

        let id = self.next_id();
        self.pending_request_id = Some(id);

        let request = self.compose_request();
        tracing::info!(id, method = %request.method, url = %request.url, "Dispatching request");
        vec![Effect::Dispatch { id, request }]
    }

    pub fn handle_response(&mut self, id: u64, outcome: ResponseOutcome) {
        if self.pending_request_id != Some(id) {
            tracing::debug!(id, pending = ?self.pending_request_id, "Ignoring stale response");
            return;
        }
        tracing::info!(
            id,
            status = ?outcome.status_code,
            elapsed = ?outcome.elapsed,
            failed = outcome.error.is_some(),
            "Response received"
        );

        self.loading = false;
        self.pending_request_id = None;
        self.switch_tab(Tab::Response);

        self.content_type = outcome.error.is_none().then(|| detect_content_type(&outcome.body));
        self.response_text = ansi::to_text(&self.highlighter.render_outcome(&outcome));
        self.response_viewport.set_line_count(self.response_text.lines.len());
        self.headers_viewport.set_content(
            &outcome
                .headers
                .iter()
                .map(|(name, value)| format!("{}: {}", name, value))
                .collect::<Vec<_>>()
                .join("\n"),
        );
        self.response = Some(outcome);
    }

    // ========================
    // Request library
    // ========================

    pub fn save_current_request(&mut self) -> Vec<Effect> {
        if self.url_is_empty() {
            return Vec::new();
        }
        let entry = SavedRequest::new(
            self.selected_method(),
            self.url_input.value(),
            self.request_headers.clone(),
            self.body_input.value(),
        );
        vec![Effect::AppendToLibrary(entry)]
    }

    pub fn open_load_dialog(&mut self) -> Vec<Effect> {
        if self.loading {
            return Vec::new();
        }
        vec![Effect::OpenLibrary]
    }

    pub fn show_library(&mut self, requests: Vec<SavedRequest>) {
        if self.loading {
            return;
        }
        self.request_list.set_items(requests.clone());
        self.saved_requests = requests;
        self.active_tab = Tab::LoadRequest;
        self.showing_load_dialog = true;
        self.focus = 0;
    }

    /// Replace the composition fields with a saved entry
    pub fn load_saved_request(&mut self, request: &SavedRequest) {
        self.url_input.set_value(request.url.as_str());
        self.body_input.set_value(request.body.as_str());

        if let Some(method) = HttpMethod::from_name(&request.method) {
            if let Some(index) = HttpMethod::ALL.iter().position(|m| *m == method) {
                self.method_list.select(index);
            }
        }

        self.request_headers = request.headers.clone();
        self.close_load_dialog(Tab::Url);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highlight::ContentType;
    use crate::models::Headers;
    use crossterm::event::{KeyCode, KeyModifiers};
    use std::time::Duration;

    fn key(state: &mut SessionState, code: KeyCode, modifiers: KeyModifiers) -> Vec<Effect> {
        state.handle(Event::Key(KeyEvent::new(code, modifiers)))
    }

    fn press(state: &mut SessionState, code: KeyCode) -> Vec<Effect> {
        key(state, code, KeyModifiers::NONE)
    }

    fn ctrl(state: &mut SessionState, c: char) -> Vec<Effect> {
        key(state, KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_str(state: &mut SessionState, text: &str) {
        for c in text.chars() {
            press(state, KeyCode::Char(c));
        }
    }

    fn saved(method: &str, url: &str) -> SavedRequest {
        let mut headers = Headers::new();
        headers.insert("Authorization".into(), "Bearer t".into());
        SavedRequest {
            name: format!("{} {}", method, url),
            method: method.into(),
            url: url.into(),
            headers,
            body: "payload".into(),
        }
    }

    /// Visible text of styled lines, one string per line
    fn plain_lines(lines: &[ratatui::text::Line<'_>]) -> Vec<String> {
        lines
            .iter()
            .map(|line| line.spans.iter().map(|span| span.content.as_ref()).collect())
            .collect()
    }

    fn respond(state: &mut SessionState, body: &str) {
        type_str(state, "http://localhost/a");
        let id = dispatched_id(&ctrl(state, 's'));
        state.handle(Event::ResponseArrived {
            id,
            outcome: ResponseOutcome {
                status_code: Some(200),
                body: body.into(),
                ..Default::default()
            },
        });
    }

    fn dispatched_id(effects: &[Effect]) -> u64 {
        match effects {
            [Effect::Dispatch { id, .. }] => *id,
            other => panic!("expected a single dispatch, got {:?}", other),
        }
    }

    #[test]
    fn test_tab_cycle_resets_focus() {
        let mut state = SessionState::default();
        press(&mut state, KeyCode::Tab);
        assert_eq!(state.focus, 1);

        key(&mut state, KeyCode::Right, KeyModifiers::CONTROL);
        assert_eq!(state.active_tab, Tab::Headers);
        assert_eq!(state.focus, 0);

        for _ in 0..3 {
            key(&mut state, KeyCode::Right, KeyModifiers::CONTROL);
        }
        assert_eq!(state.active_tab, Tab::Url);

        key(&mut state, KeyCode::Left, KeyModifiers::CONTROL);
        assert_eq!(state.active_tab, Tab::Response);
    }

    #[test]
    fn test_focus_toggle_only_on_paired_tabs() {
        let mut state = SessionState::default();
        key(&mut state, KeyCode::Right, KeyModifiers::ALT);
        assert_eq!(state.focus, 1);
        key(&mut state, KeyCode::Left, KeyModifiers::ALT);
        assert_eq!(state.focus, 0);

        state.active_tab = Tab::Body;
        press(&mut state, KeyCode::Tab);
        assert_eq!(state.focus, 0);
    }

    #[test]
    fn test_method_cycle_wraps_after_seven() {
        let mut state = SessionState::default();
        press(&mut state, KeyCode::Tab);
        assert_eq!(state.selected_method(), HttpMethod::GET);

        let mut seen = Vec::new();
        for _ in 0..7 {
            press(&mut state, KeyCode::Right);
            seen.push(state.selected_method());
        }
        assert_eq!(seen[0], HttpMethod::POST);
        assert_eq!(seen[5], HttpMethod::OPTIONS);
        assert_eq!(state.selected_method(), HttpMethod::GET);

        press(&mut state, KeyCode::Left);
        assert_eq!(state.selected_method(), HttpMethod::OPTIONS);
    }

    #[test]
    fn test_arrows_move_url_cursor_when_url_focused() {
        let mut state = SessionState::default();
        type_str(&mut state, "ab");
        press(&mut state, KeyCode::Left);
        type_str(&mut state, "X");
        assert_eq!(state.url_input.value(), "aXb");
        assert_eq!(state.selected_method(), HttpMethod::GET);
    }

    #[test]
    fn test_arrows_cycle_method_without_touching_url() {
        let mut state = SessionState::default();
        type_str(&mut state, "abc");
        press(&mut state, KeyCode::Tab);

        press(&mut state, KeyCode::Right);
        press(&mut state, KeyCode::Right);
        press(&mut state, KeyCode::Left);
        assert_eq!(state.selected_method(), HttpMethod::POST);
        assert_eq!(state.url_input.value(), "abc");
        assert_eq!(state.url_input.cursor_column(), 3);

        press(&mut state, KeyCode::Tab);
        type_str(&mut state, "d");
        assert_eq!(state.url_input.value(), "abcd");
    }

    #[test]
    fn test_escape_outside_dialog_changes_nothing() {
        let mut state = SessionState::default();
        type_str(&mut state, "abc");
        assert!(press(&mut state, KeyCode::Esc).is_empty());
        assert_eq!(state.active_tab, Tab::Url);
        assert_eq!(state.focus, 0);
        assert!(!state.showing_load_dialog);
        assert_eq!(state.url_input.value(), "abc");

        state.active_tab = Tab::Headers;
        press(&mut state, KeyCode::Tab);
        assert!(press(&mut state, KeyCode::Esc).is_empty());
        assert_eq!(state.active_tab, Tab::Headers);
        assert_eq!(state.focus, 1);
        assert!(!state.showing_load_dialog);
    }

    #[test]
    fn test_response_sub_tab_only_on_response() {
        let mut state = SessionState::default();
        key(&mut state, KeyCode::Right, KeyModifiers::SHIFT);
        assert_eq!(state.response_sub_tab, ResponseSubTab::Body);

        state.active_tab = Tab::Response;
        key(&mut state, KeyCode::Right, KeyModifiers::SHIFT);
        assert_eq!(state.response_sub_tab, ResponseSubTab::Headers);
        key(&mut state, KeyCode::Left, KeyModifiers::SHIFT);
        assert_eq!(state.response_sub_tab, ResponseSubTab::Body);
    }

    #[test]
    fn test_add_header_commits_scratch_fields() {
        let mut state = SessionState::default();
        state.active_tab = Tab::Headers;

        type_str(&mut state, "X-Test");
        ctrl(&mut state, 'a');
        assert!(state.request_headers.is_empty(), "value still empty");

        press(&mut state, KeyCode::Tab);
        type_str(&mut state, "1");
        ctrl(&mut state, 'a');
        assert_eq!(state.request_headers.get("X-Test").map(String::as_str), Some("1"));
        assert!(state.header_name.is_empty());
        assert!(state.header_value.is_empty());
        assert_eq!(state.focus, 0);

        type_str(&mut state, "X-Test");
        press(&mut state, KeyCode::Tab);
        type_str(&mut state, "2");
        ctrl(&mut state, 'a');
        assert_eq!(state.request_headers.len(), 1);
        assert_eq!(state.request_headers["X-Test"], "2");

        ctrl(&mut state, 'x');
        assert!(state.request_headers.is_empty());
    }

    #[test]
    fn test_scratch_header_not_in_request() {
        let mut state = SessionState::default();
        state.active_tab = Tab::Headers;
        type_str(&mut state, "X-Pending");
        press(&mut state, KeyCode::Tab);
        type_str(&mut state, "yes");
        assert!(state.compose_request().headers.is_empty());
    }

    #[test]
    fn test_send_requires_url() {
        let mut state = SessionState::default();
        assert!(ctrl(&mut state, 's').is_empty());
        assert!(!state.loading);
        assert_eq!(state.active_tab, Tab::Url);
    }

    #[test]
    fn test_whitespace_url_is_sent() {
        let mut state = SessionState::default();
        type_str(&mut state, "   ");
        let effects = ctrl(&mut state, 's');
        dispatched_id(&effects);
        assert!(state.loading);
        assert_eq!(state.compose_request().url, "   ");
    }

    #[test]
    fn test_send_while_loading_is_dropped() {
        let mut state = SessionState::default();
        type_str(&mut state, "http://localhost/a");
        let first = ctrl(&mut state, 's');
        dispatched_id(&first);
        assert!(state.loading);
        assert_eq!(state.active_tab, Tab::Response);

        let before = state.compose_request();
        assert!(ctrl(&mut state, 's').is_empty());
        assert_eq!(state.compose_request(), before);
        assert_eq!(state.next_request_id, 2);
    }

    #[test]
    fn test_tabs_locked_while_loading() {
        let mut state = SessionState::default();
        type_str(&mut state, "http://localhost/a");
        ctrl(&mut state, 's');

        key(&mut state, KeyCode::Right, KeyModifiers::CONTROL);
        assert_eq!(state.active_tab, Tab::Response);
        assert!(ctrl(&mut state, 'r').is_empty());
        assert_eq!(state.active_tab, Tab::Response);
    }

    #[test]
    fn test_tick_animates_only_while_loading() {
        let mut state = SessionState::default();
        state.handle(Event::Tick);
        assert_eq!(state.spinner_frame, 0);

        type_str(&mut state, "http://localhost/a");
        ctrl(&mut state, 's');
        state.handle(Event::Tick);
        state.handle(Event::Tick);
        assert_eq!(state.spinner_frame, 2);
    }

    #[test]
    fn test_send_and_render_round_trip() {
        let mut state = SessionState::default();
        type_str(&mut state, "https://api.example.com/x");
        press(&mut state, KeyCode::Tab);
        press(&mut state, KeyCode::Right);
        assert_eq!(state.selected_method(), HttpMethod::POST);

        key(&mut state, KeyCode::Right, KeyModifiers::CONTROL);
        type_str(&mut state, "X-Test");
        press(&mut state, KeyCode::Tab);
        type_str(&mut state, "1");
        ctrl(&mut state, 'a');

        key(&mut state, KeyCode::Right, KeyModifiers::CONTROL);
        assert_eq!(state.active_tab, Tab::Body);
        type_str(&mut state, r#"{"k":"v"}"#);

        let effects = ctrl(&mut state, 's');
        let id = dispatched_id(&effects);
        let mut headers = Headers::new();
        headers.insert("X-Test".into(), "1".into());
        assert_eq!(
            effects[0],
            Effect::Dispatch {
                id,
                request: Request {
                    method: HttpMethod::POST,
                    url: "https://api.example.com/x".into(),
                    headers,
                    body: r#"{"k":"v"}"#.into(),
                },
            }
        );

        state.handle(Event::ResponseArrived {
            id,
            outcome: ResponseOutcome {
                status_code: Some(200),
                body: r#"{"k":"v"}"#.into(),
                elapsed: Duration::from_millis(12),
                ..Default::default()
            },
        });

        assert!(!state.loading);
        assert_eq!(state.active_tab, Tab::Response);
        assert_eq!(state.content_type, Some(ContentType::Json));
        assert_eq!(plain_lines(&state.response_text.lines), ["{", "  \"k\": \"v\"", "}"]);
        assert!(state.response_text.lines[1].spans.len() > 1, "key and value are styled");

        let render = state.to_render_state();
        assert_eq!(render.status_code, Some(200));
        assert_eq!(render.elapsed, Duration::from_millis(12));
        assert_eq!(render.content_type, Some(ContentType::Json));
        assert_eq!(render.response_lines, state.response_text.lines);
    }

    #[test]
    fn test_transport_error_rendered_inline() {
        let mut state = SessionState::default();
        type_str(&mut state, "http://localhost:1");
        let id = dispatched_id(&ctrl(&mut state, 's'));

        state.handle(Event::ResponseArrived {
            id,
            outcome: ResponseOutcome::failed(
                crate::error::TransportError::Connect("refused".into()),
                Duration::from_millis(3),
            ),
        });

        assert!(!state.loading);
        assert_eq!(state.content_type, None);
        assert_eq!(
            plain_lines(&state.response_text.lines),
            ["Error: request failed: connection failed: refused"]
        );

        // the session carries on
        let again = ctrl(&mut state, 's');
        assert_eq!(dispatched_id(&again), id + 1);
    }

    #[test]
    fn test_render_state_carries_only_visible_lines() {
        let mut state = SessionState::default();
        state.handle(Event::Resize { width: 120, height: 31 });
        assert_eq!(state.response_viewport.height(), 15);

        let body: String = (0..70_000).map(|i| format!("line{}\n", i)).collect();
        respond(&mut state, body.trim_end());
        assert_eq!(state.content_type, Some(ContentType::PlainText));

        let render = state.to_render_state();
        assert_eq!(render.response_lines.len(), 15);
        assert_eq!(plain_lines(&render.response_lines[..1]), ["line0"]);

        press(&mut state, KeyCode::End);
        assert_eq!(state.response_viewport.offset(), 69_985);
        let render = state.to_render_state();
        assert_eq!(render.response_lines.len(), 15);
        assert_eq!(plain_lines(&render.response_lines[..1]), ["line69985"]);
        assert_eq!(plain_lines(&render.response_lines[14..]), ["line69999"]);
    }

    #[test]
    fn test_send_from_dialog_closes_it() {
        let mut state = SessionState::default();
        type_str(&mut state, "http://localhost/a");
        state.handle(Event::LibraryLoaded(vec![saved("GET", "http://b")]));
        assert!(state.showing_load_dialog);

        dispatched_id(&ctrl(&mut state, 's'));
        assert_eq!(state.active_tab, Tab::Response);
        assert!(!state.showing_load_dialog);
        assert!(!state.to_render_state().showing_load_dialog);
    }

    #[test]
    fn test_stale_response_ignored() {
        let mut state = SessionState::default();
        type_str(&mut state, "http://localhost/a");
        let id = dispatched_id(&ctrl(&mut state, 's'));

        state.handle(Event::ResponseArrived {
            id: id + 10,
            outcome: ResponseOutcome::default(),
        });
        assert!(state.loading);
        assert!(state.response.is_none());
    }

    #[test]
    fn test_save_requires_url() {
        let mut state = SessionState::default();
        assert!(ctrl(&mut state, 'w').is_empty());
    }

    #[test]
    fn test_save_uses_committed_headers() {
        let mut state = SessionState::default();
        type_str(&mut state, "https://api.example.com/x");
        state.request_headers.insert("X-Test".into(), "1".into());
        state.active_tab = Tab::Headers;
        type_str(&mut state, "X-Scratch");

        let effects = ctrl(&mut state, 'w');
        let [Effect::AppendToLibrary(entry)] = effects.as_slice() else {
            panic!("expected append, got {:?}", effects);
        };
        assert_eq!(entry.name, "GET https://api.example.com/x");
        assert_eq!(entry.headers.len(), 1);
        assert!(entry.headers.contains_key("X-Test"));
        assert_eq!(entry.body, "");
    }

    #[test]
    fn test_empty_library_dialog() {
        let mut state = SessionState::default();
        assert_eq!(ctrl(&mut state, 'r'), vec![Effect::OpenLibrary]);

        state.handle(Event::LibraryLoaded(Vec::new()));
        assert_eq!(state.active_tab, Tab::LoadRequest);
        assert!(state.showing_load_dialog);
        assert!(state.saved_requests.is_empty());
        assert!(state.to_render_state().library_empty);

        press(&mut state, KeyCode::Esc);
        assert_eq!(state.active_tab, Tab::Url);
        assert!(!state.showing_load_dialog);
    }

    #[test]
    fn test_load_selected_replaces_fields() {
        let mut state = SessionState::default();
        type_str(&mut state, "http://old");
        state.request_headers.insert("X-Old".into(), "1".into());

        let library = vec![saved("GET", "http://a"), saved("DELETE", "http://b")];
        state.handle(Event::LibraryLoaded(library));
        press(&mut state, KeyCode::Down);
        press(&mut state, KeyCode::Enter);

        assert_eq!(state.active_tab, Tab::Url);
        assert!(!state.showing_load_dialog);
        assert_eq!(state.focus, 0);
        assert_eq!(state.url_input.value(), "http://b");
        assert_eq!(state.body_input.value(), "payload");
        assert_eq!(state.selected_method(), HttpMethod::DELETE);
        assert!(!state.request_headers.contains_key("X-Old"));
        assert_eq!(state.request_headers["Authorization"], "Bearer t");
    }

    #[test]
    fn test_load_unknown_method_keeps_selection() {
        let mut state = SessionState::default();
        state.load_saved_request(&saved("PATCH", "http://a"));
        assert_eq!(state.selected_method(), HttpMethod::PATCH);
        state.load_saved_request(&saved("BREW", "http://a"));
        assert_eq!(state.selected_method(), HttpMethod::PATCH);
        // method names are matched exactly
        state.load_saved_request(&saved("get", "http://a"));
        assert_eq!(state.selected_method(), HttpMethod::PATCH);
    }

    #[test]
    fn test_load_dialog_filter() {
        let mut state = SessionState::default();
        let library = vec![saved("GET", "http://a"), saved("DELETE", "http://b")];
        state.handle(Event::LibraryLoaded(library));

        press(&mut state, KeyCode::Char('/'));
        type_str(&mut state, "delete");
        // Enter while typing ends filter entry instead of loading
        press(&mut state, KeyCode::Enter);
        assert_eq!(state.active_tab, Tab::LoadRequest);

        press(&mut state, KeyCode::Enter);
        assert_eq!(state.url_input.value(), "http://b");
    }

    #[test]
    fn test_leaving_dialog_by_tab_keys() {
        let mut state = SessionState::default();
        state.handle(Event::LibraryLoaded(Vec::new()));
        key(&mut state, KeyCode::Left, KeyModifiers::CONTROL);
        assert_eq!(state.active_tab, Tab::Response);
        assert!(!state.showing_load_dialog);

        state.handle(Event::LibraryLoaded(Vec::new()));
        key(&mut state, KeyCode::Right, KeyModifiers::CONTROL);
        assert_eq!(state.active_tab, Tab::Url);
    }

    #[test]
    fn test_quit() {
        let mut state = SessionState::default();
        assert_eq!(ctrl(&mut state, 'c'), vec![Effect::Quit]);
    }
}
