//! Session state - pure data structure with no I/O logic

use crate::constants::URL_PLACEHOLDER;
use ratatui::text::Text;

use crate::highlight::{ContentType, Highlighter};
use crate::messages::ui_events::{ResponseSubTab, Tab};
use crate::messages::RenderState;
use crate::models::{Headers, HttpMethod, ResponseOutcome, SavedRequest};
use crate::theme::Theme;
use crate::widgets::{SelectList, TextArea, TextInput, Viewport};

const URL_CHAR_LIMIT: usize = 500;

const BODY_PLACEHOLDER: &str = "Request body (JSON, XML, text, etc.)\n\nExample:\n\
{\n  \"name\": \"John Doe\",\n  \"email\": \"john@example.com\"\n}";

/// Main application state - pure data, no I/O
pub struct SessionState {
    // Navigation
    pub active_tab: Tab,
    pub response_sub_tab: ResponseSubTab,
    /// 0 or 1; only meaningful on the URL and Headers tabs
    pub focus: usize,
    pub show_full_help: bool,

    // Request composition
    pub url_input: TextInput,
    pub method_list: SelectList<HttpMethod>,
    pub header_name: TextInput,
    pub header_value: TextInput,
    pub body_input: TextArea,
    /// Committed headers; scratch inputs are not part of a request
    pub request_headers: Headers,

    // Dispatch
    pub loading: bool,
    pub spinner_frame: usize,
    pub next_request_id: u64,
    pub pending_request_id: Option<u64>,

    // Last outcome
    pub response: Option<ResponseOutcome>,
    /// Detected once on arrival; `None` for transport failures
    pub content_type: Option<ContentType>,
    /// Styled body view, or the styled error
    pub response_text: Text<'static>,
    pub response_viewport: Viewport,
    pub headers_viewport: Viewport,

    // Load dialog
    pub request_list: SelectList<SavedRequest>,
    pub saved_requests: Vec<SavedRequest>,
    pub showing_load_dialog: bool,

    pub highlighter: Highlighter,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(Theme::DEFAULT)
    }
}

impl SessionState {
    pub fn new(theme: Theme) -> Self {
        SessionState {
            active_tab: Tab::Url,
            response_sub_tab: ResponseSubTab::Body,
            focus: 0,
            show_full_help: false,
            url_input: TextInput::new(URL_PLACEHOLDER).with_char_limit(URL_CHAR_LIMIT),
            method_list: SelectList::new(HttpMethod::ALL.to_vec()),
            header_name: TextInput::new("Header Name (e.g., Authorization)"),
            header_value: TextInput::new("Header Value (e.g., Bearer token123)"),
            body_input: TextArea::new(BODY_PLACEHOLDER),
            request_headers: Headers::new(),
            loading: false,
            spinner_frame: 0,
            next_request_id: 1,
            pending_request_id: None,
            response: None,
            content_type: None,
            response_text: Text::default(),
            response_viewport: Viewport::default(),
            headers_viewport: Viewport::default(),
            request_list: SelectList::default().with_filtering(),
            saved_requests: Vec::new(),
            showing_load_dialog: false,
            highlighter: Highlighter::new(theme),
        }
    }

    /// Generate a unique request ID
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    /// Method picker selection, GET if nothing is selected
    pub fn selected_method(&self) -> HttpMethod {
        self.method_list
            .selected_item()
            .copied()
            .unwrap_or(HttpMethod::GET)
    }

    pub fn url_is_empty(&self) -> bool {
        self.url_input.value().is_empty()
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        let (status_code, elapsed, response_headers) = match &self.response {
            Some(outcome) => (outcome.status_code, outcome.elapsed, outcome.headers.clone()),
            None => (None, Default::default(), Headers::new()),
        };
        let window = self.response_viewport.window();
        let response_lines = self
            .response_text
            .lines
            .get(window)
            .map(<[_]>::to_vec)
            .unwrap_or_default();

        RenderState {
            active_tab: self.active_tab,
            response_sub_tab: self.response_sub_tab,
            focus: self.focus,
            show_full_help: self.show_full_help,
            method: self.selected_method(),
            url: self.url_input.value().to_string(),
            url_cursor: self.url_input.cursor_column(),
            url_placeholder: self.url_input.placeholder().to_string(),
            header_name: self.header_name.value().to_string(),
            header_name_cursor: self.header_name.cursor_column(),
            header_value: self.header_value.value().to_string(),
            header_value_cursor: self.header_value.cursor_column(),
            request_headers: self.request_headers.clone(),
            body: self.body_input.value().to_string(),
            body_cursor: self.body_input.cursor_position(),
            body_placeholder: self.body_input.placeholder().to_string(),
            loading: self.loading,
            spinner_frame: self.spinner_frame,
            has_response: self.response.is_some(),
            status_code,
            elapsed,
            content_type: self.content_type,
            response_lines,
            response_headers,
            headers_scroll: self.headers_viewport.offset(),
            showing_load_dialog: self.showing_load_dialog,
            library_empty: self.saved_requests.is_empty(),
            visible_requests: self.request_list.visible().into_iter().cloned().collect(),
            selected_request: self.request_list.selected_index(),
            request_filter: self.request_list.filter().to_string(),
            typing_filter: self.request_list.is_typing_filter(),
        }
    }
}
