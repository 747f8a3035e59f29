//! Render state - data structure sent from App layer to UI for rendering

use std::time::Duration;

use ratatui::text::Line;

use crate::constants::URL_PLACEHOLDER;
use crate::highlight::ContentType;
use crate::messages::ui_events::{ResponseSubTab, Tab};
use crate::models::{Headers, HttpMethod, SavedRequest};

/// Complete state needed by the UI to render
#[derive(Debug, Clone)]
pub struct RenderState {
    // Navigation
    pub active_tab: Tab,
    pub response_sub_tab: ResponseSubTab,
    pub focus: usize,
    pub show_full_help: bool,

    // Request composition
    pub method: HttpMethod,
    pub url: String,
    pub url_cursor: usize,
    pub url_placeholder: String,
    pub header_name: String,
    pub header_name_cursor: usize,
    pub header_value: String,
    pub header_value_cursor: usize,
    pub request_headers: Headers,
    pub body: String,
    pub body_cursor: (usize, usize),
    pub body_placeholder: String,

    // Dispatch
    pub loading: bool,
    pub spinner_frame: usize,

    // Last outcome
    pub has_response: bool,
    pub status_code: Option<u16>,
    pub elapsed: Duration,
    pub content_type: Option<ContentType>,
    /// Styled body lines inside the scroll window, or the styled error
    pub response_lines: Vec<Line<'static>>,
    pub response_headers: Headers,
    pub headers_scroll: usize,

    // Load dialog
    pub showing_load_dialog: bool,
    pub library_empty: bool,
    pub visible_requests: Vec<SavedRequest>,
    pub selected_request: usize,
    pub request_filter: String,
    pub typing_filter: bool,
}

impl Default for RenderState {
    fn default() -> Self {
        RenderState {
            active_tab: Tab::Url,
            response_sub_tab: ResponseSubTab::Body,
            focus: 0,
            show_full_help: false,
            method: HttpMethod::GET,
            url: String::new(),
            url_cursor: 0,
            url_placeholder: String::from(URL_PLACEHOLDER),
            header_name: String::new(),
            header_name_cursor: 0,
            header_value: String::new(),
            header_value_cursor: 0,
            request_headers: Headers::new(),
            body: String::new(),
            body_cursor: (0, 0),
            body_placeholder: String::new(),
            loading: false,
            spinner_frame: 0,
            has_response: false,
            status_code: None,
            elapsed: Duration::ZERO,
            content_type: None,
            response_lines: Vec::new(),
            response_headers: Headers::new(),
            headers_scroll: 0,
            showing_load_dialog: false,
            library_empty: true,
            visible_requests: Vec::new(),
            selected_request: 0,
            request_filter: String::new(),
            typing_filter: false,
        }
    }
}
