//! Drawing - a pure projection of `RenderState` onto a frame

use ratatui::{prelude::*, widgets::*};

use crate::constants::{APP_NAME, STATUS_URL_MAX};
use crate::messages::ui_events::{KeyHelp, FULL_HELP, SHORT_HELP};
use crate::messages::{RenderState, ResponseSubTab, Tab};
use crate::models::HttpMethod;
use crate::theme::Theme;
use crate::widgets::ListEntry;

const SPINNER_FRAMES: [&str; 8] = ["⣾ ", "⣽ ", "⣻ ", "⢿ ", "⡿ ", "⣟ ", "⣯ ", "⣷ "];

const EMPTY_LIBRARY: &str =
    "No saved requests found\n\nSave a request with Ctrl+W first\nThen use Ctrl+R to load it here";

// ============================================================================
// Frame layout
// ============================================================================

pub fn draw(f: &mut Frame, state: &RenderState, theme: &Theme) {
    let help_height = if state.show_full_help {
        FULL_HELP.len() as u16
    } else {
        1
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),           // Title
            Constraint::Length(1),           // Tab bar
            Constraint::Length(1),
            Constraint::Min(0),              // Content
            Constraint::Length(1),           // Status line
            Constraint::Length(help_height), // Help
        ])
        .split(f.area());

    draw_header(f, theme, chunks[0]);
    draw_tab_bar(f, state, theme, chunks[1]);

    match state.active_tab {
        Tab::Url => draw_url_tab(f, state, theme, chunks[3]),
        Tab::Headers => draw_headers_tab(f, state, theme, chunks[3]),
        Tab::Body => draw_body_tab(f, state, theme, chunks[3]),
        Tab::Response => draw_response_tab(f, state, theme, chunks[3]),
        Tab::LoadRequest => draw_load_dialog(f, state, theme, chunks[3]),
    }

    if let Some(status) = status_line(state, theme) {
        f.render_widget(Paragraph::new(status), chunks[4]);
    }

    draw_help(f, state, theme, chunks[5]);
}

fn draw_header(f: &mut Frame, theme: &Theme, area: Rect) {
    let header = Text::from(vec![
        Line::styled(format!("{} - Terminal HTTP Client", APP_NAME), theme.title()),
        Line::styled("Beautiful API testing in your terminal", theme.subtitle()),
    ]);
    f.render_widget(Paragraph::new(header), area);
}

fn draw_tab_bar(f: &mut Frame, state: &RenderState, theme: &Theme, area: Rect) {
    let mut spans = Vec::new();
    for tab in Tab::CYCLE {
        let style = if tab == state.active_tab {
            theme.active_tab()
        } else {
            theme.tab()
        };
        spans.push(Span::styled(format!(" {} ", tab.title()), style));
        spans.push(Span::raw(" "));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn section_title<'a>(title: &'a str, theme: &Theme) -> Line<'a> {
    Line::styled(title, theme.title())
}

/// Single-line input box, placeholder shown while empty
fn input_box<'a>(
    value: &'a str,
    placeholder: &'a str,
    focused: bool,
    theme: &Theme,
) -> Paragraph<'a> {
    let border = if focused {
        theme.focused_border()
    } else {
        theme.blurred_border()
    };
    let content = if value.is_empty() {
        Span::styled(placeholder, theme.help())
    } else {
        Span::styled(value, theme.value())
    };

    Paragraph::new(Line::from(content)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border),
    )
}

fn place_cursor(f: &mut Frame, area: Rect, column: usize, row: usize) {
    let offset = |n: usize| u16::try_from(n).unwrap_or(u16::MAX).saturating_add(1);
    let x = area.x.saturating_add(offset(column));
    let y = area.y.saturating_add(offset(row));
    if x < area.right().saturating_sub(1) && y < area.bottom().saturating_sub(1) {
        f.set_cursor_position(Position::new(x, y));
    }
}

// ============================================================================
// Request tabs
// ============================================================================

fn draw_url_tab(f: &mut Frame, state: &RenderState, theme: &Theme, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // "Request URL"
            Constraint::Length(3), // Input
            Constraint::Length(1),
            Constraint::Length(1), // "HTTP Method"
            Constraint::Length(1), // Method row
            Constraint::Length(1), // Description
            Constraint::Length(1),
            Constraint::Length(1), // Focus help
            Constraint::Min(0),
        ])
        .split(area);

    f.render_widget(Paragraph::new(section_title("Request URL", theme)), chunks[0]);
    f.render_widget(
        input_box(&state.url, &state.url_placeholder, state.focus == 0, theme),
        chunks[1],
    );
    if state.focus == 0 {
        place_cursor(f, chunks[1], state.url_cursor, 0);
    }

    f.render_widget(Paragraph::new(section_title("HTTP Method", theme)), chunks[3]);
    f.render_widget(Paragraph::new(method_row(state, theme)), chunks[4]);
    f.render_widget(
        Paragraph::new(Span::styled(state.method.subtitle(), theme.help())),
        chunks[5],
    );

    let focus_help = if state.focus == 1 {
        "Use ←/→ to select method"
    } else {
        "Alt+→ or Tab to select method • Ctrl+R to load saved requests"
    };
    f.render_widget(Paragraph::new(Span::styled(focus_help, theme.help())), chunks[7]);
}

fn method_row(state: &RenderState, theme: &Theme) -> Line<'static> {
    let spans: Vec<Span> = HttpMethod::ALL
        .iter()
        .map(|method| {
            let style = if *method == state.method && state.focus == 1 {
                theme.active_tab()
            } else if *method == state.method {
                theme.tab().fg(theme.method_color(*method)).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.dark_gray)
            };
            Span::styled(format!(" {} ", method.title()), style)
        })
        .collect();
    Line::from(spans)
}

fn draw_headers_tab(f: &mut Frame, state: &RenderState, theme: &Theme, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // "Request Headers"
            Constraint::Length(3), // Inputs
            Constraint::Length(1), // Instructions
            Constraint::Length(1),
            Constraint::Min(0),    // Active headers
        ])
        .split(area);

    f.render_widget(Paragraph::new(section_title("Request Headers", theme)), chunks[0]);

    let inputs = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);
    f.render_widget(
        input_box(
            &state.header_name,
            "Header Name (e.g., Authorization)",
            state.focus == 0,
            theme,
        ),
        inputs[0],
    );
    f.render_widget(
        input_box(
            &state.header_value,
            "Header Value (e.g., Bearer token123)",
            state.focus == 1,
            theme,
        ),
        inputs[1],
    );
    if state.focus == 0 {
        place_cursor(f, inputs[0], state.header_name_cursor, 0);
    } else {
        place_cursor(f, inputs[1], state.header_value_cursor, 0);
    }

    f.render_widget(
        Paragraph::new(Span::styled(
            "Ctrl+A: Add Header • Ctrl+X: Clear All • Tab: Switch Fields",
            theme.help(),
        )),
        chunks[2],
    );

    let list = if state.request_headers.is_empty() {
        Text::from(Line::styled("No custom headers added yet", theme.help()))
    } else {
        let mut lines = vec![section_title("Active Headers:", theme)];
        lines.extend(state.request_headers.iter().map(|(name, value)| {
            Line::from(vec![
                Span::styled(name.as_str(), theme.info()),
                Span::raw(": "),
                Span::styled(value.as_str(), theme.value()),
            ])
        }));
        Text::from(lines)
    };
    f.render_widget(Paragraph::new(list), chunks[4]);
}

fn draw_body_tab(f: &mut Frame, state: &RenderState, theme: &Theme, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(3),
        ])
        .split(area);

    f.render_widget(Paragraph::new(section_title("Request Body", theme)), chunks[0]);
    f.render_widget(
        Paragraph::new(Span::styled(
            "Enter your request body (JSON, XML, plain text, etc.)",
            theme.help(),
        )),
        chunks[1],
    );

    let (row, column) = state.body_cursor;
    let visible_rows = chunks[2].height.saturating_sub(2) as usize;
    let scroll = row.saturating_sub(visible_rows.saturating_sub(1));

    let content = if state.body.is_empty() {
        Text::styled(state.body_placeholder.as_str(), theme.help())
    } else {
        state
            .body
            .split('\n')
            .skip(scroll)
            .take(visible_rows)
            .map(|line| Line::styled(line, theme.value()))
            .collect::<Vec<_>>()
            .into()
    };

    let editor = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme.focused_border()),
    );
    f.render_widget(editor, chunks[2]);
    place_cursor(f, chunks[2], column, row - scroll);
}

// ============================================================================
// Response tab
// ============================================================================

fn draw_response_tab(f: &mut Frame, state: &RenderState, theme: &Theme, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(area);
    f.render_widget(Paragraph::new(section_title("Response", theme)), chunks[0]);

    if state.loading {
        let frame = SPINNER_FRAMES[state.spinner_frame % SPINNER_FRAMES.len()];
        let line = Line::from(vec![
            Span::styled(frame, Style::default().fg(theme.hot_pink)),
            Span::styled("Sending request...", theme.info()),
        ]);
        f.render_widget(Paragraph::new(line), chunks[1]);
        return;
    }

    if !state.has_response {
        f.render_widget(
            Paragraph::new(Span::styled(
                "No response yet. Send a request to see the response here.",
                theme.help(),
            )),
            chunks[1],
        );
        return;
    }

    let inner = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Sub-tabs
            Constraint::Length(1), // Hint
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(chunks[1]);

    let mut sub_tabs = Vec::new();
    for sub_tab in ResponseSubTab::ALL {
        let style = if sub_tab == state.response_sub_tab {
            theme.active_tab()
        } else {
            theme.tab()
        };
        sub_tabs.push(Span::styled(format!(" {} ", sub_tab.title()), style));
        sub_tabs.push(Span::raw(" "));
    }
    if let Some(content_type) = state.content_type {
        sub_tabs.push(Span::styled(content_type.mime(), theme.help()));
    }
    f.render_widget(Paragraph::new(Line::from(sub_tabs)), inner[0]);
    f.render_widget(
        Paragraph::new(Span::styled(
            "Use Shift+←/→ to switch between response tabs",
            theme.help(),
        )),
        inner[1],
    );

    let rows = inner[3].height as usize;
    let content = match state.response_sub_tab {
        ResponseSubTab::Body => Text::from(state.response_lines.clone()),
        ResponseSubTab::Headers => response_headers_text(state, theme, rows),
    };
    f.render_widget(Paragraph::new(content), inner[3]);
}

/// Header lines from the scroll offset, at most `rows` of them
fn response_headers_text<'a>(state: &'a RenderState, theme: &Theme, rows: usize) -> Text<'a> {
    if state.response_headers.is_empty() {
        return Text::from(Line::styled("No response headers available", theme.help()));
    }
    state
        .response_headers
        .iter()
        .skip(state.headers_scroll)
        .take(rows)
        .map(|(name, value)| {
            Line::from(vec![
                Span::styled(name.as_str(), theme.info()),
                Span::raw(": "),
                Span::styled(value.as_str(), theme.value()),
            ])
        })
        .collect::<Vec<_>>()
        .into()
}

// ============================================================================
// Load dialog
// ============================================================================

fn draw_load_dialog(f: &mut Frame, state: &RenderState, theme: &Theme, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    f.render_widget(Paragraph::new(section_title("Load Saved Request", theme)), chunks[0]);
    f.render_widget(
        Paragraph::new(Span::styled(
            "↑/↓: Navigate • Enter: Select • Esc: Cancel • /: Search",
            theme.help(),
        )),
        chunks[1],
    );

    if state.library_empty {
        let message = Paragraph::new(EMPTY_LIBRARY)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(theme.empty_state_border())
                    .padding(Padding::uniform(1)),
            );
        f.render_widget(message, centered_rect(90, 60, chunks[3]));
        return;
    }

    let title = if state.typing_filter || !state.request_filter.is_empty() {
        let cursor = if state.typing_filter { "▏" } else { "" };
        format!(" Filter: {}{} ", state.request_filter, cursor)
    } else {
        String::from(" Saved Requests ")
    };

    let items: Vec<ListItem> = state
        .visible_requests
        .iter()
        .map(|request| {
            let method = HttpMethod::from_name(&request.method);
            let method_style = method
                .map(|m| Style::default().fg(theme.method_color(m)))
                .unwrap_or_else(|| theme.help());
            ListItem::new(Text::from(vec![
                Line::styled(request.title(), theme.value()),
                Line::from(vec![
                    Span::styled(request.method.clone(), method_style),
                    Span::styled(format!(" • {}", request.url), theme.help()),
                ]),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(theme.list_border())
                .title(title),
        )
        .highlight_style(Style::default().fg(theme.hot_pink).add_modifier(Modifier::BOLD))
        .highlight_symbol("│ ");

    let mut list_state = ListState::default().with_selected(Some(state.selected_request));
    f.render_stateful_widget(list, chunks[3], &mut list_state);
}

// ============================================================================
// Status and help
// ============================================================================

/// Status line for the last outcome; nothing until a status code exists
pub fn status_line(state: &RenderState, theme: &Theme) -> Option<Line<'static>> {
    let code = state.status_code?;

    let status_style = Style::default()
        .fg(theme.status_color(code))
        .add_modifier(Modifier::BOLD);

    Some(Line::from(vec![
        Span::styled(format!("Status: {}", code), status_style),
        Span::raw("  "),
        Span::styled(format!("Time: {:?}", state.elapsed), theme.info()),
        Span::raw("  "),
        Span::styled(format!("Method: {}", state.method), theme.info()),
        Span::raw("  "),
        Span::styled(format!("URL: {}", truncate_url(&state.url)), theme.help()),
        Span::raw("  "),
        Span::styled("Ctrl+W: Save • Ctrl+R: Load", theme.help()),
    ]))
}

/// Cut long URLs to `STATUS_URL_MAX` characters, ellipsis included
pub fn truncate_url(url: &str) -> String {
    if url.chars().count() <= STATUS_URL_MAX {
        return url.to_string();
    }
    let head: String = url.chars().take(STATUS_URL_MAX - 3).collect();
    format!("{}...", head)
}

fn help_spans(entry: &KeyHelp, theme: &Theme) -> Vec<Span<'static>> {
    vec![
        Span::styled(entry.keys, Style::default().fg(theme.light_gray)),
        Span::raw(" "),
        Span::styled(entry.description, Style::default().fg(theme.dark_gray)),
    ]
}

fn help_row(entries: &[KeyHelp], theme: &Theme) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, entry) in entries.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" • ", Style::default().fg(theme.dark_gray)));
        }
        spans.extend(help_spans(entry, theme));
    }
    Line::from(spans)
}

/// Short help line, or one row per binding group
fn draw_help(f: &mut Frame, state: &RenderState, theme: &Theme, area: Rect) {
    let lines: Vec<Line> = if state.show_full_help {
        FULL_HELP.iter().map(|group| help_row(group, theme)).collect()
    } else {
        vec![help_row(SHORT_HELP, theme)]
    };
    f.render_widget(Paragraph::new(lines), area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
