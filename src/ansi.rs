//! Styled strings
//!
//! The highlighter works on plain strings with embedded SGR color escapes,
//! produced here through crossterm's styling. At draw time those strings
//! are turned back into ratatui spans.

use crossterm::style::{Attribute, Color as TermColor, ContentStyle, StyledContent};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};

const ESC: char = '\x1b';

/// Wrap `text` in the escapes for `style`
pub fn paint(style: Style, text: &str) -> String {
    let mut content = ContentStyle::new();
    content.foreground_color = style.fg.map(to_term_color);
    content.background_color = style.bg.map(to_term_color);
    for (modifier, attribute) in [
        (Modifier::BOLD, Attribute::Bold),
        (Modifier::DIM, Attribute::Dim),
        (Modifier::ITALIC, Attribute::Italic),
        (Modifier::UNDERLINED, Attribute::Underlined),
    ] {
        if style.add_modifier.contains(modifier) {
            content.attributes.set(attribute);
        }
    }
    StyledContent::new(content, text).to_string()
}

fn to_term_color(color: Color) -> TermColor {
    match color {
        Color::Rgb(r, g, b) => TermColor::Rgb { r, g, b },
        Color::Indexed(i) => TermColor::AnsiValue(i),
        Color::Black => TermColor::Black,
        Color::Red => TermColor::DarkRed,
        Color::Green => TermColor::DarkGreen,
        Color::Yellow => TermColor::DarkYellow,
        Color::Blue => TermColor::DarkBlue,
        Color::Magenta => TermColor::DarkMagenta,
        Color::Cyan => TermColor::DarkCyan,
        Color::Gray => TermColor::Grey,
        Color::DarkGray => TermColor::DarkGrey,
        Color::LightRed => TermColor::Red,
        Color::LightGreen => TermColor::Green,
        Color::LightYellow => TermColor::Yellow,
        Color::LightBlue => TermColor::Blue,
        Color::LightMagenta => TermColor::Magenta,
        Color::LightCyan => TermColor::Cyan,
        Color::White => TermColor::White,
        Color::Reset => TermColor::Reset,
    }
}

/// Split a complete CSI sequence off the front of `text`
///
/// Yields the parameters, the final byte and the byte length consumed.
/// Anything that is not `ESC [` followed by digits or `;` and a final
/// byte in `@`..=`~` is not a sequence and stays visible.
fn parse_csi(text: &str) -> Option<(&str, char, usize)> {
    let rest = text.strip_prefix("\x1b[")?;
    let params_len = rest
        .find(|c: char| !(c.is_ascii_digit() || c == ';'))
        .unwrap_or(rest.len());
    let final_byte = rest[params_len..].chars().next()?;
    if !('@'..='~').contains(&final_byte) {
        return None;
    }
    Some((&rest[..params_len], final_byte, 2 + params_len + 1))
}

/// Remove every escape sequence, leaving the visible text
pub fn strip(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(c) = rest.chars().next() {
        if c == ESC {
            if let Some((_, _, len)) = parse_csi(rest) {
                rest = &rest[len..];
                continue;
            }
        }
        out.push(c);
        rest = &rest[c.len_utf8()..];
    }
    out
}

/// Current graphic rendition while scanning
#[derive(Clone, Copy, Default)]
struct Rendition {
    fg: Option<Color>,
    bg: Option<Color>,
    modifiers: Modifier,
}

impl Rendition {
    fn style(&self) -> Style {
        let mut style = Style::default().add_modifier(self.modifiers);
        style.fg = self.fg;
        style.bg = self.bg;
        style
    }

    fn apply(&mut self, params: &str) {
        let codes: Vec<u16> = if params.is_empty() {
            vec![0]
        } else {
            params.split(';').map(|p| p.parse().unwrap_or(0)).collect()
        };

        let mut i = 0;
        while i < codes.len() {
            match codes[i] {
                0 => *self = Rendition::default(),
                1 => self.modifiers.insert(Modifier::BOLD),
                2 => self.modifiers.insert(Modifier::DIM),
                3 => self.modifiers.insert(Modifier::ITALIC),
                4 => self.modifiers.insert(Modifier::UNDERLINED),
                22 => self.modifiers.remove(Modifier::BOLD | Modifier::DIM),
                23 => self.modifiers.remove(Modifier::ITALIC),
                24 => self.modifiers.remove(Modifier::UNDERLINED),
                code @ 30..=37 => self.fg = Some(basic_color(code - 30, false)),
                code @ 90..=97 => self.fg = Some(basic_color(code - 90, true)),
                code @ 40..=47 => self.bg = Some(basic_color(code - 40, false)),
                code @ 100..=107 => self.bg = Some(basic_color(code - 100, true)),
                39 => self.fg = None,
                49 => self.bg = None,
                code @ (38 | 48) => {
                    let (color, used) = extended_color(&codes[i + 1..]);
                    if code == 38 {
                        self.fg = color.or(self.fg);
                    } else {
                        self.bg = color.or(self.bg);
                    }
                    i += used;
                }
                _ => {}
            }
            i += 1;
        }
    }
}

fn basic_color(offset: u16, bright: bool) -> Color {
    match (offset, bright) {
        (0, false) => Color::Black,
        (1, false) => Color::Red,
        (2, false) => Color::Green,
        (3, false) => Color::Yellow,
        (4, false) => Color::Blue,
        (5, false) => Color::Magenta,
        (6, false) => Color::Cyan,
        (7, false) => Color::Gray,
        (0, true) => Color::DarkGray,
        (1, true) => Color::LightRed,
        (2, true) => Color::LightGreen,
        (3, true) => Color::LightYellow,
        (4, true) => Color::LightBlue,
        (5, true) => Color::LightMagenta,
        (6, true) => Color::LightCyan,
        _ => Color::White,
    }
}

/// Parse the tail of a `38;…`/`48;…` sequence, returning how many codes it used
fn extended_color(rest: &[u16]) -> (Option<Color>, usize) {
    match rest {
        [5, n, ..] => (Some(Color::Indexed(*n as u8)), 2),
        [2, r, g, b, ..] => (Some(Color::Rgb(*r as u8, *g as u8, *b as u8)), 4),
        _ => (None, rest.len()),
    }
}

/// Convert an escaped string into styled ratatui text
pub fn to_text(text: &str) -> Text<'static> {
    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut current = String::new();
    let mut rendition = Rendition::default();

    let flush = |current: &mut String, spans: &mut Vec<Span<'static>>, rendition: &Rendition| {
        if !current.is_empty() {
            spans.push(Span::styled(std::mem::take(current), rendition.style()));
        }
    };

    let mut rest = text;
    while let Some(c) = rest.chars().next() {
        if c == ESC {
            if let Some((params, final_byte, len)) = parse_csi(rest) {
                if final_byte == 'm' {
                    flush(&mut current, &mut spans, &rendition);
                    rendition.apply(params);
                }
                rest = &rest[len..];
                continue;
            }
        }
        match c {
            '\n' => {
                flush(&mut current, &mut spans, &rendition);
                lines.push(Line::from(std::mem::take(&mut spans)));
            }
            '\r' => {}
            c => current.push(c),
        }
        rest = &rest[c.len_utf8()..];
    }
    flush(&mut current, &mut spans, &rendition);
    lines.push(Line::from(spans));

    Text::from(lines)
}
