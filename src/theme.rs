//! Color table shared by the highlighter and the render function
//!
//! A `Theme` is built once at startup and only ever borrowed.

use ratatui::style::{Color, Modifier, Style};

use crate::models::HttpMethod;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub hot_pink: Color,
    pub dark_gray: Color,
    pub light_gray: Color,
    pub green: Color,
    pub red: Color,
    pub blue: Color,
    pub yellow: Color,
    pub purple: Color,
    pub orange: Color,
    pub white: Color,
    pub black: Color,
}

impl Theme {
    pub const DEFAULT: Theme = Theme {
        hot_pink: Color::Rgb(0xFF, 0x06, 0xB7),
        dark_gray: Color::Rgb(0x76, 0x76, 0x76),
        light_gray: Color::Rgb(0xC4, 0xC4, 0xC4),
        green: Color::Rgb(0x04, 0xB5, 0x75),
        red: Color::Rgb(0xFF, 0x47, 0x57),
        blue: Color::Rgb(0x37, 0x42, 0xFA),
        yellow: Color::Rgb(0xFF, 0xA5, 0x02),
        purple: Color::Rgb(0x9C, 0x88, 0xFF),
        orange: Color::Rgb(0xFF, 0x76, 0x75),
        white: Color::Rgb(0xFF, 0xFF, 0xFF),
        black: Color::Rgb(0x00, 0x00, 0x00),
    };

    pub fn method_color(&self, method: HttpMethod) -> Color {
        match method {
            HttpMethod::GET => self.green,
            HttpMethod::POST => self.blue,
            HttpMethod::PUT => self.yellow,
            HttpMethod::DELETE => self.red,
            HttpMethod::PATCH => self.purple,
            HttpMethod::HEAD => self.light_gray,
            HttpMethod::OPTIONS => self.dark_gray,
        }
    }

    pub fn status_color(&self, code: u16) -> Color {
        match code {
            200..=299 => self.green,
            300..=399 => self.yellow,
            400..=499 => self.orange,
            500.. => self.red,
            _ => self.dark_gray,
        }
    }

    // Text styles

    pub fn title(&self) -> Style {
        Style::default().fg(self.hot_pink).add_modifier(Modifier::BOLD)
    }

    pub fn subtitle(&self) -> Style {
        Style::default().fg(self.dark_gray).add_modifier(Modifier::ITALIC)
    }

    pub fn error(&self) -> Style {
        Style::default().fg(self.red).add_modifier(Modifier::BOLD)
    }

    pub fn info(&self) -> Style {
        Style::default().fg(self.blue)
    }

    pub fn value(&self) -> Style {
        Style::default().fg(self.light_gray)
    }

    pub fn help(&self) -> Style {
        Style::default().fg(self.dark_gray).add_modifier(Modifier::ITALIC)
    }

    // Borders and tabs

    pub fn section_border(&self) -> Style {
        Style::default().fg(self.hot_pink)
    }

    pub fn focused_border(&self) -> Style {
        Style::default().fg(self.hot_pink)
    }

    pub fn blurred_border(&self) -> Style {
        Style::default().fg(self.dark_gray)
    }

    pub fn tab(&self) -> Style {
        Style::default().fg(self.light_gray)
    }

    pub fn active_tab(&self) -> Style {
        Style::default()
            .fg(self.white)
            .bg(self.hot_pink)
            .add_modifier(Modifier::BOLD)
    }

    pub fn empty_state_border(&self) -> Style {
        Style::default().fg(self.yellow)
    }

    pub fn list_border(&self) -> Style {
        Style::default().fg(self.blue)
    }

    // Highlighter roles

    pub fn json_key(&self) -> Style {
        Style::default().fg(self.blue).add_modifier(Modifier::BOLD)
    }

    pub fn json_string(&self) -> Style {
        Style::default().fg(self.green)
    }

    pub fn json_number(&self) -> Style {
        Style::default().fg(self.purple)
    }

    pub fn json_bool(&self) -> Style {
        Style::default().fg(self.orange)
    }

    pub fn json_null(&self) -> Style {
        Style::default().fg(self.dark_gray)
    }

    pub fn html_tag(&self) -> Style {
        Style::default().fg(self.hot_pink)
    }

    pub fn html_attr(&self) -> Style {
        Style::default().fg(self.blue)
    }

    pub fn xml_tag(&self) -> Style {
        Style::default().fg(self.purple)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classes() {
        let theme = Theme::DEFAULT;
        assert_eq!(theme.status_color(204), theme.green);
        assert_eq!(theme.status_color(301), theme.yellow);
        assert_eq!(theme.status_color(404), theme.orange);
        assert_eq!(theme.status_color(503), theme.red);
        assert_eq!(theme.status_color(101), theme.dark_gray);
    }
}
