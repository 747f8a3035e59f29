//! Response highlighting
//!
//! The content type is always derived from the body text itself. JSON is
//! colored by five regex passes run in a fixed order, each over the output
//! of the previous one; a later pass may therefore recolor text inside a
//! span an earlier pass already colored (a string value containing
//! `: null`, for example).

use regex::{Captures, Regex};
use std::sync::OnceLock;

use crate::ansi::paint;
use crate::models::ResponseOutcome;
use crate::theme::Theme;
use ratatui::style::Style;

/// Body classification used to pick a highlighting strategy
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContentType {
    Json,
    Html,
    Xml,
    PlainText,
}

impl ContentType {
    pub fn mime(&self) -> &'static str {
        match self {
            ContentType::Json => "application/json",
            ContentType::Html => "text/html",
            ContentType::Xml => "application/xml",
            ContentType::PlainText => "text/plain",
        }
    }
}

/// Classify a body by looking at its text
pub fn detect_content_type(body: &str) -> ContentType {
    let trimmed = body.trim();

    let bracketed = (trimmed.starts_with('{') && trimmed.ends_with('}'))
        || (trimmed.starts_with('[') && trimmed.ends_with(']'));
    if bracketed && serde_json::from_str::<serde::de::IgnoredAny>(body).is_ok() {
        return ContentType::Json;
    }

    if trimmed.starts_with('<') && trimmed.ends_with('>') {
        if body.to_lowercase().contains("<html") {
            return ContentType::Html;
        }
        return ContentType::Xml;
    }

    ContentType::PlainText
}

fn json_patterns() -> &'static [Regex; 5] {
    static PATTERNS: OnceLock<[Regex; 5]> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        [
            // keys
            Regex::new(r#""([^"\\]|\\.)*":"#).unwrap(),
            // string values
            Regex::new(r#":\s*"([^"\\]|\\.)*""#).unwrap(),
            // numbers
            Regex::new(r":\s*-?\d+\.?\d*([eE][+-]?\d+)?").unwrap(),
            // booleans
            Regex::new(r":\s*(true|false)").unwrap(),
            // null
            Regex::new(r":\s*null").unwrap(),
        ]
    })
}

fn tag_pattern() -> &'static Regex {
    static TAG: OnceLock<Regex> = OnceLock::new();
    TAG.get_or_init(|| Regex::new(r"<[^>]+>").unwrap())
}

/// Attribute pairs, or an SGR escape that is skipped so the pair never
/// starts inside a color sequence left by the tag pass
fn attr_pattern() -> &'static Regex {
    static ATTR: OnceLock<Regex> = OnceLock::new();
    ATTR.get_or_init(|| Regex::new(r#"\x1b\[[0-9;]*m|(\w+)=("[^"]*"|'[^']*')"#).unwrap())
}

/// Applies theme colors to response bodies
#[derive(Clone, Debug)]
pub struct Highlighter {
    theme: Theme,
}

impl Highlighter {
    pub fn new(theme: Theme) -> Self {
        Highlighter { theme }
    }

    /// Highlight a body according to its detected type
    pub fn render(&self, body: &str) -> String {
        self.highlight(body, detect_content_type(body))
    }

    /// Text shown in the response body view for a completed call
    pub fn render_outcome(&self, outcome: &ResponseOutcome) -> String {
        match &outcome.error {
            Some(error) => paint(self.theme.error(), &format!("Error: {}", error)),
            None => self.render(&outcome.body),
        }
    }

    pub fn highlight(&self, body: &str, content_type: ContentType) -> String {
        if body.is_empty() {
            return String::new();
        }

        match content_type {
            ContentType::Json => self.highlight_json(body),
            ContentType::Html => self.highlight_html(body),
            ContentType::Xml => self.highlight_xml(body),
            ContentType::PlainText => body.to_string(),
        }
    }

    fn highlight_json(&self, body: &str) -> String {
        let mut result = match serde_json::from_str::<serde_json::Value>(body) {
            Ok(value) => serde_json::to_string_pretty(&value).unwrap_or_else(|_| body.to_string()),
            Err(_) => body.to_string(),
        };

        let key_style = self.theme.json_key();
        let styles = [
            key_style,
            self.theme.json_string(),
            self.theme.json_number(),
            self.theme.json_bool(),
            self.theme.json_null(),
        ];

        for (pattern, style) in json_patterns().iter().zip(styles) {
            result = pattern
                .replace_all(&result, |caps: &Captures| {
                    color_json_match(&caps[0], style, key_style)
                })
                .into_owned();
        }

        result
    }

    fn highlight_html(&self, body: &str) -> String {
        let tag_style = self.theme.html_tag();
        let attr_style = self.theme.html_attr();

        let tagged = tag_pattern().replace_all(body, |caps: &Captures| paint(tag_style, &caps[0]));
        attr_pattern()
            .replace_all(&tagged, |caps: &Captures| match caps.get(1) {
                Some(_) => paint(attr_style, &caps[0]),
                None => caps[0].to_string(),
            })
            .into_owned()
    }

    fn highlight_xml(&self, body: &str) -> String {
        let tag_style = self.theme.xml_tag();
        tag_pattern()
            .replace_all(body, |caps: &Captures| paint(tag_style, &caps[0]))
            .into_owned()
    }
}

/// Color one regex match of a JSON pass
///
/// A match is split at its first colon. A quoted left side with an
/// unquoted right side is a key; anything else colors the right side.
fn color_json_match(matched: &str, style: Style, key_style: Style) -> String {
    match matched.split_once(':') {
        Some((left, right)) => {
            if matched.contains('"') && !right.contains('"') {
                format!("{}:{}", paint(key_style, left), right)
            } else {
                format!("{}:{}", left, paint(style, right))
            }
        }
        None => paint(style, matched),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ansi::{strip, to_text};
    use crate::error::TransportError;

    fn highlighter() -> Highlighter {
        Highlighter::new(Theme::DEFAULT)
    }

    /// Visible text carrying the given style, in order
    fn styled_fragments(styled: &str, style: Style) -> Vec<String> {
        to_text(styled)
            .lines
            .iter()
            .flat_map(|line| line.spans.iter())
            .filter(|span| span.style == style)
            .map(|span| span.content.to_string())
            .collect()
    }

    #[test]
    fn test_detect_content_type() {
        assert_eq!(detect_content_type("{\"a\":1}"), ContentType::Json);
        assert_eq!(detect_content_type("  [1, 2]\n"), ContentType::Json);
        assert_eq!(detect_content_type("<html><body/></html>"), ContentType::Html);
        assert_eq!(detect_content_type("<!DOCTYPE x><HTML></HTML>"), ContentType::Html);
        assert_eq!(detect_content_type("<a><b/></a>"), ContentType::Xml);
        assert_eq!(detect_content_type("plain"), ContentType::PlainText);
        assert_eq!(detect_content_type(""), ContentType::PlainText);
    }

    #[test]
    fn test_invalid_json_in_brackets_is_not_json() {
        assert_eq!(detect_content_type("{not json}"), ContentType::PlainText);
        assert_eq!(detect_content_type("[<b>]"), ContentType::PlainText);
    }

    #[test]
    fn test_json_is_pretty_printed() {
        let out = highlighter().highlight("{\"k\":\"v\",\"n\":1}", ContentType::Json);
        assert_eq!(strip(&out), "{\n  \"k\": \"v\",\n  \"n\": 1\n}");
    }

    #[test]
    fn test_json_roles() {
        let theme = Theme::DEFAULT;
        let body = r#"{"a":"s","b":-1.5e3,"c":true,"d":null}"#;
        let out = highlighter().highlight(body, ContentType::Json);

        assert_eq!(
            styled_fragments(&out, theme.json_key()),
            vec!["\"a\"", "\"b\"", "\"c\"", "\"d\""]
        );
        assert_eq!(styled_fragments(&out, theme.json_string()), vec![" \"s\""]);
        assert_eq!(styled_fragments(&out, theme.json_number()), vec![" -1500.0"]);
        assert_eq!(styled_fragments(&out, theme.json_bool()), vec![" true"]);
        assert_eq!(styled_fragments(&out, theme.json_null()), vec![" null"]);
    }

    #[test]
    fn test_invalid_json_fails_open() {
        let body = r#"{"a": 1, oops}"#;
        let out = highlighter().highlight(body, ContentType::Json);

        assert_eq!(strip(&out), body);
        assert_eq!(styled_fragments(&out, Theme::DEFAULT.json_number()), vec![" 1"]);
    }

    #[test]
    fn test_later_pass_recolors_inside_string_value() {
        let theme = Theme::DEFAULT;
        let out = highlighter().highlight(r#"{"note":"x: null"}"#, ContentType::Json);

        assert_eq!(strip(&out), "{\n  \"note\": \"x: null\"\n}");
        assert_eq!(styled_fragments(&out, theme.json_null()), vec![" null"]);
    }

    #[test]
    fn test_html_tags_and_attributes() {
        let theme = Theme::DEFAULT;
        let body = r#"<html lang="en"><p>x</p></html>"#;
        let out = highlighter().highlight(body, ContentType::Html);

        assert_eq!(strip(&out), body);
        assert!(styled_fragments(&out, theme.html_tag()).contains(&"<p>".to_string()));
        assert_eq!(styled_fragments(&out, theme.html_attr()), vec!["lang=\"en\""]);
    }

    #[test]
    fn test_html_attributes_outside_tags() {
        let out = highlighter().highlight("<html>a='b'</html>", ContentType::Html);
        assert_eq!(styled_fragments(&out, Theme::DEFAULT.html_attr()), vec!["a='b'"]);
    }

    #[test]
    fn test_html_attribute_after_closing_tag() {
        let body = "<html><p>x</p>a='b'</html>";
        let out = highlighter().highlight(body, ContentType::Html);

        assert_eq!(strip(&out), body);
        assert_eq!(styled_fragments(&out, Theme::DEFAULT.html_attr()), vec!["a='b'"]);
        let visible: String = to_text(&out)
            .lines
            .iter()
            .flat_map(|line| line.spans.iter().map(|span| span.content.to_string()))
            .collect();
        assert_eq!(visible, body);
    }

    #[test]
    fn test_xml_tags_only() {
        let theme = Theme::DEFAULT;
        let body = r#"<a id="1"><b/></a>"#;
        let out = highlighter().highlight(body, ContentType::Xml);

        assert_eq!(strip(&out), body);
        assert_eq!(
            styled_fragments(&out, theme.xml_tag()),
            vec!["<a id=\"1\">", "<b/>", "</a>"]
        );
        assert!(styled_fragments(&out, theme.html_attr()).is_empty());
    }

    #[test]
    fn test_plain_text_untouched() {
        assert_eq!(highlighter().highlight("hello: 1", ContentType::PlainText), "hello: 1");
    }

    #[test]
    fn test_error_outcome_replaces_body() {
        let outcome = ResponseOutcome {
            body: "ignored".into(),
            ..ResponseOutcome::failed(TransportError::Timeout(30), Default::default())
        };
        let out = highlighter().render_outcome(&outcome);

        assert_eq!(strip(&out), "Error: request failed: timed out after 30s");
        assert_eq!(
            styled_fragments(&out, Theme::DEFAULT.error()),
            vec!["Error: request failed: timed out after 30s"]
        );
    }
}
