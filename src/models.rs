use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

use crate::error::TransportError;
use crate::widgets::ListEntry;

/// Header mapping; names are unique and case-sensitive as stored
pub type Headers = BTreeMap<String, String>;

/// HTTP Method enum, in picker order
#[allow(clippy::upper_case_acronyms)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum HttpMethod {
    #[default]
    GET,
    POST,
    PUT,
    DELETE,
    PATCH,
    HEAD,
    OPTIONS,
}

impl HttpMethod {
    /// Every method in the fixed picker order
    pub const ALL: [HttpMethod; 7] = [
        HttpMethod::GET,
        HttpMethod::POST,
        HttpMethod::PUT,
        HttpMethod::DELETE,
        HttpMethod::PATCH,
        HttpMethod::HEAD,
        HttpMethod::OPTIONS,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::GET => "GET",
            HttpMethod::POST => "POST",
            HttpMethod::PUT => "PUT",
            HttpMethod::DELETE => "DELETE",
            HttpMethod::PATCH => "PATCH",
            HttpMethod::HEAD => "HEAD",
            HttpMethod::OPTIONS => "OPTIONS",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            HttpMethod::GET => "Retrieve data",
            HttpMethod::POST => "Create new resource",
            HttpMethod::PUT => "Update/replace resource",
            HttpMethod::DELETE => "Remove resource",
            HttpMethod::PATCH => "Partial update",
            HttpMethod::HEAD => "Headers only",
            HttpMethod::OPTIONS => "Available methods",
        }
    }

    /// Case-sensitive lookup by name
    pub fn from_name(name: &str) -> Option<HttpMethod> {
        HttpMethod::ALL.into_iter().find(|m| m.as_str() == name)
    }

    /// Methods whose body is actually transmitted
    pub fn has_body(&self) -> bool {
        matches!(self, HttpMethod::POST | HttpMethod::PUT | HttpMethod::PATCH)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ListEntry for HttpMethod {
    fn title(&self) -> String {
        self.as_str().to_string()
    }

    fn subtitle(&self) -> String {
        self.description().to_string()
    }

    fn filter_key(&self) -> &str {
        self.as_str()
    }
}

/// A request composed from the committed session fields
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Request {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Headers,
    pub body: String,
}

impl Request {
    /// The body the executor will put on the wire, if any
    pub fn transmitted_body(&self) -> Option<&str> {
        if self.method.has_body() && !self.body.is_empty() {
            Some(&self.body)
        } else {
            None
        }
    }
}

/// Result of one completed executor call
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResponseOutcome {
    pub status_code: Option<u16>,
    pub headers: Headers,
    pub body: String,
    pub elapsed: Duration,
    pub error: Option<TransportError>,
}

impl ResponseOutcome {
    pub fn failed(error: TransportError, elapsed: Duration) -> Self {
        ResponseOutcome {
            elapsed,
            error: Some(error),
            ..Default::default()
        }
    }
}

/// An entry of the request library file
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SavedRequest {
    pub name: String,
    pub method: String,
    pub url: String,
    pub headers: Headers,
    pub body: String,
}

impl SavedRequest {
    pub fn new(
        method: HttpMethod,
        url: impl Into<String>,
        headers: Headers,
        body: impl Into<String>,
    ) -> Self {
        let url = url.into();
        SavedRequest {
            name: format!("{} {}", method.as_str(), url),
            method: method.as_str().to_string(),
            url,
            headers,
            body: body.into(),
        }
    }
}

impl ListEntry for SavedRequest {
    fn title(&self) -> String {
        self.name.clone()
    }

    fn subtitle(&self) -> String {
        format!("{} • {}", self.method, self.url)
    }

    fn filter_key(&self) -> &str {
        &self.name
    }
}
