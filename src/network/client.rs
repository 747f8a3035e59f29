//! HTTP client wrapper - executes requests and collects outcomes

use std::time::{Duration, Instant};

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE, USER_AGENT};

use crate::constants::{DEFAULT_BODY_CONTENT_TYPE, REQUEST_TIMEOUT, USER_AGENT as QUEST_USER_AGENT};
use crate::error::TransportError;
use crate::models::{Headers, HttpMethod, Request, ResponseOutcome};

/// Executes one request at a time against a shared connection pool
#[derive(Clone, Debug)]
pub struct HttpExecutor {
    client: reqwest::Client,
    timeout: Duration,
}

impl Default for HttpExecutor {
    fn default() -> Self {
        Self::new(REQUEST_TIMEOUT)
    }
}

impl HttpExecutor {
    pub fn new(timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        HttpExecutor { client, timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Run the request to completion; every failure lands in the outcome
    pub async fn execute(&self, request: Request) -> ResponseOutcome {
        let start = Instant::now();

        let headers = match build_headers(&request) {
            Ok(headers) => headers,
            Err(e) => return ResponseOutcome::failed(e, start.elapsed()),
        };

        let mut builder = self
            .client
            .request(to_reqwest_method(request.method), request.url.as_str())
            .headers(headers)
            .timeout(self.timeout);
        if let Some(body) = request.transmitted_body() {
            builder = builder.body(body.to_string());
        }

        let result = builder.send().await;
        let elapsed = start.elapsed();

        let response = match result {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(url = %request.url, error = %e, "Request failed");
                return ResponseOutcome::failed(
                    TransportError::from_send(&e, self.timeout.as_secs()),
                    elapsed,
                );
            }
        };

        let status_code = response.status().as_u16();
        let headers = flatten_headers(response.headers());

        match response.text().await {
            Ok(body) => ResponseOutcome {
                status_code: Some(status_code),
                headers,
                body,
                elapsed,
                error: None,
            },
            Err(e) => ResponseOutcome::failed(TransportError::Body(e.to_string()), elapsed),
        }
    }
}

fn to_reqwest_method(method: HttpMethod) -> reqwest::Method {
    match method {
        HttpMethod::GET => reqwest::Method::GET,
        HttpMethod::POST => reqwest::Method::POST,
        HttpMethod::PUT => reqwest::Method::PUT,
        HttpMethod::DELETE => reqwest::Method::DELETE,
        HttpMethod::PATCH => reqwest::Method::PATCH,
        HttpMethod::HEAD => reqwest::Method::HEAD,
        HttpMethod::OPTIONS => reqwest::Method::OPTIONS,
    }
}

/// Outgoing header set: user agent, then user headers, then a default
/// content type when a body goes out without one
pub fn build_headers(request: &Request) -> Result<HeaderMap, TransportError> {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(QUEST_USER_AGENT));

    for (name, value) in &request.headers {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| TransportError::Build(format!("invalid header name {:?}: {}", name, e)))?;
        let value = HeaderValue::from_str(value).map_err(|e| {
            TransportError::Build(format!("invalid value for header {}: {}", name, e))
        })?;
        headers.insert(name, value);
    }

    if request.transmitted_body().is_some() && !headers.contains_key(CONTENT_TYPE) {
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(DEFAULT_BODY_CONTENT_TYPE));
    }

    Ok(headers)
}

/// One entry per header name, repeated values joined by ", "
pub fn flatten_headers(map: &HeaderMap) -> Headers {
    let mut headers = Headers::new();
    for name in map.keys() {
        let joined = map
            .get_all(name)
            .iter()
            .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
            .collect::<Vec<_>>()
            .join(", ");
        headers.insert(canonical_name(name.as_str()), joined);
    }
    headers
}

/// `content-type` -> `Content-Type`
fn canonical_name(name: &str) -> String {
    name.split('-')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => {
                    first.to_ascii_uppercase().to_string() + &chars.as_str().to_ascii_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join("-")
}
