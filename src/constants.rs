//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

use std::time::Duration;

/// Application name
pub const APP_NAME: &str = "Quest";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Saved-request library, relative to the working directory
pub const LIBRARY_FILE: &str = ".quest";

/// Debug trace file, relative to the working directory
pub const DEBUG_LOG_FILE: &str = "debug.log";

/// Environment toggle that enables the debug trace
pub const DEBUG_ENV_VAR: &str = "DEBUG";

/// Client marker sent with every request
pub const USER_AGENT: &str = "Quest/1.0";

/// Content type assumed for request bodies without an explicit header
pub const DEFAULT_BODY_CONTENT_TYPE: &str = "application/json";

/// Hard limit on a single request, enforced by the executor
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Busy-indicator animation period
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// How long the UI loop waits for terminal input before redrawing
pub const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Placeholder shown in an empty URL field
pub const URL_PLACEHOLDER: &str = "https://api.example.com/endpoint";

/// Longest URL shown verbatim in the status line
pub const STATUS_URL_MAX: usize = 50;

/// Whether the debug trace was requested through the environment
pub fn debug_log_enabled() -> bool {
    std::env::var_os(DEBUG_ENV_VAR).is_some_and(|val| !val.is_empty())
}
