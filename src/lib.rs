//! # Quest
//!
//! A terminal HTTP workbench: compose a request, send it, read a
//! syntax-highlighted response, and keep a small library of saved requests.
//!
//! ## Features
//! - HTTP methods: GET, POST, PUT, DELETE, PATCH, HEAD, OPTIONS
//! - Custom request headers and a free-form body editor
//! - JSON pretty printing and JSON/HTML/XML highlighting
//! - Response headers view, status, timing
//! - Saved requests in a `.quest` file in the working directory
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - draws `RenderState` snapshots, forwards input
//! - App Layer - `SessionState::handle` transition function plus effect runner
//! - Network Layer (Tokio) - async HTTP execution

pub mod ansi;
pub mod app;
pub mod constants;
pub mod error;
pub mod highlight;
pub mod messages;
pub mod models;
pub mod network;
pub mod storage;
pub mod theme;
pub mod ui;
pub mod widgets;

// Re-export commonly used types
pub use app::{AppActor, Effect, SessionState};
pub use error::TransportError;
pub use highlight::{detect_content_type, ContentType, Highlighter};
pub use messages::{Event, NetworkCommand, NetworkResponse, RenderState};
pub use models::{Headers, HttpMethod, Request, ResponseOutcome, SavedRequest};
pub use network::{HttpExecutor, NetworkActor};
pub use storage::RequestLibrary;
pub use theme::Theme;
