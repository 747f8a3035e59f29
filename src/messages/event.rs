//! Everything the session state machine reacts to

use crossterm::event::KeyEvent;

use crate::messages::NetworkResponse;
use crate::models::{ResponseOutcome, SavedRequest};

#[derive(Debug, Clone)]
pub enum Event {
    Key(KeyEvent),
    Resize { width: u16, height: u16 },
    /// Completion of the outstanding network call
    ResponseArrived { id: u64, outcome: ResponseOutcome },
    /// Library contents read on behalf of the load dialog
    LibraryLoaded(Vec<SavedRequest>),
    /// Busy-indicator animation step
    Tick,
}

impl From<NetworkResponse> for Event {
    fn from(response: NetworkResponse) -> Self {
        match response {
            NetworkResponse::Completed { id, outcome } => Event::ResponseArrived { id, outcome },
        }
    }
}
