//! Out-of-band work requested by the state machine

use crate::models::{Request, SavedRequest};

/// Description of work the effect runner performs after a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Hand a request to the executor
    Dispatch { id: u64, request: Request },
    /// Read the library and feed it back as `Event::LibraryLoaded`
    OpenLibrary,
    /// Append an entry to the library file
    AppendToLibrary(SavedRequest),
    Quit,
}
