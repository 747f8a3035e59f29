//! Network messages - communication between App and Network layers

use crate::models::{Request, ResponseOutcome};

/// Commands sent from App layer to Network layer
#[derive(Debug, Clone)]
pub enum NetworkCommand {
    /// Run one request to completion or timeout
    Execute { id: u64, request: Request },
    /// Shutdown the network actor
    Shutdown,
}

/// Responses sent from Network layer to App layer
#[derive(Debug, Clone)]
pub enum NetworkResponse {
    /// The call finished, successfully or not
    Completed { id: u64, outcome: ResponseOutcome },
}

impl NetworkResponse {
    pub fn id(&self) -> u64 {
        match self {
            NetworkResponse::Completed { id, .. } => *id,
        }
    }
}
