//! App layer - session state and the transition function
//!
//! The App actor receives key, resize and network events, runs them
//! through the session state, performs the resulting effects and emits
//! render state.

pub mod actor;
pub mod commands;
pub mod effect;
pub mod state;

pub use actor::AppActor;
pub use effect::Effect;
pub use state::SessionState;
