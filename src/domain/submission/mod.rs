//! Submission lifecycle: phases and validated transitions.

mod phase;
mod state_machine;

pub use phase::SubmissionPhase;
pub use state_machine::{InvalidTransition, StateMachine};
