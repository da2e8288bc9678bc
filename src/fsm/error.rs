//! Fire-time errors.

use crate::decision::DecisionError;
use thiserror::Error;

/// Errors that can occur when firing an event.
///
/// The machine's current state is unchanged after any of these.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FireError {
    #[error("State '{state}' is terminal: no transitions registered")]
    TerminalState { state: String },

    #[error("Event '{event}' is not registered for state '{state}'")]
    UnregisteredEvent { state: String, event: String },

    #[error("Direct transition on '{event}' takes no arguments, got {got}")]
    UnexpectedArguments { event: String, got: usize },

    #[error(transparent)]
    Decision(#[from] DecisionError),
}
