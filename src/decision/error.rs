//! Decision dispatch errors.

use crate::core::Kind;
use thiserror::Error;

/// Errors that can occur while validating and invoking a decision.
///
/// Every variant is raised before the machine commits a new state, so a
/// failed decision never changes the machine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecisionError {
    #[error("Decision expects {expected} argument(s), got {got}")]
    ArityMismatch { expected: usize, got: usize },

    #[error("Argument {position}: expected {expected}, got {got}")]
    TypeMismatch {
        position: usize,
        expected: Kind,
        got: Kind,
    },

    #[error("Argument {position}, element {index}: expected {expected}, got {got}")]
    ElementMismatch {
        position: usize,
        index: usize,
        expected: Kind,
        got: Kind,
    },

    #[error("Argument {position}: integer {value} does not fit in {target}")]
    ArgumentOutOfRange {
        position: usize,
        value: i64,
        target: &'static str,
    },

    #[error("Decision returned {got}, expected a state")]
    BadReturnType { got: Kind },

    #[error("Decision returned the reserved state '{state}'")]
    ReservedState { state: String },
}
