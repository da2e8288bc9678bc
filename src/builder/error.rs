//! Build errors for transition tables.

use thiserror::Error;

/// Errors that can occur when registering transitions.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BuildError {
    #[error("Invalid state '{state}': the reserved value cannot be registered")]
    InvalidState { state: String },

    #[error("Invalid event '{event}': the reserved value cannot be registered")]
    InvalidEvent { event: String },

    #[error("Transition already registered for state '{state}' on event '{event}'")]
    DuplicateTransition { state: String, event: String },
}
