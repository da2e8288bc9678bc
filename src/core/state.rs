//! Identifier traits for machine states and events.
//!
//! States and events are opaque identifiers. The machine only ever compares
//! and hashes them; `name` exists for diagnostics and error messages.

use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state machine states.
///
/// # Required Traits
///
/// - `Clone`: the current state is handed out and stored by value
/// - `Eq` + `Hash`: states key the transition table
/// - `Debug`: states must be debuggable for diagnostics
/// - `Send` + `Sync`: tables are shared between machines on any thread
///
/// # Example
///
/// ```rust
/// use nfa::core::State;
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug)]
/// enum TaskState {
///     Unset,
///     Pending,
///     Running,
/// }
///
/// impl State for TaskState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Unset => "Unset",
///             Self::Pending => "Pending",
///             Self::Running => "Running",
///         }
///     }
///
///     fn is_reserved(&self) -> bool {
///         matches!(self, Self::Unset)
///     }
/// }
///
/// assert!(TaskState::Unset.is_reserved());
/// assert!(!TaskState::Running.is_reserved());
/// ```
pub trait State: Clone + Eq + Hash + Debug + Send + Sync + 'static {
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this is the reserved "empty" value.
    ///
    /// Reserved states can never be registered in a table, used as a
    /// direct target, or returned from a decision.
    ///
    /// Default implementation returns `false`.
    fn is_reserved(&self) -> bool {
        false
    }
}

/// Trait for events that drive a state machine.
///
/// Same shape as [`State`]: an opaque comparable identifier with a
/// reserved value that is rejected at registration.
pub trait Event: Clone + Eq + Hash + Debug + Send + Sync + 'static {
    /// Get the event's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this is the reserved "empty" value.
    fn is_reserved(&self) -> bool {
        false
    }
}
