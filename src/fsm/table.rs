//! The transition table.

use super::transition::Transition;
use crate::builder::{BuildError, TableBuilder};
use crate::core::{Event, State};
use std::collections::HashMap;

/// Mapping from `(state, event)` to a [`Transition`].
///
/// At most one transition exists per pair. A state with no entry is
/// terminal for every event. Once handed to a [`Machine`](super::Machine)
/// the table is shared immutably.
#[derive(Clone, Debug)]
pub struct TransitionTable<S: State, E: Event> {
    transitions: HashMap<S, HashMap<E, Transition<S>>>,
}

impl<S: State, E: Event> Default for TransitionTable<S, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, E: Event> TransitionTable<S, E> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            transitions: HashMap::new(),
        }
    }

    /// Start a fluent builder that reports every registration error at once.
    pub fn builder() -> TableBuilder<S, E> {
        TableBuilder::new()
    }

    /// Register `transition` for `(state, event)`.
    ///
    /// Rejects reserved identifiers (including a reserved direct target)
    /// and any second registration for the same pair. A rejected call
    /// leaves the table unchanged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use nfa::builder::BuildError;
    /// use nfa::fsm::{Transition, TransitionTable};
    /// use nfa::{event_enum, state_enum};
    ///
    /// state_enum! {
    ///     enum Door {
    ///         Open,
    ///         Closed,
    ///         Locked,
    ///     }
    /// }
    ///
    /// event_enum! {
    ///     enum Action {
    ///         Close,
    ///     }
    /// }
    ///
    /// let mut table = TransitionTable::new();
    /// table
    ///     .register(Door::Open, Action::Close, Transition::direct(Door::Closed))
    ///     .unwrap();
    ///
    /// let second = table.register(Door::Open, Action::Close, Transition::direct(Door::Locked));
    /// assert!(matches!(second, Err(BuildError::DuplicateTransition { .. })));
    /// ```
    pub fn register(
        &mut self,
        state: S,
        event: E,
        transition: Transition<S>,
    ) -> Result<(), BuildError> {
        if state.is_reserved() {
            return Err(BuildError::InvalidState {
                state: state.name().to_string(),
            });
        }

        if event.is_reserved() {
            return Err(BuildError::InvalidEvent {
                event: event.name().to_string(),
            });
        }

        if let Transition::Direct(target) = &transition {
            if target.is_reserved() {
                return Err(BuildError::InvalidState {
                    state: target.name().to_string(),
                });
            }
        }

        if self.contains(&state, &event) {
            return Err(BuildError::DuplicateTransition {
                state: state.name().to_string(),
                event: event.name().to_string(),
            });
        }

        self.transitions
            .entry(state)
            .or_default()
            .insert(event, transition);

        Ok(())
    }

    /// Look up the transition for `(state, event)`.
    pub fn get(&self, state: &S, event: &E) -> Option<&Transition<S>> {
        self.transitions.get(state)?.get(event)
    }

    pub fn contains(&self, state: &S, event: &E) -> bool {
        self.get(state, event).is_some()
    }

    /// Events registered from `state`. Empty for terminal states.
    pub fn events<'a>(&'a self, state: &S) -> impl Iterator<Item = &'a E> + 'a {
        self.transitions
            .get(state)
            .into_iter()
            .flat_map(|events| events.keys())
    }

    /// States that have at least one outgoing transition.
    pub fn states(&self) -> impl Iterator<Item = &S> {
        self.transitions.keys()
    }

    /// Check if `state` has no registered events.
    pub fn is_terminal(&self, state: &S) -> bool {
        self.transitions
            .get(state)
            .is_none_or(|events| events.is_empty())
    }

    pub(crate) fn outgoing(&self, state: &S) -> Option<&HashMap<E, Transition<S>>> {
        self.transitions.get(state)
    }

    /// Total number of registered transitions.
    pub fn len(&self) -> usize {
        self.transitions.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
