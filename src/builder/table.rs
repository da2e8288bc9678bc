//! Builder for constructing transition tables.

use crate::builder::error::BuildError;
use crate::core::{Event, Kind, State, Value};
use crate::decision::IntoDecision;
use crate::fsm::{Transition, TransitionTable};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Builder for transition tables with a fluent API.
///
/// Registrations are applied in order when [`build`](Self::build) runs.
/// Unlike [`TransitionTable::register`], which stops at the first problem,
/// `build` reports every rejected registration in one pass.
pub struct TableBuilder<S: State, E: Event> {
    entries: Vec<(S, E, Transition<S>)>,
}

impl<S: State, E: Event> TableBuilder<S, E> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add a direct transition `from --event--> to`.
    pub fn direct(self, from: S, event: E, to: S) -> Self {
        self.transition(from, event, Transition::direct(to))
    }

    /// Add a transition decided by a typed function.
    pub fn decision<F, Args>(self, from: S, event: E, f: F) -> Self
    where
        F: IntoDecision<S, Args>,
    {
        self.transition(from, event, Transition::decision(f))
    }

    /// Add a transition decided by a dynamic function over raw values.
    pub fn dynamic<F>(self, from: S, event: E, params: Vec<Kind>, f: F) -> Self
    where
        F: Fn(&[Value<S>]) -> Value<S> + Send + Sync + 'static,
    {
        self.transition(from, event, Transition::dynamic(params, f))
    }

    /// Add a pre-built transition.
    pub fn transition(mut self, from: S, event: E, transition: Transition<S>) -> Self {
        self.entries.push((from, event, transition));
        self
    }

    /// Build the table.
    ///
    /// Returns ALL registration errors if any registration fails. The
    /// first registration for a pair wins; later ones are reported as
    /// duplicates.
    pub fn build(self) -> Result<TransitionTable<S, E>, NonEmptyVec<BuildError>> {
        let mut table = TransitionTable::new();
        let mut checks: Vec<Validation<(), NonEmptyVec<BuildError>>> = Vec::new();

        for (from, event, transition) in self.entries {
            let check = match table.register(from, event, transition) {
                Ok(()) => Validation::success(()),
                Err(err) => Validation::fail(err),
            };
            checks.push(check);
        }

        match Validation::all_vec(checks) {
            Validation::Success(_) => Ok(table),
            Validation::Failure(errors) => Err(errors),
        }
    }
}

impl<S: State, E: Event> Default for TableBuilder<S, E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{event_enum, state_enum};

    state_enum! {
        enum TestState {
            Unset,
            Initial,
            Processing,
            Complete,
            Failed,
        }
        reserved: [Unset]
    }

    event_enum! {
        enum TestEvent {
            Blank,
            Begin,
            Done,
        }
        reserved: [Blank]
    }

    #[test]
    fn fluent_api_builds_table() {
        let result = TableBuilder::new()
            .direct(TestState::Initial, TestEvent::Begin, TestState::Processing)
            .decision(TestState::Processing, TestEvent::Done, |ok: bool| {
                if ok {
                    TestState::Complete
                } else {
                    TestState::Failed
                }
            })
            .build();

        let Ok(table) = result else {
            panic!("Expected table to build");
        };
        assert_eq!(table.len(), 2);
        assert!(table.contains(&TestState::Initial, &TestEvent::Begin));
        assert!(table.contains(&TestState::Processing, &TestEvent::Done));
    }

    #[test]
    fn empty_builder_yields_empty_table() {
        let result = TableBuilder::<TestState, TestEvent>::new().build();

        assert!(matches!(result, Ok(ref table) if table.is_empty()));
    }

    #[test]
    fn build_accumulates_all_errors() {
        let result = TableBuilder::new()
            .direct(TestState::Initial, TestEvent::Begin, TestState::Processing)
            .direct(TestState::Initial, TestEvent::Begin, TestState::Complete)
            .direct(TestState::Unset, TestEvent::Begin, TestState::Processing)
            .direct(TestState::Processing, TestEvent::Blank, TestState::Complete)
            .dynamic(
                TestState::Processing,
                TestEvent::Done,
                vec![],
                |_: &[Value<TestState>]| Value::State(TestState::Complete),
            )
            .build();

        match result {
            Err(errors) => {
                assert_eq!(errors.len(), 3);

                let has_duplicate = errors
                    .iter()
                    .any(|e| matches!(e, BuildError::DuplicateTransition { .. }));
                let has_state = errors
                    .iter()
                    .any(|e| matches!(e, BuildError::InvalidState { .. }));
                let has_event = errors
                    .iter()
                    .any(|e| matches!(e, BuildError::InvalidEvent { .. }));

                assert!(has_duplicate);
                assert!(has_state);
                assert!(has_event);
            }
            Ok(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn table_builder_entry_point_matches_new() {
        let result = TransitionTable::builder()
            .direct(TestState::Initial, TestEvent::Begin, TestState::Processing)
            .build();

        assert!(matches!(result, Ok(ref table) if table.len() == 1));
    }
}
