//! State machine that fires events against a shared transition table.

use super::config::{ArgumentPolicy, MachineConfig};
use super::error::FireError;
use super::table::TransitionTable;
use super::transition::Transition;
use crate::core::{Event, State, Value};
use crate::decision;
use std::sync::Arc;
use tracing::debug;

/// Holds the current state and a shared, immutable transition table.
///
/// The machine is a single-writer value. Callers that fire from several
/// threads must serialize access themselves, e.g. behind a `Mutex`.
///
/// # Example
///
/// ```rust
/// use nfa::fsm::{Machine, TransitionTable};
/// use nfa::{args, event_enum, state_enum};
///
/// state_enum! {
///     enum Job {
///         Pending,
///         Running,
///         Complete,
///         Error,
///     }
/// }
///
/// event_enum! {
///     enum Signal {
///         Start,
///         Finish,
///     }
/// }
///
/// let Ok(table) = TransitionTable::builder()
///     .direct(Job::Pending, Signal::Start, Job::Running)
///     .decision(Job::Running, Signal::Finish, |ok: bool| {
///         if ok { Job::Complete } else { Job::Error }
///     })
///     .build()
/// else {
///     panic!("table has conflicting transitions");
/// };
///
/// let mut machine = Machine::new(Job::Pending, table);
/// machine.fire(&Signal::Start, args![]).unwrap();
/// machine.fire(&Signal::Finish, args![true]).unwrap();
/// assert_eq!(machine.state(), &Job::Complete);
/// ```
#[derive(Clone, Debug)]
pub struct Machine<S: State, E: Event> {
    current: S,
    table: Arc<TransitionTable<S, E>>,
    config: MachineConfig,
}

impl<S: State, E: Event> Machine<S, E> {
    /// Create a machine in `initial`.
    ///
    /// `initial` need not appear in the table; if it doesn't, the machine
    /// starts (and stays) in a terminal state.
    pub fn new(initial: S, table: impl Into<Arc<TransitionTable<S, E>>>) -> Self {
        Self::with_config(initial, table, MachineConfig::default())
    }

    pub fn with_config(
        initial: S,
        table: impl Into<Arc<TransitionTable<S, E>>>,
        config: MachineConfig,
    ) -> Self {
        Self {
            current: initial,
            table: table.into(),
            config,
        }
    }

    /// Get current state (pure)
    pub fn state(&self) -> &S {
        &self.current
    }

    pub fn table(&self) -> &TransitionTable<S, E> {
        &self.table
    }

    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    /// Check if `event` is registered from the current state (pure)
    pub fn can_fire(&self, event: &E) -> bool {
        self.table.contains(&self.current, event)
    }

    /// Check if the current state has no registered events (pure)
    pub fn is_terminal(&self) -> bool {
        self.table.is_terminal(&self.current)
    }

    /// Fire `event` with `args`.
    ///
    /// Direct transitions commit their target immediately. Decision
    /// transitions commit only after the decision has validated its
    /// arguments, run, and returned a usable state. On any error the
    /// current state is left untouched.
    pub fn fire(&mut self, event: &E, args: Vec<Value<S>>) -> Result<(), FireError> {
        match self.next_state(event, args) {
            Ok(next) => {
                debug!(
                    from = self.current.name(),
                    event = event.name(),
                    to = next.name(),
                    "transition committed"
                );
                self.current = next;
                Ok(())
            }
            Err(err) => {
                debug!(
                    state = self.current.name(),
                    event = event.name(),
                    error = %err,
                    "fire rejected"
                );
                Err(err)
            }
        }
    }

    /// Resolve the state `event` would lead to without committing it.
    fn next_state(&self, event: &E, args: Vec<Value<S>>) -> Result<S, FireError> {
        let Some(events) = self.table.outgoing(&self.current) else {
            return Err(FireError::TerminalState {
                state: self.current.name().to_string(),
            });
        };

        let Some(transition) = events.get(event) else {
            return Err(FireError::UnregisteredEvent {
                state: self.current.name().to_string(),
                event: event.name().to_string(),
            });
        };

        match transition {
            Transition::Direct(target) => {
                if self.config.direct_args == ArgumentPolicy::Reject && !args.is_empty() {
                    return Err(FireError::UnexpectedArguments {
                        event: event.name().to_string(),
                        got: args.len(),
                    });
                }
                Ok(target.clone())
            }
            Transition::Decision(d) => decision::invoke(d, args).map_err(FireError::from),
        }
    }
}
