//! NFA: an event-driven state machine with decision-computed transitions
//!
//! A machine holds a current state and a shared transition table. Firing an
//! event looks up the `(state, event)` pair and either moves to a fixed
//! target or runs a decision that picks the target from fire-time arguments.
//!
//! # Core Concepts
//!
//! - **State / Event**: opaque comparable identifiers via the `State` and `Event` traits
//! - **Transition**: `Direct(state)` or `Decision(callable)`
//! - **TransitionTable**: at most one transition per `(state, event)`; states
//!   without entries are terminal
//! - **Decision engine**: checks arity and argument categories before any
//!   decision body runs, then validates the returned state
//!
//! # Example
//!
//! ```rust
//! use nfa::fsm::{FireError, Machine, TransitionTable};
//! use nfa::{args, event_enum, state_enum};
//!
//! state_enum! {
//!     enum Task {
//!         Pending,
//!         Running,
//!         Complete,
//!         Error,
//!     }
//! }
//!
//! event_enum! {
//!     enum Signal {
//!         Start,
//!         Finish,
//!     }
//! }
//!
//! let mut table = TransitionTable::new();
//! table
//!     .register(Task::Pending, Signal::Start, nfa::Transition::direct(Task::Running))
//!     .unwrap();
//! table
//!     .register(
//!         Task::Running,
//!         Signal::Finish,
//!         nfa::Transition::decision(|ok: bool| if ok { Task::Complete } else { Task::Error }),
//!     )
//!     .unwrap();
//!
//! let mut machine = Machine::new(Task::Pending, table);
//! machine.fire(&Signal::Start, args![]).unwrap();
//! assert_eq!(machine.state(), &Task::Running);
//!
//! // Wrong argument shape: rejected, state untouched.
//! assert!(matches!(
//!     machine.fire(&Signal::Finish, args!["yes"]),
//!     Err(FireError::Decision(_))
//! ));
//! assert_eq!(machine.state(), &Task::Running);
//!
//! machine.fire(&Signal::Finish, args![false]).unwrap();
//! assert_eq!(machine.state(), &Task::Error);
//! ```

pub mod builder;
pub mod core;
pub mod decision;
pub mod fsm;

// Re-export commonly used types
pub use crate::builder::{BuildError, TableBuilder};
pub use crate::core::{Event, Kind, State, Value};
pub use crate::decision::{Decision, DecisionError};
pub use crate::fsm::{FireError, Machine, MachineConfig, Transition, TransitionTable};
