//! The event-driven machine.
//!
//! # Key Concepts
//!
//! - **Transition**: `Direct(state)` or `Decision(callable)` for one `(state, event)` pair
//! - **TransitionTable**: immutable-after-construction map of transitions
//! - **Machine**: current state plus a shared table; `fire` is the only mutator
//!
//! `fire` performs exactly one synchronous lookup-and-dispatch. There is no
//! queueing, history, or background work.

mod config;
mod error;
mod machine;
mod table;
mod transition;

pub use config::{ArgumentPolicy, MachineConfig};
pub use error::FireError;
pub use machine::Machine;
pub use table::TransitionTable;
pub use transition::Transition;
