//! Decision-computed transitions.
//!
//! A decision is a callable registered against a `(state, event)` pair that
//! picks the next state from arguments supplied when the event fires.
//!
//! # Key Concepts
//!
//! - **Decision**: the callable plus its declared parameter kinds
//! - **Arg**: Rust types that may appear as decision parameters
//! - **invoke**: the single point where fire-time arguments are checked
//!   against the declared shape before the body runs
//!
//! Typed decisions (`Decision::new`) derive their shape from the function
//! signature. Dynamic decisions (`Decision::dynamic`) declare it explicitly
//! and have their return value checked at fire time.

mod arg;
mod callable;
mod engine;
mod error;

pub use arg::{Arg, ArgError};
pub use callable::{Decision, IntoDecision};
pub use engine::{check_shape, invoke};
pub use error::DecisionError;
