//! Core identifier and argument types.
//!
//! This module contains the thin data layer of the machine:
//! - State and event identifiers via the `State` and `Event` traits
//! - The type-erased argument envelope (`Value`) and its categories (`Kind`)

mod state;
mod value;

pub use state::{Event, State};
pub use value::{Kind, Value};
