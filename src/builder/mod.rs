//! Builder API for ergonomic table construction.
//!
//! This module provides a fluent table builder and macros for declaring
//! state and event enums with minimal boilerplate.

pub mod error;
pub mod macros;
pub mod table;

pub use error::BuildError;
pub use table::TableBuilder;
