//! Type-erased decision arguments.
//!
//! Arguments to `fire` are late-bound, so they travel as a closed set of
//! variants. Each variant belongs to exactly one [`Kind`], and the decision
//! engine compares kinds before anything is invoked.

use super::state::State;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of a decision argument.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Kind {
    Bool,
    Int,
    Float,
    Text,
    Seq,
    State,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Bool => "bool",
            Kind::Int => "integer",
            Kind::Float => "float",
            Kind::Text => "text",
            Kind::Seq => "sequence",
            Kind::State => "state",
        };
        f.write_str(name)
    }
}

/// A single argument supplied when firing an event.
///
/// # Example
///
/// ```rust
/// use nfa::core::{Kind, Value};
/// use nfa::state_enum;
///
/// state_enum! {
///     enum Phase {
///         Ready,
///         Done,
///     }
/// }
///
/// let flag: Value<Phase> = true.into();
/// assert_eq!(flag.kind(), Kind::Bool);
///
/// let target: Value<Phase> = Phase::Done.into();
/// assert_eq!(target.kind(), Kind::State);
///
/// let ids: Value<Phase> = vec![1i64, 2, 3].into();
/// assert_eq!(ids.kind(), Kind::Seq);
/// ```
#[derive(Clone, PartialEq, Debug)]
pub enum Value<S: State> {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Seq(Vec<Value<S>>),
    State(S),
}

impl<S: State> Value<S> {
    /// The category this value belongs to.
    pub fn kind(&self) -> Kind {
        match self {
            Value::Bool(_) => Kind::Bool,
            Value::Int(_) => Kind::Int,
            Value::Float(_) => Kind::Float,
            Value::Text(_) => Kind::Text,
            Value::Seq(_) => Kind::Seq,
            Value::State(_) => Kind::State,
        }
    }

    /// Wrap a state. `From` cannot be used generically here because it would
    /// overlap the primitive conversions.
    pub fn state(state: S) -> Self {
        Value::State(state)
    }
}

impl<S: State> From<bool> for Value<S> {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl<S: State> From<i64> for Value<S> {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl<S: State> From<i32> for Value<S> {
    fn from(value: i32) -> Self {
        Value::Int(i64::from(value))
    }
}

impl<S: State> From<u32> for Value<S> {
    fn from(value: u32) -> Self {
        Value::Int(i64::from(value))
    }
}

impl<S: State> From<f64> for Value<S> {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl<S: State> From<&str> for Value<S> {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl<S: State> From<String> for Value<S> {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl<S: State, T: Into<Value<S>>> From<Vec<T>> for Value<S> {
    fn from(values: Vec<T>) -> Self {
        Value::Seq(values.into_iter().map(Into::into).collect())
    }
}
