//! Conversion from the argument envelope into typed decision parameters.

use super::error::DecisionError;
use crate::core::{Kind, State, Value};
use thiserror::Error;

/// Failure converting one [`Value`] into a parameter type.
///
/// Carries no position; the engine attaches it with [`ArgError::at`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ArgError {
    #[error("expected {expected}, got {got}")]
    Mismatch { expected: Kind, got: Kind },

    #[error("element {index}: expected {expected}, got {got}")]
    Element {
        index: usize,
        expected: Kind,
        got: Kind,
    },

    #[error("integer {value} does not fit in {target}")]
    OutOfRange { value: i64, target: &'static str },
}

impl ArgError {
    pub fn mismatch(expected: Kind, got: Kind) -> Self {
        ArgError::Mismatch { expected, got }
    }

    /// Attach the positional index of the offending argument.
    pub fn at(self, position: usize) -> DecisionError {
        match self {
            ArgError::Mismatch { expected, got } => DecisionError::TypeMismatch {
                position,
                expected,
                got,
            },
            ArgError::Element {
                index,
                expected,
                got,
            } => DecisionError::ElementMismatch {
                position,
                index,
                expected,
                got,
            },
            ArgError::OutOfRange { value, target } => DecisionError::ArgumentOutOfRange {
                position,
                value,
                target,
            },
        }
    }
}

/// A Rust type that can appear as a decision parameter.
///
/// `KIND` is the category recorded when the decision is registered; the
/// engine compares it with the supplied value before `from_value` runs.
///
/// The machine's own state type implements `Arg` through
/// [`state_enum!`](crate::state_enum) or [`impl_state_arg!`](crate::impl_state_arg).
pub trait Arg<S: State>: Sized {
    const KIND: Kind;

    fn from_value(value: Value<S>) -> Result<Self, ArgError>;
}

impl<S: State> Arg<S> for bool {
    const KIND: Kind = Kind::Bool;

    fn from_value(value: Value<S>) -> Result<Self, ArgError> {
        match value {
            Value::Bool(b) => Ok(b),
            other => Err(ArgError::mismatch(Kind::Bool, other.kind())),
        }
    }
}

impl<S: State> Arg<S> for i64 {
    const KIND: Kind = Kind::Int;

    fn from_value(value: Value<S>) -> Result<Self, ArgError> {
        match value {
            Value::Int(i) => Ok(i),
            other => Err(ArgError::mismatch(Kind::Int, other.kind())),
        }
    }
}

macro_rules! impl_narrow_int_arg {
    ($($ty:ty),*) => {
        $(
            impl<S: State> Arg<S> for $ty {
                const KIND: Kind = Kind::Int;

                fn from_value(value: Value<S>) -> Result<Self, ArgError> {
                    match value {
                        Value::Int(i) => <$ty>::try_from(i).map_err(|_| ArgError::OutOfRange {
                            value: i,
                            target: stringify!($ty),
                        }),
                        other => Err(ArgError::mismatch(Kind::Int, other.kind())),
                    }
                }
            }
        )*
    };
}

impl_narrow_int_arg!(i32, u32);

impl<S: State> Arg<S> for f64 {
    const KIND: Kind = Kind::Float;

    fn from_value(value: Value<S>) -> Result<Self, ArgError> {
        match value {
            Value::Float(f) => Ok(f),
            other => Err(ArgError::mismatch(Kind::Float, other.kind())),
        }
    }
}

impl<S: State> Arg<S> for String {
    const KIND: Kind = Kind::Text;

    fn from_value(value: Value<S>) -> Result<Self, ArgError> {
        match value {
            Value::Text(s) => Ok(s),
            other => Err(ArgError::mismatch(Kind::Text, other.kind())),
        }
    }
}

impl<S: State, T: Arg<S>> Arg<S> for Vec<T> {
    const KIND: Kind = Kind::Seq;

    fn from_value(value: Value<S>) -> Result<Self, ArgError> {
        let items = match value {
            Value::Seq(items) => items,
            other => return Err(ArgError::mismatch(Kind::Seq, other.kind())),
        };

        items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                T::from_value(item).map_err(|err| match err {
                    ArgError::Mismatch { expected, got }
                    | ArgError::Element { expected, got, .. } => ArgError::Element {
                        index,
                        expected,
                        got,
                    },
                    out_of_range => out_of_range,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Eq, Hash, Debug)]
    enum TestState {
        Idle,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            "Idle"
        }
    }

    type V = Value<TestState>;

    #[test]
    fn primitives_convert_from_matching_kind() {
        assert_eq!(
            <bool as Arg<TestState>>::from_value(V::Bool(true)),
            Ok(true)
        );
        assert_eq!(<i64 as Arg<TestState>>::from_value(V::Int(-4)), Ok(-4));
        assert_eq!(<f64 as Arg<TestState>>::from_value(V::Float(0.5)), Ok(0.5));
        assert_eq!(
            <String as Arg<TestState>>::from_value(V::Text("go".into())),
            Ok("go".to_string())
        );
    }

    #[test]
    fn primitives_reject_other_kinds() {
        let err = <bool as Arg<TestState>>::from_value(V::Text("x".into())).unwrap_err();
        assert_eq!(err, ArgError::mismatch(Kind::Bool, Kind::Text));

        let err = <f64 as Arg<TestState>>::from_value(V::Int(1)).unwrap_err();
        assert_eq!(err, ArgError::mismatch(Kind::Float, Kind::Int));

        let err = <i64 as Arg<TestState>>::from_value(V::State(TestState::Idle)).unwrap_err();
        assert_eq!(err, ArgError::mismatch(Kind::Int, Kind::State));
    }

    #[test]
    fn narrow_integers_check_range() {
        assert_eq!(<u32 as Arg<TestState>>::from_value(V::Int(12)), Ok(12u32));

        let err = <u32 as Arg<TestState>>::from_value(V::Int(-1)).unwrap_err();
        assert_eq!(
            err,
            ArgError::OutOfRange {
                value: -1,
                target: "u32"
            }
        );
    }

    #[test]
    fn narrow_integers_accept_their_own_conversions() {
        assert_eq!(
            <u32 as Arg<TestState>>::from_value(Value::from(u32::MAX)),
            Ok(u32::MAX)
        );
        assert_eq!(
            <i32 as Arg<TestState>>::from_value(Value::from(i32::MIN)),
            Ok(i32::MIN)
        );

        let err = <i32 as Arg<TestState>>::from_value(Value::from(u32::MAX)).unwrap_err();
        assert_eq!(
            err,
            ArgError::OutOfRange {
                value: i64::from(u32::MAX),
                target: "i32"
            }
        );
    }

    #[test]
    fn sequences_report_offending_element() {
        let value = V::Seq(vec![V::Int(1), V::Text("two".into()), V::Int(3)]);
        let err = <Vec<i64> as Arg<TestState>>::from_value(value).unwrap_err();

        assert_eq!(
            err,
            ArgError::Element {
                index: 1,
                expected: Kind::Int,
                got: Kind::Text
            }
        );
    }

    #[test]
    fn nested_sequences_report_outer_index() {
        let value = V::Seq(vec![
            V::Seq(vec![V::Bool(true)]),
            V::Seq(vec![V::Bool(false), V::Int(0)]),
        ]);
        let err = <Vec<Vec<bool>> as Arg<TestState>>::from_value(value).unwrap_err();

        assert_eq!(
            err,
            ArgError::Element {
                index: 1,
                expected: Kind::Bool,
                got: Kind::Int
            }
        );
    }

    #[test]
    fn at_attaches_position() {
        let err = ArgError::mismatch(Kind::Bool, Kind::Text).at(2);
        assert_eq!(
            err,
            DecisionError::TypeMismatch {
                position: 2,
                expected: Kind::Bool,
                got: Kind::Text
            }
        );
    }
}
