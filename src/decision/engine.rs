//! Validation and invocation of decisions.
//!
//! A decision is registered once but invoked with late-bound arguments.
//! `invoke` is the only path from those arguments to a decision body:
//! arity first, then the category of every position, then the call, then
//! the returned value. Nothing reaches the body unless the shape matches.

use super::callable::Decision;
use super::error::DecisionError;
use crate::core::{State, Value};

/// Validate `args` against the decision's declared shape, invoke it, and
/// extract the resulting state.
///
/// # Example
///
/// ```rust
/// use nfa::decision::{invoke, Decision, DecisionError};
/// use nfa::{args, state_enum};
///
/// state_enum! {
///     enum Light {
///         Red,
///         Green,
///     }
/// }
///
/// let toggle = Decision::new(|go: bool| if go { Light::Green } else { Light::Red });
///
/// assert_eq!(invoke(&toggle, args![true]), Ok(Light::Green));
/// assert_eq!(
///     invoke(&toggle, args![]),
///     Err(DecisionError::ArityMismatch { expected: 1, got: 0 })
/// );
/// ```
pub fn invoke<S: State>(
    decision: &Decision<S>,
    args: Vec<Value<S>>,
) -> Result<S, DecisionError> {
    check_shape(decision, &args)?;
    let returned = decision.call(args)?;
    extract_state(returned)
}

/// Check arity and per-position categories without invoking anything.
pub fn check_shape<S: State>(
    decision: &Decision<S>,
    args: &[Value<S>],
) -> Result<(), DecisionError> {
    let params = decision.params();

    if params.len() != args.len() {
        return Err(DecisionError::ArityMismatch {
            expected: params.len(),
            got: args.len(),
        });
    }

    params
        .iter()
        .zip(args)
        .enumerate()
        .try_for_each(|(position, (expected, value))| {
            let got = value.kind();
            if *expected == got {
                Ok(())
            } else {
                Err(DecisionError::TypeMismatch {
                    position,
                    expected: *expected,
                    got,
                })
            }
        })
}

fn extract_state<S: State>(returned: Value<S>) -> Result<S, DecisionError> {
    match returned {
        Value::State(state) if state.is_reserved() => Err(DecisionError::ReservedState {
            state: state.name().to_string(),
        }),
        Value::State(state) => Ok(state),
        other => Err(DecisionError::BadReturnType { got: other.kind() }),
    }
}
