//! Registered decision callables.

use super::arg::Arg;
use super::error::DecisionError;
use crate::core::{Kind, State, Value};
use std::fmt;
use std::sync::Arc;

/// Type-erased decision body. Receives arguments whose kinds already match
/// the declared parameters.
type DecisionFn<S> = Arc<dyn Fn(Vec<Value<S>>) -> Result<Value<S>, DecisionError> + Send + Sync>;

/// A callable that computes the next state from fire-time arguments.
///
/// The declared parameter kinds are fixed when the decision is created and
/// never change afterwards.
///
/// # Example
///
/// ```rust
/// use nfa::core::Kind;
/// use nfa::decision::Decision;
/// use nfa::state_enum;
///
/// state_enum! {
///     enum Job {
///         Running,
///         Complete,
///         Error,
///     }
/// }
///
/// let finish = Decision::new(|success: bool| if success { Job::Complete } else { Job::Error });
/// assert_eq!(finish.params(), &[Kind::Bool]);
/// ```
pub struct Decision<S: State> {
    params: Vec<Kind>,
    call: DecisionFn<S>,
}

impl<S: State> Decision<S> {
    /// Create a decision from a typed function.
    ///
    /// Parameter kinds are derived from the function signature, so the
    /// declared shape can never drift from what the body accepts.
    pub fn new<F, Args>(f: F) -> Self
    where
        F: IntoDecision<S, Args>,
    {
        f.into_decision()
    }

    /// Create a decision over raw values with an explicit parameter shape.
    ///
    /// The body sees arguments whose top-level kinds match `params`. Its
    /// return value is checked at fire time and must be `Value::State`.
    pub fn dynamic<F>(params: Vec<Kind>, f: F) -> Self
    where
        F: Fn(&[Value<S>]) -> Value<S> + Send + Sync + 'static,
    {
        Self {
            params,
            call: Arc::new(
                move |args: Vec<Value<S>>| -> Result<Value<S>, DecisionError> { Ok(f(&args)) },
            ),
        }
    }

    /// Declared parameter kinds, in positional order.
    pub fn params(&self) -> &[Kind] {
        &self.params
    }

    pub fn arity(&self) -> usize {
        self.params.len()
    }

    pub(crate) fn call(&self, args: Vec<Value<S>>) -> Result<Value<S>, DecisionError> {
        (self.call)(args)
    }
}

impl<S: State> Clone for Decision<S> {
    fn clone(&self) -> Self {
        Self {
            params: self.params.clone(),
            call: Arc::clone(&self.call),
        }
    }
}

impl<S: State> fmt::Debug for Decision<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Decision")
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

/// Conversion from a typed function into a [`Decision`].
///
/// Implemented for every `Fn(A1, .., An) -> S` up to six parameters where
/// each `Ai: Arg<S>`. `Args` is the parameter tuple and only serves to keep
/// the impls apart.
pub trait IntoDecision<S: State, Args> {
    fn into_decision(self) -> Decision<S>;
}

macro_rules! impl_into_decision {
    ($($ty:ident $val:ident),*) => {
        impl<S, F, $($ty,)*> IntoDecision<S, ($($ty,)*)> for F
        where
            S: State,
            F: Fn($($ty),*) -> S + Send + Sync + 'static,
            $($ty: Arg<S> + 'static,)*
        {
            #[allow(unused_mut, unused_variables)]
            fn into_decision(self) -> Decision<S> {
                let params: Vec<Kind> = vec![$(<$ty as Arg<S>>::KIND),*];
                let arity = params.len();

                let call = move |args: Vec<Value<S>>| -> Result<Value<S>, DecisionError> {
                    let got = args.len();
                    let mut args = args.into_iter().enumerate();
                    $(
                        let $val = match args.next() {
                            Some((position, value)) => {
                                <$ty as Arg<S>>::from_value(value).map_err(|err| err.at(position))?
                            }
                            None => {
                                return Err(DecisionError::ArityMismatch {
                                    expected: arity,
                                    got,
                                })
                            }
                        };
                    )*
                    Ok(Value::State((self)($($val),*)))
                };

                Decision {
                    params,
                    call: Arc::new(call),
                }
            }
        }
    };
}

impl_into_decision!();
impl_into_decision!(A1 a1);
impl_into_decision!(A1 a1, A2 a2);
impl_into_decision!(A1 a1, A2 a2, A3 a3);
impl_into_decision!(A1 a1, A2 a2, A3 a3, A4 a4);
impl_into_decision!(A1 a1, A2 a2, A3 a3, A4 a4, A5 a5);
impl_into_decision!(A1 a1, A2 a2, A3 a3, A4 a4, A5 a5, A6 a6);

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Eq, Hash, Debug)]
    enum TestState {
        Left,
        Right,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Left => "Left",
                Self::Right => "Right",
            }
        }
    }

    #[test]
    fn typed_decision_declares_parameter_kinds() {
        let decision = Decision::new(|_n: i64, _label: String, _ids: Vec<u32>| TestState::Left);

        assert_eq!(decision.params(), &[Kind::Int, Kind::Text, Kind::Seq]);
        assert_eq!(decision.arity(), 3);
    }

    #[test]
    fn nullary_decision_has_no_parameters() {
        let decision = Decision::new(|| TestState::Right);

        assert!(decision.params().is_empty());
        assert_eq!(decision.call(vec![]), Ok(Value::State(TestState::Right)));
    }

    #[test]
    fn typed_call_converts_arguments_in_order() {
        let decision = Decision::new(|a: i64, b: i64| {
            if a < b {
                TestState::Left
            } else {
                TestState::Right
            }
        });

        assert_eq!(
            decision.call(vec![Value::Int(1), Value::Int(2)]),
            Ok(Value::State(TestState::Left))
        );
        assert_eq!(
            decision.call(vec![Value::Int(2), Value::Int(1)]),
            Ok(Value::State(TestState::Right))
        );
    }

    #[test]
    fn dynamic_decision_keeps_declared_params() {
        let decision = Decision::dynamic(vec![Kind::Text], |_args: &[Value<TestState>]| {
            Value::Bool(true)
        });

        assert_eq!(decision.params(), &[Kind::Text]);
        assert_eq!(
            decision.call(vec![Value::Text("x".into())]),
            Ok(Value::Bool(true))
        );
    }

    #[test]
    fn clone_shares_the_callable() {
        let decision = Decision::new(|| TestState::Left);
        let cloned = decision.clone();

        assert!(Arc::ptr_eq(&decision.call, &cloned.call));
        assert_eq!(format!("{:?}", cloned), "Decision { params: [], .. }");
    }
}
