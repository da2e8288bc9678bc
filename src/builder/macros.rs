//! Macros for ergonomic state machine construction.

/// Generate `State` and decision-argument implementations for simple enums.
///
/// Variants listed under `reserved` are treated as the empty value and
/// rejected by the table and the decision engine.
///
/// # Example
///
/// ```
/// use nfa::core::State;
/// use nfa::state_enum;
///
/// state_enum! {
///     pub enum WorkflowState {
///         Unset,
///         Start,
///         Processing,
///         Done,
///     }
///     reserved: [Unset]
/// }
///
/// assert_eq!(WorkflowState::Processing.name(), "Processing");
/// assert!(WorkflowState::Unset.is_reserved());
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }

        $(reserved: [$($reserved:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            #[allow(unreachable_patterns)]
            fn is_reserved(&self) -> bool {
                match self {
                    $($(Self::$reserved => true,)*)?
                    _ => false,
                }
            }
        }

        $crate::impl_state_arg!($name);
    };
}

/// Generate `Event` implementations for simple enums.
///
/// # Example
///
/// ```
/// use nfa::core::Event;
/// use nfa::event_enum;
///
/// event_enum! {
///     pub enum Signal {
///         Start,
///         Finish,
///     }
/// }
///
/// assert_eq!(Signal::Finish.name(), "Finish");
/// assert!(!Signal::Start.is_reserved());
/// ```
#[macro_export]
macro_rules! event_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }

        $(reserved: [$($reserved:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::Event for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            #[allow(unreachable_patterns)]
            fn is_reserved(&self) -> bool {
                match self {
                    $($(Self::$reserved => true,)*)?
                    _ => false,
                }
            }
        }
    };
}

/// Let a hand-written `State` type appear as a decision parameter and be
/// converted into a `Value`.
///
/// `state_enum!` already does this; use the macro directly when the state
/// type implements `State` by hand.
///
/// # Example
///
/// ```
/// use nfa::core::{State, Value};
/// use nfa::decision::{invoke, Decision};
/// use nfa::impl_state_arg;
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug)]
/// struct Stage(&'static str);
///
/// impl State for Stage {
///     fn name(&self) -> &str {
///         self.0
///     }
///
///     fn is_reserved(&self) -> bool {
///         self.0.is_empty()
///     }
/// }
///
/// impl_state_arg!(Stage);
///
/// let echo = Decision::new(|next: Stage| next);
/// assert_eq!(invoke(&echo, vec![Value::from(Stage("Done"))]), Ok(Stage("Done")));
/// ```
#[macro_export]
macro_rules! impl_state_arg {
    ($ty:ty) => {
        impl $crate::decision::Arg<$ty> for $ty {
            const KIND: $crate::core::Kind = $crate::core::Kind::State;

            fn from_value(
                value: $crate::core::Value<$ty>,
            ) -> ::core::result::Result<Self, $crate::decision::ArgError> {
                match value {
                    $crate::core::Value::State(state) => ::core::result::Result::Ok(state),
                    other => ::core::result::Result::Err($crate::decision::ArgError::mismatch(
                        $crate::core::Kind::State,
                        other.kind(),
                    )),
                }
            }
        }

        impl ::core::convert::From<$ty> for $crate::core::Value<$ty> {
            fn from(state: $ty) -> Self {
                $crate::core::Value::State(state)
            }
        }
    };
}

/// Build the argument list for `Machine::fire`.
///
/// Each expression is converted with `Value::from`.
///
/// # Example
///
/// ```
/// use nfa::core::Value;
/// use nfa::{args, state_enum};
///
/// state_enum! {
///     enum Phase {
///         A,
///         B,
///     }
/// }
///
/// let list: Vec<Value<Phase>> = args![true, 3i64, "tag", Phase::B];
/// assert_eq!(list.len(), 4);
///
/// let none: Vec<Value<Phase>> = args![];
/// assert!(none.is_empty());
/// ```
#[macro_export]
macro_rules! args {
    () => {
        ::std::vec::Vec::new()
    };
    ($($arg:expr),+ $(,)?) => {
        ::std::vec![$($crate::core::Value::from($arg)),+]
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{Event, Kind, State, Value};
    use crate::decision::Arg;

    state_enum! {
        enum TestState {
            Unset,
            Initial,
            Processing,
            Complete,
        }
        reserved: [Unset]
    }

    event_enum! {
        enum TestEvent {
            Go,
            Stop,
        }
    }

    #[test]
    fn state_enum_macro_generates_trait() {
        assert_eq!(TestState::Initial.name(), "Initial");
        assert!(!TestState::Initial.is_reserved());
        assert!(!TestState::Complete.is_reserved());
        assert!(TestState::Unset.is_reserved());
    }

    #[test]
    fn state_enum_generates_argument_glue() {
        assert_eq!(<TestState as Arg<TestState>>::KIND, Kind::State);
        assert_eq!(
            <TestState as Arg<TestState>>::from_value(Value::State(TestState::Processing)),
            Ok(TestState::Processing)
        );
        let rejected = <TestState as Arg<TestState>>::from_value(Value::Bool(true));
        assert!(rejected.is_err());

        let value: Value<TestState> = TestState::Complete.into();
        assert_eq!(value.kind(), Kind::State);
    }

    #[test]
    fn event_enum_macro_generates_trait() {
        assert_eq!(TestEvent::Go.name(), "Go");
        assert_eq!(TestEvent::Stop.name(), "Stop");
        assert!(!TestEvent::Go.is_reserved());
    }

    #[test]
    fn state_enum_supports_visibility() {
        state_enum! {
            pub enum PublicState {
                A,
                B,
            }
        }

        let _state = PublicState::A;
        assert!(!PublicState::B.is_reserved());
    }

    #[test]
    fn args_macro_converts_each_expression() {
        let list: Vec<Value<TestState>> = args![false, 2i64, 0.5, "x", TestState::Initial];

        let kinds: Vec<Kind> = list.iter().map(Value::kind).collect();
        assert_eq!(
            kinds,
            vec![Kind::Bool, Kind::Int, Kind::Float, Kind::Text, Kind::State]
        );
    }

    #[test]
    fn args_macro_accepts_sequences() {
        let list: Vec<Value<TestState>> = args![vec![1i64, 2, 3]];

        assert_eq!(list[0].kind(), Kind::Seq);
    }
}
