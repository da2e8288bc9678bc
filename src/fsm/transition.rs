//! Transition descriptors.

use crate::core::{Kind, State, Value};
use crate::decision::{Decision, IntoDecision};

/// How the next state is determined for a `(state, event)` pair.
///
/// Either fixed at registration time (`Direct`) or computed at fire time by
/// a [`Decision`]. There is no "neither" case.
#[derive(Clone, Debug)]
pub enum Transition<S: State> {
    /// The next state is fixed.
    Direct(S),

    /// The next state is computed from fire-time arguments.
    Decision(Decision<S>),
}

impl<S: State> Transition<S> {
    /// A transition that always moves to `target`.
    pub fn direct(target: S) -> Self {
        Transition::Direct(target)
    }

    /// A transition whose target is computed by a typed function.
    ///
    /// # Example
    ///
    /// ```rust
    /// use nfa::fsm::Transition;
    /// use nfa::state_enum;
    ///
    /// state_enum! {
    ///     enum Job {
    ///         Complete,
    ///         Error,
    ///     }
    /// }
    ///
    /// let finish = Transition::decision(|ok: bool| if ok { Job::Complete } else { Job::Error });
    /// assert!(!finish.is_direct());
    /// ```
    pub fn decision<F, Args>(f: F) -> Self
    where
        F: IntoDecision<S, Args>,
    {
        Transition::Decision(Decision::new(f))
    }

    /// A transition computed by a dynamic decision over raw values.
    pub fn dynamic<F>(params: Vec<Kind>, f: F) -> Self
    where
        F: Fn(&[Value<S>]) -> Value<S> + Send + Sync + 'static,
    {
        Transition::Decision(Decision::dynamic(params, f))
    }

    pub fn is_direct(&self) -> bool {
        matches!(self, Transition::Direct(_))
    }
}

impl<S: State> From<Decision<S>> for Transition<S> {
    fn from(decision: Decision<S>) -> Self {
        Transition::Decision(decision)
    }
}
