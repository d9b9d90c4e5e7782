//! Flat state machines
//!
//! A transition table keyed by `(state, event)`, used for interaction phases
//! such as drag gestures. Events with no entry for the current state are
//! ignored. Every transition taken is recorded until
//! [`StateMachine::clear_history`], so callers can inspect the path a
//! gesture took.
//!
//! States and events are caller-defined `Copy` enums.

use std::fmt;
use std::hash::Hash;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

/// One recorded transition: `(from, event, to)`
pub type Step<S, E> = (S, E, S);

/// Builder for [`StateMachine`]
pub struct StateMachineBuilder<S, E> {
    initial_state: S,
    table: FxHashMap<(S, E), S>,
}

impl<S, E> StateMachineBuilder<S, E>
where
    S: Copy + Eq + Hash,
    E: Copy + Eq + Hash,
{
    pub fn new(initial_state: S) -> Self {
        Self {
            initial_state,
            table: FxHashMap::default(),
        }
    }

    /// Add a transition. A later entry for the same `(from, event)` wins.
    pub fn on(mut self, from: S, event: E, to: S) -> Self {
        self.table.insert((from, event), to);
        self
    }

    /// Add the same transition from several states
    pub fn on_any(mut self, from: &[S], event: E, to: S) -> Self {
        for &state in from {
            self.table.insert((state, event), to);
        }
        self
    }

    pub fn build(self) -> StateMachine<S, E> {
        StateMachine {
            current_state: self.initial_state,
            table: self.table,
            history: SmallVec::new(),
        }
    }
}

/// A state machine instance
pub struct StateMachine<S, E> {
    current_state: S,
    table: FxHashMap<(S, E), S>,
    history: SmallVec<[Step<S, E>; 4]>,
}

impl<S, E> StateMachine<S, E>
where
    S: Copy + Eq + Hash,
    E: Copy + Eq + Hash,
{
    pub fn builder(initial_state: S) -> StateMachineBuilder<S, E> {
        StateMachineBuilder::new(initial_state)
    }

    pub fn current_state(&self) -> S {
        self.current_state
    }

    pub fn is_in(&self, state: S) -> bool {
        self.current_state == state
    }

    /// Transitions taken since the last [`clear_history`](Self::clear_history)
    pub fn history(&self) -> &[Step<S, E>] {
        &self.history
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// State `event` would lead to from the current state, if any
    pub fn target(&self, event: E) -> Option<S> {
        self.table.get(&(self.current_state, event)).copied()
    }

    pub fn can_send(&self, event: E) -> bool {
        self.target(event).is_some()
    }

    /// Send an event. Returns the state afterwards; an event with no
    /// transition from the current state leaves the machine where it is.
    pub fn send(&mut self, event: E) -> S {
        let Some(to_state) = self.target(event) else {
            return self.current_state;
        };
        self.history.push((self.current_state, event, to_state));
        self.current_state = to_state;
        to_state
    }
}

impl<S: fmt::Debug, E: fmt::Debug> fmt::Debug for StateMachine<S, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateMachine")
            .field("current_state", &self.current_state)
            .field("transitions", &self.table.len())
            .field("history", &self.history)
            .finish()
    }
}
