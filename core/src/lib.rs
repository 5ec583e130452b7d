//! # TodoMVC Core
//!
//! Core traits and types for the TodoMVC reducer architecture.
//!
//! ## Core Concepts
//!
//! - **State**: Canonical domain state (the to-do collection and its UI fields)
//! - **Action**: Every input to a reducer (user intents and external notifications)
//! - **Reducer**: Pure function `(State, Action, Environment) → (State, Effects)`
//! - **Effect**: Description of follow-up work, executed by the runtime
//! - **Environment**: Injected dependencies
//!
//! Derived views (filtered lists, counts) are never stored. They are
//! recomputed from state on read.
//!
//! ## Example
//!
//! ```
//! use todomvc_core::{effect::Effect, reducer::Reducer, smallvec, SmallVec};
//!
//! #[derive(Clone, Debug, Default)]
//! struct CounterState {
//!     count: i64,
//! }
//!
//! #[derive(Clone, Debug)]
//! enum CounterAction {
//!     Increment,
//!     IncrementTwice,
//! }
//!
//! struct CounterReducer;
//!
//! impl Reducer for CounterReducer {
//!     type State = CounterState;
//!     type Action = CounterAction;
//!     type Environment = ();
//!
//!     fn reduce(
//!         &self,
//!         state: &mut CounterState,
//!         action: CounterAction,
//!         _env: &(),
//!     ) -> SmallVec<[Effect<CounterAction>; 4]> {
//!         match action {
//!             CounterAction::Increment => {
//!                 state.count += 1;
//!                 SmallVec::new()
//!             }
//!             CounterAction::IncrementTwice => smallvec![
//!                 Effect::send(CounterAction::Increment),
//!                 Effect::send(CounterAction::Increment),
//!             ],
//!         }
//!     }
//! }
//!
//! let mut state = CounterState::default();
//! let effects = CounterReducer.reduce(&mut state, CounterAction::IncrementTwice, &());
//! assert_eq!(effects.len(), 2);
//! ```

pub use smallvec::{SmallVec, smallvec};

/// Action module - classification shared by all action enums
///
/// Implemented by `#[derive(Action)]` from `todomvc-macros`. The runtime
/// only needs the action name for logging; the command/event split
/// documents where an action comes from (a user intent versus a
/// notification from an external watcher).
pub mod action {
    /// Common behaviour of reducer inputs
    pub trait Action {
        /// Variant name, used as a structured logging field
        fn name(&self) -> &'static str;

        /// Returns true if this action is a user intent
        fn is_command(&self) -> bool;

        /// Returns true if this action is a notification from outside the store
        fn is_event(&self) -> bool;
    }
}

/// Reducer module - The core trait for business logic
///
/// Reducers are pure functions: `(State, Action, Environment) → (State, Effects)`
///
/// They contain all business logic and are deterministic and testable.
pub mod reducer {
    use super::SmallVec;
    use super::effect::Effect;

    /// The Reducer trait - core abstraction for business logic
    ///
    /// # Type Parameters
    ///
    /// - `State`: The domain state this reducer operates on
    /// - `Action`: The action type this reducer processes
    /// - `Environment`: The injected dependencies this reducer needs
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The environment type with injected dependencies
        type Environment;

        /// Reduce an action into state changes and effects
        ///
        /// This is a pure function that:
        /// 1. Updates state in place
        /// 2. Returns effect descriptions to be executed by the runtime
        ///
        /// Most actions produce no effects, hence the inline capacity.
        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            env: &Self::Environment,
        ) -> SmallVec<[Effect<Self::Action>; 4]>;
    }
}

/// Effect module - Side effect descriptions
///
/// Effects are values returned from reducers. The runtime executes them
/// after the reducer returns. Every effect here is synchronous: the only
/// follow-up work in this system is feeding another action back into the
/// same reducer.
pub mod effect {
    /// Effect type - describes follow-up work to be executed
    ///
    /// # Type Parameters
    ///
    /// - `Action`: The action type that effects can produce (feedback loop)
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub enum Effect<Action> {
        /// No-op effect
        None,

        /// Feed an action back into the reducer
        Send(Box<Action>),

        /// Run effects in order
        Sequential(Vec<Effect<Action>>),
    }

    impl<Action> Effect<Action> {
        /// Feed `action` back into the reducer
        #[must_use]
        pub fn send(action: Action) -> Self {
            Self::Send(Box::new(action))
        }

        /// Chain effects to run sequentially
        #[must_use]
        pub const fn chain(effects: Vec<Self>) -> Self {
            Self::Sequential(effects)
        }

        /// Returns true if executing this effect does nothing
        #[must_use]
        pub fn is_none(&self) -> bool {
            match self {
                Self::None => true,
                Self::Send(_) => false,
                Self::Sequential(effects) => effects.iter().all(Self::is_none),
            }
        }

        /// Flattens the effect tree into the actions it feeds back, in
        /// execution order
        #[must_use]
        pub fn into_actions(self) -> Vec<Action> {
            let mut actions = Vec::new();
            self.collect_into(&mut actions);
            actions
        }

        fn collect_into(self, actions: &mut Vec<Action>) {
            match self {
                Self::None => {},
                Self::Send(action) => actions.push(*action),
                Self::Sequential(effects) => {
                    for effect in effects {
                        effect.collect_into(actions);
                    }
                },
            }
        }
    }
}
