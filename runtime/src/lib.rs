//! # TodoMVC Runtime
//!
//! Runtime implementation for the TodoMVC reducer architecture.
//!
//! This crate provides the [`Store`] that owns state, runs the reducer and
//! executes the effects it returns.
//!
//! ## Core Components
//!
//! - **Store**: Owns the canonical state and serializes every mutation
//! - **Feedback loop**: Actions produced by effects are fed back into the
//!   reducer before `send` returns
//! - **Change notification**: A revision counter the rendering layer can
//!   watch to know when to re-read derived views
//!
//! ## Example
//!
//! ```ignore
//! use todomvc_runtime::Store;
//!
//! let store = Store::new(initial_state, my_reducer, environment);
//!
//! // Send an action
//! store.send(Action::DoSomething).await?;
//!
//! // Read state
//! let value = store.state(|s| s.some_field).await;
//! ```

use std::collections::VecDeque;
use std::fmt::Debug;
use std::sync::Arc;
use todomvc_core::{action::Action, reducer::Reducer};
use tokio::sync::RwLock;

/// Error types for the Store runtime
pub mod error {
    use thiserror::Error;

    /// Errors that can occur during Store operations
    #[derive(Error, Debug, Clone, PartialEq, Eq)]
    pub enum StoreError {
        /// A single `send` produced more feedback actions than allowed
        ///
        /// The remaining queued actions are dropped. State changes made
        /// before the limit was hit are kept.
        #[error("Feedback limit of {limit} actions exceeded")]
        FeedbackLimitExceeded {
            /// The configured limit
            limit: usize,
        },
    }
}

pub use error::StoreError;

/// Configuration for Store instances
///
/// # Example
///
/// ```
/// use todomvc_runtime::StoreConfig;
///
/// let config = StoreConfig::default()
///     .with_max_feedback_actions(8)
///     .with_broadcast_capacity(32);
///
/// assert_eq!(config.max_feedback_actions, 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreConfig {
    /// Maximum number of feedback actions a single `send` may produce
    pub max_feedback_actions: usize,
    /// Capacity of the feedback action broadcast channel
    pub broadcast_capacity: usize,
}

impl StoreConfig {
    /// Create a new configuration with custom values
    #[must_use]
    pub const fn new(max_feedback_actions: usize, broadcast_capacity: usize) -> Self {
        Self {
            max_feedback_actions,
            broadcast_capacity,
        }
    }

    /// Set the feedback action limit
    #[must_use]
    pub const fn with_max_feedback_actions(mut self, limit: usize) -> Self {
        self.max_feedback_actions = limit;
        self
    }

    /// Set the broadcast channel capacity
    #[must_use]
    pub const fn with_broadcast_capacity(mut self, capacity: usize) -> Self {
        self.broadcast_capacity = capacity;
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            max_feedback_actions: 64,
            broadcast_capacity: 16,
        }
    }
}

/// Store module - The runtime for reducers
pub mod store {
    use super::{Action, Arc, Debug, Reducer, RwLock, StoreConfig, StoreError, VecDeque};
    use tokio::sync::{broadcast, watch};

    /// The Store - runtime coordinator for a reducer
    ///
    /// The Store manages:
    /// 1. State (behind `RwLock`, shared by every clone of the store)
    /// 2. Reducer (business logic)
    /// 3. Environment (injected dependencies)
    /// 4. Effect execution (synchronous feedback loop)
    /// 5. Change notification (revision watch and action broadcast)
    ///
    /// # Type Parameters
    ///
    /// - `S`: State type
    /// - `A`: Action type
    /// - `E`: Environment type
    /// - `R`: Reducer implementation
    pub struct Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        state: Arc<RwLock<S>>,
        reducer: Arc<R>,
        environment: Arc<E>,
        config: StoreConfig,
        /// Bumped once per processed `send`.
        revision: Arc<watch::Sender<u64>>,
        /// Actions produced by effects, for observers.
        action_broadcast: broadcast::Sender<A>,
    }

    impl<S, A, E, R> Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
        A: Action + Clone + Debug,
    {
        /// Create a new store with initial state, reducer, and environment
        ///
        /// Uses [`StoreConfig::default`].
        #[must_use]
        pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
            Self::with_config(initial_state, reducer, environment, StoreConfig::default())
        }

        /// Create a new store with a custom configuration
        #[must_use]
        pub fn with_config(initial_state: S, reducer: R, environment: E, config: StoreConfig) -> Self {
            // broadcast::channel panics on a zero capacity.
            let (action_broadcast, _) = broadcast::channel(config.broadcast_capacity.max(1));
            let (revision, _) = watch::channel(0);

            Self {
                state: Arc::new(RwLock::new(initial_state)),
                reducer: Arc::new(reducer),
                environment: Arc::new(environment),
                config,
                revision: Arc::new(revision),
                action_broadcast,
            }
        }

        /// The configuration this store was built with
        #[must_use]
        pub const fn config(&self) -> &StoreConfig {
            &self.config
        }

        /// Send an action to the store
        ///
        /// Runs the reducer, then every action fed back by its effects (and
        /// theirs, FIFO) while holding the write lock, so one `send` is one
        /// atomic step for readers. Returns the new revision.
        ///
        /// # Errors
        ///
        /// Returns [`StoreError::FeedbackLimitExceeded`] if the effects of this
        /// action fed back more than `max_feedback_actions` actions. The
        /// revision is still bumped since state may have changed.
        #[tracing::instrument(skip(self, action), fields(action = action.name()), name = "store_send")]
        pub async fn send(&self, action: A) -> Result<u64, StoreError> {
            self.dispatch(std::iter::once(action)).await
        }

        /// Send several actions as one step
        ///
        /// Each action runs to completion in order under a single write lock
        /// and the revision is bumped once for the whole batch, so observers
        /// never see the intermediate states of a multi-action gesture.
        ///
        /// # Errors
        ///
        /// Stops at the first [`StoreError::FeedbackLimitExceeded`]; later
        /// actions in the batch are not run. The revision is still bumped.
        #[tracing::instrument(skip_all, name = "store_send_batch")]
        pub async fn send_batch<I>(&self, actions: I) -> Result<u64, StoreError>
        where
            I: IntoIterator<Item = A>,
        {
            self.dispatch(actions).await
        }

        async fn dispatch<I>(&self, actions: I) -> Result<u64, StoreError>
        where
            I: IntoIterator<Item = A>,
        {
            let mut state = self.state.write().await;
            tracing::trace!("Acquired write lock on state");

            let result = actions.into_iter().try_for_each(|action| {
                tracing::debug!(action = action.name(), "Processing action");
                metrics::counter!("store.actions.total").increment(1);
                self.run_to_completion(&mut state, action)
            });

            // Bumped under the write lock so revisions follow state order
            // and each dispatch observes its own value.
            let mut revision = 0;
            self.revision.send_modify(|current| {
                *current += 1;
                revision = *current;
            });
            drop(state);
            tracing::debug!(revision, "Action processing completed");

            result.map(|()| revision)
        }

        fn run_to_completion(&self, state: &mut S, action: A) -> Result<(), StoreError> {
            let limit = self.config.max_feedback_actions;
            let mut queue = VecDeque::from([action]);
            let mut fed_back = 0usize;

            while let Some(action) = queue.pop_front() {
                let span = tracing::debug_span!("reducer_execution", action = action.name());
                let _enter = span.enter();

                let start = std::time::Instant::now();
                let effects = self.reducer.reduce(state, action, &self.environment);
                metrics::histogram!("store.reducer.duration_seconds")
                    .record(start.elapsed().as_secs_f64());

                tracing::trace!("Reducer completed, returned {} effects", effects.len());

                for effect in effects {
                    for next in effect.into_actions() {
                        if fed_back >= limit {
                            tracing::warn!(limit, dropped = queue.len() + 1, "Feedback limit exceeded");
                            return Err(StoreError::FeedbackLimitExceeded { limit });
                        }
                        fed_back += 1;
                        metrics::counter!("store.feedback.total").increment(1);
                        tracing::trace!(next = next.name(), "Feeding action back into reducer");

                        // No subscribers is fine.
                        let _ = self.action_broadcast.send(next.clone());
                        queue.push_back(next);
                    }
                }
            }

            Ok(())
        }

        /// Read current state via a closure
        ///
        /// ```ignore
        /// let total = store.state(|s| s.total_count()).await;
        /// ```
        pub async fn state<F, T>(&self, f: F) -> T
        where
            F: FnOnce(&S) -> T,
        {
            let state = self.state.read().await;
            f(&state)
        }

        /// Current revision (number of processed `send` calls)
        #[must_use]
        pub fn revision(&self) -> u64 {
            *self.revision.borrow()
        }

        /// Watch the revision counter
        ///
        /// The receiver wakes after every `send`. Renderers re-read derived
        /// views from [`Store::state`] when it changes.
        #[must_use]
        pub fn subscribe(&self) -> watch::Receiver<u64> {
            self.revision.subscribe()
        }

        /// Subscribe to actions produced by effects
        ///
        /// Only fed-back actions are broadcast, not the action passed to
        /// `send`. Subscribe before sending to avoid missing any.
        #[must_use]
        pub fn subscribe_actions(&self) -> broadcast::Receiver<A> {
            self.action_broadcast.subscribe()
        }
    }

    impl<S, A, E, R> Clone for Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        fn clone(&self) -> Self {
            Self {
                state: Arc::clone(&self.state),
                reducer: Arc::clone(&self.reducer),
                environment: Arc::clone(&self.environment),
                config: self.config,
                revision: Arc::clone(&self.revision),
                action_broadcast: self.action_broadcast.clone(),
            }
        }
    }
}

pub use store::Store;
