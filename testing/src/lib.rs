//! # TodoMVC Testing
//!
//! Testing utilities and helpers for the TodoMVC reducer architecture.
//!
//! This crate provides:
//! - [`ReducerTest`], a Given-When-Then harness for reducers
//! - Effect assertion helpers
//! - Log capture for tests
//!
//! ## Example
//!
//! ```ignore
//! use todomvc_testing::{assertions, ReducerTest};
//!
//! ReducerTest::new(TodoReducer::new())
//!     .with_env(TodoEnvironment)
//!     .given_state(TodoState::new())
//!     .when_action(TodoAction::AddTodo { label: "Buy milk".into() })
//!     .then_state(|state| assert_eq!(state.total_count(), 1))
//!     .then_effects(assertions::assert_no_effects)
//!     .run();
//! ```


pub use reducer_test::{ReducerTest, assertions};

/// Route `tracing` output through the test harness
///
/// Honours `RUST_LOG`. Safe to call from every test; only the first call
/// installs a subscriber.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
