//! TodoMVC: a to-do list with a client-side route filter.
//!
//! The whole application is a [`TodoState`] driven by a [`TodoReducer`]
//! inside a `todomvc_runtime::Store`:
//!
//! - Store operations (add, destroy, toggle, edit, clear completed, toggle all)
//! - Form and edit boundaries that feed store operations back through the store
//! - A route filter selected by the URL fragment
//! - A [`ViewModel`] read model rebuilt on every change
//!
//! # Quick Start
//!
//! ```no_run
//! use todomvc::{TodoAction, TodoEnvironment, TodoReducer, TodoState, ViewModel};
//! use todomvc_runtime::Store;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = Store::new(TodoState::seeded(), TodoReducer::new(), TodoEnvironment);
//!
//! store.send(TodoAction::AddTodo { label: "Buy milk".to_string() }).await?;
//! store.send(TodoAction::RouteChanged { fragment: "#/active".to_string() }).await?;
//!
//! let view = store.state(ViewModel::from_state).await;
//! println!("{}", view.count_summary);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod reducer;
pub mod route;
pub mod shell;
pub mod types;
pub mod view;

// Re-export commonly used types
pub use config::AppConfig;
pub use reducer::{TodoEnvironment, TodoReducer};
pub use route::{Route, RouteError};
pub use types::{TodoAction, TodoId, TodoItem, TodoState};
pub use view::ViewModel;

/// The store type the application runs on
pub type TodoStore = todomvc_runtime::Store<TodoState, TodoAction, TodoEnvironment, TodoReducer>;
