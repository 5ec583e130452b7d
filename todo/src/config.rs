//! Configuration for the todomvc shell.
//!
//! Loads configuration from environment variables with sensible defaults.

use crate::route::Route;
use crate::types::TodoState;
use serde::{Deserialize, Serialize};
use std::env;
use todomvc_runtime::StoreConfig;

/// Default `RUST_LOG` filter
pub const DEFAULT_LOG_FILTER: &str = "todomvc=info,todomvc_runtime=info";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Start with the two sample items (`TODOMVC_SEED`, default `true`)
    pub seed: bool,
    /// Fragment selected at startup (`TODOMVC_ROUTE`, default `#/`)
    pub initial_route: String,
    /// Feedback actions allowed per dispatched action (`TODOMVC_MAX_FEEDBACK`, default 64)
    pub max_feedback_actions: usize,
    /// Log filter (`RUST_LOG`)
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: true,
            initial_route: Route::All.href().to_string(),
            max_feedback_actions: StoreConfig::default().max_feedback_actions,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Unparsable values fall back to their defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            seed: lookup("TODOMVC_SEED")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.seed),
            initial_route: lookup("TODOMVC_ROUTE").unwrap_or(defaults.initial_route),
            max_feedback_actions: lookup("TODOMVC_MAX_FEEDBACK")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.max_feedback_actions),
            log_filter: lookup("RUST_LOG").unwrap_or(defaults.log_filter),
        }
    }

    /// Runtime settings for the store
    #[must_use]
    pub fn store_config(&self) -> StoreConfig {
        StoreConfig::default().with_max_feedback_actions(self.max_feedback_actions)
    }

    /// State the store starts from
    #[must_use]
    pub fn initial_state(&self) -> TodoState {
        let mut state = if self.seed {
            TodoState::seeded()
        } else {
            TodoState::new()
        };
        state.route = Route::from_fragment(&self.initial_route);
        state
    }
}
