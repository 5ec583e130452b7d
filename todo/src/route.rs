//! URL fragment routing.
//!
//! Maps `#/`, `#/active` and `#/completed` to the filter the display list
//! applies before sorting.

use crate::types::TodoItem;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Errors from strict route parsing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// The fragment names no known filter
    #[error("Unknown route: {0:?}")]
    Unknown(String),
}

/// A display filter, selected by the URL fragment
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    /// Every item
    #[default]
    All,
    /// Items not yet completed
    Active,
    /// Completed items
    Completed,
}

impl Route {
    /// Every route, in the order the filter links are shown
    pub const ALL: [Self; 3] = [Self::All, Self::Active, Self::Completed];

    /// Route name as used in the fragment
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }

    /// Text of the filter link
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Active => "Active",
            Self::Completed => "Completed",
        }
    }

    /// Canonical fragment for the filter link
    #[must_use]
    pub const fn href(self) -> &'static str {
        match self {
            Self::All => "#/",
            Self::Active => "#/active",
            Self::Completed => "#/completed",
        }
    }

    /// The route's predicate
    #[must_use]
    pub const fn matches(self, item: &TodoItem) -> bool {
        match self {
            Self::All => true,
            Self::Active => !item.completed,
            Self::Completed => item.completed,
        }
    }

    /// Keeps the items this route selects
    pub fn filter<'a, I>(self, items: I) -> impl Iterator<Item = &'a TodoItem>
    where
        I: IntoIterator<Item = &'a TodoItem>,
    {
        items.into_iter().filter(move |item| self.matches(item))
    }

    /// Resolves a fragment reported by the location watcher
    ///
    /// Unknown fragments select [`Route::All`] so the list never renders
    /// empty because of a mistyped URL.
    #[must_use]
    pub fn from_fragment(fragment: &str) -> Self {
        fragment.parse().unwrap_or_else(|error: RouteError| {
            tracing::warn!(%error, "Falling back to the 'all' route");
            Self::All
        })
    }
}

impl FromStr for Route {
    type Err = RouteError;

    /// Accepts `""`, `all`, `active` and `completed`, optionally behind `#`
    /// and/or `/`, with an optional trailing `/`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        let name = name.strip_prefix('#').unwrap_or(name);
        let name = name.strip_prefix('/').unwrap_or(name);
        let name = name.strip_suffix('/').unwrap_or(name);

        match name {
            "" | "all" => Ok(Self::All),
            "active" => Ok(Self::Active),
            "completed" => Ok(Self::Completed),
            _ => Err(RouteError::Unknown(s.to_string())),
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TodoId;

    fn item(completed: bool) -> TodoItem {
        TodoItem {
            id: TodoId::new(0),
            label: String::new(),
            completed,
        }
    }

    #[test]
    fn predicates() {
        assert!(Route::All.matches(&item(false)));
        assert!(Route::All.matches(&item(true)));
        assert!(Route::Active.matches(&item(false)));
        assert!(!Route::Active.matches(&item(true)));
        assert!(Route::Completed.matches(&item(true)));
        assert!(!Route::Completed.matches(&item(false)));
    }

    #[test]
    fn parses_every_spelling() {
        for fragment in ["", "#", "#/", "/", "all", "#/all", "/all/"] {
            assert_eq!(fragment.parse(), Ok(Route::All), "{fragment:?}");
        }
        for fragment in ["active", "#/active", "/active", "#/active/", "#active"] {
            assert_eq!(fragment.parse(), Ok(Route::Active), "{fragment:?}");
        }
        for fragment in ["completed", "#/completed", " #/completed "] {
            assert_eq!(fragment.parse(), Ok(Route::Completed), "{fragment:?}");
        }
    }

    #[test]
    fn strict_parse_rejects_unknown() {
        assert_eq!(
            "#/done".parse::<Route>(),
            Err(RouteError::Unknown("#/done".to_string()))
        );
        assert!("Active".parse::<Route>().is_err());
    }

    #[test]
    fn lenient_parse_falls_back_to_all() {
        assert_eq!(Route::from_fragment("#/nope"), Route::All);
        assert_eq!(Route::from_fragment("#/completed"), Route::Completed);
    }

    #[test]
    fn hrefs_round_trip() {
        for route in Route::ALL {
            assert_eq!(route.href().parse(), Ok(route));
            assert_eq!(route.name().parse(), Ok(route));
        }
    }

    #[test]
    fn filter_keeps_matching_items() {
        let items = [item(false), item(true), item(false)];
        assert_eq!(Route::Active.filter(&items).count(), 2);
        assert_eq!(Route::Completed.filter(&items).count(), 1);
        assert_eq!(Route::All.filter(&items).count(), 3);
    }
}
