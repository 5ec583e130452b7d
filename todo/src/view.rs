//! Read model handed to the rendering layer.
//!
//! A [`ViewModel`] is rebuilt from [`TodoState`] after every change. It
//! carries everything the page template needs, already filtered, sorted
//! and counted.

use crate::route::Route;
use crate::types::{TodoId, TodoState};
use serde::Serialize;
use std::fmt::Write as _;

/// One row of the todo list
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TodoView {
    /// Item id
    pub id: TodoId,
    /// Item label
    pub label: String,
    /// Checkbox state
    pub completed: bool,
    /// Whether the row shows the edit field
    pub editing: bool,
}

/// One link of the filter bar
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FilterLink {
    /// Route the link selects
    pub route: Route,
    /// Link text
    pub label: &'static str,
    /// Link target
    pub href: &'static str,
    /// Whether this is the current route
    pub selected: bool,
}

/// Everything the page shows
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ViewModel {
    /// Visible rows, newest first
    pub todos: Vec<TodoView>,
    /// Footer counter text
    pub count_summary: String,
    /// Items not yet completed
    pub active_count: usize,
    /// Completed items
    pub completed_count: usize,
    /// All items
    pub total_count: usize,
    /// Current filter
    pub route: Route,
    /// Filter bar links
    pub filters: Vec<FilterLink>,
    /// Contents of the new-todo input
    pub draft: String,
    /// State of the "Mark all as complete" checkbox
    pub all_completed: bool,
    /// The list and footer are hidden when there are no items
    pub show_main: bool,
    /// The clear button is hidden when nothing is completed
    pub show_clear_completed: bool,
}

impl ViewModel {
    /// Builds the view from current state
    #[must_use]
    pub fn from_state(state: &TodoState) -> Self {
        let todos = state
            .visible()
            .into_iter()
            .map(|todo| TodoView {
                id: todo.id,
                label: todo.label.clone(),
                completed: todo.completed,
                editing: state.editing == Some(todo.id),
            })
            .collect();

        let filters = Route::ALL
            .into_iter()
            .map(|route| FilterLink {
                route,
                label: route.label(),
                href: route.href(),
                selected: route == state.route,
            })
            .collect();

        let completed_count = state.completed_count();

        Self {
            todos,
            count_summary: state.count_summary(),
            active_count: state.active_count(),
            completed_count,
            total_count: state.total_count(),
            route: state.route,
            filters,
            draft: state.draft.clone(),
            all_completed: state.all_completed(),
            show_main: !state.is_empty(),
            show_clear_completed: completed_count > 0,
        }
    }

    /// Plain-text rendering of the page, for terminals
    #[must_use]
    pub fn render_text(&self) -> String {
        let mut out = String::from("todos\n");
        if !self.draft.is_empty() {
            let _ = writeln!(out, "> {}", self.draft);
        }

        if !self.show_main {
            return out;
        }

        let toggle_all = if self.all_completed { "[x]" } else { "[ ]" };
        let _ = writeln!(out, "{toggle_all} Mark all as complete");
        for todo in &self.todos {
            let mark = if todo.completed { "[x]" } else { "[ ]" };
            let editing = if todo.editing { " (editing)" } else { "" };
            let _ = writeln!(out, "  {mark} {:>3}  {}{editing}", todo.id, todo.label);
        }

        let filters: Vec<String> = self
            .filters
            .iter()
            .map(|link| {
                if link.selected {
                    format!("[{}]", link.label)
                } else {
                    link.label.to_string()
                }
            })
            .collect();
        let _ = write!(out, "{}  |  {}", self.count_summary, filters.join(" "));
        if self.show_clear_completed {
            out.push_str("  |  Clear completed");
        }
        out.push('\n');
        out
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn empty_state_hides_main_and_footer() {
        let view = ViewModel::from_state(&TodoState::new());

        assert!(!view.show_main);
        assert!(!view.show_clear_completed);
        assert!(!view.all_completed);
        assert_eq!(view.count_summary, "0 active");
        assert_eq!(view.render_text(), "todos\n");
    }

    #[test]
    fn seeded_view() {
        let view = ViewModel::from_state(&TodoState::seeded());

        assert!(view.show_main);
        assert!(view.show_clear_completed);
        assert_eq!(view.count_summary, "1 active / 2 total");
        assert_eq!(view.total_count, 2);
        let labels: Vec<&str> = view.todos.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec!["Taste JavaScript", "Buy a unicorn"]);
    }

    #[test]
    fn selected_filter_follows_route() {
        let mut state = TodoState::seeded();
        state.route = Route::Completed;
        let view = ViewModel::from_state(&state);

        let selected: Vec<Route> = view
            .filters
            .iter()
            .filter(|link| link.selected)
            .map(|link| link.route)
            .collect();
        assert_eq!(selected, vec![Route::Completed]);
        assert_eq!(view.todos.len(), 1);
        assert_eq!(view.filters[1].href, "#/active");
    }

    #[test]
    fn editing_row_is_flagged() {
        let mut state = TodoState::seeded();
        state.editing = Some(TodoId::new(0));
        let view = ViewModel::from_state(&state);

        let editing: Vec<TodoId> = view.todos.iter().filter(|t| t.editing).map(|t| t.id).collect();
        assert_eq!(editing, vec![TodoId::new(0)]);
    }

    #[test]
    fn render_text_lists_newest_first() {
        let text = ViewModel::from_state(&TodoState::seeded()).render_text();

        let unicorn = text.find("Buy a unicorn").unwrap();
        let javascript = text.find("Taste JavaScript").unwrap();
        assert!(javascript < unicorn);
        assert!(text.contains("1 active / 2 total  |  [All] Active Completed  |  Clear completed"));
    }

    #[test]
    fn serializes_for_renderers() {
        let json = serde_json::to_value(ViewModel::from_state(&TodoState::seeded())).unwrap();

        assert_eq!(json["route"], "all");
        assert_eq!(json["todos"][0]["id"], 1);
        assert_eq!(json["todos"][0]["completed"], true);
        assert_eq!(json["filters"][2]["href"], "#/completed");
    }
}
