//! Domain types for the to-do list.
//!
//! [`TodoState`] is the canonical collection plus the handful of UI fields
//! the form and edit boundaries need. Everything the renderer shows (the
//! filtered list, the counts) is derived from it on read.

use crate::route::Route;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use todomvc_macros::Action;

/// Unique identifier for a todo item
///
/// Assigned from a monotonic counter, so a larger id is always a newer item.
/// Displays as its decimal value (`"0"`, `"1"`, ...).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(u64);

impl TodoId {
    /// Creates a `TodoId` from its raw value
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw value
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    // A u64 counter cannot be exhausted by one session; saturate rather
    // than overflow so the counter never panics.
    const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for TodoId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

/// A single todo item
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Unique identifier
    pub id: TodoId,
    /// Text shown in the list
    pub label: String,
    /// Whether the todo is completed
    pub completed: bool,
}

impl TodoItem {
    /// Creates a new, not yet completed, todo item
    #[must_use]
    pub const fn new(id: TodoId, label: String) -> Self {
        Self {
            id,
            label,
            completed: false,
        }
    }
}

/// State of the to-do list
///
/// The collection is private so that ids can only come from `next_id`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoState {
    todos: HashMap<TodoId, TodoItem>,
    next_id: TodoId,
    /// Filter currently selected by the URL fragment
    pub route: Route,
    /// Contents of the new-todo input
    pub draft: String,
    /// Item whose label is being edited
    pub editing: Option<TodoId>,
}

impl TodoState {
    /// Creates a new empty todo state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the startup state: one active and one completed item
    #[must_use]
    pub fn seeded() -> Self {
        let mut state = Self::new();
        state.add("Buy a unicorn");
        let tasted = state.add("Taste JavaScript");
        state.toggle(tasted);
        state
    }

    /// Adds a new active item and returns its id
    ///
    /// The label is taken as-is; empty labels are accepted.
    pub fn add(&mut self, label: impl Into<String>) -> TodoId {
        let id = self.next_id;
        self.next_id = id.next();
        self.todos.insert(id, TodoItem::new(id, label.into()));
        id
    }

    /// Removes an item. Returns false if it was not present.
    pub fn destroy(&mut self, id: TodoId) -> bool {
        if self.editing == Some(id) {
            self.editing = None;
        }
        self.todos.remove(&id).is_some()
    }

    /// Flips an item's completed flag. Returns false if it was not present.
    pub fn toggle(&mut self, id: TodoId) -> bool {
        let Some(todo) = self.todos.get_mut(&id) else {
            return false;
        };
        todo.completed = !todo.completed;
        true
    }

    /// Replaces an item's label. Returns false if it was not present.
    pub fn edit_label(&mut self, id: TodoId, label: impl Into<String>) -> bool {
        let Some(todo) = self.todos.get_mut(&id) else {
            return false;
        };
        todo.label = label.into();
        true
    }

    /// Removes every completed item and returns how many were removed
    pub fn clear_completed(&mut self) -> usize {
        let before = self.todos.len();
        self.todos.retain(|_, todo| !todo.completed);
        if self.editing.is_some_and(|id| !self.todos.contains_key(&id)) {
            self.editing = None;
        }
        before - self.todos.len()
    }

    /// Marks everything completed, or everything active if it already was
    ///
    /// Returns the completed flag now held by every item, or `None` for an
    /// empty list.
    pub fn toggle_all(&mut self) -> Option<bool> {
        if self.todos.is_empty() {
            return None;
        }
        let completed = !self.all_completed();
        for todo in self.todos.values_mut() {
            todo.completed = completed;
        }
        Some(completed)
    }

    /// The items selected by `route`, newest first
    #[must_use]
    pub fn display_list(&self, route: Route) -> Vec<&TodoItem> {
        let mut list: Vec<&TodoItem> = route.filter(self.todos.values()).collect();
        list.sort_unstable_by(|a, b| b.id.cmp(&a.id));
        list
    }

    /// The items selected by the current route, newest first
    #[must_use]
    pub fn visible(&self) -> Vec<&TodoItem> {
        self.display_list(self.route)
    }

    /// Footer text: `"{total} active"` when nothing is completed, otherwise
    /// `"{active} active / {total} total"`
    #[must_use]
    pub fn count_summary(&self) -> String {
        let total = self.total_count();
        let active = self.active_count();

        if active == total {
            format!("{total} active")
        } else {
            format!("{active} active / {total} total")
        }
    }

    /// Returns the number of items not yet completed
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.todos.values().filter(|t| !t.completed).count()
    }

    /// Returns the number of completed items
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.todos.values().filter(|t| t.completed).count()
    }

    /// Returns the number of items
    #[must_use]
    pub fn total_count(&self) -> usize {
        self.todos.len()
    }

    /// Returns true if there are no items
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Returns true if there is at least one item and all are completed
    #[must_use]
    pub fn all_completed(&self) -> bool {
        !self.todos.is_empty() && self.todos.values().all(|t| t.completed)
    }

    /// Returns a todo by ID
    #[must_use]
    pub fn get(&self, id: TodoId) -> Option<&TodoItem> {
        self.todos.get(&id)
    }

    /// Checks if a todo exists
    #[must_use]
    pub fn exists(&self, id: TodoId) -> bool {
        self.todos.contains_key(&id)
    }

    /// All items, in no particular order
    pub fn iter(&self) -> impl Iterator<Item = &TodoItem> {
        self.todos.values()
    }

    /// The id the next added item will get
    #[must_use]
    pub const fn next_id(&self) -> TodoId {
        self.next_id
    }
}

/// Actions accepted by the to-do reducer
///
/// Commands are user intents coming from the form, checkboxes and buttons.
/// Events are notifications from outside the page (the URL fragment
/// watcher).
#[derive(Action, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TodoAction {
    // ========== Store operations ==========
    /// Command: Add an item with this label
    #[command]
    AddTodo {
        /// Label of the new item
        label: String,
    },

    /// Command: Delete an item
    #[command]
    DestroyTodo {
        /// Item to delete
        id: TodoId,
    },

    /// Command: Flip an item's completed flag
    #[command]
    ToggleTodo {
        /// Item to toggle
        id: TodoId,
    },

    /// Command: Replace an item's label
    #[command]
    EditLabel {
        /// Item to relabel
        id: TodoId,
        /// New label
        label: String,
    },

    /// Command: Delete every completed item
    #[command]
    ClearCompleted,

    /// Command: "Mark all as complete" checkbox
    #[command]
    ToggleAll,

    // ========== Form boundary ==========
    /// Command: The new-todo input changed
    #[command]
    DraftChanged {
        /// Current input text
        text: String,
    },

    /// Command: The new-todo form was submitted
    #[command]
    SubmitDraft,

    // ========== Edit boundary ==========
    /// Command: Start editing an item (double click)
    #[command]
    BeginEdit {
        /// Item to edit
        id: TodoId,
    },

    /// Command: Finish editing an item (enter or blur)
    #[command]
    CommitEdit {
        /// Item being edited
        id: TodoId,
        /// Text in the edit field
        label: String,
    },

    /// Command: Abandon the current edit (escape)
    #[command]
    CancelEdit,

    // ========== Route boundary ==========
    /// Event: The URL fragment changed
    #[event]
    RouteChanged {
        /// New fragment, e.g. `#/active`
        fragment: String,
    },
}
