//! Reducer logic for the to-do list.
//!
//! Store operations apply directly to [`TodoState`]. The form and edit
//! boundaries translate UI gestures into those operations by feeding a
//! store action back through the runtime.

use crate::route::Route;
use crate::types::{TodoAction, TodoState};
use todomvc_core::{SmallVec, effect::Effect, reducer::Reducer, smallvec};

/// Environment dependencies for the to-do reducer
///
/// Ids come from the state's own counter, so nothing is injected.
#[derive(Clone, Copy, Debug, Default)]
pub struct TodoEnvironment;

/// Reducer for the to-do list
#[derive(Clone, Debug)]
pub struct TodoReducer;

impl TodoReducer {
    /// Creates a new `TodoReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for TodoReducer {
    fn default() -> Self {
        Self::new()
    }
}

impl Reducer for TodoReducer {
    type State = TodoState;
    type Action = TodoAction;
    type Environment = TodoEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        _env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            // ========== Store operations ==========
            TodoAction::AddTodo { label } => {
                let id = state.add(label);
                tracing::debug!(%id, "Added todo");
                SmallVec::new()
            },

            TodoAction::DestroyTodo { id } => {
                if !state.destroy(id) {
                    tracing::debug!(%id, "Destroy ignored: no such todo");
                }
                SmallVec::new()
            },

            TodoAction::ToggleTodo { id } => {
                if !state.toggle(id) {
                    tracing::debug!(%id, "Toggle ignored: no such todo");
                }
                SmallVec::new()
            },

            TodoAction::EditLabel { id, label } => {
                if !state.edit_label(id, label) {
                    tracing::debug!(%id, "Edit ignored: no such todo");
                }
                SmallVec::new()
            },

            TodoAction::ClearCompleted => {
                let removed = state.clear_completed();
                tracing::debug!(removed, "Cleared completed todos");
                SmallVec::new()
            },

            TodoAction::ToggleAll => {
                let completed = state.toggle_all();
                tracing::debug!(?completed, "Toggled all todos");
                SmallVec::new()
            },

            // ========== Form boundary ==========
            TodoAction::DraftChanged { text } => {
                state.draft = text;
                SmallVec::new()
            },

            TodoAction::SubmitDraft => {
                // The form resets on submit.
                let label = std::mem::take(&mut state.draft);
                smallvec![Effect::send(TodoAction::AddTodo { label })]
            },

            // ========== Edit boundary ==========
            TodoAction::BeginEdit { id } => {
                if state.exists(id) {
                    state.editing = Some(id);
                } else {
                    tracing::debug!(%id, "Edit not started: no such todo");
                }
                SmallVec::new()
            },

            TodoAction::CommitEdit { id, label } => {
                if state.editing == Some(id) {
                    state.editing = None;
                }
                let label = label.trim();
                if label.is_empty() {
                    smallvec![Effect::send(TodoAction::DestroyTodo { id })]
                } else {
                    smallvec![Effect::send(TodoAction::EditLabel {
                        id,
                        label: label.to_string(),
                    })]
                }
            },

            TodoAction::CancelEdit => {
                state.editing = None;
                SmallVec::new()
            },

            // ========== Route boundary ==========
            TodoAction::RouteChanged { fragment } => {
                let route = Route::from_fragment(&fragment);
                if route != state.route {
                    tracing::debug!(%route, "Route changed");
                    state.route = route;
                }
                SmallVec::new()
            },
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::TodoId;
    use todomvc_testing::{ReducerTest, assertions};

    fn given(state: TodoState) -> ReducerTest<TodoReducer, TodoState, TodoAction, TodoEnvironment> {
        ReducerTest::new(TodoReducer::new())
            .with_env(TodoEnvironment)
            .given_state(state)
    }

    #[test]
    fn test_add_todo() {
        given(TodoState::new())
            .when_action(TodoAction::AddTodo {
                label: "Buy milk".to_string(),
            })
            .then_state(|state| {
                assert_eq!(state.total_count(), 1);
                let todo = state.get(TodoId::new(0)).unwrap();
                assert_eq!(todo.label, "Buy milk");
                assert!(!todo.completed);
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn test_destroy_unknown_is_no_op() {
        given(TodoState::seeded())
            .when_action(TodoAction::DestroyTodo { id: TodoId::new(7) })
            .then_state(|state| assert_eq!(state.total_count(), 2))
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn test_toggle_todo() {
        given(TodoState::seeded())
            .when_action(TodoAction::ToggleTodo { id: TodoId::new(0) })
            .then_state(|state| {
                assert!(state.get(TodoId::new(0)).unwrap().completed);
                assert_eq!(state.count_summary(), "0 active / 2 total");
            })
            .run();
    }

    #[test]
    fn test_clear_completed() {
        given(TodoState::seeded())
            .when_action(TodoAction::ClearCompleted)
            .then_state(|state| {
                assert_eq!(state.total_count(), 1);
                assert_eq!(state.completed_count(), 0);
                assert!(state.exists(TodoId::new(0)));
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn test_toggle_all() {
        given(TodoState::seeded())
            .when_action(TodoAction::ToggleAll)
            .then_state(|state| assert!(state.all_completed()))
            .run();
    }

    #[test]
    fn test_submit_draft_resets_form_and_adds() {
        given(TodoState::new())
            .given_actions([TodoAction::DraftChanged {
                text: "Walk the dog".to_string(),
            }])
            .when_action(TodoAction::SubmitDraft)
            .then_state(|state| {
                assert_eq!(state.draft, "");
                // Adding happens when the runtime feeds the action back.
                assert!(state.is_empty());
            })
            .then_effects(|effects| {
                assertions::assert_sends(
                    effects,
                    &[TodoAction::AddTodo {
                        label: "Walk the dog".to_string(),
                    }],
                );
            })
            .run();
    }

    #[test]
    fn test_submit_empty_draft_still_adds() {
        given(TodoState::new())
            .when_action(TodoAction::SubmitDraft)
            .then_effects(|effects| {
                assertions::assert_sends(
                    effects,
                    &[TodoAction::AddTodo {
                        label: String::new(),
                    }],
                );
            })
            .run();
    }

    #[test]
    fn test_begin_edit_unknown_id() {
        given(TodoState::new())
            .when_action(TodoAction::BeginEdit { id: TodoId::new(3) })
            .then_state(|state| assert_eq!(state.editing, None))
            .run();
    }

    #[test]
    fn test_commit_edit_trims_and_relabels() {
        let id = TodoId::new(1);
        given(TodoState::seeded())
            .given_actions([TodoAction::BeginEdit { id }])
            .when_action(TodoAction::CommitEdit {
                id,
                label: "  Taste Rust  ".to_string(),
            })
            .then_state(|state| assert_eq!(state.editing, None))
            .then_effects(move |effects| {
                assertions::assert_sends(
                    effects,
                    &[TodoAction::EditLabel {
                        id,
                        label: "Taste Rust".to_string(),
                    }],
                );
            })
            .run();
    }

    #[test]
    fn test_commit_empty_edit_destroys() {
        let id = TodoId::new(0);
        given(TodoState::seeded())
            .given_actions([TodoAction::BeginEdit { id }])
            .when_action(TodoAction::CommitEdit {
                id,
                label: "   ".to_string(),
            })
            .then_effects(move |effects| {
                assertions::assert_sends(effects, &[TodoAction::DestroyTodo { id }]);
            })
            .run();
    }

    #[test]
    fn test_cancel_edit() {
        given(TodoState::seeded())
            .given_actions([TodoAction::BeginEdit { id: TodoId::new(0) }])
            .when_action(TodoAction::CancelEdit)
            .then_state(|state| {
                assert_eq!(state.editing, None);
                assert_eq!(state.get(TodoId::new(0)).unwrap().label, "Buy a unicorn");
            })
            .run();
    }

    #[test]
    fn test_route_changed() {
        given(TodoState::seeded())
            .when_action(TodoAction::RouteChanged {
                fragment: "#/active".to_string(),
            })
            .then_state(|state| {
                assert_eq!(state.route, Route::Active);
                let visible: Vec<_> = state.visible().iter().map(|t| t.id).collect();
                assert_eq!(visible, vec![TodoId::new(0)]);
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn test_unknown_route_selects_all() {
        given(TodoState::seeded())
            .given_actions([TodoAction::RouteChanged {
                fragment: "#/completed".to_string(),
            }])
            .when_action(TodoAction::RouteChanged {
                fragment: "#/bogus".to_string(),
            })
            .then_state(|state| assert_eq!(state.route, Route::All))
            .run();
    }
}
