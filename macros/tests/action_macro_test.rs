//! Tests for #[derive(Action)] macro

use todomvc_core::action::Action as _;
use todomvc_macros::Action;

#[derive(Action, Clone, Debug, PartialEq)]
enum TodoAction {
    #[command]
    AddTodo {
        label: String,
    },

    #[command]
    ClearCompleted,

    #[command]
    Toggle(u64),

    #[event]
    RouteChanged {
        fragment: String,
    },

    Unclassified,
}

#[test]
fn test_is_command() {
    let action = TodoAction::AddTodo {
        label: "Test".to_string(),
    };
    assert!(action.is_command());
    assert!(!action.is_event());
}

#[test]
fn test_is_event() {
    let action = TodoAction::RouteChanged {
        fragment: "#/active".to_string(),
    };
    assert!(!action.is_command());
    assert!(action.is_event());
}

#[test]
fn test_unit_and_tuple_commands() {
    assert!(TodoAction::ClearCompleted.is_command());
    assert!(TodoAction::Toggle(3).is_command());
}

#[test]
fn test_unclassified_variant_is_neither() {
    assert!(!TodoAction::Unclassified.is_command());
    assert!(!TodoAction::Unclassified.is_event());
}

#[test]
fn test_names_match_variants() {
    let cases = vec![
        (
            TodoAction::AddTodo {
                label: "x".to_string(),
            },
            "AddTodo",
        ),
        (TodoAction::ClearCompleted, "ClearCompleted"),
        (TodoAction::Toggle(0), "Toggle"),
        (
            TodoAction::RouteChanged {
                fragment: String::new(),
            },
            "RouteChanged",
        ),
        (TodoAction::Unclassified, "Unclassified"),
    ];

    for (action, expected) in cases {
        assert_eq!(action.name(), expected);
    }
}

#[derive(Action, Clone, Debug)]
enum Wrapped<T> {
    #[command]
    Inner(T),
}

#[test]
fn test_generic_enum() {
    let action = Wrapped::Inner(5u8);
    assert!(action.is_command());
    assert_eq!(action.name(), "Inner");
}
