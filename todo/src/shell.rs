//! Line-oriented stand-in for the browser page.
//!
//! Each input line is one UI gesture. Mutating commands become the same
//! action sequence the page would dispatch: `add` types into the form and
//! submits it, `edit` double-clicks a row and commits the new label.

use crate::types::{TodoAction, TodoId};
use thiserror::Error;

/// Usage text printed by `help`
pub const HELP: &str = "\
commands:
  add <label>          add a todo
  toggle <id>          flip a todo's completed flag
  toggle-all           mark all complete (or all active)
  edit <id> <label>    relabel a todo (an empty label deletes it)
  rm <id>              delete a todo
  clear                delete completed todos
  route <fragment>     switch filter: #/, #/active, #/completed
  list                 show the list
  json                 show the view model as JSON
  help                 show this text
  quit                 exit";

/// Errors from parsing a shell line
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The first word is not a command
    #[error("Unknown command: {0} (try 'help')")]
    Unknown(String),

    /// A required argument is absent
    #[error("'{command}' needs {argument}")]
    MissingArgument {
        /// Command name
        command: &'static str,
        /// Description of the missing argument
        argument: &'static str,
    },

    /// An id argument is not a number
    #[error("Invalid todo id {input:?}")]
    InvalidId {
        /// The offending text
        input: String,
        /// Parse failure
        #[source]
        source: std::num::ParseIntError,
    },
}

/// A parsed shell line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `add <label>`
    Add(String),
    /// `toggle <id>`
    Toggle(TodoId),
    /// `toggle-all`
    ToggleAll,
    /// `edit <id> <label>`
    Edit(TodoId, String),
    /// `rm <id>`
    Remove(TodoId),
    /// `clear`
    Clear,
    /// `route <fragment>`
    Route(String),
    /// `list`
    List,
    /// `json`
    Json,
    /// `help`
    Help,
    /// `quit`
    Quit,
}

impl Command {
    /// Parses one input line. Blank lines yield `None`.
    ///
    /// # Errors
    ///
    /// Returns a [`CommandError`] for unknown commands, missing arguments or
    /// non-numeric ids.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();

        let command = match word {
            // The label is kept verbatim, empty included.
            "add" => Self::Add(rest.to_string()),
            "toggle" => Self::Toggle(parse_id("toggle", rest)?),
            "toggle-all" => Self::ToggleAll,
            "edit" => {
                let (id, label) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                Self::Edit(parse_id("edit", id)?, label.to_string())
            },
            "rm" => Self::Remove(parse_id("rm", rest)?),
            "clear" => Self::Clear,
            "route" => Self::Route(rest.to_string()),
            "list" | "ls" => Self::List,
            "json" => Self::Json,
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };

        Ok(Some(command))
    }

    /// Actions the page would dispatch for this gesture
    ///
    /// Display-only commands dispatch nothing.
    #[must_use]
    pub fn actions(&self) -> Vec<TodoAction> {
        match self {
            Self::Add(label) => vec![
                TodoAction::DraftChanged {
                    text: label.clone(),
                },
                TodoAction::SubmitDraft,
            ],
            Self::Toggle(id) => vec![TodoAction::ToggleTodo { id: *id }],
            Self::ToggleAll => vec![TodoAction::ToggleAll],
            Self::Edit(id, label) => vec![
                TodoAction::BeginEdit { id: *id },
                TodoAction::CommitEdit {
                    id: *id,
                    label: label.clone(),
                },
            ],
            Self::Remove(id) => vec![TodoAction::DestroyTodo { id: *id }],
            Self::Clear => vec![TodoAction::ClearCompleted],
            Self::Route(fragment) => vec![TodoAction::RouteChanged {
                fragment: fragment.clone(),
            }],
            Self::List | Self::Json | Self::Help | Self::Quit => Vec::new(),
        }
    }
}

fn parse_id(command: &'static str, input: &str) -> Result<TodoId, CommandError> {
    if input.is_empty() {
        return Err(CommandError::MissingArgument {
            command,
            argument: "a todo id",
        });
    }
    input.parse().map_err(|source| CommandError::InvalidId {
        input: input.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_lines_are_ignored() {
        assert_eq!(Command::parse("   "), Ok(None));
    }

    #[test]
    fn add_keeps_label_verbatim() {
        assert_eq!(
            Command::parse("add Buy  milk"),
            Ok(Some(Command::Add("Buy  milk".to_string())))
        );
        assert_eq!(Command::parse("add"), Ok(Some(Command::Add(String::new()))));
    }

    #[test]
    fn id_commands() {
        assert_eq!(Command::parse("toggle 3"), Ok(Some(Command::Toggle(TodoId::new(3)))));
        assert_eq!(Command::parse("rm 0"), Ok(Some(Command::Remove(TodoId::new(0)))));
        assert_eq!(
            Command::parse("edit 1 Taste Rust"),
            Ok(Some(Command::Edit(TodoId::new(1), "Taste Rust".to_string())))
        );
        assert_eq!(Command::parse("edit 1"), Ok(Some(Command::Edit(TodoId::new(1), String::new()))));
    }

    #[test]
    fn missing_and_invalid_ids() {
        assert_eq!(
            Command::parse("toggle"),
            Err(CommandError::MissingArgument {
                command: "toggle",
                argument: "a todo id",
            })
        );
        assert!(matches!(
            Command::parse("rm abc"),
            Err(CommandError::InvalidId { input, .. }) if input == "abc"
        ));
    }

    #[test]
    fn unknown_command() {
        assert_eq!(
            Command::parse("frobnicate"),
            Err(CommandError::Unknown("frobnicate".to_string()))
        );
    }

    #[test]
    fn add_types_then_submits() {
        assert_eq!(
            Command::Add("x".to_string()).actions(),
            vec![
                TodoAction::DraftChanged {
                    text: "x".to_string()
                },
                TodoAction::SubmitDraft,
            ]
        );
    }

    #[test]
    fn display_commands_dispatch_nothing() {
        for command in [Command::List, Command::Json, Command::Help, Command::Quit] {
            assert!(command.actions().is_empty());
        }
    }
}
