//! Core types for the todo store.

use serde_json::{Value, json};
use std::fmt;

/// Stand-in stored for any text field the user leaves empty.
pub const EMPTY_FIELD: &str = "null";

/// A todo as stored in the `todos` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<String>,
    pub completed: bool,
}

impl Todo {
    /// Structured record for display, with `completed` encoded as stored (0/1).
    pub fn to_record(&self) -> Value {
        json!({
            "id": self.id,
            "title": self.title,
            "description": self.description,
            "due_date": self.due_date,
            "completed": i64::from(self.completed),
        })
    }
}

/// Fields for a todo that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    pub title: String,
    pub description: String,
    pub due_date: String,
    pub completed: bool,
}

impl NewTodo {
    /// Build a todo from raw prompt answers.
    ///
    /// Empty text answers are stored as the literal `"null"`; the completed
    /// answer goes through [`parse_completed`].
    pub fn from_input(title: &str, description: &str, due_date: &str, completed: &str) -> Self {
        Self {
            title: or_empty_marker(title),
            description: or_empty_marker(description),
            due_date: or_empty_marker(due_date),
            completed: parse_completed(completed),
        }
    }
}

fn or_empty_marker(s: &str) -> String {
    if s.is_empty() {
        EMPTY_FIELD.to_string()
    } else {
        s.to_string()
    }
}

/// Parse a completed flag. Anything but the exact truthy tokens is false.
pub fn parse_completed(s: &str) -> bool {
    matches!(s, "true" | "True" | "t" | "T" | "1")
}

/// Parse a yes/no answer. Anything but the exact affirmative tokens is no.
pub fn parse_affirmative(s: &str) -> bool {
    matches!(s, "yes" | "Yes" | "y" | "Y" | "1")
}

/// Rejected todo id input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidTodoId(pub String);

impl fmt::Display for InvalidTodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid id '{}': expected a non-negative integer.",
            self.0
        )
    }
}

impl std::error::Error for InvalidTodoId {}

/// Parse a todo id typed by the user.
pub fn parse_todo_id(s: &str) -> Result<i64, InvalidTodoId> {
    let trimmed = s.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InvalidTodoId(s.to_string()));
    }
    trimmed.parse().map_err(|_| InvalidTodoId(s.to_string()))
}
