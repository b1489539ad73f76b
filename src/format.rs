//! Terminal rendering of todo records.
//!
//! Values are printed in their structured-record form, so text fields
//! appear quoted and `completed` appears as 0/1.

use crate::types::Todo;
use serde_json::Value;

const FIELDS: [(&str, &str); 5] = [
    ("ID", "id"),
    ("Title", "title"),
    ("Description", "description"),
    ("Due Date", "due_date"),
    ("Completed", "completed"),
];

/// Render one todo as `Label: value` lines, each ending in a newline.
pub fn format_todo(todo: &Todo) -> String {
    let record = todo.to_record();
    let mut out = String::new();
    for (label, key) in FIELDS {
        let value = record.get(key).unwrap_or(&Value::Null);
        out.push_str(&format!("{}: {}\n", label, value));
    }
    out
}

/// Render a list of todos, each block followed by a blank line.
pub fn format_todos(todos: &[Todo]) -> String {
    if todos.is_empty() {
        return "No todos found.\n".to_string();
    }

    let mut out = String::from("Todos: \n");
    for todo in todos {
        out.push_str(&format_todo(todo));
        out.push('\n');
    }
    out
}
