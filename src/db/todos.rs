//! Todo insert and lookup operations.

use super::Database;
use crate::error::{StoreError, StoreResult};
use crate::types::{NewTodo, Todo};
use rusqlite::{OptionalExtension, Row, params};
use tracing::debug;

const SELECT_TODO: &str = "SELECT id, title, description, due_date, completed FROM todos";

pub fn parse_todo_row(row: &Row) -> rusqlite::Result<Todo> {
    let id: i64 = row.get("id")?;
    let title: String = row.get("title")?;
    let description: Option<String> = row.get("description")?;
    let due_date: Option<String> = row.get("due_date")?;
    let completed: Option<i64> = row.get("completed")?;

    Ok(Todo {
        id,
        title,
        description,
        due_date,
        completed: completed.unwrap_or(0) != 0,
    })
}

impl Database {
    /// Insert a todo and return the id the store assigned to it.
    ///
    /// Parameters are bound as part of execution, so a failed bind aborts
    /// the whole insert.
    pub fn insert_todo(&self, todo: &NewTodo) -> StoreResult<i64> {
        self.with_conn(|conn| {
            let mut stmt = conn
                .prepare(
                    "INSERT INTO todos (title, description, due_date, completed)
                     VALUES (?1, ?2, ?3, ?4)",
                )
                .map_err(StoreError::Prepare)?;

            stmt.execute(params![
                todo.title,
                todo.description,
                todo.due_date,
                todo.completed
            ])
            .map_err(StoreError::Execute)?;

            let id = conn.last_insert_rowid();
            debug!(id, title = %todo.title, "Inserted todo");
            Ok(id)
        })
    }

    /// All todos in insertion order. Empty when the table has no rows.
    pub fn list_todos(&self) -> StoreResult<Vec<Todo>> {
        self.with_conn(|conn| {
            let mut stmt = conn
                .prepare(&format!("{SELECT_TODO} ORDER BY id"))
                .map_err(StoreError::Prepare)?;

            let todos = stmt
                .query_map([], parse_todo_row)
                .map_err(StoreError::Execute)?
                .collect::<Result<Vec<_>, _>>()
                .map_err(StoreError::Row)?;

            debug!(count = todos.len(), "Listed todos");
            Ok(todos)
        })
    }

    pub fn get_todo_by_id(&self, id: i64) -> StoreResult<Option<Todo>> {
        self.with_conn(|conn| {
            let mut stmt = conn
                .prepare(&format!("{SELECT_TODO} WHERE id = ?1"))
                .map_err(StoreError::Prepare)?;

            stmt.query_row(params![id], parse_todo_row)
                .optional()
                .map_err(StoreError::Row)
        })
    }

    /// First todo (lowest id) with exactly this title.
    ///
    /// Titles are not unique; later duplicates are never returned.
    pub fn get_todo_by_title(&self, title: &str) -> StoreResult<Option<Todo>> {
        self.with_conn(|conn| {
            let mut stmt = conn
                .prepare(&format!("{SELECT_TODO} WHERE title = ?1 ORDER BY id LIMIT 1"))
                .map_err(StoreError::Prepare)?;

            stmt.query_row(params![title], parse_todo_row)
                .optional()
                .map_err(StoreError::Row)
        })
    }
}
