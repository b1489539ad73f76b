//! Schema DDL for the todo database.

use crate::error::{StoreError, StoreResult};
use rusqlite::Connection;

/// DDL for the single `todos` table. A no-op when the table exists.
pub const TODOS_DDL: &str = "CREATE TABLE IF NOT EXISTS todos(
    id INTEGER PRIMARY KEY,
    title TEXT NOT NULL,
    description TEXT,
    due_date TEXT,
    completed INTEGER
);";

pub(crate) fn create_schema(conn: &Connection) -> StoreResult<()> {
    conn.execute_batch(TODOS_DDL).map_err(StoreError::Execute)
}
