//! Integration tests for the storage layer.
//!
//! Every operation opens its own connection, so these use a throwaway
//! database file rather than an in-memory database.

use taskloom::db::Database;
use taskloom::error::ErrorCode;
use taskloom::types::NewTodo;
use tempfile::TempDir;

/// Helper to create a fresh, initialized database in a temp dir.
fn setup_db() -> (TempDir, Database) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let mut db = Database::new(dir.path().join("todos.db"));
    db.initialize_schema(None)
        .expect("Failed to initialize schema");
    (dir, db)
}

fn new_todo(title: &str) -> NewTodo {
    NewTodo::from_input(title, "desc", "2024-01-01", "false")
}

mod schema_tests {
    use super::*;

    #[test]
    fn todos_table_has_expected_columns() {
        let (_dir, db) = setup_db();

        let conn = rusqlite::Connection::open(db.path()).expect("Failed to open database");
        let mut stmt = conn
            .prepare("SELECT name, type, \"notnull\", pk FROM pragma_table_info('todos')")
            .unwrap();
        let columns: Vec<(String, String, bool, bool)> = stmt
            .query_map([], |row| {
                Ok((
                    row.get(0)?,
                    row.get(1)?,
                    row.get::<_, i64>(2)? != 0,
                    row.get::<_, i64>(3)? > 0,
                ))
            })
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();

        let names: Vec<&str> = columns.iter().map(|c| c.0.as_str()).collect();
        assert_eq!(
            names,
            ["id", "title", "description", "due_date", "completed"]
        );
        assert!(columns[0].3, "id should be the primary key");
        assert!(columns[1].2, "title should be NOT NULL");
        assert!(!columns[2].2);
        assert_eq!(columns[4].1, "INTEGER");
    }

    #[test]
    fn initialize_is_idempotent_and_keeps_rows() {
        let (_dir, mut db) = setup_db();
        db.insert_todo(&new_todo("Keep me")).unwrap();

        db.initialize_schema(None)
            .expect("Second initialization should succeed");
        db.initialize_schema(None)
            .expect("Third initialization should succeed");

        let todos = db.list_todos().unwrap();
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].title, "Keep me");
    }
}

mod insert_tests {
    use super::*;

    #[test]
    fn insert_then_list_returns_record() {
        let (_dir, db) = setup_db();
        let todo = NewTodo::from_input("Buy milk", "2%", "2024-03-01", "false");

        let id = db.insert_todo(&todo).expect("Failed to insert");

        let todos = db.list_todos().unwrap();
        assert_eq!(todos.len(), 1);
        let stored = &todos[0];
        assert_eq!(id, 1);
        assert_eq!(stored.id, 1);
        assert_eq!(stored.title, "Buy milk");
        assert_eq!(stored.description.as_deref(), Some("2%"));
        assert_eq!(stored.due_date.as_deref(), Some("2024-03-01"));
        assert!(!stored.completed);
        assert_eq!(stored.to_record()["completed"], 0);
    }

    #[test]
    fn ids_are_unique_and_increasing() {
        let (_dir, db) = setup_db();

        let ids: Vec<i64> = (0..5)
            .map(|i| db.insert_todo(&new_todo(&format!("Todo {i}"))).unwrap())
            .collect();

        assert_eq!(ids, [1, 2, 3, 4, 5]);
        let listed: Vec<i64> = db.list_todos().unwrap().iter().map(|t| t.id).collect();
        assert_eq!(listed, ids);
    }

    #[test]
    fn empty_input_stores_null_literals() {
        let (_dir, db) = setup_db();

        let id = db.insert_todo(&NewTodo::from_input("", "", "", "")).unwrap();

        let stored = db.get_todo_by_id(id).unwrap().expect("todo should exist");
        assert_eq!(stored.title, "null");
        assert_eq!(stored.description.as_deref(), Some("null"));
        assert_eq!(stored.due_date.as_deref(), Some("null"));
        assert!(!stored.completed);
    }

    #[test]
    fn completed_flag_round_trips() {
        let (_dir, db) = setup_db();

        let id = db
            .insert_todo(&NewTodo::from_input("Done", "", "", "T"))
            .unwrap();

        let stored = db.get_todo_by_id(id).unwrap().unwrap();
        assert!(stored.completed);
        assert_eq!(stored.to_record()["completed"], 1);
    }

    #[test]
    fn insert_without_schema_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("todos.db");
        let conn = rusqlite::Connection::open(&path).unwrap();
        conn.execute_batch("CREATE TABLE other(x INTEGER);").unwrap();
        drop(conn);
        let db = Database::new(&path);

        let err = db.insert_todo(&new_todo("orphan")).unwrap_err();

        assert_eq!(err.code(), ErrorCode::PrepareFailed);
    }
}

mod lookup_tests {
    use super::*;

    #[test]
    fn list_on_empty_database_is_empty() {
        let (_dir, db) = setup_db();

        let todos = db.list_todos().expect("Empty list should not be an error");

        assert!(todos.is_empty());
    }

    #[test]
    fn get_by_id_returns_inserted_record() {
        let (_dir, db) = setup_db();
        db.insert_todo(&new_todo("First")).unwrap();
        let id = db.insert_todo(&new_todo("Second")).unwrap();

        let found = db.get_todo_by_id(id).unwrap().expect("todo should exist");

        assert_eq!(found.id, id);
        assert_eq!(found.title, "Second");
    }

    #[test]
    fn get_by_id_unknown_returns_none() {
        let (_dir, db) = setup_db();
        db.insert_todo(&new_todo("Only")).unwrap();

        assert!(db.get_todo_by_id(42).unwrap().is_none());
        assert!(db.get_todo_by_id(0).unwrap().is_none());
    }

    #[test]
    fn get_by_title_returns_first_inserted_duplicate() {
        let (_dir, db) = setup_db();
        let first = db
            .insert_todo(&NewTodo::from_input("Chore", "dishes", "", ""))
            .unwrap();
        db.insert_todo(&NewTodo::from_input("Chore", "laundry", "", ""))
            .unwrap();

        let found = db.get_todo_by_title("Chore").unwrap().expect("should match");

        assert_eq!(found.id, first);
        assert_eq!(found.description.as_deref(), Some("dishes"));
    }

    #[test]
    fn get_by_title_is_exact_match() {
        let (_dir, db) = setup_db();
        db.insert_todo(&new_todo("Chore")).unwrap();

        assert!(db.get_todo_by_title("chore").unwrap().is_none());
        assert!(db.get_todo_by_title("Chore ").unwrap().is_none());
    }

    #[test]
    fn rows_with_nulls_written_externally_are_readable() {
        let (_dir, db) = setup_db();
        let conn = rusqlite::Connection::open(db.path()).unwrap();
        conn.execute("INSERT INTO todos (title) VALUES ('bare')", [])
            .unwrap();
        drop(conn);

        let found = db.get_todo_by_title("bare").unwrap().unwrap();

        assert!(found.description.is_none());
        assert!(found.due_date.is_none());
        assert!(!found.completed);
    }

    #[test]
    fn missing_file_is_an_error_not_empty() {
        let dir = TempDir::new().unwrap();
        let db = Database::new(dir.path().join("absent.db"));

        let err = db.get_todo_by_id(1).unwrap_err();

        assert_eq!(err.code(), ErrorCode::OpenFailed);
    }
}
