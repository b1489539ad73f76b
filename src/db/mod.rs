//! Storage client for the todo database.
//!
//! There is no long-lived connection: every operation opens the file,
//! does its work and closes the connection again before returning.

pub mod schema;
pub mod todos;

use crate::error::{StoreError, StoreResult};
use rusqlite::{Connection, OpenFlags};
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Database handle remembering the path of the SQLite file.
#[derive(Debug, Clone)]
pub struct Database {
    path: PathBuf,
}

impl Database {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// The remembered database path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether a readable file exists at `path`, or at the remembered path
    /// when `path` is `None` or empty. Does not check that it is a database.
    pub fn exists(&self, path: Option<&Path>) -> bool {
        let target = self.resolve(path);
        info!(path = %target.display(), "Checking if database exists");
        File::open(target).is_ok()
    }

    /// Create the `todos` table if it is missing, creating the file too.
    ///
    /// A non-empty `path` becomes the remembered path before opening.
    pub fn initialize_schema(&mut self, path: Option<&Path>) -> StoreResult<()> {
        if let Some(p) = path.filter(|p| !p.as_os_str().is_empty()) {
            self.path = p.to_path_buf();
        }

        let conn = Connection::open(&self.path).map_err(|source| {
            warn!(path = %self.path.display(), error = %source, "Can't open database");
            StoreError::Open {
                path: self.path.clone(),
                source,
            }
        })?;
        info!(path = %self.path.display(), "Opened database");

        let result = schema::create_schema(&conn);
        match &result {
            Ok(()) => info!("todos table ready"),
            Err(e) => warn!(error = %e, "Schema creation failed"),
        }
        close(conn, result)
    }

    /// Execute a function with a freshly opened connection.
    ///
    /// The file must already exist; only [`Database::initialize_schema`]
    /// creates it. The connection is closed on every path out.
    pub fn with_conn<F, T>(&self, f: F) -> StoreResult<T>
    where
        F: FnOnce(&Connection) -> StoreResult<T>,
    {
        let conn = self.connect()?;
        let result = f(&conn);
        if let Err(ref e) = result {
            warn!(code = ?e.code(), error = %e, "Database operation failed");
        }
        close(conn, result)
    }

    fn connect(&self) -> StoreResult<Connection> {
        let flags = OpenFlags::SQLITE_OPEN_READ_WRITE
            | OpenFlags::SQLITE_OPEN_URI
            | OpenFlags::SQLITE_OPEN_NO_MUTEX;
        debug!(path = %self.path.display(), "Opening connection");
        Connection::open_with_flags(&self.path, flags).map_err(|source| {
            warn!(path = %self.path.display(), error = %source, "Can't open database");
            StoreError::Open {
                path: self.path.clone(),
                source,
            }
        })
    }

    fn resolve<'a>(&'a self, path: Option<&'a Path>) -> &'a Path {
        match path {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => &self.path,
        }
    }
}

/// Close `conn`, keeping the operation's own error ahead of a close error.
fn close<T>(conn: Connection, result: StoreResult<T>) -> StoreResult<T> {
    match conn.close() {
        Ok(()) => result,
        Err((_, e)) => {
            warn!(error = %e, "Failed to close database");
            match result {
                Ok(_) => Err(StoreError::Close(e)),
                Err(original) => Err(original),
            }
        }
    }
}
