use rusqlite::functions::FunctionFlags;
use rusqlite::Connection;
use std::cell::RefCell;
use std::collections::HashMap;

use crate::errors::ServerError;

const SCHEMA_SQL: &str = include_str!("../../sql/schema.sql");

// Thread-local connection slots, one per database path.
thread_local! {
    static DB_CONNS: RefCell<HashMap<String, Connection>> = RefCell::new(HashMap::new());
}

/// Handle to the SQLite file. Cheap to clone; holds no connection itself.
#[derive(Debug, Clone)]
pub struct Database {
    path: String,
}

impl Database {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Provides this thread's connection for `path` to the closure, opening it on first use.
    pub fn with_conn<F, T>(&self, f: F) -> Result<T, ServerError>
    where
        F: FnOnce(&mut Connection) -> Result<T, ServerError>,
    {
        DB_CONNS
            .try_with(|cell| {
                let mut slots = cell.borrow_mut();
                if !slots.contains_key(&self.path) {
                    let conn = open_connection(&self.path)?;
                    slots.insert(self.path.clone(), conn);
                }
                match slots.get_mut(&self.path) {
                    Some(conn) => f(conn),
                    None => Err(ServerError::InternalError),
                }
            })
            .map_err(|_| ServerError::InternalError)?
    }
}

fn open_connection(path: &str) -> Result<Connection, ServerError> {
    let conn = Connection::open(path)
        .map_err(|e| ServerError::DbError(format!("Open DB failed: {e}")))?;
    conn.execute_batch("PRAGMA foreign_keys = ON;")
        .map_err(|e| ServerError::DbError(format!("Enable foreign keys failed: {e}")))?;
    register_functions(&conn)?;
    Ok(conn)
}

/// SQL helpers every connection needs. `casefold(text)` lowercases with full
/// Unicode rules, unlike SQLite's ASCII-only `lower()`.
pub fn register_functions(conn: &Connection) -> Result<(), ServerError> {
    conn.create_scalar_function(
        "casefold",
        1,
        FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
        |ctx| {
            let value: Option<String> = ctx.get(0)?;
            Ok(value.map(|s| s.to_lowercase()))
        },
    )
    .map_err(|e| ServerError::DbError(format!("Register casefold failed: {e}")))
}

/// Applies the embedded schema to an already-open connection.
pub fn apply_schema(conn: &Connection) -> Result<(), ServerError> {
    conn.execute_batch(SCHEMA_SQL)
        .map_err(|e| ServerError::DbError(format!("Failed to apply schema: {e}")))
}

/// Initialize the database from the bundled schema. Safe to run on every start.
pub fn init_db(db: &Database) -> Result<(), ServerError> {
    db.with_conn(|conn| apply_schema(conn))?;
    log::info!("database initialized at {}", db.path());
    Ok(())
}

/// In-memory connection with the schema applied, for tests.
#[cfg(test)]
pub fn test_conn() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    register_functions(&conn).unwrap();
    apply_schema(&conn).unwrap();
    conn
}
