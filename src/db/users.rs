// src/db/users.rs
use crate::errors::ServerError;
use rusqlite::{params, Connection};

/// Insert a user if they don't exist, then return the user id.
/// Email should already be normalized by caller (trim/lowercase).
pub fn get_or_create_user(conn: &Connection, email: &str, now: i64) -> Result<i64, ServerError> {
    conn.execute(
        "insert or ignore into users (email, created_at) values (?, ?)",
        params![email, now],
    )
    .map_err(|e| ServerError::DbError(format!("insert user failed: {e}")))?;

    conn.query_row(
        "select id from users where email = ?",
        params![email],
        |row| row.get(0),
    )
    .map_err(|e| ServerError::DbError(format!("select user id failed: {e}")))
}

pub fn user_email(conn: &Connection, user_id: i64) -> Result<String, ServerError> {
    conn.query_row(
        "select email from users where id = ?",
        params![user_id],
        |r| r.get(0),
    )
    .map_err(|e| ServerError::DbError(format!("select user email failed: {e}")))
}

pub fn touch_last_login(conn: &Connection, user_id: i64, now: i64) -> Result<(), ServerError> {
    conn.execute(
        "update users set last_login_at = ? where id = ?",
        params![now, user_id],
    )
    .map_err(|e| ServerError::DbError(format!("update last login failed: {e}")))?;
    Ok(())
}
