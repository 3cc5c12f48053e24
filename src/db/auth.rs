// src/db/auth.rs
use rusqlite::{params, Connection, OptionalExtension, TransactionBehavior};

use crate::errors::ServerError;

/// Store a login link. `token_hash` is the SHA-256 of the emailed token.
pub fn insert_login_link(
    conn: &Connection,
    user_id: i64,
    token_hash: &[u8],
    created_at: i64,
    expires_at: i64,
) -> Result<(), ServerError> {
    conn.execute(
        "insert into login_links (user_id, token_hash, created_at, expires_at) values (?, ?, ?, ?)",
        params![user_id, token_hash, created_at, expires_at],
    )
    .map_err(|e| ServerError::DbError(format!("insert login link failed: {e}")))?;
    Ok(())
}

/// Marks a live link as used and returns its user.
/// `None` when the hash is unknown, already used, or expired.
pub fn consume_login_link(
    conn: &mut Connection,
    token_hash: &[u8],
    now: i64,
) -> Result<Option<i64>, ServerError> {
    let tx = conn
        .transaction_with_behavior(TransactionBehavior::Immediate)
        .map_err(|e| ServerError::DbError(format!("begin tx failed: {e}")))?;

    let live: Option<(i64, i64)> = tx
        .query_row(
            r#"
            select id, user_id
            from login_links
            where token_hash = ?
              and used_at is null
              and expires_at > ?
            "#,
            params![token_hash, now],
            |r| Ok((r.get(0)?, r.get(1)?)),
        )
        .optional()
        .map_err(|e| ServerError::DbError(format!("select login link failed: {e}")))?;

    let Some((link_id, user_id)) = live else {
        return Ok(None);
    };

    tx.execute(
        "update login_links set used_at = ? where id = ? and used_at is null",
        params![now, link_id],
    )
    .map_err(|e| ServerError::DbError(format!("mark login link used failed: {e}")))?;

    tx.commit()
        .map_err(|e| ServerError::DbError(format!("commit failed: {e}")))?;

    Ok(Some(user_id))
}
