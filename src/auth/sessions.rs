// src/auth/sessions.rs
use crate::auth::token::{hash_token, new_token};
use crate::errors::ServerError;
use astra::Request;
use rusqlite::{params, Connection, OptionalExtension};

pub const SESSION_COOKIE: &str = "session";

/// The signed-in user for the current request.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionUser {
    pub id: i64,
    pub email: String,
}

/// Creates a session row and returns the raw token for the cookie.
pub fn create_session(
    conn: &Connection,
    user_id: i64,
    now: i64,
    ttl_secs: i64,
) -> Result<String, ServerError> {
    let token = new_token();
    let hash = hash_token(&token);

    conn.execute(
        "insert into sessions (user_id, token_hash, created_at, expires_at) values (?, ?, ?, ?)",
        params![user_id, hash.as_slice(), now, now + ttl_secs],
    )
    .map_err(|e| ServerError::DbError(format!("create session failed: {e}")))?;

    Ok(token)
}

pub fn load_user_from_session(
    conn: &Connection,
    raw_token: &str,
    now: i64,
) -> Result<Option<SessionUser>, ServerError> {
    let hash = hash_token(raw_token);

    conn.query_row(
        r#"
        select u.id, u.email
        from sessions s
        join users u on u.id = s.user_id
        where s.token_hash = ?
          and s.expires_at > ?
          and s.revoked_at is null
        "#,
        params![hash.as_slice(), now],
        |row| {
            Ok(SessionUser {
                id: row.get(0)?,
                email: row.get(1)?,
            })
        },
    )
    .optional()
    .map_err(|e| ServerError::DbError(format!("session lookup failed: {e}")))
}

pub fn revoke_session(conn: &Connection, raw_token: &str, now: i64) -> Result<(), ServerError> {
    let hash = hash_token(raw_token);
    conn.execute(
        "update sessions set revoked_at = ? where token_hash = ? and revoked_at is null",
        params![now, hash.as_slice()],
    )
    .map_err(|e| ServerError::DbError(format!("revoke session failed: {e}")))?;
    Ok(())
}

/// Pulls the `session` cookie value out of the request headers.
pub fn session_token(req: &Request) -> Option<String> {
    req.headers()
        .get_all("Cookie")
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|header| header.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .map(|(_, value)| value.to_string())
        .filter(|value| !value.is_empty())
}

/// Resolves the request's session cookie to a user, if any.
pub fn current_user(
    conn: &Connection,
    req: &Request,
    now: i64,
) -> Result<Option<SessionUser>, ServerError> {
    match session_token(req) {
        Some(token) => load_user_from_session(conn, &token, now),
        None => Ok(None),
    }
}

pub fn session_cookie(token: &str, max_age: i64, secure: bool) -> String {
    let secure = if secure { "; Secure" } else { "" };
    format!("{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={max_age}{secure}")
}

pub fn clear_session_cookie() -> String {
    format!("{SESSION_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}
