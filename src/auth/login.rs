// src/auth/login.rs
use crate::auth::sessions::create_session;
use crate::auth::token::{hash_token, new_token};
use crate::config::LoginConfig;
use crate::db::auth as db_auth;
use crate::db::users;
use crate::errors::ServerError;
use rusqlite::Connection;

#[derive(Debug, Clone)]
pub struct IssuedLoginLink {
    pub email: String,
    pub user_id: i64,
    /// Raw token; never stored.
    pub token: String,
    pub expires_at: i64,
    /// Relative URL like "/auth/magic?token=..."
    pub link: String,
}

#[derive(Debug, Clone)]
pub struct SignedIn {
    pub user_id: i64,
    pub email: String,
    pub session_token: String,
}

/// Trim + lowercase, minimal sanity check.
pub fn normalize_email(email: &str) -> Result<String, ServerError> {
    let e = email.trim().to_lowercase();
    match e.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(e),
        _ => Err(ServerError::BadRequest("invalid email".into())),
    }
}

/// Creates the user on first request (signup and login are the same step)
/// and stores a single-use link for them.
pub fn issue_login_link(
    conn: &Connection,
    cfg: &LoginConfig,
    email: &str,
    now: i64,
) -> Result<IssuedLoginLink, ServerError> {
    let email = normalize_email(email)?;
    let user_id = users::get_or_create_user(conn, &email, now)?;

    let token = new_token();
    let expires_at = now + cfg.link_ttl_secs;
    db_auth::insert_login_link(conn, user_id, &hash_token(&token), now, expires_at)?;

    let link = format!("{}?token={}", cfg.link_path, token);
    Ok(IssuedLoginLink {
        email,
        user_id,
        token,
        expires_at,
        link,
    })
}

/// Consumes a login link and opens a session for its user.
pub fn redeem_login_link(
    conn: &mut Connection,
    cfg: &LoginConfig,
    token: &str,
    now: i64,
) -> Result<SignedIn, ServerError> {
    let token = token.trim();
    if token.is_empty() {
        return Err(ServerError::BadRequest("missing token".into()));
    }

    let Some(user_id) = db_auth::consume_login_link(conn, &hash_token(token), now)? else {
        return Err(ServerError::Unauthorized("invalid or expired link".into()));
    };

    users::touch_last_login(conn, user_id, now)?;
    let email = users::user_email(conn, user_id)?;
    let session_token = create_session(conn, user_id, now, cfg.session_ttl_secs)?;

    Ok(SignedIn {
        user_id,
        email,
        session_token,
    })
}
