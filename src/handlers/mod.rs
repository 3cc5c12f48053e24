//! Route handlers, one module per area. Shared request plumbing lives here.

/// Resolves the session or sends the browser to the login page.
macro_rules! require_user {
    ($req:expr, $app:expr, $now:expr) => {
        match $crate::handlers::signed_in($req, $app, $now)? {
            Some(user) => user,
            None => return $crate::responses::redirect("/login", None),
        }
    };
}

pub(crate) use require_user;

pub mod api;
pub mod auth;
pub mod bookings;
pub mod guests;
pub mod properties;
pub mod rooms;

use crate::app::AppContext;
use crate::auth::{current_user, SessionUser};
use crate::db::properties::find_owned_property;
use crate::domain::property::Property;
use crate::errors::ServerError;
use astra::Request;
use chrono::{DateTime, Utc};
use std::borrow::Cow;
use std::io::Read;

pub const MAX_FORM_BYTES: u64 = 64 * 1024;

/// Decoded `application/x-www-form-urlencoded` body.
pub struct FormData {
    raw: Vec<u8>,
}

impl FormData {
    pub fn read(req: &mut Request) -> Result<Self, ServerError> {
        let mut raw = Vec::new();
        // one byte over the limit tells a full body from an oversized one
        req.body_mut()
            .reader()
            .take(MAX_FORM_BYTES + 1)
            .read_to_end(&mut raw)
            .map_err(|e| ServerError::BadRequest(format!("could not read form body: {e}")))?;
        if raw.len() as u64 > MAX_FORM_BYTES {
            return Err(ServerError::BadRequest(format!(
                "form body exceeds {MAX_FORM_BYTES} bytes"
            )));
        }
        Ok(Self { raw })
    }

    pub fn pairs(&self) -> impl Iterator<Item = (Cow<'_, str>, Cow<'_, str>)> {
        url::form_urlencoded::parse(&self.raw)
    }

    /// First value for `name`, empty string when missing.
    pub fn get(&self, name: &str) -> String {
        self.pairs()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.into_owned())
            .unwrap_or_default()
    }
}

pub fn query_param(req: &Request, name: &str) -> Option<String> {
    let query = req.uri().query()?;
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(k, _)| k == name)
        .map(|(_, v)| v.into_owned())
}

pub fn signed_in(
    req: &Request,
    app: &AppContext,
    now: DateTime<Utc>,
) -> Result<Option<SessionUser>, ServerError> {
    app.db
        .with_conn(|conn| current_user(conn, req, now.timestamp()))
}

/// Property `raw_id` if it exists and belongs to `user`, else 404.
pub fn owned_property(
    app: &AppContext,
    user: &SessionUser,
    raw_id: &str,
) -> Result<Property, ServerError> {
    let id = parse_id(raw_id)?;
    app.db
        .with_conn(|conn| find_owned_property(conn, user.id, id))?
        .ok_or(ServerError::NotFound)
}

pub fn parse_id(raw: &str) -> Result<i64, ServerError> {
    raw.parse().map_err(|_| ServerError::NotFound)
}
