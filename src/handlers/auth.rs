use super::{query_param, signed_in, FormData};
use crate::app::AppContext;
use crate::auth::login::{issue_login_link, redeem_login_link};
use crate::auth::sessions::{clear_session_cookie, revoke_session, session_cookie, session_token};
use crate::errors::ServerError;
use crate::responses::{html_response, redirect, ResultResp};
use crate::templates::pages::{check_email_content, check_email_page, home_page};
use astra::Request;
use chrono::{DateTime, Utc};

pub fn home(req: &Request, app: &AppContext, now: DateTime<Utc>) -> ResultResp {
    let user = signed_in(req, app, now)?;
    html_response(home_page(user.as_ref().map(|u| u.email.as_str())))
}

/// Issues a login link. Delivery is out of scope, so the link goes to the log.
pub fn request_link(mut req: Request, app: &AppContext, now: DateTime<Utc>) -> ResultResp {
    let form = FormData::read(&mut req)?;
    let email = form.get("email");

    let issued = app
        .db
        .with_conn(|conn| issue_login_link(conn, &app.config.login, &email, now.timestamp()))?;
    log::info!("login link for {}: {}", issued.email, issued.link);

    // htmx swaps the form in place, plain posts get the full page
    if req.headers().contains_key("HX-Request") {
        html_response(check_email_content(&issued.email))
    } else {
        html_response(check_email_page(&issued.email))
    }
}

pub fn redeem_link(req: &Request, app: &AppContext, now: DateTime<Utc>) -> ResultResp {
    let token = query_param(req, "token")
        .ok_or_else(|| ServerError::BadRequest("missing token".into()))?;

    let signed = app
        .db
        .with_conn(|conn| redeem_login_link(conn, &app.config.login, &token, now.timestamp()))?;
    log::info!("user {} signed in", signed.email);

    let cookie = session_cookie(
        &signed.session_token,
        app.config.login.session_ttl_secs,
        app.config.cookie_secure,
    );
    redirect("/dashboard", Some(cookie))
}

pub fn logout(req: &Request, app: &AppContext, now: DateTime<Utc>) -> ResultResp {
    if let Some(token) = session_token(req) {
        app.db
            .with_conn(|conn| revoke_session(conn, &token, now.timestamp()))?;
    }
    redirect("/", Some(clear_session_cookie()))
}
