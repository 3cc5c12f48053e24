use crate::errors::{ResultResp, ServerError};
use astra::{Body, ResponseBuilder};
use maud::Markup;

pub fn html_response(markup: Markup) -> ResultResp {
    html_with_status(200, markup)
}

/// Same page, non-200 status (e.g. 422 for a form with errors).
pub fn html_with_status(status: u16, markup: Markup) -> ResultResp {
    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", "text/html; charset=utf-8")
        .body(Body::from(markup.into_string()))
        .map_err(|_| ServerError::InternalError)
}

/// 303 to `location`, optionally setting a cookie on the way.
pub fn redirect(location: &str, set_cookie: Option<String>) -> ResultResp {
    let mut builder = ResponseBuilder::new()
        .status(303)
        .header("Location", location);
    if let Some(cookie) = set_cookie {
        builder = builder.header("Set-Cookie", cookie);
    }
    builder
        .body(Body::empty())
        .map_err(|_| ServerError::InternalError)
}
