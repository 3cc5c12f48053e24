use crate::errors::ServerError;
use crate::responses::json::json_error;
use crate::templates::pages::error_page;
use astra::{Body, Response, ResponseBuilder};

/// Final conversion of a handler error. `/api/*` callers get JSON, everyone else a page.
pub fn error_response(err: ServerError, path: &str) -> Response {
    match err.status() {
        500 => log::error!("{path}: {err}"),
        _ => log::debug!("{path}: {err}"),
    }

    if path.starts_with("/api/") {
        return json_error(&err).unwrap_or_else(|_| plain_500());
    }

    let message = match &err {
        ServerError::NotFound => "Not Found".to_string(),
        ServerError::BadRequest(msg) | ServerError::Unauthorized(msg) => msg.clone(),
        ServerError::MethodNotAllowed { .. } => "Method Not Allowed".to_string(),
        // internals stay in the log
        ServerError::DbError(_) | ServerError::XlsxError(_) | ServerError::InternalError => {
            "Internal Server Error".to_string()
        }
    };

    let mut builder = ResponseBuilder::new()
        .status(err.status())
        .header("Content-Type", "text/html; charset=utf-8");
    if let ServerError::MethodNotAllowed { allow } = &err {
        builder = builder.header("Allow", *allow);
    }
    builder
        .body(Body::from(error_page(err.status(), &message).into_string()))
        .unwrap_or_else(|_| plain_500())
}

fn plain_500() -> Response {
    let mut resp = Response::new(Body::from("Internal Server Error"));
    if let Ok(status) = 500u16.try_into() {
        *resp.status_mut() = status;
    }
    resp
}
