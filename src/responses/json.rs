// responses/json.rs
use crate::errors::{ResultResp, ServerError};
use astra::{Body, ResponseBuilder};
use serde::Serialize;
use serde_json::json;

pub fn json_response<T: Serialize>(status: u16, value: &T) -> ResultResp {
    let body = serde_json::to_vec(value)?;
    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", "application/json")
        .body(Body::from(body))
        .map_err(|_| ServerError::InternalError)
}

/// `{"error": message}` with the error's status. 405s carry an `Allow` header.
pub fn json_error(err: &ServerError) -> ResultResp {
    let message = match err {
        ServerError::MethodNotAllowed { .. } => "Method not allowed".to_string(),
        ServerError::NotFound => "Not found".to_string(),
        ServerError::DbError(_) | ServerError::XlsxError(_) | ServerError::InternalError => {
            "Internal server error".to_string()
        }
        other => other.to_string(),
    };
    let body = serde_json::to_vec(&json!({ "error": message }))?;

    let mut builder = ResponseBuilder::new()
        .status(err.status())
        .header("Content-Type", "application/json");
    if let ServerError::MethodNotAllowed { allow } = err {
        builder = builder.header("Allow", *allow);
    }
    builder
        .body(Body::from(body))
        .map_err(|_| ServerError::InternalError)
}
