// errors.rs
use astra::Response;
use thiserror::Error;

/// Errors originating from either the server logic
/// (routing, missing resources, etc.) or downstream layers (DB, spreadsheets).
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
    /// `allow` is the value sent back in the `Allow` header.
    #[error("Method Not Allowed")]
    MethodNotAllowed { allow: &'static str },
    #[error("Database Error: {0}")]
    DbError(String),
    #[error("Spreadsheet Error: {0}")]
    XlsxError(String),
    #[error("Internal Server Error")]
    InternalError,
}

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::BadRequest(_) => 400,
            ServerError::Unauthorized(_) => 401,
            ServerError::MethodNotAllowed { .. } => 405,
            ServerError::DbError(_) | ServerError::XlsxError(_) | ServerError::InternalError => 500,
        }
    }
}

impl From<rusqlite::Error> for ServerError {
    fn from(e: rusqlite::Error) -> Self {
        ServerError::DbError(e.to_string())
    }
}

impl From<serde_json::Error> for ServerError {
    fn from(e: serde_json::Error) -> Self {
        log::error!("json encoding failed: {e}");
        ServerError::InternalError
    }
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;
