//! Mock JSON endpoints. The numbers are fixed; nothing here talks to a real
//! tax authority or booking platform.

use crate::domain::stats::{SyncResponse, TaxStats};
use crate::errors::ServerError;
use crate::responses::{json_response, ResultResp};
use chrono::{DateTime, Utc};
use serde_json::json;

pub fn handle(method: &str, rest: &[&str], now: DateTime<Utc>) -> ResultResp {
    match rest {
        ["stats"] => match method {
            "GET" => json_response(200, &TaxStats::mock(now)),
            _ => Err(ServerError::MethodNotAllowed { allow: "GET" }),
        },
        ["sync-booking"] => match method {
            "POST" => {
                log::info!("mock booking sync requested");
                json_response(200, &SyncResponse::mock(now))
            }
            _ => Err(ServerError::MethodNotAllowed { allow: "POST" }),
        },
        ["health"] => match method {
            "GET" => json_response(200, &json!({ "status": "ok" })),
            _ => Err(ServerError::MethodNotAllowed { allow: "GET" }),
        },
        _ => Err(ServerError::NotFound),
    }
}
