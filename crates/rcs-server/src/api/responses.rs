//! Response envelopes and error responses
//!
//! Successful responses look like `{"status": "ok", <key>: <data>}`, errors
//! like `{"status": "<message>"}`.

use rocket::http::Status;
use rocket::request::Request;
use rocket::response::{self, Responder};
use rocket::serde::json::Json;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::error;

use crate::constants::STATUS_OK;

/// `{"status": "ok"}`
pub fn ok_response() -> Json<Value> {
    let mut body = Map::new();
    body.insert("status".to_string(), Value::from(STATUS_OK));
    Json(Value::Object(body))
}

/// `{"status": "ok", key: data}`
pub fn ok_response_with<T: Serialize>(key: &str, data: &T) -> Result<Json<Value>, ApiError> {
    let data = serde_json::to_value(data)
        .map_err(|e| ApiError::internal(format!("Cannot serialize response data: {e}")))?;

    let mut body = Map::new();
    body.insert("status".to_string(), Value::from(STATUS_OK));
    body.insert(key.to_string(), data);
    Ok(Json(Value::Object(body)))
}

/// Error body `{"status": message}`
pub fn status_body(message: impl Into<String>) -> Json<Value> {
    let mut body = Map::new();
    body.insert("status".to_string(), Value::String(message.into()));
    Json(Value::Object(body))
}

/// An error sent to the client with a JSON status envelope
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: Status,
    pub message: String,
}

impl ApiError {
    /// 500 with `message`
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: Status::InternalServerError,
            message: message.into(),
        }
    }

    /// 404 with `message`
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: Status::NotFound,
            message: message.into(),
        }
    }
}

impl From<rcs_domain::Error> for ApiError {
    fn from(err: rcs_domain::Error) -> Self {
        error!(error = %err, "Request failed");
        Self::internal(err.to_string())
    }
}

impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(self, request: &'r Request<'_>) -> response::Result<'static> {
        (self.status, status_body(self.message)).respond_to(request)
    }
}
