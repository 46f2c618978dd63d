pub mod health;
pub mod staff;
pub mod tasks;

use axum::{http::StatusCode, Json};
use serde_json::{json, Value};

use crate::error::TaskError;

/// Map a core error to its HTTP shape. Conflict is an internal invariant
/// violation, so it surfaces as a 500 rather than a client error.
pub(crate) fn error_response(err: TaskError) -> (StatusCode, Json<Value>) {
    let status = match &err {
        TaskError::NotFound { .. } => StatusCode::NOT_FOUND,
        TaskError::Validation(_) => StatusCode::BAD_REQUEST,
        TaskError::Conflict { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(json!({ "error": err.to_string() })))
}
