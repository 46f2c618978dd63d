// rest/routes/staff.rs — Read-only staff directory routes.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::AppContext;

pub async fn list_staff(State(ctx): State<Arc<AppContext>>) -> Json<Value> {
    Json(json!({ "staff": ctx.staff.list() }))
}

pub async fn get_staff(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<String>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    match ctx.staff.get(&id) {
        Some(member) => Ok(Json(json!(member))),
        None => Err((
            StatusCode::NOT_FOUND,
            Json(json!({ "error": format!("staff not found: {id}") })),
        )),
    }
}
