// rest/routes/tasks.rs — Task lifecycle and query routes.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

use super::error_response;
use crate::lifecycle::CreateTaskParams;
use crate::model::{Task, TaskPriority, TaskStatus};
use crate::AppContext;

type RouteResult = Result<Json<Task>, (StatusCode, Json<Value>)>;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActingUserQuery {
    created_by: Option<String>,
}

pub async fn create_task(
    State(ctx): State<Arc<AppContext>>,
    Query(query): Query<ActingUserQuery>,
    Json(params): Json<CreateTaskParams>,
) -> RouteResult {
    let created_by = query.created_by.unwrap_or_else(|| "system".to_string());
    match ctx.lifecycle.create(params, &created_by).await {
        Ok(task) => Ok(Json(task)),
        Err(e) => Err(error_response(e)),
    }
}

pub async fn list_tasks(State(ctx): State<Arc<AppContext>>) -> Json<Value> {
    let tasks = ctx.queries.list_all().await;
    Json(json!({ "tasks": tasks }))
}

pub async fn get_task(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<String>,
) -> RouteResult {
    match ctx.queries.get_by_id(&id).await {
        Ok(task) => Ok(Json(task)),
        Err(e) => Err(error_response(e)),
    }
}

pub async fn list_tasks_by_staff(
    State(ctx): State<Arc<AppContext>>,
    Path(staff_id): Path<String>,
) -> Json<Value> {
    let tasks = ctx.queries.list_by_staff(&staff_id).await;
    Json(json!({ "tasks": tasks }))
}

pub async fn list_tasks_by_priority(
    State(ctx): State<Arc<AppContext>>,
    Path(priority): Path<TaskPriority>,
) -> Json<Value> {
    let tasks = ctx.queries.list_by_priority(priority).await;
    Json(json!({ "tasks": tasks }))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRangeQuery {
    start_date: NaiveDate,
    end_date: NaiveDate,
}

pub async fn list_tasks_by_date_range(
    State(ctx): State<Arc<AppContext>>,
    Query(range): Query<DateRangeQuery>,
) -> Json<Value> {
    let tasks = ctx
        .queries
        .list_by_date_range(range.start_date, range.end_date)
        .await;
    Json(json!({ "tasks": tasks }))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReassignRequest {
    pub new_staff_id: String,
    pub reassigned_by: String,
}

pub async fn reassign_task(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<String>,
    Json(body): Json<ReassignRequest>,
) -> RouteResult {
    match ctx
        .lifecycle
        .reassign(&id, &body.new_staff_id, &body.reassigned_by)
        .await
    {
        Ok(task) => Ok(Json(task)),
        Err(e) => Err(error_response(e)),
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePriorityRequest {
    pub priority: TaskPriority,
    pub updated_by: String,
}

pub async fn update_task_priority(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<String>,
    Json(body): Json<UpdatePriorityRequest>,
) -> RouteResult {
    match ctx
        .lifecycle
        .update_priority(&id, body.priority, &body.updated_by)
        .await
    {
        Ok(task) => Ok(Json(task)),
        Err(e) => Err(error_response(e)),
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStatusQuery {
    pub status: TaskStatus,
    pub updated_by: Option<String>,
}

pub async fn update_task_status(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<String>,
    Query(query): Query<UpdateStatusQuery>,
) -> RouteResult {
    let updated_by = query.updated_by.unwrap_or_else(|| "system".to_string());
    match ctx
        .lifecycle
        .update_status(&id, query.status, &updated_by)
        .await
    {
        Ok(task) => Ok(Json(task)),
        Err(e) => Err(error_response(e)),
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddCommentRequest {
    pub text: String,
    pub user_id: String,
}

pub async fn add_comment(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<String>,
    Json(body): Json<AddCommentRequest>,
) -> RouteResult {
    match ctx.lifecycle.add_comment(&id, &body.user_id, &body.text).await {
        Ok(task) => Ok(Json(task)),
        Err(e) => Err(error_response(e)),
    }
}
