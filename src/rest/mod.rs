// rest/mod.rs — Public REST API server.
//
// Axum HTTP server exposing the task lifecycle and query engines.
//
// Endpoints:
//   GET  /api/v1/health
//   POST /api/v1/tasks?createdBy=
//   GET  /api/v1/tasks
//   GET  /api/v1/tasks/{id}
//   GET  /api/v1/tasks/staff/{staffId}
//   GET  /api/v1/tasks/priority/{priority}
//   GET  /api/v1/tasks/date-range?startDate=&endDate=
//   POST /api/v1/tasks/{id}/reassign
//   PUT  /api/v1/tasks/{id}/priority
//   PUT  /api/v1/tasks/{id}/status?status=&updatedBy=
//   POST /api/v1/tasks/{id}/comments
//   GET  /api/v1/staff
//   GET  /api/v1/staff/{id}

pub mod routes;

use anyhow::Result;
use axum::{
    routing::{get, post, put},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::AppContext;

pub async fn start_rest_server(ctx: Arc<AppContext>) -> Result<()> {
    let bind = format!("{}:{}", ctx.config.bind_address, ctx.config.port);
    let addr: SocketAddr = bind.parse()?;

    let router = build_router(ctx);

    info!("REST API listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}

pub fn build_router(ctx: Arc<AppContext>) -> Router {
    Router::new()
        .route("/api/v1/health", get(routes::health::health))
        // Tasks
        .route(
            "/api/v1/tasks",
            get(routes::tasks::list_tasks).post(routes::tasks::create_task),
        )
        .route(
            "/api/v1/tasks/date-range",
            get(routes::tasks::list_tasks_by_date_range),
        )
        .route(
            "/api/v1/tasks/staff/{staff_id}",
            get(routes::tasks::list_tasks_by_staff),
        )
        .route(
            "/api/v1/tasks/priority/{priority}",
            get(routes::tasks::list_tasks_by_priority),
        )
        .route("/api/v1/tasks/{id}", get(routes::tasks::get_task))
        .route(
            "/api/v1/tasks/{id}/reassign",
            post(routes::tasks::reassign_task),
        )
        .route(
            "/api/v1/tasks/{id}/priority",
            put(routes::tasks::update_task_priority),
        )
        .route(
            "/api/v1/tasks/{id}/status",
            put(routes::tasks::update_task_status),
        )
        .route(
            "/api/v1/tasks/{id}/comments",
            post(routes::tasks::add_comment),
        )
        // Staff directory
        .route("/api/v1/staff", get(routes::staff::list_staff))
        .route("/api/v1/staff/{id}", get(routes::staff::get_staff))
        .layer(CorsLayer::permissive())
        .with_state(ctx)
}
