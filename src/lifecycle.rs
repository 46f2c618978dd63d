//! Lifecycle Engine — every state-transition operation on a task.
//!
//! Each operation applies exactly one mutation paired with exactly one audit
//! record, inside the store's mutation scope. Status and priority transitions
//! are deliberately unconstrained (manual override); the one exception is
//! reassignment, which always cancels the original task.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::info;

use crate::audit;
use crate::error::TaskError;
use crate::model::{new_id, Comment, Task, TaskPriority, TaskStatus};
use crate::store::TaskStore;

/// Maximum comment length embedded in a COMMENT_ADDED audit description.
const COMMENT_LOG_PREVIEW_CHARS: usize = 50;

/// Parameters for creating a task. Required fields are `Option` so that a
/// missing field surfaces as a `Validation` error rather than a deserialize
/// failure at the transport boundary.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateTaskParams {
    pub title: Option<String>,
    pub description: Option<String>,
    pub assigned_staff_id: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub due_date: Option<DateTime<Utc>>,
    /// Defaults to MEDIUM when unspecified.
    pub priority: Option<TaskPriority>,
}

pub struct TaskLifecycle {
    store: Arc<TaskStore>,
}

impl TaskLifecycle {
    pub fn new(store: Arc<TaskStore>) -> Self {
        Self { store }
    }

    /// Create a new ACTIVE task and record its CREATED entry.
    pub async fn create(
        &self,
        params: CreateTaskParams,
        created_by: &str,
    ) -> Result<Task, TaskError> {
        let title = require_text(params.title, "title")?;
        let assigned_staff_id = require_text(params.assigned_staff_id, "assignedStaffId")?;
        let start_date = params
            .start_date
            .ok_or_else(|| TaskError::Validation("startDate is required".to_string()))?;
        let due_date = params
            .due_date
            .ok_or_else(|| TaskError::Validation("dueDate is required".to_string()))?;

        let now = Utc::now();
        let mut task = Task {
            id: new_id(),
            title,
            description: params.description,
            status: TaskStatus::Active,
            priority: params.priority.unwrap_or(TaskPriority::Medium),
            assigned_staff_id: assigned_staff_id.clone(),
            start_date,
            due_date,
            created_at: now,
            updated_at: now,
            created_by: created_by.to_string(),
            activity_history: Vec::new(),
            comments: Vec::new(),
        };
        audit::record(
            &mut task,
            created_by,
            "CREATED",
            format!("Task created and assigned to {assigned_staff_id}"),
        )?;

        self.store.insert(task.clone()).await?;
        info!(id = %task.id, staff = %assigned_staff_id, "task created");
        Ok(task)
    }

    /// Reassign a task by cancelling the original and creating a fresh task
    /// for the new assignee.
    ///
    /// The two records stay permanently distinct: the original's history is
    /// frozen under its CANCELLED entry, and the successor starts a new audit
    /// trail whose REASSIGNED entry references the previous assignee. Both
    /// record mutations happen under one store write scope, so no reader sees
    /// a half-completed reassignment.
    pub async fn reassign(
        &self,
        task_id: &str,
        new_staff_id: &str,
        reassigned_by: &str,
    ) -> Result<Task, TaskError> {
        let new_task = self
            .store
            .mutate_and_insert(task_id, |original| {
                original.status = TaskStatus::Cancelled;
                original.updated_at = Utc::now();
                audit::record(
                    original,
                    reassigned_by,
                    "CANCELLED",
                    format!("Task cancelled due to reassignment to {new_staff_id}"),
                )?;

                let now = Utc::now();
                let mut successor = Task {
                    id: new_id(),
                    title: original.title.clone(),
                    description: original.description.clone(),
                    status: TaskStatus::Active,
                    priority: original.priority,
                    assigned_staff_id: new_staff_id.to_string(),
                    start_date: original.start_date,
                    due_date: original.due_date,
                    created_at: now,
                    updated_at: now,
                    created_by: reassigned_by.to_string(),
                    activity_history: Vec::new(),
                    comments: Vec::new(),
                };
                audit::record(
                    &mut successor,
                    reassigned_by,
                    "REASSIGNED",
                    format!(
                        "Task reassigned from {} to {}",
                        original.assigned_staff_id, new_staff_id
                    ),
                )?;
                Ok(successor)
            })
            .await?;

        info!(
            original = %task_id,
            successor = %new_task.id,
            staff = %new_staff_id,
            "task reassigned"
        );
        Ok(new_task)
    }

    /// Change a task's priority. Any transition is allowed, including to the
    /// same value — the audit entry still records "from X to X".
    pub async fn update_priority(
        &self,
        task_id: &str,
        priority: TaskPriority,
        updated_by: &str,
    ) -> Result<Task, TaskError> {
        let task = self
            .store
            .mutate(task_id, |task| {
                let old = task.priority;
                task.priority = priority;
                task.updated_at = Utc::now();
                audit::record(
                    task,
                    updated_by,
                    "PRIORITY_UPDATED",
                    format!("Priority changed from {old} to {priority}"),
                )?;
                Ok(task.clone())
            })
            .await?;
        info!(id = %task_id, priority = %priority, "priority updated");
        Ok(task)
    }

    /// Change a task's status. No transition graph is enforced; a CANCELLED
    /// or COMPLETED task can be reopened by a manual override.
    pub async fn update_status(
        &self,
        task_id: &str,
        status: TaskStatus,
        updated_by: &str,
    ) -> Result<Task, TaskError> {
        let task = self
            .store
            .mutate(task_id, |task| {
                let old = task.status;
                task.status = status;
                task.updated_at = Utc::now();
                audit::record(
                    task,
                    updated_by,
                    "STATUS_UPDATED",
                    format!("Status changed from {old} to {status}"),
                )?;
                Ok(task.clone())
            })
            .await?;
        info!(id = %task_id, status = %status, "status updated");
        Ok(task)
    }

    /// Append a comment and its COMMENT_ADDED audit entry.
    pub async fn add_comment(
        &self,
        task_id: &str,
        user_id: &str,
        text: &str,
    ) -> Result<Task, TaskError> {
        let task = self
            .store
            .mutate(task_id, |task| {
                task.comments.push(Comment {
                    id: new_id(),
                    task_id: task.id.clone(),
                    user_id: user_id.to_string(),
                    text: text.to_string(),
                    timestamp: Utc::now(),
                });
                task.updated_at = Utc::now();
                audit::record(
                    task,
                    user_id,
                    "COMMENT_ADDED",
                    format!("Comment added: \"{}\"", preview(text)),
                )?;
                Ok(task.clone())
            })
            .await?;
        info!(id = %task_id, user = %user_id, "comment added");
        Ok(task)
    }
}

fn require_text(value: Option<String>, field: &str) -> Result<String, TaskError> {
    match value {
        Some(s) if !s.trim().is_empty() => Ok(s),
        _ => Err(TaskError::Validation(format!("{field} is required"))),
    }
}

/// Truncate comment text for the audit description. Char-based so multi-byte
/// text never splits inside a code point.
fn preview(text: &str) -> String {
    if text.chars().count() > COMMENT_LOG_PREVIEW_CHARS {
        let head: String = text.chars().take(COMMENT_LOG_PREVIEW_CHARS).collect();
        format!("{head}...")
    } else {
        text.to_string()
    }
}
