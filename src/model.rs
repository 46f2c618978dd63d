//! Workforce task tracking data model types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Generate a new ULID string.
pub fn new_id() -> String {
    ulid::Ulid::new().to_string()
}

/// The finite set of states a task can be in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    Active,
    Completed,
    Cancelled,
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = serde_json::to_value(self)
            .ok()
            .and_then(|v| v.as_str().map(String::from))
            .unwrap_or_else(|| format!("{:?}", self));
        write!(f, "{}", s)
    }
}

/// Task priority level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = serde_json::to_value(self)
            .ok()
            .and_then(|v| v.as_str().map(String::from))
            .unwrap_or_else(|| format!("{:?}", self));
        write!(f, "{}", s)
    }
}

/// A trackable unit of assigned work.
///
/// Tasks are never physically deleted — cancellation flips the status flag
/// and the record stays in the store with its full history.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub assigned_staff_id: String,
    pub start_date: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: String,
    /// Append-only audit trail. Chronological order is applied at read time.
    pub activity_history: Vec<ActivityLog>,
    /// Append-only comment thread. Chronological order is applied at read time.
    pub comments: Vec<Comment>,
}

/// Immutable audit record of a single state change on a task.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityLog {
    pub id: String,
    pub task_id: String,
    pub user_id: String,
    /// Short action code: CREATED, STATUS_UPDATED, REASSIGNED, CANCELLED,
    /// PRIORITY_UPDATED, COMMENT_ADDED.
    pub action: String,
    pub description: String,
    pub timestamp: DateTime<Utc>,
}

/// Immutable free-text note attached to a task by a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub task_id: String,
    pub user_id: String,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

/// Read-only staff directory entry. The core stores staff ids as opaque
/// references and never validates them against this directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Staff {
    pub id: String,
    pub name: String,
    pub email: String,
    pub department: String,
    pub role: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_screaming_snake() {
        assert_eq!(
            serde_json::to_value(TaskStatus::Cancelled).unwrap(),
            "CANCELLED"
        );
        assert_eq!(TaskStatus::Active.to_string(), "ACTIVE");
    }

    #[test]
    fn priority_display_matches_wire_format() {
        assert_eq!(TaskPriority::Medium.to_string(), "MEDIUM");
        assert_eq!(
            serde_json::from_value::<TaskPriority>(serde_json::json!("HIGH")).unwrap(),
            TaskPriority::High
        );
    }
}
