//! Audit Log Recorder — appends immutable activity entries to a task.
//!
//! Called synchronously inside every lifecycle mutation, within the store's
//! mutation scope, so a visible mutation always carries its log entry. Never
//! batched, never asynchronous.

use chrono::Utc;

use crate::error::TaskError;
use crate::model::{new_id, ActivityLog, Task};

/// Append an activity entry with a fresh id and current timestamp.
///
/// Fails only on an empty action tag.
pub fn record(
    task: &mut Task,
    user_id: &str,
    action: &str,
    description: impl Into<String>,
) -> Result<(), TaskError> {
    if action.trim().is_empty() {
        return Err(TaskError::Validation("empty action tag".to_string()));
    }
    task.activity_history.push(ActivityLog {
        id: new_id(),
        task_id: task.id.clone(),
        user_id: user_id.to_string(),
        action: action.to_string(),
        description: description.into(),
        timestamp: Utc::now(),
    });
    Ok(())
}
