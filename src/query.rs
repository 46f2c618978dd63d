//! Query Engine — read-side views over the task store.
//!
//! Every list view applies the same cancellation-exclusion policy: a
//! CANCELLED task never appears, regardless of dates or prior operations.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::error::TaskError;
use crate::model::{Task, TaskPriority, TaskStatus};
use crate::store::TaskStore;

pub struct TaskQueries {
    store: Arc<TaskStore>,
}

impl TaskQueries {
    pub fn new(store: Arc<TaskStore>) -> Self {
        Self { store }
    }

    /// Fetch a task with its activity history and comments in chronological
    /// order.
    ///
    /// The sort happens in place on the stored record, not on a copy: the
    /// ordering persists in storage for subsequent reads. `sort_by_key` is
    /// stable, so entries with colliding timestamps keep insertion order.
    pub async fn get_by_id(&self, id: &str) -> Result<Task, TaskError> {
        self.store
            .mutate(id, |task| {
                task.activity_history.sort_by_key(|e| e.timestamp);
                task.comments.sort_by_key(|c| c.timestamp);
                Ok(task.clone())
            })
            .await
    }

    /// Every task that is not cancelled. No ordering guarantee.
    pub async fn list_all(&self) -> Vec<Task> {
        self.store
            .list()
            .await
            .into_iter()
            .filter(|t| t.status != TaskStatus::Cancelled)
            .collect()
    }

    /// Non-cancelled tasks assigned to the given staff member.
    pub async fn list_by_staff(&self, staff_id: &str) -> Vec<Task> {
        self.store
            .list()
            .await
            .into_iter()
            .filter(|t| t.status != TaskStatus::Cancelled)
            .filter(|t| t.assigned_staff_id == staff_id)
            .collect()
    }

    /// Non-cancelled tasks at the given priority.
    pub async fn list_by_priority(&self, priority: TaskPriority) -> Vec<Task> {
        self.store
            .list()
            .await
            .into_iter()
            .filter(|t| t.status != TaskStatus::Cancelled)
            .filter(|t| t.priority == priority)
            .collect()
    }

    /// Smart daily view: tasks whose start date falls within
    /// `[start, end]` inclusive, plus tasks that started before the window
    /// and are still ACTIVE. Overdue-but-open work surfaces no matter when it
    /// started; completed overdue work does not.
    pub async fn list_by_date_range(&self, start: NaiveDate, end: NaiveDate) -> Vec<Task> {
        self.store
            .list()
            .await
            .into_iter()
            .filter(|t| t.status != TaskStatus::Cancelled)
            .filter(|t| {
                let started = t.start_date.date_naive();
                (started >= start && started <= end)
                    || (started < start && t.status == TaskStatus::Active)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::{CreateTaskParams, TaskLifecycle};
    use chrono::{DateTime, Duration, TimeZone, Utc};

    struct Fixture {
        lifecycle: TaskLifecycle,
        queries: TaskQueries,
        store: Arc<TaskStore>,
    }

    fn fixture() -> Fixture {
        let store = Arc::new(TaskStore::new());
        Fixture {
            lifecycle: TaskLifecycle::new(store.clone()),
            queries: TaskQueries::new(store.clone()),
            store,
        }
    }

    fn params_starting(staff: &str, start: DateTime<Utc>) -> CreateTaskParams {
        CreateTaskParams {
            title: Some("Task".to_string()),
            assigned_staff_id: Some(staff.to_string()),
            start_date: Some(start),
            due_date: Some(start + Duration::days(2)),
            ..Default::default()
        }
    }

    fn day(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 9, 30, 0).unwrap()
    }

    #[tokio::test]
    async fn list_views_never_include_cancelled_tasks() {
        let f = fixture();
        let keep = f
            .lifecycle
            .create(params_starting("staff1", Utc::now()), "mgr")
            .await
            .unwrap();
        let doomed = f
            .lifecycle
            .create(params_starting("staff1", Utc::now()), "mgr")
            .await
            .unwrap();
        f.lifecycle
            .update_status(&doomed.id, TaskStatus::Cancelled, "mgr")
            .await
            .unwrap();

        let all = f.queries.list_all().await;
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, keep.id);

        let by_staff = f.queries.list_by_staff("staff1").await;
        assert_eq!(by_staff.len(), 1);

        let by_priority = f.queries.list_by_priority(TaskPriority::Medium).await;
        assert_eq!(by_priority.len(), 1);

        // get_by_id still reaches the cancelled record directly.
        assert_eq!(
            f.queries.get_by_id(&doomed.id).await.unwrap().status,
            TaskStatus::Cancelled
        );
    }

    #[tokio::test]
    async fn reassigned_original_disappears_from_staff_view() {
        let f = fixture();
        let original = f
            .lifecycle
            .create(params_starting("staff1", Utc::now()), "mgr")
            .await
            .unwrap();
        let successor = f.lifecycle.reassign(&original.id, "staff2", "mgr").await.unwrap();

        assert!(f.queries.list_by_staff("staff1").await.is_empty());
        let staff2 = f.queries.list_by_staff("staff2").await;
        assert_eq!(staff2.len(), 1);
        assert_eq!(staff2[0].id, successor.id);

        let all = f.queries.list_all().await;
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, successor.id);
    }

    #[tokio::test]
    async fn date_range_surfaces_overdue_active_but_not_overdue_completed() {
        let f = fixture();
        // A: started 2024-01-01, still active — included via the overdue rule.
        let a = f
            .lifecycle
            .create(params_starting("staff1", day(2024, 1, 1)), "mgr")
            .await
            .unwrap();
        // B: started 2024-01-01 but completed — excluded entirely.
        let b = f
            .lifecycle
            .create(params_starting("staff1", day(2024, 1, 1)), "mgr")
            .await
            .unwrap();
        f.lifecycle
            .update_status(&b.id, TaskStatus::Completed, "mgr")
            .await
            .unwrap();
        // C: started 2024-01-10 — included via the in-range rule.
        let c = f
            .lifecycle
            .create(params_starting("staff1", day(2024, 1, 10)), "mgr")
            .await
            .unwrap();

        let start = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let view = f.queries.list_by_date_range(start, end).await;

        let mut ids: Vec<_> = view.iter().map(|t| t.id.as_str()).collect();
        ids.sort_unstable();
        let mut expected = vec![a.id.as_str(), c.id.as_str()];
        expected.sort_unstable();
        assert_eq!(ids, expected);
    }

    #[tokio::test]
    async fn date_range_bounds_are_inclusive() {
        let f = fixture();
        let on_start = f
            .lifecycle
            .create(params_starting("staff1", day(2024, 1, 5)), "mgr")
            .await
            .unwrap();
        let on_end = f
            .lifecycle
            .create(params_starting("staff1", day(2024, 1, 15)), "mgr")
            .await
            .unwrap();
        // Completed tasks inside the window still match the in-range rule.
        f.lifecycle
            .update_status(&on_end.id, TaskStatus::Completed, "mgr")
            .await
            .unwrap();

        let start = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let view = f.queries.list_by_date_range(start, end).await;
        assert_eq!(view.len(), 2);
        assert!(view.iter().any(|t| t.id == on_start.id));
        assert!(view.iter().any(|t| t.id == on_end.id));
    }

    #[tokio::test]
    async fn get_by_id_sorts_history_in_storage() {
        use crate::model::{new_id, ActivityLog, Comment, Task};

        // Build a task whose history was appended out of chronological order.
        let now = Utc::now();
        let id = new_id();
        let entry = |offset_secs: i64, action: &str| ActivityLog {
            id: new_id(),
            task_id: id.clone(),
            user_id: "u1".to_string(),
            action: action.to_string(),
            description: String::new(),
            timestamp: now + Duration::seconds(offset_secs),
        };
        let note = |offset_secs: i64, text: &str| Comment {
            id: new_id(),
            task_id: id.clone(),
            user_id: "u1".to_string(),
            text: text.to_string(),
            timestamp: now + Duration::seconds(offset_secs),
        };
        let task = Task {
            id: id.clone(),
            title: "Task".to_string(),
            description: None,
            status: TaskStatus::Active,
            priority: TaskPriority::Medium,
            assigned_staff_id: "staff1".to_string(),
            start_date: now,
            due_date: now,
            created_at: now,
            updated_at: now,
            created_by: "mgr".to_string(),
            activity_history: vec![entry(30, "B"), entry(10, "A"), entry(30, "C")],
            comments: vec![note(5, "second"), note(0, "first")],
        };

        let f = fixture();
        f.store.insert(task).await.unwrap();

        let fetched = f.queries.get_by_id(&id).await.unwrap();
        let actions: Vec<_> = fetched
            .activity_history
            .iter()
            .map(|e| e.action.as_str())
            .collect();
        // Stable sort: the two 30s entries keep their insertion order.
        assert_eq!(actions, vec!["A", "B", "C"]);
        let texts: Vec<_> = fetched.comments.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "second"]);

        // The ordering persisted in storage, not just in the returned view.
        let stored = f.store.get(&id).await.unwrap();
        let stored_actions: Vec<_> = stored
            .activity_history
            .iter()
            .map(|e| e.action.as_str())
            .collect();
        assert_eq!(stored_actions, vec!["A", "B", "C"]);
    }
}
