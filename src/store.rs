//! Task Store — the canonical in-memory task collection.
//!
//! Keyed storage only, no business rules. All in-place mutation goes through
//! [`TaskStore::mutate`], which holds the write lock for the whole
//! read-modify-write so no concurrent writer can interleave and overwrite.

use std::collections::HashMap;

use tokio::sync::RwLock;

use crate::error::TaskError;
use crate::model::Task;

pub struct TaskStore {
    tasks: RwLock<HashMap<String, Task>>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self {
            tasks: RwLock::new(HashMap::new()),
        }
    }

    /// Add a new task. Fails with `Conflict` if the id already exists.
    pub async fn insert(&self, task: Task) -> Result<(), TaskError> {
        let mut tasks = self.tasks.write().await;
        if tasks.contains_key(&task.id) {
            return Err(TaskError::Conflict { id: task.id });
        }
        tasks.insert(task.id.clone(), task);
        Ok(())
    }

    /// Fetch a task by id.
    pub async fn get(&self, id: &str) -> Result<Task, TaskError> {
        self.tasks
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| TaskError::NotFound { id: id.to_string() })
    }

    /// All tasks, iteration order unspecified.
    pub async fn list(&self) -> Vec<Task> {
        self.tasks.read().await.values().cloned().collect()
    }

    pub async fn count(&self) -> usize {
        self.tasks.read().await.len()
    }

    /// Scoped exclusive access: fetch the task, apply the caller's
    /// transformation, persist the result. The sole path for in-place
    /// mutation — the write lock covers the entire closure.
    pub async fn mutate<R, F>(&self, id: &str, f: F) -> Result<R, TaskError>
    where
        F: FnOnce(&mut Task) -> Result<R, TaskError>,
    {
        let mut tasks = self.tasks.write().await;
        let task = tasks
            .get_mut(id)
            .ok_or_else(|| TaskError::NotFound { id: id.to_string() })?;
        f(task)
    }

    /// Mutate an existing record and insert a successor record derived from
    /// it, under a single write-lock scope. Readers never observe the
    /// mutation without the successor or the successor without the mutation.
    ///
    /// The closure receives the existing record and returns the successor to
    /// insert. Fails with `NotFound` if `id` is absent (nothing is inserted)
    /// and `Conflict` if the successor's id already exists.
    pub async fn mutate_and_insert<F>(&self, id: &str, f: F) -> Result<Task, TaskError>
    where
        F: FnOnce(&mut Task) -> Result<Task, TaskError>,
    {
        let mut tasks = self.tasks.write().await;
        let successor = {
            let original = tasks
                .get_mut(id)
                .ok_or_else(|| TaskError::NotFound { id: id.to_string() })?;
            f(original)?
        };
        if tasks.contains_key(&successor.id) {
            return Err(TaskError::Conflict { id: successor.id });
        }
        let out = successor.clone();
        tasks.insert(successor.id.clone(), successor);
        Ok(out)
    }
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}
