use crate::database::{Database, Record, Table};
use opsdesk_types::tasks::{Task, TaskStatus};
use time::OffsetDateTime;
use tokio::sync::RwLock;

impl Record for Task {
    fn id(&self) -> u64 {
        self.id
    }
}

/// A database extension for the tasks-related operations.
pub struct TasksDatabaseExt<'db> {
    table: &'db RwLock<Table<Task>>,
}

impl<'db> TasksDatabaseExt<'db> {
    pub fn new(table: &'db RwLock<Table<Task>>) -> Self {
        Self { table }
    }

    /// Retrieves all tasks in insertion order. If `status` is specified, only tasks with exactly
    /// this status are returned.
    pub async fn get_tasks(&self, status: Option<TaskStatus>) -> anyhow::Result<Vec<Task>> {
        Ok(self
            .table
            .read()
            .await
            .rows()
            .iter()
            .filter(|task| status.map_or(true, |status| task.status == status))
            .cloned()
            .collect())
    }

    /// Retrieves all active tasks that are scheduled to run after the specified time.
    pub async fn get_scheduled_tasks(&self, after: OffsetDateTime) -> anyhow::Result<Vec<Task>> {
        Ok(self
            .table
            .read()
            .await
            .rows()
            .iter()
            .filter(|task| task.status == TaskStatus::Active && task.next_run > after)
            .cloned()
            .collect())
    }

    /// Retrieves task with the specified ID.
    pub async fn get_task(&self, id: u64) -> anyhow::Result<Option<Task>> {
        Ok(self.table.read().await.get(id).cloned())
    }

    /// Inserts a task built for the next available ID. ID reservation and insertion happen
    /// atomically.
    pub async fn insert_task<F>(&self, build: F) -> anyhow::Result<Task>
    where
        F: FnOnce(u64) -> Task,
    {
        Ok(self.table.write().await.insert_with(build).clone())
    }

    /// Updates task with the specified ID in place and returns the updated task, or `None` if
    /// the task doesn't exist.
    pub async fn update_task<F>(&self, id: u64, update: F) -> anyhow::Result<Option<Task>>
    where
        F: FnOnce(&mut Task),
    {
        let mut table = self.table.write().await;
        Ok(table.get_mut(id).map(|task| {
            update(task);
            task.clone()
        }))
    }

    /// Removes task with the specified ID, returns `false` if the task doesn't exist.
    pub async fn remove_task(&self, id: u64) -> anyhow::Result<bool> {
        Ok(self.table.write().await.remove(id).is_some())
    }
}

impl Database {
    /// Returns a database extension for the tasks-related operations.
    pub fn tasks(&self) -> TasksDatabaseExt<'_> {
        TasksDatabaseExt::new(&self.tasks)
    }
}
