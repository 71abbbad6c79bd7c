use crate::{
    api::Api,
    error::Error as OpsdeskError,
    tasks::{database_ext::TasksDatabaseExt, next_run_after},
};
use anyhow::bail;
use opsdesk_types::tasks::{Task, TaskCreateParams, TaskUpdateParams, TasksListParams};
use time::OffsetDateTime;
use tracing::{debug, info};

/// Message of the error returned when referenced task doesn't exist.
pub const TASK_NOT_FOUND_MESSAGE: &str = "Task not found";

/// Message of the error returned when task is created without name or schedule.
const TASK_REQUIRED_FIELDS_MESSAGE: &str = "Name and schedule are required";

/// Message of the error returned when task name or schedule is updated to an empty value.
const TASK_EMPTY_FIELDS_MESSAGE: &str = "Name and schedule cannot be empty";

pub struct TasksApiExt<'a> {
    api: &'a Api,
    tasks: TasksDatabaseExt<'a>,
}

impl<'a> TasksApiExt<'a> {
    /// Creates Tasks API.
    pub fn new(api: &'a Api) -> Self {
        Self {
            api,
            tasks: api.db.tasks(),
        }
    }

    /// Returns all tasks in insertion order, optionally filtered by status.
    pub async fn get_tasks(&self, params: TasksListParams) -> anyhow::Result<Vec<Task>> {
        self.tasks.get_tasks(params.status).await
    }

    /// Returns all active tasks that will run after the specified time. Active tasks that are
    /// overdue (next run is at or before `now`) aren't included.
    pub async fn get_scheduled_tasks(&self, now: OffsetDateTime) -> anyhow::Result<Vec<Task>> {
        self.tasks.get_scheduled_tasks(now).await
    }

    /// Returns task by its ID.
    pub async fn get_task(&self, id: u64) -> anyhow::Result<Task> {
        let Some(task) = self.tasks.get_task(id).await? else {
            bail!(OpsdeskError::not_found(TASK_NOT_FOUND_MESSAGE));
        };

        Ok(task)
    }

    /// Creates a new task.
    pub async fn create_task(&self, params: TaskCreateParams) -> anyhow::Result<Task> {
        let (Some(name), Some(schedule)) = (
            params.name.filter(|name| !name.is_empty()),
            params.schedule.filter(|schedule| !schedule.is_empty()),
        ) else {
            bail!(OpsdeskError::client(TASK_REQUIRED_FIELDS_MESSAGE));
        };

        let created_at = OffsetDateTime::now_utc();
        let next_run = self.next_run_after(&schedule, created_at);
        let task = self
            .tasks
            .insert_task(|id| Task {
                id,
                name,
                description: params.description.unwrap_or_default(),
                schedule,
                status: params.status.unwrap_or_default(),
                last_run: None,
                next_run,
                created_at,
                updated_at: created_at,
            })
            .await?;

        info!(
            task.id = task.id,
            task.name = task.name,
            task.next_run = %task.next_run,
            "Created automation task."
        );

        Ok(task)
    }

    /// Updates existing task. Properties that aren't provided are left unchanged, and next run is
    /// recalculated only if schedule is provided.
    pub async fn update_task(&self, id: u64, params: TaskUpdateParams) -> anyhow::Result<Task> {
        let has_empty_name = params.name.as_ref().is_some_and(|name| name.is_empty());
        let has_empty_schedule = params
            .schedule
            .as_ref()
            .is_some_and(|schedule| schedule.is_empty());
        if has_empty_name || has_empty_schedule {
            bail!(OpsdeskError::client(TASK_EMPTY_FIELDS_MESSAGE));
        }

        let updated_at = OffsetDateTime::now_utc();
        let next_run = params
            .schedule
            .as_ref()
            .map(|schedule| self.next_run_after(schedule, updated_at));
        let task = self
            .tasks
            .update_task(id, |task| {
                if let Some(name) = params.name {
                    task.name = name;
                }
                if let Some(description) = params.description {
                    task.description = description;
                }
                if let Some(schedule) = params.schedule {
                    task.schedule = schedule;
                }
                if let Some(status) = params.status {
                    task.status = status;
                }
                if let Some(next_run) = next_run {
                    task.next_run = next_run;
                }
                task.updated_at = updated_at;
            })
            .await?;

        let Some(task) = task else {
            bail!(OpsdeskError::not_found(TASK_NOT_FOUND_MESSAGE));
        };

        debug!(task.id = task.id, task.name = task.name, "Updated automation task.");

        Ok(task)
    }

    /// Removes existing task.
    pub async fn remove_task(&self, id: u64) -> anyhow::Result<()> {
        if !self.tasks.remove_task(id).await? {
            bail!(OpsdeskError::not_found(TASK_NOT_FOUND_MESSAGE));
        }

        info!(task.id = id, "Removed automation task.");

        Ok(())
    }

    /// Marks the task as just run. The task isn't actually executed and its next run is left
    /// unchanged.
    pub async fn run_task(&self, id: u64) -> anyhow::Result<Task> {
        let run_at = OffsetDateTime::now_utc();
        let task = self
            .tasks
            .update_task(id, |task| {
                task.last_run = Some(run_at);
                task.updated_at = run_at;
            })
            .await?;

        let Some(task) = task else {
            bail!(OpsdeskError::not_found(TASK_NOT_FOUND_MESSAGE));
        };

        info!(
            task.id = task.id,
            task.name = task.name,
            task.last_run = %run_at,
            "Automation task was run manually."
        );

        Ok(task)
    }

    /// Calculates the next run of the task with the specified schedule according to the
    /// configured strategy.
    pub fn next_run_after(&self, schedule: &str, from: OffsetDateTime) -> OffsetDateTime {
        next_run_after(&self.api.config.tasks.next_run, schedule, from)
    }
}

impl Api {
    /// Returns an API to work with automation tasks.
    pub fn tasks(&self) -> TasksApiExt<'_> {
        TasksApiExt::new(self)
    }
}
