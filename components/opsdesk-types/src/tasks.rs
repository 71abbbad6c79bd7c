mod task;
mod task_create_params;
mod task_status;
mod task_update_params;
mod tasks_list_params;

pub use self::{
    task::Task, task_create_params::TaskCreateParams, task_status::TaskStatus,
    task_update_params::TaskUpdateParams, tasks_list_params::TasksListParams,
};

#[cfg(test)]
pub mod tests {
    use crate::tasks::{Task, TaskStatus};
    use time::OffsetDateTime;

    pub struct MockTaskBuilder {
        task: Task,
    }

    impl MockTaskBuilder {
        pub fn create<N: Into<String>, S: Into<String>>(
            id: u64,
            name: N,
            schedule: S,
        ) -> anyhow::Result<Self> {
            Ok(Self {
                task: Task {
                    id,
                    name: name.into(),
                    description: String::new(),
                    schedule: schedule.into(),
                    status: TaskStatus::Active,
                    last_run: None,
                    next_run: OffsetDateTime::from_unix_timestamp(946724400)?,
                    created_at: OffsetDateTime::from_unix_timestamp(946720800)?,
                    updated_at: OffsetDateTime::from_unix_timestamp(946720810)?,
                },
            })
        }

        pub fn with_description<D: Into<String>>(mut self, description: D) -> Self {
            self.task.description = description.into();
            self
        }

        pub fn with_status(mut self, status: TaskStatus) -> Self {
            self.task.status = status;
            self
        }

        pub fn with_last_run(mut self, last_run: OffsetDateTime) -> Self {
            self.task.last_run = Some(last_run);
            self
        }

        pub fn build(self) -> Task {
            self.task
        }
    }
}
