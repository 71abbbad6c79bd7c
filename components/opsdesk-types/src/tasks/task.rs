use crate::tasks::TaskStatus;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use utoipa::ToSchema;

/// Automation task that runs on a cron-like schedule.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique sequential task id.
    pub id: u64,
    /// Arbitrary name of the task.
    pub name: String,
    /// Free-form description of the task, empty if not provided.
    pub description: String,
    /// Cron-style schedule of the task (e.g. `0 2 * * *`).
    pub schedule: String,
    /// Task status.
    pub status: TaskStatus,
    /// Date and time when the task was last run manually, if ever.
    #[serde(with = "time::serde::rfc3339::option")]
    pub last_run: Option<OffsetDateTime>,
    /// Date and time of the next scheduled run.
    #[serde(with = "time::serde::rfc3339")]
    pub next_run: OffsetDateTime,
    /// Date and time when the task was created.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    /// Date and time when the task was last updated.
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}
