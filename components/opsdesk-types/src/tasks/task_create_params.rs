use crate::tasks::TaskStatus;
use serde::Deserialize;
use utoipa::ToSchema;

/// Parameters for creating a task. Name and schedule are validated by the server, so that missing,
/// `null` and empty values are reported the same way.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TaskCreateParams {
    /// Arbitrary name of the task.
    #[schema(min_length = 1)]
    pub name: Option<String>,
    /// Optional description of the task.
    pub description: Option<String>,
    /// Cron-style schedule of the task.
    #[schema(min_length = 1)]
    pub schedule: Option<String>,
    /// Initial status of the task, `active` if not specified.
    pub status: Option<TaskStatus>,
}
