use crate::tasks::TaskStatus;
use serde::Deserialize;
use utoipa::ToSchema;

/// Parameters for updating a task. Fields that aren't provided (or are `null`) are left
/// unchanged.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
pub struct TaskUpdateParams {
    /// New name of the task, cannot be empty.
    pub name: Option<String>,
    /// New description of the task, empty string clears the description.
    pub description: Option<String>,
    /// New schedule of the task, cannot be empty. Always causes next run to be recalculated.
    pub schedule: Option<String>,
    /// New status of the task.
    pub status: Option<TaskStatus>,
}
