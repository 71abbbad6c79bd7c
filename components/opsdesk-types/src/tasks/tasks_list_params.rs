use crate::tasks::TaskStatus;
use serde::Deserialize;
use utoipa::IntoParams;

/// Parameters for getting a list of tasks.
#[derive(Deserialize, Default, Debug, Copy, Clone, PartialEq, Eq, IntoParams)]
#[into_params(parameter_in = Query)]
#[serde(rename_all = "camelCase")]
pub struct TasksListParams {
    /// Status to filter tasks by (exact match).
    pub status: Option<TaskStatus>,
}
