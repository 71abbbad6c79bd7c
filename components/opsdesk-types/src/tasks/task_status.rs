use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Status of the automation task. Only active tasks are considered scheduled.
#[derive(Debug, Copy, Clone, Default, Deserialize, Serialize, PartialEq, Eq, Hash, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    #[default]
    Active,
    Inactive,
}
