use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Overall status of the system.
#[derive(Debug, Copy, Clone, Deserialize, Serialize, PartialEq, Eq, Hash, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
}
