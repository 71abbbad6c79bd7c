use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Reported status of a monitored server or network device.
#[derive(Debug, Copy, Clone, Deserialize, Serialize, PartialEq, Eq, Hash, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MetricsStatus {
    Online,
    Warning,
    Offline,
}
