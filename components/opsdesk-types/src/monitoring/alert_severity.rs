use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Severity of the monitoring alert.
#[derive(Debug, Copy, Clone, Deserialize, Serialize, PartialEq, Eq, Hash, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Info,
    Warning,
    Critical,
}
