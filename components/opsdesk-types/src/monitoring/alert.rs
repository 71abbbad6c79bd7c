use crate::monitoring::AlertSeverity;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use utoipa::ToSchema;

/// Monitoring alert raised for a server.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    /// Unique sequential alert id.
    pub id: u64,
    /// Short summary of the alert.
    pub title: String,
    /// Detailed description of the alert, empty if not provided.
    pub description: String,
    pub severity: AlertSeverity,
    /// ID of the server the alert is related to, if any.
    pub server_id: Option<u64>,
    /// Date and time when the alert was raised.
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    /// Whether the alert has been resolved.
    pub resolved: bool,
}
