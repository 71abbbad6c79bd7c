use crate::monitoring::MetricsStatus;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use utoipa::ToSchema;

/// Resource usage snapshot of a monitored server.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServerMetrics {
    pub id: u64,
    pub server_name: String,
    /// CPU usage, in percent.
    pub cpu_usage: f64,
    /// Memory usage, in percent.
    pub memory_usage: f64,
    /// Disk usage, in percent.
    pub disk_usage: f64,
    /// Inbound traffic, in Mbit/s.
    pub network_in: f64,
    /// Outbound traffic, in Mbit/s.
    pub network_out: f64,
    pub status: MetricsStatus,
    #[serde(with = "time::serde::rfc3339")]
    pub last_updated: OffsetDateTime,
}
