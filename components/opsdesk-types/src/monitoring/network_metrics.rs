use crate::monitoring::MetricsStatus;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use utoipa::ToSchema;

/// Health snapshot of a monitored network device.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NetworkMetrics {
    pub id: u64,
    pub device_name: String,
    /// Bandwidth utilization, in percent.
    pub bandwidth_utilization: f64,
    /// Packet loss, in percent.
    pub packet_loss: f64,
    /// Round-trip latency, in milliseconds.
    pub latency: f64,
    pub status: MetricsStatus,
    #[serde(with = "time::serde::rfc3339")]
    pub last_updated: OffsetDateTime,
}
