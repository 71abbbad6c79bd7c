mod alert;
mod alert_create_params;
mod alert_severity;
mod alerts_list_params;
mod health_status;
mod metrics_status;
mod network_metrics;
mod server_metrics;
mod system_health;

pub use self::{
    alert::Alert, alert_create_params::AlertCreateParams, alert_severity::AlertSeverity,
    alerts_list_params::AlertsListParams, health_status::HealthStatus,
    metrics_status::MetricsStatus, network_metrics::NetworkMetrics,
    server_metrics::ServerMetrics, system_health::SystemHealth,
};
