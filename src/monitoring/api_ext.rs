use crate::{api::Api, error::Error as OpsdeskError, monitoring::database_ext::MonitoringDatabaseExt};
use anyhow::bail;
use opsdesk_types::monitoring::{
    Alert, AlertCreateParams, AlertSeverity, AlertsListParams, HealthStatus, NetworkMetrics,
    ServerMetrics, SystemHealth,
};
use std::collections::BTreeMap;
use time::OffsetDateTime;
use tracing::info;

pub struct MonitoringApiExt<'a> {
    api: &'a Api,
    monitoring: MonitoringDatabaseExt<'a>,
}

impl<'a> MonitoringApiExt<'a> {
    /// Creates Monitoring API.
    pub fn new(api: &'a Api) -> Self {
        Self {
            api,
            monitoring: api.db.monitoring(),
        }
    }

    /// Returns latest metrics of all monitored servers.
    pub async fn get_server_metrics(&self) -> anyhow::Result<Vec<ServerMetrics>> {
        self.monitoring.get_server_metrics().await
    }

    /// Returns latest metrics of all monitored network devices.
    pub async fn get_network_metrics(&self) -> anyhow::Result<Vec<NetworkMetrics>> {
        self.monitoring.get_network_metrics().await
    }

    /// Returns alerts that match the specified filters.
    pub async fn get_alerts(&self, params: AlertsListParams) -> anyhow::Result<Vec<Alert>> {
        self.monitoring
            .get_alerts(params.resolved, params.severity)
            .await
    }

    /// Raises a new unresolved alert.
    pub async fn create_alert(&self, params: AlertCreateParams) -> anyhow::Result<Alert> {
        let (Some(title), Some(severity)) =
            (params.title.filter(|title| !title.is_empty()), params.severity)
        else {
            bail!(OpsdeskError::client("Title and severity are required"));
        };

        let timestamp = OffsetDateTime::now_utc();
        let alert = self
            .monitoring
            .insert_alert(|id| Alert {
                id,
                title,
                description: params.description.unwrap_or_default(),
                severity,
                server_id: params.server_id,
                timestamp,
                resolved: false,
            })
            .await?;

        info!(
            alert.id = alert.id,
            alert.severity = ?alert.severity,
            "Raised alert: {}.",
            alert.title
        );

        Ok(alert)
    }

    /// Returns health of the system. The system is considered degraded while there are unresolved
    /// critical alerts.
    pub async fn get_system_health(&self) -> anyhow::Result<SystemHealth> {
        let critical_alerts = self
            .monitoring
            .get_alerts(Some(false), Some(AlertSeverity::Critical))
            .await?
            .len();

        let checks = BTreeMap::from([
            ("api".to_string(), "running".to_string()),
            ("database".to_string(), "connected".to_string()),
            (
                "alerts".to_string(),
                if critical_alerts > 0 {
                    format!("{critical_alerts} critical")
                } else {
                    "ok".to_string()
                },
            ),
        ]);

        Ok(SystemHealth {
            overall_status: if critical_alerts > 0 {
                HealthStatus::Degraded
            } else {
                HealthStatus::Healthy
            },
            checks,
            timestamp: OffsetDateTime::now_utc(),
            uptime: self.api.uptime().as_secs_f64(),
        })
    }
}

impl Api {
    /// Returns an API to work with monitoring data.
    pub fn monitoring(&self) -> MonitoringApiExt<'_> {
        MonitoringApiExt::new(self)
    }
}
