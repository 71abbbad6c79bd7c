use crate::database::{Database, Record, Table};
use opsdesk_types::monitoring::{Alert, AlertSeverity, NetworkMetrics, ServerMetrics};
use tokio::sync::RwLock;

impl Record for ServerMetrics {
    fn id(&self) -> u64 {
        self.id
    }
}

impl Record for NetworkMetrics {
    fn id(&self) -> u64 {
        self.id
    }
}

impl Record for Alert {
    fn id(&self) -> u64 {
        self.id
    }
}

/// A database extension for the monitoring-related operations.
pub struct MonitoringDatabaseExt<'db> {
    server_metrics: &'db RwLock<Table<ServerMetrics>>,
    network_metrics: &'db RwLock<Table<NetworkMetrics>>,
    alerts: &'db RwLock<Table<Alert>>,
}

impl<'db> MonitoringDatabaseExt<'db> {
    pub fn new(db: &'db Database) -> Self {
        Self {
            server_metrics: &db.server_metrics,
            network_metrics: &db.network_metrics,
            alerts: &db.alerts,
        }
    }

    /// Retrieves latest metrics of all monitored servers.
    pub async fn get_server_metrics(&self) -> anyhow::Result<Vec<ServerMetrics>> {
        Ok(self.server_metrics.read().await.rows().to_vec())
    }

    /// Retrieves latest metrics of all monitored network devices.
    pub async fn get_network_metrics(&self) -> anyhow::Result<Vec<NetworkMetrics>> {
        Ok(self.network_metrics.read().await.rows().to_vec())
    }

    /// Retrieves alerts in insertion order, optionally filtered by resolution state and severity.
    pub async fn get_alerts(
        &self,
        resolved: Option<bool>,
        severity: Option<AlertSeverity>,
    ) -> anyhow::Result<Vec<Alert>> {
        Ok(self
            .alerts
            .read()
            .await
            .rows()
            .iter()
            .filter(|alert| resolved.map_or(true, |resolved| alert.resolved == resolved))
            .filter(|alert| severity.map_or(true, |severity| alert.severity == severity))
            .cloned()
            .collect())
    }

    /// Inserts an alert built for the next available ID.
    pub async fn insert_alert<F>(&self, build: F) -> anyhow::Result<Alert>
    where
        F: FnOnce(u64) -> Alert,
    {
        Ok(self.alerts.write().await.insert_with(build).clone())
    }
}

impl Database {
    /// Returns a database extension for the monitoring-related operations.
    pub fn monitoring(&self) -> MonitoringDatabaseExt<'_> {
        MonitoringDatabaseExt::new(self)
    }
}
