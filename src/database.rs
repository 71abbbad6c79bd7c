mod demo_data;
mod table;

pub use self::table::{Record, Table};
use opsdesk_types::{
    assets::Asset,
    monitoring::{Alert, NetworkMetrics, ServerMetrics},
    tasks::Task,
};
use tokio::sync::RwLock;
use tracing::info;

/// Primary in-memory datastore. Every table is guarded by its own lock, so that mutations of the
/// same table never interleave. Extensions are implemented separately in every module.
#[derive(Default)]
pub struct Database {
    pub(crate) tasks: RwLock<Table<Task>>,
    pub(crate) assets: RwLock<Table<Asset>>,
    pub(crate) alerts: RwLock<Table<Alert>>,
    pub(crate) server_metrics: RwLock<Table<ServerMetrics>>,
    pub(crate) network_metrics: RwLock<Table<NetworkMetrics>>,
}

impl Database {
    /// Creates an empty datastore.
    pub fn create() -> Self {
        Self::default()
    }

    /// Seeds datastore with the demo tasks, metrics, and alerts.
    pub async fn seed_demo_data(&self) -> anyhow::Result<()> {
        demo_data::seed(self).await?;

        info!(
            tasks = self.tasks.read().await.len(),
            alerts = self.alerts.read().await.len(),
            "Seeded datastore with demo data."
        );

        Ok(())
    }
}

impl AsRef<Database> for Database {
    fn as_ref(&self) -> &Self {
        self
    }
}
