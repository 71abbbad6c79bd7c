use crate::database::Database;
use opsdesk_types::{
    monitoring::{Alert, AlertSeverity, MetricsStatus, NetworkMetrics, ServerMetrics},
    tasks::{Task, TaskStatus},
};
use time::{macros::datetime, Duration, OffsetDateTime};

/// Populates datastore with the demo records of the IT operations console.
pub(super) async fn seed(db: &Database) -> anyhow::Result<()> {
    let now = OffsetDateTime::now_utc();

    let mut tasks = db.tasks.write().await;
    tasks.insert_with(|id| Task {
        id,
        name: "Backup Database".to_string(),
        description: "Daily backup of production database".to_string(),
        schedule: "0 2 * * *".to_string(),
        status: TaskStatus::Active,
        last_run: Some(now - Duration::hours(24)),
        next_run: now + Duration::hours(23),
        created_at: datetime!(2023-01-15 0:00 UTC),
        updated_at: datetime!(2023-01-15 0:00 UTC),
    });
    tasks.insert_with(|id| Task {
        id,
        name: "Security Scan".to_string(),
        description: "Weekly security vulnerability scan".to_string(),
        schedule: "0 3 * * 0".to_string(),
        status: TaskStatus::Active,
        last_run: Some(now - Duration::days(7)),
        next_run: now + Duration::days(6),
        created_at: datetime!(2023-01-20 0:00 UTC),
        updated_at: datetime!(2023-01-20 0:00 UTC),
    });
    tasks.insert_with(|id| Task {
        id,
        name: "System Update".to_string(),
        description: "Monthly system updates".to_string(),
        schedule: "0 4 1 * *".to_string(),
        status: TaskStatus::Inactive,
        last_run: None,
        next_run: now,
        created_at: datetime!(2023-01-25 0:00 UTC),
        updated_at: datetime!(2023-01-25 0:00 UTC),
    });
    drop(tasks);

    let mut server_metrics = db.server_metrics.write().await;
    server_metrics.insert_with(|id| ServerMetrics {
        id,
        server_name: "Web Server 1".to_string(),
        cpu_usage: 45.0,
        memory_usage: 60.0,
        disk_usage: 30.0,
        network_in: 12.5,
        network_out: 8.2,
        status: MetricsStatus::Online,
        last_updated: now,
    });
    server_metrics.insert_with(|id| ServerMetrics {
        id,
        server_name: "Database Server".to_string(),
        cpu_usage: 75.0,
        memory_usage: 85.0,
        disk_usage: 65.0,
        network_in: 45.1,
        network_out: 32.7,
        status: MetricsStatus::Warning,
        last_updated: now,
    });
    drop(server_metrics);

    let mut network_metrics = db.network_metrics.write().await;
    network_metrics.insert_with(|id| NetworkMetrics {
        id,
        device_name: "Core Switch".to_string(),
        bandwidth_utilization: 35.0,
        packet_loss: 0.1,
        latency: 5.0,
        status: MetricsStatus::Online,
        last_updated: now,
    });
    network_metrics.insert_with(|id| NetworkMetrics {
        id,
        device_name: "Firewall".to_string(),
        bandwidth_utilization: 65.0,
        packet_loss: 0.2,
        latency: 12.0,
        status: MetricsStatus::Online,
        last_updated: now,
    });
    drop(network_metrics);

    let mut alerts = db.alerts.write().await;
    alerts.insert_with(|id| Alert {
        id,
        title: "High CPU Usage".to_string(),
        description: "Server Web Server 1 has high CPU usage".to_string(),
        severity: AlertSeverity::Warning,
        server_id: Some(1),
        timestamp: now,
        resolved: false,
    });
    alerts.insert_with(|id| Alert {
        id,
        title: "Disk Space Low".to_string(),
        description: "Database Server has low disk space".to_string(),
        severity: AlertSeverity::Critical,
        server_id: Some(2),
        timestamp: now,
        resolved: false,
    });

    Ok(())
}
