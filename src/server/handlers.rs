pub mod assets_create;
pub mod assets_get;
pub mod assets_list;
pub mod assets_remove;
pub mod assets_search;
pub mod assets_update;
pub mod monitoring_alerts_create;
pub mod monitoring_alerts_list;
pub mod monitoring_health;
pub mod monitoring_network_metrics;
pub mod monitoring_server_metrics;
pub mod status_get;
pub mod tasks_create;
pub mod tasks_get;
pub mod tasks_list;
pub mod tasks_list_scheduled;
pub mod tasks_remove;
pub mod tasks_run;
pub mod tasks_update;

use crate::server::Status;
use opsdesk_types::{
    assets::{
        Asset, AssetCreateParams, AssetStatus, AssetType, AssetUpdateParams, AssetsPage,
    },
    monitoring::{
        Alert, AlertCreateParams, AlertSeverity, HealthStatus, MetricsStatus, NetworkMetrics,
        ServerMetrics, SystemHealth,
    },
    tasks::{Task, TaskCreateParams, TaskStatus, TaskUpdateParams},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "Opsdesk"),
    paths(
        status_get::status_get,
        tasks_list::tasks_list,
        tasks_list_scheduled::tasks_list_scheduled,
        tasks_get::tasks_get,
        tasks_create::tasks_create,
        tasks_update::tasks_update,
        tasks_remove::tasks_remove,
        tasks_run::tasks_run,
        assets_list::assets_list,
        assets_search::assets_search,
        assets_get::assets_get,
        assets_create::assets_create,
        assets_update::assets_update,
        assets_remove::assets_remove,
        monitoring_server_metrics::monitoring_server_metrics,
        monitoring_network_metrics::monitoring_network_metrics,
        monitoring_alerts_list::monitoring_alerts_list,
        monitoring_alerts_create::monitoring_alerts_create,
        monitoring_health::monitoring_health
    ),
    components(schemas(
        Alert,
        AlertCreateParams,
        AlertSeverity,
        Asset,
        AssetCreateParams,
        AssetStatus,
        AssetType,
        AssetUpdateParams,
        AssetsPage,
        HealthStatus,
        MetricsStatus,
        NetworkMetrics,
        ServerMetrics,
        Status,
        SystemHealth,
        Task,
        TaskCreateParams,
        TaskStatus,
        TaskUpdateParams
    ))
)]
pub(super) struct OpsdeskOpenApi;
