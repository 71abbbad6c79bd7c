use crate::{error::Error as OpsdeskError, server::ServerState};
use actix_web::{get, web, HttpResponse};
use opsdesk_types::monitoring::NetworkMetrics;
use serde_json::json;
use tracing::error;

/// Gets latest metrics of the monitored network devices.
#[utoipa::path(
    tags = ["monitoring"],
    responses(
        (status = 200, description = "Latest metrics of the monitored network devices.", body = [NetworkMetrics])
    )
)]
#[get("/api/monitoring/network-metrics")]
pub async fn monitoring_network_metrics(
    state: web::Data<ServerState>,
) -> Result<HttpResponse, OpsdeskError> {
    match state.api.monitoring().get_network_metrics().await {
        Ok(metrics) => Ok(HttpResponse::Ok().json(json!({ "metrics": metrics }))),
        Err(err) => {
            error!("Failed to retrieve network metrics: {err:?}");
            Err(err.into())
        }
    }
}
