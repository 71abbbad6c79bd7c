use crate::{error::Error as OpsdeskError, server::ServerState};
use actix_web::{get, web, HttpResponse};
use opsdesk_types::monitoring::ServerMetrics;
use serde_json::json;
use tracing::error;

/// Gets latest metrics of the monitored servers.
#[utoipa::path(
    tags = ["monitoring"],
    responses(
        (status = 200, description = "Latest metrics of the monitored servers.", body = [ServerMetrics])
    )
)]
#[get("/api/monitoring/server-metrics")]
pub async fn monitoring_server_metrics(
    state: web::Data<ServerState>,
) -> Result<HttpResponse, OpsdeskError> {
    match state.api.monitoring().get_server_metrics().await {
        Ok(metrics) => Ok(HttpResponse::Ok().json(json!({ "metrics": metrics }))),
        Err(err) => {
            error!("Failed to retrieve server metrics: {err:?}");
            Err(err.into())
        }
    }
}
