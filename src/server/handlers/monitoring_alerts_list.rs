use crate::{error::Error as OpsdeskError, server::ServerState};
use actix_web::{get, web, HttpResponse};
use opsdesk_types::monitoring::{Alert, AlertsListParams};
use serde_json::json;
use tracing::error;

/// Gets a list of alerts, optionally filtered by resolution state and severity.
#[utoipa::path(
    tags = ["monitoring"],
    params(AlertsListParams),
    responses(
        (status = 200, description = "A list of alerts that match the filters.", body = [Alert])
    )
)]
#[get("/api/monitoring/alerts")]
pub async fn monitoring_alerts_list(
    state: web::Data<ServerState>,
    params: web::Query<AlertsListParams>,
) -> Result<HttpResponse, OpsdeskError> {
    match state.api.monitoring().get_alerts(params.into_inner()).await {
        Ok(alerts) => Ok(HttpResponse::Ok().json(json!({ "alerts": alerts }))),
        Err(err) => {
            error!("Failed to retrieve alerts: {err:?}");
            Err(err.into())
        }
    }
}
