use crate::{error::Error as OpsdeskError, server::ServerState};
use actix_web::{get, web, HttpResponse};
use opsdesk_types::monitoring::SystemHealth;
use tracing::error;

/// Gets health of the system.
#[utoipa::path(
    tags = ["monitoring"],
    responses(
        (status = 200, description = "Health of the system components.", body = SystemHealth)
    )
)]
#[get("/api/monitoring/health")]
pub async fn monitoring_health(
    state: web::Data<ServerState>,
) -> Result<HttpResponse, OpsdeskError> {
    match state.api.monitoring().get_system_health().await {
        Ok(health) => Ok(HttpResponse::Ok().json(health)),
        Err(err) => {
            error!("Failed to retrieve system health: {err:?}");
            Err(err.into())
        }
    }
}
