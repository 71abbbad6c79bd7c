use crate::{error::Error as OpsdeskError, server::ServerState};
use actix_web::{delete, web, HttpResponse};
use serde_json::json;
use tracing::error;

/// Removes asset with the specified ID.
#[utoipa::path(
    tags = ["assets"],
    params(
        ("asset_id" = u64, Path, description = "A unique asset ID."),
    ),
    responses(
        (status = 200, description = "Asset was successfully removed."),
        (status = NOT_FOUND, description = "Asset with the specified ID doesn't exist.")
    )
)]
#[delete("/api/assets/{asset_id}")]
pub async fn assets_remove(
    state: web::Data<ServerState>,
    asset_id: web::Path<u64>,
) -> Result<HttpResponse, OpsdeskError> {
    match state.api.assets().remove_asset(*asset_id).await {
        Ok(_) => Ok(HttpResponse::Ok().json(json!({ "message": "Asset deleted successfully" }))),
        Err(err) => {
            error!(asset.id = *asset_id, "Failed to remove asset: {err:?}");
            Err(err.into())
        }
    }
}
