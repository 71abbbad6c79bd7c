use crate::{error::Error as OpsdeskError, server::ServerState};
use actix_web::{get, web, HttpResponse};
use opsdesk_types::assets::Asset;
use serde_json::json;
use tracing::error;

/// Retrieves asset with the specified ID.
#[utoipa::path(
    tags = ["assets"],
    params(
        ("asset_id" = u64, Path, description = "A unique asset ID."),
    ),
    responses(
        (status = 200, description = "Asset with the specified ID.", body = Asset),
        (status = NOT_FOUND, description = "Asset with the specified ID doesn't exist.")
    )
)]
#[get("/api/assets/{asset_id}")]
pub async fn assets_get(
    state: web::Data<ServerState>,
    asset_id: web::Path<u64>,
) -> Result<HttpResponse, OpsdeskError> {
    match state.api.assets().get_asset(*asset_id).await {
        Ok(asset) => Ok(HttpResponse::Ok().json(json!({ "asset": asset }))),
        Err(err) => {
            error!(asset.id = *asset_id, "Failed to retrieve asset: {err:?}");
            Err(err.into())
        }
    }
}
