use crate::{error::Error as OpsdeskError, server::ServerState};
use actix_web::{put, web, HttpResponse};
use opsdesk_types::assets::{Asset, AssetUpdateParams};
use serde_json::json;
use tracing::error;

/// Updates asset with the specified ID.
#[utoipa::path(
    tags = ["assets"],
    params(
        ("asset_id" = u64, Path, description = "A unique asset ID."),
    ),
    request_body = AssetUpdateParams,
    responses(
        (status = 200, description = "Asset was successfully updated.", body = Asset),
        (status = BAD_REQUEST, description = "Cannot update asset with the specified properties."),
        (status = NOT_FOUND, description = "Asset with the specified ID doesn't exist.")
    )
)]
#[put("/api/assets/{asset_id}")]
pub async fn assets_update(
    state: web::Data<ServerState>,
    asset_id: web::Path<u64>,
    params: web::Json<AssetUpdateParams>,
) -> Result<HttpResponse, OpsdeskError> {
    match state
        .api
        .assets()
        .update_asset(*asset_id, params.into_inner())
        .await
    {
        Ok(asset) => Ok(HttpResponse::Ok().json(json!({
            "message": "Asset updated successfully",
            "asset": asset
        }))),
        Err(err) => {
            error!(asset.id = *asset_id, "Failed to update asset: {err:?}");
            Err(err.into())
        }
    }
}
