use crate::{error::Error as OpsdeskError, server::ServerState};
use actix_web::{post, web, HttpResponse};
use opsdesk_types::assets::{Asset, AssetCreateParams};
use serde_json::json;
use tracing::error;

/// Creates a new asset with the specified parameters.
#[utoipa::path(
    tags = ["assets"],
    request_body = AssetCreateParams,
    responses(
        (status = CREATED, description = "Asset was successfully created.", body = Asset),
        (status = BAD_REQUEST, description = "Cannot create an asset with the specified properties.")
    )
)]
#[post("/api/assets")]
pub async fn assets_create(
    state: web::Data<ServerState>,
    params: web::Json<AssetCreateParams>,
) -> Result<HttpResponse, OpsdeskError> {
    match state.api.assets().create_asset(params.into_inner()).await {
        Ok(asset) => Ok(HttpResponse::Created().json(json!({
            "message": "Asset created successfully",
            "asset": asset
        }))),
        Err(err) => {
            error!("Failed to create asset: {err:?}");
            Err(err.into())
        }
    }
}
