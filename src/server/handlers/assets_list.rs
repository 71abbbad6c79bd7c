use crate::{error::Error as OpsdeskError, server::ServerState};
use actix_web::{get, web, HttpResponse};
use opsdesk_types::assets::{AssetsListParams, AssetsPage};
use tracing::error;

/// Gets a page of assets, newest first.
#[utoipa::path(
    tags = ["assets"],
    params(AssetsListParams),
    responses(
        (status = 200, description = "A page of assets.", body = AssetsPage),
        (status = BAD_REQUEST, description = "Invalid page number or size.")
    )
)]
#[get("/api/assets")]
pub async fn assets_list(
    state: web::Data<ServerState>,
    params: web::Query<AssetsListParams>,
) -> Result<HttpResponse, OpsdeskError> {
    match state.api.assets().get_assets(params.into_inner()).await {
        Ok(page) => Ok(HttpResponse::Ok().json(page)),
        Err(err) => {
            error!("Failed to retrieve assets: {err:?}");
            Err(err.into())
        }
    }
}
