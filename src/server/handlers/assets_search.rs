use crate::{error::Error as OpsdeskError, server::ServerState};
use actix_web::{get, web, HttpResponse};
use opsdesk_types::assets::{Asset, AssetsSearchParams};
use serde_json::json;
use tracing::error;

/// Searches assets by name, hostname, IP address, or description.
#[utoipa::path(
    tags = ["assets"],
    params(AssetsSearchParams),
    responses(
        (status = 200, description = "A list of matching assets.", body = [Asset]),
        (status = BAD_REQUEST, description = "Search query is missing.")
    )
)]
#[get("/api/assets/search")]
pub async fn assets_search(
    state: web::Data<ServerState>,
    params: web::Query<AssetsSearchParams>,
) -> Result<HttpResponse, OpsdeskError> {
    match state
        .api
        .assets()
        .search_assets(params.query.as_deref())
        .await
    {
        Ok(assets) => Ok(HttpResponse::Ok().json(json!({ "assets": assets }))),
        Err(err) => {
            error!("Failed to search assets: {err:?}");
            Err(err.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        server::{handlers::assets_search::assets_search, server_state::tests::mock_server_state},
        tests::AssetCreateParamsBuilder,
    };
    use actix_web::{
        body::MessageBody,
        test::{call_service, init_service, TestRequest},
        web, App,
    };
    use serde_json::json;
    use std::str::from_utf8;

    #[actix_web::test]
    async fn can_search_assets() -> anyhow::Result<()> {
        let server_state = web::Data::new(mock_server_state());
        let app = init_service(
            App::new()
                .app_data(server_state.clone())
                .service(assets_search),
        )
        .await;

        let assets = server_state.api.assets();
        let asset = assets
            .create_asset(
                AssetCreateParamsBuilder::new("Web Server 1", "web-01")
                    .with_ip_address("192.168.1.10")
                    .build(),
            )
            .await?;
        assets
            .create_asset(
                AssetCreateParamsBuilder::new("Core Switch", "sw-01")
                    .with_ip_address("10.0.0.2")
                    .build(),
            )
            .await?;

        let response = call_service(
            &app,
            TestRequest::with_uri("https://opsdesk.dev/api/assets/search?query=192.168")
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), 200);
        assert_eq!(
            serde_json::from_slice::<serde_json::Value>(
                &response.into_body().try_into_bytes().unwrap()
            )?,
            json!({ "assets": [asset] })
        );

        Ok(())
    }

    #[actix_web::test]
    async fn fails_without_query() -> anyhow::Result<()> {
        let app = init_service(
            App::new()
                .app_data(web::Data::new(mock_server_state()))
                .service(assets_search),
        )
        .await;

        for uri in [
            "https://opsdesk.dev/api/assets/search",
            "https://opsdesk.dev/api/assets/search?query=",
        ] {
            let response = call_service(&app, TestRequest::with_uri(uri).to_request()).await;
            assert_eq!(response.status(), 400);
            let body = response.into_body().try_into_bytes().unwrap();
            assert_eq!(
                from_utf8(&body)?,
                r#"{"message":"Query parameter is required"}"#
            );
        }

        Ok(())
    }
}
