mod handlers;
mod server_state;

use crate::{
    api::Api,
    assets::ASSET_NOT_FOUND_MESSAGE,
    config::{Config, RawConfig},
    database::Database,
    error::Error as OpsdeskError,
    server::handlers::OpsdeskOpenApi,
    tasks::TASK_NOT_FOUND_MESSAGE,
};
use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer, Result};
use anyhow::Context;
use std::sync::Arc;
use tracing::{debug, info};
use tracing_actix_web::TracingLogger;
use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;

pub use server_state::{ServerState, Status};

/// Entity IDs that can't be parsed can't reference any existing entity, so they are reported as
/// not found, the same way as unknown IDs.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, req| {
        debug!(path = req.path(), "Failed to extract entity ID from the path: {err}");
        if req.path().starts_with("/api/assets") {
            OpsdeskError::not_found(ASSET_NOT_FOUND_MESSAGE).into()
        } else {
            OpsdeskError::not_found(TASK_NOT_FOUND_MESSAGE).into()
        }
    })
}

pub async fn run(raw_config: RawConfig) -> Result<(), anyhow::Error> {
    let database = Database::create();
    if raw_config.demo_data {
        database.seed_demo_data().await?;
    }

    let http_port = raw_config.port;
    let api = Arc::new(Api::new(Config::from(raw_config), database));

    let state = web::Data::new(ServerState::new(api));
    let http_server = HttpServer::new(move || {
        App::new()
            .wrap(middleware::Compat::new(TracingLogger::default()))
            .wrap(middleware::Compat::new(middleware::Compress::default()))
            .wrap(middleware::NormalizePath::trim())
            .app_data(state.clone())
            .app_data(web::JsonConfig::default().error_handler(|err, _| {
                OpsdeskError::client(err.to_string()).into()
            }))
            .app_data(web::QueryConfig::default().error_handler(|err, _| {
                OpsdeskError::client(err.to_string()).into()
            }))
            .app_data(path_config())
            .service(RapiDoc::with_openapi(
                "/api-docs/openapi.json",
                OpsdeskOpenApi::openapi(),
            ))
            .service(handlers::status_get::status_get)
            // Static segments must be registered before the dynamic ones.
            .service(handlers::tasks_list_scheduled::tasks_list_scheduled)
            .service(handlers::tasks_list::tasks_list)
            .service(handlers::tasks_get::tasks_get)
            .service(handlers::tasks_create::tasks_create)
            .service(handlers::tasks_update::tasks_update)
            .service(handlers::tasks_remove::tasks_remove)
            .service(handlers::tasks_run::tasks_run)
            .service(handlers::assets_search::assets_search)
            .service(handlers::assets_list::assets_list)
            .service(handlers::assets_get::assets_get)
            .service(handlers::assets_create::assets_create)
            .service(handlers::assets_update::assets_update)
            .service(handlers::assets_remove::assets_remove)
            .service(handlers::monitoring_server_metrics::monitoring_server_metrics)
            .service(handlers::monitoring_network_metrics::monitoring_network_metrics)
            .service(handlers::monitoring_alerts_list::monitoring_alerts_list)
            .service(handlers::monitoring_alerts_create::monitoring_alerts_create)
            .service(handlers::monitoring_health::monitoring_health)
            .wrap(Cors::permissive())
    });

    let http_server_url = format!("0.0.0.0:{}", http_port);
    let http_server = http_server
        .bind(&http_server_url)
        .with_context(|| format!("Failed to bind to {http_server_url}."))?;

    info!("Opsdesk API server is available at http://{http_server_url}");

    http_server
        .run()
        .await
        .context("Failed to run Opsdesk API server.")
}
