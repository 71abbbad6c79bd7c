use crate::{error::Error as OpsdeskError, server::ServerState};
use actix_web::{post, web, HttpResponse};
use opsdesk_types::monitoring::{Alert, AlertCreateParams};
use serde_json::json;
use tracing::error;

/// Raises a new alert.
#[utoipa::path(
    tags = ["monitoring"],
    request_body = AlertCreateParams,
    responses(
        (status = CREATED, description = "Alert was successfully created.", body = Alert),
        (status = BAD_REQUEST, description = "Title or severity is missing.")
    )
)]
#[post("/api/monitoring/alerts")]
pub async fn monitoring_alerts_create(
    state: web::Data<ServerState>,
    params: web::Json<AlertCreateParams>,
) -> Result<HttpResponse, OpsdeskError> {
    match state.api.monitoring().create_alert(params.into_inner()).await {
        Ok(alert) => Ok(HttpResponse::Created().json(json!({
            "message": "Alert created successfully",
            "alert": alert
        }))),
        Err(err) => {
            error!("Failed to create alert: {err:?}");
            Err(err.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::server::{
        handlers::monitoring_alerts_create::monitoring_alerts_create,
        server_state::tests::mock_server_state,
    };
    use actix_web::{
        body::MessageBody,
        http::Method,
        test::{call_service, init_service, TestRequest},
        web, App,
    };
    use insta::assert_snapshot;
    use serde_json::json;
    use std::str::from_utf8;

    #[actix_web::test]
    async fn can_create_alert() -> anyhow::Result<()> {
        let server_state = web::Data::new(mock_server_state());
        let app = init_service(
            App::new()
                .app_data(server_state.clone())
                .service(monitoring_alerts_create),
        )
        .await;

        let response = call_service(
            &app,
            TestRequest::with_uri("https://opsdesk.dev/api/monitoring/alerts")
                .method(Method::POST)
                .set_json(json!({
                    "title": "High CPU Usage",
                    "description": "Server Web Server 1 has high CPU usage",
                    "severity": "warning",
                    "serverId": 1
                }))
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), 201);

        let alerts = server_state
            .api
            .monitoring()
            .get_alerts(Default::default())
            .await?;
        assert_eq!(alerts.len(), 1);
        assert!(!alerts[0].resolved);
        assert_eq!(
            serde_json::from_slice::<serde_json::Value>(
                &response.into_body().try_into_bytes().unwrap()
            )?,
            json!({ "message": "Alert created successfully", "alert": alerts[0] })
        );

        Ok(())
    }

    #[actix_web::test]
    async fn fails_without_severity() -> anyhow::Result<()> {
        let app = init_service(
            App::new()
                .app_data(web::Data::new(mock_server_state()))
                .service(monitoring_alerts_create),
        )
        .await;

        let response = call_service(
            &app,
            TestRequest::with_uri("https://opsdesk.dev/api/monitoring/alerts")
                .method(Method::POST)
                .set_json(json!({ "title": "High CPU Usage" }))
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), 400);
        let body = response.into_body().try_into_bytes().unwrap();
        assert_snapshot!(from_utf8(&body)?, @r###"{"message":"Title and severity are required"}"###);

        Ok(())
    }
}
