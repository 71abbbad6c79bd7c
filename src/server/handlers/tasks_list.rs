use crate::{error::Error as OpsdeskError, server::ServerState};
use actix_web::{get, web, HttpResponse};
use opsdesk_types::tasks::{Task, TasksListParams};
use serde_json::json;
use tracing::error;

/// Gets a list of automation tasks.
#[utoipa::path(
    tags = ["automation"],
    params(TasksListParams),
    responses(
        (status = 200, description = "A list of automation tasks in creation order.", body = [Task]),
        (status = BAD_REQUEST, description = "Unknown status filter.")
    )
)]
#[get("/api/automation")]
pub async fn tasks_list(
    state: web::Data<ServerState>,
    params: web::Query<TasksListParams>,
) -> Result<HttpResponse, OpsdeskError> {
    match state.api.tasks().get_tasks(params.into_inner()).await {
        Ok(tasks) => Ok(HttpResponse::Ok().json(json!({ "tasks": tasks }))),
        Err(err) => {
            error!("Failed to retrieve tasks: {err:?}");
            Err(err.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        server::{handlers::tasks_list::tasks_list, server_state::tests::mock_server_state},
        tests::TaskCreateParamsBuilder,
    };
    use actix_web::{
        body::MessageBody,
        test::{call_service, init_service, TestRequest},
        web, App,
    };
    use opsdesk_types::tasks::TaskStatus;
    use serde_json::json;
    use std::str::from_utf8;

    #[actix_web::test]
    async fn can_list_tasks() -> anyhow::Result<()> {
        let server_state = web::Data::new(mock_server_state());
        let app = init_service(
            App::new()
                .app_data(server_state.clone())
                .service(tasks_list),
        )
        .await;

        let response = call_service(
            &app,
            TestRequest::with_uri("https://opsdesk.dev/api/automation").to_request(),
        )
        .await;
        assert_eq!(response.status(), 200);
        assert_eq!(
            from_utf8(&response.into_body().try_into_bytes().unwrap())?,
            r#"{"tasks":[]}"#
        );

        let tasks = server_state.api.tasks();
        let task_one = tasks
            .create_task(TaskCreateParamsBuilder::new("Backup Database", "0 2 * * *").build())
            .await?;
        let task_two = tasks
            .create_task(
                TaskCreateParamsBuilder::new("System Update", "0 4 1 * *")
                    .with_status(TaskStatus::Inactive)
                    .build(),
            )
            .await?;

        let response = call_service(
            &app,
            TestRequest::with_uri("https://opsdesk.dev/api/automation").to_request(),
        )
        .await;
        assert_eq!(response.status(), 200);
        assert_eq!(
            from_utf8(&response.into_body().try_into_bytes().unwrap())?,
            serde_json::to_string(&json!({ "tasks": [task_one, task_two.clone()] }))?
        );

        let response = call_service(
            &app,
            TestRequest::with_uri("https://opsdesk.dev/api/automation?status=inactive")
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), 200);
        assert_eq!(
            from_utf8(&response.into_body().try_into_bytes().unwrap())?,
            serde_json::to_string(&json!({ "tasks": [task_two] }))?
        );

        Ok(())
    }

    #[actix_web::test]
    async fn fails_with_unknown_status_filter() -> anyhow::Result<()> {
        let app = init_service(
            App::new()
                .app_data(web::Data::new(mock_server_state()))
                .service(tasks_list),
        )
        .await;

        let response = call_service(
            &app,
            TestRequest::with_uri("https://opsdesk.dev/api/automation?status=paused").to_request(),
        )
        .await;
        assert_eq!(response.status(), 400);

        Ok(())
    }
}
