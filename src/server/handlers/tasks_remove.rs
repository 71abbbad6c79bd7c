use crate::{error::Error as OpsdeskError, server::ServerState};
use actix_web::{delete, web, HttpResponse};
use serde_json::json;
use tracing::error;

/// Removes automation task with the specified ID.
#[utoipa::path(
    tags = ["automation"],
    params(
        ("task_id" = u64, Path, description = "A unique task ID."),
    ),
    responses(
        (status = 200, description = "Task was successfully removed."),
        (status = NOT_FOUND, description = "Task with the specified ID doesn't exist.")
    )
)]
#[delete("/api/automation/{task_id}")]
pub async fn tasks_remove(
    state: web::Data<ServerState>,
    task_id: web::Path<u64>,
) -> Result<HttpResponse, OpsdeskError> {
    match state.api.tasks().remove_task(*task_id).await {
        Ok(_) => Ok(HttpResponse::Ok().json(json!({ "message": "Task deleted successfully" }))),
        Err(err) => {
            error!(task.id = *task_id, "Failed to remove task: {err:?}");
            Err(err.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        server::{handlers::tasks_remove::tasks_remove, server_state::tests::mock_server_state},
        tests::TaskCreateParamsBuilder,
    };
    use actix_web::{
        body::MessageBody,
        http::Method,
        test::{call_service, init_service, TestRequest},
        web, App,
    };
    use insta::assert_snapshot;
    use std::str::from_utf8;

    #[actix_web::test]
    async fn can_remove_task() -> anyhow::Result<()> {
        let server_state = web::Data::new(mock_server_state());
        let app = init_service(
            App::new()
                .app_data(server_state.clone())
                .service(tasks_remove),
        )
        .await;

        let tasks = server_state.api.tasks();
        let task_one = tasks
            .create_task(TaskCreateParamsBuilder::new("Backup Database", "0 2 * * *").build())
            .await?;
        let task_two = tasks
            .create_task(TaskCreateParamsBuilder::new("Security Scan", "0 3 * * 0").build())
            .await?;

        let response = call_service(
            &app,
            TestRequest::with_uri(&format!(
                "https://opsdesk.dev/api/automation/{}",
                task_one.id
            ))
            .method(Method::DELETE)
            .to_request(),
        )
        .await;
        assert_eq!(response.status(), 200);
        let body = response.into_body().try_into_bytes().unwrap();
        assert_snapshot!(from_utf8(&body)?, @r###"{"message":"Task deleted successfully"}"###);

        assert_eq!(tasks.get_tasks(Default::default()).await?, vec![task_two]);

        Ok(())
    }

    #[actix_web::test]
    async fn fails_if_task_does_not_exist() -> anyhow::Result<()> {
        let server_state = web::Data::new(mock_server_state());
        let app = init_service(
            App::new()
                .app_data(server_state.clone())
                .service(tasks_remove),
        )
        .await;

        server_state
            .api
            .tasks()
            .create_task(TaskCreateParamsBuilder::new("Backup Database", "0 2 * * *").build())
            .await?;

        let response = call_service(
            &app,
            TestRequest::with_uri("https://opsdesk.dev/api/automation/999")
                .method(Method::DELETE)
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), 404);
        let body = response.into_body().try_into_bytes().unwrap();
        assert_snapshot!(from_utf8(&body)?, @r###"{"message":"Task not found"}"###);
        assert_eq!(
            server_state
                .api
                .tasks()
                .get_tasks(Default::default())
                .await?
                .len(),
            1
        );

        Ok(())
    }
}
