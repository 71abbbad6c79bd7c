use crate::{error::Error as OpsdeskError, server::ServerState};
use actix_web::{put, web, HttpResponse};
use opsdesk_types::tasks::{Task, TaskUpdateParams};
use serde_json::json;
use tracing::error;

/// Updates automation task with the specified ID. Properties that aren't provided are left
/// unchanged.
#[utoipa::path(
    tags = ["automation"],
    params(
        ("task_id" = u64, Path, description = "A unique task ID."),
    ),
    request_body = TaskUpdateParams,
    responses(
        (status = 200, description = "Task was successfully updated.", body = Task),
        (status = BAD_REQUEST, description = "Name or schedule is empty."),
        (status = NOT_FOUND, description = "Task with the specified ID doesn't exist.")
    )
)]
#[put("/api/automation/{task_id}")]
pub async fn tasks_update(
    state: web::Data<ServerState>,
    task_id: web::Path<u64>,
    params: web::Json<TaskUpdateParams>,
) -> Result<HttpResponse, OpsdeskError> {
    match state
        .api
        .tasks()
        .update_task(*task_id, params.into_inner())
        .await
    {
        Ok(task) => Ok(HttpResponse::Ok().json(json!({
            "message": "Task updated successfully",
            "task": task
        }))),
        Err(err) => {
            error!(task.id = *task_id, "Failed to update task: {err:?}");
            Err(err.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        server::{handlers::tasks_update::tasks_update, server_state::tests::mock_server_state},
        tests::TaskCreateParamsBuilder,
    };
    use actix_web::{
        body::MessageBody,
        http::Method,
        test::{call_service, init_service, TestRequest},
        web, App,
    };
    use insta::assert_snapshot;
    use opsdesk_types::tasks::TaskStatus;
    use serde_json::json;
    use std::str::from_utf8;

    #[actix_web::test]
    async fn can_update_task() -> anyhow::Result<()> {
        let server_state = web::Data::new(mock_server_state());
        let app = init_service(
            App::new()
                .app_data(server_state.clone())
                .service(tasks_update),
        )
        .await;

        let task = server_state
            .api
            .tasks()
            .create_task(TaskCreateParamsBuilder::new("Backup Database", "0 2 * * *").build())
            .await?;

        let response = call_service(
            &app,
            TestRequest::with_uri(&format!("https://opsdesk.dev/api/automation/{}", task.id))
                .method(Method::PUT)
                .set_json(json!({ "status": "inactive" }))
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), 200);

        let updated_task = server_state.api.tasks().get_task(task.id).await?;
        assert_eq!(updated_task.status, TaskStatus::Inactive);
        assert_eq!(updated_task.name, task.name);
        assert_eq!(updated_task.next_run, task.next_run);
        assert_eq!(
            from_utf8(&response.into_body().try_into_bytes().unwrap())?,
            serde_json::to_string(&json!({
                "message": "Task updated successfully",
                "task": updated_task
            }))?
        );

        Ok(())
    }

    #[actix_web::test]
    async fn fails_with_invalid_params() -> anyhow::Result<()> {
        let server_state = web::Data::new(mock_server_state());
        let app = init_service(
            App::new()
                .app_data(server_state.clone())
                .service(tasks_update),
        )
        .await;

        let task = server_state
            .api
            .tasks()
            .create_task(TaskCreateParamsBuilder::new("Backup Database", "0 2 * * *").build())
            .await?;

        let response = call_service(
            &app,
            TestRequest::with_uri(&format!("https://opsdesk.dev/api/automation/{}", task.id))
                .method(Method::PUT)
                .set_json(json!({ "schedule": "" }))
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), 400);
        let body = response.into_body().try_into_bytes().unwrap();
        assert_snapshot!(from_utf8(&body)?, @r###"{"message":"Name and schedule cannot be empty"}"###);

        let response = call_service(
            &app,
            TestRequest::with_uri("https://opsdesk.dev/api/automation/999")
                .method(Method::PUT)
                .set_json(json!({ "name": "Backup" }))
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), 404);
        let body = response.into_body().try_into_bytes().unwrap();
        assert_snapshot!(from_utf8(&body)?, @r###"{"message":"Task not found"}"###);

        assert_eq!(server_state.api.tasks().get_task(task.id).await?, task);

        Ok(())
    }
}
