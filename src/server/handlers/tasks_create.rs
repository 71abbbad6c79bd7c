use crate::{error::Error as OpsdeskError, server::ServerState};
use actix_web::{post, web, HttpResponse};
use opsdesk_types::tasks::{Task, TaskCreateParams};
use serde_json::json;
use tracing::error;

/// Creates a new automation task with the specified parameters.
#[utoipa::path(
    tags = ["automation"],
    request_body = TaskCreateParams,
    responses(
        (status = CREATED, description = "Task was successfully created.", body = Task),
        (status = BAD_REQUEST, description = "Name or schedule is missing.")
    )
)]
#[post("/api/automation")]
pub async fn tasks_create(
    state: web::Data<ServerState>,
    params: web::Json<TaskCreateParams>,
) -> Result<HttpResponse, OpsdeskError> {
    match state.api.tasks().create_task(params.into_inner()).await {
        Ok(task) => Ok(HttpResponse::Created().json(json!({
            "message": "Task created successfully",
            "task": task
        }))),
        Err(err) => {
            error!("Failed to create task: {err:?}");
            Err(err.into())
        }
    }
}
