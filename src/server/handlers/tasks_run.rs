use crate::{error::Error as OpsdeskError, server::ServerState};
use actix_web::{post, web, HttpResponse};
use opsdesk_types::tasks::Task;
use serde_json::json;
use tracing::error;

/// Runs automation task with the specified ID right away. The task itself isn't executed, only its
/// last run time is updated.
#[utoipa::path(
    tags = ["automation"],
    params(
        ("task_id" = u64, Path, description = "A unique task ID."),
    ),
    responses(
        (status = 200, description = "Task was successfully run.", body = Task),
        (status = NOT_FOUND, description = "Task with the specified ID doesn't exist.")
    )
)]
#[post("/api/automation/{task_id}/run")]
pub async fn tasks_run(
    state: web::Data<ServerState>,
    task_id: web::Path<u64>,
) -> Result<HttpResponse, OpsdeskError> {
    match state.api.tasks().run_task(*task_id).await {
        Ok(task) => Ok(HttpResponse::Ok().json(json!({
            "message": "Task executed successfully",
            "task": task
        }))),
        Err(err) => {
            error!(task.id = *task_id, "Failed to run task: {err:?}");
            Err(err.into())
        }
    }
}
