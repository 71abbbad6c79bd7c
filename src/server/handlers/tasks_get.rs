use crate::{error::Error as OpsdeskError, server::ServerState};
use actix_web::{get, web, HttpResponse};
use opsdesk_types::tasks::Task;
use serde_json::json;
use tracing::error;

/// Retrieves automation task with the specified ID.
#[utoipa::path(
    tags = ["automation"],
    params(
        ("task_id" = u64, Path, description = "A unique task ID."),
    ),
    responses(
        (status = 200, description = "Task with the specified ID.", body = Task),
        (status = NOT_FOUND, description = "Task with the specified ID doesn't exist.")
    )
)]
#[get("/api/automation/{task_id}")]
pub async fn tasks_get(
    state: web::Data<ServerState>,
    task_id: web::Path<u64>,
) -> Result<HttpResponse, OpsdeskError> {
    match state.api.tasks().get_task(*task_id).await {
        Ok(task) => Ok(HttpResponse::Ok().json(json!({ "task": task }))),
        Err(err) => {
            error!(task.id = *task_id, "Failed to retrieve task: {err:?}");
            Err(err.into())
        }
    }
}
