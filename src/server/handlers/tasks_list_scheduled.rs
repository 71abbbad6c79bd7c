use crate::{error::Error as OpsdeskError, server::ServerState};
use actix_web::{get, web, HttpResponse};
use opsdesk_types::tasks::Task;
use serde_json::json;
use time::OffsetDateTime;
use tracing::error;

/// Gets a list of active automation tasks that are scheduled to run in the future.
#[utoipa::path(
    tags = ["automation"],
    responses(
        (status = 200, description = "A list of active tasks with the next run in the future.", body = [Task])
    )
)]
#[get("/api/automation/scheduled")]
pub async fn tasks_list_scheduled(
    state: web::Data<ServerState>,
) -> Result<HttpResponse, OpsdeskError> {
    match state
        .api
        .tasks()
        .get_scheduled_tasks(OffsetDateTime::now_utc())
        .await
    {
        Ok(tasks) => Ok(HttpResponse::Ok().json(json!({ "tasks": tasks }))),
        Err(err) => {
            error!("Failed to retrieve scheduled tasks: {err:?}");
            Err(err.into())
        }
    }
}
