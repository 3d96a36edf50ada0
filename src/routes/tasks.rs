use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Extension, Json};

use crate::app_state::AppState;
use crate::domain::AddTaskRequestBody;
use crate::errors::TaskError;
use crate::routes::middleware::AuthUser;

pub async fn list_tasks(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> Result<impl IntoResponse, TaskError> {
    let tasks = state
        .task_store
        .read()
        .await
        .list_tasks(auth.user_id)
        .await
        .map_err(|_| TaskError::InternalServerError)?;

    Ok(Json(tasks))
}

pub async fn add_task(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Json(request): Json<AddTaskRequestBody>,
) -> Result<impl IntoResponse, TaskError> {
    let title = request.title.trim().to_owned();
    if title.is_empty() {
        return Err(TaskError::EmptyTitle);
    }

    let task = state
        .task_store
        .write()
        .await
        .add_task(auth.user_id, title, request.status)
        .await
        .map_err(|_| TaskError::InternalServerError)?;

    Ok((StatusCode::CREATED, Json(task)))
}
