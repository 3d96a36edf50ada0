use axum::{http::StatusCode, response::IntoResponse};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TaskError {
    #[error("task title must not be empty")]
    EmptyTitle,

    #[error("Something went wrong, please try again later.")]
    InternalServerError,
}

impl IntoResponse for TaskError {
    fn into_response(self) -> axum::response::Response {
        let status = match self {
            TaskError::EmptyTitle => StatusCode::UNPROCESSABLE_ENTITY,
            TaskError::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, self.to_string()).into_response()
    }
}
