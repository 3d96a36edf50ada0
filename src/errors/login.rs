use axum::{http::StatusCode, response::IntoResponse};
use thiserror::Error;

use super::AuthError;

#[derive(Error, Debug)]
pub enum LoginError {
    #[error("invalid email address")]
    InvalidEmail,

    #[error("password must be at least 8 characters long, contain at least one uppercase letter and one special character.")]
    InvalidPassword,

    #[error("Incorrect email or password.")]
    IncorrectCredentials,

    #[error("Something went wrong, please try again later.")]
    InternalServerError,

    #[error(transparent)]
    Issuance(#[from] AuthError),
}

impl IntoResponse for LoginError {
    fn into_response(self) -> axum::response::Response {
        let status = match self {
            LoginError::InvalidEmail => StatusCode::UNPROCESSABLE_ENTITY,
            LoginError::InvalidPassword => StatusCode::UNPROCESSABLE_ENTITY,
            LoginError::IncorrectCredentials => StatusCode::UNAUTHORIZED,
            LoginError::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
            // Issuance failures keep their own status mapping (500/503).
            LoginError::Issuance(e) => return e.into_response(),
        };

        (status, self.to_string()).into_response()
    }
}
