use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::app_state::AppState;
use crate::domain::{Email, Password, SignupRequestBody, SignupResponse};
use crate::errors::SignupError;
use crate::services::AuthService;

pub async fn signup(
    State(state): State<AppState>,
    Json(request): Json<SignupRequestBody>,
) -> Result<impl IntoResponse, SignupError> {
    let email = Email::parse(request.email).or(Err(SignupError::InvalidEmail))?;
    let password = Password::parse(request.password).or(Err(SignupError::InvalidPassword))?;

    let user = AuthService::signup(state, email, password, request.role).await?;

    Ok((
        StatusCode::CREATED,
        Json(SignupResponse {
            id: user.id,
            message: "User created successfully!".to_string(),
        }),
    ))
}
