use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::app_state::AppState;
use crate::domain::{Email, LoginRequestBody, LoginResponse, Password};
use crate::errors::LoginError;
use crate::services::AuthService;

pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequestBody>,
) -> Result<impl IntoResponse, LoginError> {
    let email = Email::parse(request.email).or(Err(LoginError::InvalidEmail))?;
    let password = Password::parse(request.password).or(Err(LoginError::InvalidPassword))?;
    let user = AuthService::login(state.clone(), email, password).await?;

    let access_token = state
        .token_service
        .write()
        .await
        .issue(user.id, user.role)
        .await
        .map_err(LoginError::Issuance)?;

    Ok((StatusCode::OK, Json(LoginResponse { access_token })))
}
