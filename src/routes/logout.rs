use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Extension, Json};

use crate::app_state::AppState;
use crate::domain::LogoutResponse;
use crate::errors::AuthError;
use crate::routes::middleware::AuthUser;

/// Runs behind the auth middleware, so the token has already been validated.
/// Removing the session entry kills every outstanding token for the caller.
pub async fn logout(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> Result<impl IntoResponse, AuthError> {
    {
        let token_service = state.token_service.write().await;
        token_service.revoke(auth.user_id).await?;
    }

    Ok((
        StatusCode::OK,
        Json(LogoutResponse {
            message: "Logged out successfully".to_string(),
        }),
    ))
}
