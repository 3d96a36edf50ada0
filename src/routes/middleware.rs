use axum::extract::{Request, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Extension;

use crate::app_state::AppState;
use crate::domain::{Role, UserId};
use crate::errors::AuthError;

/// Identity resolved by the auth stage and attached to request extensions
/// for downstream handlers.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    pub user_id: UserId,
    pub role: Role,
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

/// Auth stage. Extracts the bearer token, validates it, and attaches the
/// resolved identity to the request. Every failure short-circuits with the
/// status mapping of its `AuthError` kind.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let token = bearer_token(request.headers())
        .ok_or(AuthError::MissingToken)?
        .to_owned();

    let (user_id, role) = {
        let token_service = state.token_service.read().await;
        token_service.validate(&token).await?
    };

    request.extensions_mut().insert(AuthUser { user_id, role });
    Ok(next.run(request).await)
}

/// Admin stage. Must be layered after `require_auth`; it only inspects the
/// identity attached there and never touches the token again.
pub async fn require_admin(
    Extension(auth): Extension<AuthUser>,
    request: Request,
    next: Next,
) -> Response {
    if auth.role != Role::Admin {
        return (StatusCode::FORBIDDEN, "admin role required").into_response();
    }
    next.run(request).await
}
