use axum::response::IntoResponse;
use axum::Json;

/// Reachable only through the auth and admin middleware stages.
pub async fn admin_only() -> impl IntoResponse {
    Json(serde_json::json!({ "message": "admin only" }))
}
