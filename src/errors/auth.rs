use axum::{http::StatusCode, response::IntoResponse};
use thiserror::Error;

use crate::domain::SessionStoreErr;

/// Every way a token can fail between the wire and an authorized request.
/// Kinds are preserved end to end so the middleware can map each one to a
/// distinct user-visible outcome.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("no bearer token in request")]
    MissingToken,

    #[error("malformed token")]
    Malformed,

    #[error("invalid token signature")]
    InvalidSignature,

    #[error("token expired")]
    Expired,

    #[error("session has been revoked")]
    SessionRevoked,

    #[error("token subject does not match stored session")]
    IdentityMismatch,

    #[error("session store unavailable")]
    StoreUnavailable(#[source] SessionStoreErr),

    #[error("token issuance failed")]
    IssuanceFailed(#[source] SessionStoreErr),

    #[error("token signing failed")]
    Signing(#[source] jsonwebtoken::errors::Error),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> axum::response::Response {
        let status = match self {
            // Caller errors: the credential is bad, not the service.
            AuthError::MissingToken
            | AuthError::Malformed
            | AuthError::InvalidSignature
            | AuthError::Expired
            | AuthError::SessionRevoked
            | AuthError::IdentityMismatch => StatusCode::UNAUTHORIZED,

            // Infrastructure failure, distinguishable from a bad credential.
            AuthError::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,

            AuthError::IssuanceFailed(_) | AuthError::Signing(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, self.to_string()).into_response()
    }
}
