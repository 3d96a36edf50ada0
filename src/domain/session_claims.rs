use serde::{Deserialize, Serialize};

use super::user::{Role, UserId};

/// Signed token payload. Minted once at login and immutable afterwards;
/// `exp` is always strictly greater than `iat`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: UserId, // Subject (user ID)
    pub role: Role,  // Role gate for privileged routes
    pub iat: i64,    // Issued at time
    pub exp: i64,    // Expiration time
}
