/// Token issuance and validation service.
///
/// This module provides the `TokenService`, which coordinates:
/// - Minting of signed session tokens at login
/// - Persistence of the reverse-lookup session entry in the key-value store
/// - Validation (signature + expiry + store-backed liveness) of tokens
/// - Explicit session revocation (logout)
///
/// Security model:
/// 1. A token is only handed out together with a live session entry keyed by
///    its subject. If the entry cannot be written, issuance fails as a whole.
/// 2. On validation, a cryptographically valid token whose session entry is
///    gone is rejected. Signature validity is necessary but not sufficient.
/// 3. The store entry carries the subject it was written for; a mismatch
///    against the token's claim is rejected as a stale or reused key.
///
/// Concurrency:
/// - The session store sits behind an async `RwLock<Box<dyn SessionStore>>`;
///   issue/revoke take the write lock for the minimal critical section,
///   validate only reads.
/// - The signing key inside the codec is read-only shared state.
///
/// Extensibility:
/// - Codec, store and clock are capability traits injected at construction,
///   so tests substitute deterministic keys, an in-memory store and a fixed
///   clock without touching this module.
use std::sync::Arc;
use std::time::Duration as StdDuration;

use chrono::Duration;
use tokio::sync::RwLock;

use crate::domain::{Role, SessionClaims, SessionStore, SessionStoreErr, UserId};
use crate::errors::AuthError;

use super::clock::ClockType;
use super::token_codec::TokenCodec;

pub type SessionStoreType = Arc<RwLock<Box<dyn SessionStore>>>;

/// Deterministic store key for a subject. One key per user means a fresh
/// login overwrites (and thereby revokes) the previous session.
pub fn session_key(user_id: UserId) -> String {
    format!("session:{}", user_id)
}

pub struct TokenService {
    codec: Arc<dyn TokenCodec>,
    sessions: SessionStoreType,
    clock: ClockType,
    token_ttl_seconds: i64,
    session_ttl: StdDuration,
}

impl TokenService {
    pub fn new(
        codec: Arc<dyn TokenCodec>,
        sessions: Box<dyn SessionStore>,
        clock: ClockType,
        token_ttl_seconds: i64,
        session_ttl_seconds: u64,
    ) -> Self {
        Self {
            codec,
            sessions: Arc::new(RwLock::new(sessions)),
            clock,
            token_ttl_seconds,
            session_ttl: StdDuration::from_secs(session_ttl_seconds),
        }
    }

    /// Mint a token for `user_id` and persist its session entry.
    ///
    /// The store write is part of the operation: a token must never reach a
    /// client without a live session entry, otherwise it could not be
    /// revoked. A failed save surfaces as `AuthError::IssuanceFailed` and no
    /// token is returned.
    pub async fn issue(&self, user_id: UserId, role: Role) -> Result<String, AuthError> {
        let now = self.clock.now();
        let exp = now + Duration::seconds(self.token_ttl_seconds);

        let claims = SessionClaims {
            sub: user_id,
            role,
            iat: now.timestamp(),
            exp: exp.timestamp(),
        };

        let token = self.codec.encode(&claims)?;

        {
            let mut sessions = self.sessions.write().await;
            sessions
                .save(&session_key(user_id), user_id, self.session_ttl)
                .await
                .map_err(AuthError::IssuanceFailed)?;
        }

        Ok(token)
    }

    /// Validate a presented token and resolve it to an identity.
    ///
    /// Decode failures (`Malformed`, `InvalidSignature`, `Expired`) pass
    /// through unchanged. A decoded token is then checked against the store:
    /// a missing entry means the session was revoked or timed out, an entry
    /// written for a different subject is rejected outright.
    pub async fn validate(&self, token: &str) -> Result<(UserId, Role), AuthError> {
        let claims = self.codec.decode(token)?;

        let stored = {
            let sessions = self.sessions.read().await;
            sessions.load(&session_key(claims.sub)).await
        };

        let stored = stored.map_err(|e| match e {
            SessionStoreErr::NotFound => AuthError::SessionRevoked,
            e @ SessionStoreErr::Unavailable(_) => {
                log::warn!("session store unavailable during validation: {e}");
                AuthError::StoreUnavailable(e)
            }
        })?;

        if stored != claims.sub {
            return Err(AuthError::IdentityMismatch);
        }

        Ok((claims.sub, claims.role))
    }

    /// Drop the session entry for `user_id`, killing any outstanding token
    /// for that subject. Safe to call when no session exists.
    pub async fn revoke(&self, user_id: UserId) -> Result<(), AuthError> {
        let mut sessions = self.sessions.write().await;
        match sessions.remove(&session_key(user_id)).await {
            Ok(()) | Err(SessionStoreErr::NotFound) => Ok(()),
            Err(e @ SessionStoreErr::Unavailable(_)) => Err(AuthError::StoreUnavailable(e)),
        }
    }
}
