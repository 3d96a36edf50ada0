use std::time::Duration;

use crate::domain::UserId;

use super::SessionStoreErr;

/// Key-value store holding one entry per live session, keyed by the
/// deterministic session key derived from the subject. Entry presence is the
/// authoritative liveness signal: a signature-valid token whose entry is gone
/// is dead.
#[async_trait::async_trait]
pub trait SessionStore: Send + Sync {
    /// Upsert the mapping for `key`. Overwrites any existing entry, which is
    /// what enforces the single-session-per-user policy on re-login.
    async fn save(&mut self, key: &str, user_id: UserId, ttl: Duration)
        -> Result<(), SessionStoreErr>;

    /// Resolve `key` to the stored user id. `NotFound` covers both absent
    /// and expired entries.
    async fn load(&self, key: &str) -> Result<UserId, SessionStoreErr>;

    /// Delete the mapping. Idempotent; absence of the key is not an error.
    async fn remove(&mut self, key: &str) -> Result<(), SessionStoreErr>;
}
