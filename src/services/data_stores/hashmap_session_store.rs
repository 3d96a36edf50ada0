use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::{SessionStore, SessionStoreErr, UserId};
use crate::services::clock::ClockType;

struct SessionEntry {
    user_id: UserId,
    expires_at: DateTime<Utc>,
}

/// In-memory session store for tests and local development. TTL handling is
/// driven by the injected clock, so tests expire entries by advancing time.
pub struct HashmapSessionStore {
    clock: ClockType,
    entries: HashMap<String, SessionEntry>,
}

impl HashmapSessionStore {
    pub fn new(clock: ClockType) -> Self {
        Self {
            clock,
            entries: HashMap::new(),
        }
    }
}

#[async_trait]
impl SessionStore for HashmapSessionStore {
    async fn save(
        &mut self,
        key: &str,
        user_id: UserId,
        ttl: Duration,
    ) -> Result<(), SessionStoreErr> {
        let ttl = chrono::Duration::from_std(ttl).unwrap_or(chrono::Duration::MAX);
        let entry = SessionEntry {
            user_id,
            expires_at: self.clock.now() + ttl,
        };
        self.entries.insert(key.to_owned(), entry);
        Ok(())
    }

    async fn load(&self, key: &str) -> Result<UserId, SessionStoreErr> {
        let entry = self.entries.get(key).ok_or(SessionStoreErr::NotFound)?;
        // An expired entry counts as absent, matching the Redis TTL behavior.
        if self.clock.now() >= entry.expires_at {
            return Err(SessionStoreErr::NotFound);
        }
        Ok(entry.user_id)
    }

    async fn remove(&mut self, key: &str) -> Result<(), SessionStoreErr> {
        self.entries.remove(key);
        Ok(())
    }
}
