use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::{SessionStore, SessionStoreErr, UserId};

use super::redis_service::{RedisService, RedisServiceErr};

/// Production session store. One plain string entry per session key, expiry
/// delegated to Redis TTLs.
pub struct RedisSessionStore {
    redis_service: Arc<RedisService>,
}

impl RedisSessionStore {
    pub fn new(redis_service: Arc<RedisService>) -> Self {
        Self { redis_service }
    }
}

fn unavailable(e: RedisServiceErr) -> SessionStoreErr {
    SessionStoreErr::Unavailable(e.to_string())
}

#[async_trait]
impl SessionStore for RedisSessionStore {
    async fn save(
        &mut self,
        key: &str,
        user_id: UserId,
        ttl: Duration,
    ) -> Result<(), SessionStoreErr> {
        self.redis_service
            .set_key_value(key, &user_id.to_string(), ttl.as_secs() as usize)
            .await
            .map_err(unavailable)
    }

    async fn load(&self, key: &str) -> Result<UserId, SessionStoreErr> {
        let raw = self.redis_service.get(key).await.map_err(unavailable)?;
        match raw {
            Some(raw) => raw
                .parse::<i64>()
                .map(UserId)
                .map_err(|_| SessionStoreErr::Unavailable(format!("corrupt entry at {key}"))),
            None => Err(SessionStoreErr::NotFound),
        }
    }

    async fn remove(&mut self, key: &str) -> Result<(), SessionStoreErr> {
        // DEL on an absent key is a no-op, which keeps remove idempotent.
        self.redis_service
            .delete_key(key)
            .await
            .map(|_| ())
            .map_err(unavailable)
    }
}
