use std::env;

use dotenvy::dotenv;
use thiserror::Error;

#[derive(Clone)]
pub struct Config {
    port: u16,
    redis_host: String,
    jwt_secret: String,
    token_ttl_seconds: i64,
    session_ttl_seconds: u64,
}

impl Config {
    pub fn port(&self) -> u16 {
        self.port
    }
    pub fn redis_host(&self) -> &str {
        &self.redis_host
    }
    pub fn jwt_secret(&self) -> &str {
        &self.jwt_secret
    }
    pub fn token_ttl_seconds(&self) -> i64 {
        self.token_ttl_seconds
    }
    pub fn session_ttl_seconds(&self) -> u64 {
        self.session_ttl_seconds
    }

    pub fn default() -> Result<Self, ConfigError> {
        // Load .env in dev; no-op in prod if not present.
        let _ = dotenv();

        let jwt_secret = req_var("JWT_SECRET")?;
        if jwt_secret.is_empty() {
            return Err(ConfigError::Invalid("JWT_SECRET must not be empty"));
        }

        let port = parse_or("PORT", 3000u16)?;
        let redis_host = opt_var("REDIS_HOST").unwrap_or_else(|| "127.0.0.1:6379".into());

        // Token lifetime bounds the signature itself; the session TTL bounds
        // the revocable store entry and is deliberately shorter.
        let token_ttl_seconds = parse_or("TOKEN_TTL_SECONDS", 3600i64)?;
        let session_ttl_seconds = parse_or("SESSION_TTL_SECONDS", 1800u64)?;

        if token_ttl_seconds <= 0 {
            return Err(ConfigError::Invalid("TOKEN_TTL_SECONDS must be positive"));
        }

        Ok(Self {
            port,
            redis_host,
            jwt_secret,
            token_ttl_seconds,
            session_ttl_seconds,
        })
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing env var {0}")]
    Missing(&'static str),
    #[error("invalid env var {0}")]
    Invalid(&'static str),
}

fn req_var(key: &'static str) -> Result<String, ConfigError> {
    env::var(key).map_err(|_| ConfigError::Missing(key))
}

fn opt_var(key: &str) -> Option<String> {
    env::var(key).ok()
}

fn parse_or<T: std::str::FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    match opt_var(key) {
        Some(v) => v.parse::<T>().map_err(|_| ConfigError::Invalid(key)),
        None => Ok(default),
    }
}
