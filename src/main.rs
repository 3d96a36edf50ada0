use std::sync::Arc;

use tokio::sync::RwLock;

use task_service::app_state::AppState;
use task_service::domain::SessionStore;
use task_service::services::data_stores::{
    HashmapTaskStore, HashmapUserStore, RedisService, RedisSessionStore,
};
use task_service::services::{ClockType, JwtCodec, SystemClock, TokenService};
use task_service::utils::Config;
use task_service::Application;

#[tokio::main]
async fn main() {
    env_logger::init();
    let config = Config::default().expect("Failed to load config");

    let clock: ClockType = Arc::new(SystemClock);
    let codec = Arc::new(JwtCodec::new(config.jwt_secret().as_bytes(), clock.clone()));
    let redis_service =
        Arc::new(RedisService::new(config.redis_host()).expect("Failed to open redis client"));
    let sessions: Box<dyn SessionStore> = Box::new(RedisSessionStore::new(redis_service));

    let token_service = TokenService::new(
        codec,
        sessions,
        clock.clone(),
        config.token_ttl_seconds(),
        config.session_ttl_seconds(),
    );

    let address = format!("0.0.0.0:{}", config.port());
    let app_state = AppState::new(
        Arc::new(RwLock::new(HashmapUserStore::new())),
        Arc::new(RwLock::new(HashmapTaskStore::new(clock))),
        Arc::new(RwLock::new(token_service)),
        Arc::new(RwLock::new(config)),
    );

    let app = Application::build(app_state, &address)
        .await
        .expect("Failed to build app");

    app.run().await.expect("Failed to run app");
}
