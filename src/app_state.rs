use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::{TaskStore, UserStore};
use crate::services::TokenService;
use crate::utils::Config;

// Using type aliases to improve readability!
pub type UserStoreType = Arc<RwLock<dyn UserStore>>;
pub type TaskStoreType = Arc<RwLock<dyn TaskStore>>;
pub type TokenServiceType = Arc<RwLock<TokenService>>;
pub type ConfigType = Arc<RwLock<Config>>;

#[derive(Clone)]
pub struct AppState {
    pub user_store: UserStoreType,
    pub task_store: TaskStoreType,
    pub token_service: TokenServiceType,
    pub config: ConfigType,
}

impl AppState {
    pub fn new(
        user_store: UserStoreType,
        task_store: TaskStoreType,
        token_service: TokenServiceType,
        config: ConfigType,
    ) -> Self {
        Self {
            user_store,
            task_store,
            token_service,
            config,
        }
    }
}
