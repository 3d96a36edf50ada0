pub mod hashmap_session_store;
pub mod hashmap_task_store;
pub mod hashmap_user_store;
pub mod redis_service;
pub mod redis_session_store;

pub use hashmap_session_store::*;
pub use hashmap_task_store::*;
pub use hashmap_user_store::*;
pub use redis_service::*;
pub use redis_session_store::*;
