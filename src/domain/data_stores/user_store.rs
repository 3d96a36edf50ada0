use crate::domain::{Email, NewUser, User};

use super::UserStoreError;

#[async_trait::async_trait]
pub trait UserStore: Send + Sync {
    async fn add_user(&mut self, user: NewUser) -> Result<User, UserStoreError>;
    async fn get_user(&self, email: &Email) -> Result<User, UserStoreError>;
}
