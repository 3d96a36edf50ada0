use std::collections::HashMap;

use async_trait::async_trait;

use crate::domain::{Email, NewUser, User, UserId, UserStore, UserStoreError};

pub struct HashmapUserStore {
    next_id: i64,
    users: HashMap<Email, User>,
}

impl HashmapUserStore {
    pub fn new() -> Self {
        HashmapUserStore {
            next_id: 1,
            users: HashMap::new(),
        }
    }

    pub fn get_user_count(&self) -> usize {
        self.users.len()
    }
}

impl Default for HashmapUserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserStore for HashmapUserStore {
    async fn add_user(&mut self, user: NewUser) -> Result<User, UserStoreError> {
        if self.users.contains_key(&user.email) {
            return Err(UserStoreError::UserAlreadyExists);
        }

        let user = User {
            id: UserId(self.next_id),
            email: user.email.clone(),
            password_hash: user.password_hash,
            role: user.role,
        };
        self.next_id += 1;
        self.users.insert(user.email.clone(), user.clone());
        Ok(user)
    }

    async fn get_user(&self, email: &Email) -> Result<User, UserStoreError> {
        self.users
            .get(email)
            .cloned()
            .ok_or(UserStoreError::UserNotFound)
    }
}
