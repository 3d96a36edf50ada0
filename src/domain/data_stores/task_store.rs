use crate::domain::{Task, TaskStatus, UserId};

use super::TaskStoreError;

#[async_trait::async_trait]
pub trait TaskStore: Send + Sync {
    async fn add_task(
        &mut self,
        user_id: UserId,
        title: String,
        status: TaskStatus,
    ) -> Result<Task, TaskStoreError>;

    /// Tasks owned by `user_id`, oldest first.
    async fn list_tasks(&self, user_id: UserId) -> Result<Vec<Task>, TaskStoreError>;
}
