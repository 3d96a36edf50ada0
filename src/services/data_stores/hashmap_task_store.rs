use std::collections::BTreeMap;

use async_trait::async_trait;

use crate::domain::{Task, TaskId, TaskStatus, TaskStore, TaskStoreError, UserId};
use crate::services::clock::ClockType;

/// In-memory task store. BTreeMap keeps tasks in id order, so listings come
/// back oldest first without extra sorting.
pub struct HashmapTaskStore {
    clock: ClockType,
    next_id: i64,
    tasks: BTreeMap<TaskId, Task>,
}

impl HashmapTaskStore {
    pub fn new(clock: ClockType) -> Self {
        HashmapTaskStore {
            clock,
            next_id: 1,
            tasks: BTreeMap::new(),
        }
    }
}

#[async_trait]
impl TaskStore for HashmapTaskStore {
    async fn add_task(
        &mut self,
        user_id: UserId,
        title: String,
        status: TaskStatus,
    ) -> Result<Task, TaskStoreError> {
        let now = self.clock.now();
        let task = Task {
            id: TaskId(self.next_id),
            user_id,
            title,
            status,
            created: now,
            modified: now,
        };
        self.next_id += 1;
        self.tasks.insert(task.id, task.clone());
        Ok(task)
    }

    async fn list_tasks(&self, user_id: UserId) -> Result<Vec<Task>, TaskStoreError> {
        Ok(self
            .tasks
            .values()
            .filter(|t| t.user_id == user_id)
            .cloned()
            .collect())
    }
}
