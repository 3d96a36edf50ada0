use serde::{Deserialize, Serialize};

use super::task::TaskStatus;

fn default_status() -> TaskStatus {
    TaskStatus::Todo
}

#[derive(Deserialize, Serialize, Debug)]
pub struct AddTaskRequestBody {
    pub title: String,
    #[serde(default = "default_status")]
    pub status: TaskStatus,
}
