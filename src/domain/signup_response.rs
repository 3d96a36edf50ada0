use serde::{Deserialize, Serialize};

use super::user::UserId;

#[derive(Deserialize, Serialize, Debug, PartialEq)]
pub struct SignupResponse {
    pub id: UserId,
    pub message: String,
}
