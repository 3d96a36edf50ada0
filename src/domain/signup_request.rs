use serde::{Deserialize, Serialize};

use super::user::Role;

fn default_role() -> Role {
    Role::Standard
}

#[derive(Deserialize, Serialize, Debug)]
pub struct SignupRequestBody {
    pub email: String,
    pub password: String,
    #[serde(default = "default_role")]
    pub role: Role,
}
