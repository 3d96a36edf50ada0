pub mod add_task_request;
pub mod data_stores;
pub mod email;
pub mod login_request;
pub mod login_response;
pub mod logout_response;
pub mod password;
pub mod session_claims;
pub mod signup_request;
pub mod signup_response;
pub mod task;
mod user;

pub use add_task_request::*;
pub use data_stores::*;
pub use email::*;
pub use login_request::*;
pub use login_response::*;
pub use logout_response::*;
pub use password::*;
pub use session_claims::*;
pub use signup_request::*;
pub use signup_response::*;
pub use task::*;
pub use user::*;
