mod auth;
mod login;
mod signup;
mod task;

pub use auth::*;
pub use login::*;
pub use signup::*;
pub use task::*;
