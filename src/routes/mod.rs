pub(crate) mod admin;
pub(crate) mod login;
pub(crate) mod logout;
pub mod middleware;
pub(crate) mod signup;
pub(crate) mod tasks;

// re-export items from sub-modules
pub use admin::*;
pub use login::*;
pub use logout::*;
pub use middleware::AuthUser;
pub use signup::*;
pub use tasks::*;
