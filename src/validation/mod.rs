pub mod email;
pub mod password;

pub use email::is_valid_email;
pub use password::is_valid_password;
