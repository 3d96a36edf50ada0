pub mod auth;
pub mod clock;
pub mod data_stores;
pub mod token_codec;
pub mod token_service;

pub use auth::*;
pub use clock::*;
pub use token_codec::*;
pub use token_service::*;
