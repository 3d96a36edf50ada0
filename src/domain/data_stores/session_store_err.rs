use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SessionStoreErr {
    #[error("session entry not found")]
    NotFound,

    #[error("session store unavailable: {0}")]
    Unavailable(String),
}
