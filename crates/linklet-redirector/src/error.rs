use linklet_core::{ShortCode, StorageError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RedirectorError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RedirectorError {
    #[error("shortcode not found")]
    NotFound(ShortCode),
    #[error("short link expired")]
    Expired(ShortCode),
    #[error("storage operation failed: {0}")]
    Storage(
        #[from]
        #[source]
        StorageError,
    ),
}
