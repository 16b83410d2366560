use thiserror::Error;

/// Errors raised while building core domain values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("invalid short code: {0}")]
    InvalidShortCode(String),
}

/// Result type for registry operations.
pub type Result<T> = std::result::Result<T, StorageError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("short code already exists: {0}")]
    Conflict(String),
    #[error("storage operation failed: {0}")]
    Operation(String),
}

/// Errors returned by a [`Shortener`](crate::Shortener).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShortenerError {
    #[error("a valid http/https url is required")]
    InvalidUrl(String),
    #[error("shortcode must be 4-30 chars and contain only letters, digits, underscore or hyphen")]
    InvalidShortCode(String),
    #[error("shortcode already in use")]
    ShortCodeInUse(String),
    #[error("could not generate a unique short code after {0} attempts")]
    GenerationExhausted(u32),
    #[error("storage error: {0}")]
    Storage(String),
}

impl From<CoreError> for ShortenerError {
    fn from(value: CoreError) -> Self {
        match value {
            CoreError::InvalidShortCode(message) => Self::InvalidShortCode(message),
        }
    }
}

impl From<StorageError> for ShortenerError {
    fn from(value: StorageError) -> Self {
        match value {
            StorageError::Conflict(code) => Self::ShortCodeInUse(code),
            other => Self::Storage(other.to_string()),
        }
    }
}
