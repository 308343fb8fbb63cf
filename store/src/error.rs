use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("storage backend error: {0}")]
    Backend(String),

    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("database is corrupted: {0}")]
    Corruption(String),

    #[error("deadline exceeded")]
    DeadlineExceeded,
}
