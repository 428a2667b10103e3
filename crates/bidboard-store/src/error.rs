use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("state file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("state serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
