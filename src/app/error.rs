use thiserror::Error;

#[derive(Error, Debug)]
pub enum MushafError {
    #[error("Failed to read '{key}' from storage: {reason}")]
    StorageRead { key: String, reason: String },

    #[error("Failed to write '{key}' to storage: {reason}")]
    StorageWrite { key: String, reason: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid content data: {0}")]
    ContentInvalid(String),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl MushafError {
    pub fn read(key: &str, reason: impl ToString) -> Self {
        MushafError::StorageRead {
            key: key.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn write(key: &str, reason: impl ToString) -> Self {
        MushafError::StorageWrite {
            key: key.to_string(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MushafError>;
