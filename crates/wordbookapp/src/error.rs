use thiserror::Error;

#[derive(Error, Debug)]
pub enum WordbookError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Word not found: {0}")]
    NotFound(String),

    #[error("Lookup failed: {0}")]
    Transport(String),

    #[error("Malformed dictionary response: {0}")]
    MalformedResponse(String),

    #[error("Word \"{0}\" is already saved")]
    AlreadyExists(String),

    #[error("Cannot rename to \"{0}\": another saved entry already uses that word")]
    Conflict(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, WordbookError>;
