use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Structural error: {0}")]
    Structural(String),
    #[error("Malformed storage at {}: {source}", path.display())]
    MalformedStorage {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, GameError>;
