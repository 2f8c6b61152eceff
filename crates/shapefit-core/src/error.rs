//! Error types for the shapefit system.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Duplicate landmark name: {0}")]
    DuplicateLandmark(String),

    #[error("Unknown body shape: {0}")]
    UnknownShape(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
