//! Error handling for the career matcher

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CareerMatcherError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Invalid profile: {0}")]
    InvalidProfile(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Career not found: {0}")]
    CareerNotFound(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, CareerMatcherError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for CareerMatcherError {
    fn from(err: anyhow::Error) -> Self {
        CareerMatcherError::InvalidInput(err.to_string())
    }
}
