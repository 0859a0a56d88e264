use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure of a single provider call.
///
/// Every adapter converts whatever went wrong into one of these variants
/// before handing it to the aggregator, so no raw transport or decode error
/// ever crosses the adapter boundary.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TranslateError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP error: status {0}")]
    Http(u16),

    #[error("API error: {0}")]
    Api(String),

    #[error("No translation in response")]
    NoResult,

    #[error("Unexpected error: {0}")]
    Unknown(String),
}

/// Coarse classification of a [`TranslateError`], carried on outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Configuration,
    InvalidRequest,
    Network,
    Http,
    Api,
    NoResult,
    Unknown,
}

impl TranslateError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TranslateError::Configuration(_) => ErrorKind::Configuration,
            TranslateError::InvalidRequest(_) => ErrorKind::InvalidRequest,
            TranslateError::Network(_) => ErrorKind::Network,
            TranslateError::Http(_) => ErrorKind::Http,
            TranslateError::Api(_) => ErrorKind::Api,
            TranslateError::NoResult => ErrorKind::NoResult,
            TranslateError::Unknown(_) => ErrorKind::Unknown,
        }
    }
}

/// Credential store failure. Never carries the secret itself.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Credential store error: {0}")]
    Backend(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}
