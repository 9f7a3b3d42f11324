use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("upstream returned {status} for {url}")]
    UpstreamStatus { url: String, status: StatusCode },

    #[error("species '{species}' not found")]
    NotFound { species: String },

    #[error("failed to decode {context}: {source}")]
    Decode {
        context: &'static str,
        source: serde_json::Error,
    },

    #[error("invalid request: {message}")]
    Validation { message: String },

    #[error("invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, ServiceError>;
