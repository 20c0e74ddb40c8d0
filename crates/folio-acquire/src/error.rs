use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AcquireError {
    #[error("404 not found: {url}")]
    RemoteNotFound { url: String },

    #[error("{status} server error: {url}")]
    RemoteServerError { url: String, status: StatusCode },

    #[error("unexpected HTTP {status} for {url}")]
    UnexpectedStatus { url: String, status: StatusCode },

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid JSON from {url}: {source}")]
    Json {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("unexpected page layout at {url}: {reason}")]
    Html { url: String, reason: String },

    #[error("invalid URL '{url}': {reason}")]
    Url { url: String, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AcquireError>;
