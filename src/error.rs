// Crate error type
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WidgetError {
    #[error("metrics request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("request to {url} failed with status {status}")]
    UnexpectedStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("malformed metrics payload: {0}")]
    MalformedPayload(String),

    #[error("container element {0:?} does not exist")]
    MissingContainer(String),
}
