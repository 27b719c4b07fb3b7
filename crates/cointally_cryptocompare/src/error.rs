use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("API returned status {0}")]
    Status(StatusCode),
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Error decoding response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ClientError {
    /// The non-success status, if that is what went wrong.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Status(status) => Some(*status),
            _ => None,
        }
    }
}
