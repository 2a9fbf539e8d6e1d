use thiserror::Error;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Server error (status {status}): {message}")]
    ServerError { status: u16, message: String },

    #[error("Malformed suggestion response: {0}")]
    MalformedResponse(#[from] serde_json::Error),
}

pub type BackendResult<T> = Result<T, BackendError>;
