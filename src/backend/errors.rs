use thiserror::Error;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Backend returned {status} for {url}")]
    Status { status: u16, url: String },

    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Fixtures error: {0}")]
    Fixtures(#[from] std::io::Error),

    #[error("No collection for endpoint {0}")]
    UnknownCollection(String),
}

pub type BackendResult<T> = Result<T, BackendError>;
