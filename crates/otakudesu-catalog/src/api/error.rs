use thiserror::Error;

/// Errors crossing the catalog boundary.
///
/// Only transport-level problems are errors; shape problems in a payload are
/// absorbed by the translator.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}) for {url}")]
    Status { status: u16, url: String },

    #[error("decode error for {url}: {message}")]
    Decode { url: String, message: String },

    #[error("invalid base URL: {0}")]
    BaseUrl(String),

    #[error("request superseded by a newer navigation")]
    Superseded,
}

impl ApiError {
    /// Whether the request was abandoned because a newer navigation started
    pub fn is_superseded(&self) -> bool {
        matches!(self, ApiError::Superseded)
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
