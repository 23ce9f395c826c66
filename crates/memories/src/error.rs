use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("missing api_key")]
    MissingApiKey,

    #[error("invalid api_base: {0}")]
    InvalidApiBase(#[from] url::ParseError),

    #[error("invalid api_key header value")]
    InvalidApiKey(#[from] reqwest::header::InvalidHeaderValue),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Memories API error: {code} - {message}")]
    MemoriesApi { code: String, message: String },

    #[error("Memories API response missing data")]
    MissingData,
}
