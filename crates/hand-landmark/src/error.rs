#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("failed to start hand detector: {0}")]
    Spawn(std::io::Error),

    #[error("hand detector did not signal ready, got {0:?}")]
    NotReady(String),

    #[error("hand detector closed its output")]
    Closed,

    #[error("hand detector error: {0}")]
    Detector(String),
}
