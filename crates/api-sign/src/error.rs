use axum::{
    Json,
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DetectError>;

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

#[derive(Debug, Error)]
pub enum DetectError {
    #[error("{0}")]
    InvalidRequest(String),

    #[error(transparent)]
    Multipart(#[from] MultipartError),

    #[error("Detection failed: {0}")]
    Internal(String),
}

impl From<hs_sign_detect::Error> for DetectError {
    fn from(err: hs_sign_detect::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

fn error_body(status: StatusCode, error: String) -> Response {
    (
        status,
        Json(ErrorResponse {
            success: false,
            error,
        }),
    )
        .into_response()
}

impl IntoResponse for DetectError {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidRequest(message) => error_body(StatusCode::BAD_REQUEST, message),
            Self::Multipart(err) => {
                tracing::warn!(error = %err, "multipart_rejected");
                error_body(err.status(), err.body_text())
            }
            Self::Internal(_) => {
                let message = self.to_string();
                tracing::error!(error = %message, "detection_failed");
                sentry::capture_message(&message, sentry::Level::Error);
                error_body(StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        }
    }
}
