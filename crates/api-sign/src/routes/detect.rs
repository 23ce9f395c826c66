use axum::{
    Json,
    extract::{Multipart, State},
};
use bytes::Bytes;
use hs_video_mime::is_video;
use serde::Serialize;

use crate::error::{DetectError, ErrorResponse, Result};
use crate::state::AppState;

const FILE_FIELD: &str = "file";

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct DetectResponse {
    pub result: String,
    pub success: bool,
    pub timestamp: String,
    /// Seconds, rounded to two decimals.
    pub processing_time: f64,
}

/// Multipart body accepted by `/detect`.
#[derive(utoipa::ToSchema)]
#[allow(dead_code)]
pub(crate) struct DetectUpload {
    #[schema(value_type = String, format = Binary)]
    file: Vec<u8>,
}

struct Upload {
    content_type: String,
    data: Bytes,
}

async fn read_upload(multipart: &mut Multipart) -> Result<Upload> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let content_type = field.content_type().unwrap_or_default().to_string();
        if !is_video(&content_type) {
            return Err(DetectError::InvalidRequest("File must be a video".into()));
        }

        let data = field.bytes().await?;
        if data.is_empty() {
            return Err(DetectError::InvalidRequest("Empty file".into()));
        }

        return Ok(Upload { content_type, data });
    }

    Err(DetectError::InvalidRequest(format!(
        "Missing multipart field `{FILE_FIELD}`"
    )))
}

fn round_secs(secs: f64) -> f64 {
    (secs * 100.0).round() / 100.0
}

#[utoipa::path(
    post,
    path = "/detect",
    request_body(content = DetectUpload, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Detected intent phrase", body = DetectResponse),
        (status = 400, description = "Missing, empty or non-video upload", body = ErrorResponse),
        (status = 500, description = "Detection failed", body = ErrorResponse),
    ),
    tag = "detection",
)]
pub async fn detect(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<DetectResponse>> {
    let upload = read_upload(&mut multipart).await?;

    tracing::info!(
        content_type = %upload.content_type,
        size_bytes = upload.data.len(),
        "detect_request_received"
    );

    let detection = state
        .detector
        .detect(upload.data, &upload.content_type)
        .await?;

    Ok(Json(DetectResponse {
        result: detection.result,
        success: true,
        timestamp: chrono::Utc::now().to_rfc3339(),
        processing_time: round_secs(detection.elapsed.as_secs_f64()),
    }))
}
