use serde::{Deserialize, Serialize};

use crate::error::Error;

pub const SUCCESS_CODE: &str = "0000";

#[derive(Debug, Deserialize)]
pub(crate) struct ApiResponse<T> {
    pub code: String,
    pub msg: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn into_result(self) -> Result<T, Error> {
        if self.code == SUCCESS_CODE {
            self.data.ok_or(Error::MissingData)
        } else {
            Err(Error::MemoriesApi {
                code: self.code,
                message: self.msg.unwrap_or_else(|| "unknown error".into()),
            })
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct UploadData {
    #[serde(rename = "videoNo")]
    pub video_no: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TranscriptionData {
    pub transcriptions: Vec<TranscriptSegment>,
}

/// One chunk of the service's textual description of a clip.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TranscriptSegment {
    #[serde(default)]
    pub content: String,
    #[serde(rename = "startTime", default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<serde_json::Value>,
    #[serde(rename = "endTime", default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<serde_json::Value>,
}

impl TranscriptSegment {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Default::default()
        }
    }
}
