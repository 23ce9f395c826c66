use std::time::Duration;

use bytes::Bytes;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;

use crate::error::Error;
use crate::types::{ApiResponse, TranscriptSegment, TranscriptionData, UploadData};
use crate::{DEFAULT_API_BASE, DEFAULT_UNIQUE_ID};

const UPLOAD_PATH: &str = "serve/api/v1/upload";
const TRANSCRIPTION_PATH: &str = "serve/api/v1/get_video_transcription";

const DEFAULT_UPLOAD_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Clone)]
pub struct MemoriesClient {
    client: reqwest::Client,
    api_base: url::Url,
    unique_id: String,
    upload_timeout: Duration,
    request_timeout: Duration,
}

#[derive(Default)]
pub struct MemoriesClientBuilder {
    api_base: Option<String>,
    api_key: Option<String>,
    unique_id: Option<String>,
    upload_timeout: Option<Duration>,
    request_timeout: Option<Duration>,
}

impl MemoriesClientBuilder {
    pub fn api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = Some(api_base.into());
        self
    }

    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn unique_id(mut self, unique_id: impl Into<String>) -> Self {
        self.unique_id = Some(unique_id.into());
        self
    }

    pub fn upload_timeout(mut self, timeout: Duration) -> Self {
        self.upload_timeout = Some(timeout);
        self
    }

    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    pub fn build(self) -> Result<MemoriesClient, Error> {
        let api_key = self.api_key.ok_or(Error::MissingApiKey)?;
        if api_key.is_empty() {
            return Err(Error::MissingApiKey);
        }

        let mut api_base = self
            .api_base
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        if !api_base.ends_with('/') {
            api_base.push('/');
        }
        let api_base = url::Url::parse(&api_base)?;

        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&api_key)?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(MemoriesClient {
            client,
            api_base,
            unique_id: self
                .unique_id
                .unwrap_or_else(|| DEFAULT_UNIQUE_ID.to_string()),
            upload_timeout: self.upload_timeout.unwrap_or(DEFAULT_UPLOAD_TIMEOUT),
            request_timeout: self.request_timeout.unwrap_or(DEFAULT_REQUEST_TIMEOUT),
        })
    }
}

impl MemoriesClient {
    pub fn builder() -> MemoriesClientBuilder {
        MemoriesClientBuilder::default()
    }

    pub fn api_base(&self) -> &url::Url {
        &self.api_base
    }

    /// Uploads a clip and returns the service's video number for it.
    pub async fn upload(
        &self,
        video: Bytes,
        file_name: &str,
        content_type: &str,
    ) -> Result<String, Error> {
        let url = self.api_base.join(UPLOAD_PATH)?;

        let len = video.len() as u64;
        tracing::debug!(size_bytes = len, content_type = %content_type, "memories_upload_started");
        let part = Part::stream_with_length(video, len)
            .file_name(file_name.to_string())
            .mime_str(content_type)?;
        let form = Form::new()
            .part("file", part)
            .text("unique_id", self.unique_id.clone());

        let response = self
            .client
            .post(url)
            .multipart(form)
            .timeout(self.upload_timeout)
            .send()
            .await?;

        let data: UploadData = parse_response(response).await?;
        Ok(data.video_no)
    }

    /// Single attempt at fetching the transcription of an uploaded clip.
    pub async fn get_video_transcription(
        &self,
        video_no: &str,
    ) -> Result<Vec<TranscriptSegment>, Error> {
        let mut url = self.api_base.join(TRANSCRIPTION_PATH)?;
        url.query_pairs_mut()
            .append_pair("video_no", video_no)
            .append_pair("unique_id", &self.unique_id);

        let response = self
            .client
            .get(url)
            .timeout(self.request_timeout)
            .send()
            .await?;

        let data: TranscriptionData = parse_response(response).await?;
        Ok(data.transcriptions)
    }
}

async fn parse_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, Error> {
    let status = response.status();
    let bytes = response.bytes().await?;

    if !status.is_success() {
        return Err(Error::Status {
            status: status.as_u16(),
            body: String::from_utf8_lossy(&bytes).into_owned(),
        });
    }

    let envelope: ApiResponse<T> = serde_json::from_slice(&bytes)?;
    envelope.into_result()
}
