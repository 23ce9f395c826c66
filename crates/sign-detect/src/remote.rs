use std::future::Future;
use std::time::Duration;

use backon::{ConstantBuilder, Retryable};
use bytes::Bytes;
use hs_memories::{MemoriesClient, TranscriptSegment};
use hs_video_mime::content_type_to_extension;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

pub const DEFAULT_POLL_ATTEMPTS: u32 = 15;
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Remote video-understanding backend.
pub trait TranscriptionService: Send + Sync + 'static {
    /// Uploads a clip, returning an opaque handle for later queries.
    fn upload(
        &self,
        video: Bytes,
        content_type: &str,
    ) -> impl Future<Output = Result<String, BoxError>> + Send;

    /// One attempt at fetching the transcription; `Err` while not ready.
    fn transcription(
        &self,
        handle: &str,
    ) -> impl Future<Output = Result<Vec<TranscriptSegment>, BoxError>> + Send;
}

impl TranscriptionService for MemoriesClient {
    async fn upload(&self, video: Bytes, content_type: &str) -> Result<String, BoxError> {
        let file_name = format!("video.{}", content_type_to_extension(content_type));
        Ok(MemoriesClient::upload(self, video, &file_name, content_type).await?)
    }

    async fn transcription(&self, handle: &str) -> Result<Vec<TranscriptSegment>, BoxError> {
        Ok(self.get_video_transcription(handle).await?)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollConfig {
    pub max_attempts: u32,
    pub interval: Duration,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_POLL_ATTEMPTS,
            interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

/// Treats the remote service as an optional signal: every failure becomes `None`.
pub struct RemoteTranscriber<S> {
    service: S,
    poll: PollConfig,
}

impl<S: TranscriptionService> RemoteTranscriber<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            poll: PollConfig::default(),
        }
    }

    pub fn with_poll_config(mut self, poll: PollConfig) -> Self {
        self.poll = poll;
        self
    }

    pub fn poll_config(&self) -> PollConfig {
        self.poll
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub async fn upload(&self, video: Bytes, content_type: &str) -> Option<String> {
        let size_bytes = video.len();
        match self.service.upload(video, content_type).await {
            Ok(handle) => {
                tracing::info!(handle = %handle, size_bytes, "remote_upload_succeeded");
                Some(handle)
            }
            Err(e) => {
                tracing::warn!(error = %e, size_bytes, "remote_upload_failed");
                None
            }
        }
    }

    /// Polls at a fixed interval, at most `max_attempts` times. No delay
    /// follows the final attempt.
    pub async fn fetch_transcription(&self, handle: &str) -> Option<Vec<TranscriptSegment>> {
        let retries = self.poll.max_attempts.checked_sub(1)?;
        let backoff = ConstantBuilder::default()
            .with_delay(self.poll.interval)
            .with_max_times(retries as usize);

        let result = (|| self.service.transcription(handle))
            .retry(backoff)
            .notify(|err, dur| {
                tracing::debug!(
                    handle = %handle,
                    error = %err,
                    retry_delay_ms = dur.as_millis() as u64,
                    "remote_transcription_pending"
                );
            })
            .await;

        match result {
            Ok(segments) => {
                tracing::info!(
                    handle = %handle,
                    segments = segments.len(),
                    "remote_transcription_ready"
                );
                Some(segments)
            }
            Err(e) => {
                tracing::warn!(
                    handle = %handle,
                    attempts = self.poll.max_attempts,
                    error = %e,
                    "remote_transcription_timed_out"
                );
                None
            }
        }
    }
}
