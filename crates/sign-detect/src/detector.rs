use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use hs_hand_landmark::{HandLandmarker, PatternSet};
use hs_video_frames::FrameDecoder;

use crate::catalog::Catalog;
use crate::fusion::{fuse, local_only};
use crate::remote::{RemoteTranscriber, TranscriptionService};
use crate::sampler::FrameSampler;
use crate::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectionPath {
    /// Upload succeeded; the result went through the catalog scorer, with or
    /// without a transcription.
    Fused,
    /// Upload failed; the result came from local patterns alone.
    LocalFallback,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detection {
    pub result: String,
    pub path: DetectionPath,
    pub elapsed: Duration,
}

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Object-safe so the HTTP layer can hold any detector behind `Arc<dyn SignDetector>`.
pub trait SignDetector: Send + Sync + 'static {
    fn detect<'a>(
        &'a self,
        video: Bytes,
        content_type: &'a str,
    ) -> BoxFuture<'a, Result<Detection, Error>>;

    fn catalog(&self) -> &'static Catalog;
}

/// Runs local analysis to completion, then consults the remote service and
/// fuses both signals against the catalog.
pub struct Detector<S, D, L> {
    sampler: Arc<FrameSampler<D, L>>,
    remote: RemoteTranscriber<S>,
    catalog: &'static Catalog,
}

impl<S, D, L> Detector<S, D, L>
where
    S: TranscriptionService,
    D: FrameDecoder,
    L: HandLandmarker,
{
    pub fn new(sampler: FrameSampler<D, L>, remote: RemoteTranscriber<S>) -> Self {
        Self {
            sampler: Arc::new(sampler),
            remote,
            catalog: Catalog::reference(),
        }
    }

    pub fn with_catalog(mut self, catalog: &'static Catalog) -> Self {
        self.catalog = catalog;
        self
    }

    async fn local_analysis(&self, video: Bytes, content_type: &str) -> Result<PatternSet, Error> {
        let sampler = Arc::clone(&self.sampler);
        let content_type = content_type.to_string();

        let patterns =
            tokio::task::spawn_blocking(move || sampler.sample(&video, &content_type)).await?;
        Ok(patterns)
    }

    /// Local analysis always runs to completion before the remote service is
    /// consulted. Only an upload failure takes the local-only path.
    pub async fn run(&self, video: Bytes, content_type: &str) -> Result<Detection, Error> {
        let started = tokio::time::Instant::now();

        let patterns = self.local_analysis(video.clone(), content_type).await?;

        let (result, path) = match self.remote.upload(video, content_type).await {
            Some(handle) => {
                let transcript = self.remote.fetch_transcription(&handle).await;
                let result = fuse(self.catalog, transcript.as_deref(), &patterns);
                (result, DetectionPath::Fused)
            }
            None => (local_only(&patterns), DetectionPath::LocalFallback),
        };

        let elapsed = started.elapsed();
        tracing::info!(
            result = %result,
            path = ?path,
            elapsed_ms = elapsed.as_millis() as u64,
            "sign_detected"
        );

        Ok(Detection {
            result,
            path,
            elapsed,
        })
    }
}

impl<S, D, L> SignDetector for Detector<S, D, L>
where
    S: TranscriptionService,
    D: FrameDecoder,
    L: HandLandmarker,
{
    fn detect<'a>(
        &'a self,
        video: Bytes,
        content_type: &'a str,
    ) -> BoxFuture<'a, Result<Detection, Error>> {
        Box::pin(self.run(video, content_type))
    }

    fn catalog(&self) -> &'static Catalog {
        self.catalog
    }
}
