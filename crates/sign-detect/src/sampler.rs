use std::io::Write;

use hs_hand_landmark::{HandLandmarker, LandmarkSession, PatternSet, extract_patterns};
use hs_video_frames::{FrameDecoder, FrameSize};
use hs_video_mime::content_type_to_extension;
use tempfile::NamedTempFile;

use crate::Error;

pub const ANALYSIS_FRAME_SIZE: FrameSize = FrameSize::new(320, 240);
/// Only every n-th decoded frame (1-based) is analyzed.
pub const DEFAULT_FRAME_STRIDE: usize = 3;

/// Runs hand-landmark analysis over a clip and collects the distinct patterns.
pub struct FrameSampler<D, L> {
    decoder: D,
    landmarker: L,
    stride: usize,
    frame_size: FrameSize,
}

impl<D: FrameDecoder, L: HandLandmarker> FrameSampler<D, L> {
    pub fn new(decoder: D, landmarker: L) -> Self {
        Self {
            decoder,
            landmarker,
            stride: DEFAULT_FRAME_STRIDE,
            frame_size: ANALYSIS_FRAME_SIZE,
        }
    }

    pub fn with_stride(mut self, stride: usize) -> Self {
        self.stride = stride.max(1);
        self
    }

    pub fn with_frame_size(mut self, frame_size: FrameSize) -> Self {
        self.frame_size = frame_size;
        self
    }

    /// Best effort: any failure yields an empty set.
    pub fn sample(&self, video: &[u8], content_type: &str) -> PatternSet {
        match self.try_sample(video, content_type) {
            Ok(patterns) => patterns,
            Err(e) => {
                tracing::warn!(error = %e, "local_analysis_failed");
                PatternSet::new()
            }
        }
    }

    fn try_sample(&self, video: &[u8], content_type: &str) -> Result<PatternSet, Error> {
        let file = write_to_temp_file(video, content_type)?;
        let frames = self.decoder.decode(file.path(), self.frame_size)?;
        let mut session = self.landmarker.open()?;

        let mut patterns = PatternSet::new();
        let mut decoded = 0usize;
        let mut analyzed = 0usize;

        for frame in frames {
            let frame = match frame {
                Ok(frame) => frame,
                Err(e) => {
                    tracing::debug!(error = %e, frame = decoded + 1, "frame_decode_stopped");
                    break;
                }
            };

            decoded += 1;
            if decoded % self.stride != 0 {
                continue;
            }

            analyzed += 1;
            if let Some(hand) = session.detect(&frame)? {
                patterns.extend(extract_patterns(hand.keypoints().as_ref()));
            }
        }

        tracing::info!(
            frames_decoded = decoded,
            frames_analyzed = analyzed,
            patterns = ?patterns,
            "local_analysis_finished"
        );

        Ok(patterns)
    }
}

/// Scratch copy of the clip; deleted when the handle drops.
fn write_to_temp_file(video: &[u8], content_type: &str) -> std::io::Result<NamedTempFile> {
    let extension = content_type_to_extension(content_type);
    let mut file = tempfile::Builder::new()
        .prefix("sign_clip_")
        .suffix(&format!(".{}", extension))
        .tempfile()?;

    file.write_all(video)?;
    file.flush()?;
    Ok(file)
}
