use hs_video_frames::Frame;

use crate::{Error, HandLandmarks};

/// Source of per-frame hand landmarks.
///
/// Detection is stateful across the frames of one clip (tracking), so callers
/// open a session per clip and drop it when the clip is done.
pub trait HandLandmarker: Send + Sync + 'static {
    type Session: LandmarkSession;

    fn open(&self) -> Result<Self::Session, Error>;
}

pub trait LandmarkSession {
    /// Landmarks of the most prominent hand, or `None` when no hand is visible.
    fn detect(&mut self, frame: &Frame) -> Result<Option<HandLandmarks>, Error>;
}
