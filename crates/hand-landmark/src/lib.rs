mod error;
mod landmarker;
mod mediapipe;
mod pattern;
mod types;

pub use error::Error;
pub use landmarker::{HandLandmarker, LandmarkSession};
pub use mediapipe::{MediaPipeConfig, MediaPipeLandmarker, MediaPipeSession};
pub use pattern::{HandPattern, PatternSet, extract_patterns};
pub use types::{HandKeypoints, HandLandmarks, Landmark, Point, landmarks};
