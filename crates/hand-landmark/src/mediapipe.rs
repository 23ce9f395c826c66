use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};

use hs_video_frames::Frame;
use serde::Deserialize;

use crate::{Error, HandLandmarker, HandLandmarks, LandmarkSession};

const READY: &str = "READY";

#[derive(Debug, Clone)]
pub struct MediaPipeConfig {
    pub python: PathBuf,
    pub script: PathBuf,
    pub max_num_hands: u32,
    pub min_detection_confidence: f32,
    pub min_tracking_confidence: f32,
    pub model_complexity: u8,
}

impl Default for MediaPipeConfig {
    fn default() -> Self {
        Self {
            python: "python3".into(),
            script: "scripts/hand_landmarks.py".into(),
            max_num_hands: 1,
            min_detection_confidence: 0.5,
            min_tracking_confidence: 0.3,
            model_complexity: 0,
        }
    }
}

/// Runs MediaPipe Hands in a helper process, one process per session.
///
/// Wire protocol: the helper prints `READY` once initialised. For each frame it
/// reads a little-endian `u32` header (width, height, channels) followed by the
/// raw RGB bytes, and answers with one JSON line `{"hands": [...], "error": ...}`.
#[derive(Debug, Clone, Default)]
pub struct MediaPipeLandmarker {
    config: MediaPipeConfig,
}

impl MediaPipeLandmarker {
    pub fn new(config: MediaPipeConfig) -> Self {
        Self { config }
    }

    fn command(&self) -> Command {
        let c = &self.config;
        let mut cmd = Command::new(&c.python);
        cmd.arg(&c.script)
            .arg("--max-num-hands")
            .arg(c.max_num_hands.to_string())
            .arg("--min-detection-confidence")
            .arg(c.min_detection_confidence.to_string())
            .arg("--min-tracking-confidence")
            .arg(c.min_tracking_confidence.to_string())
            .arg("--model-complexity")
            .arg(c.model_complexity.to_string())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit());
        cmd
    }
}

impl HandLandmarker for MediaPipeLandmarker {
    type Session = MediaPipeSession;

    fn open(&self) -> Result<Self::Session, Error> {
        let mut child = self.command().spawn().map_err(Error::Spawn)?;

        let (Some(stdin), Some(stdout)) = (child.stdin.take(), child.stdout.take()) else {
            let _ = child.kill();
            let _ = child.wait();
            return Err(Error::Closed);
        };

        let mut session = MediaPipeSession {
            child,
            stdin,
            stdout: BufReader::new(stdout),
        };

        let mut line = String::new();
        session.stdout.read_line(&mut line)?;
        if line.trim() != READY {
            return Err(Error::NotReady(line.trim().to_string()));
        }

        tracing::debug!("hand_detector_ready");
        Ok(session)
    }
}

#[derive(Deserialize)]
struct DetectionResponse {
    #[serde(default)]
    hands: Vec<HandLandmarks>,
    #[serde(default)]
    error: Option<String>,
}

pub struct MediaPipeSession {
    child: Child,
    stdin: ChildStdin,
    stdout: BufReader<ChildStdout>,
}

impl LandmarkSession for MediaPipeSession {
    fn detect(&mut self, frame: &Frame) -> Result<Option<HandLandmarks>, Error> {
        self.stdin.write_all(&frame.width.to_le_bytes())?;
        self.stdin.write_all(&frame.height.to_le_bytes())?;
        self.stdin.write_all(&frame.channels().to_le_bytes())?;
        self.stdin.write_all(&frame.data)?;
        self.stdin.flush()?;

        let mut line = String::new();
        if self.stdout.read_line(&mut line)? == 0 {
            return Err(Error::Closed);
        }

        let response: DetectionResponse = serde_json::from_str(&line)?;
        if let Some(error) = response.error {
            return Err(Error::Detector(error));
        }

        Ok(response.hands.into_iter().next())
    }
}

impl Drop for MediaPipeSession {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}
