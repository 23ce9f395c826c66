use std::ffi::OsString;
use std::path::Path;
use std::process::{Child, ChildStdout, Command, Stdio};

use crate::{Error, Frame, FrameDecoder, FrameSize, Frames, RawFrameReader};

const DEFAULT_PROGRAM: &str = "ffmpeg";

/// Decodes through an `ffmpeg` child process emitting rgb24 rawvideo on stdout.
///
/// Scaling happens inside ffmpeg, so every yielded frame already has the
/// requested size regardless of the source resolution.
#[derive(Debug, Clone)]
pub struct FfmpegDecoder {
    program: OsString,
}

impl Default for FfmpegDecoder {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRAM)
    }
}

impl FfmpegDecoder {
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn command(&self, path: &Path, size: FrameSize) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(["-hide_banner", "-loglevel", "error", "-nostdin", "-i"])
            .arg(path)
            .args(["-an", "-vf"])
            .arg(format!("scale={}:{}", size.width, size.height))
            .args(["-pix_fmt", "rgb24", "-f", "rawvideo", "pipe:1"])
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null());
        cmd
    }
}

impl FrameDecoder for FfmpegDecoder {
    fn decode(&self, path: &Path, size: FrameSize) -> Result<Frames<'_>, Error> {
        let mut child = self
            .command(path, size)
            .spawn()
            .map_err(|source| Error::Spawn {
                program: self.program.to_string_lossy().into_owned(),
                source,
            })?;

        let stdout = match child.stdout.take() {
            Some(stdout) => stdout,
            None => {
                let _ = child.kill();
                let _ = child.wait();
                return Err(Error::Io(std::io::Error::other("ffmpeg stdout not captured")));
            }
        };

        tracing::debug!(path = %path.display(), size = %size, "ffmpeg_decode_started");

        Ok(Box::new(FfmpegFrames {
            reader: RawFrameReader::new(stdout, size)?,
            child,
            finished: false,
        }))
    }
}

struct FfmpegFrames {
    reader: RawFrameReader<ChildStdout>,
    child: Child,
    finished: bool,
}

impl Iterator for FfmpegFrames {
    type Item = Result<Frame, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        match self.reader.next() {
            Some(Ok(frame)) => Some(Ok(frame)),
            Some(Err(e)) => {
                self.finished = true;
                Some(Err(e))
            }
            None => {
                self.finished = true;
                match self.child.wait() {
                    Ok(status) if status.success() => None,
                    Ok(status) => Some(Err(Error::DecoderExited(status))),
                    Err(e) => Some(Err(e.into())),
                }
            }
        }
    }
}

impl Drop for FfmpegFrames {
    fn drop(&mut self) {
        if !self.finished {
            let _ = self.child.kill();
        }
        let _ = self.child.wait();
    }
}
