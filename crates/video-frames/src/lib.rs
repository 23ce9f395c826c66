mod error;
mod ffmpeg;
mod frame;
mod reader;

pub use error::Error;
pub use ffmpeg::FfmpegDecoder;
pub use frame::{Frame, FrameSize};
pub use reader::RawFrameReader;

use std::path::Path;

pub type Frames<'a> = Box<dyn Iterator<Item = Result<Frame, Error>> + 'a>;

/// Turns an encoded video file into a sequence of RGB24 frames scaled to `size`.
///
/// Frames are yielded in presentation order. An `Err` item ends the stream;
/// callers should not expect further frames after one.
pub trait FrameDecoder: Send + Sync + 'static {
    fn decode(&self, path: &Path, size: FrameSize) -> Result<Frames<'_>, Error>;
}
