use std::io::{ErrorKind, Read};

use crate::{Error, Frame, FrameSize};

/// Splits a headerless rawvideo (rgb24) byte stream into fixed-size frames.
pub struct RawFrameReader<R> {
    inner: R,
    size: FrameSize,
    done: bool,
}

impl<R: Read> RawFrameReader<R> {
    pub fn new(inner: R, size: FrameSize) -> Result<Self, Error> {
        if size.width == 0 || size.height == 0 {
            return Err(Error::InvalidSize {
                width: size.width,
                height: size.height,
            });
        }

        Ok(Self {
            inner,
            size,
            done: false,
        })
    }

    fn fill(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        let mut filled = 0;
        while filled < buf.len() {
            match self.inner.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
        Ok(filled)
    }
}

impl<R: Read> Iterator for RawFrameReader<R> {
    type Item = Result<Frame, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let expected = self.size.rgb24_len();
        let mut data = vec![0u8; expected];

        let got = match self.fill(&mut data) {
            Ok(n) => n,
            Err(e) => {
                self.done = true;
                return Some(Err(e.into()));
            }
        };

        if got == 0 {
            self.done = true;
            return None;
        }

        if got < expected {
            self.done = true;
            return Some(Err(Error::TruncatedFrame { expected, got }));
        }

        Some(Ok(Frame {
            width: self.size.width,
            height: self.size.height,
            data,
        }))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    const TINY: FrameSize = FrameSize::new(2, 2);

    #[test]
    fn splits_stream_into_frames() {
        let bytes: Vec<u8> = (0..36).collect();
        let frames: Vec<Frame> = RawFrameReader::new(Cursor::new(bytes), TINY)
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();

        assert_eq!(frames.len(), 3);
        assert_eq!(frames[0].data, (0..12).collect::<Vec<u8>>());
        assert_eq!(frames[2].data[0], 24);
        assert!(frames.iter().all(|f| f.size() == TINY));
    }

    #[test]
    fn empty_stream_yields_nothing() {
        let mut reader = RawFrameReader::new(Cursor::new(Vec::new()), TINY).unwrap();
        assert!(reader.next().is_none());
    }

    #[test]
    fn trailing_partial_frame_is_an_error_and_ends_the_stream() {
        let mut reader = RawFrameReader::new(Cursor::new(vec![1u8; 12 + 5]), TINY).unwrap();

        assert!(matches!(reader.next(), Some(Ok(_))));
        assert!(matches!(
            reader.next(),
            Some(Err(Error::TruncatedFrame {
                expected: 12,
                got: 5
            }))
        ));
        assert!(reader.next().is_none());
    }

    #[test]
    fn zero_sized_frames_are_rejected() {
        assert!(RawFrameReader::new(Cursor::new(Vec::new()), FrameSize::new(0, 240)).is_err());
    }
}
