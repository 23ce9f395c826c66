mod catalog;
mod detector;
mod error;
mod fusion;
mod remote;
mod sampler;

pub use catalog::*;
pub use detector::*;
pub use error::Error;
pub use fusion::*;
pub use remote::*;
pub use sampler::*;

pub use hs_hand_landmark::{HandPattern, PatternSet};
pub use hs_memories::TranscriptSegment;
