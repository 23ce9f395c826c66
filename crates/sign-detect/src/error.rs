#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Decode(#[from] hs_video_frames::Error),

    #[error(transparent)]
    Landmark(#[from] hs_hand_landmark::Error),

    #[error("local analysis task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}
