use serde::Deserialize;

/// Landmark indices of the 21-point hand model.
pub mod landmarks {
    pub const WRIST: usize = 0;
    pub const THUMB_TIP: usize = 4;
    pub const INDEX_FINGER_TIP: usize = 8;
    pub const MIDDLE_FINGER_TIP: usize = 12;
    pub const COUNT: usize = 21;
}

/// Normalized image-space point; `y` grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub z: f32,
}

impl From<Landmark> for Point {
    fn from(lm: Landmark) -> Self {
        Point::new(lm.x, lm.y)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HandLandmarks {
    pub landmarks: Vec<Landmark>,
    #[serde(default)]
    pub score: f32,
    #[serde(default)]
    pub handedness: Option<String>,
}

impl HandLandmarks {
    /// `None` unless the full landmark set is present.
    pub fn keypoints(&self) -> Option<HandKeypoints> {
        if self.landmarks.len() < landmarks::COUNT {
            return None;
        }

        Some(HandKeypoints {
            thumb_tip: self.landmarks[landmarks::THUMB_TIP].into(),
            index_tip: self.landmarks[landmarks::INDEX_FINGER_TIP].into(),
            middle_tip: self.landmarks[landmarks::MIDDLE_FINGER_TIP].into(),
            wrist: self.landmarks[landmarks::WRIST].into(),
        })
    }
}

/// The subset of landmarks the pattern rules look at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandKeypoints {
    pub thumb_tip: Point,
    pub index_tip: Point,
    pub middle_tip: Point,
    pub wrist: Point,
}
