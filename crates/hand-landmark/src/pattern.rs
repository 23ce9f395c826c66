use std::collections::BTreeSet;

use serde::Serialize;

use crate::HandKeypoints;

/// Index fingertip above this line is treated as "near the face".
pub const MOUTH_REGION_MAX_Y: f32 = 0.3;
/// Minimum horizontal thumb/index separation for an open palm.
pub const OPEN_PALM_MIN_SPREAD: f32 = 0.1;

/// Coarse per-frame gesture tag.
///
/// Variants are declared in lexicographic order of their labels, so the
/// derived `Ord` (and therefore `PatternSet` iteration) is lexicographic.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    strum::Display,
    strum::AsRefStr,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum HandPattern {
    HandToMouth,
    OpenPalm,
    PointingGesture,
    ThumbsUp,
}

pub type PatternSet = BTreeSet<HandPattern>;

pub fn extract_patterns(hand: Option<&HandKeypoints>) -> PatternSet {
    let mut patterns = PatternSet::new();

    let Some(hand) = hand else {
        return patterns;
    };

    let HandKeypoints {
        thumb_tip,
        index_tip,
        middle_tip,
        wrist,
    } = *hand;

    if thumb_tip.y < wrist.y && index_tip.y > wrist.y {
        patterns.insert(HandPattern::ThumbsUp);
    }

    if index_tip.y < wrist.y && middle_tip.y > index_tip.y {
        patterns.insert(HandPattern::PointingGesture);
    }

    if index_tip.y < MOUTH_REGION_MAX_Y {
        patterns.insert(HandPattern::HandToMouth);
    }

    if (thumb_tip.x - index_tip.x).abs() > OPEN_PALM_MIN_SPREAD {
        patterns.insert(HandPattern::OpenPalm);
    }

    patterns
}
