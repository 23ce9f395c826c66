use hs_hand_landmark::PatternSet;
use hs_memories::TranscriptSegment;

use crate::catalog::{Catalog, IntentDefinition};

pub const VISUAL_CUE_WEIGHT: u32 = 3;
pub const KEYWORD_WEIGHT: u32 = 2;
pub const GESTURE_WEIGHT: u32 = 4;
pub const LANDMARK_WEIGHT: u32 = 8;

pub const NO_GESTURE_DETECTED: &str = "No gesture detected";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntentScore {
    pub intent: &'static str,
    pub score: u32,
}

/// Lowercased concatenation of every segment, each prefixed by a space.
pub fn transcript_text(segments: Option<&[TranscriptSegment]>) -> String {
    segments
        .unwrap_or_default()
        .iter()
        .fold(String::new(), |mut text, segment| {
            text.push(' ');
            text.push_str(&segment.content.to_lowercase());
            text
        })
}

fn score_intent(intent: &IntentDefinition, text: &str, patterns: &PatternSet) -> u32 {
    let hits = |phrases: &[&str]| phrases.iter().filter(|p| text.contains(*p)).count() as u32;

    let mut score = hits(intent.visual_cues) * VISUAL_CUE_WEIGHT
        + hits(intent.keywords) * KEYWORD_WEIGHT
        + hits(intent.gestures) * GESTURE_WEIGHT;

    if patterns.iter().any(|p| p.as_ref() == intent.landmark_pattern) {
        score += LANDMARK_WEIGHT;
    }

    score
}

/// Positive scores only, in catalog order.
pub fn score_intents(catalog: &Catalog, text: &str, patterns: &PatternSet) -> Vec<IntentScore> {
    catalog
        .intents()
        .iter()
        .map(|intent| IntentScore {
            intent: intent.name,
            score: score_intent(intent, text, patterns),
        })
        .filter(|s| s.score > 0)
        .collect()
}

/// Highest score; on ties the earliest in the slice wins.
pub fn best_intent(scores: &[IntentScore]) -> Option<IntentScore> {
    scores
        .iter()
        .copied()
        .reduce(|best, s| if s.score > best.score { s } else { best })
}

/// Phrase used when the catalog cannot be consulted or nothing in it matched.
///
/// Picks the lexicographically smallest pattern label.
pub fn local_only(patterns: &PatternSet) -> String {
    match patterns.first() {
        Some(pattern) => format!("Gesture: {pattern}"),
        None => NO_GESTURE_DETECTED.to_string(),
    }
}

pub fn fuse(
    catalog: &Catalog,
    transcript: Option<&[TranscriptSegment]>,
    patterns: &PatternSet,
) -> String {
    let text = transcript_text(transcript);
    let scores = score_intents(catalog, &text, patterns);

    match best_intent(&scores) {
        Some(best) => {
            tracing::debug!(scores = ?scores, winner = best.intent, "intent_scored");
            catalog.phrase_for(best.intent).to_string()
        }
        None => local_only(patterns),
    }
}

#[cfg(test)]
mod tests {
    use hs_hand_landmark::HandPattern;

    use super::*;

    fn segments(contents: &[&str]) -> Vec<TranscriptSegment> {
        contents.iter().map(|c| TranscriptSegment::new(*c)).collect()
    }

    fn score_of(scores: &[IntentScore], intent: &str) -> Option<u32> {
        scores.iter().find(|s| s.intent == intent).map(|s| s.score)
    }

    #[test]
    fn transcript_text_is_lowercased_and_space_joined() {
        let segs = segments(&["A Person", "Drinking MOTION"]);
        assert_eq!(transcript_text(Some(&segs)), " a person drinking motion");
        assert_eq!(transcript_text(None), "");
        assert_eq!(transcript_text(Some(&[])), "");
    }

    #[test]
    fn drinking_motion_with_hand_to_mouth_is_water() {
        let catalog = Catalog::reference();
        let segs = segments(&["drinking motion"]);
        let patterns = PatternSet::from([HandPattern::HandToMouth]);

        let scores = score_intents(catalog, &transcript_text(Some(&segs)), &patterns);
        // cue "drinking motion" + keyword "drink" (substring) + landmark bonus
        assert_eq!(score_of(&scores, "water"), Some(3 + 2 + 8));
        assert!(scores.iter().all(|s| s.intent == "water" || s.score < 13));

        assert_eq!(fuse(catalog, Some(&segs), &patterns), "I want water");
    }

    #[test]
    fn thumbs_up_alone_is_yes() {
        let patterns = PatternSet::from([HandPattern::ThumbsUp]);
        let scores = score_intents(Catalog::reference(), "", &patterns);

        assert_eq!(scores, vec![IntentScore { intent: "yes", score: 8 }]);
        assert_eq!(fuse(Catalog::reference(), None, &patterns), "Yes");
    }

    #[test]
    fn nothing_at_all_is_no_gesture() {
        assert_eq!(
            fuse(Catalog::reference(), None, &PatternSet::new()),
            "No gesture detected"
        );
        assert_eq!(
            fuse(Catalog::reference(), Some(&[]), &PatternSet::new()),
            "No gesture detected"
        );
    }

    #[test]
    fn unmatched_patterns_fall_back_to_first_label() {
        // open_palm is not any intent's landmark pattern
        let patterns = PatternSet::from([HandPattern::OpenPalm]);
        assert_eq!(
            fuse(Catalog::reference(), None, &patterns),
            "Gesture: open_palm"
        );
    }

    #[test]
    fn local_fallback_picks_lexicographically_first_label() {
        let patterns = PatternSet::from([
            HandPattern::ThumbsUp,
            HandPattern::OpenPalm,
            HandPattern::PointingGesture,
        ]);
        assert_eq!(local_only(&patterns), "Gesture: open_palm");
        assert_eq!(local_only(&PatternSet::new()), NO_GESTURE_DETECTED);
    }

    #[test]
    fn each_category_uses_its_weight() {
        let catalog = Catalog::reference();
        let none = PatternSet::new();

        let scores = score_intents(catalog, " grimacing", &none);
        assert_eq!(score_of(&scores, "pain"), Some(VISUAL_CUE_WEIGHT));

        let scores = score_intents(catalog, " toilet", &none);
        assert_eq!(score_of(&scores, "bathroom"), Some(KEYWORD_WEIGHT));

        let scores = score_intents(catalog, " beckoning", &none);
        assert_eq!(score_of(&scores, "help"), Some(GESTURE_WEIGHT));
    }

    #[test]
    fn mixed_case_catalog_phrases_never_match_lowercased_text() {
        let segs = segments(&["W handshape"]);
        let text = transcript_text(Some(&segs));
        let scores = score_intents(Catalog::reference(), &text, &PatternSet::new());
        assert_eq!(score_of(&scores, "water"), None);
    }

    #[test]
    fn ties_go_to_the_first_declared_intent() {
        // "thanks" -> thank_you +2, "again" -> more +2; thank_you is declared first
        let segs = segments(&["thanks again"]);
        let catalog = Catalog::reference();

        let scores = score_intents(catalog, &transcript_text(Some(&segs)), &PatternSet::new());
        assert_eq!(score_of(&scores, "thank_you"), Some(2));
        assert_eq!(score_of(&scores, "more"), Some(2));
        assert_eq!(fuse(catalog, Some(&segs), &PatternSet::new()), "Thank you");

        static SWAPPED_INTENTS: [IntentDefinition; 2] = [
            IntentDefinition {
                name: "more",
                visual_cues: &[],
                keywords: &["again"],
                gestures: &[],
                landmark_pattern: "fingertips_together",
            },
            IntentDefinition {
                name: "thank_you",
                visual_cues: &[],
                keywords: &["thanks"],
                gestures: &[],
                landmark_pattern: "chin_to_forward",
            },
        ];
        static SWAPPED: Catalog = Catalog::new(&SWAPPED_INTENTS, &[("thank_you", "Thank you")]);

        assert_eq!(fuse(&SWAPPED, Some(&segs), &PatternSet::new()), "more");
    }

    #[test]
    fn best_intent_prefers_strictly_higher_scores() {
        let scores = [
            IntentScore { intent: "a", score: 2 },
            IntentScore { intent: "b", score: 5 },
            IntentScore { intent: "c", score: 5 },
        ];
        assert_eq!(best_intent(&scores).map(|s| s.intent), Some("b"));
        assert_eq!(best_intent(&[]), None);
    }

    #[test]
    fn fusion_is_deterministic() {
        let segs = segments(&["Someone is nodding, thumbs up", "maybe asking for help"]);
        let patterns = PatternSet::from([HandPattern::PointingGesture, HandPattern::ThumbsUp]);

        let first = fuse(Catalog::reference(), Some(&segs), &patterns);
        for _ in 0..10 {
            assert_eq!(fuse(Catalog::reference(), Some(&segs), &patterns), first);
        }
    }
}
