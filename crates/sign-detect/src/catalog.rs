/// One recognizable intent and the cues that vote for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntentDefinition {
    pub name: &'static str,
    pub visual_cues: &'static [&'static str],
    pub keywords: &'static [&'static str],
    pub gestures: &'static [&'static str],
    /// Local hand pattern label most associated with this intent.
    pub landmark_pattern: &'static str,
}

/// Ordered, immutable intent catalog.
///
/// Declaration order is significant: it breaks score ties (first declared wins).
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    intents: &'static [IntentDefinition],
    phrases: &'static [(&'static str, &'static str)],
}

impl Catalog {
    pub const fn new(
        intents: &'static [IntentDefinition],
        phrases: &'static [(&'static str, &'static str)],
    ) -> Self {
        Self { intents, phrases }
    }

    pub fn reference() -> &'static Catalog {
        &REFERENCE_CATALOG
    }

    pub fn intents(&self) -> &'static [IntentDefinition] {
        self.intents
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.intents.iter().map(|intent| intent.name)
    }

    pub fn len(&self) -> usize {
        self.intents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intents.is_empty()
    }

    /// Display phrase for an intent, falling back to the raw name.
    pub fn phrase_for<'a>(&self, name: &'a str) -> &'a str {
        self.phrases
            .iter()
            .find(|(intent, _)| *intent == name)
            .map(|(_, phrase)| *phrase)
            .unwrap_or(name)
    }
}

pub static REFERENCE_CATALOG: Catalog = Catalog::new(REFERENCE_INTENTS, REFERENCE_PHRASES);

const REFERENCE_PHRASES: &[(&str, &str)] = &[
    ("water", "I want water"),
    ("food", "I want food"),
    ("bathroom", "I need bathroom"),
    ("pain", "I'm in pain"),
    ("help", "I need help"),
    ("yes", "Yes"),
    ("no", "No"),
    ("please", "Please"),
    ("thank_you", "Thank you"),
    ("more", "More"),
];

const REFERENCE_INTENTS: &[IntentDefinition] = &[
    IntentDefinition {
        name: "water",
        visual_cues: &[
            "hand to mouth",
            "drinking motion",
            "cup shape",
            "pouring",
            "tapping lips",
            "finger to mouth",
        ],
        keywords: &["water", "drink", "thirsty", "liquid", "beverage", "sip"],
        gestures: &["W handshape", "index finger tapping chin", "drinking gesture"],
        landmark_pattern: "hand_to_mouth",
    },
    IntentDefinition {
        name: "food",
        visual_cues: &[
            "hand to mouth eating",
            "chewing motion",
            "fork motion",
            "spoon motion",
            "bite gesture",
        ],
        keywords: &["food", "eat", "hungry", "meal", "snack", "bite", "chew"],
        gestures: &["fingers to mouth", "eating motion", "food handshape"],
        landmark_pattern: "fingers_to_mouth",
    },
    IntentDefinition {
        name: "help",
        visual_cues: &[
            "raised hand",
            "waving",
            "both hands up",
            "reaching out",
            "urgent gesture",
        ],
        keywords: &["help", "assistance", "emergency", "aid", "support", "rescue"],
        gestures: &["help sign", "SOS gesture", "raised arms", "beckoning"],
        landmark_pattern: "hands_raised",
    },
    IntentDefinition {
        name: "bathroom",
        visual_cues: &[
            "T handshape",
            "shaking motion",
            "pointing down",
            "urgent movement",
        ],
        keywords: &[
            "bathroom",
            "toilet",
            "restroom",
            "urgent",
            "need to go",
            "potty",
        ],
        gestures: &["T sign", "restroom sign", "bathroom gesture"],
        landmark_pattern: "t_handshape",
    },
    IntentDefinition {
        name: "pain",
        visual_cues: &[
            "pointing to body part",
            "holding area",
            "grimacing",
            "touching head",
            "clutching",
        ],
        keywords: &["pain", "hurt", "ache", "sore", "ouch", "injury", "medical"],
        gestures: &["pain sign", "pointing to hurt area", "holding gesture"],
        landmark_pattern: "pointing_gesture",
    },
    IntentDefinition {
        name: "yes",
        visual_cues: &[
            "nodding",
            "thumbs up",
            "fist nodding",
            "head movement up down",
        ],
        keywords: &["yes", "agree", "okay", "correct", "right", "positive"],
        gestures: &["yes sign", "thumbs up", "nodding fist", "affirmative"],
        landmark_pattern: "thumbs_up",
    },
    IntentDefinition {
        name: "no",
        visual_cues: &[
            "head shaking",
            "thumbs down",
            "hand waving",
            "dismissive gesture",
        ],
        keywords: &["no", "disagree", "wrong", "stop", "negative", "refuse"],
        gestures: &["no sign", "head shake", "dismissive wave", "negative"],
        landmark_pattern: "hand_wave",
    },
    IntentDefinition {
        name: "please",
        visual_cues: &[
            "hand on chest",
            "circular motion",
            "polite gesture",
            "open palm",
        ],
        keywords: &["please", "request", "polite", "ask", "kindly"],
        gestures: &["please sign", "chest circular motion", "polite gesture"],
        landmark_pattern: "hand_on_chest",
    },
    IntentDefinition {
        name: "thank_you",
        visual_cues: &["hand from chin forward", "grateful gesture", "bowing motion"],
        keywords: &["thank you", "thanks", "grateful", "appreciate", "gratitude"],
        gestures: &["thank you sign", "chin to forward motion", "grateful gesture"],
        landmark_pattern: "chin_to_forward",
    },
    IntentDefinition {
        name: "more",
        visual_cues: &["fingertips together", "tapping motion", "repeat gesture"],
        keywords: &["more", "again", "repeat", "additional", "extra"],
        gestures: &["more sign", "fingertips touching", "repeat motion"],
        landmark_pattern: "fingertips_together",
    },
];
