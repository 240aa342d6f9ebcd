//! Gesture labels

use std::fmt;

use serde::Serialize;

/// Final gesture decision for one hand in one frame
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub enum Gesture {
    Fist,
    Pointing,
    /// Thumbs up
    Like,
    /// Thumbs down
    Dislike,
    Peace,
    Ok,
    TwoFingers,
    OpenHand,
    Wave,
    SwipeLeft,
    SwipeRight,
    NFingersExtended(usize),
    #[default]
    Unknown,
}

impl Gesture {
    /// Gestures that need several frames of history
    pub fn is_motion(&self) -> bool {
        matches!(self, Gesture::Wave | Gesture::SwipeLeft | Gesture::SwipeRight)
    }
}

impl fmt::Display for Gesture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Gesture::Fist => "Fist",
            Gesture::Pointing => "Pointing",
            Gesture::Like => "Like (Thumbs Up)",
            Gesture::Dislike => "Dislike (Thumbs Down)",
            Gesture::Peace => "Peace",
            Gesture::Ok => "OK",
            Gesture::TwoFingers => "Two Fingers",
            Gesture::OpenHand => "Open Hand",
            Gesture::Wave => "Hi (Waving)",
            Gesture::SwipeLeft => "Swipe Left",
            Gesture::SwipeRight => "Swipe Right",
            Gesture::NFingersExtended(n) => return write!(f, "{} Fingers Extended", n),
            Gesture::Unknown => "Unknown",
        };
        f.write_str(label)
    }
}
