//! Finger extension from landmark geometry
//!
//! A finger counts as extended when its tip sits higher on screen (smaller
//! pixel y) than its base. The same rule applies to the thumb, so a thumb
//! held out sideways is not recognized reliably.

use serde::Serialize;

use super::landmarks::{FrameSize, HandLandmark, HandLandmarks};

/// Display color for finger annotations
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Finger {
    Thumb,
    Index,
    Middle,
    Ring,
    Pinky,
}

impl Finger {
    pub const ALL: [Finger; 5] = [
        Finger::Thumb,
        Finger::Index,
        Finger::Middle,
        Finger::Ring,
        Finger::Pinky,
    ];

    /// Position in `FINGERS` and in `FingerExtension`
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn spec(self) -> &'static FingerSpec {
        &FINGERS[self.index()]
    }
}

/// Static description of one finger
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FingerSpec {
    pub finger: Finger,
    pub tip: HandLandmark,
    pub base: HandLandmark,
    pub name: &'static str,
    pub color: Rgb,
}

/// The five fingers, thumb first
pub static FINGERS: [FingerSpec; 5] = [
    FingerSpec {
        finger: Finger::Thumb,
        tip: HandLandmark::ThumbTip,
        base: HandLandmark::ThumbCmc,
        name: "Thumb",
        color: Rgb::new(0, 0, 255),
    },
    FingerSpec {
        finger: Finger::Index,
        tip: HandLandmark::IndexTip,
        base: HandLandmark::IndexMcp,
        name: "Index",
        color: Rgb::new(0, 255, 0),
    },
    FingerSpec {
        finger: Finger::Middle,
        tip: HandLandmark::MiddleTip,
        base: HandLandmark::MiddleMcp,
        name: "Middle",
        color: Rgb::new(255, 0, 0),
    },
    FingerSpec {
        finger: Finger::Ring,
        tip: HandLandmark::RingTip,
        base: HandLandmark::RingMcp,
        name: "Ring",
        color: Rgb::new(0, 255, 255),
    },
    FingerSpec {
        finger: Finger::Pinky,
        tip: HandLandmark::PinkyTip,
        base: HandLandmark::PinkyMcp,
        name: "Pinky",
        color: Rgb::new(255, 0, 255),
    },
];

/// Which fingers are extended in the current frame
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FingerExtension {
    extended: [bool; 5],
    count: usize,
}

impl FingerExtension {
    pub fn from_flags(extended: [bool; 5]) -> Self {
        let count = extended.iter().filter(|e| **e).count();
        Self { extended, count }
    }

    pub fn is_extended(&self, finger: Finger) -> bool {
        self.extended[finger.index()]
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn flags(&self) -> [bool; 5] {
        self.extended
    }

    /// Specs of the extended fingers, thumb first
    pub fn extended_fingers(&self) -> impl Iterator<Item = &'static FingerSpec> + '_ {
        FINGERS.iter().filter(move |spec| self.is_extended(spec.finger))
    }
}

/// Classify each finger as extended or folded
pub fn classify_fingers(hand: &HandLandmarks, frame: FrameSize) -> FingerExtension {
    let mut extended = [false; 5];
    for spec in FINGERS.iter() {
        let tip_y = hand.pixel_y(spec.tip, frame);
        let base_y = hand.pixel_y(spec.base, frame);
        extended[spec.finger.index()] = tip_y < base_y;
    }
    FingerExtension::from_flags(extended)
}
