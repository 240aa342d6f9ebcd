//! Hand landmark frame - the per-frame input from the pose estimator
//!
//! MediaPipe reports 21 landmarks per hand in normalized image coordinates.
//! Access is by `HandLandmark`, which maps each anatomical point to its
//! fixed offset in the landmark array.

use std::ops::Index;

use nalgebra::Point2;

use crate::error::{GestureError, Result};

/// Number of landmarks per hand
pub const LANDMARK_COUNT: usize = 21;

// ============================================================================
// HAND LANDMARK INDICES (MediaPipe Hands - 21 total)
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum HandLandmark {
    Wrist = 0,
    ThumbCmc = 1,
    ThumbMcp = 2,
    ThumbIp = 3,
    ThumbTip = 4,
    IndexMcp = 5,
    IndexPip = 6,
    IndexDip = 7,
    IndexTip = 8,
    MiddleMcp = 9,
    MiddlePip = 10,
    MiddleDip = 11,
    MiddleTip = 12,
    RingMcp = 13,
    RingPip = 14,
    RingDip = 15,
    RingTip = 16,
    PinkyMcp = 17,
    PinkyPip = 18,
    PinkyDip = 19,
    PinkyTip = 20,
}

impl HandLandmark {
    /// Offset of this landmark in a 21-entry landmark array
    pub const fn index(self) -> usize {
        self as usize
    }
}

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// A single landmark (normalized 0-1 coordinates)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
}

impl Landmark {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    fn in_range(&self) -> bool {
        (0.0..=1.0).contains(&self.x) && (0.0..=1.0).contains(&self.y)
    }
}

/// Pixel dimensions of the frame the landmarks were estimated on
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameSize {
    pub width: u32,
    pub height: u32,
}

impl FrameSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(GestureError::InvalidFrameSize {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

/// A validated set of 21 landmarks for one hand
#[derive(Clone, Debug, PartialEq)]
pub struct HandLandmarks {
    points: [Landmark; LANDMARK_COUNT],
}

impl HandLandmarks {
    /// Validate raw estimator output.
    ///
    /// Fails with `InvalidLandmarkSet` unless there are exactly 21 landmarks
    /// and every coordinate is finite and inside [0, 1].
    pub fn from_slice(landmarks: &[Landmark]) -> Result<Self> {
        if landmarks.len() != LANDMARK_COUNT {
            return Err(GestureError::landmark_count(landmarks.len(), LANDMARK_COUNT));
        }

        let mut points = [Landmark::default(); LANDMARK_COUNT];
        for (i, lm) in landmarks.iter().enumerate() {
            // NaN fails the range check as well
            if !lm.in_range() {
                return Err(GestureError::landmark_out_of_range(i, lm.x, lm.y));
            }
            points[i] = *lm;
        }

        Ok(Self { points })
    }

    pub fn points(&self) -> &[Landmark; LANDMARK_COUNT] {
        &self.points
    }

    /// Landmark position in pixel coordinates (truncated toward zero)
    pub fn pixel(&self, landmark: HandLandmark, frame: FrameSize) -> Point2<i32> {
        let lm = &self[landmark];
        Point2::new(
            (lm.x * frame.width as f32) as i32,
            (lm.y * frame.height as f32) as i32,
        )
    }

    pub fn pixel_x(&self, landmark: HandLandmark, frame: FrameSize) -> i32 {
        (self[landmark].x * frame.width as f32) as i32
    }

    pub fn pixel_y(&self, landmark: HandLandmark, frame: FrameSize) -> i32 {
        (self[landmark].y * frame.height as f32) as i32
    }
}

impl Index<HandLandmark> for HandLandmarks {
    type Output = Landmark;

    fn index(&self, landmark: HandLandmark) -> &Landmark {
        &self.points[landmark.index()]
    }
}

impl TryFrom<&[Landmark]> for HandLandmarks {
    type Error = GestureError;

    fn try_from(landmarks: &[Landmark]) -> Result<Self> {
        Self::from_slice(landmarks)
    }
}

/// Stable per-hand identifier supplied by the estimator
pub type TrackId = u32;

/// One detected hand as reported by the estimator (not yet validated)
#[derive(Clone, Debug, PartialEq)]
pub struct HandObservation {
    pub track_id: TrackId,
    pub landmarks: Vec<Landmark>,
}

/// Everything the estimator reports for one video frame
#[derive(Clone, Debug, PartialEq)]
pub struct LandmarkFrame {
    pub size: FrameSize,
    pub hands: Vec<HandObservation>,
}

impl LandmarkFrame {
    pub fn new(size: FrameSize) -> Self {
        Self {
            size,
            hands: Vec::new(),
        }
    }

    pub fn with_hand(mut self, track_id: TrackId, landmarks: Vec<Landmark>) -> Self {
        self.hands.push(HandObservation { track_id, landmarks });
        self
    }
}
