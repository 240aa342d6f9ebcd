//! Hand module - landmark input, finger extension, hand state
//!
//! Re-exports only. All logic in submodules.

mod fingers;
mod landmarks;
mod state;

pub use fingers::{classify_fingers, Finger, FingerExtension, FingerSpec, Rgb, FINGERS};
pub use landmarks::{
    FrameSize, HandLandmark, HandLandmarks, HandObservation, Landmark, LandmarkFrame, TrackId,
    LANDMARK_COUNT,
};
pub use state::HandState;
