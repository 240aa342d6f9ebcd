//! Errors surfaced to callers of the classification engine

use wasm_bindgen::JsValue;

/// Errors that can occur while classifying a frame
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GestureError {
    /// Wrong landmark count, or a coordinate outside the normalized [0, 1] range
    #[error("invalid landmark set: {reason}")]
    InvalidLandmarkSet { reason: String },

    /// Two hands in one frame claimed the same track
    #[error("duplicate track id {0} in frame")]
    DuplicateTrackId(u32),

    #[error("invalid frame size {width}x{height}")]
    InvalidFrameSize { width: u32, height: u32 },

    #[error("invalid gesture configuration: {0}")]
    InvalidConfig(String),
}

impl GestureError {
    pub(crate) fn landmark_count(found: usize, expected: usize) -> Self {
        GestureError::InvalidLandmarkSet {
            reason: format!("expected {} landmarks, got {}", expected, found),
        }
    }

    pub(crate) fn landmark_out_of_range(index: usize, x: f32, y: f32) -> Self {
        GestureError::InvalidLandmarkSet {
            reason: format!("landmark {} at ({}, {}) is outside [0, 1]", index, x, y),
        }
    }
}

impl From<GestureError> for JsValue {
    fn from(err: GestureError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, GestureError>;
