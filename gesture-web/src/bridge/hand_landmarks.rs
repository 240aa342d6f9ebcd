//! Hand landmark intake from JavaScript
//!
//! MediaPipe Hands results arrive as one flat Float32Array:
//! [hand0.lm0.x, hand0.lm0.y, hand0.lm0.z, hand0.lm1.x, ...]
//! 21 landmarks x 3 values per hand. Depth (z) is not used.

use wasm_bindgen::prelude::*;

use crate::hand::{FrameSize, HandObservation, Landmark, LandmarkFrame, TrackId, LANDMARK_COUNT};

use super::classifier_integration::classify_frame;

/// Floats per landmark in the flat layout (x, y, z)
pub const LANDMARK_STRIDE: usize = 3;

/// Floats per hand in the flat layout
pub const HAND_STRIDE: usize = LANDMARK_COUNT * LANDMARK_STRIDE;

/// Split flat landmark data into per-hand observations.
///
/// A hand whose data is cut short keeps only the landmarks actually present,
/// so the engine rejects it instead of classifying zeros. Hands without an
/// entry in `track_ids` are tracked by their slot index.
pub fn parse_hands(flat_data: &[f32], num_hands: usize, track_ids: &[u32]) -> Vec<HandObservation> {
    // at most one hand past the end of the data, so a bogus count still errors
    let num_hands = num_hands.min(flat_data.len() / HAND_STRIDE + 1);

    (0..num_hands)
        .map(|h| {
            let start = (h * HAND_STRIDE).min(flat_data.len());
            let end = ((h + 1) * HAND_STRIDE).min(flat_data.len());
            let landmarks = flat_data[start..end]
                .chunks_exact(LANDMARK_STRIDE)
                .map(|v| Landmark::new(v[0], v[1]))
                .collect();

            HandObservation {
                track_id: track_ids.get(h).copied().unwrap_or(h as TrackId),
                landmarks,
            }
        })
        .collect()
}

// ============================================================================
// WASM API
// ============================================================================

/// Classify one video frame. Results are read back with `get_gesture`,
/// `get_hand_state`, `get_annotations` or `get_classification_json`.
#[wasm_bindgen]
pub fn apply_hand_landmarks(
    flat_data: &[f32],
    num_hands: usize,
    track_ids: &[u32],
    width: u32,
    height: u32,
) -> Result<(), JsValue> {
    let frame = LandmarkFrame {
        size: FrameSize::new(width, height),
        hands: parse_hands(flat_data, num_hands, track_ids),
    };

    classify_frame(&frame).map_err(|err| {
        log::warn!("Rejected hand landmarks: {}", err);
        JsValue::from(err)
    })?;
    Ok(())
}
