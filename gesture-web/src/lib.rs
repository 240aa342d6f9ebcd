//! Gesture Web - hand state and gesture classification for the browser
//!
//! MediaPipe Hands runs in JavaScript and passes landmarks in; this crate
//! turns them into a hand state (closed / partially open / open) and a
//! gesture label, with fingertip annotations for the overlay.
//!
//! - `hand`: landmark input, finger extension, hand state
//! - `classifier`: static gestures, motion gestures, the engine
//! - `bridge`: wasm_bindgen entry points

mod bridge;
pub mod classifier;
pub mod error;
pub mod hand;

use wasm_bindgen::prelude::*;

pub use bridge::{
    apply_hand_landmarks, classify_frame, get_annotations, get_classification_json, get_gesture,
    get_hand_state, init_classifier, last_classification, parse_hands, reset_classifier,
    set_gesture_params, set_log_level, HAND_STRIDE, LANDMARK_STRIDE,
};
pub use classifier::{
    FrameClassification, Gesture, GestureConfig, GestureEngine, HandClassification,
};
pub use error::GestureError;
pub use hand::{FrameSize, HandLandmark, HandState, Landmark, LandmarkFrame, TrackId};

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
    bridge::init_logging(log::LevelFilter::Info);
    log::info!("✅ Gesture classifier loaded");
}
