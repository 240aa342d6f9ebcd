//! Bridge module - JS ↔ Rust communication
//!
//! All #[wasm_bindgen] entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

mod classifier_integration;
mod console;
mod hand_landmarks;

pub use classifier_integration::{
    // WASM entry points
    get_annotations,
    get_classification_json,
    get_gesture,
    get_hand_state,
    init_classifier,
    reset_classifier,
    set_gesture_params,
    // Internal API
    classify_frame,
    last_classification,
};

pub use console::{init_logging, set_log_level};

pub use hand_landmarks::{apply_hand_landmarks, parse_hands, HAND_STRIDE, LANDMARK_STRIDE};
