//! Classifier integration - owns the gesture engine for the JS side
//!
//! One engine per WASM instance. JS pushes frames through
//! `apply_hand_landmarks` and polls the getters below when drawing.

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::classifier::{FrameClassification, GestureConfig, GestureEngine};
use crate::error::GestureError;
use crate::hand::LandmarkFrame;

#[derive(Default)]
struct ClassifierState {
    engine: GestureEngine,
    /// Result of the most recent frame
    last: FrameClassification,
}

// Thread-local storage (WASM is single-threaded)
thread_local! {
    static CLASSIFIER_STATE: RefCell<ClassifierState> = RefCell::new(ClassifierState::default());
}

/// Classify a frame and keep the result for the getters.
///
/// On error the stored result is cleared, so getters report no hand rather
/// than a stale one.
pub fn classify_frame(frame: &LandmarkFrame) -> Result<FrameClassification, GestureError> {
    CLASSIFIER_STATE.with(|state_cell| {
        let mut state = state_cell.borrow_mut();
        match state.engine.process_frame(frame) {
            Ok(result) => {
                state.last = result.clone();
                Ok(result)
            }
            Err(err) => {
                state.last = FrameClassification::default();
                Err(err)
            }
        }
    })
}

/// Result of the most recent frame
pub fn last_classification() -> FrameClassification {
    CLASSIFIER_STATE.with(|state_cell| state_cell.borrow().last.clone())
}

fn reconfigure(config: GestureConfig) -> Result<(), GestureError> {
    CLASSIFIER_STATE.with(|state_cell| {
        let mut state = state_cell.borrow_mut();
        state.engine.reconfigure(config)?;
        state.last = FrameClassification::default();
        Ok(())
    })
}

// ============================================================================
// WASM API
// ============================================================================

/// Replace the engine configuration from a JSON object.
/// Missing fields (or an empty string) take the defaults.
#[wasm_bindgen]
pub fn init_classifier(config_json: &str) -> Result<(), JsValue> {
    let config = if config_json.trim().is_empty() {
        GestureConfig::default()
    } else {
        GestureConfig::from_json(config_json)?
    };
    reconfigure(config)?;
    log::info!("Gesture classifier ready");
    Ok(())
}

/// Adjust the main thresholds without touching the other settings
#[wasm_bindgen]
pub fn set_gesture_params(
    wave_range_px: i32,
    swipe_delta_px: i32,
    ok_distance_px: f32,
    swipe_detection: bool,
) -> Result<(), JsValue> {
    let mut config =
        CLASSIFIER_STATE.with(|state_cell| state_cell.borrow().engine.config().clone());
    config.wave_range_px = wave_range_px;
    config.swipe_delta_px = swipe_delta_px;
    config.ok_distance_px = ok_distance_px;
    config.swipe_detection = swipe_detection;
    reconfigure(config)?;
    log::debug!(
        "Gesture params: wave={}px swipe={}px ok={}px swipe_detection={}",
        wave_range_px,
        swipe_delta_px,
        ok_distance_px,
        swipe_detection
    );
    Ok(())
}

/// Drop all motion history
#[wasm_bindgen]
pub fn reset_classifier() {
    CLASSIFIER_STATE.with(|state_cell| {
        let mut state = state_cell.borrow_mut();
        state.engine.reset();
        state.last = FrameClassification::default();
    });
}

/// Hand state label of the primary hand ("Unknown" without a hand)
#[wasm_bindgen]
pub fn get_hand_state() -> String {
    last_classification().primary().hand_state.to_string()
}

/// Gesture label of the primary hand ("Unknown" without a hand)
#[wasm_bindgen]
pub fn get_gesture() -> String {
    last_classification().primary().gesture.to_string()
}

/// Fingertip markers of the primary hand as `[{x, y, label, color: [r, g, b]}]`
#[wasm_bindgen]
pub fn get_annotations() -> Result<js_sys::Array, JsValue> {
    let annotations = js_sys::Array::new();
    for annotation in last_classification().primary().annotations {
        let obj = js_sys::Object::new();
        js_sys::Reflect::set(&obj, &"x".into(), &annotation.x.into())?;
        js_sys::Reflect::set(&obj, &"y".into(), &annotation.y.into())?;
        js_sys::Reflect::set(&obj, &"label".into(), &annotation.label.into())?;

        let color = js_sys::Array::of3(
            &annotation.color.r.into(),
            &annotation.color.g.into(),
            &annotation.color.b.into(),
        );
        js_sys::Reflect::set(&obj, &"color".into(), &color)?;
        annotations.push(&obj);
    }
    Ok(annotations)
}

/// Every hand of the last frame, serialized as JSON
#[wasm_bindgen]
pub fn get_classification_json() -> Result<String, JsValue> {
    serde_json::to_string(&last_classification()).map_err(|e| JsValue::from_str(&e.to_string()))
}
