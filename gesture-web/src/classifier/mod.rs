//! Classifier module - static and motion gesture classification
//!
//! Re-exports only. All logic in submodules.

mod annotation;
mod buffer;
mod config;
mod engine;
mod gesture;
mod motion;
mod static_gesture;

pub use annotation::{annotate_fingers, AnnotationDescriptor};
pub use buffer::MotionBuffer;
pub use config::{
    GestureConfig, DEFAULT_BUFFER_CAPACITY, DEFAULT_OK_DISTANCE_PX, DEFAULT_SWIPE_DELTA_PX,
    DEFAULT_WAVE_RANGE_PX,
};
pub use engine::{FrameClassification, GestureEngine, HandClassification, TrackedHand};
pub use gesture::Gesture;
pub use motion::MotionTracker;
pub use static_gesture::classify_static;
