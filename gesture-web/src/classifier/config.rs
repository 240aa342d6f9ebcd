//! Classifier tuning parameters
//!
//! All thresholds are in pixels of the frame the landmarks were estimated
//! on. They are not normalized by hand size, so they need retuning for very
//! different camera resolutions.

use serde::{Deserialize, Serialize};

use crate::error::{GestureError, Result};

/// Frames kept per motion buffer
pub const DEFAULT_BUFFER_CAPACITY: usize = 10;

/// Wrist x-range (px) over a full buffer that counts as waving
pub const DEFAULT_WAVE_RANGE_PX: i32 = 50;

/// Index-tip x-travel (px) over a full buffer that counts as a swipe
pub const DEFAULT_SWIPE_DELTA_PX: i32 = 70;

/// Thumb-tip to index-tip distance (px) below which the fingers touch
pub const DEFAULT_OK_DISTANCE_PX: f32 = 40.0;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    pub buffer_capacity: usize,
    pub wave_range_px: i32,
    pub swipe_delta_px: i32,
    pub ok_distance_px: f32,
    /// Minimum horizontal gap (px) between the thumb tip and each folded finger tip for OK
    pub ok_clearance_px: i32,
    /// Minimum horizontal gap (px) between index and middle tips for Peace
    pub peace_spread_px: i32,
    pub swipe_detection: bool,
    /// Hands beyond this count in a frame are ignored
    pub max_hands: usize,
    /// Drop a hand's motion history as soon as it leaves the frame.
    ///
    /// Off by default: history then survives loss and reacquisition, so
    /// stale samples can produce a wave or swipe right after the hand returns.
    pub reset_motion_on_loss: bool,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            buffer_capacity: DEFAULT_BUFFER_CAPACITY,
            wave_range_px: DEFAULT_WAVE_RANGE_PX,
            swipe_delta_px: DEFAULT_SWIPE_DELTA_PX,
            ok_distance_px: DEFAULT_OK_DISTANCE_PX,
            ok_clearance_px: 50,
            peace_spread_px: 40,
            swipe_detection: true,
            max_hands: 2,
            reset_motion_on_loss: false,
        }
    }
}

impl GestureConfig {
    /// Parse a JSON object; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| GestureError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.buffer_capacity < 2 {
            return Err(GestureError::InvalidConfig(format!(
                "buffer_capacity must be at least 2, got {}",
                self.buffer_capacity
            )));
        }
        if self.max_hands == 0 {
            return Err(GestureError::InvalidConfig("max_hands must be at least 1".into()));
        }
        if !self.ok_distance_px.is_finite() || self.ok_distance_px < 0.0 {
            return Err(GestureError::InvalidConfig(format!(
                "ok_distance_px must be finite and non-negative, got {}",
                self.ok_distance_px
            )));
        }
        // a zero swipe threshold turns every still hand into SwipeRight
        if self.swipe_delta_px <= 0 {
            return Err(GestureError::InvalidConfig(format!(
                "swipe_delta_px must be positive, got {}",
                self.swipe_delta_px
            )));
        }
        for (name, value) in [
            ("wave_range_px", self.wave_range_px),
            ("ok_clearance_px", self.ok_clearance_px),
            ("peace_spread_px", self.peace_spread_px),
        ] {
            if value < 0 {
                return Err(GestureError::InvalidConfig(format!(
                    "{} must be non-negative, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}
