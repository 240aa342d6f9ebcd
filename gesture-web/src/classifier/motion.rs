//! Wave and swipe detection over a window of open-hand frames

use crate::hand::{FrameSize, HandLandmark, HandLandmarks};

use super::buffer::MotionBuffer;
use super::config::GestureConfig;
use super::gesture::Gesture;

/// Motion history for one tracked hand
#[derive(Clone, Debug)]
pub struct MotionTracker {
    /// Wrist x (px), for waving
    wrist: MotionBuffer,
    /// Index fingertip x (px), for swiping
    index: MotionBuffer,
}

impl MotionTracker {
    pub fn new(capacity: usize) -> Self {
        Self {
            wrist: MotionBuffer::new(capacity),
            index: MotionBuffer::new(capacity),
        }
    }

    /// Record an open-hand frame and decide on a motion gesture.
    ///
    /// Only call this while all five fingers are extended. Returns `None`
    /// until a buffer fills; the caller then keeps the static label. A swipe
    /// overrides the wave/open-hand result of the same frame.
    pub fn update(
        &mut self,
        hand: &HandLandmarks,
        frame: FrameSize,
        config: &GestureConfig,
    ) -> Option<Gesture> {
        self.wrist.push(hand.pixel_x(HandLandmark::Wrist, frame));
        if config.swipe_detection {
            self.index.push(hand.pixel_x(HandLandmark::IndexTip, frame));
        }

        let mut gesture = None;

        if self.wrist.is_full() {
            if let Some(range) = self.wrist.range() {
                log::trace!("wrist range {} px", range);
                gesture = Some(if range > config.wave_range_px {
                    Gesture::Wave
                } else {
                    Gesture::OpenHand
                });
            }
        }

        if config.swipe_detection && self.index.is_full() {
            if let Some(delta) = self.index.delta() {
                log::trace!("index delta {} px", delta);
                if delta > config.swipe_delta_px {
                    gesture = Some(Gesture::SwipeRight);
                } else if delta < -config.swipe_delta_px {
                    gesture = Some(Gesture::SwipeLeft);
                }
            }
        }

        gesture
    }

    pub fn wrist_buffer(&self) -> &MotionBuffer {
        &self.wrist
    }

    pub fn index_buffer(&self) -> &MotionBuffer {
        &self.index
    }

    pub fn clear(&mut self) {
        self.wrist.clear();
        self.index.clear();
    }
}

impl Default for MotionTracker {
    fn default() -> Self {
        Self {
            wrist: MotionBuffer::default(),
            index: MotionBuffer::default(),
        }
    }
}
