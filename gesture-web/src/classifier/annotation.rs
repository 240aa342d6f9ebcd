//! Rendering-agnostic fingertip annotations
//!
//! The engine never draws. It hands these records to whoever renders the
//! overlay (a canvas in the browser, OpenCV natively).

use nalgebra::Point2;
use serde::Serialize;

use crate::hand::{FingerExtension, FrameSize, HandLandmarks, Rgb};

/// Marker for one extended fingertip
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AnnotationDescriptor {
    /// Fingertip position in pixels
    pub x: i32,
    pub y: i32,
    pub label: &'static str,
    pub color: Rgb,
}

impl AnnotationDescriptor {
    pub fn position(&self) -> Point2<i32> {
        Point2::new(self.x, self.y)
    }
}

/// One descriptor per extended finger, thumb first
pub fn annotate_fingers(
    fingers: &FingerExtension,
    hand: &HandLandmarks,
    frame: FrameSize,
) -> Vec<AnnotationDescriptor> {
    fingers
        .extended_fingers()
        .map(|spec| {
            let tip = hand.pixel(spec.tip, frame);
            AnnotationDescriptor {
                x: tip.x,
                y: tip.y,
                label: spec.name,
                color: spec.color,
            }
        })
        .collect()
}
