//! Single-frame gesture rules
//!
//! Branches on the number of extended fingers, then looks at fine landmark
//! geometry in pixel space. Every branch ends in a label.

use crate::hand::{Finger, FingerExtension, FrameSize, HandLandmark, HandLandmarks};

use super::config::GestureConfig;
use super::gesture::Gesture;

/// Classify a hand from one frame of landmarks.
///
/// Five extended fingers yield `OpenHand`; the motion tracker may replace
/// it with `Wave` or a swipe.
pub fn classify_static(
    fingers: &FingerExtension,
    hand: &HandLandmarks,
    frame: FrameSize,
    config: &GestureConfig,
) -> Gesture {
    match fingers.count() {
        0 => Gesture::Fist,
        1 => classify_one_finger(hand, frame),
        2 => classify_two_fingers(fingers, hand, frame, config),
        5 => Gesture::OpenHand,
        n => Gesture::NFingersExtended(n),
    }
}

/// Thumbs up / down from the vertical order of thumb tip, IP and MCP
fn classify_one_finger(hand: &HandLandmarks, frame: FrameSize) -> Gesture {
    let tip = hand.pixel_y(HandLandmark::ThumbTip, frame);
    let ip = hand.pixel_y(HandLandmark::ThumbIp, frame);
    let mcp = hand.pixel_y(HandLandmark::ThumbMcp, frame);

    if tip < ip && ip < mcp {
        Gesture::Like
    } else if tip > ip && ip > mcp {
        Gesture::Dislike
    } else {
        Gesture::Pointing
    }
}

/// OK is checked before Peace; first match wins
fn classify_two_fingers(
    fingers: &FingerExtension,
    hand: &HandLandmarks,
    frame: FrameSize,
    config: &GestureConfig,
) -> Gesture {
    if is_ok_sign(fingers, hand, frame, config) {
        return Gesture::Ok;
    }

    let index_tip = hand.pixel(HandLandmark::IndexTip, frame);
    let middle_tip = hand.pixel(HandLandmark::MiddleTip, frame);
    if index_tip.y < middle_tip.y && (index_tip.x - middle_tip.x).abs() > config.peace_spread_px {
        Gesture::Peace
    } else {
        Gesture::TwoFingers
    }
}

/// Thumb and index tips touching, the other three fingers folded and clear of the thumb
fn is_ok_sign(
    fingers: &FingerExtension,
    hand: &HandLandmarks,
    frame: FrameSize,
    config: &GestureConfig,
) -> bool {
    let thumb_tip = hand.pixel(HandLandmark::ThumbTip, frame);
    let index_tip = hand.pixel(HandLandmark::IndexTip, frame);

    let distance = (thumb_tip.coords - index_tip.coords).cast::<f32>().norm();
    if distance >= config.ok_distance_px {
        return false;
    }

    [Finger::Middle, Finger::Ring, Finger::Pinky].iter().all(|&finger| {
        let tip_x = hand.pixel_x(finger.spec().tip, frame);
        !fingers.is_extended(finger) && (tip_x - thumb_tip.x).abs() > config.ok_clearance_px
    })
}
