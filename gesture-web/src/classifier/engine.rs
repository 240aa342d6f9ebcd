//! Gesture classification engine
//!
//! Runs finger, hand-state, static and motion classification for each hand
//! in a frame. Owns one `MotionTracker` per hand track.
//!
//! Frames must arrive in temporal order; there is no timestamp check, so
//! out-of-order delivery corrupts wave and swipe detection.

use std::collections::HashMap;

use serde::Serialize;

use crate::error::{GestureError, Result};
use crate::hand::{
    classify_fingers, FrameSize, HandLandmarks, HandState, Landmark, LandmarkFrame, TrackId,
};

use super::annotation::{annotate_fingers, AnnotationDescriptor};
use super::config::GestureConfig;
use super::gesture::Gesture;
use super::motion::MotionTracker;
use super::static_gesture::classify_static;

/// Result for one hand. The default value is the no-hand sentinel.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct HandClassification {
    pub hand_state: HandState,
    pub gesture: Gesture,
    pub annotations: Vec<AnnotationDescriptor>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TrackedHand {
    pub track_id: TrackId,
    #[serde(flatten)]
    pub classification: HandClassification,
}

/// Results for every classified hand in a frame, in input order
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct FrameClassification {
    pub hands: Vec<TrackedHand>,
}

impl FrameClassification {
    /// The hand to display: the last one classified, or
    /// `(Unknown, Unknown, [])` when the frame had no hands
    pub fn primary(&self) -> HandClassification {
        self.hands
            .last()
            .map(|h| h.classification.clone())
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.hands.is_empty()
    }
}

/// Motion history of one track plus when it was last fed
struct TrackSlot {
    tracker: MotionTracker,
    last_seen: u64,
}

/// Histories kept per allowed hand before the stalest track is evicted
const TRACKS_PER_HAND: usize = 2;

/// Classifies hands frame by frame.
///
/// Motion history is keyed by track id and kept while a hand is out of
/// frame. At most `max_hands * 2` histories are held; a new id beyond that
/// evicts the least recently seen one, so estimators should reuse ids for
/// reacquired hands.
pub struct GestureEngine {
    config: GestureConfig,
    trackers: HashMap<TrackId, TrackSlot>,
    /// Open-hand updates so far, used to order tracks by recency
    tick: u64,
}

impl GestureEngine {
    pub fn new(config: GestureConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            trackers: HashMap::new(),
            tick: 0,
        })
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Swap in new parameters. Motion history is dropped since buffer
    /// capacity may change.
    pub fn reconfigure(&mut self, config: GestureConfig) -> Result<()> {
        config.validate()?;
        self.config = config;
        self.trackers.clear();
        Ok(())
    }

    /// Forget all motion history
    pub fn reset(&mut self) {
        self.trackers.clear();
    }

    /// Track ids that currently hold motion history
    pub fn tracked_hands(&self) -> impl Iterator<Item = TrackId> + '_ {
        self.trackers.keys().copied()
    }

    pub fn motion_tracker(&self, track_id: TrackId) -> Option<&MotionTracker> {
        self.trackers.get(&track_id).map(|slot| &slot.tracker)
    }

    fn max_tracks(&self) -> usize {
        self.config.max_hands * TRACKS_PER_HAND
    }

    /// Tracker for `track_id`, evicting the stalest track if the map is full
    fn tracker_for(&mut self, track_id: TrackId) -> &mut MotionTracker {
        self.tick += 1;

        if !self.trackers.contains_key(&track_id) && self.trackers.len() >= self.max_tracks() {
            let stalest = self
                .trackers
                .iter()
                .min_by_key(|(_, slot)| slot.last_seen)
                .map(|(id, _)| *id);
            if let Some(id) = stalest {
                log::debug!("evicting motion history of hand {}", id);
                self.trackers.remove(&id);
            }
        }

        let capacity = self.config.buffer_capacity;
        let slot = self.trackers.entry(track_id).or_insert_with(|| TrackSlot {
            tracker: MotionTracker::new(capacity),
            last_seen: 0,
        });
        slot.last_seen = self.tick;
        &mut slot.tracker
    }

    /// Classify one hand of the current frame.
    ///
    /// Fails with `InvalidLandmarkSet` before any state is touched when the
    /// landmarks are malformed.
    pub fn classify_hand(
        &mut self,
        track_id: TrackId,
        landmarks: &[Landmark],
        frame: FrameSize,
    ) -> Result<HandClassification> {
        frame.validate()?;
        let hand = HandLandmarks::from_slice(landmarks)?;
        Ok(self.classify_validated(track_id, &hand, frame))
    }

    /// Classify every hand in a frame, up to `max_hands`.
    ///
    /// All hands are validated first, so a malformed hand or a track id
    /// used twice yields an error and leaves every motion buffer untouched.
    pub fn process_frame(&mut self, frame: &LandmarkFrame) -> Result<FrameClassification> {
        frame.size.validate()?;

        if frame.hands.len() > self.config.max_hands {
            log::debug!(
                "{} hands in frame, classifying the first {}",
                frame.hands.len(),
                self.config.max_hands
            );
        }

        let observed = &frame.hands[..frame.hands.len().min(self.config.max_hands)];
        let hands = observed
            .iter()
            .map(|obs| -> Result<_> {
                Ok((obs.track_id, HandLandmarks::from_slice(&obs.landmarks)?))
            })
            .collect::<Result<Vec<_>>>()?;

        for (i, (track_id, _)) in hands.iter().enumerate() {
            if hands[..i].iter().any(|(seen, _)| seen == track_id) {
                return Err(GestureError::DuplicateTrackId(*track_id));
            }
        }

        if self.config.reset_motion_on_loss {
            self.trackers
                .retain(|id, _| hands.iter().any(|(track_id, _)| track_id == id));
        }

        let hands = hands
            .iter()
            .map(|(track_id, hand)| TrackedHand {
                track_id: *track_id,
                classification: self.classify_validated(*track_id, hand, frame.size),
            })
            .collect();

        Ok(FrameClassification { hands })
    }

    fn classify_validated(
        &mut self,
        track_id: TrackId,
        hand: &HandLandmarks,
        frame: FrameSize,
    ) -> HandClassification {
        let fingers = classify_fingers(hand, frame);
        let hand_state = HandState::from_extended_count(fingers.count());
        let mut gesture = classify_static(&fingers, hand, frame, &self.config);

        if hand_state == HandState::Open {
            let config = self.config.clone();
            if let Some(motion) = self.tracker_for(track_id).update(hand, frame, &config) {
                gesture = motion;
            }
        }

        log::debug!(
            "hand {}: {} fingers, state={}, gesture={}",
            track_id,
            fingers.count(),
            hand_state,
            gesture
        );

        HandClassification {
            hand_state,
            gesture,
            annotations: annotate_fingers(&fingers, hand, frame),
        }
    }
}

impl Default for GestureEngine {
    fn default() -> Self {
        Self {
            config: GestureConfig::default(),
            trackers: HashMap::new(),
            tick: 0,
        }
    }
}
