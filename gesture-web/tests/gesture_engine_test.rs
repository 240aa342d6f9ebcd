//! End-to-end classification tests on synthetic hands

use gesture_web::classifier::MotionBuffer;
use gesture_web::{
    FrameSize, Gesture, GestureConfig, GestureEngine, GestureError, HandLandmark, HandState,
    Landmark, LandmarkFrame,
};

const FRAME: FrameSize = FrameSize {
    width: 640,
    height: 480,
};

/// Builds a hand in pixel coordinates. Starts as an upright fist.
#[derive(Clone)]
struct SyntheticHand {
    landmarks: Vec<Landmark>,
}

impl SyntheticHand {
    fn fist() -> Self {
        let mut hand = Self {
            landmarks: vec![Landmark::default(); 21],
        };
        hand.at(HandLandmark::Wrist, 320, 420)
            .at(HandLandmark::ThumbCmc, 260, 380)
            .at(HandLandmark::ThumbMcp, 250, 385)
            .at(HandLandmark::ThumbIp, 245, 388)
            .at(HandLandmark::ThumbTip, 240, 390);
        use HandLandmark as L;
        hand.folded_finger([L::IndexMcp, L::IndexPip, L::IndexDip, L::IndexTip], 290)
            .folded_finger([L::MiddleMcp, L::MiddlePip, L::MiddleDip, L::MiddleTip], 320)
            .folded_finger([L::RingMcp, L::RingPip, L::RingDip, L::RingTip], 350)
            .folded_finger([L::PinkyMcp, L::PinkyPip, L::PinkyDip, L::PinkyTip], 380);
        hand
    }

    /// MCP, PIP, DIP, tip of one finger curled below its knuckle at column `x`
    fn folded_finger(&mut self, joints: [HandLandmark; 4], x: i32) -> &mut Self {
        let [mcp, pip, dip, tip] = joints;
        self.at(mcp, x, 300)
            .at(pip, x, 280)
            .at(dip, x, 310)
            .at(tip, x, 340)
    }

    /// All five fingers up
    fn open() -> Self {
        let mut hand = Self::fist();
        hand.at(HandLandmark::ThumbMcp, 250, 340)
            .at(HandLandmark::ThumbIp, 245, 300)
            .at(HandLandmark::ThumbTip, 240, 260)
            .at(HandLandmark::IndexTip, 290, 200)
            .at(HandLandmark::MiddleTip, 320, 190)
            .at(HandLandmark::RingTip, 350, 200)
            .at(HandLandmark::PinkyTip, 380, 220);
        hand
    }

    /// Thumbs up, other fingers folded
    fn thumbs_up() -> Self {
        let mut hand = Self::fist();
        hand.at(HandLandmark::ThumbMcp, 250, 340)
            .at(HandLandmark::ThumbIp, 245, 300)
            .at(HandLandmark::ThumbTip, 240, 260);
        hand
    }

    fn peace() -> Self {
        let mut hand = Self::fist();
        hand.at(HandLandmark::IndexTip, 290, 200)
            .at(HandLandmark::MiddleTip, 340, 210);
        hand
    }

    /// +0.5 keeps truncation on the intended pixel
    fn at(&mut self, landmark: HandLandmark, x: i32, y: i32) -> &mut Self {
        self.landmarks[landmark.index()] = Landmark::new(
            (x as f32 + 0.5) / FRAME.width as f32,
            (y as f32 + 0.5) / FRAME.height as f32,
        );
        self
    }

    fn with(&self, landmark: HandLandmark, x: i32, y: i32) -> Self {
        let mut hand = self.clone();
        hand.at(landmark, x, y);
        hand
    }

    fn frame(&self, track_id: u32) -> LandmarkFrame {
        LandmarkFrame::new(FRAME).with_hand(track_id, self.landmarks.clone())
    }
}

#[test]
fn test_hand_state_is_pure_function_of_count() {
    assert_eq!(HandState::from_extended_count(0), HandState::Closed);
    assert_eq!(HandState::from_extended_count(1), HandState::PartiallyOpen);
    assert_eq!(HandState::from_extended_count(2), HandState::PartiallyOpen);
    assert_eq!(HandState::from_extended_count(3), HandState::PartiallyOpen);
    assert_eq!(HandState::from_extended_count(4), HandState::PartiallyOpen);
    assert_eq!(HandState::from_extended_count(5), HandState::Open);
}

#[test]
fn test_thumbs_up_is_like() {
    let mut engine = GestureEngine::default();
    let result = engine
        .process_frame(&SyntheticHand::thumbs_up().frame(0))
        .unwrap()
        .primary();

    assert_eq!(result.hand_state, HandState::PartiallyOpen);
    assert_eq!(result.gesture, Gesture::Like);
    assert_eq!(result.annotations.len(), 1);
    assert_eq!(result.annotations[0].label, "Thumb");
    assert_eq!((result.annotations[0].x, result.annotations[0].y), (240, 260));
}

#[test]
fn test_wave_on_tenth_frame() {
    let mut engine = GestureEngine::default();
    let open = SyntheticHand::open();

    for i in 0..10 {
        let wrist_x = if i % 2 == 0 { 100 } else { 160 };
        let hand = open.with(HandLandmark::Wrist, wrist_x, 420);
        let result = engine.process_frame(&hand.frame(0)).unwrap().primary();

        assert_eq!(result.hand_state, HandState::Open);
        if i < 9 {
            assert_eq!(result.gesture, Gesture::OpenHand, "frame {}", i + 1);
        } else {
            assert_eq!(result.gesture, Gesture::Wave);
        }
    }
}

#[test]
fn test_swipe_right_overrides_wave() {
    let mut engine = GestureEngine::default();
    let open = SyntheticHand::open();

    let mut last = Gesture::Unknown;
    for i in 0..10 {
        let wrist_x = if i % 2 == 0 { 100 } else { 160 };
        let hand = open
            .with(HandLandmark::Wrist, wrist_x, 420)
            .with(HandLandmark::IndexTip, 200 + 8 * i, 200);
        last = engine.process_frame(&hand.frame(0)).unwrap().primary().gesture;
    }
    assert_eq!(last, Gesture::SwipeRight);
}

#[test]
fn test_swipe_right_with_steady_wrist() {
    let mut engine = GestureEngine::default();
    let open = SyntheticHand::open();

    let mut last = Gesture::Unknown;
    for i in 0..10 {
        let hand = open.with(HandLandmark::IndexTip, 200 + 8 * i, 200);
        last = engine.process_frame(&hand.frame(0)).unwrap().primary().gesture;
    }
    assert_eq!(last, Gesture::SwipeRight);
}

#[test]
fn test_swipe_disabled_falls_back_to_wave() {
    let mut engine = GestureEngine::new(GestureConfig {
        swipe_detection: false,
        ..GestureConfig::default()
    })
    .unwrap();
    let open = SyntheticHand::open();

    let mut last = Gesture::Unknown;
    for i in 0..10 {
        let wrist_x = if i % 2 == 0 { 100 } else { 160 };
        let hand = open
            .with(HandLandmark::Wrist, wrist_x, 420)
            .with(HandLandmark::IndexTip, 200 + 8 * i, 200);
        last = engine.process_frame(&hand.frame(0)).unwrap().primary().gesture;
    }
    assert_eq!(last, Gesture::Wave);
}

#[test]
fn test_buffer_keeps_last_ten() {
    let mut buffer = MotionBuffer::new(10);
    for sample in 1..=15 {
        buffer.push(sample);
    }
    assert_eq!(buffer.len(), 10);
    assert_eq!(buffer.iter().collect::<Vec<_>>(), (6..=15).collect::<Vec<_>>());
}

#[test]
fn test_static_classification_is_idempotent() {
    let mut engine = GestureEngine::default();
    let frame = SyntheticHand::peace().frame(0);

    let first = engine.process_frame(&frame).unwrap().primary();
    let second = engine.process_frame(&frame).unwrap().primary();
    assert_eq!(first.gesture, Gesture::Peace);
    assert_eq!(first, second);
}

#[test]
fn test_nineteen_landmarks_rejected() {
    let mut engine = GestureEngine::default();
    let mut landmarks = SyntheticHand::open().landmarks;
    landmarks.truncate(19);

    let err = engine
        .process_frame(&LandmarkFrame::new(FRAME).with_hand(0, landmarks.clone()))
        .unwrap_err();
    assert!(matches!(err, GestureError::InvalidLandmarkSet { .. }));

    let err = engine.classify_hand(0, &landmarks, FRAME).unwrap_err();
    assert!(matches!(err, GestureError::InvalidLandmarkSet { .. }));
    assert_eq!(engine.tracked_hands().count(), 0);
}

#[test]
fn test_out_of_frame_coordinate_rejected() {
    let mut engine = GestureEngine::default();
    let mut landmarks = SyntheticHand::open().landmarks;
    landmarks[HandLandmark::PinkyTip.index()].x = -0.01;

    let err = engine.classify_hand(0, &landmarks, FRAME).unwrap_err();
    assert!(matches!(err, GestureError::InvalidLandmarkSet { .. }));
}

#[test]
fn test_partially_open_frames_do_not_feed_motion() {
    let mut engine = GestureEngine::default();
    let four = SyntheticHand::open().with(HandLandmark::PinkyTip, 380, 340);

    for _ in 0..12 {
        let result = engine.process_frame(&four.frame(0)).unwrap().primary();
        assert_eq!(result.gesture, Gesture::NFingersExtended(4));
    }
    assert!(engine.motion_tracker(0).is_none());
}

#[test]
fn test_stale_history_survives_hand_loss() {
    let mut engine = GestureEngine::default();
    let open = SyntheticHand::open();
    for i in 0..10 {
        let wrist_x = if i % 2 == 0 { 100 } else { 160 };
        engine
            .process_frame(&open.with(HandLandmark::Wrist, wrist_x, 420).frame(0))
            .unwrap();
    }

    // hand leaves, then returns perfectly still
    for _ in 0..5 {
        let result = engine.process_frame(&LandmarkFrame::new(FRAME)).unwrap();
        assert_eq!(result.primary().gesture, Gesture::Unknown);
    }
    let result = engine
        .process_frame(&open.with(HandLandmark::Wrist, 130, 420).frame(0))
        .unwrap();
    assert_eq!(result.primary().gesture, Gesture::Wave);
}

#[test]
fn test_reset_on_loss_starts_fresh() {
    let mut engine = GestureEngine::new(GestureConfig {
        reset_motion_on_loss: true,
        ..GestureConfig::default()
    })
    .unwrap();
    let open = SyntheticHand::open();
    for i in 0..10 {
        let wrist_x = if i % 2 == 0 { 100 } else { 160 };
        engine
            .process_frame(&open.with(HandLandmark::Wrist, wrist_x, 420).frame(0))
            .unwrap();
    }

    engine.process_frame(&LandmarkFrame::new(FRAME)).unwrap();
    let result = engine
        .process_frame(&open.with(HandLandmark::Wrist, 130, 420).frame(0))
        .unwrap();
    assert_eq!(result.primary().gesture, Gesture::OpenHand);
    assert_eq!(engine.motion_tracker(0).unwrap().wrist_buffer().len(), 1);
}
