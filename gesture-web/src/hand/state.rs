//! Hand state - coarse open/closed classification

use std::fmt;

use serde::Serialize;

/// How open the hand is, from the number of extended fingers
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub enum HandState {
    /// No hand in the frame
    #[default]
    Unknown,
    Closed,
    PartiallyOpen,
    Open,
}

impl HandState {
    pub fn from_extended_count(count: usize) -> Self {
        match count {
            0 => HandState::Closed,
            5 => HandState::Open,
            _ => HandState::PartiallyOpen,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HandState::Unknown => "Unknown",
            HandState::Closed => "Closed (Fist)",
            HandState::PartiallyOpen => "Partially Open",
            HandState::Open => "Open",
        }
    }
}

impl fmt::Display for HandState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
