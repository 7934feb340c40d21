//! Horizontal direction of a detection

use std::fmt;

use serde::{Deserialize, Serialize};

/// Side of the user the object is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Spoken phrase
    pub fn phrase(&self) -> &'static str {
        match self {
            Direction::Left => "on your left",
            Direction::Right => "on your right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.phrase())
    }
}

/// Compare the box's horizontal center with the frame's.
///
/// Strictly left of center is `Left`; a centered box counts as `Right`.
pub fn direction_of(box_center_x: f64, frame_center_x: f64) -> Direction {
    if box_center_x < frame_center_x {
        Direction::Left
    } else {
        Direction::Right
    }
}
