//! A single cast line of a six-line reading.

use serde::{Deserialize, Serialize};

use super::Polarity;

/// One line of a reading.
///
/// `position` runs 1..=6 bottom→top: line 1 is the bottom-most,
/// earliest-cast line. A `moving` line flips its polarity when the derived
/// hexagram is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line {
    pub position: u8,
    pub polarity: Polarity,
    #[serde(default)]
    pub moving: bool,
}

impl Line {
    /// A static (non-moving) line.
    pub const fn new(position: u8, polarity: Polarity) -> Self {
        Self {
            position,
            polarity,
            moving: false,
        }
    }

    /// Mark the line as moving.
    pub const fn moving(mut self) -> Self {
        self.moving = true;
        self
    }

    /// Bit value of this line in the derived (post-flip) sequence.
    pub const fn derived_bit(&self) -> u8 {
        if self.moving {
            self.polarity.flipped().bit()
        } else {
            self.polarity.bit()
        }
    }
}
