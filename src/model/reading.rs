//! A validated six-line reading.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::Line;
use crate::{Error, Result};

/// An ordered six-line reading, validated at construction.
///
/// Invariant: exactly 6 lines whose positions are the set {1,..,6}, each
/// occurring exactly once, stored sorted bottom→top. Anything else is
/// rejected with [`Error::MalformedReading`] naming the offending
/// positions — the reading is never padded or guessed at.
///
/// Deserialization goes through the same validation, so a
/// `SixLineReading` obtained from any source upholds the invariant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Line>", into = "Vec<Line>")]
pub struct SixLineReading {
    lines: [Line; 6],
}

impl SixLineReading {
    /// Validate and sort a set of caller-supplied lines.
    ///
    /// Callers may supply the lines in any order; they are sorted by
    /// position here.
    pub fn from_lines(lines: impl IntoIterator<Item = Line>) -> Result<Self> {
        let lines: Vec<Line> = lines.into_iter().collect();
        Self::try_from(lines)
    }

    /// The six lines, sorted bottom→top (position 1 first).
    pub fn lines(&self) -> &[Line; 6] {
        &self.lines
    }

    /// Per-line bit values bottom→top (Yang = 1, Yin = 0).
    pub fn bits(&self) -> [u8; 6] {
        self.lines.map(|l| l.polarity.bit())
    }

    /// Per-line bit values after flipping every moving line.
    pub fn derived_bits(&self) -> [u8; 6] {
        self.lines.map(|l| l.derived_bit())
    }

    /// Positions of all moving lines, ascending. Empty if none.
    pub fn moving_positions(&self) -> SmallVec<[u8; 6]> {
        self.lines
            .iter()
            .filter(|l| l.moving)
            .map(|l| l.position)
            .collect()
    }
}

impl TryFrom<Vec<Line>> for SixLineReading {
    type Error = Error;

    fn try_from(lines: Vec<Line>) -> Result<Self> {
        // One pass over positions 1..=6: slot each line by position, count
        // occurrences, flag strays. Slotting doubles as the sort.
        let mut slots = [Line::new(1, crate::model::Polarity::Yin); 6];
        let mut seen = [0usize; 6];
        let mut out_of_range: Vec<u8> = Vec::new();
        for line in lines {
            match line.position {
                1..=6 => {
                    let i = (line.position - 1) as usize;
                    seen[i] += 1;
                    slots[i] = line;
                }
                p => out_of_range.push(p),
            }
        }

        let missing: Vec<u8> = (1..=6u8).filter(|p| seen[(p - 1) as usize] == 0).collect();
        let duplicated: Vec<u8> = (1..=6u8).filter(|p| seen[(p - 1) as usize] > 1).collect();

        if !missing.is_empty() || !duplicated.is_empty() || !out_of_range.is_empty() {
            out_of_range.sort_unstable();
            out_of_range.dedup();
            return Err(Error::MalformedReading {
                missing,
                duplicated,
                out_of_range,
            });
        }

        Ok(Self { lines: slots })
    }
}

impl From<SixLineReading> for Vec<Line> {
    fn from(reading: SixLineReading) -> Self {
        reading.lines.to_vec()
    }
}
