//! # Six-Line Resolver
//!
//! Turns a validated [`SixLineReading`] into its hexagram identities.
//! Pure functions — no I/O, no state, no randomness.
//!
//! Lines 1–3 (bottom) form the lower trigram, lines 4–6 the upper one.
//! The derived hexagram comes from re-running the same derivation over the
//! line sequence with every moving line flipped; with no moving lines the
//! derived hexagram equals the original.

use serde::Serialize;
use smallvec::SmallVec;

use crate::model::{Hexagram, Line, SixLineReading};
use crate::{Result, codec};

/// The full outcome of resolving one reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    /// Hexagram cast by the reading as supplied.
    pub original: Hexagram,
    /// Hexagram after flipping every moving line. Equal to `original`
    /// when nothing moves.
    pub derived: Hexagram,
    /// Positions of all moving lines, ascending. Empty if none.
    pub moving_positions: SmallVec<[u8; 6]>,
}

/// Resolve a validated reading into its original and derived hexagrams.
pub fn resolve(reading: &SixLineReading) -> Resolution {
    let original = hexagram_of(reading.bits());
    let derived = hexagram_of(reading.derived_bits());
    let moving_positions = reading.moving_positions();

    tracing::trace!(
        original = original.king_wen,
        derived = derived.king_wen,
        moving = moving_positions.len(),
        "resolved reading"
    );

    Resolution {
        original,
        derived,
        moving_positions,
    }
}

/// Validate raw lines and resolve them in one call.
///
/// Equivalent to [`SixLineReading::from_lines`] followed by [`resolve`];
/// fails with [`crate::Error::MalformedReading`] exactly when the former
/// does.
pub fn resolve_lines(lines: impl IntoIterator<Item = Line>) -> Result<Resolution> {
    let reading = SixLineReading::from_lines(lines)?;
    Ok(resolve(&reading))
}

/// Assemble the hexagram for a six-bit line sequence (bottom→top).
fn hexagram_of(bits: [u8; 6]) -> Hexagram {
    let lower = codec::encode_code(bits[0] | (bits[1] << 1) | (bits[2] << 2));
    let upper = codec::encode_code(bits[3] | (bits[4] << 1) | (bits[5] << 2));
    Hexagram::from_trigrams(upper, lower)
}
