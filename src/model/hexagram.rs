//! A six-line figure: two stacked trigrams with their King Wen identity.

use serde::Serialize;

use super::Trigram;

/// A hexagram — an upper trigram stacked over a lower one.
///
/// `king_wen` is the traditional sequence number (1..=64) and `name` the
/// canonical Chinese name, both taken from the fixed King Wen grid in
/// [`crate::kingwen`]. `binary` packs the full line sequence bottom→top
/// into six bits (bit *i* = line *i+1*, Yang = 1), so
/// `binary == lower.code | (upper.code << 3)`. Serialize-only, like
/// [`Trigram`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Hexagram {
    pub upper: Trigram,
    pub lower: Trigram,
    pub king_wen: u8,
    pub name: &'static str,
    pub binary: u8,
}

impl Hexagram {
    /// Assemble a hexagram from its two trigrams via the King Wen grid.
    pub fn from_trigrams(upper: Trigram, lower: Trigram) -> Self {
        let (king_wen, name) = crate::kingwen::lookup(upper.code, lower.code);
        Self {
            upper,
            lower,
            king_wen,
            name,
            binary: lower.code | (upper.code << 3),
        }
    }
}

impl std::fmt::Display for Hexagram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{} {}", self.king_wen, self.name)
    }
}
