//! One of the eight trigrams.

use serde::Serialize;

use super::{Element, Polarity};

/// A three-line figure, one of the eight canonical trigrams.
///
/// `code` packs the three lines bottom→top as a 3-bit integer (bit *i* =
/// line *i+1*, Yang = 1). The code→(name, element, polarity) mapping is a
/// fixed bijection over all 8 combinations; [`crate::codec::encode_code`]
/// is the only constructor, so an ill-attributed `Trigram` cannot exist.
/// Serialize-only: trigrams are outputs, reconstructed from codes, never
/// parsed back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Trigram {
    pub code: u8,
    pub name: &'static str,
    pub element: Element,
    pub polarity: Polarity,
}

impl Trigram {
    /// The three line polarities, bottom→top.
    pub const fn bits(&self) -> [Polarity; 3] {
        [
            Polarity::from_bit(self.code & 1),
            Polarity::from_bit((self.code >> 1) & 1),
            Polarity::from_bit((self.code >> 2) & 1),
        ]
    }
}

impl std::fmt::Display for Trigram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
