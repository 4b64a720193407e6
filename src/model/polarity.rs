//! Yin/yang polarity of a single line.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Polarity of one cast line. Yang is the unbroken line, Yin the broken one.
///
/// Encoded as a single bit everywhere the crate packs lines into trigram or
/// hexagram codes: Yang = 1, Yin = 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Yin,
    Yang,
}

impl Polarity {
    /// Bit encoding: Yang = 1, Yin = 0.
    pub const fn bit(self) -> u8 {
        match self {
            Polarity::Yang => 1,
            Polarity::Yin => 0,
        }
    }

    /// Inverse of [`bit`](Self::bit). Any nonzero value is Yang.
    pub const fn from_bit(bit: u8) -> Self {
        if bit != 0 { Polarity::Yang } else { Polarity::Yin }
    }

    /// The opposite pole. A moving line becomes `self.flipped()` in the
    /// derived hexagram.
    pub const fn flipped(self) -> Self {
        match self {
            Polarity::Yang => Polarity::Yin,
            Polarity::Yin => Polarity::Yang,
        }
    }

    pub const fn is_yang(self) -> bool {
        matches!(self, Polarity::Yang)
    }

    /// Parse a caller-supplied polarity marker.
    ///
    /// Accepts the Chinese markers used on the wire (`"阳"` / `"阴"`) and
    /// their ASCII names (`"yang"` / `"yin"`, any case). Everything else is
    /// rejected here, before any bit math sees it.
    pub fn from_marker(marker: &str) -> Result<Self> {
        match marker.trim() {
            "阳" => Ok(Polarity::Yang),
            "阴" => Ok(Polarity::Yin),
            m if m.eq_ignore_ascii_case("yang") => Ok(Polarity::Yang),
            m if m.eq_ignore_ascii_case("yin") => Ok(Polarity::Yin),
            other => Err(Error::InvalidPolarity {
                marker: other.to_owned(),
            }),
        }
    }
}

impl std::fmt::Display for Polarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Polarity::Yang => write!(f, "阳"),
            Polarity::Yin => write!(f, "阴"),
        }
    }
}
