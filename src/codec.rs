//! # Trigram Codec
//!
//! Encodes a three-line yin/yang sequence into one of the eight canonical
//! trigrams. Pure functions over constant data — no I/O, no state.
//!
//! A trigram code is the three line bits packed bottom→top: bit *i*
//! (0-indexed from the bottom line) contributes `bit << i`, so codes run
//! 0b000 (坤, all Yin) to 0b111 (乾, all Yang). All 8 combinations are
//! pre-enumerated below; encoding cannot fail.

use crate::model::{Element, Polarity, Trigram};

/// The eight trigrams, indexed by code.
///
/// | code  | name | element | polarity |
/// |-------|------|---------|----------|
/// | 0b000 | 坤   | Earth   | Yin      |
/// | 0b001 | 震   | Wood    | Yang     |
/// | 0b010 | 坎   | Water   | Yang     |
/// | 0b011 | 兑   | Metal   | Yin      |
/// | 0b100 | 艮   | Earth   | Yang     |
/// | 0b101 | 离   | Fire    | Yin      |
/// | 0b110 | 巽   | Wood    | Yin      |
/// | 0b111 | 乾   | Metal   | Yang     |
///
/// Elements follow the traditional assignment (乾/兑 metal, 离 fire,
/// 震/巽 wood, 坎 water, 艮/坤 earth); polarity follows the family
/// assignment (乾 and the three sons Yang, 坤 and the three daughters Yin).
pub const TRIGRAMS: [Trigram; 8] = [
    Trigram { code: 0b000, name: "坤", element: Element::Earth, polarity: Polarity::Yin },
    Trigram { code: 0b001, name: "震", element: Element::Wood, polarity: Polarity::Yang },
    Trigram { code: 0b010, name: "坎", element: Element::Water, polarity: Polarity::Yang },
    Trigram { code: 0b011, name: "兑", element: Element::Metal, polarity: Polarity::Yin },
    Trigram { code: 0b100, name: "艮", element: Element::Earth, polarity: Polarity::Yang },
    Trigram { code: 0b101, name: "离", element: Element::Fire, polarity: Polarity::Yin },
    Trigram { code: 0b110, name: "巽", element: Element::Wood, polarity: Polarity::Yin },
    Trigram { code: 0b111, name: "乾", element: Element::Metal, polarity: Polarity::Yang },
];

/// Pack three line polarities (bottom→top) into a trigram code.
pub const fn code_of(bits: [Polarity; 3]) -> u8 {
    bits[0].bit() | (bits[1].bit() << 1) | (bits[2].bit() << 2)
}

/// Encode three line polarities (bottom→top) as a trigram.
pub const fn encode(bits: [Polarity; 3]) -> Trigram {
    encode_code(code_of(bits))
}

/// Look up a trigram by its 3-bit code.
///
/// Codes above 0b111 are a programming error; the codec and resolver only
/// ever produce codes in range.
pub const fn encode_code(code: u8) -> Trigram {
    debug_assert!(code <= 0b111);
    TRIGRAMS[(code & 0b111) as usize]
}
