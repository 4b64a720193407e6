//! # King Wen Grid
//!
//! The fixed, total mapping from an (upper, lower) trigram pair to the
//! traditional King Wen sequence number (1..=64) and canonical name.
//!
//! There is no formula behind the King Wen ordering — it is a historical
//! artifact — so the table itself is the contract and is reproduced entry
//! for entry from the canonical arrangement. The grid is indexed
//! `(upper_code << 3) | lower_code` with each trigram code packed
//! bottom→top (bit *i* = line *i+1*, Yang = 1).
//!
//! Every one of the 64 pairs has exactly one number and name; the numbers
//! form a permutation of 1..=64 (locked by a property test).

/// `(king_wen_number, name)` for every `(upper << 3) | lower` key.
///
/// Each row fixes the upper trigram and walks the lower one through codes
/// 0b000..0b111; names read upper nature first (地天泰 is 坤 over 乾).
pub const KING_WEN_GRID: [(u8, &str); 64] = [
    // Upper: 坤 0b000
    (2, "坤为地"), (24, "地雷复"), (7, "地水师"), (19, "地泽临"),
    (15, "地山谦"), (36, "地火明夷"), (46, "地风升"), (11, "地天泰"),
    // Upper: 震 0b001
    (16, "雷地豫"), (51, "震为雷"), (40, "雷水解"), (54, "雷泽归妹"),
    (62, "雷山小过"), (55, "雷火丰"), (32, "雷风恒"), (34, "雷天大壮"),
    // Upper: 坎 0b010
    (8, "水地比"), (3, "水雷屯"), (29, "坎为水"), (60, "水泽节"),
    (39, "水山蹇"), (63, "水火既济"), (48, "水风井"), (5, "水天需"),
    // Upper: 兑 0b011
    (45, "泽地萃"), (17, "泽雷随"), (47, "泽水困"), (58, "兑为泽"),
    (31, "泽山咸"), (49, "泽火革"), (28, "泽风大过"), (43, "泽天夬"),
    // Upper: 艮 0b100
    (23, "山地剥"), (27, "山雷颐"), (4, "山水蒙"), (41, "山泽损"),
    (52, "艮为山"), (22, "山火贲"), (18, "山风蛊"), (26, "山天大畜"),
    // Upper: 离 0b101
    (35, "火地晋"), (21, "火雷噬嗑"), (64, "火水未济"), (38, "火泽睽"),
    (56, "火山旅"), (30, "离为火"), (50, "火风鼎"), (14, "火天大有"),
    // Upper: 巽 0b110
    (20, "风地观"), (42, "风雷益"), (59, "风水涣"), (61, "风泽中孚"),
    (53, "风山渐"), (37, "风火家人"), (57, "巽为风"), (9, "风天小畜"),
    // Upper: 乾 0b111
    (12, "天地否"), (25, "天雷无妄"), (6, "天水讼"), (10, "天泽履"),
    (33, "天山遯"), (13, "天火同人"), (44, "天风姤"), (1, "乾为天"),
];

/// Look up the King Wen number and name for a trigram pair.
///
/// Both codes must be in 0..=7; anything else is a programming error (the
/// codec only produces codes in range), not a domain error.
pub const fn lookup(upper_code: u8, lower_code: u8) -> (u8, &'static str) {
    debug_assert!(upper_code <= 0b111 && lower_code <= 0b111);
    KING_WEN_GRID[(((upper_code & 0b111) << 3) | (lower_code & 0b111)) as usize]
}
