//! End-to-end integration tests for the resolution pipeline.
//!
//! Each test exercises: raw lines -> validation -> trigram encoding ->
//! King Wen lookup -> moving-line derivation, through the public API only.

use pretty_assertions::assert_eq;
use yijing_rs::{Error, Line, Polarity, SixLineReading, resolve, resolve_lines};

// ============================================================================
// Helper: build a reading from six polarities (bottom->top) + moving set.
// ============================================================================

fn reading(polarities: [Polarity; 6], moving: &[u8]) -> SixLineReading {
    let lines = polarities.into_iter().enumerate().map(|(i, polarity)| {
        let line = Line::new(i as u8 + 1, polarity);
        if moving.contains(&line.position) {
            line.moving()
        } else {
            line
        }
    });
    SixLineReading::from_lines(lines).unwrap()
}

const YANG: Polarity = Polarity::Yang;
const YIN: Polarity = Polarity::Yin;

// ============================================================================
// 1. The two pure hexagrams anchor the table orientation
// ============================================================================

#[test]
fn test_all_yang_is_hexagram_one() {
    let resolution = resolve(&reading([YANG; 6], &[]));

    assert_eq!(resolution.original.king_wen, 1);
    assert_eq!(resolution.original.name, "乾为天");
    assert_eq!(resolution.original.upper.name, "乾");
    assert_eq!(resolution.original.lower.name, "乾");
    assert_eq!(resolution.original.binary, 0b111111);
    assert_eq!(resolution.derived, resolution.original);
    assert!(resolution.moving_positions.is_empty());
}

#[test]
fn test_all_yin_is_hexagram_two() {
    let resolution = resolve(&reading([YIN; 6], &[]));

    assert_eq!(resolution.original.king_wen, 2);
    assert_eq!(resolution.original.name, "坤为地");
    assert_eq!(resolution.original.binary, 0b000000);
}

// ============================================================================
// 2. Mixed trigram pair: lower 乾, upper 坤 -> 地天泰 (#11)
// ============================================================================

#[test]
fn test_tai_scenario() {
    let resolution = resolve(&reading([YANG, YANG, YANG, YIN, YIN, YIN], &[]));

    assert_eq!(resolution.original.lower.name, "乾");
    assert_eq!(resolution.original.lower.code, 0b111);
    assert_eq!(resolution.original.upper.name, "坤");
    assert_eq!(resolution.original.upper.code, 0b000);
    assert_eq!(resolution.original.king_wen, 11);
    assert_eq!(resolution.original.name, "地天泰");
    assert_eq!(resolution.original.binary, 0b000111);
}

// ============================================================================
// 3. Moving lines: flip into the derived hexagram, positions ascending
// ============================================================================

#[test]
fn test_moving_lines_derive_second_hexagram() {
    // 泰 with lines 1 and 4 moving: flipped bits are [0,1,1,1,0,0].
    let resolution = resolve(&reading([YANG, YANG, YANG, YIN, YIN, YIN], &[4, 1]));

    assert_eq!(resolution.original.king_wen, 11);
    assert_eq!(resolution.moving_positions.as_slice(), &[1, 4]);
    // Lower 110 = 巽, upper 001 = 震 -> 雷风恒 (#32).
    assert_eq!(resolution.derived.lower.name, "巽");
    assert_eq!(resolution.derived.upper.name, "震");
    assert_eq!(resolution.derived.king_wen, 32);
    assert_eq!(resolution.derived.name, "雷风恒");
    assert_eq!(resolution.derived.binary, 0b001110);
}

#[test]
fn test_derived_equals_direct_resolution_of_flipped_lines() {
    let with_moving = resolve(&reading([YIN, YANG, YIN, YANG, YIN, YANG], &[3, 5]));
    let direct = resolve(&reading([YIN, YANG, YANG, YANG, YANG, YANG], &[]));

    assert_eq!(with_moving.derived, direct.original);
}

#[test]
fn test_out_of_order_lines_resolve_identically() {
    let ordered = resolve_lines([
        Line::new(1, YANG),
        Line::new(2, YIN),
        Line::new(3, YIN).moving(),
        Line::new(4, YANG),
        Line::new(5, YANG),
        Line::new(6, YIN),
    ])
    .unwrap();
    let shuffled = resolve_lines([
        Line::new(5, YANG),
        Line::new(1, YANG),
        Line::new(3, YIN).moving(),
        Line::new(6, YIN),
        Line::new(2, YIN),
        Line::new(4, YANG),
    ])
    .unwrap();

    assert_eq!(ordered, shuffled);
}

// ============================================================================
// 4. Malformed readings fail loudly, naming the offending positions
// ============================================================================

#[test]
fn test_five_lines_rejected() {
    let err = resolve_lines((1..=5).map(|p| Line::new(p, YANG))).unwrap_err();

    match err {
        Error::MalformedReading {
            missing,
            duplicated,
            out_of_range,
        } => {
            assert_eq!(missing, vec![6]);
            assert!(duplicated.is_empty());
            assert!(out_of_range.is_empty());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_duplicated_position_rejected() {
    let err = resolve_lines([1, 2, 3, 4, 5, 5].map(|p| Line::new(p, YIN))).unwrap_err();

    match err {
        Error::MalformedReading {
            missing, duplicated, ..
        } => {
            assert_eq!(missing, vec![6]);
            assert_eq!(duplicated, vec![5]);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_position_seven_rejected() {
    let err = resolve_lines([1, 2, 3, 4, 5, 7].map(|p| Line::new(p, YANG))).unwrap_err();

    match err {
        Error::MalformedReading {
            missing,
            out_of_range,
            ..
        } => {
            assert_eq!(missing, vec![6]);
            assert_eq!(out_of_range, vec![7]);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_error_message_names_positions() {
    let err = resolve_lines((1..=5).map(|p| Line::new(p, YANG))).unwrap_err();
    let message = err.to_string();

    assert!(message.contains("Malformed reading"), "{message}");
    assert!(message.contains('6'), "{message}");
}

// ============================================================================
// 5. Wire shape: the resolution carries the original service's field set
// ============================================================================

#[test]
fn test_resolution_serializes_full_identity() {
    let resolution = resolve(&reading([YANG, YANG, YANG, YIN, YIN, YIN], &[2]));
    let json = serde_json::to_value(&resolution).unwrap();

    assert_eq!(json["original"]["king_wen"], 11);
    assert_eq!(json["original"]["name"], "地天泰");
    assert_eq!(json["original"]["binary"], 0b000111);
    assert_eq!(json["original"]["lower"]["code"], 7);
    assert_eq!(json["original"]["lower"]["name"], "乾");
    assert_eq!(json["original"]["upper"]["code"], 0);
    assert_eq!(json["derived"]["king_wen"], 36);
    assert_eq!(json["derived"]["name"], "地火明夷");
    assert_eq!(json["moving_positions"], serde_json::json!([2]));
}

#[test]
fn test_reading_deserializes_from_wire_lines() {
    let json = r#"[
        {"position": 4, "polarity": "yin"},
        {"position": 1, "polarity": "yang"},
        {"position": 2, "polarity": "yang", "moving": true},
        {"position": 6, "polarity": "yin"},
        {"position": 3, "polarity": "yang"},
        {"position": 5, "polarity": "yin"}
    ]"#;
    let reading: SixLineReading = serde_json::from_str(json).unwrap();
    let resolution = resolve(&reading);

    assert_eq!(resolution.original.king_wen, 11);
    assert_eq!(resolution.moving_positions.as_slice(), &[2]);
}
