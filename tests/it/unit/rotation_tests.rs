//! Unit tests for rotation prompt parsing.

use moodboard::error::RotationError;
use moodboard::types::{normalize_degrees, parse_rotation};

#[test]
fn test_parses_plain_numbers() {
    assert_eq!(parse_rotation("45"), Ok(45.0));
    assert_eq!(parse_rotation(" 12.5 "), Ok(12.5));
    assert_eq!(parse_rotation("0"), Ok(0.0));
}

#[test]
fn test_wraps_out_of_range() {
    assert_eq!(parse_rotation("360"), Ok(0.0));
    assert_eq!(parse_rotation("-90"), Ok(270.0));
    assert_eq!(parse_rotation("725"), Ok(5.0));
}

#[test]
fn test_rejects_bad_input() {
    assert_eq!(parse_rotation(""), Err(RotationError::Empty));
    assert_eq!(parse_rotation("   "), Err(RotationError::Empty));
    assert_eq!(
        parse_rotation("abc"),
        Err(RotationError::NotANumber("abc".to_string()))
    );
    assert_eq!(
        parse_rotation("inf"),
        Err(RotationError::NotFinite("inf".to_string()))
    );
    assert!(matches!(parse_rotation("NaN"), Err(RotationError::NotFinite(_))));
}

#[test]
fn test_normalize_never_returns_negative_zero() {
    assert!(normalize_degrees(-0.0).is_sign_positive());
    assert!(normalize_degrees(-360.0).is_sign_positive());
}
