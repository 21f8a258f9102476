//! Checksum validation integration tests.
//!
//! Exercises the compact weighted check against the textbook algorithms
//! and against known-good codes transcribed from real covers.

use comicdex_identifiers::{
    is_valid_isbn10, is_valid_isbn13, valid_barcode, valid_barcode_list, valid_identifier,
    valid_identifier_list, weighted_checksum,
};
use proptest::prelude::*;
use rstest::rstest;

/// Textbook EAN/ISBN-13 checksum: weight 1 on the check digit, 3 and 1
/// alternating leftward from it.
fn standard_ean_valid(digits: &[u32]) -> bool {
    let len = digits.len();
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, &d)| {
            let from_right = len - 1 - i;
            if from_right % 2 == 1 {
                d * 3
            } else {
                d
            }
        })
        .sum();
    sum % 10 == 0
}

#[rstest]
#[case("9780306406157", true)] // ISBN-13
#[case("9780321125217", true)]
#[case("9780306406158", false)]
#[case("9790306406157", false)] // 979 prefix with 978 check digit
fn isbn13_cases(#[case] input: &str, #[case] expected: bool) {
    assert_eq!(is_valid_isbn13(input), expected);
}

#[rstest]
#[case("0306406152", true)]
#[case("097522980X", true)]
#[case("0306406153", false)]
#[case("030640615X", false)]
fn isbn10_cases(#[case] input: &str, #[case] expected: bool) {
    assert_eq!(is_valid_isbn10(input), expected);
}

#[rstest]
#[case("978-0-306-40615-7", true)]
#[case("978 0 306 40615 7", true)]
#[case("0-306-40615-2", true)]
#[case("0-306-40615-8", false)]
#[case("40615", false)]
fn identifier_with_separators(#[case] input: &str, #[case] expected: bool) {
    assert_eq!(valid_identifier(input), expected);
}

#[rstest]
#[case("012345678905", true)] // UPC-A
#[case("4006381333931", true)] // EAN-13
#[case("96385074", true)] // EAN-8
#[case("01234567890512", true)] // UPC-A + 2-digit add-on
#[case("01234567890512345", true)] // UPC-A + 5-digit add-on
#[case("978030640615712345", true)] // EAN-13 + 5-digit add-on
#[case("012345678906", false)]
#[case("0123456789", false)] // no standard symbol is 10 digits
fn barcode_cases(#[case] input: &str, #[case] expected: bool) {
    assert_eq!(valid_barcode(input), expected);
}

#[rstest]
#[case("9780306406157;0306406152", true)]
#[case("9780306406157;0306406153", false)]
#[case("", true)]
#[case(";", true)]
fn identifier_lists(#[case] input: &str, #[case] expected: bool) {
    assert_eq!(valid_identifier_list(input), expected);
}

#[test]
fn barcode_list_all_segments_checked() {
    assert!(valid_barcode_list("012345678905;4006381333931;96385074"));
    assert!(!valid_barcode_list("012345678905;96385075"));
}

#[test]
fn single_digit_errors_detected() {
    let valid = "9780306406157";
    for pos in 0..valid.len() {
        for delta in 1..10u32 {
            let mut digits: Vec<u32> = valid.chars().map(|c| c.to_digit(10).unwrap()).collect();
            digits[pos] = (digits[pos] + delta) % 10;
            let flipped: String = digits.iter().map(|d| d.to_string()).collect();
            assert!(
                !is_valid_isbn13(&flipped),
                "flip at {} by {} went undetected: {}",
                pos,
                delta,
                flipped
            );
        }
    }
}

proptest! {
    /// The compact descending-weight check agrees with the textbook
    /// alternating 1/3 algorithm at every supported symbol length.
    #[test]
    fn weighted_check_matches_standard(
        digits in prop::sample::select(vec![8usize, 12, 13])
            .prop_flat_map(|len| prop::collection::vec(0u32..10, len))
    ) {
        let s: String = digits.iter().map(|d| d.to_string()).collect();
        prop_assert_eq!(weighted_checksum(&s, digits.len()), standard_ean_valid(&digits));
    }

    /// Length mismatches never validate, whatever the digits.
    #[test]
    fn wrong_length_never_validates(digits in prop::collection::vec(0u32..10, 1..20)) {
        let s: String = digits.iter().map(|d| d.to_string()).collect();
        for len in [8usize, 12, 13] {
            if digits.len() != len {
                prop_assert!(!weighted_checksum(&s, len));
            }
        }
    }
}
