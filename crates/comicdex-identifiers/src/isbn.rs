//! ISBN-10 and ISBN-13 check-digit validation.

use serde::{Deserialize, Serialize};

use crate::strip_separators;

/// Which ISBN form a string validated as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IsbnKind {
    Isbn10,
    Isbn13,
}

/// Weighted mod-10 check over the digits of `s`, expecting exactly `len`
/// of them.
///
/// The weight starts at `2 * len - 1` and drops by 2 per digit; each digit
/// contributes `digit * (weight % 4)`. For the lengths that matter (8, 12,
/// 13) this is exactly the standard EAN/ISBN-13 alternating 1/3 checksum,
/// with the start parity falling out of whether `len` is odd. Non-digit
/// characters are skipped, but the digit count must land on `len` exactly.
pub fn weighted_checksum(s: &str, len: usize) -> bool {
    let mut weight: i64 = 2 * len as i64 - 1;
    let mut sum: i64 = 0;
    for digit in s.chars().filter_map(|c| c.to_digit(10)) {
        sum += digit as i64 * (weight % 4);
        weight -= 2;
    }
    weight == -1 && sum % 10 == 0
}

/// Validate an ISBN-13 (or EAN-13) digit string.
///
/// # Examples
/// ```
/// use comicdex_identifiers::is_valid_isbn13;
/// assert!(is_valid_isbn13("9780306406157"));
/// assert!(!is_valid_isbn13("9780306406158"));
/// ```
pub fn is_valid_isbn13(s: &str) -> bool {
    weighted_checksum(s, 13)
}

/// Validate an ISBN-10 digit string.
///
/// The first nine digits take weights 10 down to 2; the character in
/// position 10 is the check character, with a literal uppercase `X`
/// standing for 10. Valid when the total divides by 11.
pub fn is_valid_isbn10(s: &str) -> bool {
    let mut digits = s.chars().filter_map(|c| c.to_digit(10));
    let mut sum: u32 = 0;
    for weight in (2..=10u32).rev() {
        match digits.next() {
            Some(d) => sum += weight * d,
            None => return false,
        }
    }
    let check = match s.chars().nth(9) {
        Some('X') => 10,
        Some(c) => match c.to_digit(10) {
            Some(d) => d,
            None => return false,
        },
        None => return false,
    };
    (sum + check) % 11 == 0
}

/// Validate a transcribed ISBN of either form, separators allowed.
pub fn valid_identifier(raw: &str) -> bool {
    classify_identifier(raw).is_some()
}

/// Strip separators and validate, reporting which ISBN form matched.
/// Lengths other than 10 and 13 are not ISBNs at all.
pub fn classify_identifier(raw: &str) -> Option<IsbnKind> {
    let stripped = strip_separators(raw);
    match stripped.chars().count() {
        13 if is_valid_isbn13(&stripped) => Some(IsbnKind::Isbn13),
        10 if is_valid_isbn10(&stripped) => Some(IsbnKind::Isbn10),
        _ => None,
    }
}

/// Validate a `;`-separated list of ISBNs. A list with nothing in it
/// (empty string, or only empty segments) passes; otherwise every segment
/// must validate on its own.
pub fn valid_identifier_list(raw: &str) -> bool {
    if raw.split(';').all(|s| s.is_empty()) {
        return true;
    }
    raw.split(';').all(valid_identifier)
}
