//! Free-text publication-date parsing.

use lazy_static::lazy_static;
use regex::Regex;

use crate::{check_month, format_key_date, resolve_japanese_date, PartialDate};

// Token delimiters: whitespace plus the punctuation indexers wrap around
// dates ("[March] 1995", "Jan. 1995?", "1-4-2001").
const DELIMITERS: &[char] = &[
    '[', '{', '}', '(', ')', ',', '?', '\'', ']', '-', '.',
];

fn is_delimiter(c: char) -> bool {
    c.is_whitespace() || DELIMITERS.contains(&c)
}

/// Leading digit run of a token, as a number. Saturates instead of
/// overflowing so absurdly long runs still compare as "too large".
fn leading_digits(token: &str) -> Option<u64> {
    let run = token.chars().take_while(|c| c.is_ascii_digit());
    let mut value: Option<u64> = None;
    for c in run {
        let digit = (c as u8 - b'0') as u64;
        value = Some(
            value
                .unwrap_or(0)
                .saturating_mul(10)
                .saturating_add(digit),
        );
    }
    value
}

/// Year candidate: token opens with four digits and the token as a whole
/// sorts between "18" and "21". The guard is a deliberate string comparison,
/// not a numeric range: it restricts to the 1800s-2000s while cheaply
/// rejecting tokens like "0123" or "5000".
fn match_year(token: &str) -> Option<u16> {
    let bytes = token.as_bytes();
    if bytes.len() < 4 || !bytes[..4].iter().all(u8::is_ascii_digit) {
        return None;
    }
    if !(token > "18" && token < "21") {
        return None;
    }
    token[..4].parse().ok()
}

/// Parse a free-text publication date into its year, month, and day.
///
/// A Japanese 年/月/日 date takes priority and is never mixed with the
/// Western token scan. Otherwise the text splits into tokens and each token
/// is tried as year, then day, then month; the first token to supply a
/// field wins, later candidates for the same field are ignored.
///
/// # Examples
/// ```
/// use comicdex_dates::{resolve_publication_date, PartialDate};
/// assert_eq!(
///     resolve_publication_date("March 3, 1995"),
///     PartialDate::new(1995, 3, 3)
/// );
/// assert_eq!(
///     resolve_publication_date("julen 1980"),
///     PartialDate::new(1980, 12, 0)
/// );
/// ```
pub fn resolve_publication_date(text: &str) -> PartialDate {
    let jp = resolve_japanese_date(text);
    if jp.year != 0 {
        return jp;
    }

    let mut date = PartialDate::default();
    for token in text.split(is_delimiter).filter(|t| !t.is_empty()) {
        let token = token.to_lowercase();
        let year = if date.year == 0 { match_year(&token) } else { None };
        if let Some(year) = year {
            date.year = year;
        } else if date.day == 0 && token.starts_with(|c: char| c.is_ascii_digit()) {
            let day = leading_digits(&token).unwrap_or(0);
            // A numeric token that cannot be a day still consumes this slot.
            date.day = if day <= 31 { day as u8 } else { 0 };
        } else if date.month == 0 {
            let month = check_month(&token);
            if month != 0 {
                date.month = month;
            }
        }
    }
    date
}

lazy_static! {
    // Dates better left for a human: winter straddles the year boundary
    // (Dec/Jan) and "vecka" (sv: week) numbers weeks, not days.
    static ref MANUAL_REVIEW: Regex = Regex::new(r"^(winter|vinter|vecka)\b").unwrap();
    static ref MONTH_SLASH_YEAR: Regex = Regex::new(r"^(\d{1,2})/(\d{4})").unwrap();
}

/// Batch key-date autofill from a publication-date string alone.
///
/// Used when backfilling key dates for issues that only have free-text
/// dates. Returns `None` when the text needs manual review or no year
/// could be determined.
pub fn autofill_key_date(text: &str) -> Option<String> {
    if MANUAL_REVIEW.is_match(text) {
        return None;
    }
    if let Some(caps) = MONTH_SLASH_YEAR.captures(text) {
        let month: u8 = caps[1].parse().ok()?;
        let year: u16 = caps[2].parse().ok()?;
        return Some(format_key_date(year, month, 0));
    }
    let date = resolve_publication_date(text);
    if date.year != 0 {
        Some(date.format_key_date())
    } else {
        None
    }
}
