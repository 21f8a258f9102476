//! Key-date resolution from publication and on-sale dates.

use serde::{Deserialize, Serialize};

use crate::{format_key_date, PartialDate};

/// How much trust to place in a combined key date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Confidence {
    /// Year (at least) resolved from consistent inputs; safe to apply.
    Resolved,
    /// Month and year came from different inputs that cannot corroborate
    /// each other; needs manual confirmation.
    Ambiguous,
    /// No year could be determined.
    Unresolved,
}

/// Which input(s) supplied the combined fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyDateSource {
    PublicationDate,
    OnSaleDate,
    Both,
}

/// Outcome of [`combine`]: the formatted key date (also filled in for
/// ambiguous results, as the "possible" value to show a reviewer) plus
/// confidence and provenance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyDateResult {
    pub value: String,
    pub confidence: Confidence,
    pub source: Option<KeyDateSource>,
}

fn source_of(used_pub: bool, used_on_sale: bool) -> Option<KeyDateSource> {
    match (used_pub, used_on_sale) {
        (true, true) => Some(KeyDateSource::Both),
        (true, false) => Some(KeyDateSource::PublicationDate),
        (false, true) => Some(KeyDateSource::OnSaleDate),
        (false, false) => None,
    }
}

/// Merge the parsed publication date with the structured on-sale date.
///
/// The publication date wins field by field. On-sale fields only fill gaps
/// when their context agrees: an on-sale month needs its year to match the
/// chosen year (or be absent), an on-sale day needs its month to match the
/// chosen month. When the year and month end up sourced from different
/// inputs the result is marked [`Confidence::Ambiguous`] and should not be
/// auto-applied.
///
/// # Examples
/// ```
/// use comicdex_dates::{combine, Confidence, PartialDate};
/// let result = combine(
///     PartialDate::new(1995, 0, 0),
///     PartialDate::new(1995, 3, 0),
/// );
/// assert_eq!(result.confidence, Confidence::Resolved);
/// assert_eq!(result.value, "1995-03-00");
/// ```
pub fn combine(pub_date: PartialDate, on_sale: PartialDate) -> KeyDateResult {
    let mut year = 0u16;
    let mut month = 0u8;
    let mut day = 0u8;
    let mut used_pub = false;
    let mut used_on_sale = false;
    let mut unsure = false;

    if pub_date.year != 0 {
        year = pub_date.year;
        used_pub = true;
    } else if on_sale.year != 0 {
        year = on_sale.year;
        used_on_sale = true;
    }

    if year != 0 {
        if pub_date.month != 0 {
            month = pub_date.month;
            used_pub = true;
            if pub_date.year == 0 {
                // Month from the publication date, year from the on-sale date.
                unsure = true;
            }
        } else if (year == on_sale.year || on_sale.year == 0) && on_sale.month != 0 {
            month = on_sale.month;
            used_on_sale = true;
            if on_sale.year == 0 {
                // Month from the on-sale date, year from the publication date.
                unsure = true;
            }
        }
    }

    if month != 0 {
        if pub_date.day != 0 {
            day = pub_date.day;
            used_pub = true;
        } else if month == on_sale.month && on_sale.day != 0 {
            day = on_sale.day;
            used_on_sale = true;
        }
    }

    let source = source_of(used_pub, used_on_sale);
    if unsure {
        return KeyDateResult {
            value: format_key_date(year, month, day),
            confidence: Confidence::Ambiguous,
            source,
        };
    }
    if year != 0 {
        KeyDateResult {
            value: format_key_date(year, month, day),
            confidence: Confidence::Resolved,
            source,
        }
    } else {
        KeyDateResult {
            value: String::new(),
            confidence: Confidence::Unresolved,
            source: None,
        }
    }
}

/// Normalize raw on-sale form fields into a [`PartialDate`].
///
/// A three-character year gets a trailing `0` (indexers write "199" for
/// "early 1990s"), and the first `?` wildcard in each field becomes `0`.
/// Anything that then fails to parse as a number is the 0 sentinel.
pub fn normalize_on_sale(year: &str, month: &str, day: &str) -> PartialDate {
    let mut year = year.to_string();
    if year.len() == 3 {
        year.push('0');
    }
    PartialDate {
        year: year.replacen('?', "0", 1).parse().unwrap_or(0),
        month: month.replacen('?', "0", 1).parse().unwrap_or(0),
        day: day.replacen('?', "0", 1).parse().unwrap_or(0),
    }
}

/// Human-readable status line for a combine result, shown next to the
/// key-date field.
pub fn indicator_text(result: &KeyDateResult) -> String {
    match result.confidence {
        Confidence::Ambiguous => format!(
            "Possible keydate: {} - please verify and copy in field manually",
            result.value
        ),
        Confidence::Resolved => {
            let from = match result.source {
                Some(KeyDateSource::Both) => "publication and on-sale dates",
                Some(KeyDateSource::PublicationDate) => "publication date",
                Some(KeyDateSource::OnSaleDate) => "on-sale date",
                None => return String::new(),
            };
            format!("Auto-set from {}", from)
        }
        Confidence::Unresolved => String::new(),
    }
}
