//! Japanese era-calendar date parsing.
//!
//! Japanese comics carry dates like `平成5年3月4日` (Heisei 5 = 1993) or the
//! Gregorian form `1993年3月4日`. Era dates convert through a fixed offset
//! table; an era-relative year N maps to `N + offset`.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

use crate::PartialDate;

/// The four eras that appear on indexed Japanese comics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Era {
    /// 平成, 1989-2019
    Heisei,
    /// 昭和, 1926-1989
    Showa,
    /// 大正, 1912-1926
    Taisho,
    /// 明治, 1868-1912
    Meiji,
}

impl Era {
    /// Year offset: era-relative year + offset = Gregorian year.
    pub fn offset(&self) -> u16 {
        match self {
            Era::Heisei => 1988,
            Era::Showa => 1925,
            Era::Taisho => 1911,
            Era::Meiji => 1867,
        }
    }

    /// The kanji era name as printed in indicia.
    pub fn kanji(&self) -> &'static str {
        match self {
            Era::Heisei => "平成",
            Era::Showa => "昭和",
            Era::Taisho => "大正",
            Era::Meiji => "明治",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized era name: {0}")]
pub struct ParseEraError(String);

impl FromStr for Era {
    type Err = ParseEraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "平成" => Ok(Era::Heisei),
            "昭和" => Ok(Era::Showa),
            "大正" => Ok(Era::Taisho),
            "明治" => Ok(Era::Meiji),
            other => Err(ParseEraError(other.to_string())),
        }
    }
}

lazy_static! {
    // [era]YYYY年[MM月[DD日]] anywhere in the text; month and day optional.
    static ref JP_DATE: Regex = Regex::new(
        r"(平成|昭和|大正|明治)?\s*(\d{1,4})年\s*(?:(\d{1,2})月\s*(?:(\d{1,2})日)?)?"
    )
    .unwrap();
}

/// Parse a Japanese date of the form `[era]YYYY年[MM月[DD日]]`.
///
/// With an era name the year is era-relative and converted through the
/// offset table; without one it is taken as Gregorian. A month outside
/// 1-12 is dropped, and a day is only kept when a month was found.
/// Returns an all-zero [`PartialDate`] when nothing matches.
///
/// # Examples
/// ```
/// use comicdex_dates::{resolve_japanese_date, PartialDate};
/// assert_eq!(
///     resolve_japanese_date("平成5年3月4日"),
///     PartialDate::new(1993, 3, 4)
/// );
/// ```
pub fn resolve_japanese_date(text: &str) -> PartialDate {
    let mut date = PartialDate::default();

    let Some(caps) = JP_DATE.captures(text) else {
        return date;
    };

    if let Some(year) = caps.get(2).and_then(|m| m.as_str().parse::<u16>().ok()) {
        date.year = year;
        if let Some(era) = caps.get(1).and_then(|m| m.as_str().parse::<Era>().ok()) {
            date.year += era.offset();
        }
        let month = caps.get(3).and_then(|m| m.as_str().parse::<u8>().ok());
        if let Some(month) = month.filter(|m| (1..=12).contains(m)) {
            date.month = month;
            if let Some(day) = caps.get(4).and_then(|m| m.as_str().parse::<u8>().ok()) {
                date.day = day;
            }
        }
    }
    date
}
