//! Partial calendar dates with unknown fields.

use serde::{Deserialize, Serialize};

/// A date where any subset of fields may be unknown.
///
/// 0 means "not determined" for every field. Output formatting keeps the
/// sentinel: an unknown month renders as `00`, matching the key-date
/// convention where `1995-00-00` sorts a year-only issue before dated ones.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartialDate {
    pub year: u16,
    pub month: u8,
    pub day: u8,
}

impl PartialDate {
    pub fn new(year: u16, month: u8, day: u8) -> Self {
        PartialDate { year, month, day }
    }

    /// True when no field was determined.
    pub fn is_empty(&self) -> bool {
        self.year == 0 && self.month == 0 && self.day == 0
    }

    /// Format as a key date: zero-padded `YYYY-MM-DD`.
    ///
    /// # Examples
    /// ```
    /// use comicdex_dates::PartialDate;
    /// assert_eq!(PartialDate::new(1995, 3, 0).format_key_date(), "1995-03-00");
    /// ```
    pub fn format_key_date(&self) -> String {
        format_key_date(self.year, self.month, self.day)
    }
}

/// Zero-pad a year/month/day triple into the `YYYY-MM-DD` key-date form.
pub fn format_key_date(year: u16, month: u8, day: u8) -> String {
    format!("{:04}-{:02}-{:02}", year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_pads_all_fields() {
        assert_eq!(format_key_date(1995, 3, 4), "1995-03-04");
        assert_eq!(format_key_date(0, 0, 0), "0000-00-00");
        assert_eq!(format_key_date(842, 12, 1), "0842-12-01");
    }

    #[test]
    fn empty_means_all_zero() {
        assert!(PartialDate::default().is_empty());
        assert!(!PartialDate::new(0, 0, 1).is_empty());
    }

    #[test]
    fn formatting_is_deterministic() {
        let d = PartialDate::new(1980, 12, 0);
        assert_eq!(d.format_key_date(), d.format_key_date());
        assert_eq!(d.format_key_date(), "1980-12-00");
    }
}
