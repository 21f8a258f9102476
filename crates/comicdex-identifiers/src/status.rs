//! Display strings for the edit-form validity indicators.

use crate::{valid_barcode_list, valid_identifier_list};

/// Indicator text for an ISBN field, or `None` when the field is empty
/// and no indicator should show.
pub fn identifier_status(raw: &str) -> Option<&'static str> {
    if raw.is_empty() {
        return None;
    }
    if valid_identifier_list(raw) {
        Some("valid ISBN")
    } else {
        Some("invalid ISBN")
    }
}

/// Indicator text for a barcode field, or `None` when the field is empty.
pub fn barcode_status(raw: &str) -> Option<&'static str> {
    if raw.is_empty() {
        return None;
    }
    if valid_barcode_list(raw) {
        Some("valid UPC/EAN")
    } else {
        Some("invalid UPC/EAN or non-standard")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_fields_show_nothing() {
        assert_eq!(identifier_status(""), None);
        assert_eq!(barcode_status(""), None);
    }

    #[test]
    fn isbn_indicator() {
        assert_eq!(identifier_status("9780306406157"), Some("valid ISBN"));
        assert_eq!(identifier_status("9780306406158"), Some("invalid ISBN"));
    }

    #[test]
    fn barcode_indicator() {
        assert_eq!(barcode_status("012345678905"), Some("valid UPC/EAN"));
        assert_eq!(
            barcode_status("0123456789"),
            Some("invalid UPC/EAN or non-standard")
        );
    }
}
