//! UPC/EAN barcode validation with add-on recovery.

use crate::{strip_separators, weighted_checksum};

/// Validate a transcribed barcode, separators allowed.
///
/// Covers carry EAN-13, UPC-A (12), and EAN-8 codes, often with a 2- or
/// 5-digit add-on printed after the main symbol. Over 16 characters the
/// trailing 5 are assumed to be an add-on and dropped; over 13, the
/// trailing 2. What remains must be one of the three standard lengths and
/// pass the weighted check at that exact length.
///
/// # Examples
/// ```
/// use comicdex_identifiers::valid_barcode;
/// assert!(valid_barcode("012345678905"));
/// assert!(valid_barcode("01234567890512345"));
/// assert!(!valid_barcode("012345678906"));
/// ```
pub fn valid_barcode(raw: &str) -> bool {
    let stripped = strip_separators(raw);
    let len = stripped.chars().count();
    let trimmed: String = if len > 16 {
        stripped.chars().take(len - 5).collect()
    } else if len > 13 {
        stripped.chars().take(len - 2).collect()
    } else {
        stripped
    };
    let len = trimmed.chars().count();
    matches!(len, 13 | 12 | 8) && weighted_checksum(&trimmed, len)
}

/// Validate a `;`-separated list of barcodes; same boundary behavior as
/// [`crate::valid_identifier_list`].
pub fn valid_barcode_list(raw: &str) -> bool {
    if raw.split(';').all(|s| s.is_empty()) {
        return true;
    }
    raw.split(';').all(valid_barcode)
}
