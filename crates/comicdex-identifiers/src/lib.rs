//! comicdex-identifiers: ISBN and UPC/EAN validation.
//!
//! Indexers transcribe ISBNs and barcodes straight off covers and indicia,
//! separators and add-on codes included. This crate checks those strings
//! against the standard check-digit algorithms so the edit form can flag
//! transcription errors before a change is submitted.
//!
//! All functions are total over arbitrary strings; malformed input is
//! simply invalid, never an error.

pub mod barcode;
pub mod isbn;
pub mod status;

pub use barcode::*;
pub use isbn::*;
pub use status::*;

/// Drop the separators allowed inside a transcribed identifier.
pub(crate) fn strip_separators(raw: &str) -> String {
    raw.chars().filter(|c| *c != ' ' && *c != '-').collect()
}
