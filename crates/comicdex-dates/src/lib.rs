//! comicdex-dates: publication-date parsing and key-date resolution.
//!
//! Indexers type publication dates as free text in whatever language the
//! comic was published in ("March 3, 1995", "julen 1980", "平成5年3月4日").
//! This crate turns that text, together with a structured on-sale date,
//! into the normalized `YYYY-MM-DD` key date used for sorting.
//!
//! All parse functions are total: a field that cannot be determined comes
//! back as the 0 sentinel, never as an error.

pub mod japanese;
pub mod key_date;
pub mod months;
pub mod partial;
pub mod pub_date;

pub use japanese::*;
pub use key_date::*;
pub use months::*;
pub use partial::*;
pub use pub_date::*;
