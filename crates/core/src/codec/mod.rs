//! Text decoding for strings handed over by the PDF engine.
//!
//! This module contains:
//! - `pdfdoc`: PDFDocEncoding / UTF-16BE text strings
//! - `unicode`: code-point and code-unit arrays, Unicode normalization
//!
//! Decoding is lenient: malformed input is replaced with U+FFFD or dropped,
//! never reported as an error.

pub mod pdfdoc;
pub mod unicode;

pub use pdfdoc::{decode_text, decode_text_with};
pub use unicode::{NormalizationForm, code_points_to_string, normalize, utf16_to_string};
