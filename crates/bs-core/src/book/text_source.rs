//! Plain-text rendition lookup.
//!
//! The first format whose key contains [`PLAIN_TEXT_MARKER`] wins. Order is the
//! catalog's wire order; no precedence between several plain-text variants
//! (charsets, zipped copies) is applied beyond that.

use super::formats::Formats;

/// Substring identifying a plain-text representation.
pub const PLAIN_TEXT_MARKER: &str = "text/plain";

/// Return the URL of the first plain-text format, if any.
pub fn resolve(formats: &Formats) -> Option<&str> {
    formats
        .iter()
        .find(|(format, _)| format.contains(PLAIN_TEXT_MARKER))
        .map(|(_, url)| url)
}
