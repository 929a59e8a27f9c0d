// WHY: canonical comparison keys for section headers
// Strict mode keeps the literal header; lax mode folds punctuation, case, word order and plurality

pub mod normalization;
pub mod singular;

pub use normalization::{collapse_non_word, collapse_non_word_into, is_word_char};
pub use singular::singularize;

/// Separator between the segments of a compound header
pub const SEGMENT_SEPARATOR: &str = " AND ";

/// Compute the canonical key used to group a header
///
/// With `strict` the header itself is the key. Otherwise non-word runs collapse to
/// single spaces, the text is trimmed and upper-cased, split on ` AND `, single-word
/// segments are singularized, and the segments are sorted and re-joined with ` AND `.
///
/// ```
/// use sectionguard::normalize_header_key;
///
/// assert_eq!(
///     normalize_header_key("Authors and Contributors", false),
///     normalize_header_key("CONTRIBUTOR AND AUTHOR", false),
/// );
/// assert_eq!(normalize_header_key("AUTHORS", true), "AUTHORS");
/// ```
pub fn normalize_header_key(header: &str, strict: bool) -> String {
    let mut scratch = String::new();
    normalize_header_key_with(header, strict, &mut scratch)
}

/// Compute the canonical key, reusing `scratch` for the folded text
/// WHY: enables buffer reuse when keying every header of a document
pub fn normalize_header_key_with(header: &str, strict: bool, scratch: &mut String) -> String {
    if strict {
        return header.to_string();
    }

    collapse_non_word_into(header, scratch);
    let upper = scratch.to_uppercase();
    // Upper-casing can emit combining marks (U+01F0 becomes J + U+030C); fold those too
    collapse_non_word_into(&upper, scratch);

    let mut segments: Vec<String> = scratch
        .split(SEGMENT_SEPARATOR)
        .map(|segment| {
            // Phrases stay atomic; only single tokens are singularized
            if segment.chars().any(|ch| !is_word_char(ch)) {
                segment.to_string()
            } else {
                singularize(segment)
            }
        })
        .collect();

    segments.sort_unstable();
    segments.join(SEGMENT_SEPARATOR)
}
