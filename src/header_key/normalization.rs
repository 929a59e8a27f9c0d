// WHY: standalone punctuation folding shared by key computation and callers batching headers
// Mirrors the collapse rules used for keys so displayed and compared forms never drift

/// Word characters are letters, digits and underscore
pub fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

/// Replace every run of non-word characters with a single space and trim the ends
pub fn collapse_non_word(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    collapse_non_word_into(text, &mut result);
    result
}

/// Collapse into supplied buffer to avoid allocation
/// WHY: enables buffer reuse when keying many headers in a row
pub fn collapse_non_word_into(text: &str, buffer: &mut String) {
    buffer.clear();
    buffer.reserve(text.len());

    let mut pending_space = false;

    for ch in text.chars() {
        if is_word_char(ch) {
            // Leading runs are dropped, interior runs become one space
            if pending_space && !buffer.is_empty() {
                buffer.push(' ');
            }
            pending_space = false;
            buffer.push(ch);
        } else {
            pending_space = true;
        }
    }
}
