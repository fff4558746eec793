//! Marker-delimited substring extraction.
//!
//! Small pure helpers for pulling a value out of semi-structured CLI
//! output when it sits between two known markers. No I/O, no regex.

/// Extracts the substring strictly between the first occurrence of `start`
/// and the next occurrence of `end`, with the start marker removed and
/// surrounding whitespace trimmed.
///
/// Degenerate inputs (no `start` in the haystack, no `end` after `start`,
/// or an `end` that lands inside the start marker itself) yield an empty
/// string rather than an error.
pub fn extract_between(haystack: &str, start: &str, end: &str) -> String {
    let Some(from) = haystack.find(start) else {
        return String::new();
    };
    let tail = &haystack[from..];
    let Some(to) = tail.find(end) else {
        return String::new();
    };
    if to < start.len() {
        return String::new();
    }
    tail[start.len()..to].trim().to_string()
}

/// Like [`extract_between`], but additionally splits the extracted value on
/// `delimiter` and trims each token.
///
/// Token order is preserved and interior empty tokens are retained as empty
/// strings (`"a,,b"` splits into three tokens). An empty extracted value
/// yields an empty vector.
pub fn extract_list(haystack: &str, start: &str, end: &str, delimiter: &str) -> Vec<String> {
    let body = extract_between(haystack, start, end);
    if body.is_empty() {
        return Vec::new();
    }
    body.split(delimiter)
        .map(|token| token.trim().to_string())
        .collect()
}
