//! Pure whole-buffer transformations.
//!
//! # Responsibility
//! - Derive output buffers from input buffers with no I/O.
//!
//! # Invariants
//! - Reversal operates on Unicode code points, never raw bytes.
//! - Replacement scans leftmost-first and never re-scans inserted text.

/// Reverses the sequence of Unicode code points in `text`.
///
/// Multi-byte characters reorder as whole units. Applying this twice
/// reproduces the input.
pub fn reverse_code_points(text: &str) -> String {
    text.chars().rev().collect()
}

/// Returns `bytes` repeated `count` times, concatenated with no separator.
///
/// `count == 0` yields an empty buffer; `count == 1` yields an unchanged
/// copy.
pub fn repeat_contents(bytes: &[u8], count: usize) -> Vec<u8> {
    bytes.repeat(count)
}

/// Replaces every non-overlapping occurrence of `needle` in `haystack` with
/// `replacement`.
///
/// Scanning is leftmost-first; after a match it resumes immediately past the
/// matched span, so replacement text is never re-scanned. Empty needles are
/// rejected at the command layer; here they yield the haystack unchanged.
pub fn replace_all(haystack: &[u8], needle: &[u8], replacement: &[u8]) -> Vec<u8> {
    if needle.is_empty() {
        return haystack.to_vec();
    }

    let mut out = Vec::with_capacity(haystack.len());
    let mut cursor = 0;
    while let Some(offset) = find(&haystack[cursor..], needle) {
        out.extend_from_slice(&haystack[cursor..cursor + offset]);
        out.extend_from_slice(replacement);
        cursor += offset + needle.len();
    }
    out.extend_from_slice(&haystack[cursor..]);
    out
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.len() > haystack.len() {
        return None;
    }
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}
