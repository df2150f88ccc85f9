//! Filesystem-safe path segments from arbitrary text.
//!
//! Feed names and item titles come from untrusted feed data and become
//! directory and file names. [`slug`] reduces them to lowercase ASCII
//! letters and digits with single `-` separators, so the same title always
//! maps to the same path across runs — that stability is what makes the
//! on-disk content cache work.

/// Default length bound for generated path segments.
///
/// Safety limit only; output paths are dynamically sized.
pub const SLUG_MAX: usize = 256;

/// Derive a filesystem-safe, human-legible path segment from `text`.
///
/// Scans left to right, emitting at most `max_len` characters. ASCII
/// letters and digits are lowercased and kept; any other character
/// (non-ASCII included) contributes a single `-`, with consecutive runs
/// collapsed. Trailing separators are stripped.
///
/// An empty result means the text has no usable name and the caller must
/// skip the record (soft-skip, not an error).
///
/// Pure and deterministic: same input and bound, same output.
pub fn slug(text: &str, max_len: usize) -> String {
    let mut out = String::new();
    let mut in_separator_run = false;

    for c in text.chars() {
        if out.len() == max_len {
            break;
        }
        if c.is_ascii_alphanumeric() {
            out.push(c.to_ascii_lowercase());
            in_separator_run = false;
        } else if !in_separator_run {
            out.push('-');
            in_separator_run = true;
        }
    }

    while out.ends_with('-') {
        out.pop();
    }
    out
}
