//! Per-item content files: the on-disk cache.
//!
//! A content file's *presence* is the durable "already rendered" marker.
//! The generator runs repeatedly against a growing record stream, and an
//! existing file is never rewritten — only its timestamps are refreshed —
//! so historical items cost one `exists` check per run instead of a
//! render. There is no manifest and no hashing; deleting a file is how you
//! force an item to be re-rendered.
//!
//! Timestamps are part of the output contract: every content file carries
//! its item's time as mtime/atime, letting external tools sort or expire
//! generated files by item age rather than by generation time.

use crate::record::Record;
use crate::render;
use chrono::DateTime;
use std::fs::{self, FileTimes, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Decode the content field's escape sequences.
///
/// `\t`, `\n` and `\\` become tab, newline and a single backslash; any
/// other `\X` passes `X` through literally (the backslash is dropped), as
/// is a trailing lone backslash. Everything else is copied as-is.
pub fn decode_content(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('\\') => out.push('\\'),
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some(other) => out.push(other),
            None => {}
        }
    }
    out
}

/// Materialize the content file for one item unless it already exists.
///
/// Returns the file path and whether it was newly created. An existing
/// file is left byte-for-byte untouched; callers refresh its timestamps
/// separately via [`stamp_item_time`].
pub fn ensure_content_file(
    feed_dir: &Path,
    item_slug: &str,
    record: &Record,
) -> io::Result<(PathBuf, bool)> {
    let file_path = feed_dir.join(format!("{item_slug}.html"));
    if file_path.exists() {
        return Ok((file_path, false));
    }
    fs::write(&file_path, render::content_page(record).into_string())?;
    Ok((file_path, true))
}

/// Set a content file's modified and access times to the item's unix
/// timestamp.
///
/// Runs on every pass, created or cached. Failures here are best-effort
/// territory: the caller logs and continues.
pub fn stamp_item_time(path: &Path, timestamp: i64) -> io::Result<()> {
    let item_time: SystemTime = DateTime::from_timestamp(timestamp, 0)
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "timestamp out of range"))?
        .into();
    let times = FileTimes::new()
        .set_accessed(item_time)
        .set_modified(item_time);
    OpenOptions::new().append(true).open(path)?.set_times(times)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::FIELD_COUNT;
    use std::time::{Duration, SystemTime};
    use tempfile::TempDir;

    fn record(title: &str, content: &str, timestamp: &str) -> Record {
        let mut fields = vec![String::new(); FIELD_COUNT];
        fields[0] = timestamp.to_string();
        fields[2] = title.to_string();
        fields[4] = content.to_string();
        fields[10] = "https://feed.example/".to_string();
        Record::parse(&fields.join("\t"))
    }

    // =========================================================================
    // Escape-sequence decoding
    // =========================================================================

    #[test]
    fn decodes_known_sequences() {
        assert_eq!(decode_content(r"a\tb\nc\\d"), "a\tb\nc\\d");
    }

    #[test]
    fn unknown_sequence_drops_the_backslash() {
        assert_eq!(decode_content(r"a\xb"), "axb");
        assert_eq!(decode_content(r"\q"), "q");
    }

    #[test]
    fn trailing_backslash_is_dropped() {
        assert_eq!(decode_content("tail\\"), "tail");
    }

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(decode_content("<p>no escapes</p>"), "<p>no escapes</p>");
        assert_eq!(decode_content(""), "");
    }

    // =========================================================================
    // Content cache
    // =========================================================================

    #[test]
    fn creates_a_file_on_first_sight() {
        let tmp = TempDir::new().unwrap();
        let r = record("First Post", "<p>hello</p>", "1400000000");

        let (path, created) = ensure_content_file(tmp.path(), "first-post", &r).unwrap();
        assert!(created);
        assert_eq!(path, tmp.path().join("first-post.html"));
        let body = fs::read_to_string(&path).unwrap();
        assert!(body.contains("First Post"));
        assert!(body.contains("<p>hello</p>"));
    }

    #[test]
    fn existing_file_is_never_rewritten() {
        let tmp = TempDir::new().unwrap();
        let first = record("Post", "<p>original</p>", "1400000000");
        let (path, _) = ensure_content_file(tmp.path(), "post", &first).unwrap();
        let original = fs::read_to_string(&path).unwrap();

        // Same item seen again on a later run with different content.
        let second = record("Post", "<p>changed</p>", "1400000000");
        let (path2, created) = ensure_content_file(tmp.path(), "post", &second).unwrap();

        assert!(!created);
        assert_eq!(path2, path);
        assert_eq!(fs::read_to_string(&path).unwrap(), original);
    }

    #[test]
    fn stamp_sets_mtime_to_the_item_time() {
        let tmp = TempDir::new().unwrap();
        let r = record("Post", "", "1400000000");
        let (path, _) = ensure_content_file(tmp.path(), "post", &r).unwrap();

        stamp_item_time(&path, 1_400_000_000).unwrap();

        let mtime = fs::metadata(&path).unwrap().modified().unwrap();
        assert_eq!(
            mtime,
            SystemTime::UNIX_EPOCH + Duration::from_secs(1_400_000_000)
        );
    }

    #[test]
    fn stamp_refreshes_a_cached_file() {
        let tmp = TempDir::new().unwrap();
        let r = record("Post", "", "1000");
        let (path, _) = ensure_content_file(tmp.path(), "post", &r).unwrap();
        stamp_item_time(&path, 1_000).unwrap();
        stamp_item_time(&path, 2_000).unwrap();

        let mtime = fs::metadata(&path).unwrap().modified().unwrap();
        assert_eq!(mtime, SystemTime::UNIX_EPOCH + Duration::from_secs(2_000));
    }

    #[test]
    fn stamp_on_a_missing_file_fails_without_creating_it() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("gone.html");
        assert!(stamp_item_time(&path, 1_000).is_err());
        assert!(!path.exists());
    }
}
