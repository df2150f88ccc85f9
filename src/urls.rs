//! Link composition and anchor fragment identifiers.
//!
//! Feed records carry possibly-relative item links plus two candidate
//! bases (a feed URL and an optional base-site-URL override). The join
//! rule is intentionally dumb: an absolute link passes through verbatim,
//! a relative one is concatenated onto the base as-is. Normalizing slashes
//! or resolving `..` would change long-standing output for feeds that rely
//! on the raw concatenation.

use crate::slug::{SLUG_MAX, slug};

/// Whether `link` is already an absolute URL.
fn is_absolute(link: &str) -> bool {
    link.contains("://")
}

/// Join an item link with its base URL.
///
/// Absolute links are returned verbatim; anything else is appended to
/// `base` without separator fix-ups.
pub fn resolve_link(link: &str, base: &str) -> String {
    if is_absolute(link) {
        link.to_string()
    } else {
        format!("{base}{link}")
    }
}

/// Stable fragment identifier for a feed name, used for `items.html#...`
/// anchors in the sidebar.
///
/// Uses the same sanitization as directory names so the fragment never
/// needs escaping and stays stable across runs. Sections sharing a name
/// share an anchor; links resolve to the first occurrence.
pub fn anchor_id(feed_name: &str) -> String {
    slug(feed_name, SLUG_MAX)
}
