//! Per-feed accumulators and the ordered feed registry.
//!
//! Feed sections are *run-length*, not keyed by name: the registry only
//! ever compares an incoming feed name against the most recently created
//! entry. A name that reappears non-contiguously (`A, B, A`) produces two
//! separate [`Feed`] entries sharing a display name, a directory and an
//! anchor id. Downstream consumers of the generated pages rely on the
//! sections appearing exactly as they do in the input, so non-adjacent
//! sections with matching names are deliberately never merged.

/// Accumulator for one feed section.
///
/// Name and slug are fixed at creation; the counters only grow.
#[derive(Debug)]
pub struct Feed {
    /// Display name, copied from the feed-name field. May be empty.
    pub name: String,
    /// Directory name under the output base.
    pub slug: String,
    /// Items emitted for this section.
    pub total: u64,
    /// Items within the "new" time window.
    pub total_new: u64,
}

impl Feed {
    fn new(name: String, slug: String) -> Feed {
        Feed {
            name,
            slug,
            total: 0,
            total_new: 0,
        }
    }

    /// Count one emitted item for this section.
    pub fn record_item(&mut self, is_new: bool) {
        self.total += 1;
        if is_new {
            self.total_new += 1;
        }
    }
}

/// Append-only, insertion-ordered collection of feed sections.
///
/// Owns every [`Feed`] for the whole run; there is no removal. The
/// "current" section is always the last one created.
#[derive(Debug, Default)]
pub struct FeedRegistry {
    feeds: Vec<Feed>,
}

impl FeedRegistry {
    pub fn new() -> FeedRegistry {
        FeedRegistry::default()
    }

    /// Whether `feed_name` opens a new section: true when no section is
    /// active yet or the active section's name differs.
    ///
    /// Callers validate the feed slug and create the feed directory before
    /// committing the section with [`push_section`](Self::push_section);
    /// a record skipped in between leaves the current section active.
    pub fn needs_new_section(&self, feed_name: &str) -> bool {
        match self.feeds.last() {
            Some(current) => current.name != feed_name,
            None => true,
        }
    }

    /// Append a new section and make it current.
    pub fn push_section(&mut self, name: &str, slug: String) {
        self.feeds.push(Feed::new(name.to_string(), slug));
    }

    /// The active section, if any record has opened one.
    pub fn current(&self) -> Option<&Feed> {
        self.feeds.last()
    }

    pub fn current_mut(&mut self) -> Option<&mut Feed> {
        self.feeds.last_mut()
    }

    /// Number of sections created so far.
    pub fn len(&self) -> usize {
        self.feeds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.feeds.is_empty()
    }

    /// Sum of per-section new counts.
    pub fn total_new(&self) -> u64 {
        self.feeds.iter().map(|f| f.total_new).sum()
    }

    /// Sum of per-section item counts.
    pub fn total_items(&self) -> u64 {
        self.feeds.iter().map(|f| f.total).sum()
    }

    /// Sections in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &Feed> {
        self.feeds.iter()
    }
}
