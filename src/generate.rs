//! The single-pass stream orchestrator.
//!
//! Consumes TSV feed-item records in one forward pass and keeps four
//! artifacts mutually consistent: the streamed item list, the per-item
//! content cache, and the buffered menu and index documents rendered once
//! the final totals are known.
//!
//! ## Section boundaries
//!
//! Records are grouped run-length by feed name: a record whose feed name
//! differs from the active section's closes the open item table and opens
//! a new section (directory creation included). Names reappearing
//! non-contiguously create fresh sections — see [`crate::feed`] for why
//! that stays as-is.
//!
//! ## Failure policy
//!
//! Fatal: base directory, artifact file, or feed directory creation
//! failures — the run aborts with a diagnostic and whatever was already
//! written stays on disk (safe, because re-running is idempotent).
//! Soft-skip: records whose feed name or title sanitizes to an empty
//! slug. Best-effort: individual content-file writes and timestamp
//! updates, which warn on stderr and keep the run going.
//!
//! Single-threaded by design: one pass, one output tree, no locking. Two
//! concurrent runs against the same base directory are the caller's bug.

use crate::content;
use crate::feed::FeedRegistry;
use crate::record::Record;
use crate::render;
use crate::slug::{SLUG_MAX, slug};
use chrono::Utc;
use std::fs::{self, File};
use std::io::{self, BufRead, BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Items at least this recent (relative to run start) count as new.
const NEW_WINDOW_SECS: i64 = 60 * 60 * 24;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("can't create output directory '{path}': {source}")]
    CreateBaseDir { path: PathBuf, source: io::Error },
    #[error("can't write {name}: {source}")]
    CreateArtifact {
        name: &'static str,
        source: io::Error,
    },
    #[error("can't make directory '{path}': {source}")]
    CreateFeedDir { path: PathBuf, source: io::Error },
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Final counters for one feed section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedSummary {
    pub name: String,
    pub total: u64,
    pub total_new: u64,
}

/// What a run did, for end-of-run reporting and tests.
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Sections in input order (run-length, duplicates possible).
    pub feeds: Vec<FeedSummary>,
    pub total_items: u64,
    pub total_new: u64,
    /// Content files materialized this run.
    pub created_files: u64,
    /// Content files already on disk from earlier runs.
    pub cached_files: u64,
    /// Records dropped because a name sanitized to nothing.
    pub skipped_records: u64,
    /// Whether the sidebar was rendered.
    pub sidebar: bool,
}

/// Run the generator against `input`, writing the site under `base`.
///
/// The new-item cutoff is fixed here, once, at run start; a long run does
/// not reclassify items as wall-clock time passes.
pub fn generate(input: impl BufRead, base: &Path) -> Result<RunSummary, GenerateError> {
    generate_with_cutoff(input, base, Utc::now().timestamp() - NEW_WINDOW_SECS)
}

/// [`generate`] with an explicit new-item cutoff (unix seconds). Items
/// with `timestamp >= cutoff` are classified new.
pub fn generate_with_cutoff(
    input: impl BufRead,
    base: &Path,
    cutoff: i64,
) -> Result<RunSummary, GenerateError> {
    fs::create_dir_all(base).map_err(|source| GenerateError::CreateBaseDir {
        path: base.to_path_buf(),
        source,
    })?;

    let items_file = File::create(base.join("items.html")).map_err(|source| {
        GenerateError::CreateArtifact {
            name: "items.html",
            source,
        }
    })?;
    let mut items = BufWriter::new(items_file);
    items.write_all(render::ITEMS_HEADER.as_bytes())?;

    let mut registry = FeedRegistry::new();
    let mut summary = RunSummary {
        sidebar: true,
        ..RunSummary::default()
    };
    let mut seen_first_record = false;
    let mut section_open = false;

    for line in input.lines() {
        let line = line?;
        if line.is_empty() {
            continue;
        }
        let record = Record::parse(&line);

        // Single-feed heuristic: an unnamed first record disables the
        // sidebar for the whole run, and nothing re-enables it.
        if !seen_first_record {
            seen_first_record = true;
            if record.feed_name().is_empty() {
                summary.sidebar = false;
            }
        }

        if registry.needs_new_section(record.feed_name()) {
            let feed_slug = slug(record.feed_name(), SLUG_MAX);
            if feed_slug.is_empty() {
                // The previous section stays active: a later record naming
                // it continues it rather than starting over.
                eprintln!(
                    "feedframes: skipping item '{}': feed name has no usable path name",
                    record.title()
                );
                summary.skipped_records += 1;
                continue;
            }
            let feed_dir = base.join(&feed_slug);
            if !feed_dir.is_dir() {
                fs::create_dir(&feed_dir).map_err(|source| GenerateError::CreateFeedDir {
                    path: feed_dir.clone(),
                    source,
                })?;
            }
            if section_open {
                items.write_all(render::TABLE_CLOSE.as_bytes())?;
            }
            if !record.feed_name().is_empty() {
                items.write_all(
                    render::feed_heading(record.feed_name())
                        .into_string()
                        .as_bytes(),
                )?;
            }
            items.write_all(render::TABLE_OPEN.as_bytes())?;
            registry.push_section(record.feed_name(), feed_slug);
            section_open = true;
        }

        let item_slug = slug(record.title(), SLUG_MAX);
        if item_slug.is_empty() {
            eprintln!(
                "feedframes: skipping item in feed '{}': title has no usable path name",
                record.feed_name()
            );
            summary.skipped_records += 1;
            continue;
        }

        let Some(current) = registry.current() else {
            continue;
        };
        let feed_dir = base.join(&current.slug);
        let relative_path = format!("{}/{item_slug}.html", current.slug);

        match content::ensure_content_file(&feed_dir, &item_slug, &record) {
            Ok((file_path, created)) => {
                if created {
                    summary.created_files += 1;
                } else {
                    summary.cached_files += 1;
                }
                if let Err(err) = content::stamp_item_time(&file_path, record.timestamp()) {
                    eprintln!(
                        "feedframes: can't set item time on '{}': {err}",
                        file_path.display()
                    );
                }
            }
            Err(err) => {
                // The list row is still emitted; the next run retries the file.
                eprintln!(
                    "feedframes: can't write '{}': {err}",
                    feed_dir.join(format!("{item_slug}.html")).display()
                );
            }
        }

        let is_new = record.timestamp() >= cutoff;
        if let Some(feed) = registry.current_mut() {
            feed.record_item(is_new);
        }
        items.write_all(
            render::item_row(&record, &relative_path, is_new)
                .into_string()
                .as_bytes(),
        )?;
    }

    if section_open {
        items.write_all(render::TABLE_CLOSE.as_bytes())?;
    }
    items.write_all(render::ITEMS_FOOTER.as_bytes())?;
    items.flush()?;

    if summary.sidebar {
        fs::write(
            base.join("menu.html"),
            render::menu_page(&registry).into_string(),
        )
        .map_err(|source| GenerateError::CreateArtifact {
            name: "menu.html",
            source,
        })?;
    }

    summary.total_items = registry.total_items();
    summary.total_new = registry.total_new();
    fs::write(
        base.join("index.html"),
        render::index_page(summary.total_new, summary.sidebar).into_string(),
    )
    .map_err(|source| GenerateError::CreateArtifact {
        name: "index.html",
        source,
    })?;

    summary.feeds = registry
        .iter()
        .map(|f| FeedSummary {
            name: f.name.clone(),
            total: f.total,
            total_new: f.total_new,
        })
        .collect();
    Ok(summary)
}
