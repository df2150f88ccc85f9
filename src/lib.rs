//! # feedframes
//!
//! A static frameset website generator for feed item streams. Reads
//! TAB-separated feed records from stdin — one item per line, already
//! normalized by an upstream fetch/parse pipeline — and emits a browsable
//! site: a frameset index, a per-feed sidebar, a chronological item list,
//! and one cached content page per item.
//!
//! # Architecture: One Pass, Four Artifacts
//!
//! The generator makes a single forward pass over the record stream and
//! never looks back:
//!
//! ```text
//! stdin records ──► orchestrator ──┬──► items.html      (streamed rows)
//!                                  ├──► <feed>/<item>.html  (write-once)
//!                                  ├──► menu.html       (buffered, needs totals)
//!                                  └──► index.html      (buffered, needs totals)
//! ```
//!
//! The item list and content pages are written as records arrive; the menu
//! and index need end-of-stream totals (per-feed new-item counts, the
//! global count in the index title) and are rendered once at the end.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`record`] | TSV schema and per-line record parsing |
//! | [`slug`] | Filesystem-safe path segments from feed names and titles |
//! | [`feed`] | Ordered per-feed accumulators with run-length section tracking |
//! | [`content`] | Write-once content files, escape decoding, item-time stamping |
//! | [`urls`] | Item-link composition and sidebar anchor identifiers |
//! | [`render`] | Maud templates for all four artifacts |
//! | [`generate`] | The single-pass orchestrator and run summary |
//! | [`output`] | End-of-run CLI summary formatting |
//!
//! # Design Decisions
//!
//! ## Existence-Based Caching
//!
//! A content file on disk *is* the cache entry. Re-running the generator
//! against a grown stream costs one existence check per historical item;
//! only new items are rendered. No manifest, no hashing — deleting a file
//! re-renders its item, and partial output from an aborted run is harmless
//! because the next run fills in whatever is missing. Every pass restamps
//! each file's mtime with the item's own timestamp, so the output tree can
//! be sorted and expired by item age with ordinary filesystem tools.
//!
//! ## Run-Length Feed Sections
//!
//! Sections are maximal runs of consecutive records sharing a feed name.
//! Nothing is keyed globally by name: a name that reappears later in the
//! stream opens a second, independent section with its own counters and
//! heading. Consumers of the generated pages (and of upstream sorting
//! quirks) depend on sections mirroring the input order, so this is
//! contract, not accident.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/): compile-time
//! checked templates, type-safe interpolation, and auto-escaping by
//! default — feed titles and names are untrusted input headed straight
//! into markup. The one deliberate escape hatch is the content body, which
//! arrives as pre-rendered HTML from the upstream pipeline and is emitted
//! raw after escape-sequence decoding.
//!
//! ## Frames, Unapologetically
//!
//! The output is a classic three-pane frameset (sidebar, item list,
//! content) with zero JavaScript and one user-supplied stylesheet. The
//! layout works in anything that renders HTML, including text browsers,
//! and the generator never touches `style.css` — it only links it.

pub mod content;
pub mod feed;
pub mod generate;
pub mod output;
pub mod record;
pub mod render;
pub mod slug;
pub mod urls;
