//! CLI output formatting for the end-of-run summary.
//!
//! One line per feed section in input order, then totals. The format
//! function is pure (returns `Vec<String>`) so tests can assert on it;
//! the `print_` wrapper writes stdout.
//!
//! ```text
//! 001 Planet Venus (12 items, 2 new)
//! 002 Dusty Tapes (3 items, 0 new)
//! Generated 2 feeds, 15 items (2 new); 4 content files written, 11 cached
//! ```

use crate::generate::RunSummary;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Render the run summary as display lines.
pub fn format_run_summary(summary: &RunSummary) -> Vec<String> {
    let mut lines = Vec::new();

    for (idx, feed) in summary.feeds.iter().enumerate() {
        let name = if feed.name.is_empty() {
            "(unnamed feed)"
        } else {
            feed.name.as_str()
        };
        lines.push(format!(
            "{} {} ({} items, {} new)",
            format_index(idx + 1),
            name,
            feed.total,
            feed.total_new
        ));
    }

    lines.push(format!(
        "Generated {} feeds, {} items ({} new); {} content files written, {} cached",
        summary.feeds.len(),
        summary.total_items,
        summary.total_new,
        summary.created_files,
        summary.cached_files
    ));

    if summary.skipped_records > 0 {
        lines.push(format!(
            "Skipped {} records with no usable name",
            summary.skipped_records
        ));
    }
    if !summary.sidebar {
        lines.push("Sidebar disabled (unnamed first feed)".to_string());
    }

    lines
}

/// Print the run summary to stdout.
pub fn print_run_summary(summary: &RunSummary) {
    for line in format_run_summary(summary) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::FeedSummary;

    fn summary() -> RunSummary {
        RunSummary {
            feeds: vec![
                FeedSummary {
                    name: "Planet Venus".into(),
                    total: 12,
                    total_new: 2,
                },
                FeedSummary {
                    name: "".into(),
                    total: 3,
                    total_new: 0,
                },
            ],
            total_items: 15,
            total_new: 2,
            created_files: 4,
            cached_files: 11,
            skipped_records: 0,
            sidebar: true,
        }
    }

    #[test]
    fn one_line_per_feed_plus_totals() {
        let lines = format_run_summary(&summary());
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "001 Planet Venus (12 items, 2 new)");
        assert_eq!(lines[1], "002 (unnamed feed) (3 items, 0 new)");
        assert_eq!(
            lines[2],
            "Generated 2 feeds, 15 items (2 new); 4 content files written, 11 cached"
        );
    }

    #[test]
    fn skips_and_sidebar_notes_appear_when_relevant() {
        let mut s = summary();
        s.skipped_records = 2;
        s.sidebar = false;
        let lines = format_run_summary(&s);
        assert!(lines.contains(&"Skipped 2 records with no usable name".to_string()));
        assert!(lines.contains(&"Sidebar disabled (unnamed first feed)".to_string()));
    }

    #[test]
    fn empty_run_is_just_the_totals_line() {
        let s = RunSummary {
            sidebar: true,
            ..RunSummary::default()
        };
        let lines = format_run_summary(&s);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("Generated 0 feeds"));
    }
}
