//! Tab-separated record parsing.
//!
//! One input line is one feed item. Fields are TAB-separated and follow a
//! fixed order shared with the upstream pipeline that produces the stream:
//!
//! ```text
//! timestamp \t formatted-time \t title \t link \t content \t content-type
//!   \t id \t author \t feed-type \t feed-name \t feed-url \t base-site-url
//! ```
//!
//! Parsing is positional only: the generator never validates field values
//! beyond indexing them, and accepted lines always expose the full field
//! count. Short lines are padded with empty strings; a line with more TABs
//! than fields keeps the remainder inside the last field.
//!
//! The `content` field may carry the escape sequences `\t`, `\n` and `\\`
//! for literal tab, newline and backslash. Those are stored verbatim here
//! and only decoded when the content page is written (see
//! [`decode_content`](crate::content::decode_content)).

/// Field delimiter for input lines.
pub const FIELD_SEPARATOR: char = '\t';

/// Number of fields in the record schema.
pub const FIELD_COUNT: usize = 12;

/// Positional field indices of the shared TSV schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    UnixTimestamp = 0,
    TimeFormatted,
    Title,
    Link,
    Content,
    ContentType,
    Id,
    Author,
    FeedType,
    FeedName,
    FeedUrl,
    BaseSiteUrl,
}

/// One parsed input line.
///
/// A `Record` is ephemeral: it lives for a single iteration of the
/// orchestrator loop and owns its field strings, so nothing borrows from
/// the input buffer.
#[derive(Debug, Clone)]
pub struct Record {
    fields: [String; FIELD_COUNT],
}

impl Record {
    /// Split one line into the fixed-arity field array.
    ///
    /// Missing trailing fields become empty strings. The last field soaks
    /// up any remainder, delimiters included.
    pub fn parse(line: &str) -> Record {
        let mut fields: [String; FIELD_COUNT] = std::array::from_fn(|_| String::new());
        let mut parts = line.splitn(FIELD_COUNT, FIELD_SEPARATOR);
        for slot in fields.iter_mut() {
            match parts.next() {
                Some(part) => *slot = part.to_string(),
                None => break,
            }
        }
        Record { fields }
    }

    /// Raw access by field index.
    pub fn field(&self, field: Field) -> &str {
        &self.fields[field as usize]
    }

    /// Item timestamp in unix seconds. Unparseable values yield 0 (epoch),
    /// which classifies the item as old.
    pub fn timestamp(&self) -> i64 {
        self.field(Field::UnixTimestamp).parse().unwrap_or(0)
    }

    pub fn time_formatted(&self) -> &str {
        self.field(Field::TimeFormatted)
    }

    pub fn title(&self) -> &str {
        self.field(Field::Title)
    }

    pub fn link(&self) -> &str {
        self.field(Field::Link)
    }

    /// Raw content with escape sequences still encoded.
    pub fn content(&self) -> &str {
        self.field(Field::Content)
    }

    pub fn feed_name(&self) -> &str {
        self.field(Field::FeedName)
    }

    pub fn feed_url(&self) -> &str {
        self.field(Field::FeedUrl)
    }

    /// Optional base-URL override; empty when the feed URL should be used.
    pub fn base_site_url(&self) -> &str {
        self.field(Field::BaseSiteUrl)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(fields: &[&str]) -> String {
        fields.join("\t")
    }

    #[test]
    fn parses_all_twelve_fields() {
        let r = Record::parse(&line(&[
            "1400000000",
            "2014-05-13 18:53",
            "A Title",
            "http://example.org/post",
            "body",
            "html",
            "id-1",
            "author",
            "rss",
            "Example Feed",
            "http://example.org/feed.xml",
            "http://example.org/",
        ]));
        assert_eq!(r.timestamp(), 1_400_000_000);
        assert_eq!(r.time_formatted(), "2014-05-13 18:53");
        assert_eq!(r.title(), "A Title");
        assert_eq!(r.link(), "http://example.org/post");
        assert_eq!(r.content(), "body");
        assert_eq!(r.feed_name(), "Example Feed");
        assert_eq!(r.feed_url(), "http://example.org/feed.xml");
        assert_eq!(r.base_site_url(), "http://example.org/");
    }

    #[test]
    fn short_line_pads_with_empty_fields() {
        let r = Record::parse("123\t2009-01-01 00:00\tTitle");
        assert_eq!(r.title(), "Title");
        assert_eq!(r.link(), "");
        assert_eq!(r.feed_name(), "");
        assert_eq!(r.base_site_url(), "");
    }

    #[test]
    fn empty_line_is_all_empty_fields() {
        let r = Record::parse("");
        assert_eq!(r.field(Field::UnixTimestamp), "");
        assert_eq!(r.timestamp(), 0);
        assert_eq!(r.feed_name(), "");
    }

    #[test]
    fn excess_delimiters_stay_in_last_field() {
        let mut fields = vec!["0"; FIELD_COUNT];
        fields[FIELD_COUNT - 1] = "tail";
        let r = Record::parse(&format!("{}\textra\tmore", line(&fields)));
        assert_eq!(r.base_site_url(), "tail\textra\tmore");
    }

    #[test]
    fn bad_timestamp_is_epoch() {
        let r = Record::parse("not-a-number\tx\ty");
        assert_eq!(r.timestamp(), 0);
    }

    #[test]
    fn content_keeps_escape_sequences_verbatim() {
        let r = Record::parse("0\t\tT\tL\tline one\\nline two\\t\\\\");
        assert_eq!(r.content(), "line one\\nline two\\t\\\\");
    }
}
