//! HTML rendering for the four output artifacts.
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time templates with
//! automatic escaping — feed names and titles come from untrusted feed
//! data and are interpolated into markup, so auto-escaping is the XSS
//! boundary of the whole generator.
//!
//! ## Streamed vs buffered documents
//!
//! `items.html` is written incrementally while records are consumed, so
//! its scaffold (document header/footer, table open/close) is exposed as
//! raw string chunks; the headings and rows in between are balanced maud
//! fragments. The menu and index need totals only known at end of stream
//! and are rendered as whole documents.
//!
//! ## Output shape
//!
//! Every document links the shared `style.css` that lives next to the
//! output base directory (`../style.css`, content pages `../../style.css`)
//! and declares UTF-8. The index is a frameset: an optional 200px sidebar
//! pane, then item-list and content panes splitting the rest 50/50. Item
//! and menu links target the `content` and `items` frames by name.

use crate::content::decode_content;
use crate::feed::FeedRegistry;
use crate::record::Record;
use crate::urls;
use maud::{DOCTYPE, Markup, PreEscaped, html};

/// Opening scaffold of the streamed item-list document.
pub const ITEMS_HEADER: &str = concat!(
    "<html><head>",
    "<link rel=\"stylesheet\" type=\"text/css\" href=\"../style.css\" />",
    "<meta http-equiv=\"Content-Type\" content=\"text/html; charset=UTF-8\" />",
    "</head><body class=\"frame\"><div id=\"items\">"
);

/// Closing scaffold of the streamed item-list document.
pub const ITEMS_FOOTER: &str = "\n</div></body>\n</html>";

/// Opens one per-feed item table.
pub const TABLE_OPEN: &str = "<table cellpadding=\"0\" cellspacing=\"0\">\n";

/// Closes one per-feed item table.
pub const TABLE_CLOSE: &str = "</table>\n";

/// Section heading for a feed with a non-empty name, self-linked through
/// its anchor id so the sidebar can jump to it.
pub fn feed_heading(feed_name: &str) -> Markup {
    let anchor = urls::anchor_id(feed_name);
    html! {
        h2 id=(anchor) {
            a href={ "#" (anchor) } { (feed_name) }
        }
        "\n"
    }
}

/// One row of the item list: display time, then a link into the content
/// pane, bold/underlined when the item is new.
pub fn item_row(record: &Record, relative_path: &str, is_new: bool) -> Markup {
    let link = html! {
        a href=(relative_path) target="content" { (record.title()) }
    };
    html! {
        tr class=[is_new.then_some("n")] {
            td nowrap valign="top" { (record.time_formatted()) }
            td nowrap valign="top" {
                @if is_new {
                    b { u { (link) } }
                } @else {
                    (link)
                }
            }
        }
        "\n"
    }
}

/// The sidebar menu: one link per named feed section, showing the section
/// name and its new-item count, emphasized when anything is new.
pub fn menu_page(registry: &FeedRegistry) -> Markup {
    html! {
        html {
            head {
                link rel="stylesheet" type="text/css" href="../style.css";
                meta http-equiv="Content-Type" content="text/html; charset=UTF-8";
            }
            body class="frame" {
                div id="sidebar" {
                    @for feed in registry.iter() {
                        @if !feed.name.is_empty() {
                            @let label = html! { (feed.name) " (" (feed.total_new) ")" };
                            a class=[(feed.total_new > 0).then_some("n")]
                                href={ "items.html#" (urls::anchor_id(&feed.name)) }
                                target="items" {
                                @if feed.total_new > 0 {
                                    b { u { (label) } }
                                } @else {
                                    (label)
                                }
                            }
                            br;
                            "\n"
                        }
                    }
                }
            }
        }
    }
}

/// The frameset index. The title carries the global new-item count; the
/// sidebar pane is present only when sidebar display is enabled.
pub fn index_page(total_new: u64, show_sidebar: bool) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                title { "Newsfeed (" (total_new) ")" }
                link rel="stylesheet" type="text/css" href="../style.css";
                meta http-equiv="Content-Type" content="text/html; charset=UTF-8";
            }
            @if show_sidebar {
                frameset framespacing="0" cols="200,*" frameborder="1" {
                    frame name="menu" src="menu.html" target="menu";
                    (panes())
                }
            } @else {
                frameset framespacing="0" cols="*" frameborder="1" {
                    (panes())
                }
            }
        }
    }
}

/// Item-list and content panes, shared by both index variants.
fn panes() -> Markup {
    html! {
        frameset id="frameset" framespacing="0" cols="50%,50%" frameborder="1" {
            frame name="items" src="items.html" target="items";
            frame name="content" target="content";
        }
    }
}

/// A self-contained per-item content page: a heading linking back to the
/// item and the decoded content body.
///
/// The link base is the base-site-URL override when present, otherwise
/// the feed URL. The content field is trusted pre-rendered HTML from the
/// upstream pipeline and is emitted unescaped after sequence decoding.
pub fn content_page(record: &Record) -> Markup {
    let base = if record.base_site_url().is_empty() {
        record.feed_url()
    } else {
        record.base_site_url()
    };
    let href = urls::resolve_link(record.link(), base);
    html! {
        html {
            head {
                link rel="stylesheet" type="text/css" href="../../style.css";
                meta http-equiv="Content-Type" content="text/html; charset=UTF-8";
            }
            body class="frame" {
                div class="content" {
                    h2 { a href=(href) { (record.title()) } }
                    (PreEscaped(decode_content(record.content())))
                }
            }
        }
    }
}
