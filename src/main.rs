use clap::Parser;
use feedframes::{generate, output};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "feedframes")]
#[command(about = "Generate a static frameset website from feed item records")]
#[command(long_about = "\
Generate a static frameset website from feed item records

Reads TAB-separated feed items from stdin, one per line, grouped into
consecutive per-feed sections by their feed-name field:

  timestamp, formatted time, title, link, content, content-type,
  id, author, feed-type, feed-name, feed-url, base-site-url

and writes a browsable site under BASE_DIR:

  BASE_DIR/
  ├── index.html                    # frameset: sidebar, items, content panes
  ├── menu.html                     # per-feed sidebar (omitted when the
  │                                 #   first record's feed name is empty)
  ├── items.html                    # chronological item list, one section
  │                                 #   per run of same-named records
  └── <feed>/<item>.html            # per-item content page, written once;
                                    #   mtime is the item's timestamp

Content pages are never rewritten: their presence on disk is the cache,
so re-running against a grown stream only materializes new items. Styling
comes from a style.css placed next to BASE_DIR.")]
#[command(version)]
struct Cli {
    /// Output directory for the generated site
    #[arg(default_value = ".")]
    base: PathBuf,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match generate::generate(io::stdin().lock(), &cli.base) {
        Ok(summary) => {
            output::print_run_summary(&summary);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("feedframes: {err}");
            ExitCode::FAILURE
        }
    }
}
