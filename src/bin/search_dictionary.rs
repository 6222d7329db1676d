use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use parts_dict::config::{DEFAULT_DICTIONARY_FILE, DEFAULT_SEARCH_LIMIT};
use parts_dict::logging;
use parts_dict::services::search::{self, SearchDirection};
use parts_dict::services::store;
use tracing::info;

#[derive(Parser)]
#[command(name = "search-dictionary")]
#[command(about = "Look up parts terms in either language")]
struct Args {
    query: String,

    #[arg(short, long, default_value = DEFAULT_DICTIONARY_FILE)]
    input: PathBuf,

    /// mongolian, english or both
    #[arg(short, long, default_value = "both")]
    direction: SearchDirection,

    #[arg(short, long, default_value_t = DEFAULT_SEARCH_LIMIT)]
    limit: usize,
}

fn main() -> Result<()> {
    logging::init();
    let args = Args::parse();

    let entries = store::load(&args.input)
        .with_context(|| format!("could not load {}", args.input.display()))?;
    info!("loaded {} dictionary entries", entries.len());

    let results = search::search(&entries, &args.query, args.direction, args.limit);
    if results.total == 0 {
        println!("No results for '{}'", args.query.trim());
        return Ok(());
    }

    let plural = if results.total == 1 { "" } else { "s" };
    println!("{} result{plural}", results.total);
    for hit in &results.hits {
        println!("{}\t{}", hit.entry.mongolian, hit.entry.english);
    }

    Ok(())
}
