use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use parts_dict::config::{JobPaths, DEFAULT_DICTIONARY_FILE, DEFAULT_EXPANDED_FILE};
use parts_dict::{logging, services::abbreviations};
use tracing::error;

#[derive(Parser)]
#[command(name = "expand-abbreviations")]
#[command(about = "Expand whole-word FR/RR to FRONT/REAR in every entry")]
struct Args {
    #[arg(short, long, default_value = DEFAULT_DICTIONARY_FILE)]
    input: PathBuf,

    #[arg(short, long, default_value = DEFAULT_EXPANDED_FILE)]
    output: PathBuf,
}

fn main() -> Result<()> {
    logging::init();
    let args = Args::parse();

    let paths = JobPaths::new(args.input, args.output);
    abbreviations::run(&paths)
        .inspect_err(|e| error!("expansion failed: {e}"))
        .with_context(|| format!("could not expand {}", paths.input.display()))?;

    Ok(())
}
