use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use parts_dict::config::{JobPaths, DEFAULT_CLEANED_FILE, DEFAULT_DICTIONARY_FILE};
use parts_dict::{logging, services::pipeline};
use tracing::error;

#[derive(Parser)]
#[command(name = "clean-dictionary")]
#[command(about = "Strip oil grades and other codes, drop invalid entries, dedup")]
struct Args {
    #[arg(short, long, default_value = DEFAULT_DICTIONARY_FILE)]
    input: PathBuf,

    #[arg(short, long, default_value = DEFAULT_CLEANED_FILE)]
    output: PathBuf,
}

fn main() -> Result<()> {
    logging::init();
    let args = Args::parse();

    let paths = JobPaths::new(args.input, args.output);
    pipeline::run(&paths)
        .inspect_err(|e| error!("cleaning failed: {e}"))
        .with_context(|| format!("could not clean {}", paths.input.display()))?;

    Ok(())
}
