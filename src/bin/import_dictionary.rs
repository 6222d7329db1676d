use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use parts_dict::config::{JobPaths, DEFAULT_DICTIONARY_FILE, DEFAULT_SAMPLE_SIZE};
use parts_dict::{logging, services::importer};
use tracing::error;

#[derive(Parser)]
#[command(name = "import-dictionary")]
#[command(about = "Convert a two-column Mongolian/English spreadsheet into dictionary JSON")]
#[command(after_help = "Example:\n  import-dictionary mongolian_dictionary.xlsx")]
struct Args {
    /// Spreadsheet (.xlsx, .xls, .ods) or .csv/.tsv export
    spreadsheet: PathBuf,

    #[arg(short, long, default_value = DEFAULT_DICTIONARY_FILE)]
    output: PathBuf,

    /// How many converted entries to echo after writing
    #[arg(long, default_value_t = DEFAULT_SAMPLE_SIZE)]
    sample: usize,
}

fn main() -> Result<()> {
    logging::init();
    let args = Args::parse();

    let paths = JobPaths::new(args.spreadsheet, args.output);
    importer::run(&paths, args.sample)
        .inspect_err(|e| error!("conversion failed: {e}"))
        .with_context(|| format!("could not convert {}", paths.input.display()))?;

    Ok(())
}
