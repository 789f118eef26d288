use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use std::fs::File;
use std::io::{self, BufReader, IsTerminal};
use std::path::PathBuf;

use mate_extract::extract::{self, ExtractOptions};

#[derive(Parser, Debug)]
#[command(
    name = "mate-extract",
    version,
    about = "Filter lichess puzzle CSV exports and recompute each FEN after the setup move",
    long_about = None
)]
struct Args {
    /// Keep only puzzles whose themes contain mateIn<N>
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u8).range(1..=5))]
    mate_in: Option<u8>,

    /// Omit the puzzle id column from the output
    #[arg(long)]
    no_id: bool,

    /// Report progress and per-line errors on stderr
    #[arg(short, long)]
    verbose: bool,

    /// Puzzle CSV to read (stdin when omitted)
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    // No file and nothing piped in: show usage instead of blocking on a tty.
    if args.input.is_none() && io::stdin().is_terminal() {
        Args::command().print_help()?;
        return Ok(());
    }

    let opts = ExtractOptions {
        mate_in: args.mate_in,
        strip_id: args.no_id,
        verbose: args.verbose,
    };

    let stdout = io::stdout();
    let stderr = io::stderr();
    let summary = match &args.input {
        Some(path) => {
            let file =
                File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
            extract::run(BufReader::new(file), stdout.lock(), stderr.lock(), &opts)?
        }
        None => extract::run(io::stdin().lock(), stdout.lock(), stderr.lock(), &opts)?,
    };
    log::debug!(
        "run complete: {} of {} lines emitted",
        summary.processed,
        summary.lines
    );

    Ok(())
}
