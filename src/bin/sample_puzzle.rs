use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

// Picks one row, uniformly at random, from a transformed puzzle CSV (the
// output of mate-extract) and prints it as a JSON object.
//
// Usage:
//   mate-extract --mate-in 2 lichess_db_puzzle.csv > mat2.csv
//   sample_puzzle mat2.csv
//   sample_puzzle --no-id --seed 7 mat2-noid.csv

#[derive(Parser, Debug)]
#[command(
    name = "sample_puzzle",
    version,
    about = "Print one random puzzle from a transformed CSV as JSON",
    long_about = None
)]
struct Args {
    /// Input rows carry no leading id column
    #[arg(long)]
    no_id: bool,

    /// Seed for reproducible selection
    #[arg(long)]
    seed: Option<u64>,

    /// Transformed puzzle CSV (stdin when omitted)
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct SamplePuzzle {
    id: Option<String>,
    fen: String,
    solution: String,
    url: String,
    opening: String,
    turn: char,
}

/// Splits one transformed row back into its columns. The bounded split
/// keeps commas inside the trailing opening-tags column; that column may
/// also be missing entirely on old exports.
fn parse_row(line: &str, no_id: bool) -> Result<SamplePuzzle> {
    let bound = if no_id { 4 } else { 5 };
    let fields: Vec<&str> = line.splitn(bound, ',').collect();
    if fields.len() + 1 < bound {
        bail!(
            "row has {} of at least {} expected fields: {line}",
            fields.len(),
            bound - 1
        );
    }

    let base = if no_id { 0 } else { 1 };
    let id = (!no_id).then(|| fields[0].to_string());
    let fen = fields[base].to_string();
    let turn = fen
        .split_whitespace()
        .nth(1)
        .and_then(|side| side.chars().next())
        .unwrap_or('w');
    Ok(SamplePuzzle {
        id,
        fen,
        solution: fields[base + 1].to_string(),
        url: fields[base + 2].to_string(),
        opening: fields
            .get(base + 3)
            .copied()
            .unwrap_or("")
            .replace('_', " "),
        turn,
    })
}

/// Single-pass uniform choice over the non-blank lines of a reader.
fn reservoir_pick<R: BufRead>(input: R, rng: &mut SmallRng) -> io::Result<Option<String>> {
    let mut choice = None;
    let mut seen: u64 = 0;
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        seen += 1;
        if rng.gen_range(0..seen) == 0 {
            choice = Some(line);
        }
    }
    Ok(choice)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut rng = match args.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };

    let picked = match &args.input {
        Some(path) => {
            let file =
                File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
            reservoir_pick(BufReader::new(file), &mut rng)?
        }
        None => reservoir_pick(io::stdin().lock(), &mut rng)?,
    };

    let Some(line) = picked else {
        bail!("no puzzles in input");
    };
    let puzzle = parse_row(line.trim(), args.no_id)?;
    println!("{}", serde_json::to_string(&puzzle)?);
    Ok(())
}
