use std::io::{self, BufRead, Write};

use crate::board::Position;
use crate::error::RecordError;
use crate::record::{OutputRecord, PuzzleRecord};

/// Verbose progress cadence, counted in emitted records.
pub const PROGRESS_INTERVAL: u64 = 10_000;

/// Run configuration, assembled by the binary from the command line.
#[derive(Debug, Clone, Default)]
pub struct ExtractOptions {
    /// Keep only records whose themes field contains `mateIn<n>`.
    pub mate_in: Option<u8>,
    /// Omit the puzzle id column from emitted rows.
    pub strip_id: bool,
    /// Write banner, progress, per-error and summary lines to the
    /// diagnostic stream.
    pub verbose: bool,
}

/// Counters accumulated over one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    /// Input lines consumed, including filtered and skipped ones.
    pub lines: u64,
    /// Output rows written.
    pub processed: u64,
}

/// Parses one trimmed line, applies the theme filter, then replays the
/// setup move. `Ok(None)` means the record was filtered out; that is the
/// expected fate of most lines and is never reported.
pub fn process_line<'a>(
    line: &'a str,
    theme_token: Option<&str>,
) -> Result<Option<OutputRecord<'a>>, RecordError> {
    let record = PuzzleRecord::parse(line)?;
    if let Some(token) = theme_token {
        if !record.has_theme(token) {
            return Ok(None);
        }
    }
    transform(&record).map(Some)
}

fn transform<'a>(record: &PuzzleRecord<'a>) -> Result<OutputRecord<'a>, RecordError> {
    let mut moves = record.moves.split_whitespace();
    let first_move = moves.next().ok_or(RecordError::EmptyMoveList)?;
    let solution = moves.collect::<Vec<_>>().join(" ");

    let mut position = Position::from_fen(record.fen)?;
    position.play_uci(first_move)?;

    Ok(OutputRecord {
        id: record.id,
        fen: position.fen(),
        solution,
        game_url: record.game_url,
        opening_tags: record.opening_tags,
        first_move,
    })
}

/// Drives one whole batch: read lines from `input`, filter and transform
/// them, write surviving rows to `out` and diagnostics to `diag`.
///
/// Per-record faults skip the record and the run continues. Errors on any
/// of the three streams abort the run.
pub fn run<R: BufRead, W: Write, D: Write>(
    input: R,
    mut out: W,
    mut diag: D,
    opts: &ExtractOptions,
) -> io::Result<RunSummary> {
    let theme_token = opts.mate_in.map(|n| format!("mateIn{n}"));
    let mut summary = RunSummary::default();

    if opts.verbose {
        writeln!(diag, "Starting processing...")?;
    }

    for line in input.lines() {
        let line = line?;
        summary.lines += 1;
        match process_line(line.trim(), theme_token.as_deref()) {
            Ok(Some(record)) => {
                writeln!(out, "{}", record.to_line(opts.strip_id))?;
                summary.processed += 1;
                if opts.verbose && summary.processed % PROGRESS_INTERVAL == 0 {
                    writeln!(
                        diag,
                        "{} puzzles processed | last move: {} | line {}",
                        summary.processed, record.first_move, summary.lines
                    )?;
                }
            }
            Ok(None) => {}
            Err(err) => {
                log::debug!("skipping line {}: {err}", summary.lines);
                if opts.verbose {
                    writeln!(diag, "ERROR line {}: {err}", summary.lines)?;
                }
            }
        }
    }

    if opts.verbose {
        writeln!(
            diag,
            "Done: {} processed out of {} lines",
            summary.processed, summary.lines
        )?;
    }
    Ok(summary)
}
