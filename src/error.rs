use thiserror::Error;

/// Why a single input line could not be turned into an output row.
///
/// These are per-record faults: the pipeline reports them (in verbose mode)
/// and moves on to the next line. Only stream I/O failures abort a run, and
/// those travel as `std::io::Error`.
#[derive(Debug, Error)]
pub enum RecordError {
    /// The bounded comma split produced too few fields.
    #[error("expected {total} comma-separated fields, found {0}", total = crate::record::FIELD_COUNT)]
    FieldCount(usize),

    /// The moves field held no whitespace-separated tokens.
    #[error("empty move list")]
    EmptyMoveList,

    /// The position field was not a well-formed, legal FEN.
    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    /// The first move token was unparseable or not legal from the position.
    #[error("illegal move {0}")]
    IllegalMove(String),
}
