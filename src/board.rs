use shakmaty::fen::Fen;
use shakmaty::uci::UciMove;
use shakmaty::{CastlingMode, Chess, EnPassantMode, Position as _, PositionError};

use crate::error::RecordError;

/// Thin adapter over the chess-rules crate. Everything the pipeline needs
/// from a board goes through here: parse a FEN, play one UCI move, write the
/// FEN back out. No other module names a rules type.
#[derive(Clone, Debug)]
pub struct Position {
    pos: Chess,
}

impl Position {
    /// Parses a FEN into a playable standard-chess position. Material that
    /// could not arise from legal play is accepted, as in the puzzle
    /// exports; boards that are outright unusable (no kings, both sides in
    /// check) are rejected.
    pub fn from_fen(fen: &str) -> Result<Self, RecordError> {
        let setup: Fen = fen
            .trim()
            .parse()
            .map_err(|_| RecordError::InvalidFen(fen.trim().to_string()))?;
        let pos = setup
            .into_position::<Chess>(CastlingMode::Standard)
            .or_else(PositionError::ignore_too_much_material)
            .or_else(PositionError::ignore_impossible_check)
            .map_err(|e| RecordError::InvalidFen(e.to_string()))?;
        Ok(Self { pos })
    }

    /// Applies one move in UCI notation (castling as `e1g1`, promotion as
    /// `e7e8q`). The move must be legal from the current position.
    pub fn play_uci(&mut self, token: &str) -> Result<(), RecordError> {
        let uci: UciMove = token
            .parse()
            .map_err(|_| RecordError::IllegalMove(token.to_string()))?;
        let mv = uci
            .to_move(&self.pos)
            .map_err(|_| RecordError::IllegalMove(token.to_string()))?;
        self.pos.play_unchecked(mv);
        Ok(())
    }

    /// Serializes the position. The en passant square is written only when
    /// an en passant capture is actually legal, so re-parsing and
    /// re-serializing an emitted FEN is a fixed point.
    pub fn fen(&self) -> String {
        Fen::from_position(&self.pos, EnPassantMode::Legal).to_string()
    }
}
