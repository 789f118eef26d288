use crate::error::RecordError;

/// Column count of the lichess puzzle export:
/// `PuzzleId,FEN,Moves,Rating,RatingDeviation,Popularity,NbPlays,Themes,GameUrl,OpeningTags`.
///
/// The split is bounded at this count so any further commas stay inside the
/// final opening-tags field.
pub const FIELD_COUNT: usize = 10;

/// One parsed input row, borrowing from the line it was split from.
///
/// The four rating/popularity columns are never interpreted; they only take
/// up positions between the moves and the themes.
#[derive(Debug)]
pub struct PuzzleRecord<'a> {
    pub id: &'a str,
    pub fen: &'a str,
    pub moves: &'a str,
    pub themes: &'a str,
    pub game_url: &'a str,
    pub opening_tags: &'a str,
}

impl<'a> PuzzleRecord<'a> {
    pub fn parse(line: &'a str) -> Result<Self, RecordError> {
        let fields: Vec<&'a str> = line.splitn(FIELD_COUNT, ',').collect();
        if fields.len() < FIELD_COUNT {
            return Err(RecordError::FieldCount(fields.len()));
        }
        Ok(Self {
            id: fields[0],
            fen: fields[1],
            moves: fields[2],
            themes: fields[7],
            game_url: fields[8],
            opening_tags: fields[9],
        })
    }

    /// Substring test used by the mate-in-N filter ("mateIn2" and friends).
    pub fn has_theme(&self, token: &str) -> bool {
        self.themes.contains(token)
    }
}

/// Row emitted for a record that survived filtering and move application.
#[derive(Debug)]
pub struct OutputRecord<'a> {
    pub id: &'a str,
    pub fen: String,
    pub solution: String,
    pub game_url: &'a str,
    pub opening_tags: &'a str,
    /// The move that was applied to reach `fen`. Shown in progress
    /// diagnostics, never emitted.
    pub first_move: &'a str,
}

impl OutputRecord<'_> {
    pub fn to_line(&self, strip_id: bool) -> String {
        if strip_id {
            format!(
                "{},{},{},{}",
                self.fen, self.solution, self.game_url, self.opening_tags
            )
        } else {
            format!(
                "{},{},{},{},{}",
                self.id, self.fen, self.solution, self.game_url, self.opening_tags
            )
        }
    }
}
