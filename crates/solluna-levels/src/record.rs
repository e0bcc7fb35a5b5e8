use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use solluna_core::{
    CELL_COUNT, Difficulty, ParseDifficultyError, Position, PositionSet, Symbol, SymbolGrid, rules,
};
use solluna_generator::GeneratedLevel;
use time::{OffsetDateTime, format_description::well_known::Rfc3339};

/// A stored level: a carved puzzle and its solution, keyed by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelRecord {
    /// Store key.
    pub id: u32,
    /// Difficulty the level was carved at.
    pub difficulty: Difficulty,
    /// The carved puzzle, clues only.
    pub puzzle: SymbolGrid,
    /// The unique completion of the puzzle.
    pub solution: SymbolGrid,
    /// When the level was generated.
    pub created_at: OffsetDateTime,
}

impl LevelRecord {
    /// Wraps a freshly generated level for storage.
    #[must_use]
    pub fn from_generated(id: u32, level: &GeneratedLevel, created_at: OffsetDateTime) -> Self {
        Self {
            id,
            difficulty: level.difficulty,
            puzzle: level.puzzle.clone(),
            solution: level.solution.clone(),
            created_at,
        }
    }
}

/// Wire form of a [`LevelRecord`].
///
/// Boards travel as arrays of [`CellDto`] and the timestamp as an RFC 3339
/// string. Conversion back into the domain type validates everything; the
/// DTO itself accepts any well-formed JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelRecordDto {
    /// Store key.
    pub id: u32,
    /// Difficulty name, for example `"medium"` or `"very-hard"`.
    pub difficulty: String,
    /// The carved puzzle as one entry per cell.
    pub initial_state: Vec<CellDto>,
    /// The solution as one entry per cell.
    pub solution: Vec<CellDto>,
    /// RFC 3339 creation timestamp.
    pub created_at: String,
}

/// Wire form of one board cell.
///
/// `isHint` and `isInvalid` are transient play flags. They are always
/// written as `false` and tolerated but ignored on the way back in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellDto {
    /// Row-major cell index in `0..36`.
    pub index: usize,
    /// The symbol in the cell, absent when empty.
    #[serde(default)]
    pub symbol: Option<SymbolDto>,
    /// Whether the cell is a puzzle clue.
    pub locked: bool,
    /// Transient hint highlight flag.
    #[serde(default)]
    pub is_hint: bool,
    /// Transient rule violation flag.
    #[serde(default)]
    pub is_invalid: bool,
}

/// Wire form of a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolDto {
    /// A sun.
    Sun,
    /// A moon.
    Moon,
}

impl From<Symbol> for SymbolDto {
    fn from(symbol: Symbol) -> Self {
        match symbol {
            Symbol::Sun => Self::Sun,
            Symbol::Moon => Self::Moon,
        }
    }
}

impl From<SymbolDto> for Symbol {
    fn from(symbol: SymbolDto) -> Self {
        match symbol {
            SymbolDto::Sun => Self::Sun,
            SymbolDto::Moon => Self::Moon,
        }
    }
}

/// Reason a wire-level record could not be turned into a [`LevelRecord`].
#[derive(Debug, Display, Error)]
pub enum LevelDtoError {
    /// The difficulty name is not one of the four known levels.
    #[display("{_0}")]
    Difficulty(ParseDifficultyError),
    /// The creation timestamp is not valid RFC 3339.
    #[display("bad created_at timestamp: {_0}")]
    TimestampParse(time::error::Parse),
    /// The creation timestamp cannot be rendered as RFC 3339.
    #[display("created_at cannot be formatted: {_0}")]
    TimestampFormat(time::error::Format),
    /// A board does not carry exactly one entry per cell.
    #[display("expected {CELL_COUNT} cells, found {found}")]
    WrongCellCount {
        /// Number of entries in the offending array.
        found: usize,
    },
    /// A cell index falls outside the board.
    #[display("cell index {index} is out of range")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
    },
    /// Two entries name the same cell.
    #[display("cell index {index} appears twice")]
    DuplicateIndex {
        /// The repeated index.
        index: usize,
    },
    /// A clue cell in the puzzle has no symbol.
    #[display("locked cell {index} has no symbol")]
    LockedWithoutSymbol {
        /// The offending index.
        index: usize,
    },
    /// A non-clue cell in the puzzle carries a symbol.
    #[display("unlocked cell {index} carries a symbol")]
    UnlockedWithSymbol {
        /// The offending index.
        index: usize,
    },
    /// A solution cell is empty.
    #[display("solution cell {index} is empty")]
    IncompleteSolution {
        /// The offending index.
        index: usize,
    },
    /// The solution board does not satisfy the placement rules.
    #[display("solution does not satisfy the rules")]
    InvalidSolution,
    /// A puzzle clue disagrees with the solution.
    #[display("clue at index {index} contradicts the solution")]
    ClueMismatch {
        /// The offending index.
        index: usize,
    },
}

impl From<ParseDifficultyError> for LevelDtoError {
    fn from(error: ParseDifficultyError) -> Self {
        Self::Difficulty(error)
    }
}

impl From<time::error::Parse> for LevelDtoError {
    fn from(error: time::error::Parse) -> Self {
        Self::TimestampParse(error)
    }
}

impl From<time::error::Format> for LevelDtoError {
    fn from(error: time::error::Format) -> Self {
        Self::TimestampFormat(error)
    }
}

impl TryFrom<&LevelRecord> for LevelRecordDto {
    type Error = LevelDtoError;

    fn try_from(record: &LevelRecord) -> Result<Self, LevelDtoError> {
        let created_at = record.created_at.format(&Rfc3339)?;
        Ok(Self {
            id: record.id,
            difficulty: record.difficulty.to_string(),
            initial_state: write_board(&record.puzzle, &record.puzzle),
            solution: write_board(&record.solution, &record.puzzle),
            created_at,
        })
    }
}

impl TryFrom<LevelRecordDto> for LevelRecord {
    type Error = LevelDtoError;

    fn try_from(value: LevelRecordDto) -> Result<Self, LevelDtoError> {
        let difficulty = value.difficulty.parse()?;
        let created_at = OffsetDateTime::parse(&value.created_at, &Rfc3339)?;

        let puzzle = read_board(&value.initial_state, BoardKind::Puzzle)?;
        let solution = read_board(&value.solution, BoardKind::Solution)?;

        if !rules::is_fully_valid(&solution) {
            return Err(LevelDtoError::InvalidSolution);
        }
        for pos in Position::ALL {
            if let Some(clue) = puzzle[pos]
                && solution[pos] != Some(clue)
            {
                return Err(LevelDtoError::ClueMismatch { index: pos.index() });
            }
        }

        Ok(Self {
            id: value.id,
            difficulty,
            puzzle,
            solution,
            created_at,
        })
    }
}

#[derive(Debug, Clone, Copy)]
enum BoardKind {
    Puzzle,
    Solution,
}

fn write_board(board: &SymbolGrid, clues: &SymbolGrid) -> Vec<CellDto> {
    Position::ALL
        .into_iter()
        .map(|pos| CellDto {
            index: pos.index(),
            symbol: board[pos].map(SymbolDto::from),
            locked: clues[pos].is_some(),
            is_hint: false,
            is_invalid: false,
        })
        .collect()
}

fn read_board(cells: &[CellDto], kind: BoardKind) -> Result<SymbolGrid, LevelDtoError> {
    if cells.len() != CELL_COUNT {
        return Err(LevelDtoError::WrongCellCount { found: cells.len() });
    }
    let mut grid = SymbolGrid::new();
    let mut seen = PositionSet::EMPTY;
    for cell in cells {
        if cell.index >= CELL_COUNT {
            return Err(LevelDtoError::IndexOutOfRange { index: cell.index });
        }
        let pos = Position::from_index(cell.index);
        if seen.contains(pos) {
            return Err(LevelDtoError::DuplicateIndex { index: cell.index });
        }
        seen.insert(pos);
        match kind {
            BoardKind::Puzzle => {
                if cell.locked && cell.symbol.is_none() {
                    return Err(LevelDtoError::LockedWithoutSymbol { index: cell.index });
                }
                if !cell.locked && cell.symbol.is_some() {
                    return Err(LevelDtoError::UnlockedWithSymbol { index: cell.index });
                }
            }
            BoardKind::Solution => {
                if cell.symbol.is_none() {
                    return Err(LevelDtoError::IncompleteSolution { index: cell.index });
                }
            }
        }
        grid.set(pos, cell.symbol.map(Symbol::from));
    }
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> LevelRecord {
        let puzzle: SymbolGrid = "SSMSM. MMSMS. SSMSM. MMSMS. SSMSM. MMSMS.".parse().unwrap();
        let solution: SymbolGrid = "SSMSMM MMSMSS SSMSMM MMSMSS SSMSMM MMSMSS".parse().unwrap();
        LevelRecord {
            id: 7,
            difficulty: Difficulty::Medium,
            puzzle,
            solution,
            created_at: OffsetDateTime::from_unix_timestamp(1_600_000_000).unwrap(),
        }
    }

    fn sample_dto() -> LevelRecordDto {
        LevelRecordDto::try_from(&sample_record()).unwrap()
    }

    #[test]
    fn dto_round_trips_through_json() {
        let record = sample_record();
        let dto = LevelRecordDto::try_from(&record).unwrap();
        let json = serde_json::to_string(&dto).unwrap();
        let parsed: LevelRecordDto = serde_json::from_str(&json).unwrap();
        let restored = LevelRecord::try_from(parsed).unwrap();
        assert_eq!(restored, record);
    }

    #[test]
    fn wire_field_names_match_the_store() {
        let value = serde_json::to_value(sample_dto()).unwrap();
        assert_eq!(value["difficulty"], "medium");
        assert_eq!(value["created_at"], "2020-09-13T12:26:40Z");

        let clue = &value["initial_state"][0];
        assert_eq!(clue["index"], 0);
        assert_eq!(clue["symbol"], "sun");
        assert_eq!(clue["locked"], true);
        assert_eq!(clue["isHint"], false);
        assert_eq!(clue["isInvalid"], false);

        let hole = &value["initial_state"][5];
        assert_eq!(hole["symbol"], serde_json::Value::Null);
        assert_eq!(hole["locked"], false);
    }

    #[test]
    fn transient_flags_default_when_absent() {
        let cell: CellDto = serde_json::from_str(r#"{"index": 3, "locked": false}"#).unwrap();
        assert_eq!(cell.symbol, None);
        assert!(!cell.is_hint);
        assert!(!cell.is_invalid);
    }

    #[test]
    fn cell_count_is_enforced() {
        let mut dto = sample_dto();
        dto.initial_state.pop();
        assert!(matches!(
            LevelRecord::try_from(dto),
            Err(LevelDtoError::WrongCellCount { found: 35 }),
        ));
    }

    #[test]
    fn indices_must_be_unique_and_in_range() {
        let mut dto = sample_dto();
        dto.solution[1].index = 0;
        assert!(matches!(
            LevelRecord::try_from(dto),
            Err(LevelDtoError::DuplicateIndex { index: 0 }),
        ));

        let mut dto = sample_dto();
        dto.solution[1].index = CELL_COUNT;
        assert!(matches!(
            LevelRecord::try_from(dto),
            Err(LevelDtoError::IndexOutOfRange { index: CELL_COUNT }),
        ));
    }

    #[test]
    fn clue_flags_must_match_symbols() {
        let mut dto = sample_dto();
        dto.initial_state[0].symbol = None;
        assert!(matches!(
            LevelRecord::try_from(dto),
            Err(LevelDtoError::LockedWithoutSymbol { index: 0 }),
        ));

        let mut dto = sample_dto();
        dto.initial_state[5].symbol = Some(SymbolDto::Sun);
        assert!(matches!(
            LevelRecord::try_from(dto),
            Err(LevelDtoError::UnlockedWithSymbol { index: 5 }),
        ));
    }

    #[test]
    fn solutions_must_be_complete_and_valid() {
        let mut dto = sample_dto();
        dto.solution[0].symbol = None;
        assert!(matches!(
            LevelRecord::try_from(dto),
            Err(LevelDtoError::IncompleteSolution { index: 0 }),
        ));

        let mut dto = sample_dto();
        for cell in &mut dto.solution {
            cell.symbol = Some(SymbolDto::Sun);
        }
        assert!(matches!(
            LevelRecord::try_from(dto),
            Err(LevelDtoError::InvalidSolution),
        ));
    }

    #[test]
    fn clues_must_agree_with_the_solution() {
        let mut record = sample_record();
        record.solution = "MMSMSS SSMSMM MMSMSS SSMSMM MMSMSS SSMSMM".parse().unwrap();
        let dto = LevelRecordDto::try_from(&record).unwrap();
        assert!(matches!(
            LevelRecord::try_from(dto),
            Err(LevelDtoError::ClueMismatch { index: 0 }),
        ));
    }

    #[test]
    fn difficulty_and_timestamp_strings_are_validated() {
        let mut dto = sample_dto();
        dto.difficulty = "impossible".to_owned();
        assert!(matches!(
            LevelRecord::try_from(dto),
            Err(LevelDtoError::Difficulty(_)),
        ));

        let mut dto = sample_dto();
        dto.created_at = "yesterday".to_owned();
        assert!(matches!(
            LevelRecord::try_from(dto),
            Err(LevelDtoError::TimestampParse(_)),
        ));
    }
}
