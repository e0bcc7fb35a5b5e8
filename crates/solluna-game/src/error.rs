use std::time::Duration;

use derive_more::{Display, Error};
use solluna_core::{Position, rules::RuleViolation};

use crate::GameStatus;

/// Reason a play session rejected an action.
///
/// Rejections never change the board. Every rejection also queues an
/// [`Advisory`](crate::Advisory) carrying the same message, so callers that
/// only drain advisories still see what happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// The target cell is a puzzle clue.
    #[display("cell {position} is a fixed clue")]
    LockedCell {
        /// The cell that was clicked.
        position: Position,
    },
    /// Undo was requested with an empty history.
    #[display("nothing to undo")]
    NothingToUndo,
    /// A hint was requested before the previous one cooled down.
    #[display("next hint available in {} s", remaining.as_secs())]
    HintCooldown {
        /// Time left until a hint can be served again.
        remaining: Duration,
    },
    /// A hint was requested on a board with no empty cells.
    #[display("no empty cells left to hint")]
    NoEmptyCells,
    /// The board breaks a rule outright, so no hint can point anywhere.
    #[display("the board cannot be completed: {_0}")]
    InfeasibleBoard(RuleViolation),
    /// The session has already been evaluated.
    #[display("the level is already {status}")]
    Finished {
        /// The terminal status the session settled in.
        status: GameStatus,
    },
    /// Restored parts do not describe a consistent session.
    #[display("incompatible level parts: {reason}")]
    IncompatibleParts {
        /// Which consistency check failed.
        reason: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use solluna_core::{Line, Symbol, rules::ViolationKind};

    use super::*;

    #[test]
    fn messages_read_naturally() {
        let error = GameError::LockedCell { position: Position::new(2, 0) };
        assert_eq!(error.to_string(), "cell (2, 0) is a fixed clue");

        let error = GameError::HintCooldown { remaining: Duration::from_secs(12) };
        assert_eq!(error.to_string(), "next hint available in 12 s");

        let error = GameError::Finished { status: GameStatus::Solved };
        assert_eq!(error.to_string(), "the level is already solved");
    }

    #[test]
    fn infeasible_keeps_the_violation_as_source() {
        let violation = RuleViolation {
            line: Line::Row { y: 0 },
            kind: ViolationKind::TooMany { symbol: Symbol::Sun },
        };
        let error = GameError::InfeasibleBoard(violation);
        assert!(std::error::Error::source(&error).is_some());
        assert_eq!(
            error.to_string(),
            "the board cannot be completed: row 1 has more than three suns",
        );
    }
}
