use solluna_core::SymbolGrid;

use crate::{DeductionSolver, DeductionStep, SolverError};

/// Fixed text returned when no specific deduction is visible.
pub const RULES_REMINDER: &str = "Each row and column needs exactly three suns and three \
     moons, and three identical symbols may never touch in a line.";

/// A hint for the current board.
///
/// Either one forced placement with its justification, or a generic rules
/// reminder when the registered techniques find nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hint {
    /// A specific forced placement.
    Forced(DeductionStep),
    /// No specific deduction is visible; restate the rules.
    Reminder,
}

impl Hint {
    /// Returns the display message for this hint.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Forced(step) => step.explanation(),
            Self::Reminder => RULES_REMINDER,
        }
    }
}

/// Finds the highest-priority hint for a board.
///
/// Priority follows the standard technique order: the last empty cell of a
/// row, then of a column, then three-cell windows row-wise and column-wise,
/// then lines at quota. Lookup is deterministic, works from the board
/// alone, and never consults a stored solution, so the same board always
/// yields the same hint.
///
/// # Errors
///
/// Returns an error if the board is infeasible; the player has to fix the
/// violation before a hint can point anywhere.
///
/// # Examples
///
/// ```
/// use solluna_core::SymbolGrid;
/// use solluna_solver::{Hint, find_hint};
///
/// let board = SymbolGrid::new();
/// assert_eq!(find_hint(&board)?, Hint::Reminder);
/// # Ok::<(), solluna_solver::SolverError>(())
/// ```
pub fn find_hint(grid: &SymbolGrid) -> Result<Hint, SolverError> {
    let solver = DeductionSolver::with_all_techniques();
    match solver.find_step(grid)? {
        Some(step) => Ok(Hint::Forced(step)),
        None => Ok(Hint::Reminder),
    }
}
