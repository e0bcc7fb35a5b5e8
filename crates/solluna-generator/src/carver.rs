use rand::{
    Rng,
    seq::{IndexedRandom as _, SliceRandom as _},
};
use solluna_core::{CELL_COUNT, Difficulty, Line, Position, PositionSet, SymbolGrid, rules};
use solluna_solver::DeductionSolver;

/// Removes cells from a complete solution while keeping it deducible.
///
/// The carver reserves one random cell per row and per column that is
/// never removed, then clears the remaining cells in random order. Each
/// removal must pass three gates: the cheap uniqueness screen, the
/// deduction-liveness screen, and a full replay in which the solver
/// rebuilds exactly the original solution. A removal that fails any gate
/// is rolled back. Carving stops at the difficulty's removal target or
/// when every candidate has been tried, whichever comes first.
///
/// Because the replay gate holds after every accepted removal, a carved
/// puzzle is always solvable by pure deduction, one forced cell at a
/// time, with the stored solution as its only completion.
#[derive(Debug, Clone, Copy)]
pub struct PuzzleCarver<'a> {
    solver: &'a DeductionSolver,
}

impl<'a> PuzzleCarver<'a> {
    /// Creates a carver that gates removals with `solver`.
    #[must_use]
    pub const fn new(solver: &'a DeductionSolver) -> Self {
        Self { solver }
    }

    /// Carves a puzzle out of `solution`.
    ///
    /// `solution` should be a complete board; cells the solver cannot
    /// justify removing simply stay in place, so a degraded solution
    /// yields a puzzle with more clues, never an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use solluna_core::{Difficulty, SymbolGrid};
    /// use solluna_generator::PuzzleCarver;
    /// use solluna_solver::DeductionSolver;
    ///
    /// let solution: SymbolGrid = "SSMSMM MMSMSS SSMSMM MMSMSS SSMSMM MMSMSS".parse()?;
    /// let solver = DeductionSolver::with_all_techniques();
    /// let carver = PuzzleCarver::new(&solver);
    /// let carved = carver.carve(&solution, Difficulty::Easy, &mut rand::rng());
    /// assert_eq!(carved.puzzle.empty_count(), carved.removed);
    /// assert!(carved.removed > 0);
    /// # Ok::<(), solluna_core::ParseGridError>(())
    /// ```
    pub fn carve<R: Rng + ?Sized>(
        &self,
        solution: &SymbolGrid,
        difficulty: Difficulty,
        rng: &mut R,
    ) -> CarvedPuzzle {
        let target = removal_target(difficulty);
        let critical = critical_cells(rng);
        let mut candidates: Vec<Position> = Position::ALL
            .into_iter()
            .filter(|&pos| !critical.contains(pos))
            .collect();
        candidates.shuffle(rng);

        let mut puzzle = solution.clone();
        let mut removed = 0;
        for position in candidates {
            if removed == target {
                break;
            }
            let kept = puzzle[position];
            puzzle.set(position, None);
            if self.removal_allowed(&puzzle, solution) {
                removed += 1;
            } else {
                puzzle.set(position, kept);
            }
        }
        if removed < target {
            log::debug!("carving stopped at {removed} of {target} removals for {difficulty}");
        }
        CarvedPuzzle { puzzle, removed }
    }

    fn removal_allowed(&self, puzzle: &SymbolGrid, solution: &SymbolGrid) -> bool {
        rules::has_unique_solution(puzzle)
            && rules::has_available_deduction(puzzle)
            && self.replay_reaches(puzzle, solution)
    }

    /// Replays the puzzle with the gating solver and checks that it ends
    /// at exactly `solution`.
    fn replay_reaches(&self, puzzle: &SymbolGrid, solution: &SymbolGrid) -> bool {
        let mut grid = puzzle.clone();
        matches!(self.solver.solve(&mut grid), Ok((true, _))) && grid == *solution
    }
}

/// A carved puzzle and the number of cells cleared from its solution.
///
/// Cells still holding a symbol are the puzzle's locked clues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarvedPuzzle {
    /// The puzzle board; empty cells are for the player to fill.
    pub puzzle: SymbolGrid,
    /// Number of cells cleared.
    pub removed: usize,
}

/// Returns how many cells carving aims to remove for `difficulty`.
#[must_use]
#[expect(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn removal_target(difficulty: Difficulty) -> usize {
    (CELL_COUNT as f64 * difficulty.removal_fraction()).round() as usize
}

/// Picks one cell per row and one per column to keep as anchors.
fn critical_cells<R: Rng + ?Sized>(rng: &mut R) -> PositionSet {
    let mut critical = PositionSet::EMPTY;
    for line in Line::ALL {
        if let Some(&position) = line.cells().choose(rng) {
            critical.insert(position);
        }
    }
    critical
}
