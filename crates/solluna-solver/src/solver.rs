use solluna_core::{SymbolGrid, rules};

use crate::{
    DeductionStep, SolverError,
    technique::{self, BoxedTechnique},
};

/// A solver that chains deduction techniques.
///
/// Techniques are tried in registration order and the first one that
/// applies wins, so the order encodes deduction priority. The board is
/// checked for feasibility before and after every step; a board that breaks
/// a rule stops the solver with [`SolverError::Infeasible`].
///
/// # Examples
///
/// ```
/// use solluna_core::SymbolGrid;
/// use solluna_solver::DeductionSolver;
///
/// let solver = DeductionSolver::with_all_techniques();
/// let mut grid: SymbolGrid = "
///     SSMSM.
///     MMSMS.
///     SSMSM.
///     MMSMS.
///     SSMSM.
///     MMSMS.
/// "
/// .parse()?;
/// let (solved, _stats) = solver.solve(&mut grid)?;
/// assert!(solved);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct DeductionSolver {
    techniques: Vec<BoxedTechnique>,
}

impl DeductionSolver {
    /// Creates a solver with the given techniques.
    ///
    /// The order of `techniques` is the order they are tried in.
    #[must_use]
    pub fn new(techniques: Vec<BoxedTechnique>) -> Self {
        Self { techniques }
    }

    /// Creates a solver with all available techniques in priority order.
    #[must_use]
    pub fn with_all_techniques() -> Self {
        Self::new(technique::all_techniques())
    }

    /// Creates a stats object sized for this solver's technique list.
    #[must_use]
    pub fn new_stats(&self) -> DeductionSolverStats {
        DeductionSolverStats {
            applications: vec![0; self.techniques.len()],
            total_steps: 0,
        }
    }

    /// Returns the registered techniques in priority order.
    #[must_use]
    pub fn techniques(&self) -> &[BoxedTechnique] {
        &self.techniques
    }

    /// Applies the first technique that has a step.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - a placement was made
    /// * `Ok(false)` - no technique currently applies
    ///
    /// # Errors
    ///
    /// Returns an error if the board is infeasible before or after the
    /// placement.
    pub fn step(
        &self,
        grid: &mut SymbolGrid,
        stats: &mut DeductionSolverStats,
    ) -> Result<bool, SolverError> {
        debug_assert_eq!(self.techniques.len(), stats.applications.len());

        rules::check_feasible(grid)?;
        for (i, technique) in self.techniques.iter().enumerate() {
            if technique.apply(grid)? {
                stats.applications[i] += 1;
                stats.total_steps += 1;
                rules::check_feasible(grid)?;
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Finds the next placement without mutating the grid.
    ///
    /// The step returned is the one [`Self::step`] would apply: the first
    /// technique with a deduction, scanning rows before columns.
    ///
    /// # Errors
    ///
    /// Returns an error if the board is infeasible.
    pub fn find_step(&self, grid: &SymbolGrid) -> Result<Option<DeductionStep>, SolverError> {
        rules::check_feasible(grid)?;
        for technique in &self.techniques {
            if let Some(step) = technique.find_step(grid)? {
                return Ok(Some(step));
            }
        }
        Ok(None)
    }

    /// Solves the grid as far as the registered techniques reach.
    ///
    /// # Returns
    ///
    /// `(solved, stats)` where `solved` is `true` if the grid ended complete
    /// and valid.
    ///
    /// # Errors
    ///
    /// Returns an error if the board becomes infeasible while solving.
    pub fn solve(
        &self,
        grid: &mut SymbolGrid,
    ) -> Result<(bool, DeductionSolverStats), SolverError> {
        let mut stats = self.new_stats();
        let solved = self.solve_with_stats(grid, &mut stats)?;
        Ok((solved, stats))
    }

    /// Solves the grid, accumulating into an existing stats object.
    ///
    /// # Errors
    ///
    /// Returns an error if the board becomes infeasible while solving.
    pub fn solve_with_stats(
        &self,
        grid: &mut SymbolGrid,
        stats: &mut DeductionSolverStats,
    ) -> Result<bool, SolverError> {
        while self.step(grid, stats)? {
            if is_solved(grid) {
                return Ok(true);
            }
        }
        Ok(is_solved(grid))
    }
}

fn is_solved(grid: &SymbolGrid) -> bool {
    grid.is_complete() && rules::is_fully_valid(grid)
}

/// Statistics accumulated by a [`DeductionSolver`].
///
/// Tracks how many times each technique was applied, indexed in the
/// solver's technique order, and the total number of steps.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeductionSolverStats {
    applications: Vec<usize>,
    total_steps: usize,
}

impl DeductionSolverStats {
    /// Returns the per-technique application counts, in the solver's
    /// technique order.
    #[must_use]
    pub fn applications(&self) -> &[usize] {
        &self.applications
    }

    /// Returns the total number of applied steps.
    #[must_use]
    pub fn total_steps(&self) -> usize {
        self.total_steps
    }

    /// Returns `true` if any step was applied.
    #[must_use]
    pub fn has_progress(&self) -> bool {
        self.total_steps > 0
    }
}

#[cfg(test)]
mod tests {
    use solluna_core::{Position, Symbol};

    use super::*;

    fn grid(s: &str) -> SymbolGrid {
        s.parse().unwrap()
    }

    const SOLVED: &str = "SSMSMM MMSMSS SSMSMM MMSMSS SSMSMM MMSMSS";

    #[test]
    fn solves_a_final_cell_chain() {
        let solver = DeductionSolver::with_all_techniques();
        let mut board = grid("SSMSM. MMSMS. SSMSM. MMSMS. SSMSM. MMSMS.");
        let (solved, stats) = solver.solve(&mut board).unwrap();
        assert!(solved);
        assert_eq!(board, grid(SOLVED));
        assert_eq!(stats.total_steps(), 6);
        assert_eq!(stats.applications(), &[6, 0, 0]);
    }

    #[test]
    fn solves_a_quota_chain() {
        let solver = DeductionSolver::with_all_techniques();
        let mut board = grid("SSMS.. MMSM.. SSMS.. MMSM.. SSMS.. MMSM..");
        let (solved, stats) = solver.solve(&mut board).unwrap();
        assert!(solved);
        assert_eq!(board, grid(SOLVED));
        assert_eq!(stats.total_steps(), 12);
        assert!(stats.has_progress());
    }

    #[test]
    fn empty_board_makes_no_progress() {
        let solver = DeductionSolver::with_all_techniques();
        let mut board = SymbolGrid::new();
        let (solved, stats) = solver.solve(&mut board).unwrap();
        assert!(!solved);
        assert!(!stats.has_progress());
        assert_eq!(board, SymbolGrid::new());
    }

    #[test]
    fn infeasible_board_is_an_error() {
        let solver = DeductionSolver::with_all_techniques();
        let mut board = grid("SSS... ...... ...... ...... ...... ......");
        let mut stats = solver.new_stats();
        let result = solver.step(&mut board, &mut stats);
        assert!(matches!(result, Err(SolverError::Infeasible(_))));
        assert!(!stats.has_progress());
    }

    #[test]
    fn find_step_matches_step() {
        let solver = DeductionSolver::with_all_techniques();
        let mut board = grid("SSMSM. MMSMS. SSMSM. MMSMS. SSMSM. MMSMS.");
        let step = solver.find_step(&board).unwrap().unwrap();
        assert_eq!(step.position(), Position::new(5, 0));
        assert_eq!(step.symbol(), Symbol::Moon);
        assert_eq!(step.technique_name(), "final cell");

        let mut stats = solver.new_stats();
        assert!(solver.step(&mut board, &mut stats).unwrap());
        assert_eq!(board[step.position()], Some(step.symbol()));
    }

    #[test]
    fn priority_prefers_final_cell_over_windows() {
        // Row 2 has a window pair; row 1 is one cell short. The near
        // complete row wins.
        let solver = DeductionSolver::with_all_techniques();
        let board = grid("SMSMS. .MM... ...... ...... ...... ......");
        let step = solver.find_step(&board).unwrap().unwrap();
        assert_eq!(step.technique_name(), "final cell");
        assert_eq!(step.position(), Position::new(5, 0));
    }
}
