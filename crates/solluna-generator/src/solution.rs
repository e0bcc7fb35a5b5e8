use rand::{Rng, RngExt as _, seq::SliceRandom as _};
use solluna_core::{CELL_COUNT, Line, Position, SYMBOL_QUOTA, Symbol, SymbolGrid, rules};

const MAX_ATTEMPTS: usize = 1000;

/// Randomized generator for complete boards.
///
/// The primary strategy is backtracking in row-major order, trying both
/// symbols in random order at each cell and pruning placements that push a
/// row or column past its quota or complete a three-in-a-row. A bounded
/// number of attempts guards against non-termination; when the budget runs
/// out, [`generate`](Self::generate) falls back to repairing a uniformly
/// random fill instead of failing.
#[derive(Debug, Clone)]
pub struct SolutionGenerator {
    max_attempts: usize,
}

impl Default for SolutionGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl SolutionGenerator {
    /// Creates a generator with the default attempt budget.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_attempts: MAX_ATTEMPTS,
        }
    }

    /// Creates a generator with a custom backtracking attempt budget.
    ///
    /// A budget of zero skips backtracking entirely and always takes the
    /// repair path.
    #[must_use]
    pub const fn with_max_attempts(max_attempts: usize) -> Self {
        Self { max_attempts }
    }

    /// Generates one complete board.
    ///
    /// Never fails: if no backtracking attempt succeeds within the budget,
    /// the fallback fills the board at random and breaks up runs, which
    /// keeps columns free of three-in-a-rows but does not guarantee the
    /// quota rule. [`GeneratedSolution::method`] records which path ran.
    ///
    /// # Examples
    ///
    /// ```
    /// use solluna_core::rules;
    /// use solluna_generator::{GenerationMethod, SolutionGenerator};
    ///
    /// let mut rng = rand::rng();
    /// let generated = SolutionGenerator::new().generate(&mut rng);
    /// assert_eq!(generated.method, GenerationMethod::Backtracking);
    /// assert!(rules::is_fully_valid(&generated.grid));
    /// ```
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> GeneratedSolution {
        for _ in 0..self.max_attempts {
            let mut grid = SymbolGrid::new();
            if fill_from(&mut grid, 0, rng) {
                return GeneratedSolution {
                    grid,
                    method: GenerationMethod::Backtracking,
                };
            }
        }
        log::warn!(
            "backtracking budget exhausted after {} attempts, repairing a random fill",
            self.max_attempts
        );
        GeneratedSolution {
            grid: repair_fill(rng),
            method: GenerationMethod::Repair,
        }
    }
}

/// A complete board together with the strategy that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSolution {
    /// The filled board.
    pub grid: SymbolGrid,
    /// The strategy that produced the board.
    pub method: GenerationMethod,
}

/// Strategy that produced a [`GeneratedSolution`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum GenerationMethod {
    /// Randomized backtracking; the board satisfies every placement rule.
    #[display("backtracking")]
    Backtracking,
    /// Repaired random fill; runs are broken but quotas may be off.
    #[display("repair")]
    Repair,
}

fn fill_from<R: Rng + ?Sized>(grid: &mut SymbolGrid, index: usize, rng: &mut R) -> bool {
    if index == CELL_COUNT {
        return rules::is_fully_valid(grid);
    }
    let position = Position::from_index(index);
    let mut symbols = Symbol::ALL;
    symbols.shuffle(rng);
    for symbol in symbols {
        grid.set(position, Some(symbol));
        if placement_fits(grid, position, symbol) && fill_from(grid, index + 1, rng) {
            return true;
        }
    }
    grid.set(position, None);
    false
}

/// Prefix feasibility for a row-major fill: `grid` already holds `symbol`
/// at `position`, and every cell after `position` is empty.
fn placement_fits(grid: &SymbolGrid, position: Position, symbol: Symbol) -> bool {
    grid.count_in_line(Line::Row { y: position.y() }, symbol) <= SYMBOL_QUOTA
        && grid.count_in_line(Line::Column { x: position.x() }, symbol) <= SYMBOL_QUOTA
        && !run_ends_at(grid, position, symbol)
}

fn run_ends_at(grid: &SymbolGrid, position: Position, symbol: Symbol) -> bool {
    let (x, y) = (position.x(), position.y());
    let row_run = x >= 2
        && grid[Position::new(x - 1, y)] == Some(symbol)
        && grid[Position::new(x - 2, y)] == Some(symbol);
    let column_run = y >= 2
        && grid[Position::new(x, y - 1)] == Some(symbol)
        && grid[Position::new(x, y - 2)] == Some(symbol);
    row_run || column_run
}

fn repair_fill<R: Rng + ?Sized>(rng: &mut R) -> SymbolGrid {
    let mut grid = SymbolGrid::new();
    for position in Position::ALL {
        let symbol = if rng.random() { Symbol::Sun } else { Symbol::Moon };
        grid.set(position, Some(symbol));
    }
    break_runs(&mut grid);
    grid
}

/// Flips the last cell of every same-symbol three-cell window, rows first.
///
/// A single pass: column flips can reopen a run in their row, so only
/// columns are run-free afterwards.
fn break_runs(grid: &mut SymbolGrid) {
    for line in Line::ALL {
        let cells = line.cells();
        for window in cells.windows(3) {
            if let (Some(a), Some(b), Some(c)) = (grid[window[0]], grid[window[1]], grid[window[2]])
                && a == b
                && b == c
            {
                grid.set(window[2], Some(a.opposite()));
            }
        }
    }
}
