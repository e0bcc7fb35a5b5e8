//! Test utilities for verifying technique implementations.

use solluna_core::{Position, Symbol, SymbolGrid};

use crate::technique::Technique;

/// A test harness for exercising a single technique.
///
/// Tracks the initial and current state of a board. `apply_*` methods run
/// the technique and check that `find_step` and `apply` agree with each
/// other; `assert_*` methods verify the resulting changes. All methods
/// chain and panic with the caller's location on failure.
///
/// # Examples
///
/// ```
/// use solluna_core::{Position, Symbol};
/// use solluna_solver::{technique::FinalCell, testing::TechniqueTester};
///
/// TechniqueTester::from_str("SSMSM. ...... ...... ...... ...... ......")
///     .apply_once(&FinalCell::new())
///     .assert_placed(Position::new(5, 0), Symbol::Moon);
/// ```
#[derive(Debug)]
pub struct TechniqueTester {
    initial: SymbolGrid,
    current: SymbolGrid,
}

impl TechniqueTester {
    /// Creates a tester from an initial board.
    #[must_use]
    pub fn new(initial: SymbolGrid) -> Self {
        let current = initial.clone();
        Self { initial, current }
    }

    /// Creates a tester from a board string.
    ///
    /// Cells are `S`, `M`, and `.`/`_` in row-major order; whitespace is
    /// ignored, so fixtures can be written one row per line.
    ///
    /// # Panics
    ///
    /// Panics if the string is not a valid board.
    #[track_caller]
    #[must_use]
    pub fn from_str(s: &str) -> Self {
        let grid = s
            .parse()
            .unwrap_or_else(|err| panic!("invalid board fixture: {err}"));
        Self::new(grid)
    }

    /// Returns the current board state.
    #[must_use]
    pub fn current(&self) -> &SymbolGrid {
        &self.current
    }

    /// Applies the technique at most once.
    ///
    /// # Panics
    ///
    /// Panics if the technique errors, or if `find_step` and `apply`
    /// disagree about whether and what to place.
    #[track_caller]
    pub fn apply_once<T>(mut self, technique: &T) -> Self
    where
        T: Technique,
    {
        let step = technique
            .find_step(&self.current)
            .unwrap_or_else(|err| panic!("find_step failed: {err}"));
        let changed = technique
            .apply(&mut self.current)
            .unwrap_or_else(|err| panic!("apply failed: {err}"));
        match step {
            Some(step) => {
                assert!(
                    changed,
                    "find_step returned a step at {} but apply made no change",
                    step.position()
                );
                assert_eq!(
                    self.current[step.position()],
                    Some(step.symbol()),
                    "apply did not place the symbol find_step promised at {}",
                    step.position()
                );
            }
            None => {
                assert!(!changed, "find_step returned no step but apply made a change");
            }
        }
        self
    }

    /// Applies the technique until it makes no more progress.
    ///
    /// # Panics
    ///
    /// Panics under the same conditions as [`Self::apply_once`], or if the
    /// technique keeps reporting progress after the board is full.
    #[track_caller]
    pub fn apply_until_stuck<T>(mut self, technique: &T) -> Self
    where
        T: Technique,
    {
        loop {
            let before = self.current.clone();
            self = self.apply_once(technique);
            if self.current == before {
                return self;
            }
        }
    }

    /// Asserts that a cell went from empty to the given symbol.
    #[track_caller]
    pub fn assert_placed(self, pos: Position, symbol: Symbol) -> Self {
        assert_eq!(
            self.initial[pos], None,
            "expected the initial cell at {pos} to be empty"
        );
        assert_eq!(
            self.current[pos],
            Some(symbol),
            "expected the cell at {pos} to hold {symbol}"
        );
        self
    }

    /// Asserts that a cell is unchanged from the initial board.
    #[track_caller]
    pub fn assert_no_change(self, pos: Position) -> Self {
        assert_eq!(
            self.current[pos], self.initial[pos],
            "expected the cell at {pos} to be unchanged"
        );
        self
    }

    /// Asserts that the whole board is unchanged from the initial state.
    #[track_caller]
    pub fn assert_board_unchanged(self) -> Self {
        assert_eq!(
            self.current, self.initial,
            "expected the board to be unchanged"
        );
        self
    }

    /// Asserts that the current board equals `expected`.
    ///
    /// # Panics
    ///
    /// Panics if `expected` is not a valid board string or the boards
    /// differ.
    #[track_caller]
    pub fn assert_board(self, expected: &str) -> Self {
        let expected: SymbolGrid = expected
            .parse()
            .unwrap_or_else(|err| panic!("invalid expected board: {err}"));
        assert_eq!(self.current, expected, "board mismatch");
        self
    }
}
