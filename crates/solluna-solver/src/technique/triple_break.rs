use solluna_core::{Line, PositionSet, SymbolGrid};

use super::{BoxedTechnique, Technique};
use crate::{DeductionStep, SolverError};

const NAME: &str = "triple break";

/// A technique that prevents three-in-a-row runs.
///
/// When a three-cell window of a line holds two copies of one symbol and a
/// single empty cell, the empty cell must take the opposite symbol. This
/// covers both the flanked form (`S _ S`) and the adjacent-pair form
/// (`S S _`). Only immediate windows count: equal symbols two apart with a
/// gap between them force nothing. Rows are scanned before columns.
///
/// # Examples
///
/// ```
/// use solluna_core::{Position, Symbol, SymbolGrid};
/// use solluna_solver::technique::{Technique as _, TripleBreak};
///
/// let grid: SymbolGrid = "S.S... ...... ...... ...... ...... ......".parse()?;
/// let step = TripleBreak::new().find_step(&grid)?.unwrap();
/// assert_eq!(step.position(), Position::new(1, 0));
/// assert_eq!(step.symbol(), Symbol::Moon);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct TripleBreak;

impl TripleBreak {
    /// Creates a new [`TripleBreak`] technique.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Technique for TripleBreak {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn find_step(&self, grid: &SymbolGrid) -> Result<Option<DeductionStep>, SolverError> {
        for line in Line::ALL {
            let cells = line.cells();
            for window in cells.windows(3) {
                let (position, symbol, pair) =
                    match (grid[window[0]], grid[window[1]], grid[window[2]]) {
                        (None, Some(a), Some(b)) if a == b => {
                            (window[0], a, [window[1], window[2]])
                        }
                        (Some(a), None, Some(b)) if a == b => {
                            (window[1], a, [window[0], window[2]])
                        }
                        (Some(a), Some(b), None) if a == b => {
                            (window[2], a, [window[0], window[1]])
                        }
                        _ => continue,
                    };
                let forced = symbol.opposite();
                let involved = pair.into_iter().collect::<PositionSet>();
                let explanation = format!(
                    "two {symbol}s already sit in this stretch of {line}; three identical \
                     symbols may never touch, so this cell must be a {forced}."
                );
                return Ok(Some(DeductionStep::new(
                    NAME,
                    position,
                    forced,
                    involved,
                    Some(line),
                    explanation,
                )));
            }
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use solluna_core::{Position, Symbol};

    use super::*;
    use crate::testing::TechniqueTester;

    #[test]
    fn breaks_a_flanked_pair() {
        TechniqueTester::from_str(
            "S.S...
             ......
             ......
             ......
             ......
             ......",
        )
        .apply_once(&TripleBreak::new())
        .assert_placed(Position::new(1, 0), Symbol::Moon);
    }

    #[test]
    fn breaks_an_adjacent_pair() {
        TechniqueTester::from_str(
            "......
             ..MM..
             ......
             ......
             ......
             ......",
        )
        .apply_once(&TripleBreak::new())
        .assert_placed(Position::new(1, 1), Symbol::Sun);
    }

    #[test]
    fn breaks_a_column_pair() {
        TechniqueTester::from_str(
            "......
             ...S..
             ......
             ...S..
             ......
             ......",
        )
        .apply_once(&TripleBreak::new())
        .assert_placed(Position::new(3, 2), Symbol::Moon);
    }

    #[test]
    fn ignores_equal_symbols_two_apart() {
        TechniqueTester::from_str(
            "S...S.
             ......
             ......
             ......
             ......
             ......",
        )
        .apply_once(&TripleBreak::new())
        .assert_no_change(Position::new(2, 0));
    }

    #[test]
    fn rows_are_scanned_before_columns() {
        // A row window and a column window are both available; the row wins.
        TechniqueTester::from_str(
            "......
             ....MM
             M.....
             M.....
             ......
             ......",
        )
        .apply_once(&TripleBreak::new())
        .assert_placed(Position::new(3, 1), Symbol::Sun)
        .assert_no_change(Position::new(0, 1));
    }

    #[test]
    fn mixed_windows_force_nothing() {
        TechniqueTester::from_str(
            "SM.SM.
             ......
             ......
             ......
             ......
             ......",
        )
        .apply_once(&TripleBreak::new())
        .assert_no_change(Position::new(2, 0));
    }
}
