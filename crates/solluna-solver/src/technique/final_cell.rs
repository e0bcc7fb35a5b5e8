use solluna_core::{Line, PositionSet, SYMBOL_QUOTA, Symbol, SymbolGrid, rules};

use super::{BoxedTechnique, Technique};
use crate::{DeductionStep, SolverError};

const NAME: &str = "final cell";

/// A technique that fills the last empty cell of a line.
///
/// When a row or column has exactly one empty cell, the balance rule fixes
/// the missing symbol: whichever count is still below three. Rows are
/// scanned before columns, so a row deduction wins when both exist.
///
/// # Examples
///
/// ```
/// use solluna_core::{Position, Symbol, SymbolGrid};
/// use solluna_solver::technique::{FinalCell, Technique as _};
///
/// let grid: SymbolGrid = "SSMSM. ...... ...... ...... ...... ......".parse()?;
/// let step = FinalCell::new().find_step(&grid)?.unwrap();
/// assert_eq!(step.position(), Position::new(5, 0));
/// assert_eq!(step.symbol(), Symbol::Moon);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct FinalCell;

impl FinalCell {
    /// Creates a new [`FinalCell`] technique.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Technique for FinalCell {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn find_step(&self, grid: &SymbolGrid) -> Result<Option<DeductionStep>, SolverError> {
        for line in Line::ALL {
            if grid.empty_in_line(line) != 1 {
                continue;
            }
            if let Some(violation) = rules::line_violation(grid, line) {
                return Err(violation.into());
            }
            let Some(position) = line.cells().into_iter().find(|&pos| grid[pos].is_none()) else {
                continue;
            };
            let suns = grid.count_in_line(line, Symbol::Sun);
            let moons = grid.count_in_line(line, Symbol::Moon);
            let symbol = if suns == SYMBOL_QUOTA {
                Symbol::Moon
            } else {
                Symbol::Sun
            };
            let involved = line.mask() - PositionSet::from_elem(position);
            let explanation = format!(
                "{line} has {suns} suns and {moons} moons; every row and column needs \
                 exactly {SYMBOL_QUOTA} of each, so the last empty cell must be a {symbol}."
            );
            return Ok(Some(DeductionStep::new(
                NAME,
                position,
                symbol,
                involved,
                Some(line),
                explanation,
            )));
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use solluna_core::Position;

    use super::*;
    use crate::testing::TechniqueTester;

    #[test]
    fn fills_the_last_cell_of_a_row() {
        TechniqueTester::from_str(
            "SSMSM.
             ......
             ......
             ......
             ......
             ......",
        )
        .apply_once(&FinalCell::new())
        .assert_placed(Position::new(5, 0), Symbol::Moon);
    }

    #[test]
    fn fills_the_last_cell_of_a_column() {
        TechniqueTester::from_str(
            "S.....
             S.....
             M.....
             M.....
             S.....
             ......",
        )
        .apply_once(&FinalCell::new())
        .assert_placed(Position::new(0, 5), Symbol::Moon);
    }

    #[test]
    fn row_deduction_wins_over_column() {
        TechniqueTester::from_str(
            "SMSMSM
             MSMSM.
             SMSMSM
             MSMSMS
             ......
             M.....",
        )
        .apply_once(&FinalCell::new())
        .assert_placed(Position::new(5, 1), Symbol::Sun)
        .assert_no_change(Position::new(0, 4));
    }

    #[test]
    fn does_not_apply_without_a_near_complete_line() {
        TechniqueTester::from_str(
            "SSM...
             ......
             ......
             ......
             ......
             ......",
        )
        .apply_once(&FinalCell::new())
        .assert_no_change(Position::new(3, 0));
    }

    #[test]
    fn infeasible_line_is_an_error() {
        // Row 1 has a sun triple and exactly one empty cell.
        let grid: SymbolGrid = "SSSMM. ...... ...... ...... ...... ......"
            .parse()
            .unwrap();
        let result = FinalCell::new().find_step(&grid);
        assert!(matches!(result, Err(SolverError::Infeasible(_))));
    }
}
