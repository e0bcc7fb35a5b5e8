use solluna_core::{Line, PositionSet, SYMBOL_QUOTA, Symbol, SymbolGrid};

use super::{BoxedTechnique, Technique};
use crate::{DeductionStep, SolverError};

const NAME: &str = "symbol quota";

/// A technique that drains a line that has reached its quota.
///
/// Once a line holds three copies of one symbol, the balance rule forces
/// every remaining empty cell of that line to the opposite symbol. One cell
/// is placed per step so each placement can be explained on its own. Rows
/// are scanned before columns.
///
/// [`FinalCell`](super::FinalCell) is the one-empty-cell special case of
/// this technique and runs at higher priority, so in a solver chain this
/// one only fires with two or more empties left.
#[derive(Debug, Default, Clone, Copy)]
pub struct SymbolQuota;

impl SymbolQuota {
    /// Creates a new [`SymbolQuota`] technique.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Technique for SymbolQuota {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn find_step(&self, grid: &SymbolGrid) -> Result<Option<DeductionStep>, SolverError> {
        for line in Line::ALL {
            for symbol in Symbol::ALL {
                if grid.count_in_line(line, symbol) != SYMBOL_QUOTA {
                    continue;
                }
                let Some(position) = line.cells().into_iter().find(|&pos| grid[pos].is_none())
                else {
                    continue;
                };
                let forced = symbol.opposite();
                let involved = line
                    .cells()
                    .into_iter()
                    .filter(|&pos| grid[pos] == Some(symbol))
                    .collect::<PositionSet>();
                let explanation = format!(
                    "{line} already has {SYMBOL_QUOTA} {symbol}s, the most it may hold; \
                     its remaining empty cells must all be {forced}s."
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
