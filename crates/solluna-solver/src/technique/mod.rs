//! Deduction techniques.
//!
//! A technique scans a board for one kind of forced placement and explains
//! it. [`all_techniques`] returns the standard set in priority order; the
//! first technique that applies decides both the solver's next step and the
//! hint shown to the player.

pub use self::{final_cell::FinalCell, symbol_quota::SymbolQuota, triple_break::TripleBreak};

mod final_cell;
mod symbol_quota;
mod triple_break;

use std::fmt::Debug;

use solluna_core::SymbolGrid;

use crate::{DeductionStep, SolverError};

/// A trait representing a deduction technique.
///
/// Implementations are stateless scanners. `find_step` reports the first
/// placement the technique can justify without mutating the board; `apply`
/// performs that placement. The two always agree: applying succeeds exactly
/// when `find_step` returns a step, and it places that step's symbol.
pub trait Technique: Debug + Send + Sync {
    /// Returns the name of the technique.
    fn name(&self) -> &'static str;

    /// Returns a boxed clone of this technique.
    fn clone_box(&self) -> BoxedTechnique;

    /// Finds the next forced placement without mutating the grid.
    ///
    /// Returns `Ok(None)` when the technique does not currently apply.
    ///
    /// # Errors
    ///
    /// Returns an error if the technique detects an infeasible board state.
    fn find_step(&self, grid: &SymbolGrid) -> Result<Option<DeductionStep>, SolverError>;

    /// Applies the technique's next placement to the grid.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - a placement was made
    /// * `Ok(false)` - the technique does not currently apply
    ///
    /// # Errors
    ///
    /// Returns an error if the technique detects an infeasible board state.
    fn apply(&self, grid: &mut SymbolGrid) -> Result<bool, SolverError> {
        match self.find_step(grid)? {
            Some(step) => {
                grid.set(step.position(), Some(step.symbol()));
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

/// A boxed [`Technique`] trait object.
pub type BoxedTechnique = Box<dyn Technique>;

impl Clone for BoxedTechnique {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Returns all available techniques in priority order.
///
/// The order fixes hint priority: a line missing a single cell beats a
/// three-cell window, which beats a line at quota with several empties.
/// Each technique scans rows before columns.
#[must_use]
pub fn all_techniques() -> Vec<BoxedTechnique> {
    vec![
        Box::new(FinalCell::new()),
        Box::new(TripleBreak::new()),
        Box::new(SymbolQuota::new()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_techniques_are_in_priority_order() {
        let names: Vec<_> = all_techniques().iter().map(|t| t.name()).collect();
        assert_eq!(names, vec!["final cell", "triple break", "symbol quota"]);
    }

    #[test]
    fn boxed_clone_preserves_the_technique() {
        let technique: BoxedTechnique = Box::new(FinalCell::new());
        let clone = technique.clone();
        assert_eq!(clone.name(), technique.name());
    }
}
