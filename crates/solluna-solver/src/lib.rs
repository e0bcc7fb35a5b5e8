//! Logical deduction over Solluna boards.
//!
//! The solver applies human-style [`technique`]s, each of which finds one
//! forced placement it can justify in words. [`DeductionSolver`] chains
//! techniques until the board is solved or no technique applies, [`hint`]
//! lookup returns the single highest-priority step, and [`search`] answers
//! exact completion-count questions by backtracking.
//!
//! Everything works from the board alone; no stored solution is ever
//! consulted.
//!
//! # Examples
//!
//! ```
//! use solluna_core::SymbolGrid;
//! use solluna_solver::DeductionSolver;
//!
//! let solver = DeductionSolver::with_all_techniques();
//! let mut grid: SymbolGrid = "
//!     SSMSM.
//!     MMSMS.
//!     SSMSM.
//!     MMSMS.
//!     SSMSM.
//!     MMSMS.
//! "
//! .parse()?;
//! let (solved, stats) = solver.solve(&mut grid)?;
//! assert!(solved);
//! assert_eq!(stats.total_steps(), 6);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{
    error::SolverError,
    hint::{Hint, RULES_REMINDER, find_hint},
    solver::{DeductionSolver, DeductionSolverStats},
    step::DeductionStep,
};

pub mod search;
pub mod technique;
pub mod testing;

mod error;
mod hint;
mod solver;
mod step;
