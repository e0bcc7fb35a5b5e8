//! Core board vocabulary and rules for Solluna puzzles.
//!
//! A board is a 6×6 grid where every cell is empty or holds one of two
//! symbols, sun or moon. A complete board is valid when every row and column
//! holds exactly three of each symbol and no three consecutive cells in a
//! row or column share a symbol.
//!
//! This crate provides the board types ([`SymbolGrid`], [`Position`],
//! [`Line`], [`PositionSet`], [`Symbol`], [`Difficulty`]) and the stateless
//! rule predicates ([`rules`]) that the solver, generator, and game crates
//! build on.
//!
//! # Examples
//!
//! ```
//! use solluna_core::{SymbolGrid, rules};
//!
//! let solution: SymbolGrid = "
//!     SSMSMM
//!     MMSMSS
//!     SSMSMM
//!     MMSMSS
//!     SSMSMM
//!     MMSMSS
//! "
//! .parse()?;
//! assert!(solution.is_complete());
//! assert!(rules::is_fully_valid(&solution));
//! # Ok::<(), solluna_core::ParseGridError>(())
//! ```

pub use self::{
    difficulty::{Difficulty, ParseDifficultyError},
    grid::{ParseGridError, SymbolGrid},
    line::Line,
    position::{CELL_COUNT, GRID_SIZE, Position, SYMBOL_QUOTA},
    position_set::PositionSet,
    symbol::Symbol,
};

pub mod rules;

mod difficulty;
mod grid;
mod line;
mod position;
mod position_set;
mod symbol;
