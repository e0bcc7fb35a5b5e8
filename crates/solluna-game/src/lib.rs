//! Play sessions for Sun & Moon levels.
//!
//! [`Game`] wraps a generated level in a permissive move controller:
//! clicks cycle cells, rule violations flag cells instead of blocking,
//! undo and reset rewind, and hints come from the deduction solver behind
//! a cooldown. Everything noteworthy is queued as an [`Advisory`] the
//! caller drains for display, and [`star_rating`] scores a finished run.
//!
//! # Example
//!
//! ```
//! use solluna_core::{Difficulty, Position};
//! use solluna_game::{Game, GameStatus};
//! use solluna_generator::{LevelGenerator, PuzzleSeed};
//! use solluna_solver::DeductionSolver;
//!
//! let solver = DeductionSolver::with_all_techniques();
//! let generator = LevelGenerator::new(&solver);
//! let level = generator.generate_with_seed(PuzzleSeed::from_phrase("doc"), Difficulty::Easy);
//! let solution = level.solution.clone();
//!
//! let mut game = Game::new(level);
//! assert_eq!(game.status(), GameStatus::Idle);
//!
//! // Copying the solution into every empty cell finishes the level.
//! for pos in Position::ALL {
//!     if game.cell(pos).is_empty() {
//!         game.place(pos, solution[pos]).unwrap();
//!     }
//! }
//! assert_eq!(game.status(), GameStatus::Solved);
//! assert_eq!(game.star_rating(), 3);
//! ```

pub use self::{
    advisory::{Advisory, Severity},
    cell::CellState,
    cooldown::HINT_COOLDOWN,
    error::GameError,
    game::Game,
    score::star_rating,
    status::GameStatus,
};

mod advisory;
mod cell;
mod cooldown;
mod error;
mod game;
mod score;
mod status;
