//! Seeded level generation.
//!
//! A level is built in two stages. [`SolutionGenerator`] produces a
//! complete board by randomized backtracking, and [`PuzzleCarver`] removes
//! cells from it while a deduction solver confirms the puzzle stays
//! uniquely completable step by step. [`LevelGenerator`] drives both from a
//! single [`PuzzleSeed`], so the same seed and difficulty always reproduce
//! the same level.
//!
//! # Examples
//!
//! ```
//! use solluna_core::Difficulty;
//! use solluna_generator::{LevelGenerator, PuzzleSeed};
//! use solluna_solver::DeductionSolver;
//!
//! let solver = DeductionSolver::with_all_techniques();
//! let generator = LevelGenerator::new(&solver);
//! let seed = PuzzleSeed::from_phrase("doc example");
//! let level = generator.generate_with_seed(seed, Difficulty::Easy);
//! assert!(level.solution.is_complete());
//! assert!(!level.puzzle.is_complete());
//! ```

pub use self::{
    carver::{CarvedPuzzle, PuzzleCarver, removal_target},
    level::{GeneratedLevel, LevelGenerator},
    seed::{ParseSeedError, PuzzleSeed},
    solution::{GeneratedSolution, GenerationMethod, SolutionGenerator},
};

mod carver;
mod level;
mod seed;
mod solution;
