use solluna_core::{Difficulty, SymbolGrid};
use solluna_solver::DeductionSolver;

use crate::{GenerationMethod, PuzzleCarver, PuzzleSeed, SolutionGenerator};

/// One-stop generator for playable levels.
///
/// Runs [`SolutionGenerator`] and [`PuzzleCarver`] back to back on a
/// single seeded random stream, so one [`PuzzleSeed`] pins down the whole
/// level.
///
/// # Examples
///
/// ```
/// use solluna_core::Difficulty;
/// use solluna_generator::{LevelGenerator, PuzzleSeed};
/// use solluna_solver::DeductionSolver;
///
/// let solver = DeductionSolver::with_all_techniques();
/// let generator = LevelGenerator::new(&solver);
/// let seed = PuzzleSeed::from_phrase("repeatable");
/// let a = generator.generate_with_seed(seed, Difficulty::Medium);
/// let b = generator.generate_with_seed(seed, Difficulty::Medium);
/// assert_eq!(a, b);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LevelGenerator<'a> {
    solver: &'a DeductionSolver,
}

impl<'a> LevelGenerator<'a> {
    /// Creates a generator that gates carving with `solver`.
    #[must_use]
    pub const fn new(solver: &'a DeductionSolver) -> Self {
        Self { solver }
    }

    /// Generates a level from a fresh random seed.
    #[must_use]
    pub fn generate(&self, difficulty: Difficulty) -> GeneratedLevel {
        self.generate_with_seed(PuzzleSeed::random(), difficulty)
    }

    /// Generates the level determined by `seed` and `difficulty`.
    #[must_use]
    pub fn generate_with_seed(&self, seed: PuzzleSeed, difficulty: Difficulty) -> GeneratedLevel {
        let mut rng = seed.rng();
        let generated = SolutionGenerator::new().generate(&mut rng);
        let carved = PuzzleCarver::new(self.solver).carve(&generated.grid, difficulty, &mut rng);
        GeneratedLevel {
            puzzle: carved.puzzle,
            solution: generated.grid,
            seed,
            difficulty,
            method: generated.method,
        }
    }
}

/// A generated level: the puzzle, its solution, and how it was made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedLevel {
    /// The carved puzzle served to the player.
    pub puzzle: SymbolGrid,
    /// The unique completion of the puzzle.
    pub solution: SymbolGrid,
    /// Seed that reproduces this level.
    pub seed: PuzzleSeed,
    /// Difficulty the puzzle was carved for.
    pub difficulty: Difficulty,
    /// Strategy that produced the solution board.
    pub method: GenerationMethod,
}
