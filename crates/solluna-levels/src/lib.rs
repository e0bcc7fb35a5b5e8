//! Level persistence for Solluna puzzles.
//!
//! Levels live in an external keyed store as `{id, difficulty, puzzle,
//! solution, created_at}` records. This crate provides the domain type
//! ([`LevelRecord`]), its validated wire form ([`LevelRecordDto`]), the
//! [`LevelStore`] abstraction with an in-memory implementation, and
//! [`ensure_level`], the lookup-or-generate entry point that maps level
//! numbers to difficulties.
//!
//! # Examples
//!
//! ```
//! use solluna_generator::LevelGenerator;
//! use solluna_levels::{MemoryLevelStore, ensure_level};
//! use solluna_solver::DeductionSolver;
//!
//! let solver = DeductionSolver::with_all_techniques();
//! let generator = LevelGenerator::new(&solver);
//! let mut store = MemoryLevelStore::new();
//!
//! let level = ensure_level(&mut store, 1, &generator)?;
//! assert_eq!(level.id, 1);
//!
//! // A second lookup returns the stored record instead of regenerating.
//! let again = ensure_level(&mut store, 1, &generator)?;
//! assert_eq!(again, level);
//! # Ok::<(), solluna_levels::StoreError>(())
//! ```

pub use self::{
    record::{CellDto, LevelDtoError, LevelRecord, LevelRecordDto, SymbolDto},
    store::{LevelStore, MemoryLevelStore, StoreError, ensure_level},
};

mod record;
mod store;
