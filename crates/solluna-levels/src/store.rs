use std::collections::HashMap;

use derive_more::{Display, Error};
use solluna_core::Difficulty;
use solluna_generator::LevelGenerator;
use time::OffsetDateTime;

use crate::LevelRecord;

/// Error from a level store backend.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum StoreError {
    /// The backend cannot be reached right now.
    ///
    /// Callers surface this as a try-again-later advisory; the engine does
    /// not retry on its own.
    #[display("level store unavailable: {reason}")]
    Unavailable {
        /// What the backend reported.
        reason: String,
    },
}

/// Keyed storage for generated levels.
///
/// `put` is an upsert and the last write wins, so two callers racing to
/// materialize the same id is harmless.
pub trait LevelStore {
    /// Looks up a level by id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] when the backend cannot answer.
    fn get(&self, id: u32) -> Result<Option<LevelRecord>, StoreError>;

    /// Inserts or replaces a level.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] when the backend cannot answer.
    fn put(&mut self, record: &LevelRecord) -> Result<(), StoreError>;
}

/// In-memory [`LevelStore`] backed by a `HashMap`. Never fails.
#[derive(Debug, Clone, Default)]
pub struct MemoryLevelStore {
    records: HashMap<u32, LevelRecord>,
}

impl MemoryLevelStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored levels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` when nothing has been stored yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl LevelStore for MemoryLevelStore {
    fn get(&self, id: u32) -> Result<Option<LevelRecord>, StoreError> {
        Ok(self.records.get(&id).cloned())
    }

    fn put(&mut self, record: &LevelRecord) -> Result<(), StoreError> {
        self.records.insert(record.id, record.clone());
        Ok(())
    }
}

/// Fetches the level for `id`, generating and storing it on a miss.
///
/// The difficulty comes from the level number cycle, so level 1 is easy and
/// every fifth level after 5 is very hard again. Freshly created levels are
/// stamped with the current UTC time and written back before being
/// returned.
///
/// # Errors
///
/// Returns [`StoreError`] when the store cannot be read or written; the
/// level is not generated in that case, or not kept if the write fails.
pub fn ensure_level<S>(
    store: &mut S,
    id: u32,
    generator: &LevelGenerator<'_>,
) -> Result<LevelRecord, StoreError>
where
    S: LevelStore + ?Sized,
{
    if let Some(record) = store.get(id)? {
        return Ok(record);
    }

    let difficulty = Difficulty::for_level(id);
    let level = generator.generate(difficulty);
    let record = LevelRecord::from_generated(id, &level, OffsetDateTime::now_utc());
    log::info!("created level {id} ({difficulty}) from seed {}", level.seed);
    store.put(&record)?;
    Ok(record)
}
