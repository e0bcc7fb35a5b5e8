use derive_more::{Display, IsVariant};

/// Lifecycle of a play session.
///
/// A session starts `Idle`, becomes `InProgress` on the first move, and
/// settles to `Solved` or `Failed` when the board fills up. `Failed` can be
/// left again through undo or reset; `Solved` is final.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, IsVariant)]
pub enum GameStatus {
    /// No move has been made yet.
    #[default]
    #[display("idle")]
    Idle,
    /// Play is under way and the board is not full.
    #[display("in progress")]
    InProgress,
    /// The board matches the solution and satisfies every rule.
    #[display("solved")]
    Solved,
    /// The board is full but wrong.
    #[display("failed")]
    Failed,
}

impl GameStatus {
    /// Returns `true` once the full board has been evaluated.
    #[must_use]
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Solved | Self::Failed)
    }
}
