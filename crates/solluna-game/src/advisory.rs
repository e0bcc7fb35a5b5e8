use derive_more::Display;

use crate::GameError;

/// How prominently an [`Advisory`] should be surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Severity {
    /// Neutral information, such as a hint text.
    #[display("info")]
    Info,
    /// A milestone worth celebrating.
    #[display("success")]
    Success,
    /// Something needs the player's attention.
    #[display("warning")]
    Warning,
}

/// A message the session queues for display.
///
/// Advisories never block play. The engine appends them as events happen
/// and the caller drains the queue with
/// [`Game::take_advisories`](crate::Game::take_advisories), typically once
/// per frame or after each input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Advisory {
    /// Short headline.
    pub title: String,
    /// Full message text.
    pub description: String,
    /// Display prominence.
    pub severity: Severity,
}

impl Advisory {
    /// Creates an advisory.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        severity: Severity,
    ) -> Self {
        Self { title: title.into(), description: description.into(), severity }
    }
}

impl From<&GameError> for Advisory {
    fn from(error: &GameError) -> Self {
        let title = match error {
            GameError::LockedCell { .. } => "Locked cell",
            GameError::NothingToUndo => "Nothing to undo",
            GameError::HintCooldown { .. } => "Hint not ready",
            GameError::NoEmptyCells => "No empty cells",
            GameError::InfeasibleBoard(_) => "No hint possible",
            GameError::Finished { .. } => "Level finished",
            GameError::IncompatibleParts { .. } => "Invalid level",
        };
        Self::new(title, error.to_string(), Severity::Warning)
    }
}
