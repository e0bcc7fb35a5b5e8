use derive_more::IsVariant;
use solluna_core::Symbol;

/// State of one board cell during play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum CellState {
    /// A clue fixed by the puzzle. Never editable.
    Given(Symbol),
    /// A symbol placed by the player.
    Filled(Symbol),
    /// No symbol.
    Empty,
}

impl CellState {
    /// Returns the symbol shown in the cell, if any.
    ///
    /// # Example
    ///
    /// ```
    /// use solluna_core::Symbol;
    /// use solluna_game::CellState;
    ///
    /// assert_eq!(CellState::Given(Symbol::Sun).symbol(), Some(Symbol::Sun));
    /// assert_eq!(CellState::Filled(Symbol::Moon).symbol(), Some(Symbol::Moon));
    /// assert_eq!(CellState::Empty.symbol(), None);
    /// ```
    #[must_use]
    pub const fn symbol(self) -> Option<Symbol> {
        match self {
            Self::Given(symbol) | Self::Filled(symbol) => Some(symbol),
            Self::Empty => None,
        }
    }
}
