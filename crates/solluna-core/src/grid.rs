use std::{
    fmt,
    ops::{Index, IndexMut},
    str::FromStr,
};

use crate::{CELL_COUNT, Line, Position, PositionSet, Symbol};

/// A 6×6 board of optionally placed symbols.
///
/// `Some` cells hold a sun or moon, `None` cells are empty. A complete grid
/// that satisfies the placement rules is a solution; a grid with empty cells
/// is a puzzle or an in-play board. The grid itself enforces nothing, rule
/// checks live in [`rules`](crate::rules).
///
/// The string form is one character per cell in row-major order: `S` for
/// sun, `M` for moon, `.` or `_` for empty. Whitespace is ignored when
/// parsing, so fixtures can be written one row per line.
///
/// # Examples
///
/// ```
/// use solluna_core::{Position, Symbol, SymbolGrid};
///
/// let mut grid: SymbolGrid = "
///     SM....
///     ......
///     ......
///     ......
///     ......
///     ......
/// "
/// .parse()?;
/// assert_eq!(grid[Position::new(0, 0)], Some(Symbol::Sun));
/// grid.set(Position::new(2, 0), Some(Symbol::Sun));
/// assert_eq!(grid.empty_count(), 33);
/// # Ok::<(), solluna_core::ParseGridError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolGrid([Option<Symbol>; CELL_COUNT]);

impl Default for SymbolGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolGrid {
    /// Creates an empty grid.
    #[must_use]
    pub const fn new() -> Self {
        Self([None; CELL_COUNT])
    }

    /// Returns the symbol at `pos`, if any.
    #[must_use]
    #[inline]
    pub const fn get(&self, pos: Position) -> Option<Symbol> {
        self.0[pos.index()]
    }

    /// Sets or clears the cell at `pos`.
    #[inline]
    pub const fn set(&mut self, pos: Position, symbol: Option<Symbol>) {
        self.0[pos.index()] = symbol;
    }

    /// Returns `true` if every cell holds a symbol.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.0.iter().all(Option::is_some)
    }

    /// Returns the number of empty cells.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.0.iter().filter(|cell| cell.is_none()).count()
    }

    /// Returns the set of empty cells.
    #[must_use]
    pub fn empty_cells(&self) -> PositionSet {
        Position::ALL
            .into_iter()
            .filter(|&pos| self[pos].is_none())
            .collect()
    }

    /// Counts the cells of `line` holding `symbol`.
    #[must_use]
    pub fn count_in_line(&self, line: Line, symbol: Symbol) -> usize {
        line.cells()
            .into_iter()
            .filter(|&pos| self[pos] == Some(symbol))
            .count()
    }

    /// Counts the empty cells of `line`.
    #[must_use]
    pub fn empty_in_line(&self, line: Line) -> usize {
        line.cells()
            .into_iter()
            .filter(|&pos| self[pos].is_none())
            .count()
    }
}

impl Index<Position> for SymbolGrid {
    type Output = Option<Symbol>;

    #[inline]
    fn index(&self, pos: Position) -> &Self::Output {
        &self.0[pos.index()]
    }
}

impl IndexMut<Position> for SymbolGrid {
    #[inline]
    fn index_mut(&mut self, pos: Position) -> &mut Self::Output {
        &mut self.0[pos.index()]
    }
}

impl fmt::Display for SymbolGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.0 {
            let c = match cell {
                Some(symbol) => symbol.to_char(),
                None => '.',
            };
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

/// Error returned when parsing a [`SymbolGrid`] from a string fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseGridError {
    /// A character other than `S`, `M`, `.`, `_`, or whitespace was found.
    #[display("invalid grid character {found:?}")]
    InvalidChar {
        /// The offending character.
        found: char,
    },
    /// The string did not contain exactly 36 cell characters.
    #[display("expected 36 cells, found {found}")]
    WrongLength {
        /// Number of cell characters found.
        found: usize,
    },
}

impl FromStr for SymbolGrid {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut grid = Self::new();
        let mut count = 0;
        for c in s.chars().filter(|c| !c.is_whitespace()) {
            let symbol = match c {
                '.' | '_' => None,
                c => Some(Symbol::from_char(c).ok_or(ParseGridError::InvalidChar { found: c })?),
            };
            if count < CELL_COUNT {
                grid.0[count] = symbol;
            }
            count += 1;
        }
        if count != CELL_COUNT {
            return Err(ParseGridError::WrongLength { found: count });
        }
        Ok(grid)
    }
}
