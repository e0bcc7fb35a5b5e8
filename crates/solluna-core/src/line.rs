use std::fmt;

use crate::{GRID_SIZE, Position, PositionSet};

/// A board line: one full row or one full column.
///
/// Lines are the unit the placement rules act on. [`Line::ALL`] lists rows
/// before columns, which fixes the scan order everywhere a deterministic
/// line order matters (rule checks, deduction priority, hint lookup).
///
/// # Examples
///
/// ```
/// use solluna_core::{Line, Position};
///
/// let row = Line::Row { y: 2 };
/// assert_eq!(row.position_at(4), Position::new(4, 2));
/// assert_eq!(row.to_string(), "row 3");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Line {
    /// A row, identified by its `y` coordinate.
    Row {
        /// Row coordinate (0-5).
        y: u8,
    },
    /// A column, identified by its `x` coordinate.
    Column {
        /// Column coordinate (0-5).
        x: u8,
    },
}

impl Line {
    /// All rows, top to bottom.
    pub const ROWS: [Self; GRID_SIZE] = {
        let mut rows = [Self::Row { y: 0 }; GRID_SIZE];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < GRID_SIZE {
            rows[i] = Self::Row { y: i as u8 };
            i += 1;
        }
        rows
    };

    /// All columns, left to right.
    pub const COLUMNS: [Self; GRID_SIZE] = {
        let mut columns = [Self::Column { x: 0 }; GRID_SIZE];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < GRID_SIZE {
            columns[i] = Self::Column { x: i as u8 };
            i += 1;
        }
        columns
    };

    /// All lines, rows first.
    pub const ALL: [Self; GRID_SIZE * 2] = {
        let mut all = [Self::Row { y: 0 }; GRID_SIZE * 2];
        let mut i = 0;
        while i < GRID_SIZE {
            all[i] = Self::ROWS[i];
            all[GRID_SIZE + i] = Self::COLUMNS[i];
            i += 1;
        }
        all
    };

    /// Returns the absolute position of the `i`-th cell of this line.
    ///
    /// Rows count left to right, columns top to bottom.
    ///
    /// # Panics
    ///
    /// Panics if `i` is not in the range 0-5.
    #[must_use]
    #[inline]
    pub const fn position_at(self, i: u8) -> Position {
        match self {
            Self::Row { y } => Position::new(i, y),
            Self::Column { x } => Position::new(x, i),
        }
    }

    /// Returns the positions of this line, in order.
    #[must_use]
    pub const fn cells(self) -> [Position; GRID_SIZE] {
        let mut cells = [Position::new(0, 0); GRID_SIZE];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < GRID_SIZE {
            cells[i] = self.position_at(i as u8);
            i += 1;
        }
        cells
    }

    /// Returns the set of positions covered by this line.
    #[must_use]
    pub fn mask(self) -> PositionSet {
        self.cells().into_iter().collect()
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Row { y } => write!(f, "row {}", y + 1),
            Self::Column { x } => write!(f, "column {}", x + 1),
        }
    }
}
