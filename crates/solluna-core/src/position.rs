use std::fmt;

/// Edge length of the board.
pub const GRID_SIZE: usize = 6;

/// Total number of cells on the board.
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// Occurrences of each symbol required in every complete row and column.
pub const SYMBOL_QUOTA: usize = GRID_SIZE / 2;

/// A cell position on the board.
///
/// `x` is the column (0-5, left to right) and `y` the row (0-5, top to
/// bottom). Positions map to row-major cell indices in the range 0-35.
///
/// # Examples
///
/// ```
/// use solluna_core::Position;
///
/// let pos = Position::new(2, 1);
/// assert_eq!(pos.index(), 8);
/// assert_eq!(Position::from_index(8), pos);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    x: u8,
    y: u8,
}

impl Position {
    /// All positions in row-major order.
    pub const ALL: [Self; CELL_COUNT] = {
        let mut all = [Self { x: 0, y: 0 }; CELL_COUNT];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < CELL_COUNT {
            all[i] = Self {
                x: (i % GRID_SIZE) as u8,
                y: (i / GRID_SIZE) as u8,
            };
            i += 1;
        }
        all
    };

    /// Creates a position from coordinates.
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` is not in the range 0-5.
    #[must_use]
    #[inline]
    pub const fn new(x: u8, y: u8) -> Self {
        assert!(x < 6 && y < 6);
        Self { x, y }
    }

    /// Creates a position from a row-major cell index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-35.
    #[must_use]
    #[inline]
    pub const fn from_index(index: usize) -> Self {
        assert!(index < CELL_COUNT);
        #[expect(clippy::cast_possible_truncation)]
        let (x, y) = ((index % GRID_SIZE) as u8, (index / GRID_SIZE) as u8);
        Self { x, y }
    }

    /// Returns the column coordinate (0-5).
    #[must_use]
    #[inline]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// Returns the row coordinate (0-5).
    #[must_use]
    #[inline]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// Returns the row-major cell index (0-35).
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.y as usize * GRID_SIZE + self.x as usize
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_covers_every_index() {
        assert_eq!(Position::ALL.len(), CELL_COUNT);
        for (i, pos) in Position::ALL.iter().enumerate() {
            assert_eq!(pos.index(), i);
            assert_eq!(Position::from_index(i), *pos);
        }
    }

    #[test]
    fn coordinates_round_trip() {
        for y in 0..6 {
            for x in 0..6 {
                let pos = Position::new(x, y);
                assert_eq!(pos.x(), x);
                assert_eq!(pos.y(), y);
                assert_eq!(Position::from_index(pos.index()), pos);
            }
        }
    }

    #[test]
    #[should_panic(expected = "x < 6 && y < 6")]
    fn out_of_range_coordinate_panics() {
        let _ = Position::new(6, 0);
    }

    #[test]
    #[should_panic(expected = "index < CELL_COUNT")]
    fn out_of_range_index_panics() {
        let _ = Position::from_index(CELL_COUNT);
    }

    #[test]
    fn display_is_coordinate_pair() {
        assert_eq!(Position::new(4, 2).to_string(), "(4, 2)");
    }
}
