use std::{
    fmt,
    ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not, Sub, SubAssign},
};

use crate::{CELL_COUNT, Position};

const FULL_MASK: u64 = (1 << CELL_COUNT) - 1;

/// A set of board positions backed by a 36-bit mask.
///
/// Used for highlight state: cells on violating lines, cells involved in a
/// hint, clue cells reserved by the carver. All operations are O(1) except
/// iteration.
///
/// # Examples
///
/// ```
/// use solluna_core::{Position, PositionSet};
///
/// let mut set = PositionSet::EMPTY;
/// set.insert(Position::new(0, 0));
/// set.insert(Position::new(5, 5));
/// assert_eq!(set.len(), 2);
/// assert!(set.contains(Position::new(5, 5)));
/// assert!(!set.contains(Position::new(1, 1)));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PositionSet(u64);

impl PositionSet {
    /// The empty set.
    pub const EMPTY: Self = Self(0);

    /// The set containing every position.
    pub const FULL: Self = Self(FULL_MASK);

    /// Creates a set containing a single position.
    #[must_use]
    #[inline]
    pub const fn from_elem(pos: Position) -> Self {
        Self(1 << pos.index())
    }

    /// Returns `true` if the set contains `pos`.
    #[must_use]
    #[inline]
    pub const fn contains(self, pos: Position) -> bool {
        self.0 & (1 << pos.index()) != 0
    }

    /// Inserts a position.
    #[inline]
    pub const fn insert(&mut self, pos: Position) {
        self.0 |= 1 << pos.index();
    }

    /// Removes a position.
    #[inline]
    pub const fn remove(&mut self, pos: Position) {
        self.0 &= !(1 << pos.index());
    }

    /// Returns the number of positions in the set.
    #[must_use]
    #[inline]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns `true` if the set is empty.
    #[must_use]
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns an iterator over the positions in index order.
    #[must_use]
    pub fn iter(self) -> Iter {
        Iter(self.0)
    }
}

impl fmt::Debug for PositionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromIterator<Position> for PositionSet {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Position>,
    {
        let mut set = Self::EMPTY;
        for pos in iter {
            set.insert(pos);
        }
        set
    }
}

impl IntoIterator for PositionSet {
    type Item = Position;
    type IntoIter = Iter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the positions of a [`PositionSet`] in index order.
#[derive(Debug, Clone)]
pub struct Iter(u64);

impl Iterator for Iter {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        if self.0 == 0 {
            return None;
        }
        let index = self.0.trailing_zeros() as usize;
        self.0 &= self.0 - 1;
        Some(Position::from_index(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for Iter {}

impl BitOr for PositionSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for PositionSet {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for PositionSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl BitAndAssign for PositionSet {
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl Sub for PositionSet {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 & !rhs.0)
    }
}

impl SubAssign for PositionSet {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 &= !rhs.0;
    }
}

impl Not for PositionSet {
    type Output = Self;

    fn not(self) -> Self {
        Self(!self.0 & FULL_MASK)
    }
}
