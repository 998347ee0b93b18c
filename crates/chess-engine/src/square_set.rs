//! Sets of board positions.
//!
//! A square set is a 64-bit integer where each bit represents one position
//! on the board. Destination sets produced by the move generator use it.

use chess_core::Position;
use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// A set of board positions.
///
/// Bit 0 = a1, bit 1 = b1, ..., bit 63 = h8.
#[derive(Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct SquareSet(u64);

impl SquareSet {
    /// Empty set.
    pub const EMPTY: SquareSet = SquareSet(0);

    /// Creates a set with a single position.
    #[inline]
    pub const fn from_position(position: Position) -> Self {
        SquareSet(1u64 << position.index())
    }

    /// Returns true if the set is empty.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the number of positions in the set.
    #[inline]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns true if the given position is in the set.
    #[inline]
    pub const fn contains(self, position: Position) -> bool {
        (self.0 & Self::from_position(position).0) != 0
    }

    /// Adds a position.
    #[inline]
    pub fn insert(&mut self, position: Position) {
        *self |= Self::from_position(position);
    }

    /// Pops and returns the lowest position.
    #[inline]
    pub fn pop_first(&mut self) -> Option<Position> {
        if self.0 == 0 {
            None
        } else {
            let index = self.0.trailing_zeros() as u8;
            self.0 &= self.0 - 1;
            Position::from_index(index)
        }
    }

    /// Iterates positions in a1..h8 order.
    #[inline]
    pub fn iter(self) -> SquareSetIter {
        SquareSetIter(self)
    }
}

impl BitOr for SquareSet {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self::Output {
        SquareSet(self.0 | rhs.0)
    }
}

impl BitOrAssign for SquareSet {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl FromIterator<Position> for SquareSet {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Self {
        let mut set = SquareSet::EMPTY;
        for position in iter {
            set.insert(position);
        }
        set
    }
}

impl fmt::Debug for SquareSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Iterator over the positions in a [`SquareSet`].
pub struct SquareSetIter(SquareSet);

impl Iterator for SquareSetIter {
    type Item = Position;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop_first()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let count = self.0.len();
        (count, Some(count))
    }
}

impl IntoIterator for SquareSet {
    type Item = Position;
    type IntoIter = SquareSetIter;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        SquareSetIter(self)
    }
}
