//! Player color representation.

use crate::Row;

/// Represents the two players in chess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    White = 0,
    Black = 1,
}

impl Color {
    /// Both colors, in the order the piece registry creates their sets.
    pub const ALL: [Color; 2] = [Color::Black, Color::White];

    /// Returns the opposite color.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Flips this color in place.
    #[inline]
    pub fn toggle(&mut self) {
        *self = self.opposite();
    }

    /// Returns the pawn direction for this color (+1 for White, -1 for Black).
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Returns the row pawns of this color start on.
    ///
    /// Only pawns standing on this row may advance two cells.
    #[inline]
    pub const fn pawn_home_row(self) -> Row {
        match self {
            Color::White => Row::R2,
            Color::Black => Row::R7,
        }
    }

    /// Returns the row the pieces of this color start on.
    #[inline]
    pub const fn back_row(self) -> Row {
        match self {
            Color::White => Row::R1,
            Color::Black => Row::R8,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}
