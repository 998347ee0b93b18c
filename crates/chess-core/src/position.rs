//! Board coordinates.

use crate::{Color, Direction};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur when parsing a coordinate string such as `"e2"`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoordinateError {
    #[error("invalid coordinate '{0}': expected a column letter and a row digit")]
    InvalidLength(String),

    #[error("invalid column '{0}': expected 'a'-'h'")]
    InvalidColumn(char),

    #[error("invalid row '{0}': expected '1'-'8'")]
    InvalidRow(char),
}

/// A column on the chess board, from A to H.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Column {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
    E = 4,
    F = 5,
    G = 6,
    H = 7,
}

impl Column {
    /// All columns in order.
    pub const ALL: [Column; 8] = [
        Column::A,
        Column::B,
        Column::C,
        Column::D,
        Column::E,
        Column::F,
        Column::G,
        Column::H,
    ];

    /// Creates a column from index (0-7).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Column::A),
            1 => Some(Column::B),
            2 => Some(Column::C),
            3 => Some(Column::D),
            4 => Some(Column::E),
            5 => Some(Column::F),
            6 => Some(Column::G),
            7 => Some(Column::H),
            _ => None,
        }
    }

    /// Creates a column from a character ('a'-'h' or 'A'-'H').
    #[inline]
    pub const fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'a' => Some(Column::A),
            'b' => Some(Column::B),
            'c' => Some(Column::C),
            'd' => Some(Column::D),
            'e' => Some(Column::E),
            'f' => Some(Column::F),
            'g' => Some(Column::G),
            'h' => Some(Column::H),
            _ => None,
        }
    }

    /// Returns the index (0-7).
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Returns the character representation.
    #[inline]
    pub const fn to_char(self) -> char {
        (b'a' + self as u8) as char
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A row on the chess board, from 1 to 8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Row {
    R1 = 0,
    R2 = 1,
    R3 = 2,
    R4 = 3,
    R5 = 4,
    R6 = 5,
    R7 = 6,
    R8 = 7,
}

impl Row {
    /// All rows in order.
    pub const ALL: [Row; 8] = [
        Row::R1,
        Row::R2,
        Row::R3,
        Row::R4,
        Row::R5,
        Row::R6,
        Row::R7,
        Row::R8,
    ];

    /// Creates a row from index (0-7).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Row::R1),
            1 => Some(Row::R2),
            2 => Some(Row::R3),
            3 => Some(Row::R4),
            4 => Some(Row::R5),
            5 => Some(Row::R6),
            6 => Some(Row::R7),
            7 => Some(Row::R8),
            _ => None,
        }
    }

    /// Creates a row from a character ('1'-'8').
    #[inline]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '1' => Some(Row::R1),
            '2' => Some(Row::R2),
            '3' => Some(Row::R3),
            '4' => Some(Row::R4),
            '5' => Some(Row::R5),
            '6' => Some(Row::R6),
            '7' => Some(Row::R7),
            '8' => Some(Row::R8),
            _ => None,
        }
    }

    /// Returns the index (0-7).
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Returns the character representation.
    #[inline]
    pub const fn to_char(self) -> char {
        (b'1' + self as u8) as char
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// One of the 64 cells of the board, as a column/row pair.
///
/// Packed row-major starting at a1:
/// - a1 = 0, b1 = 1, ..., h1 = 7
/// - a2 = 8, ..., h8 = 63
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position(u8);

impl Position {
    /// Creates a position from column and row.
    #[inline]
    pub const fn new(column: Column, row: Row) -> Self {
        Position(row.index() * 8 + column.index())
    }

    /// Creates a position from index (0-63).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 64 {
            Some(Position(index))
        } else {
            None
        }
    }

    /// Creates a position from signed column/row indices, `None` if off the board.
    #[inline]
    pub const fn from_coords(column: i8, row: i8) -> Option<Self> {
        if column < 0 || column > 7 || row < 0 || row > 7 {
            None
        } else {
            Some(Position(row as u8 * 8 + column as u8))
        }
    }

    /// Iterates over all 64 positions, a1 first.
    pub fn all() -> impl Iterator<Item = Position> {
        Row::ALL.into_iter().flat_map(|row| {
            Column::ALL
                .into_iter()
                .map(move |column| Position::new(column, row))
        })
    }

    /// Parses a position from algebraic notation (e.g., "e4").
    pub fn from_algebraic(s: &str) -> Result<Self, CoordinateError> {
        let mut chars = s.chars();
        let (Some(c), Some(r), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(CoordinateError::InvalidLength(s.to_string()));
        };
        let column = Column::from_char(c).ok_or(CoordinateError::InvalidColumn(c))?;
        let row = Row::from_char(r).ok_or(CoordinateError::InvalidRow(r))?;
        Ok(Position::new(column, row))
    }

    /// Returns the index (0-63).
    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Returns the column of this position.
    #[inline]
    pub const fn column(self) -> Column {
        match Column::from_index(self.0 % 8) {
            Some(c) => c,
            None => unreachable!(),
        }
    }

    /// Returns the row of this position.
    #[inline]
    pub const fn row(self) -> Row {
        match Row::from_index(self.0 / 8) {
            Some(r) => r,
            None => unreachable!(),
        }
    }

    /// Returns the position one step away in `direction`, or `None` past the edge.
    #[inline]
    pub const fn offset(self, direction: Direction) -> Option<Self> {
        Self::from_coords(
            self.column().index() as i8 + direction.column_step,
            self.row().index() as i8 + direction.row_step,
        )
    }

    /// Returns the shade of the cell at this position.
    ///
    /// a1 is dark; shades alternate along every row and column.
    #[inline]
    pub const fn shade(self) -> Color {
        if (self.column().index() + self.row().index()) % 2 == 0 {
            Color::Black
        } else {
            Color::White
        }
    }

    /// Returns the algebraic notation for this position.
    pub fn to_algebraic(self) -> String {
        format!("{}{}", self.column(), self.row())
    }
}

impl FromStr for Position {
    type Err = CoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::from_algebraic(s.trim())
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position({})", self.to_algebraic())
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}
