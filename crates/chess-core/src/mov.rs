//! Move representation.

use crate::{CoordinateError, Position};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur when parsing a move string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoveParseError {
    #[error("invalid move '{0}': expected two coordinates such as \"e2e4\"")]
    InvalidFormat(String),

    #[error("invalid move coordinate: {0}")]
    InvalidCoordinate(#[from] CoordinateError),
}

/// A request to move whatever stands on `from` to `to`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Position,
    pub to: Position,
}

impl Move {
    /// Creates a new move.
    #[inline]
    pub const fn new(from: Position, to: Position) -> Self {
        Move { from, to }
    }

    /// Parses a move from a pair of coordinate strings (e.g., `"e2"`, `"e4"`).
    pub fn from_coordinates(from: &str, to: &str) -> Result<Self, MoveParseError> {
        Ok(Move::new(from.parse()?, to.parse()?))
    }

    /// Returns the compact notation for this move (e.g., "e2e4").
    pub fn to_uci(self) -> String {
        format!("{}{}", self.from, self.to)
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    /// Accepts `"e2e4"`, `"e2-e4"` and `"e2 e4"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let compact: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-')
            .collect();
        if !compact.is_ascii() || compact.len() != 4 {
            return Err(MoveParseError::InvalidFormat(s.to_string()));
        }
        let (from, to) = compact.split_at(2);
        Move::from_coordinates(from, to)
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({})", self.to_uci())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_uci())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Column, Row};

    #[test]
    fn move_uci() {
        let e2 = Position::new(Column::E, Row::R2);
        let e4 = Position::new(Column::E, Row::R4);
        assert_eq!(Move::new(e2, e4).to_uci(), "e2e4");
    }

    #[test]
    fn move_parses_all_separators() {
        let expected = Move::new(
            Position::new(Column::E, Row::R2),
            Position::new(Column::E, Row::R4),
        );
        assert_eq!("e2e4".parse::<Move>(), Ok(expected));
        assert_eq!("e2-e4".parse::<Move>(), Ok(expected));
        assert_eq!("e2 e4".parse::<Move>(), Ok(expected));
        assert_eq!(Move::from_coordinates("e2", "e4"), Ok(expected));
    }

    #[test]
    fn move_rejects_bad_input() {
        assert!(matches!(
            "e2".parse::<Move>(),
            Err(MoveParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            "e2e4q".parse::<Move>(),
            Err(MoveParseError::InvalidFormat(_))
        ));
        assert_eq!(
            "e2e9".parse::<Move>(),
            Err(MoveParseError::InvalidCoordinate(CoordinateError::InvalidRow(
                '9'
            )))
        );
        assert_eq!(
            "z2e4".parse::<Move>(),
            Err(MoveParseError::InvalidCoordinate(
                CoordinateError::InvalidColumn('z')
            ))
        );
    }

    #[test]
    fn move_debug_display() {
        let m: Move = "g1f3".parse().unwrap();
        assert_eq!(format!("{:?}", m), "Move(g1f3)");
        assert_eq!(format!("{}", m), "g1f3");
    }
}
