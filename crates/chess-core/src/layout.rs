//! Board layout notation: the piece-placement field of FEN plus the side to move.
//!
//! `"rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w"` describes the standard
//! starting layout. The side-to-move field may be omitted, in which case
//! white moves first.

use crate::{Color, Column, PieceKind, Position, Row};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur when parsing layout strings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("invalid layout: expected 1 or 2 parts, got {0}")]
    InvalidPartCount(usize),

    #[error("invalid piece placement: {0}")]
    InvalidPlacement(String),

    #[error("invalid side to move: expected 'w' or 'b', got '{0}'")]
    InvalidTurn(String),
}

/// One piece standing on one position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    pub position: Position,
    pub kind: PieceKind,
    pub color: Color,
}

/// Where every piece stands and whose turn it is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    placements: Vec<Placement>,
    turn: Color,
}

impl Layout {
    /// The standard starting layout.
    pub const STANDARD: &'static str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w";

    /// An empty board with `turn` to move.
    pub fn empty(turn: Color) -> Self {
        Layout {
            placements: Vec::new(),
            turn,
        }
    }

    /// The standard starting layout, white to move.
    pub fn standard() -> Self {
        let mut layout = Layout::empty(Color::White);
        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for color in Color::ALL {
            for (column, kind) in Column::ALL.into_iter().zip(back) {
                layout.placements.push(Placement {
                    position: Position::new(column, color.back_row()),
                    kind,
                    color,
                });
                layout.placements.push(Placement {
                    position: Position::new(column, color.pawn_home_row()),
                    kind: PieceKind::Pawn,
                    color,
                });
            }
        }
        layout
    }

    /// Parses a layout string.
    pub fn parse(layout: &str) -> Result<Self, LayoutError> {
        let parts: Vec<&str> = layout.split_whitespace().collect();

        if parts.is_empty() || parts.len() > 2 {
            return Err(LayoutError::InvalidPartCount(parts.len()));
        }

        let placements = Self::parse_placement(parts[0])?;

        let turn = match parts.get(1).copied() {
            None | Some("w") => Color::White,
            Some("b") => Color::Black,
            Some(other) => return Err(LayoutError::InvalidTurn(other.to_string())),
        };

        Ok(Layout { placements, turn })
    }

    fn parse_placement(placement: &str) -> Result<Vec<Placement>, LayoutError> {
        let rows: Vec<&str> = placement.split('/').collect();
        if rows.len() != 8 {
            return Err(LayoutError::InvalidPlacement(format!(
                "expected 8 rows, got {}",
                rows.len()
            )));
        }

        let mut placements = Vec::new();
        for (i, row) in rows.iter().enumerate() {
            let row_number = 8 - i;
            let row_index = (7 - i) as i8;
            let mut column = 0i8;
            for c in row.chars() {
                if let Some(skip) = c.to_digit(10).filter(|d| (1..=8).contains(d)) {
                    column += skip as i8;
                } else if let Some((kind, color)) = PieceKind::from_char(c) {
                    let position = Position::from_coords(column, row_index).ok_or_else(|| {
                        LayoutError::InvalidPlacement(format!(
                            "row {} has more than 8 cells",
                            row_number
                        ))
                    })?;
                    placements.push(Placement {
                        position,
                        kind,
                        color,
                    });
                    column += 1;
                } else {
                    return Err(LayoutError::InvalidPlacement(format!(
                        "invalid character '{}' in row {}",
                        c, row_number
                    )));
                }
                if column > 8 {
                    return Err(LayoutError::InvalidPlacement(format!(
                        "row {} has more than 8 cells",
                        row_number
                    )));
                }
            }
            if column != 8 {
                return Err(LayoutError::InvalidPlacement(format!(
                    "row {} has {} cells, expected 8",
                    row_number, column
                )));
            }
        }

        Ok(placements)
    }

    /// Puts a piece on `position`, replacing whatever stood there.
    pub fn with(mut self, position: Position, kind: PieceKind, color: Color) -> Self {
        self.placements.retain(|p| p.position != position);
        self.placements.push(Placement {
            position,
            kind,
            color,
        });
        self
    }

    /// All placements, in no particular order.
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// The side to move.
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Returns the kind and color standing on `position`, if any.
    pub fn piece_at(&self, position: Position) -> Option<(PieceKind, Color)> {
        self.placements
            .iter()
            .find(|p| p.position == position)
            .map(|p| (p.kind, p.color))
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::standard()
    }
}

impl FromStr for Layout {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Layout::parse(s)
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in Row::ALL.into_iter().rev() {
            let mut empty = 0;
            for column in Column::ALL {
                match self.piece_at(Position::new(column, row)) {
                    Some((kind, color)) => {
                        if empty > 0 {
                            write!(f, "{}", empty)?;
                            empty = 0;
                        }
                        write!(f, "{}", kind.to_char(color))?;
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                write!(f, "{}", empty)?;
            }
            if row != Row::R1 {
                write!(f, "/")?;
            }
        }
        let turn = match self.turn {
            Color::White => 'w',
            Color::Black => 'b',
        };
        write!(f, " {}", turn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_standard() {
        let layout = Layout::parse(Layout::STANDARD).unwrap();
        assert_eq!(layout.turn(), Color::White);
        assert_eq!(layout.placements().len(), 32);
        assert_eq!(
            layout.piece_at(Position::new(Column::E, Row::R1)),
            Some((PieceKind::King, Color::White))
        );
        assert_eq!(
            layout.piece_at(Position::new(Column::D, Row::R8)),
            Some((PieceKind::Queen, Color::Black))
        );
    }

    #[test]
    fn built_standard_matches_notation() {
        assert_eq!(Layout::standard().to_string(), Layout::STANDARD);
    }

    #[test]
    fn roundtrip() {
        let original = "r1bqkbnr/pppp1ppp/2n5/4p3/2B1P3/8/PPPP1PPP/RNBQK1NR b";
        assert_eq!(Layout::parse(original).unwrap().to_string(), original);
    }

    #[test]
    fn turn_defaults_to_white() {
        let layout = Layout::parse("4k3/8/8/8/8/8/8/4K3").unwrap();
        assert_eq!(layout.turn(), Color::White);
        assert_eq!(layout.to_string(), "4k3/8/8/8/8/8/8/4K3 w");
    }

    #[test]
    fn with_replaces_occupant() {
        let e4 = Position::new(Column::E, Row::R4);
        let layout = Layout::empty(Color::Black)
            .with(e4, PieceKind::Rook, Color::White)
            .with(e4, PieceKind::Knight, Color::Black);
        assert_eq!(layout.placements().len(), 1);
        assert_eq!(layout.piece_at(e4), Some((PieceKind::Knight, Color::Black)));
    }

    #[test]
    fn invalid_part_count() {
        assert_eq!(Layout::parse(""), Err(LayoutError::InvalidPartCount(0)));
        assert_eq!(
            Layout::parse("8/8/8/8/8/8/8/8 w KQkq"),
            Err(LayoutError::InvalidPartCount(3))
        );
    }

    #[test]
    fn invalid_turn() {
        assert!(matches!(
            Layout::parse("8/8/8/8/8/8/8/8 x"),
            Err(LayoutError::InvalidTurn(_))
        ));
    }

    #[test]
    fn invalid_row_count() {
        assert!(matches!(
            Layout::parse("8/8/8/8/8/8/8 w"),
            Err(LayoutError::InvalidPlacement(_))
        ));
    }

    #[test]
    fn invalid_character() {
        assert!(matches!(
            Layout::parse("rnbqkbnr/pppppppp/8/8/8/8/PPPPXPPP/RNBQKBNR w"),
            Err(LayoutError::InvalidPlacement(_))
        ));
    }

    #[test]
    fn wrong_cell_count() {
        assert!(matches!(
            Layout::parse("rnbqkbnrr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w"),
            Err(LayoutError::InvalidPlacement(_))
        ));
        assert!(matches!(
            Layout::parse("7/8/8/8/8/8/8/8 w"),
            Err(LayoutError::InvalidPlacement(_))
        ));
        assert!(matches!(
            Layout::parse("9/8/8/8/8/8/8/8 w"),
            Err(LayoutError::InvalidPlacement(_))
        ));
    }

    #[test]
    fn error_display() {
        let err = LayoutError::InvalidPartCount(3);
        assert!(format!("{}", err).contains('3'));

        let err = LayoutError::InvalidTurn("x".to_string());
        assert!(format!("{}", err).contains('x'));
    }
}
