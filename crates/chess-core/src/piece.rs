//! Chess piece kinds.

use crate::Color;

/// The six kinds of chess pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    King = 0,
    Queen = 1,
    Bishop = 2,
    Knight = 3,
    Rook = 4,
    Pawn = 5,
}

impl PieceKind {
    /// All piece kinds, in the order a standard set is created.
    pub const ALL: [PieceKind; 6] = [
        PieceKind::King,
        PieceKind::Queen,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Rook,
        PieceKind::Pawn,
    ];

    /// Number of pieces of this kind in one side's standard set.
    pub const fn count_per_side(self) -> usize {
        match self {
            PieceKind::King | PieceKind::Queen => 1,
            PieceKind::Bishop | PieceKind::Knight | PieceKind::Rook => 2,
            PieceKind::Pawn => 8,
        }
    }

    /// Returns the layout letter for this kind with the given color.
    pub const fn to_char(self, color: Color) -> char {
        let c = match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };
        match color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    /// Parses a layout letter into a kind and color.
    pub const fn from_char(c: char) -> Option<(PieceKind, Color)> {
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        let kind = match c.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'r' => PieceKind::Rook,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => return None,
        };
        Some((kind, color))
    }

    /// Returns the display glyph for this kind with the given color.
    ///
    /// White uses the filled glyphs, black the outlined ones.
    pub const fn symbol(self, color: Color) -> char {
        match (self, color) {
            (PieceKind::King, Color::White) => '♚',
            (PieceKind::Queen, Color::White) => '♛',
            (PieceKind::Bishop, Color::White) => '♝',
            (PieceKind::Knight, Color::White) => '♞',
            (PieceKind::Rook, Color::White) => '♜',
            (PieceKind::Pawn, Color::White) => '♟',
            (PieceKind::King, Color::Black) => '♔',
            (PieceKind::Queen, Color::Black) => '♕',
            (PieceKind::Bishop, Color::Black) => '♗',
            (PieceKind::Knight, Color::Black) => '♘',
            (PieceKind::Rook, Color::Black) => '♖',
            (PieceKind::Pawn, Color::Black) => '♙',
        }
    }

    /// Returns true if this piece slides (bishop, rook, or queen).
    #[inline]
    pub const fn is_slider(self) -> bool {
        matches!(self, PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen)
    }
}

impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PieceKind::Pawn => "Pawn",
            PieceKind::Knight => "Knight",
            PieceKind::Bishop => "Bishop",
            PieceKind::Rook => "Rook",
            PieceKind::Queen => "Queen",
            PieceKind::King => "King",
        };
        write!(f, "{}", name)
    }
}
