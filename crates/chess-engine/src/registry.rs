//! The 32 pieces of a standard set.
//!
//! The registry owns every [`Piece`]. Pieces are created once and never
//! destroyed; a captured piece simply has no position. Everything else refers
//! to pieces through [`PieceId`].

use chess_core::{Color, PieceKind, Position};

/// Index of a piece in the [`Registry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(u8);

impl PieceId {
    /// Returns the index (0-31).
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// A single piece: fixed identity plus its current position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    color: Color,
    position: Option<Position>,
}

impl Piece {
    #[inline]
    pub const fn kind(&self) -> PieceKind {
        self.kind
    }

    #[inline]
    pub const fn color(&self) -> Color {
        self.color
    }

    /// Where the piece stands, or `None` if it is off the board.
    #[inline]
    pub const fn position(&self) -> Option<Position> {
        self.position
    }

    #[inline]
    pub const fn is_on_board(&self) -> bool {
        self.position.is_some()
    }
}

/// Owner of all pieces of a game.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Registry {
    pieces: Vec<Piece>,
}

impl Registry {
    /// Number of pieces in a standard set.
    pub const SIZE: usize = 32;

    /// Creates the full set, every piece off the board.
    ///
    /// Black's set comes first, then white's; within a set the order is
    /// king, queen, bishops, knights, rooks, pawns.
    pub fn standard() -> Self {
        let mut pieces = Vec::with_capacity(Self::SIZE);
        for color in Color::ALL {
            for kind in PieceKind::ALL {
                for _ in 0..kind.count_per_side() {
                    pieces.push(Piece {
                        kind,
                        color,
                        position: None,
                    });
                }
            }
        }
        Registry { pieces }
    }

    /// Returns the piece with the given id.
    #[inline]
    pub fn get(&self, id: PieceId) -> &Piece {
        &self.pieces[id.index()]
    }

    #[inline]
    pub(crate) fn set_position(&mut self, id: PieceId, position: Option<Position>) {
        self.pieces[id.index()].position = position;
    }

    /// Iterates over every piece with its id, in registry order.
    pub fn iter(&self) -> impl Iterator<Item = (PieceId, &Piece)> + '_ {
        self.pieces
            .iter()
            .enumerate()
            .map(|(i, piece)| (PieceId(i as u8), piece))
    }

    /// Iterates over the pieces that currently stand on the board.
    pub fn on_board(&self) -> impl Iterator<Item = (PieceId, &Piece)> + '_ {
        self.iter().filter(|(_, piece)| piece.is_on_board())
    }

    /// Returns the king of `color`.
    pub fn king(&self, color: Color) -> Option<PieceId> {
        self.iter()
            .find(|(_, p)| p.kind == PieceKind::King && p.color == color)
            .map(|(id, _)| id)
    }

    /// Returns the first piece of `color` and `kind` that is off the board.
    pub fn first_unplaced(&self, color: Color, kind: PieceKind) -> Option<PieceId> {
        self.iter()
            .find(|(_, p)| p.kind == kind && p.color == color && !p.is_on_board())
            .map(|(id, _)| id)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::standard()
    }
}
