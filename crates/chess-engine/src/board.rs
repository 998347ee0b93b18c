//! The 8x8 grid of cells.
//!
//! Occupancy is stored in one direction only: each cell holds the id of the
//! piece standing on it, and each piece stores its own position as plain data.
//! [`Board::place`] and [`Board::clear`] keep both sides in step.

use crate::registry::{PieceId, Registry};
use chess_core::{Color, Position};

/// A view of one cell: its fixed position and the piece on it, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub position: Position,
    pub occupant: Option<PieceId>,
}

impl Cell {
    /// The cell's shade, derived from its position.
    #[inline]
    pub const fn shade(&self) -> Color {
        self.position.shade()
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.occupant.is_none()
    }
}

/// Board occupancy, one slot per position.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Option<PieceId>; 64],
}

impl Board {
    /// A board with no pieces on it.
    pub const fn empty() -> Self {
        Board { cells: [None; 64] }
    }

    /// Returns the cell at `position`.
    #[inline]
    pub fn cell_at(&self, position: Position) -> Cell {
        Cell {
            position,
            occupant: self.occupant(position),
        }
    }

    /// Returns the id of the piece on `position`, if any.
    #[inline]
    pub fn occupant(&self, position: Position) -> Option<PieceId> {
        self.cells[position.index() as usize]
    }

    /// Iterates over all 64 cells, a1 first.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        Position::all().map(|position| self.cell_at(position))
    }

    /// Puts `id` on `position` and records the position on the piece.
    ///
    /// Overwrites whatever occupant the cell had without touching it; callers
    /// clear the destination and the piece's old cell first.
    pub fn place(&mut self, pieces: &mut Registry, id: PieceId, position: Position) {
        self.cells[position.index() as usize] = Some(id);
        pieces.set_position(id, Some(position));
    }

    /// Empties the cell at `position`, taking its occupant off the board.
    ///
    /// Returns the removed piece.
    pub fn clear(&mut self, pieces: &mut Registry, position: Position) -> Option<PieceId> {
        let removed = self.cells[position.index() as usize].take();
        if let Some(id) = removed {
            if pieces.get(id).position() == Some(position) {
                pieces.set_position(id, None);
            }
        }
        removed
    }

    /// Takes every piece off the board.
    pub fn clear_all(&mut self, pieces: &mut Registry) {
        for position in Position::all() {
            self.clear(pieces, position);
        }
    }

    /// Checks that occupancy and piece positions agree in both directions.
    ///
    /// Every occupied cell's piece stands on that cell, and every on-board
    /// piece occupies exactly the cell it records.
    pub fn is_consistent_with(&self, pieces: &Registry) -> bool {
        let cells_agree = self.cells().all(|cell| match cell.occupant {
            Some(id) => pieces.get(id).position() == Some(cell.position),
            None => true,
        });
        let pieces_agree = pieces
            .on_board()
            .all(|(id, piece)| piece.position().and_then(|p| self.occupant(p)) == Some(id));
        cells_agree && pieces_agree
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}
