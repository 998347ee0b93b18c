//! Read-only board snapshots for display.

use crate::board::Board;
use crate::registry::Registry;
use chess_core::{Color, Column, Layout, PieceKind, Position, Row};
use std::fmt;

/// The identity of a piece standing on a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Occupant {
    pub kind: PieceKind,
    pub color: Color,
}

/// One cell as seen by a display layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellView {
    pub position: Position,
    pub shade: Color,
    pub occupant: Option<Occupant>,
}

/// Cell occupancy and side to move at one instant.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BoardSnapshot {
    turn: Color,
    cells: Vec<CellView>,
}

impl BoardSnapshot {
    pub(crate) fn capture(board: &Board, pieces: &Registry, turn: Color) -> Self {
        let cells = board
            .cells()
            .map(|cell| CellView {
                position: cell.position,
                shade: cell.shade(),
                occupant: cell.occupant.map(|id| {
                    let piece = pieces.get(id);
                    Occupant {
                        kind: piece.kind(),
                        color: piece.color(),
                    }
                }),
            })
            .collect();
        BoardSnapshot { turn, cells }
    }

    /// The side to move when the snapshot was taken.
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// All 64 cells, a1 first.
    pub fn cells(&self) -> &[CellView] {
        &self.cells
    }

    pub fn cell(&self, position: Position) -> &CellView {
        &self.cells[position.index() as usize]
    }

    /// Converts the snapshot to layout notation.
    pub fn to_layout(&self) -> Layout {
        self.cells
            .iter()
            .filter_map(|c| c.occupant.map(|o| (c.position, o)))
            .fold(Layout::empty(self.turn), |layout, (position, o)| {
                layout.with(position, o.kind, o.color)
            })
    }
}

impl fmt::Display for BoardSnapshot {
    /// Row 8 on top, framed, with column letters underneath.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  ════════")?;
        for row in Row::ALL.into_iter().rev() {
            write!(f, "{}║", row)?;
            for column in Column::ALL {
                let cell = self.cell(Position::new(column, row));
                let glyph = match (cell.occupant, cell.shade) {
                    (Some(o), _) => o.kind.symbol(o.color),
                    (None, Color::Black) => '◻',
                    (None, Color::White) => '◼',
                };
                write!(f, "{}", glyph)?;
            }
            writeln!(f, "║")?;
        }
        writeln!(f, "  ════════")?;
        writeln!(f, "  abcdefgh")
    }
}
