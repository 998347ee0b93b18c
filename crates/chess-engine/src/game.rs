//! Turn-based game state.
//!
//! [`GameState`] owns the board, the piece registry and the side to move.
//! A move is legal when its destination is among the piece's generated
//! destinations and, once tentatively made, it does not leave the mover's own
//! king attacked. The tentative move is always reverted when only legality is
//! being tested.

use crate::board::Board;
use crate::check::{is_checkmate, is_king_attacked};
use crate::movegen::{compute_legal_destinations, DestinationTable};
use crate::registry::{Piece, PieceId, Registry};
use crate::{BoardSnapshot, SquareSet};
use chess_core::{Color, Layout, LayoutError, Move, PieceKind, Position};
use thiserror::Error;
use tracing::{debug, trace};

/// Why a move was refused. The game is unchanged after any rejection.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MoveRejection {
    #[error("{0} has no piece on it")]
    NoPiece(Position),

    #[error("the piece on {position} is {color}, but it is not {color}'s turn")]
    WrongTurn { position: Position, color: Color },

    #[error("the {kind} on {from} can't go to {to}")]
    IllegalDestination {
        from: Position,
        to: Position,
        kind: PieceKind,
    },

    #[error("{from} -> {to} would leave the {color} king attacked")]
    SelfCheck {
        from: Position,
        to: Position,
        color: Color,
    },
}

/// Errors that can occur when setting up a game from a layout.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SetupError {
    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error("layout has no {0} king")]
    MissingKing(Color),

    #[error("layout has more than {limit} {color} {kind} pieces")]
    TooManyPieces {
        color: Color,
        kind: PieceKind,
        limit: usize,
    },

    #[error("layout has both kings attacked")]
    BothKingsAttacked,

    #[error("layout has the {0} king attacked while {0} is not to move")]
    IdleKingAttacked(Color),
}

/// The result of a successfully applied move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move was made and the turn passed to the opponent.
    Applied,
    /// The move was made and the given side's king is now attacked.
    Check(Color),
    /// The given side has been mated. The game has been reset to the
    /// standard layout; `final_board` shows the mating position.
    Checkmate {
        loser: Color,
        final_board: BoardSnapshot,
    },
}

/// A move that was applied, as recorded in the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub mov: Move,
    pub kind: PieceKind,
    pub color: Color,
    pub captured: Option<PieceKind>,
}

/// A tentatively made move that can be taken back.
#[derive(Debug, Clone, Copy)]
struct Tentative {
    mover: PieceId,
    from: Position,
    to: Position,
    captured: Option<PieceId>,
}

/// A complete chess game: board, pieces, side to move, and history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    turn: Color,
    board: Board,
    pieces: Registry,
    history: Vec<MoveRecord>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Creates a game with the standard starting layout, white to move.
pub fn new_game() -> GameState {
    GameState::new()
}

impl GameState {
    /// Creates a game with the standard starting layout, white to move.
    pub fn new() -> Self {
        Self::from_layout(&Layout::standard()).expect("standard layout is valid")
    }

    /// Creates a game from a layout.
    ///
    /// The layout must use pieces from one standard set, with exactly one
    /// king per side, and only the side to move may be in check.
    pub fn from_layout(layout: &Layout) -> Result<Self, SetupError> {
        let mut game = GameState {
            turn: layout.turn(),
            board: Board::empty(),
            pieces: Registry::standard(),
            history: Vec::new(),
        };

        for placement in layout.placements() {
            let id = game
                .pieces
                .first_unplaced(placement.color, placement.kind)
                .ok_or(SetupError::TooManyPieces {
                    color: placement.color,
                    kind: placement.kind,
                    limit: placement.kind.count_per_side(),
                })?;
            game.board.place(&mut game.pieces, id, placement.position);
        }

        for color in Color::ALL {
            let on_board = game
                .pieces
                .king(color)
                .is_some_and(|king| game.pieces.get(king).is_on_board());
            if !on_board {
                return Err(SetupError::MissingKing(color));
            }
        }

        let white = game.in_check(Color::White);
        let black = game.in_check(Color::Black);
        match (white, black) {
            (true, true) => return Err(SetupError::BothKingsAttacked),
            (true, false) if game.turn != Color::White => {
                return Err(SetupError::IdleKingAttacked(Color::White))
            }
            (false, true) if game.turn != Color::Black => {
                return Err(SetupError::IdleKingAttacked(Color::Black))
            }
            _ => {}
        }

        Ok(game)
    }

    /// Creates a game from layout notation (e.g. `"4k3/8/8/8/8/8/8/4K3 w"`).
    pub fn from_notation(notation: &str) -> Result<Self, SetupError> {
        Self::from_layout(&Layout::parse(notation)?)
    }

    /// Puts every piece back on its starting cell with white to move.
    pub fn reset(&mut self) {
        *self = Self::new();
        debug!("game reset to the standard layout");
    }

    /// The side to move.
    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn pieces(&self) -> &Registry {
        &self.pieces
    }

    /// Moves applied since the game started or was last reset.
    pub fn move_history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Returns the piece on `position`, if any.
    pub fn piece_at(&self, position: Position) -> Option<&Piece> {
        self.board.occupant(position).map(|id| self.pieces.get(id))
    }

    /// Computes fresh pseudo-legal destinations for every piece.
    pub fn legal_destinations(&self) -> DestinationTable {
        compute_legal_destinations(&self.board, &self.pieces)
    }

    /// Pseudo-legal destinations of the piece on `position`.
    pub fn destinations_from(&self, position: Position) -> Option<SquareSet> {
        let id = self.board.occupant(position)?;
        self.legal_destinations().get(id)
    }

    /// Returns true if the king of `color` is attacked.
    pub fn in_check(&self, color: Color) -> bool {
        is_king_attacked(&self.pieces, &self.legal_destinations(), color)
    }

    /// Tests whether the side to move may play `from -> to`.
    ///
    /// The board is left exactly as it was found.
    pub fn try_move(&mut self, from: Position, to: Position) -> Result<(), MoveRejection> {
        self.probe(from, to, self.turn)
    }

    /// Returns true if the side to move may play `from -> to`.
    pub fn is_legal(&mut self, from: Position, to: Position) -> bool {
        self.try_move(from, to).is_ok()
    }

    /// All legal moves of the side to move.
    pub fn legal_moves(&mut self) -> Vec<Move> {
        let table = self.legal_destinations();
        let candidates: Vec<Move> = table
            .iter()
            .filter_map(|(id, reach)| {
                let piece = self.pieces.get(id);
                let from = piece.position()?;
                (piece.color() == self.turn).then_some((from, reach))
            })
            .flat_map(|(from, reach)| reach.iter().map(move |to| Move::new(from, to)))
            .collect();

        candidates
            .into_iter()
            .filter(|m| self.is_legal(m.from, m.to))
            .collect()
    }

    /// Legality probe for `mover`, independent of whose turn it is.
    pub(crate) fn probe(
        &mut self,
        from: Position,
        to: Position,
        mover: Color,
    ) -> Result<(), MoveRejection> {
        let table = self.legal_destinations();
        let id = self.validate(&table, from, to, mover)?;

        let tentative = self.make_tentative(id, from, to);
        let exposed = self.in_check(mover);
        self.take_back(tentative);

        trace!(%from, %to, %mover, legal = !exposed, "probed move");
        if exposed {
            return Err(MoveRejection::SelfCheck {
                from,
                to,
                color: mover,
            });
        }
        Ok(())
    }

    /// Applies `from -> to` for the side to move.
    ///
    /// On success the turn passes to the opponent, unless the opponent is
    /// mated, in which case the game is reset to the standard layout.
    pub fn apply_move(
        &mut self,
        from: Position,
        to: Position,
    ) -> Result<MoveOutcome, MoveRejection> {
        let mover = self.turn;
        let table = self.legal_destinations();
        let id = match self.validate(&table, from, to, mover) {
            Ok(id) => id,
            Err(reason) => {
                debug!(%from, %to, %reason, "move rejected");
                return Err(reason);
            }
        };

        let tentative = self.make_tentative(id, from, to);
        if self.in_check(mover) {
            self.take_back(tentative);
            let reason = MoveRejection::SelfCheck {
                from,
                to,
                color: mover,
            };
            debug!(%from, %to, %reason, "move rejected");
            return Err(reason);
        }

        let piece = *self.pieces.get(id);
        self.history.push(MoveRecord {
            mov: Move::new(from, to),
            kind: piece.kind(),
            color: mover,
            captured: tentative.captured.map(|c| self.pieces.get(c).kind()),
        });
        debug!(%from, %to, kind = %piece.kind(), color = %mover, "move applied");

        let opponent = mover.opposite();
        if self.in_check(opponent) {
            if is_checkmate(self, opponent) {
                let final_board = self.render();
                debug!(loser = %opponent, "checkmate");
                self.reset();
                return Ok(MoveOutcome::Checkmate {
                    loser: opponent,
                    final_board,
                });
            }
            debug!(color = %opponent, "check");
            self.turn.toggle();
            return Ok(MoveOutcome::Check(opponent));
        }

        self.turn.toggle();
        Ok(MoveOutcome::Applied)
    }

    /// Applies a parsed [`Move`] for the side to move.
    pub fn apply(&mut self, m: Move) -> Result<MoveOutcome, MoveRejection> {
        self.apply_move(m.from, m.to)
    }

    /// A snapshot of cell occupancy for display.
    pub fn render(&self) -> BoardSnapshot {
        BoardSnapshot::capture(&self.board, &self.pieces, self.turn)
    }

    fn validate(
        &self,
        table: &DestinationTable,
        from: Position,
        to: Position,
        mover: Color,
    ) -> Result<PieceId, MoveRejection> {
        let id = self
            .board
            .occupant(from)
            .ok_or(MoveRejection::NoPiece(from))?;
        let piece = self.pieces.get(id);
        if piece.color() != mover {
            return Err(MoveRejection::WrongTurn {
                position: from,
                color: piece.color(),
            });
        }
        if !table.allows(id, to) {
            return Err(MoveRejection::IllegalDestination {
                from,
                to,
                kind: piece.kind(),
            });
        }
        Ok(id)
    }

    fn make_tentative(&mut self, mover: PieceId, from: Position, to: Position) -> Tentative {
        self.board.clear(&mut self.pieces, from);
        let captured = self.board.clear(&mut self.pieces, to);
        self.board.place(&mut self.pieces, mover, to);
        Tentative {
            mover,
            from,
            to,
            captured,
        }
    }

    fn take_back(&mut self, tentative: Tentative) {
        self.board.clear(&mut self.pieces, tentative.to);
        self.board
            .place(&mut self.pieces, tentative.mover, tentative.from);
        if let Some(captured) = tentative.captured {
            self.board.place(&mut self.pieces, captured, tentative.to);
        }
    }
}
