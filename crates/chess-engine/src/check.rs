//! Check and checkmate detection.
//!
//! Attacks are read off a [`DestinationTable`]: a king is attacked when an
//! opposing piece lists the king's position among its destinations.

use crate::movegen::DestinationTable;
use crate::registry::{Piece, PieceId, Registry};
use crate::{GameState, SquareSet};
use chess_core::{Color, Move, PieceKind, Position};

/// Returns true if `attacker`, with destinations `reach`, attacks `target`.
///
/// Pawns only attack off their own column. Their generated destinations never
/// include an occupied cell straight ahead, but the column test is kept as an
/// explicit guard.
fn attacks(attacker: &Piece, reach: SquareSet, target: Position) -> bool {
    if !reach.contains(target) {
        return false;
    }
    match attacker.kind() {
        PieceKind::Pawn => attacker
            .position()
            .is_some_and(|from| from.column() != target.column()),
        _ => true,
    }
}

/// Iterates over the opposing pieces that attack `king`.
pub fn attackers<'a>(
    pieces: &'a Registry,
    table: &'a DestinationTable,
    king: PieceId,
) -> impl Iterator<Item = PieceId> + 'a {
    let target = pieces.get(king);
    table.iter().filter_map(move |(id, reach)| {
        let attacker = pieces.get(id);
        let position = target.position()?;
        (attacker.color() != target.color() && attacks(attacker, reach, position)).then_some(id)
    })
}

/// Returns true if the king of `color` is on the board and attacked.
pub fn is_king_attacked(pieces: &Registry, table: &DestinationTable, color: Color) -> bool {
    pieces
        .king(color)
        .is_some_and(|king| attackers(pieces, table, king).next().is_some())
}

/// Returns the first attacked king in registry order (black before white).
///
/// If both kings are attacked only black's is reported. [`GameState`] never
/// relies on this: it asks about one color at a time, and refuses layouts in
/// which both kings are attacked.
pub fn attacked_king(pieces: &Registry, table: &DestinationTable) -> Option<PieceId> {
    Color::ALL
        .into_iter()
        .filter_map(|color| pieces.king(color))
        .find(|&king| attackers(pieces, table, king).next().is_some())
}

/// Returns true if no piece of `color` has a move that leaves its king safe.
///
/// Every destination of every on-board piece of `color` is tried through the
/// full legality probe, regardless of whose turn it is. The game is left
/// exactly as it was found.
pub fn is_checkmate(game: &mut GameState, color: Color) -> bool {
    let table = game.legal_destinations();
    let candidates: Vec<Move> = table
        .iter()
        .filter_map(|(id, reach)| {
            let piece = game.pieces().get(id);
            let from = piece.position()?;
            (piece.color() == color).then_some((from, reach))
        })
        .flat_map(|(from, reach)| reach.iter().map(move |to| Move::new(from, to)))
        .collect();

    !candidates
        .into_iter()
        .any(|m| game.probe(m.from, m.to, color).is_ok())
}
