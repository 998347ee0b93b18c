//! Move generation.
//!
//! Destinations are computed by walking direction vectors from a piece's
//! position. Each kind has a direction table and a maximum travel distance;
//! pawns add the color-dependent push and capture rules.
//!
//! The generator is pseudo-legal: it does not care whether a move would leave
//! the mover's own king attacked. [`GameState`](crate::GameState) layers that
//! test on top.

use crate::board::Board;
use crate::registry::{PieceId, Registry};
use crate::SquareSet;
use chess_core::{Color, Direction, PieceKind, Position};

/// How far a piece may travel along each of its directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reach {
    pub directions: &'static [Direction],
    pub max_distance: u8,
}

impl Reach {
    /// The longest line on the board.
    pub const BOARD_BOUND: u8 = 7;

    /// Direction table and step limit for the non-pawn kinds.
    ///
    /// Pawns have no fixed reach; see [`destinations`].
    pub fn of(kind: PieceKind) -> Option<Reach> {
        let directions: &'static [Direction] = match kind {
            PieceKind::King | PieceKind::Queen => &Direction::ALL,
            PieceKind::Rook => &Direction::ORTHOGONAL,
            PieceKind::Bishop => &Direction::DIAGONAL,
            PieceKind::Knight => &Direction::KNIGHT,
            PieceKind::Pawn => return None,
        };
        let max_distance = if kind.is_slider() {
            Self::BOARD_BOUND
        } else {
            1
        };
        Some(Reach {
            directions,
            max_distance,
        })
    }
}

/// What a step may land on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Landing {
    /// Empty cells, and an opposing piece that ends the walk.
    EmptyOrCapture,
    /// Empty cells only (pawn push).
    EmptyOnly,
    /// An opposing piece only (pawn diagonal).
    CaptureOnly,
}

/// Computes the pseudo-legal destinations of one piece.
///
/// Returns `None` if the piece is off the board.
pub fn destinations(board: &Board, pieces: &Registry, id: PieceId) -> Option<SquareSet> {
    let piece = pieces.get(id);
    let from = piece.position()?;
    let color = piece.color();
    let step = |direction: Direction, max_distance: u8, landing: Landing| {
        walk(board, pieces, from, color, direction, max_distance, landing)
    };

    let set = match Reach::of(piece.kind()) {
        Some(reach) => reach
            .directions
            .iter()
            .fold(SquareSet::EMPTY, |set, &direction| {
                set | step(direction, reach.max_distance, Landing::EmptyOrCapture)
            }),
        None => {
            let [left, right] = Direction::forward_diagonals(color);
            let push = if from.row() == color.pawn_home_row() {
                2
            } else {
                1
            };
            step(left, 1, Landing::CaptureOnly)
                | step(right, 1, Landing::CaptureOnly)
                | step(Direction::forward(color), push, Landing::EmptyOnly)
        }
    };

    Some(set)
}

/// Steps from `from` along `direction` and returns the reachable cells.
///
/// Stops at the board edge, after `max_distance` steps, or at the first
/// occupied cell (which is included only if it holds an opposing piece and
/// `landing` allows captures).
fn walk(
    board: &Board,
    pieces: &Registry,
    from: Position,
    color: Color,
    direction: Direction,
    max_distance: u8,
    landing: Landing,
) -> SquareSet {
    let mut set = SquareSet::EMPTY;
    let mut current = from;
    for _ in 0..max_distance {
        let Some(next) = current.offset(direction) else {
            break;
        };
        match board.occupant(next) {
            Some(other) => {
                if landing != Landing::EmptyOnly && pieces.get(other).color() != color {
                    set.insert(next);
                }
                break;
            }
            None => {
                if landing == Landing::CaptureOnly {
                    break;
                }
                set.insert(next);
            }
        }
        current = next;
    }
    set
}

/// Destination sets for every piece, from one pass over the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestinationTable {
    sets: [Option<SquareSet>; Registry::SIZE],
    order: Vec<PieceId>,
}

impl DestinationTable {
    /// The destinations of `id`, or `None` if it is off the board.
    #[inline]
    pub fn get(&self, id: PieceId) -> Option<SquareSet> {
        self.sets[id.index()]
    }

    /// Returns true if `id` may move to `position`.
    #[inline]
    pub fn allows(&self, id: PieceId, position: Position) -> bool {
        self.get(id).is_some_and(|set| set.contains(position))
    }

    /// Iterates over the on-board pieces and their destinations, kings first.
    pub fn iter(&self) -> impl Iterator<Item = (PieceId, SquareSet)> + '_ {
        self.order
            .iter()
            .filter_map(|&id| self.get(id).map(|set| (id, set)))
    }
}

/// Computes the destination set of every piece on the board.
///
/// Kings are evaluated first, then the remaining pieces in registry order.
/// Off-board pieces get no entry.
pub fn compute_legal_destinations(board: &Board, pieces: &Registry) -> DestinationTable {
    let mut order: Vec<PieceId> = pieces.iter().map(|(id, _)| id).collect();
    order.sort_by_key(|&id| pieces.get(id).kind() != PieceKind::King);

    let mut sets = [None; Registry::SIZE];
    for &id in &order {
        sets[id.index()] = destinations(board, pieces, id);
    }

    DestinationTable { sets, order }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(s: &str) -> Position {
        s.parse().unwrap()
    }

    fn set(positions: &[&str]) -> SquareSet {
        positions.iter().map(|s| pos(s)).collect()
    }

    struct Setup {
        board: Board,
        pieces: Registry,
    }

    impl Setup {
        fn new() -> Self {
            Setup {
                board: Board::empty(),
                pieces: Registry::standard(),
            }
        }

        fn put(&mut self, at: &str, kind: PieceKind, color: Color) -> PieceId {
            let id = self.pieces.first_unplaced(color, kind).unwrap();
            self.board.place(&mut self.pieces, id, pos(at));
            id
        }

        fn destinations(&self, id: PieceId) -> SquareSet {
            destinations(&self.board, &self.pieces, id).unwrap()
        }
    }

    #[test]
    fn reach_table() {
        assert_eq!(Reach::of(PieceKind::King).unwrap().max_distance, 1);
        assert_eq!(Reach::of(PieceKind::Queen).unwrap().directions.len(), 8);
        assert_eq!(Reach::of(PieceKind::Rook).unwrap().directions.len(), 4);
        assert_eq!(Reach::of(PieceKind::Bishop).unwrap().directions.len(), 4);
        assert_eq!(Reach::of(PieceKind::Knight).unwrap().max_distance, 1);
        assert_eq!(Reach::of(PieceKind::Pawn), None);

        for kind in [PieceKind::Queen, PieceKind::Rook, PieceKind::Bishop] {
            assert_eq!(Reach::of(kind).unwrap().max_distance, Reach::BOARD_BOUND);
        }
    }

    #[test]
    fn off_board_piece_has_no_destinations() {
        let s = Setup::new();
        let id = s.pieces.king(Color::White).unwrap();
        assert_eq!(destinations(&s.board, &s.pieces, id), None);
    }

    #[test]
    fn king_in_corner() {
        let mut s = Setup::new();
        let king = s.put("a1", PieceKind::King, Color::White);
        assert_eq!(s.destinations(king), set(&["a2", "b1", "b2"]));
    }

    #[test]
    fn queen_on_empty_board() {
        let mut s = Setup::new();
        let queen = s.put("d4", PieceKind::Queen, Color::White);
        assert_eq!(s.destinations(queen).len(), 27);
    }

    #[test]
    fn bishop_on_empty_board() {
        let mut s = Setup::new();
        let bishop = s.put("c1", PieceKind::Bishop, Color::Black);
        assert_eq!(
            s.destinations(bishop),
            set(&["b2", "a3", "d2", "e3", "f4", "g5", "h6"])
        );
    }

    #[test]
    fn knight_jumps_over_pieces() {
        let mut s = Setup::new();
        let knight = s.put("b1", PieceKind::Knight, Color::White);
        s.put("a2", PieceKind::Pawn, Color::White);
        s.put("b2", PieceKind::Pawn, Color::White);
        s.put("c2", PieceKind::Pawn, Color::White);
        s.put("d2", PieceKind::Pawn, Color::White);
        assert_eq!(s.destinations(knight), set(&["a3", "c3"]));
    }

    #[test]
    fn knight_captures_but_not_own_color() {
        let mut s = Setup::new();
        let knight = s.put("e4", PieceKind::Knight, Color::Black);
        s.put("f6", PieceKind::Pawn, Color::Black);
        s.put("d6", PieceKind::Pawn, Color::White);
        let dests = s.destinations(knight);
        assert_eq!(dests.len(), 7);
        assert!(dests.contains(pos("d6")));
        assert!(!dests.contains(pos("f6")));
    }

    #[test]
    fn rook_stops_before_own_piece() {
        let mut s = Setup::new();
        let rook = s.put("a1", PieceKind::Rook, Color::White);
        s.put("a3", PieceKind::Pawn, Color::White);
        let dests = s.destinations(rook);
        assert!(dests.contains(pos("a2")));
        assert!(!dests.contains(pos("a3")));
        assert!(!dests.contains(pos("a4")));
        assert!(dests.contains(pos("h1")));
    }

    #[test]
    fn rook_stops_on_capture() {
        let mut s = Setup::new();
        let rook = s.put("a1", PieceKind::Rook, Color::White);
        s.put("a3", PieceKind::Pawn, Color::Black);
        let dests = s.destinations(rook);
        assert!(dests.contains(pos("a2")));
        assert!(dests.contains(pos("a3")));
        assert!(!dests.contains(pos("a4")));
    }

    #[test]
    fn white_pawn_double_push_from_home_row() {
        let mut s = Setup::new();
        let pawn = s.put("e2", PieceKind::Pawn, Color::White);
        assert_eq!(s.destinations(pawn), set(&["e3", "e4"]));
    }

    #[test]
    fn black_pawn_double_push_from_home_row() {
        let mut s = Setup::new();
        let pawn = s.put("d7", PieceKind::Pawn, Color::Black);
        assert_eq!(s.destinations(pawn), set(&["d6", "d5"]));
    }

    #[test]
    fn pawn_single_push_off_home_row() {
        let mut s = Setup::new();
        let pawn = s.put("e3", PieceKind::Pawn, Color::White);
        assert_eq!(s.destinations(pawn), set(&["e4"]));
    }

    #[test]
    fn pawn_push_blocked_by_any_piece() {
        let mut s = Setup::new();
        let pawn = s.put("e2", PieceKind::Pawn, Color::White);
        s.put("e3", PieceKind::Knight, Color::Black);
        assert!(s.destinations(pawn).is_empty());
    }

    #[test]
    fn pawn_double_push_needs_both_cells_empty() {
        let mut s = Setup::new();
        let pawn = s.put("e2", PieceKind::Pawn, Color::White);
        s.put("e4", PieceKind::Knight, Color::Black);
        assert_eq!(s.destinations(pawn), set(&["e3"]));
    }

    #[test]
    fn pawn_captures_diagonally_only() {
        let mut s = Setup::new();
        let pawn = s.put("e4", PieceKind::Pawn, Color::White);
        s.put("d5", PieceKind::Pawn, Color::Black);
        s.put("f5", PieceKind::Pawn, Color::White);
        assert_eq!(s.destinations(pawn), set(&["d5", "e5"]));
    }

    #[test]
    fn black_pawn_captures_downward() {
        let mut s = Setup::new();
        let pawn = s.put("e5", PieceKind::Pawn, Color::Black);
        s.put("d4", PieceKind::Pawn, Color::White);
        s.put("e4", PieceKind::Pawn, Color::White);
        s.put("f6", PieceKind::Pawn, Color::White);
        assert_eq!(s.destinations(pawn), set(&["d4"]));
    }

    #[test]
    fn table_orders_kings_first_and_skips_captured() {
        let mut s = Setup::new();
        let rook = s.put("a1", PieceKind::Rook, Color::White);
        let white_king = s.put("e1", PieceKind::King, Color::White);
        let black_king = s.put("e8", PieceKind::King, Color::Black);

        let table = compute_legal_destinations(&s.board, &s.pieces);
        let order: Vec<PieceId> = table.iter().map(|(id, _)| id).collect();

        assert_eq!(order, vec![black_king, white_king, rook]);
        assert!(table.allows(rook, pos("a8")));
        assert!(!table.allows(rook, pos("e1")));
        let unplaced = s.pieces.first_unplaced(Color::Black, PieceKind::Queen).unwrap();
        assert_eq!(table.get(unplaced), None);
    }
}
