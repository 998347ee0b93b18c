//! Step vectors used to walk across the board.

use crate::Color;

/// A column/row step applied to a [`Position`](crate::Position).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Direction {
    pub column_step: i8,
    pub row_step: i8,
}

impl Direction {
    pub const UP: Direction = Direction::new(0, 1);
    pub const DOWN: Direction = Direction::new(0, -1);
    pub const LEFT: Direction = Direction::new(-1, 0);
    pub const RIGHT: Direction = Direction::new(1, 0);
    pub const UP_RIGHT: Direction = Direction::new(1, 1);
    pub const DOWN_RIGHT: Direction = Direction::new(1, -1);
    pub const UP_LEFT: Direction = Direction::new(-1, 1);
    pub const DOWN_LEFT: Direction = Direction::new(-1, -1);

    /// Rook lines.
    pub const ORTHOGONAL: [Direction; 4] =
        [Direction::UP, Direction::DOWN, Direction::LEFT, Direction::RIGHT];

    /// Bishop lines.
    pub const DIAGONAL: [Direction; 4] = [
        Direction::UP_RIGHT,
        Direction::DOWN_RIGHT,
        Direction::UP_LEFT,
        Direction::DOWN_LEFT,
    ];

    /// King and queen lines.
    pub const ALL: [Direction; 8] = [
        Direction::UP,
        Direction::DOWN,
        Direction::LEFT,
        Direction::RIGHT,
        Direction::UP_RIGHT,
        Direction::DOWN_RIGHT,
        Direction::UP_LEFT,
        Direction::DOWN_LEFT,
    ];

    /// The eight L-shaped knight jumps.
    pub const KNIGHT: [Direction; 8] = [
        Direction::new(1, 2),
        Direction::new(1, -2),
        Direction::new(-1, 2),
        Direction::new(-1, -2),
        Direction::new(2, 1),
        Direction::new(2, -1),
        Direction::new(-2, 1),
        Direction::new(-2, -1),
    ];

    #[inline]
    pub const fn new(column_step: i8, row_step: i8) -> Self {
        Direction {
            column_step,
            row_step,
        }
    }

    /// The straight-ahead pawn step for `color`.
    #[inline]
    pub const fn forward(color: Color) -> Self {
        Direction::new(0, color.pawn_direction())
    }

    /// The two pawn capture steps for `color`.
    #[inline]
    pub const fn forward_diagonals(color: Color) -> [Direction; 2] {
        let row_step = color.pawn_direction();
        [Direction::new(-1, row_step), Direction::new(1, row_step)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pawn_steps_follow_color() {
        assert_eq!(Direction::forward(Color::White), Direction::UP);
        assert_eq!(Direction::forward(Color::Black), Direction::DOWN);
        assert_eq!(
            Direction::forward_diagonals(Color::Black),
            [Direction::DOWN_LEFT, Direction::DOWN_RIGHT]
        );
    }

    #[test]
    fn knight_jumps_are_l_shaped() {
        for jump in Direction::KNIGHT {
            let (c, r) = (jump.column_step.abs(), jump.row_step.abs());
            assert!((c, r) == (1, 2) || (c, r) == (2, 1));
        }
    }

    #[test]
    fn all_is_orthogonal_plus_diagonal() {
        for d in Direction::ORTHOGONAL.iter().chain(Direction::DIAGONAL.iter()) {
            assert!(Direction::ALL.contains(d));
        }
    }
}
