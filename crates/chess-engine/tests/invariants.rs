//! Property tests over random play.

use chess_core::{Color, Position};
use chess_engine::{GameState, MoveOutcome, MoveRejection};
use proptest::prelude::*;

fn any_position() -> impl Strategy<Value = Position> {
    (0u8..64).prop_map(|index| Position::from_index(index).unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn random_play_keeps_board_and_pieces_in_sync(
        choices in prop::collection::vec(any::<u16>(), 1..40)
    ) {
        let mut game = GameState::new();
        for choice in choices {
            let moves = game.legal_moves();
            if moves.is_empty() {
                break;
            }
            let m = moves[choice as usize % moves.len()];
            let mover = game.turn();

            let before = game.clone();
            prop_assert_eq!(game.try_move(m.from, m.to), Ok(()));
            prop_assert_eq!(&game, &before);

            let outcome = game.apply(m);
            prop_assert!(game.board().is_consistent_with(game.pieces()));
            match outcome {
                Ok(MoveOutcome::Checkmate { loser, .. }) => {
                    prop_assert_eq!(loser, mover.opposite());
                    prop_assert_eq!(&game, &GameState::new());
                }
                Ok(MoveOutcome::Check(color)) => {
                    prop_assert_eq!(color, mover.opposite());
                    prop_assert_eq!(game.turn(), color);
                    prop_assert!(!game.in_check(mover));
                }
                Ok(MoveOutcome::Applied) => {
                    prop_assert_eq!(game.turn(), mover.opposite());
                    prop_assert!(!game.in_check(mover));
                    prop_assert!(!game.in_check(mover.opposite()));
                }
                Err(reason) => prop_assert!(false, "legal move rejected: {}", reason),
            }
        }
    }

    #[test]
    fn probing_never_changes_the_game(
        warmup in prop::collection::vec(any::<u16>(), 0..12),
        from in any_position(),
        to in any_position(),
    ) {
        let mut game = GameState::new();
        for choice in warmup {
            let moves = game.legal_moves();
            if moves.is_empty() {
                break;
            }
            game.apply(moves[choice as usize % moves.len()]).unwrap();
        }

        let before = game.clone();
        let first = game.try_move(from, to);
        prop_assert_eq!(&game, &before);
        prop_assert_eq!(game.try_move(from, to), first);
        prop_assert_eq!(&game, &before);
    }

    #[test]
    fn opponent_pieces_are_always_rejected(from in any_position(), to in any_position()) {
        let mut game = GameState::new();
        let owner = game.piece_at(from).map(|p| p.color());
        prop_assume!(owner == Some(Color::Black));

        let before = game.clone();
        let rejected = matches!(
            game.apply_move(from, to),
            Err(MoveRejection::WrongTurn { .. })
        );
        prop_assert!(rejected);
        prop_assert_eq!(&game, &before);
    }
}
