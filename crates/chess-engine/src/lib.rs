//! Chess rules engine.
//!
//! This crate provides:
//! - [`Board`] - the 8x8 grid, holding piece ids
//! - [`Registry`] - the 32 pieces of a standard set
//! - Move generation with per-kind direction tables ([`movegen`])
//! - Check and checkmate detection
//! - [`GameState`] - turn-based move application with self-check prevention
//! - [`BoardSnapshot`] - a read-only view for display layers
//!
//! # Architecture
//!
//! Board occupancy maps each position to a [`PieceId`]; pieces record their
//! own position as plain data. Destination sets are recomputed from scratch
//! whenever they are needed, so nothing cached can go stale.
//!
//! # Example
//!
//! ```
//! use chess_engine::{GameState, MoveOutcome};
//!
//! let mut game = GameState::new();
//! let outcome = game.apply_move("e2".parse().unwrap(), "e4".parse().unwrap());
//! assert_eq!(outcome, Ok(MoveOutcome::Applied));
//! println!("{}", game.render());
//! ```

mod board;
mod check;
mod game;
pub mod movegen;
mod registry;
mod snapshot;
mod square_set;

pub use board::{Board, Cell};
pub use check::{attacked_king, attackers, is_checkmate, is_king_attacked};
pub use game::{new_game, GameState, MoveOutcome, MoveRecord, MoveRejection, SetupError};
pub use movegen::{compute_legal_destinations, destinations, DestinationTable};
pub use registry::{Piece, PieceId, Registry};
pub use snapshot::{BoardSnapshot, CellView, Occupant};
pub use square_set::{SquareSet, SquareSetIter};
