//! Core types for chess.
//!
//! This crate provides the fundamental value types used by the rules engine:
//! - [`PieceKind`] and [`Color`] for piece identity
//! - [`Position`], [`Column`], and [`Row`] for board coordinates
//! - [`Direction`] tables for stepping across the board
//! - [`Move`] for a from/to pair
//! - [`Layout`] notation for describing piece placement

mod color;
mod direction;
mod layout;
mod mov;
mod piece;
mod position;

pub use color::Color;
pub use direction::Direction;
pub use layout::{Layout, LayoutError, Placement};
pub use mov::{Move, MoveParseError};
pub use piece::PieceKind;
pub use position::{Column, CoordinateError, Position, Row};
