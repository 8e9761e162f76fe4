//! Core sea battle rules engine
//!
//! This module contains the board model: coordinates, ships, placement with
//! contours, shot resolution, random fleet generation and the turn loop.

pub mod board;
pub mod common;
pub mod config;
pub mod coordinate;
pub mod game;
pub mod generator;
pub mod grid;
pub mod ship;

// Re-export commonly used types
pub use board::Board;
pub use common::{BoardError, ShotOutcome};
pub use config::*;
pub use coordinate::Coordinate;
pub use game::{Game, GameState, Side, Turn};
pub use generator::{generate_board, generate_board_retrying, GenerateError};
pub use grid::{Cell, Grid};
pub use ship::{Orientation, Ship};
