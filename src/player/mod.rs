//! Player trait and implementations
//!
//! This module defines the Player trait and provides concrete implementations:
//! - AiPlayer: picks targets uniformly at random
//! - CliPlayer: reads targets typed on a line-based input

use std::io;

use log::debug;
use rand::rngs::SmallRng;
use thiserror::Error;

use crate::core::{Board, BoardError, Coordinate, ShotOutcome};

/// A player could not produce a target at all.
#[derive(Debug, Error)]
pub enum PlayerError {
    /// The input source ran dry.
    #[error("input closed")]
    InputClosed,
    /// The enemy board has no cells to aim at.
    #[error("the board has no cells to target")]
    NoTargets,
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Interface implemented by different player types.
///
/// A Player is responsible for:
/// - Selecting targets to attack
/// - Handling feedback from its shots
pub trait Player {
    /// Choose the next target on a board with `board_size` cells per side.
    /// The choice need not be legal; the board rejects it and the player is asked again.
    fn choose_target(
        &mut self,
        rng: &mut SmallRng,
        board_size: usize,
    ) -> Result<Coordinate, PlayerError>;

    /// Inform the player that `target` was rejected by the enemy board.
    fn handle_rejected(&mut self, _target: Coordinate, _err: &BoardError) {}

    /// Inform the player of the result of a shot that landed.
    fn handle_shot_result(&mut self, _target: Coordinate, _outcome: ShotOutcome) {}

    /// Fire at `enemy` until a shot is accepted and return where it landed and
    /// what it did. Illegal targets are reported and re-chosen; they never cost the turn.
    fn make_move(
        &mut self,
        rng: &mut SmallRng,
        enemy: &mut Board,
    ) -> Result<(Coordinate, ShotOutcome), PlayerError> {
        loop {
            let target = self.choose_target(rng, enemy.size())?;
            match enemy.shoot(target) {
                Ok(outcome) => {
                    self.handle_shot_result(target, outcome);
                    return Ok((target, outcome));
                }
                Err(err) => {
                    debug!("target {} rejected: {}", target, err);
                    self.handle_rejected(target, &err);
                }
            }
        }
    }
}

pub mod ai;
pub use ai::AiPlayer;

pub mod cli;
pub use cli::{parse_target, CliPlayer, InputError};
