//! Random fleet placement.

use log::{debug, warn};
use rand::Rng;
use thiserror::Error;

use crate::core::board::Board;
use crate::core::common::BoardError;
use crate::core::config::GameConfig;
use crate::core::coordinate::Coordinate;
use crate::core::ship::{Orientation, Ship};

/// Setup failure: the fleet could not be placed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    /// The shared attempt budget ran out before every ship was placed.
    #[error("could not place the fleet: {placed} ship(s) placed after {attempts} failed attempts")]
    AttemptsExhausted { attempts: usize, placed: usize },
    /// The board has no cells, or more per side than a coordinate can address.
    #[error("cannot generate a board of size {size}")]
    InvalidSize { size: usize },
}

/// Place the configured fleet at random on a fresh board.
///
/// A single attempt counter is shared by every ship. After the fleet is in
/// place the targeting history is cleared so contour cells can be shot.
pub fn generate_board<R: Rng + ?Sized>(
    rng: &mut R,
    config: &GameConfig,
    hidden: bool,
) -> Result<Board, GenerateError> {
    if config.size == 0 || i32::try_from(config.size).is_err() {
        return Err(GenerateError::InvalidSize { size: config.size });
    }
    let mut board = Board::new(config.size, hidden);
    let mut attempts = 0;
    for (placed, &length) in config.fleet.iter().enumerate() {
        attempts = place_ship(&mut board, rng, length, attempts, config.max_attempts)
            .map_err(|attempts| GenerateError::AttemptsExhausted { attempts, placed })?;
    }
    debug!(
        "fleet of {} placed after {} failed attempts",
        config.fleet.len(),
        attempts
    );
    board.reset_targeting_history();
    Ok(board)
}

/// Like [`generate_board`], but starts over on a fresh board up to `boards` times.
pub fn generate_board_retrying<R: Rng + ?Sized>(
    rng: &mut R,
    config: &GameConfig,
    hidden: bool,
    boards: usize,
) -> Result<Board, GenerateError> {
    let mut last = None;
    for round in 0..boards.max(1) {
        match generate_board(rng, config, hidden) {
            Ok(board) => return Ok(board),
            Err(e @ GenerateError::InvalidSize { .. }) => return Err(e),
            Err(e) => {
                warn!("board generation round {} failed: {}", round + 1, e);
                last = Some(e);
            }
        }
    }
    Err(last.unwrap_or(GenerateError::AttemptsExhausted {
        attempts: 0,
        placed: 0,
    }))
}

/// Try random placements for one ship of `length`, counting failures on top of
/// `attempts`. Returns the updated count, or `Err` with it once `max_attempts`
/// is reached without a placement. The board size must fit in an `i32`.
fn place_ship<R: Rng + ?Sized>(
    board: &mut Board,
    rng: &mut R,
    length: usize,
    mut attempts: usize,
    max_attempts: usize,
) -> Result<usize, usize> {
    let size = i32::try_from(board.size()).unwrap_or(i32::MAX);
    while attempts < max_attempts {
        let bow = Coordinate::new(rng.random_range(0..size), rng.random_range(0..size));
        let orientation: Orientation = rng.random();
        match Ship::new(bow, length, orientation).and_then(|ship| board.add_ship(ship)) {
            Ok(()) => return Ok(attempts),
            Err(BoardError::ShipPlacement) => attempts += 1,
            Err(e) => {
                debug!("unexpected placement error: {}", e);
                attempts += 1;
            }
        }
    }
    warn!(
        "gave up placing a ship of length {} after {} attempts",
        length, attempts
    );
    Err(attempts)
}
