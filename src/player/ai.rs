use log::info;
use rand::rngs::SmallRng;
use rand::Rng;

use crate::core::Coordinate;

use super::{Player, PlayerError};

/// Computer player that fires at uniformly random cells.
///
/// It does not remember earlier shots; repeated or known-empty cells are
/// rejected by the board and a new cell is drawn.
#[derive(Debug, Default)]
pub struct AiPlayer;

impl AiPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Player for AiPlayer {
    fn choose_target(
        &mut self,
        rng: &mut SmallRng,
        board_size: usize,
    ) -> Result<Coordinate, PlayerError> {
        let size = match i32::try_from(board_size) {
            Ok(0) => return Err(PlayerError::NoTargets),
            Ok(size) => size,
            Err(_) => i32::MAX,
        };
        let target = Coordinate::new(rng.random_range(0..size), rng.random_range(0..size));
        info!("computer move: {}", target);
        Ok(target)
    }
}
