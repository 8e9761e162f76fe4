/// Default side length of the board.
pub const BOARD_SIZE: usize = 6;

/// Ship lengths placed on every board, in placement order.
pub const FLEET: [usize; 7] = [3, 2, 2, 1, 1, 1, 1];

/// Placement attempts shared by the whole fleet before generation gives up.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 2000;

/// Total number of ship segments in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = 3 + 2 + 2 + 1 + 1 + 1 + 1;

/// Parameters used to set up a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub size: usize,
    pub fleet: Vec<usize>,
    pub max_attempts: usize,
}

impl GameConfig {
    /// Standard fleet on a board of the given size.
    pub fn with_size(size: usize) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: BOARD_SIZE,
            fleet: FLEET.to_vec(),
            max_attempts: MAX_PLACEMENT_ATTEMPTS,
        }
    }
}
