//! Common types for the board: rule violations and shot outcomes.

use thiserror::Error;

/// Errors returned by [`Board`](crate::core::board::Board) operations.
///
/// Every variant is a recoverable rule violation: the caller picks another
/// coordinate or placement and tries again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoardError {
    /// Target lies outside the board.
    #[error("that shot is outside the board")]
    OutOfBounds,
    /// Target was already shot, or is known to be empty.
    #[error("you have already shot at that cell")]
    AlreadyShot,
    /// Ship leaves the board, overlaps another ship, or touches one.
    #[error("the ship cannot be placed there")]
    ShipPlacement,
}

/// Result of a legal shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    /// Nothing was hit.
    Missed,
    /// A ship was hit but still has live segments.
    Damaged,
    /// The last live segment of a ship was hit.
    Destroyed,
}

impl ShotOutcome {
    /// Whether the shooter acts again. Any hit keeps the turn.
    pub fn repeats_turn(self) -> bool {
        !matches!(self, ShotOutcome::Missed)
    }
}
