//! Ship definitions: placement geometry and remaining lives.

use rand::distr::{Distribution, StandardUniform};
use rand::Rng;

use crate::core::common::BoardError;
use crate::core::coordinate::Coordinate;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Extends along `x`, down the rows.
    Horizontal,
    /// Extends along `y`, across the columns.
    Vertical,
}

impl Distribution<Orientation> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Orientation {
        if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }
}

/// A ship anchored at its bow, tracking how many undamaged segments remain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ship {
    bow: Coordinate,
    length: usize,
    orientation: Orientation,
    lives: usize,
}

impl Ship {
    /// Create a ship at `bow`.
    ///
    /// Fails with [`BoardError::ShipPlacement`] for a zero-length ship, or one
    /// whose stern would lie beyond the range of a [`Coordinate`].
    pub fn new(
        bow: Coordinate,
        length: usize,
        orientation: Orientation,
    ) -> Result<Self, BoardError> {
        let span = i32::try_from(length)
            .ok()
            .filter(|&span| span > 0)
            .ok_or(BoardError::ShipPlacement)?;
        let stern = match orientation {
            Orientation::Horizontal => bow.offset(span - 1, 0),
            Orientation::Vertical => bow.offset(0, span - 1),
        };
        if stern.is_none() {
            return Err(BoardError::ShipPlacement);
        }
        Ok(Ship {
            bow,
            length,
            orientation,
            lives: length,
        })
    }

    /// The `length` cells covered by the ship, starting at the bow.
    pub fn cells(&self) -> Vec<Coordinate> {
        // `new` guarantees every offset up to the stern is representable.
        (0..self.length)
            .filter_map(|i| i32::try_from(i).ok())
            .filter_map(|i| match self.orientation {
                Orientation::Horizontal => self.bow.offset(i, 0),
                Orientation::Vertical => self.bow.offset(0, i),
            })
            .collect()
    }

    pub fn contains(&self, coord: Coordinate) -> bool {
        self.cells().contains(&coord)
    }

    /// Remove one life. Returns `true` if that was the last one.
    pub(crate) fn take_hit(&mut self) -> bool {
        self.lives = self.lives.saturating_sub(1);
        self.lives == 0
    }

    pub fn is_alive(&self) -> bool {
        self.lives > 0
    }

    pub fn lives(&self) -> usize {
        self.lives
    }

    pub fn bow(&self) -> Coordinate {
        self.bow
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }
}
