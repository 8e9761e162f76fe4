//! Cell coordinates on the board.

use std::fmt;

/// Offsets of the eight cells surrounding a coordinate.
const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A zero-based board position. `x` selects the row and `y` the column.
///
/// Coordinates are signed so that neighbours of edge cells can be expressed;
/// the board decides what is in bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Coordinate shifted by `(dx, dy)`, or `None` if it leaves the `i32` range.
    pub fn offset(self, dx: i32, dy: i32) -> Option<Self> {
        Some(Self::new(self.x.checked_add(dx)?, self.y.checked_add(dy)?))
    }

    /// The surrounding coordinates, including any that fall off the board.
    pub fn neighbors(self) -> impl Iterator<Item = Coordinate> {
        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(move |&(dx, dy)| self.offset(dx, dy))
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Coordinate {
    /// One-based `"row col"`, the same form players type in.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.x + 1, self.y + 1)
    }
}
