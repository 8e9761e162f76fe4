//! Square cell matrix holding the visible state of every board cell.

use crate::core::coordinate::Coordinate;

/// Display state of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    /// Untouched water, or a contour cell nobody has revealed yet.
    #[default]
    Empty,
    /// Undamaged ship segment.
    Ship,
    /// Ship segment that has been shot.
    Hit,
    /// Shot that landed in water.
    Miss,
    /// Water next to a destroyed ship, known to be empty.
    Contour,
}

/// A `size × size` grid of [`Cell`]s stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Linear index of `coord`, or `None` when it lies off the grid.
    fn index(&self, coord: Coordinate) -> Option<usize> {
        let x = usize::try_from(coord.x).ok()?;
        let y = usize::try_from(coord.y).ok()?;
        if x < self.size && y < self.size {
            Some(x * self.size + y)
        } else {
            None
        }
    }

    pub fn contains(&self, coord: Coordinate) -> bool {
        self.index(coord).is_some()
    }

    pub fn get(&self, coord: Coordinate) -> Option<Cell> {
        self.index(coord).map(|i| self.cells[i])
    }

    /// Overwrite the cell at `coord`. Off-grid coordinates are ignored.
    pub fn set(&mut self, coord: Coordinate, cell: Cell) {
        if let Some(i) = self.index(coord) {
            self.cells[i] = cell;
        }
    }

    /// Iterate rows top to bottom, each as a slice of cells.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size.max(1))
    }
}
