//! Game board state: ship placement, shot resolution and sinking.

use std::collections::HashSet;

use log::{debug, info};

use crate::core::common::{BoardError, ShotOutcome};
use crate::core::config::BOARD_SIZE;
use crate::core::coordinate::Coordinate;
use crate::core::grid::{Cell, Grid};
use crate::core::ship::Ship;

/// One side's board.
///
/// `busy` holds every coordinate that may not be used again: cells occupied
/// by ships and their contours while placing, then every cell shot at or
/// revealed during play.
#[derive(Debug, Clone)]
pub struct Board {
    hidden: bool,
    grid: Grid,
    busy: HashSet<Coordinate>,
    ships: Vec<Ship>,
}

impl Board {
    /// Create an empty board. A `hidden` board conceals undamaged ships when rendered.
    pub fn new(size: usize, hidden: bool) -> Self {
        Board {
            hidden,
            grid: Grid::new(size),
            busy: HashSet::new(),
            ships: Vec::new(),
        }
    }

    pub fn size(&self) -> usize {
        self.grid.size()
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Returns `true` if `coord` lies outside the board.
    pub fn is_out(&self, coord: Coordinate) -> bool {
        !self.grid.contains(coord)
    }

    /// Returns `true` if `coord` may not be placed on or shot at.
    pub fn is_busy(&self, coord: Coordinate) -> bool {
        self.busy.contains(&coord)
    }

    /// Number of coordinates currently excluded.
    pub fn busy_count(&self) -> usize {
        self.busy.len()
    }

    /// Display state of the cell at `coord`, `None` if off the board.
    pub fn cell(&self, coord: Coordinate) -> Option<Cell> {
        self.grid.get(coord)
    }

    /// Rows of cells, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.grid.rows()
    }

    /// Ships that still have live segments.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Number of ships still afloat.
    pub fn ship_count(&self) -> usize {
        self.ships.iter().filter(|ship| ship.is_alive()).count()
    }

    /// Place `ship`, reserving its cells and the ring of cells around it.
    /// The board is left untouched if any cell is off the board or busy.
    pub fn add_ship(&mut self, ship: Ship) -> Result<(), BoardError> {
        let cells = ship.cells();
        if cells.iter().any(|&c| self.is_out(c) || self.is_busy(c)) {
            return Err(BoardError::ShipPlacement);
        }
        for &c in &cells {
            self.grid.set(c, Cell::Ship);
            self.busy.insert(c);
        }
        debug!(
            "placed ship of length {} at {} ({:?})",
            ship.length(),
            ship.bow(),
            ship.orientation()
        );
        self.contour(&cells, false);
        self.ships.push(ship);
        Ok(())
    }

    /// Reserve the free cells around `cells`. With `reveal`, they are also
    /// marked as known-empty on the grid.
    fn contour(&mut self, cells: &[Coordinate], reveal: bool) {
        for &c in cells {
            for near in c.neighbors() {
                if self.is_out(near) || self.busy.contains(&near) {
                    continue;
                }
                self.busy.insert(near);
                if reveal {
                    self.grid.set(near, Cell::Contour);
                }
            }
        }
    }

    /// Fire at `coord`.
    ///
    /// Hitting a ship keeps the shooter's turn (see [`ShotOutcome::repeats_turn`]);
    /// destroying one also reveals its contour and removes it from the fleet.
    pub fn shoot(&mut self, coord: Coordinate) -> Result<ShotOutcome, BoardError> {
        if self.is_out(coord) {
            return Err(BoardError::OutOfBounds);
        }
        if self.is_busy(coord) {
            return Err(BoardError::AlreadyShot);
        }
        self.busy.insert(coord);

        let Some(idx) = self
            .ships
            .iter()
            .position(|ship| ship.is_alive() && ship.contains(coord))
        else {
            self.grid.set(coord, Cell::Miss);
            debug!("shot at {} missed", coord);
            return Ok(ShotOutcome::Missed);
        };

        self.grid.set(coord, Cell::Hit);
        if self.ships[idx].take_hit() {
            let sunk = self.ships.remove(idx);
            self.contour(&sunk.cells(), true);
            info!("ship of length {} destroyed at {}", sunk.length(), coord);
            Ok(ShotOutcome::Destroyed)
        } else {
            debug!("ship damaged at {}", coord);
            Ok(ShotOutcome::Damaged)
        }
    }

    /// Forget every excluded coordinate. Called once between placing the fleet
    /// and the first shot, so contour cells become legal targets.
    pub fn reset_targeting_history(&mut self) {
        self.busy.clear();
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new(BOARD_SIZE, false)
    }
}
