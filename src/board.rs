//! Hidden board state: ship cells and fired cells, using `BitGrid`.

use crate::common::{BoardError, ShotOutcome};
use crate::config::GameConfig;
use crate::grid::BitGrid;
use core::fmt;
use rand::Rng;

/// What a single cell shows to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// Not fired at yet.
    Unknown,
    /// Fired at, nothing there.
    Water,
    /// Fired at, ship sunk.
    Sunk,
    /// Ship not yet found; only shown when the board is revealed.
    Ship,
}

/// Main board state: ship placements and every cell fired at.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    ships: BitGrid,
    shots: BitGrid,
}

impl Board {
    /// Create an empty board (no ships placed).
    pub fn new(rows: usize, cols: usize) -> Result<Self, BoardError> {
        let empty = BitGrid::new(rows, cols)?;
        Ok(Board {
            ships: empty.clone(),
            shots: empty,
        })
    }

    /// Place `config.boats` ships on distinct cells drawn uniformly at random.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, config: &GameConfig) -> Result<Self, BoardError> {
        config.validate()?;
        let mut board = Board::new(config.rows, config.cols)?;
        for idx in rand::seq::index::sample(rng, config.cells(), config.boats) {
            // sampled indices are always below `cells()`
            if let Some((r, c)) = board.ships.coords_of(idx) {
                board.place_ship(r, c)?;
            }
        }
        log::debug!(
            "placed {} ships on a {}x{} board",
            board.ship_count(),
            config.rows,
            config.cols
        );
        Ok(board)
    }

    pub fn rows(&self) -> usize {
        self.ships.rows()
    }

    pub fn cols(&self) -> usize {
        self.ships.cols()
    }

    /// Place a single-cell ship at (row, col).
    pub fn place_ship(&mut self, row: usize, col: usize) -> Result<(), BoardError> {
        if self.ships.get(row, col)? {
            return Err(BoardError::ShipOverlaps);
        }
        self.ships.set(row, col)?;
        Ok(())
    }

    /// Number of ships placed, sunk or not.
    pub fn ship_count(&self) -> usize {
        self.ships.count_ones()
    }

    /// Occupancy of all ships.
    pub fn ships(&self) -> &BitGrid {
        &self.ships
    }

    /// Every cell fired at.
    pub fn shots(&self) -> &BitGrid {
        &self.shots
    }

    /// Cells where a ship was sunk.
    pub fn hits(&self) -> BitGrid {
        &self.ships & &self.shots
    }

    /// Fire at (row, col). Water may be fired at again; a sunk ship may not.
    pub fn fire(&mut self, row: usize, col: usize) -> Result<ShotOutcome, BoardError> {
        let ship = self.ships.get(row, col)?;
        let fired = self.shots.get(row, col)?;
        if ship && fired {
            return Err(BoardError::AlreadySunk);
        }
        self.shots.set(row, col)?;
        Ok(if ship {
            ShotOutcome::Hit
        } else {
            ShotOutcome::Miss
        })
    }

    /// The view of (row, col); `reveal` exposes ships that were never hit.
    pub fn cell(&self, row: usize, col: usize, reveal: bool) -> Result<Cell, BoardError> {
        let ship = self.ships.get(row, col)?;
        let fired = self.shots.get(row, col)?;
        Ok(match (ship, fired) {
            (true, true) => Cell::Sunk,
            (false, true) => Cell::Water,
            (true, false) if reveal => Cell::Ship,
            _ => Cell::Unknown,
        })
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  ships: {:?},\n  shots: {:?}\n}}",
            self.ships, self.shots
        )
    }
}
