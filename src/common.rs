//! Common types: shot outcomes and the errors returned by the game core.

use crate::grid::GridError;

/// Result of firing at a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotOutcome {
    /// The cell held a ship, which is now sunk.
    Hit,
    /// The cell was water.
    Miss,
}

/// Reasons a game configuration is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Rows or columns are zero.
    ZeroDimension,
    /// Rows or columns exceed the lettered column range.
    TooLarge { max: usize },
    /// At least one boat is required.
    NoBoats,
    /// At least one attempt is required.
    NoAttempts,
    /// More boats than cells on the board.
    TooManyBoats { boats: usize, cells: usize },
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::ZeroDimension => write!(f, "Board needs at least one row and column"),
            ConfigError::TooLarge { max } => write!(f, "Board dimensions are limited to {}", max),
            ConfigError::NoBoats => write!(f, "At least one boat is required"),
            ConfigError::NoAttempts => write!(f, "At least one attempt is required"),
            ConfigError::TooManyBoats { boats, cells } => {
                write!(f, "{} boats do not fit on {} cells", boats, cells)
            }
        }
    }
}

/// Errors returned by Board and GameEngine operations.
#[derive(Debug, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying grid error (e.g., empty grid or index out of bounds).
    GridError(GridError),
    /// Configuration failed validation.
    Config(ConfigError),
    /// Ship placement overlaps another ship.
    ShipOverlaps,
    /// Shot at a ship that was already sunk.
    AlreadySunk,
    /// The board holds a different number of ships than configured.
    ShipCountMismatch { expected: usize, found: usize },
    /// The board's (rows, cols) differ from the configuration.
    DimensionMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },
    /// Shot fired after the game ended.
    GameOver,
}

impl From<GridError> for BoardError {
    fn from(err: GridError) -> Self {
        BoardError::GridError(err)
    }
}

impl From<ConfigError> for BoardError {
    fn from(err: ConfigError) -> Self {
        BoardError::Config(err)
    }
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::GridError(e) => write!(f, "Grid error: {}", e),
            BoardError::Config(e) => write!(f, "Invalid configuration: {}", e),
            BoardError::ShipOverlaps => write!(f, "Ship placement overlaps with another ship"),
            BoardError::AlreadySunk => write!(f, "That ship is already sunk"),
            BoardError::ShipCountMismatch { expected, found } => {
                write!(f, "Expected {} ships on the board, found {}", expected, found)
            }
            BoardError::DimensionMismatch { expected, found } => write!(
                f,
                "Expected a {}x{} board, found {}x{}",
                expected.0, expected.1, found.0, found.1
            ),
            BoardError::GameOver => write!(f, "The game is already over"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
