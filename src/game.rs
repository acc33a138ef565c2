use crate::{
    board::Board,
    common::{BoardError, ShotOutcome},
    config::GameConfig,
};
use rand::Rng;

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// Core game logic: the hidden board plus the ship and attempt counters.
#[derive(Debug, Clone)]
pub struct GameEngine {
    config: GameConfig,
    board: Board,
    ships_left: usize,
    attempts_left: u32,
    shots_fired: usize,
}

impl GameEngine {
    /// Start a game with ships placed at random.
    pub fn new<R: Rng + ?Sized>(config: GameConfig, rng: &mut R) -> Result<Self, BoardError> {
        let board = Board::random(rng, &config)?;
        Self::with_board(config, board)
    }

    /// Start a game on a board whose ships were placed by the caller.
    pub fn with_board(config: GameConfig, board: Board) -> Result<Self, BoardError> {
        config.validate()?;
        let found = (board.rows(), board.cols());
        if found != (config.rows, config.cols) {
            return Err(BoardError::DimensionMismatch {
                expected: (config.rows, config.cols),
                found,
            });
        }
        if board.ship_count() != config.boats {
            return Err(BoardError::ShipCountMismatch {
                expected: config.boats,
                found: board.ship_count(),
            });
        }
        Ok(Self {
            config,
            board,
            ships_left: config.boats,
            attempts_left: config.attempts,
            shots_fired: 0,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn ships_left(&self) -> usize {
        self.ships_left
    }

    pub fn attempts_left(&self) -> u32 {
        self.attempts_left
    }

    /// Shots accepted so far, hits and misses.
    pub fn shots_fired(&self) -> usize {
        self.shots_fired
    }

    /// Fire at (row, col). A hit sinks a ship; a miss spends an attempt.
    pub fn fire(&mut self, row: usize, col: usize) -> Result<ShotOutcome, BoardError> {
        if self.status() != GameStatus::InProgress {
            return Err(BoardError::GameOver);
        }
        let outcome = self.board.fire(row, col)?;
        match outcome {
            ShotOutcome::Hit => self.ships_left = self.ships_left.saturating_sub(1),
            ShotOutcome::Miss => self.attempts_left = self.attempts_left.saturating_sub(1),
        }
        self.shots_fired += 1;
        Ok(outcome)
    }

    /// Evaluate the current game status. Sinking the last ship wins even
    /// when no attempts remain.
    pub fn status(&self) -> GameStatus {
        if self.ships_left == 0 {
            GameStatus::Won
        } else if self.attempts_left == 0 {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }
}
