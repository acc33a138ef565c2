use crate::common::ConfigError;
use core::fmt;
use core::str::FromStr;

/// Largest row or column count; columns are lettered `A`..=`Z`.
pub const MAX_DIMENSION: usize = 26;

/// Default interval between end-of-game polls, in milliseconds.
pub const DEFAULT_POLL_MS: u64 = 1000;

/// Board shape and budget for one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
    pub boats: usize,
    pub attempts: u32,
}

impl GameConfig {
    pub const fn new(rows: usize, cols: usize, boats: usize, attempts: u32) -> Self {
        Self {
            rows,
            cols,
            boats,
            attempts,
        }
    }

    /// Number of cells on the board.
    pub fn cells(&self) -> usize {
        self.rows * self.cols
    }

    /// Check that a board with this shape can be generated and played.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::ZeroDimension);
        }
        if self.rows > MAX_DIMENSION || self.cols > MAX_DIMENSION {
            return Err(ConfigError::TooLarge { max: MAX_DIMENSION });
        }
        if self.boats == 0 {
            return Err(ConfigError::NoBoats);
        }
        if self.attempts == 0 {
            return Err(ConfigError::NoAttempts);
        }
        if self.boats > self.cells() {
            return Err(ConfigError::TooManyBoats {
                boats: self.boats,
                cells: self.cells(),
            });
        }
        Ok(())
    }
}

/// Menu presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize, clap::ValueEnum))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum Difficulty {
    Easy,
    Normal,
    Hard,
}

impl Difficulty {
    /// Presets in menu order.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard];

    pub const fn config(self) -> GameConfig {
        match self {
            Difficulty::Easy => GameConfig::new(5, 5, 5, 15),
            Difficulty::Normal => GameConfig::new(10, 10, 10, 50),
            Difficulty::Hard => GameConfig::new(15, 15, 15, 100),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
        }
    }

    /// Menu entry text, e.g. `Easy (5x5) - 5 boats - 15 attempts`.
    pub fn label(self) -> Label {
        Label(self)
    }
}

/// Display helper for a difficulty menu entry.
#[derive(Debug, Clone, Copy)]
pub struct Label(Difficulty);

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cfg = self.0.config();
        write!(
            f,
            "{} ({}x{}) - {} boats - {} attempts",
            self.0.name(),
            cfg.rows,
            cfg.cols,
            cfg.boats,
            cfg.attempts
        )
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Returned when a menu choice names no preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownDifficulty;

impl fmt::Display for UnknownDifficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "choose 1-3, easy, normal or hard")
    }
}

impl FromStr for Difficulty {
    type Err = UnknownDifficulty;

    /// Accepts a preset name or its 1-based menu number.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(n) = s.parse::<usize>() {
            return n
                .checked_sub(1)
                .and_then(|i| Difficulty::ALL.get(i).copied())
                .ok_or(UnknownDifficulty);
        }
        Difficulty::ALL
            .iter()
            .copied()
            .find(|d| d.name().eq_ignore_ascii_case(s))
            .ok_or(UnknownDifficulty)
    }
}
