//! Error types
//!
//! Only game construction can fail. Everything that happens once a game is
//! running (illegal turns, a full board, ticking a finished game) is reported
//! through outcomes instead.

use std::fmt;
use std::io;

/// Invalid game configuration, rejected when a new game is created
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Board width or height is not positive
    InvalidBoard { width: i32, height: i32 },
    /// Snake must have at least a head
    InvalidLength(i32),
    /// At least one food cell is required
    InvalidFoodCount(i32),
    /// The starting body does not fit on the board
    SnakeDoesNotFit { length: i32, width: i32, height: i32 },
    /// Snake and food together need more cells than the board has
    NoRoomForFood { food_count: i32, free_cells: i64 },
    /// Placement attempts or tick interval set to zero
    InvalidTuning(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBoard { width, height } => {
                write!(f, "board must be at least 1x1, got {}x{}", width, height)
            }
            Self::InvalidLength(length) => {
                write!(f, "initial length must be positive, got {}", length)
            }
            Self::InvalidFoodCount(count) => {
                write!(f, "food count must be positive, got {}", count)
            }
            Self::SnakeDoesNotFit {
                length,
                width,
                height,
            } => write!(
                f,
                "a snake of length {} does not fit on a {}x{} board",
                length, width, height
            ),
            Self::NoRoomForFood {
                food_count,
                free_cells,
            } => write!(
                f,
                "no room for {} food cells ({} free cells)",
                food_count, free_cells
            ),
            Self::InvalidTuning(field) => write!(f, "{} must be positive", field),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Failure to load settings from disk
#[derive(Debug)]
pub enum SettingsError {
    Io(io::Error),
    Parse(serde_json::Error),
    Invalid(ConfigError),
}

impl From<io::Error> for SettingsError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e)
    }
}

impl From<ConfigError> for SettingsError {
    fn from(e: ConfigError) -> Self {
        Self::Invalid(e)
    }
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "cannot read settings: {}", e),
            Self::Parse(e) => write!(f, "malformed settings: {}", e),
            Self::Invalid(e) => write!(f, "invalid settings: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Invalid(e) => Some(e),
        }
    }
}
