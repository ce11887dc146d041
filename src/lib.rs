//! Grid Snake - a snake simulation on a bounded board
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, food placement)
//! - `driver`: Fixed-interval pacing, input forwarding, observers
//! - `settings`: Game configuration
//! - `highscores`: Leaderboard of finished games
//! - `autopilot`: Automatic steering for demo mode

pub mod autopilot;
pub mod driver;
pub mod error;
pub mod highscores;
pub mod settings;
pub mod sim;

pub use driver::{Driver, TickObserver};
pub use error::{ConfigError, SettingsError};
pub use highscores::HighScores;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Board size
    pub const DEFAULT_WIDTH: i32 = 40;
    pub const DEFAULT_HEIGHT: i32 = 30;

    /// Head plus five tail segments
    pub const DEFAULT_INITIAL_LENGTH: i32 = 6;
    /// Food cells on the board at once
    pub const DEFAULT_FOOD_COUNT: i32 = 2;
    /// Segments added for every food eaten
    pub const GROWTH_PER_FOOD: u32 = 30;
    /// Random placement attempts before the board counts as full
    pub const MAX_PLACEMENT_ATTEMPTS: u32 = 10_000;

    /// Time between ticks
    pub const DEFAULT_TICK_INTERVAL_MS: u64 = 200;
    /// Maximum ticks per update to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
}
