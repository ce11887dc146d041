//! Game settings
//!
//! Loaded from an optional JSON file. Missing fields take their defaults, so a
//! file only needs the values it changes.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{ConfigError, SettingsError};
use crate::sim::{Cell, GridSpace, Heading};

/// Everything needed to start a new game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Board ===
    /// Board width in cells
    pub width: i32,
    /// Board height in cells
    pub height: i32,

    // === Snake ===
    /// Cells in the starting body, head included
    pub initial_length: i32,
    pub start_heading: Heading,
    /// Head start cell; derived from the heading when absent
    pub start: Option<(i32, i32)>,
    /// Segments added per food eaten
    pub growth_per_food: u32,

    // === Food ===
    /// Food cells on the board at any time
    pub food_count: i32,
    /// Random placement attempts before the board counts as full
    pub placement_attempts: u32,

    // === Timing ===
    /// Time between ticks
    pub tick_interval_ms: u64,
    /// Tick right away when a heading is requested and restart the timer
    pub tick_on_input: bool,

    /// RNG seed; a fresh one is drawn for every game when absent
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,

            initial_length: DEFAULT_INITIAL_LENGTH,
            start_heading: Heading::Right,
            start: None,
            growth_per_food: GROWTH_PER_FOOD,

            food_count: DEFAULT_FOOD_COUNT,
            placement_attempts: MAX_PLACEMENT_ATTEMPTS,

            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            tick_on_input: true,

            seed: None,
        }
    }
}

impl Settings {
    /// Parse and validate settings from JSON
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read settings from a JSON file
    pub fn try_load(path: &Path) -> Result<Self, SettingsError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Read settings from a JSON file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        match Self::try_load(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Using default settings: {}", e);
                Self::default()
            }
        }
    }

    pub fn grid(&self) -> Result<GridSpace, ConfigError> {
        GridSpace::new(self.width, self.height)
    }

    /// Where the head starts.
    ///
    /// Without an explicit start the body is laid along the middle row (or
    /// column) with its tip touching the edge behind it.
    pub fn start_cell(&self) -> Cell {
        if let Some((x, y)) = self.start {
            return Cell::new(x, y);
        }
        let len = self.initial_length;
        match self.start_heading {
            Heading::Right => Cell::new(len - 1, self.height / 2),
            Heading::Left => Cell::new(self.width - len, self.height / 2),
            Heading::Down => Cell::new(self.width / 2, len - 1),
            Heading::Up => Cell::new(self.width / 2, self.height - len),
        }
    }

    pub fn tick_interval_secs(&self) -> f32 {
        self.tick_interval_ms as f32 / 1000.0
    }

    /// Check that a game can be built from these settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        let grid = self.grid()?;
        if self.initial_length <= 0 {
            return Err(ConfigError::InvalidLength(self.initial_length));
        }
        if self.food_count <= 0 {
            return Err(ConfigError::InvalidFoodCount(self.food_count));
        }
        if self.placement_attempts == 0 {
            return Err(ConfigError::InvalidTuning("placement_attempts"));
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::InvalidTuning("tick_interval_ms"));
        }

        let head = self.start_cell();
        let back = self.start_heading.opposite().vector();
        let fits = (0..self.initial_length).all(|i| grid.contains(head + back * i));
        if !fits {
            return Err(ConfigError::SnakeDoesNotFit {
                length: self.initial_length,
                width: self.width,
                height: self.height,
            });
        }

        let free_cells = grid.cell_count() - i64::from(self.initial_length);
        if i64::from(self.food_count) > free_cells {
            return Err(ConfigError::NoRoomForFood {
                food_count: self.food_count,
                free_cells,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.growth_per_food, 30);
        assert_eq!(settings.food_count, 2);
        assert_eq!(settings.start_cell(), Cell::new(5, 15));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "width": 12, "height": 8, "seed": 4 }"#).unwrap();
        assert_eq!(settings.width, 12);
        assert_eq!(settings.height, 8);
        assert_eq!(settings.seed, Some(4));
        assert_eq!(settings.initial_length, DEFAULT_INITIAL_LENGTH);
        assert!(settings.tick_on_input);
    }

    #[test]
    fn test_rejects_bad_json() {
        assert!(matches!(
            Settings::from_json("{ width: "),
            Err(SettingsError::Parse(_))
        ));
        assert!(matches!(
            Settings::from_json(r#"{ "food_count": 0 }"#),
            Err(SettingsError::Invalid(ConfigError::InvalidFoodCount(0)))
        ));
    }

    #[test]
    fn test_validate_bounds() {
        let mut settings = Settings {
            width: 0,
            ..Default::default()
        };
        assert!(matches!(settings.validate(), Err(ConfigError::InvalidBoard { .. })));

        settings.width = 10;
        settings.initial_length = 0;
        assert_eq!(settings.validate(), Err(ConfigError::InvalidLength(0)));

        settings.initial_length = 11;
        assert!(matches!(settings.validate(), Err(ConfigError::SnakeDoesNotFit { .. })));
    }

    #[test]
    fn test_explicit_start_must_fit() {
        let settings = Settings {
            width: 10,
            height: 10,
            initial_length: 5,
            start: Some((2, 0)),
            ..Default::default()
        };
        assert!(matches!(settings.validate(), Err(ConfigError::SnakeDoesNotFit { .. })));

        let settings = Settings {
            start: Some((9, 0)),
            ..settings
        };
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_no_room_for_food() {
        let settings = Settings {
            width: 3,
            height: 1,
            initial_length: 2,
            food_count: 2,
            ..Default::default()
        };
        assert_eq!(
            settings.validate(),
            Err(ConfigError::NoRoomForFood {
                food_count: 2,
                free_cells: 1
            })
        );
    }

    #[test]
    fn test_tuning_checks() {
        let settings = Settings {
            placement_attempts: 0,
            ..Default::default()
        };
        assert_eq!(settings.validate(), Err(ConfigError::InvalidTuning("placement_attempts")));

        let settings = Settings {
            tick_interval_ms: 0,
            ..Default::default()
        };
        assert_eq!(settings.validate(), Err(ConfigError::InvalidTuning("tick_interval_ms")));

        // No growth is a legal variant
        let settings = Settings {
            growth_per_food: 0,
            ..Default::default()
        };
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_huge_board_is_valid() {
        let settings = Settings {
            width: 50_000,
            height: 50_000,
            ..Default::default()
        };
        assert!(settings.validate().is_ok());
        assert_eq!(settings.grid().unwrap().cell_count(), 2_500_000_000);
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let settings = Settings::load(Path::new("/nonexistent/grid-snake.json"));
        assert_eq!(settings, Settings::default());
    }
}
