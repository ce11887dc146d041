//! Game state and core simulation types
//!
//! A `GameState` is one game: created by `GameState::new`, advanced by
//! `tick`, and thrown away when the next game starts.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::food::{Food, FoodSpawner, Placement};
use super::grid::{Cell, GridSpace, Heading};
use super::snake::{CollisionReason, Outcome, SnakeState, WinReason};
use crate::error::ConfigError;
use crate::settings::Settings;

/// Current phase of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Running,
    Lost(CollisionReason),
    Won(WinReason),
}

impl GamePhase {
    pub fn is_running(&self) -> bool {
        matches!(self, GamePhase::Running)
    }

    /// Outcome that ended the game, if it has ended
    pub fn outcome(&self) -> Option<Outcome> {
        match *self {
            GamePhase::Running => None,
            GamePhase::Lost(reason) => Some(Outcome::Collision(reason)),
            GamePhase::Won(reason) => Some(Outcome::Win(reason)),
        }
    }
}

/// Things that happened during a tick, drained by the driver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    FoodEaten { cell: Cell, score: u32 },
    FoodPlaced { cell: Cell },
    GameOver { outcome: Outcome, score: u32 },
}

/// Read-only view for rendering
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot<'a> {
    pub head: Cell,
    pub tail: &'a [Cell],
    pub food: &'a [Cell],
    pub score: u32,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the food spawner was created with
    pub seed: u64,
    pub grid: GridSpace,
    pub snake: SnakeState,
    pub food: Food,
    pub spawner: FoodSpawner,
    pub phase: GamePhase,
    /// Ticks applied while running
    pub time_ticks: u64,
    pub(crate) events: Vec<GameEvent>,
}

impl GameState {
    /// Start a new game with the given settings and seed
    pub fn new(settings: &Settings, seed: u64) -> Result<Self, ConfigError> {
        settings.validate()?;
        let grid = settings.grid()?;
        let snake = SnakeState::new(
            settings.start_cell(),
            settings.initial_length as usize,
            settings.start_heading,
        )
        .with_growth_per_food(settings.growth_per_food);
        let spawner = FoodSpawner::with_attempts(seed, settings.placement_attempts);

        let mut state = Self::from_parts(grid, snake, Food::new(), spawner, seed);
        for _ in 0..settings.food_count {
            state.spawn_food()?;
        }

        log::info!(
            "New game: {}x{} board, length {}, {} food, seed {}",
            grid.width(),
            grid.height(),
            settings.initial_length,
            settings.food_count,
            seed
        );
        Ok(state)
    }

    /// Assemble a running game from existing pieces
    pub fn from_parts(grid: GridSpace, snake: SnakeState, food: Food, spawner: FoodSpawner, seed: u64) -> Self {
        Self {
            seed,
            grid,
            snake,
            food,
            spawner,
            phase: GamePhase::Running,
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    /// Place one more food cell on a free spot.
    ///
    /// Settings were validated, so a free cell exists even when random
    /// sampling misses it; fall back to scanning the board row by row.
    fn spawn_food(&mut self) -> Result<(), ConfigError> {
        let occupied: HashSet<Cell> = self.snake.cells().chain(self.food.cells().iter().copied()).collect();
        let cell = match self.spawner.place(&self.grid, &occupied) {
            Placement::Cell(cell) => Some(cell),
            Placement::BoardFull => {
                log::debug!("Random placement missed, scanning for a free cell");
                first_free_cell(&self.grid, &occupied)
            }
        };

        match cell {
            Some(cell) => {
                self.food.push(cell);
                self.events.push(GameEvent::FoodPlaced { cell });
                Ok(())
            }
            None => Err(ConfigError::NoRoomForFood {
                food_count: self.food.len() as i32 + 1,
                free_cells: self.grid.cell_count() - occupied.len() as i64,
            }),
        }
    }

    pub fn request_heading(&mut self, heading: Heading) {
        if self.phase.is_running() {
            self.snake.request_heading(heading);
        }
    }

    pub fn score(&self) -> u32 {
        self.snake.score()
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            head: self.snake.head(),
            tail: self.snake.tail(),
            food: self.food.cells(),
            score: self.snake.score(),
        }
    }

    /// Drain events recorded since the last call
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

/// First unoccupied cell in row-major order
fn first_free_cell(grid: &GridSpace, occupied: &HashSet<Cell>) -> Option<Cell> {
    (0..grid.height())
        .flat_map(|y| (0..grid.width()).map(move |x| Cell::new(x, y)))
        .find(|cell| !occupied.contains(cell))
}
