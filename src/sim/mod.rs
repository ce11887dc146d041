//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One cell per tick, paced from outside
//! - Seeded RNG only
//! - No rendering, input or storage dependencies

pub mod food;
pub mod grid;
pub mod snake;
pub mod state;
pub mod tick;

pub use food::{Food, FoodSpawner, Placement};
pub use grid::{Cell, GridSpace, Heading};
pub use snake::{CollisionReason, Outcome, SnakeState, WinReason};
pub use state::{GameEvent, GamePhase, GameState, Snapshot};
pub use tick::tick;
