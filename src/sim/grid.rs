//! Board geometry: cells, headings and bounds

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// A board cell. `x` grows to the right, `y` grows downward.
pub type Cell = IVec2;

/// Movement direction of the snake's head
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Heading {
    Up,
    Down,
    Left,
    Right,
}

impl Heading {
    pub const ALL: [Heading; 4] = [Heading::Up, Heading::Down, Heading::Left, Heading::Right];

    /// Unit displacement applied to the head each tick
    pub fn vector(self) -> IVec2 {
        match self {
            Heading::Up => IVec2::NEG_Y,
            Heading::Down => IVec2::Y,
            Heading::Left => IVec2::NEG_X,
            Heading::Right => IVec2::X,
        }
    }

    pub fn opposite(self) -> Heading {
        match self {
            Heading::Up => Heading::Down,
            Heading::Down => Heading::Up,
            Heading::Left => Heading::Right,
            Heading::Right => Heading::Left,
        }
    }

    /// True for a 90 degree turn away from `current`
    pub fn is_turn_from(self, current: Heading) -> bool {
        self != current && self != current.opposite()
    }
}

/// Immutable board bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GridSpace {
    width: i32,
    height: i32,
}

impl GridSpace {
    pub fn new(width: i32, height: i32) -> Result<Self, ConfigError> {
        if width <= 0 || height <= 0 {
            return Err(ConfigError::InvalidBoard { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Total number of cells on the board; wider than the sides so it cannot overflow
    pub fn cell_count(&self) -> i64 {
        i64::from(self.width) * i64::from(self.height)
    }

    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        (0..self.width).contains(&cell.x) && (0..self.height).contains(&cell.y)
    }
}
